use std::io;

use clap::Args;
use tiffin::{menu::Category, reports};
use tiffin_app::context::AppContext;

#[derive(Debug, Args)]
pub(crate) struct MenuArgs {
    /// Show one category only
    #[arg(long, value_enum)]
    category: Option<Category>,
}

pub(crate) async fn run(context: &AppContext, args: MenuArgs) -> Result<(), String> {
    let items = context
        .catalog
        .list(args.category)
        .await
        .map_err(|error| format!("failed to fetch the menu: {error}"))?;

    if items.is_empty() {
        println!("no menu items published");
        return Ok(());
    }

    let mut out = io::stdout().lock();
    reports::write_menu_table(&mut out, &items)
        .map_err(|error| format!("failed to render the menu: {error}"))
}
