use std::io;

use tiffin::reports;
use tiffin_app::context::AppContext;

pub(crate) async fn run(context: &AppContext) -> Result<(), String> {
    let slots = context
        .slots
        .list()
        .await
        .map_err(|error| format!("failed to fetch time slots: {error}"))?;

    if slots.is_empty() {
        println!("no pickup slots published");
        return Ok(());
    }

    let mut out = io::stdout().lock();
    reports::write_slot_usage_table(&mut out, &slots)
        .map_err(|error| format!("failed to render time slots: {error}"))
}
