use clap::{Parser, Subcommand};
use tiffin_app::{config::AppConfig, context::AppContext};

mod admin;
mod menu;
mod order;
mod slots;
mod student;

#[derive(Debug, Parser)]
#[command(name = "tiffin", about = "Order ahead from the campus canteen", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    config: AppConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Browse the menu
    Menu(menu::MenuArgs),
    /// Show pickup slot availability
    Slots,
    /// Save who is ordering
    Register(student::RegisterArgs),
    /// Show or clear the saved identity
    Whoami(student::WhoamiArgs),
    /// Build and place an order
    Order(order::OrderArgs),
    /// Staff views over placed orders
    Admin(admin::AdminCommand),
}

impl Cli {
    pub(crate) fn config(&self) -> &AppConfig {
        &self.config
    }

    pub(crate) async fn run(self) -> Result<(), String> {
        let context = AppContext::from_config(&self.config)
            .map_err(|error| format!("failed to initialise the application: {error}"))?;

        match self.command {
            Commands::Menu(args) => menu::run(&context, args).await,
            Commands::Slots => slots::run(&context).await,
            Commands::Register(args) => student::register(&context, args),
            Commands::Whoami(args) => student::whoami(&context, args),
            Commands::Order(args) => order::run(&context, args).await,
            Commands::Admin(command) => admin::run(&context, command).await,
        }
    }
}
