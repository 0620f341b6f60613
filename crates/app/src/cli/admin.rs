use std::io;

use clap::{Args, Subcommand};
use jiff::Timestamp;
use tiffin::{
    order::{Order, OrderStatus},
    reports::{self, OrderQuery},
};
use tiffin_app::{context::AppContext, domain::admin::AdminService};

#[derive(Debug, Args)]
pub(crate) struct AdminCommand {
    #[command(subcommand)]
    command: AdminSubcommand,
}

#[derive(Debug, Subcommand)]
enum AdminSubcommand {
    /// List orders, optionally filtered
    Orders(OrdersArgs),
    /// Advance an order's workflow status
    SetStatus(SetStatusArgs),
    /// Show the kitchen's queue grouped by slot
    Kitchen,
    /// Show headline figures
    Stats,
    /// Show slot utilization
    Slots,
}

#[derive(Debug, Args)]
struct OrdersArgs {
    /// Match against student name, class, or order number
    #[arg(long)]
    search: Option<String>,

    /// Keep only one status
    #[arg(long, value_enum)]
    status: Option<OrderStatus>,
}

#[derive(Debug, Args)]
struct SetStatusArgs {
    /// Backend id of the order
    #[arg(long)]
    order_id: String,

    /// New workflow status
    #[arg(long, value_enum)]
    status: OrderStatus,
}

pub(crate) async fn run(context: &AppContext, command: AdminCommand) -> Result<(), String> {
    let service = AdminService::new(context.orders.clone(), context.slots.clone());

    match command.command {
        AdminSubcommand::Orders(args) => orders(&service, args).await,
        AdminSubcommand::SetStatus(args) => set_status(&service, args).await,
        AdminSubcommand::Kitchen => kitchen(&service).await,
        AdminSubcommand::Stats => stats(&service).await,
        AdminSubcommand::Slots => slots(&service).await,
    }
}

async fn orders(service: &AdminService, args: OrdersArgs) -> Result<(), String> {
    let mut query = OrderQuery::new();

    if let Some(search) = args.search {
        query = query.with_search(search);
    }
    if let Some(status) = args.status {
        query = query.with_status(status);
    }

    let orders = service
        .orders(&query)
        .await
        .map_err(|error| format!("failed to fetch orders: {error}"))?;

    if orders.is_empty() {
        println!("no matching orders");
        return Ok(());
    }

    let refs: Vec<&Order> = orders.iter().collect();
    let mut out = io::stdout().lock();
    reports::write_orders_table(&mut out, &refs)
        .map_err(|error| format!("failed to render orders: {error}"))
}

async fn set_status(service: &AdminService, args: SetStatusArgs) -> Result<(), String> {
    let order = service
        .set_status(&args.order_id, args.status)
        .await
        .map_err(|error| format!("failed to update the order: {error}"))?;

    println!("{} is now {}", order.order_number, order.status);

    Ok(())
}

async fn kitchen(service: &AdminService) -> Result<(), String> {
    let board = service
        .kitchen_board(Timestamp::now())
        .await
        .map_err(|error| format!("failed to fetch orders: {error}"))?;

    let mut out = io::stdout().lock();
    reports::write_kitchen_board(&mut out, &board)
        .map_err(|error| format!("failed to render the kitchen board: {error}"))
}

async fn stats(service: &AdminService) -> Result<(), String> {
    let stats = service
        .stats()
        .await
        .map_err(|error| format!("failed to fetch orders: {error}"))?;

    let mut out = io::stdout().lock();
    reports::write_stats(&mut out, &stats)
        .map_err(|error| format!("failed to render statistics: {error}"))
}

async fn slots(service: &AdminService) -> Result<(), String> {
    let slots = service
        .slot_usage()
        .await
        .map_err(|error| format!("failed to fetch time slots: {error}"))?;

    let mut out = io::stdout().lock();
    reports::write_slot_usage_table(&mut out, &slots)
        .map_err(|error| format!("failed to render slot usage: {error}"))
}
