//! Order Example
//!
//! Walks one ordering session over the embedded sample data: pick a time
//! slot, add items, submit, then print the admin views a confirmed order
//! shows up in.
//!
//! Use `-s` to pick a time slot id
//! Use `-i` to add an item by name (repeatable)

use std::io;

use anyhow::{Result, ensure};
use clap::Parser;
use jiff::Timestamp;
use tiffin::{
    fixtures::Fixture,
    order::{Order, OrderStatus},
    reports::{self, DashboardStats, KitchenBoard, OrderQuery},
    session::OrderSession,
    student::Student,
};

/// Order Example
#[derive(Debug, Parser)]
struct ExampleOrderArgs {
    /// Time slot id to book into
    #[arg(short = 's', long, default_value = "slot-2")]
    slot: String,

    /// Item names to add, repeatable; defaults to a small snack order
    #[arg(short = 'i', long = "item")]
    items: Vec<String>,
}

#[expect(clippy::print_stdout, reason = "Example code")]
fn main() -> Result<()> {
    let args = ExampleOrderArgs::parse();
    let fixture = Fixture::sample()?;

    ensure!(
        fixture.time_slots().iter().any(|slot| slot.id == args.slot),
        "unknown time slot: {}",
        args.slot
    );

    let items = if args.items.is_empty() {
        vec!["Tea".to_string(), "Tea".to_string(), "Samosa".to_string()]
    } else {
        args.items
    };

    let mut session = OrderSession::new();
    session.set_student(Student::new("Asha Rao", "ADM-1042", "EC 3rd Year")?)?;
    session.select_time_slot(args.slot)?;

    for name in &items {
        session.add_item(fixture.item(name)?)?;
    }

    let placed_at = Timestamp::now();
    let submission = session.submit(placed_at)?;

    println!(
        "submitted {}: {} lines, {}",
        submission.label(),
        submission.lines().len(),
        submission.total()
    );

    // Stand in for the backend's answer.
    let order = Order {
        id: "1".to_string(),
        order_number: submission.label().to_string(),
        student: submission.student().clone(),
        lines: submission.lines().to_vec(),
        total: submission.total(),
        time_slot: submission.time_slot().to_string(),
        status: OrderStatus::Pending,
        placed_at,
    };

    session.confirm(order.clone())?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    let orders = [order];
    let filtered = reports::filter_orders(&orders, &OrderQuery::new());

    reports::write_orders_table(&mut handle, &filtered)?;
    reports::write_kitchen_board(&mut handle, &KitchenBoard::build(&orders, placed_at))?;
    reports::write_slot_usage_table(&mut handle, fixture.time_slots())?;
    reports::write_stats(&mut handle, &DashboardStats::from_orders(&orders))?;

    Ok(())
}
