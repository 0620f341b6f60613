use clap::Args;
use jiff::Timestamp;
use tiffin::{menu::MenuItem, session::OrderSession};
use tiffin_app::{context::AppContext, domain::ordering::OrderingService};

#[derive(Debug, Args)]
pub(crate) struct OrderArgs {
    /// Pickup slot id, e.g. "slot-2"
    #[arg(long)]
    slot: String,

    /// Menu item to add; repeat the flag to increase the quantity
    #[arg(long = "item", required = true)]
    items: Vec<String>,

    /// Override a line's quantity as NAME=QTY; 0 removes the line
    #[arg(long = "set", value_parser = parse_set)]
    sets: Vec<(String, u32)>,
}

pub(crate) async fn run(context: &AppContext, args: OrderArgs) -> Result<(), String> {
    let student = context
        .identity
        .load()
        .map_err(|error| format!("failed to read the identity: {error}"))?
        .ok_or("no identity saved; run `tiffin register` first")?;

    let menu = context
        .catalog
        .list(None)
        .await
        .map_err(|error| format!("failed to fetch the menu: {error}"))?;

    let slots = context
        .slots
        .list()
        .await
        .map_err(|error| format!("failed to fetch time slots: {error}"))?;

    if !slots.iter().any(|slot| slot.id == args.slot) {
        let known: Vec<&str> = slots.iter().map(|slot| slot.id.as_str()).collect();

        return Err(format!(
            "unknown slot {:?}; available slots: {}",
            args.slot,
            known.join(", ")
        ));
    }

    let mut session = OrderSession::new();

    session
        .set_student(student)
        .map_err(|error| format!("failed to start the order: {error}"))?;
    session
        .select_time_slot(&args.slot)
        .map_err(|error| format!("failed to start the order: {error}"))?;

    for name in &args.items {
        let item = find_item(&menu, name)?;

        if !item.available {
            return Err(format!("{} is currently unavailable", item.name));
        }

        session
            .add_item(item)
            .map_err(|error| format!("failed to add {name}: {error}"))?;
    }

    for (name, quantity) in &args.sets {
        let item = find_item(&menu, name)?;

        session
            .set_quantity(&item.name, *quantity)
            .map_err(|error| format!("failed to set {} to {quantity}: {error}", item.name))?;
    }

    let service = OrderingService::new(context.orders.clone());

    match service.place_order(&mut session, Timestamp::now()).await {
        Ok(order) => {
            let items = order
                .lines
                .iter()
                .map(|line| format!("{} ×{}", line.name(), line.quantity()))
                .collect::<Vec<_>>()
                .join(", ");

            println!("order placed");
            println!("order_number: {}", order.order_number);
            println!("time_slot: {}", order.time_slot);
            println!("items: {items}");
            println!("total: {}", order.total);
            println!("status: {}", order.status);

            Ok(())
        }
        Err(error) if error.is_retryable() => Err(format!(
            "failed to place the order: {error}\nno order was placed; run the same command to retry"
        )),
        Err(error) => Err(format!("failed to place the order: {error}")),
    }
}

fn find_item<'a>(menu: &'a [MenuItem], name: &str) -> Result<&'a MenuItem, String> {
    menu.iter()
        .find(|item| item.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| format!("{name:?} is not on the menu; run `tiffin menu`"))
}

fn parse_set(raw: &str) -> Result<(String, u32), String> {
    let (name, quantity) = raw
        .split_once('=')
        .ok_or_else(|| "expected NAME=QTY".to_string())?;

    let quantity = quantity
        .trim()
        .parse::<u32>()
        .map_err(|error| format!("invalid quantity: {error}"))?;

    Ok((name.trim().to_string(), quantity))
}
