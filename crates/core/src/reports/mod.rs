//! Rendered views
//!
//! Read-only views over the menu, time slots, and confirmed orders: the
//! browsable menu, the searchable order table, the kitchen's grouped queue,
//! headline statistics, and slot utilization. Everything here derives from
//! data the backend owns; nothing writes back.

use std::{collections::BTreeMap, io};

use jiff::Timestamp;
use tabled::{
    builder::Builder,
    grid::config::HorizontalLine,
    settings::{
        Alignment, Color, Style, Theme,
        object::{Columns, Rows},
    },
};

use crate::{
    cart::CartLine,
    menu::MenuItem,
    order::{Order, OrderStatus},
    prices::Price,
    slots::{Availability, TimeSlot},
};

/// Filter for the order table: a case-insensitive needle matched against
/// student name, class, and order number, combined with an optional status.
///
/// An empty query matches every order.
#[derive(Debug, Default, Clone)]
pub struct OrderQuery {
    search: Option<String>,
    status: Option<OrderStatus>,
}

impl OrderQuery {
    /// A query that matches everything.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to orders whose student name, class, or order number
    /// contains `needle`, ignoring case.
    #[must_use]
    pub fn with_search(mut self, needle: impl Into<String>) -> Self {
        self.search = Some(needle.into());
        self
    }

    /// Restrict to orders in the given status.
    #[must_use]
    pub fn with_status(mut self, status: OrderStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Whether `order` passes both the search and the status filter.
    #[must_use]
    pub fn matches(&self, order: &Order) -> bool {
        if self.status.is_some_and(|status| order.status != status) {
            return false;
        }

        let Some(needle) = self.search.as_deref() else {
            return true;
        };

        let needle = needle.to_lowercase();

        [
            order.student.name(),
            order.student.class(),
            order.order_number.as_str(),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// The orders passing `query`, in their original order.
#[must_use]
pub fn filter_orders<'a>(orders: &'a [Order], query: &OrderQuery) -> Vec<&'a Order> {
    orders.iter().filter(|order| query.matches(order)).collect()
}

/// How urgently the kitchen should look at a ticket, from its age.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketPriority {
    /// Placed within the last ten minutes.
    Low,
    /// Waiting for more than ten minutes.
    Medium,
    /// Waiting for more than fifteen minutes.
    High,
}

impl TicketPriority {
    /// Priority band for an order that has been waiting `minutes`.
    #[must_use]
    pub fn for_age_minutes(minutes: i64) -> Self {
        if minutes > 15 {
            Self::High
        } else if minutes > 10 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

/// One active order on the kitchen board.
#[derive(Debug, Clone)]
pub struct KitchenTicket {
    /// The order to prepare.
    pub order: Order,

    /// Whole minutes since the order was placed, never negative.
    pub minutes_waiting: i64,

    /// Urgency band derived from the wait.
    pub priority: TicketPriority,
}

/// The active orders booked into one time slot.
#[derive(Debug, Clone)]
pub struct KitchenGroup {
    /// Slot id the tickets are booked into.
    pub time_slot: String,

    /// Tickets in the order they arrived.
    pub tickets: Vec<KitchenTicket>,
}

/// Active orders grouped by time slot for the kitchen.
#[derive(Debug, Clone)]
pub struct KitchenBoard {
    groups: Vec<KitchenGroup>,
}

impl KitchenBoard {
    /// Build the board from all known orders at time `now`.
    ///
    /// Only pending and preparing orders appear. Groups come out in slot-id
    /// order; tickets keep the input order within their group.
    #[must_use]
    pub fn build(orders: &[Order], now: Timestamp) -> Self {
        let mut by_slot: BTreeMap<String, Vec<KitchenTicket>> = BTreeMap::new();

        for order in orders.iter().filter(|order| order.status.is_active()) {
            let minutes_waiting = now.duration_since(order.placed_at).as_mins().max(0);

            by_slot
                .entry(order.time_slot.clone())
                .or_default()
                .push(KitchenTicket {
                    order: order.clone(),
                    minutes_waiting,
                    priority: TicketPriority::for_age_minutes(minutes_waiting),
                });
        }

        Self {
            groups: by_slot
                .into_iter()
                .map(|(time_slot, tickets)| KitchenGroup { time_slot, tickets })
                .collect(),
        }
    }

    /// The slot groups, ordered by slot id.
    #[must_use]
    pub fn groups(&self) -> &[KitchenGroup] {
        &self.groups
    }

    /// Whether the kitchen has nothing active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Headline figures for the admin dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardStats {
    /// Number of orders placed.
    pub total_orders: usize,

    /// Sum of all order totals.
    pub revenue: Price,

    /// Orders still pending.
    pub pending_orders: usize,

    /// Outstanding dues. No dues ledger feeds this figure; always zero.
    pub pending_dues: Price,
}

impl DashboardStats {
    /// Aggregate the figures from all known orders.
    #[must_use]
    pub fn from_orders(orders: &[Order]) -> Self {
        Self {
            total_orders: orders.len(),
            revenue: orders.iter().map(|order| order.total).sum(),
            pending_orders: orders
                .iter()
                .filter(|order| order.status == OrderStatus::Pending)
                .count(),
            pending_dues: Price::ZERO,
        }
    }
}

/// Write the browsable menu table.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_menu_table(out: &mut impl io::Write, items: &[MenuItem]) -> io::Result<()> {
    let mut builder = Builder::default();
    let mut color_ops = Vec::new();

    builder.push_record(["Item", "Category", "Price", "Status"]);

    for (row, item) in items.iter().enumerate() {
        let status = if item.available {
            "Available"
        } else {
            "Unavailable"
        };

        builder.push_record([
            item.name.clone(),
            item.category.to_string(),
            item.price.to_string(),
            status.to_string(),
        ]);

        let color = if item.available {
            Color::FG_GREEN
        } else {
            color_dark_grey()
        };
        color_ops.push((row + 1, 3, color));
    }

    let mut table = builder.build();

    table.with(header_theme());
    table.modify(Rows::first(), Color::BOLD);
    table.modify(Columns::new(2..3), Alignment::right());

    for (row, col, color) in color_ops {
        table.modify((row, col), color);
    }

    writeln!(out, "{table}")
}

/// Write the admin order table.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_orders_table(out: &mut impl io::Write, orders: &[&Order]) -> io::Result<()> {
    let mut builder = Builder::default();
    let mut color_ops = Vec::new();

    builder.push_record(["Order", "Student", "Class", "Slot", "Items", "Total", "Status"]);

    for (row, order) in orders.iter().enumerate() {
        builder.push_record([
            order.order_number.clone(),
            order.student.name().to_string(),
            order.student.class().to_string(),
            order.time_slot.clone(),
            lines_summary(&order.lines),
            order.total.to_string(),
            order.status.to_string(),
        ]);

        color_ops.push((row + 1, 6, status_color(order.status)));
    }

    let mut table = builder.build();

    table.with(header_theme());
    table.modify(Rows::first(), Color::BOLD);
    table.modify(Columns::new(5..6), Alignment::right());

    for (row, col, color) in color_ops {
        table.modify((row, col), color);
    }

    writeln!(out, "{table}")
}

/// Write the kitchen board as one table with a separator between slots.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_kitchen_board(out: &mut impl io::Write, board: &KitchenBoard) -> io::Result<()> {
    if board.is_empty() {
        return writeln!(out, "kitchen is clear: no active orders");
    }

    let mut builder = Builder::default();
    let mut color_ops = Vec::new();
    let mut group_boundaries = Vec::new();
    let mut row = 1;

    builder.push_record(["Slot", "Order", "Student", "Items", "Waiting", "Priority"]);

    for group in board.groups() {
        group_boundaries.push(row);

        for ticket in &group.tickets {
            builder.push_record([
                group.time_slot.clone(),
                ticket.order.order_number.clone(),
                ticket.order.student.name().to_string(),
                lines_summary(&ticket.order.lines),
                format!("{} min", ticket.minutes_waiting),
                priority_label(ticket.priority).to_string(),
            ]);

            color_ops.push((row, 5, priority_color(ticket.priority)));
            row += 1;
        }
    }

    let mut table = builder.build();
    let mut theme = header_theme();
    let separator = HorizontalLine::new(Some('─'), Some('┼'), Some('├'), Some('┤'));

    for boundary in group_boundaries.iter().skip(1) {
        theme.insert_horizontal_line(*boundary, separator);
    }

    table.with(theme);
    table.modify(Rows::first(), Color::BOLD);

    for (row, col, color) in color_ops {
        table.modify((row, col), color);
    }

    writeln!(out, "{table}")
}

/// Write the slot utilization table.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_slot_usage_table(out: &mut impl io::Write, slots: &[TimeSlot]) -> io::Result<()> {
    let mut builder = Builder::default();
    let mut color_ops = Vec::new();

    builder.push_record(["Slot", "Time", "Booked", "Capacity", "Spots Left", "Status"]);

    for (row, slot) in slots.iter().enumerate() {
        builder.push_record([
            slot.label.clone(),
            slot.time.clone(),
            format!("{} ({}%)", slot.current_orders, slot.utilization_percent()),
            slot.capacity.to_string(),
            slot.spots_left().to_string(),
            slot.availability().to_string(),
        ]);

        color_ops.push((row + 1, 5, availability_color(slot.availability())));
    }

    let mut table = builder.build();

    table.with(header_theme());
    table.modify(Rows::first(), Color::BOLD);
    table.modify(Columns::new(2..5), Alignment::right());

    for (row, col, color) in color_ops {
        table.modify((row, col), color);
    }

    writeln!(out, "{table}")
}

/// Write the dashboard figures.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_stats(out: &mut impl io::Write, stats: &DashboardStats) -> io::Result<()> {
    let mut builder = Builder::default();

    builder.push_record(["Total Orders".to_string(), stats.total_orders.to_string()]);
    builder.push_record(["Revenue".to_string(), stats.revenue.to_string()]);
    builder.push_record(["Pending Orders".to_string(), stats.pending_orders.to_string()]);
    builder.push_record(["Pending Dues".to_string(), stats.pending_dues.to_string()]);

    let mut table = builder.build();

    table.with(Theme::from(Style::modern_rounded()));
    table.modify(Columns::first(), Color::BOLD);
    table.modify(Columns::last(), Alignment::right());

    writeln!(out, "{table}")
}

fn lines_summary(lines: &[CartLine]) -> String {
    lines
        .iter()
        .map(|line| format!("{} ×{}", line.name(), line.quantity()))
        .collect::<Vec<_>>()
        .join(", ")
}

fn header_theme() -> Theme {
    let mut theme = Theme::from(Style::modern_rounded());
    let separator = HorizontalLine::new(Some('─'), Some('┼'), Some('├'), Some('┤'));

    theme.remove_horizontal_lines();
    theme.insert_horizontal_line(1, separator);

    theme
}

fn status_color(status: OrderStatus) -> Color {
    match status {
        OrderStatus::Pending => Color::FG_YELLOW,
        OrderStatus::Preparing => Color::FG_BRIGHT_BLUE,
        OrderStatus::Ready => Color::FG_GREEN,
        OrderStatus::Completed => color_dark_grey(),
    }
}

fn priority_color(priority: TicketPriority) -> Color {
    match priority {
        TicketPriority::Low => Color::FG_GREEN,
        TicketPriority::Medium => Color::FG_YELLOW,
        TicketPriority::High => Color::FG_RED,
    }
}

fn availability_color(availability: Availability) -> Color {
    match availability {
        Availability::Available => Color::FG_GREEN,
        Availability::FillingUp => Color::FG_YELLOW,
        Availability::AlmostFull => Color::FG_RED,
    }
}

fn priority_label(priority: TicketPriority) -> &'static str {
    match priority {
        TicketPriority::Low => "low",
        TicketPriority::Medium => "medium",
        TicketPriority::High => "high",
    }
}

fn color_dark_grey() -> Color {
    Color::new("\x1b[90m", "\x1b[0m")
}
