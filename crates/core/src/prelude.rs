//! Tiffin prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{CartError, CartLine, OrderDraft},
    fixtures::{Fixture, FixtureError},
    menu::{Category, MenuItem},
    order::{Order, OrderStatus, OrderSubmission, provisional_label},
    prices::Price,
    reports::{
        DashboardStats, KitchenBoard, KitchenGroup, KitchenTicket, OrderQuery, TicketPriority,
        filter_orders,
    },
    session::{OrderSession, SessionError, SessionPhase},
    slots::{Availability, TimeSlot},
    student::{CLASS_OPTIONS, Student, StudentError},
};
