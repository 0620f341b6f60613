//! Tiffin
//!
//! Canteen ordering core: priced order drafts, the one-way ordering session
//! lifecycle, and the read-only admin views derived from confirmed orders.

pub mod cart;
pub mod fixtures;
pub mod menu;
pub mod order;
pub mod prelude;
pub mod prices;
pub mod reports;
pub mod session;
pub mod slots;
pub mod student;
