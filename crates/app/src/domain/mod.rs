//! Domain services over the backend client and local identity storage.

pub mod admin;
pub mod identity;
pub mod menu;
pub mod ordering;
pub mod orders;
pub mod slots;
