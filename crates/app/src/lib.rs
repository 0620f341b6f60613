//! Shared application modules: configuration, the backend client, and the
//! domain services the command surfaces are built on.

pub mod api;
pub mod config;
pub mod context;
pub mod domain;
pub mod observability;
