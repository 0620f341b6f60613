//! Menu
//!
//! Read-only catalog records. The catalog itself is owned by the backend;
//! drafts only capture an item's name and price at the moment it is added.

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::prices::Price;

/// Menu item category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Main course dishes.
    Main,
    /// Snacks.
    Snack,
    /// Beverages.
    Beverage,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Main => "Main Course",
            Self::Snack => "Snacks",
            Self::Beverage => "Beverages",
        };

        write!(f, "{label}")
    }
}

/// A single item on the canteen menu.
///
/// Names are unique within the catalog; drafts key their lines on them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Catalog identity, opaque to this crate.
    pub id: String,

    /// Display name, unique within the catalog.
    pub name: String,

    /// Unit price.
    pub price: Price,

    /// Category the item is listed under.
    pub category: Category,

    /// Whether the item can currently be ordered.
    pub available: bool,

    /// Free-text description.
    pub description: String,

    /// Optional image reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}
