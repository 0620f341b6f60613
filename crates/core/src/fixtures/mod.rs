//! Fixtures
//!
//! An embedded sample menu and slot list for tests, examples, and seeding
//! mock collaborators.

use thiserror::Error;

use crate::{menu::MenuItem, slots::TimeSlot};

/// Fixture parsing errors.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Item not found
    #[error("Item not found: {0}")]
    ItemNotFound(String),
}

/// The embedded sample data set.
#[derive(Debug, Clone)]
pub struct Fixture {
    menu: Vec<MenuItem>,
    time_slots: Vec<TimeSlot>,
}

impl Fixture {
    /// Parse the embedded sample set.
    ///
    /// # Errors
    ///
    /// - [`FixtureError::Yaml`]: an embedded document fails to parse.
    pub fn sample() -> Result<Self, FixtureError> {
        Ok(Self {
            menu: serde_norway::from_str(include_str!("menu.yaml"))?,
            time_slots: serde_norway::from_str(include_str!("timeslots.yaml"))?,
        })
    }

    /// All menu items in the set.
    #[must_use]
    pub fn menu(&self) -> &[MenuItem] {
        &self.menu
    }

    /// All time slots in the set.
    #[must_use]
    pub fn time_slots(&self) -> &[TimeSlot] {
        &self.time_slots
    }

    /// Look up a menu item by display name.
    ///
    /// # Errors
    ///
    /// - [`FixtureError::ItemNotFound`]: no item carries that name.
    pub fn item(&self, name: &str) -> Result<&MenuItem, FixtureError> {
        self.menu
            .iter()
            .find(|item| item.name == name)
            .ok_or_else(|| FixtureError::ItemNotFound(name.to_string()))
    }
}
