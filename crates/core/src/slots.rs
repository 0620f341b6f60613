//! Time slots
//!
//! Capacity figures are informational display values. Nothing here reserves
//! capacity; enforcement, if any, belongs to the backend.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A named, capacity-bounded ordering window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    /// Stable identity, opaque to this crate.
    pub id: String,

    /// Display time, e.g. `"12:30 PM"`.
    pub time: String,

    /// Display name, e.g. `"Lunch Break 1"`.
    pub label: String,

    /// Total number of orders the slot can take.
    pub capacity: u32,

    /// Orders currently booked against the slot.
    pub current_orders: u32,
}

impl TimeSlot {
    /// Booked share of capacity as a whole percentage, rounded down.
    ///
    /// A slot with no capacity reports as full.
    #[must_use]
    pub fn utilization_percent(&self) -> u64 {
        if self.capacity == 0 {
            return 100;
        }

        u64::from(self.current_orders) * 100 / u64::from(self.capacity)
    }

    /// Orders the slot can still take.
    #[must_use]
    pub fn spots_left(&self) -> u32 {
        self.capacity.saturating_sub(self.current_orders)
    }

    /// Availability band derived from utilization.
    #[must_use]
    pub fn availability(&self) -> Availability {
        Availability::from_percent(self.utilization_percent())
    }
}

/// How full a time slot is, in the bands shown to students.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    /// Under half full.
    Available,
    /// At least half full but under 80%.
    FillingUp,
    /// 80% or more of capacity booked.
    AlmostFull,
}

impl Availability {
    /// Band for a utilization percentage.
    #[must_use]
    pub fn from_percent(percent: u64) -> Self {
        if percent < 50 {
            Self::Available
        } else if percent < 80 {
            Self::FillingUp
        } else {
            Self::AlmostFull
        }
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Available => "Available",
            Self::FillingUp => "Filling Up",
            Self::AlmostFull => "Almost Full",
        };

        write!(f, "{label}")
    }
}
