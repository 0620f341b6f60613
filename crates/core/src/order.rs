//! Orders
//!
//! The immutable shapes on either side of the backend call: the submission
//! snapshot frozen out of a draft, and the confirmed order the backend
//! answers with. Only the backend mints authoritative order identities; the
//! client label is a display convenience.

use std::fmt;

use clap::ValueEnum;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::{cart::CartLine, prices::Price, student::Student};

/// Where an order is in the kitchen's workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Placed, not yet picked up by the kitchen.
    Pending,
    /// Being prepared.
    Preparing,
    /// Ready for collection.
    Ready,
    /// Collected; nothing left to do.
    Completed,
}

impl OrderStatus {
    /// Whether the kitchen still has work to do on the order.
    #[must_use]
    pub fn is_active(self) -> bool {
        matches!(self, Self::Pending | Self::Preparing)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Pending => "pending",
            Self::Preparing => "preparing",
            Self::Ready => "ready",
            Self::Completed => "completed",
        };

        write!(f, "{label}")
    }
}

/// Provisional order label shown while the backend has not yet answered:
/// `ORD` followed by the last six digits of the timestamp in Unix epoch
/// milliseconds.
///
/// Not unique under concurrent submissions; the authoritative identity is
/// always the backend's.
#[must_use]
pub fn provisional_label(placed_at: Timestamp) -> String {
    let tail = placed_at.as_millisecond().rem_euclid(1_000_000);

    format!("ORD{tail:06}")
}

/// An immutable snapshot of a draft at the moment it was submitted.
///
/// Built only by [`OrderSession::submit`](crate::session::OrderSession::submit);
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSubmission {
    label: String,
    student: Student,
    time_slot: String,
    lines: Vec<CartLine>,
    total: Price,
    placed_at: Timestamp,
}

impl OrderSubmission {
    pub(crate) fn new(
        label: String,
        student: Student,
        time_slot: String,
        lines: Vec<CartLine>,
        total: Price,
        placed_at: Timestamp,
    ) -> Self {
        Self {
            label,
            student,
            time_slot,
            lines,
            total,
            placed_at,
        }
    }

    /// Client-generated provisional label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The identity the order was placed under.
    #[must_use]
    pub fn student(&self) -> &Student {
        &self.student
    }

    /// Id of the selected time slot.
    #[must_use]
    pub fn time_slot(&self) -> &str {
        &self.time_slot
    }

    /// The submitted lines, verbatim from the draft.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Total computed from the lines at submit time.
    #[must_use]
    pub fn total(&self) -> Price {
        self.total
    }

    /// Client-side submission time.
    #[must_use]
    pub fn placed_at(&self) -> Timestamp {
        self.placed_at
    }
}

/// A backend-confirmed order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    /// Backend-assigned identity.
    pub id: String,

    /// Backend-assigned order number shown to students and staff.
    pub order_number: String,

    /// The identity the order was placed under.
    pub student: Student,

    /// Ordered lines.
    pub lines: Vec<CartLine>,

    /// Order total.
    pub total: Price,

    /// Id of the time slot the order is booked into.
    pub time_slot: String,

    /// Workflow status.
    pub status: OrderStatus,

    /// When the order was placed.
    pub placed_at: Timestamp,
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn label_is_ord_plus_last_six_millisecond_digits() -> TestResult {
        let placed_at = Timestamp::from_millisecond(1_755_841_234_567)?;

        assert_eq!(provisional_label(placed_at), "ORD234567");

        Ok(())
    }

    #[test]
    fn label_zero_pads_small_tails() -> TestResult {
        let placed_at = Timestamp::from_millisecond(1_755_841_000_042)?;

        assert_eq!(provisional_label(placed_at), "ORD000042");

        Ok(())
    }

    #[test]
    fn pending_and_preparing_are_active() {
        assert!(OrderStatus::Pending.is_active());
        assert!(OrderStatus::Preparing.is_active());
        assert!(!OrderStatus::Ready.is_active());
        assert!(!OrderStatus::Completed.is_active());
    }

    #[test]
    fn status_wire_names_are_lowercase() -> TestResult {
        assert_eq!(
            serde_norway::to_string(&OrderStatus::Preparing)?.trim(),
            "preparing"
        );
        assert_eq!(
            serde_norway::from_str::<OrderStatus>("ready")?,
            OrderStatus::Ready
        );

        Ok(())
    }
}
