//! Wire shapes of the backend's JSON API.
//!
//! Orders travel flat: the student's fields sit beside the order's own,
//! prices are integer paise, and timestamps are RFC 3339 strings. Menu
//! items and time slots need no separate shapes here; the library types
//! already serialize the way the backend speaks.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use tiffin::{
    cart::CartLine,
    order::{Order, OrderStatus, OrderSubmission},
    prices::Price,
    student::{Student, StudentError},
};

/// Payload for `POST /api/orders`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitOrderRequest {
    /// Provisional label; the backend may assign its own number.
    pub order_number: String,
    pub student_name: String,
    pub student_admission_number: String,
    pub student_class: String,
    pub items: Vec<CartLine>,
    pub total: Price,
    pub time_slot: String,
    pub timestamp: Timestamp,
}

impl From<&OrderSubmission> for SubmitOrderRequest {
    fn from(submission: &OrderSubmission) -> Self {
        Self {
            order_number: submission.label().to_string(),
            student_name: submission.student().name().to_string(),
            student_admission_number: submission.student().admission_number().to_string(),
            student_class: submission.student().class().to_string(),
            items: submission.lines().to_vec(),
            total: submission.total(),
            time_slot: submission.time_slot().to_string(),
            timestamp: submission.placed_at(),
        }
    }
}

/// Payload for `PATCH /api/orders/{id}/status`.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateStatusRequest {
    pub status: OrderStatus,
}

/// An order as the backend returns it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    pub id: String,
    pub order_number: String,
    pub student_name: String,
    pub student_admission_number: String,
    pub student_class: String,
    pub items: Vec<CartLine>,
    pub total: Price,
    pub time_slot: String,
    pub status: OrderStatus,
    pub timestamp: Timestamp,
}

impl TryFrom<OrderRecord> for Order {
    type Error = StudentError;

    /// Records carry student fields the backend persisted verbatim; they
    /// must still satisfy the published identity rules to become an
    /// [`Order`].
    fn try_from(record: OrderRecord) -> Result<Self, Self::Error> {
        let student = Student::new(
            &record.student_name,
            &record.student_admission_number,
            &record.student_class,
        )?;

        Ok(Self {
            id: record.id,
            order_number: record.order_number,
            student,
            lines: record.items,
            total: record.total,
            time_slot: record.time_slot,
            status: record.status,
            placed_at: record.timestamp,
        })
    }
}
