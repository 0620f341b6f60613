//! Pickup slot directory.

use async_trait::async_trait;
use mockall::automock;
use tiffin::slots::TimeSlot;

use crate::api::{ApiClient, ApiError};

/// Read-only access to pickup slots and their live booking counts.
///
/// Counts are advisory; the backend rechecks capacity when an order is
/// submitted.
#[automock]
#[async_trait]
pub trait TimeSlotDirectory: Send + Sync {
    /// List every published slot.
    async fn list(&self) -> Result<Vec<TimeSlot>, ApiError>;
}

/// Slot directory served by the canteen backend.
#[derive(Debug, Clone)]
pub struct HttpTimeSlotDirectory {
    api: ApiClient,
}

impl HttpTimeSlotDirectory {
    /// Create a directory over the given client.
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl TimeSlotDirectory for HttpTimeSlotDirectory {
    #[tracing::instrument(name = "slots.directory.list", skip(self), err)]
    async fn list(&self) -> Result<Vec<TimeSlot>, ApiError> {
        self.api.fetch_time_slots().await
    }
}
