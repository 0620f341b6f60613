//! Order persistence backend.

use async_trait::async_trait;
use mockall::automock;
use tiffin::order::{Order, OrderStatus, OrderSubmission};

use crate::api::{
    ApiClient, ApiError,
    wire::{OrderRecord, SubmitOrderRequest},
};

/// The system of record for placed orders.
#[automock]
#[async_trait]
pub trait OrderBackend: Send + Sync {
    /// Persist a frozen submission and return the confirmed order.
    async fn submit_order(&self, submission: &OrderSubmission) -> Result<Order, ApiError>;

    /// Every persisted order.
    async fn list_orders(&self) -> Result<Vec<Order>, ApiError>;

    /// Move one order to a new workflow status.
    async fn update_status(&self, order_id: &str, status: OrderStatus) -> Result<Order, ApiError>;
}

/// Order backend served by the canteen HTTP API.
#[derive(Debug, Clone)]
pub struct HttpOrderBackend {
    api: ApiClient,
}

impl HttpOrderBackend {
    /// Create a backend over the given client.
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    fn into_order(record: OrderRecord) -> Result<Order, ApiError> {
        let id = record.id.clone();

        Order::try_from(record)
            .map_err(|error| ApiError::UnexpectedResponse(format!("order {id}: {error}")))
    }
}

#[async_trait]
impl OrderBackend for HttpOrderBackend {
    #[tracing::instrument(
        name = "orders.backend.submit_order",
        skip(self, submission),
        fields(label = submission.label()),
        err
    )]
    async fn submit_order(&self, submission: &OrderSubmission) -> Result<Order, ApiError> {
        let request = SubmitOrderRequest::from(submission);
        let record = self.api.submit_order(&request).await?;

        Self::into_order(record)
    }

    #[tracing::instrument(name = "orders.backend.list_orders", skip(self), err)]
    async fn list_orders(&self) -> Result<Vec<Order>, ApiError> {
        let records = self.api.fetch_orders().await?;

        records.into_iter().map(Self::into_order).collect()
    }

    #[tracing::instrument(name = "orders.backend.update_status", skip(self), err)]
    async fn update_status(&self, order_id: &str, status: OrderStatus) -> Result<Order, ApiError> {
        let record = self.api.update_order_status(order_id, status).await?;

        Self::into_order(record)
    }
}
