//! Placing orders.
//!
//! [`OrderingService`] is the only path from a drafting session to a
//! confirmed order: it freezes the draft, sends it, and settles the
//! session against what the backend actually answered.

use std::sync::Arc;

use jiff::Timestamp;
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

use tiffin::{
    order::Order,
    session::{OrderSession, SessionError},
};

use crate::{api::ApiError, domain::orders::OrderBackend};

/// Errors that can occur while placing an order.
#[derive(Debug, Error)]
pub enum PlaceOrderError {
    /// A submit precondition failed; nothing was sent.
    #[error(transparent)]
    Session(#[from] SessionError),

    /// The backend call failed; the session is back in drafting.
    #[error(transparent)]
    Backend(#[from] ApiError),
}

impl PlaceOrderError {
    /// Whether resubmitting the same draft unchanged could succeed.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Session(_) => false,
            Self::Backend(error) => error.is_retryable(),
        }
    }
}

/// Drives a session's submission through the order backend.
pub struct OrderingService {
    backend: Arc<dyn OrderBackend>,
}

impl OrderingService {
    /// Create a service over the given backend.
    #[must_use]
    pub fn new(backend: Arc<dyn OrderBackend>) -> Self {
        Self { backend }
    }

    /// Submit the session's draft and settle the session on the outcome.
    ///
    /// On success the session closes over the backend's order, which is
    /// also returned. On failure the session reopens for drafting with
    /// its lines intact.
    ///
    /// # Errors
    ///
    /// - [`PlaceOrderError::Session`] when a precondition fails locally;
    ///   nothing was transmitted.
    /// - [`PlaceOrderError::Backend`] when the backend call fails; the
    ///   error reports whether an unchanged retry makes sense.
    pub async fn place_order(
        &self,
        session: &mut OrderSession,
        placed_at: Timestamp,
    ) -> Result<Order, PlaceOrderError> {
        let attempt = Uuid::now_v7();
        let submission = session.submit(placed_at)?;

        info!(
            %attempt,
            label = submission.label(),
            total = %submission.total(),
            "submitting order"
        );

        match self.backend.submit_order(&submission).await {
            Ok(order) => {
                session.confirm(order.clone())?;

                info!(%attempt, order_number = %order.order_number, "order confirmed");

                Ok(order)
            }
            Err(error) => {
                warn!(%attempt, %error, "order submission failed");

                session.submission_failed()?;

                Err(error.into())
            }
        }
    }
}
