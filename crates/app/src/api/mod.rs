//! HTTP client for the canteen backend.
//!
//! One thin client owns the base URL and timeout. The typed endpoint
//! methods deserialize straight into library types where the wire shape
//! matches, and into [`wire`] records where it does not. Status handling
//! is uniform: 4xx responses become [`ApiError::Rejected`] and any other
//! non-success becomes [`ApiError::Unavailable`].

use std::time::Duration;

use reqwest::{Client, Response, StatusCode};
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;
use tiffin::{menu::MenuItem, order::OrderStatus, slots::TimeSlot};
use tracing::debug;

use crate::api::wire::{OrderRecord, SubmitOrderRequest, UpdateStatusRequest};

pub mod wire;

/// Connection settings for the canteen backend.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the backend, without a trailing slash.
    pub base_url: String,

    /// Per-request timeout.
    pub timeout: Duration,
}

/// Client for the canteen backend's JSON API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    config: ApiConfig,
    http: Client,
}

impl ApiClient {
    /// Create a new client for the given backend.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] when the underlying HTTP client cannot
    /// be constructed.
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let http = Client::builder().timeout(config.timeout).build()?;

        Ok(Self { config, http })
    }

    /// Fetch the menu as the backend currently publishes it.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails or the response
    /// cannot be decoded.
    pub async fn fetch_menu(&self) -> Result<Vec<MenuItem>, ApiError> {
        self.get_json("/api/menu").await
    }

    /// Fetch pickup time slots with their live booking counts.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails or the response
    /// cannot be decoded.
    pub async fn fetch_time_slots(&self) -> Result<Vec<TimeSlot>, ApiError> {
        self.get_json("/api/menu/timeslots").await
    }

    /// Submit an order for persistence.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails, the backend turns
    /// the order down, or the response cannot be decoded.
    pub async fn submit_order(&self, request: &SubmitOrderRequest) -> Result<OrderRecord, ApiError> {
        self.post_json("/api/orders", request).await
    }

    /// Fetch every persisted order.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails or the response
    /// cannot be decoded.
    pub async fn fetch_orders(&self) -> Result<Vec<OrderRecord>, ApiError> {
        self.get_json("/api/orders").await
    }

    /// Move one order to a new workflow status.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails, the order is
    /// unknown, or the response cannot be decoded.
    pub async fn update_order_status(
        &self,
        order_id: &str,
        status: OrderStatus,
    ) -> Result<OrderRecord, ApiError> {
        let path = format!("/api/orders/{order_id}/status");

        self.patch_json(&path, &UpdateStatusRequest { status }).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{path}", self.config.base_url);

        debug!(%url, "GET");

        let response = self.http.get(&url).send().await?;

        Self::read_json(response).await
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let url = format!("{}{path}", self.config.base_url);

        debug!(%url, "POST");

        let response = self.http.post(&url).json(body).send().await?;

        Self::read_json(response).await
    }

    async fn patch_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let url = format!("{}{path}", self.config.base_url);

        debug!(%url, "PATCH");

        let response = self.http.patch(&url).json(body).send().await?;

        Self::read_json(response).await
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();

            return Err(ApiError::from_status(status, message));
        }

        response
            .json()
            .await
            .map_err(|error| ApiError::UnexpectedResponse(error.to_string()))
    }
}

/// Errors returned by the canteen backend client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never completed: connection, DNS, or timeout trouble.
    #[error("could not reach the canteen backend: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend understood the request and turned it down.
    #[error("the backend rejected the request ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// The backend answered with a server-side failure.
    #[error("the backend is unavailable ({status}): {message}")]
    Unavailable { status: u16, message: String },

    /// A response arrived but did not match the documented shape.
    #[error("unexpected response from the backend: {0}")]
    UnexpectedResponse(String),
}

impl ApiError {
    fn from_status(status: StatusCode, message: String) -> Self {
        if status.is_client_error() {
            Self::Rejected {
                status: status.as_u16(),
                message,
            }
        } else {
            Self::Unavailable {
                status: status.as_u16(),
                message,
            }
        }
    }

    /// Whether retrying the same request unchanged could succeed.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Unavailable { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_are_rejections() {
        let error =
            ApiError::from_status(StatusCode::UNPROCESSABLE_ENTITY, "slot is full".to_string());

        assert!(matches!(error, ApiError::Rejected { status: 422, .. }));
        assert!(!error.is_retryable());
    }

    #[test]
    fn server_errors_are_retryable() {
        let error = ApiError::from_status(StatusCode::SERVICE_UNAVAILABLE, String::new());

        assert!(matches!(error, ApiError::Unavailable { status: 503, .. }));
        assert!(error.is_retryable());
    }

    #[test]
    fn decode_failures_are_not_retryable() {
        let error = ApiError::UnexpectedResponse("missing field `total`".to_string());

        assert!(!error.is_retryable());
    }
}
