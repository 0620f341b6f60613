//! Application context.

use std::{sync::Arc, time::Duration};

use thiserror::Error;

use crate::{
    api::{ApiClient, ApiConfig, ApiError},
    config::AppConfig,
    domain::{
        identity::{IdentityStore, JsonFileIdentityStore},
        menu::{HttpMenuCatalog, MenuCatalog},
        orders::{HttpOrderBackend, OrderBackend},
        slots::{HttpTimeSlotDirectory, TimeSlotDirectory},
    },
};

/// Errors that can occur while building the application context.
#[derive(Debug, Error)]
pub enum AppInitError {
    /// The backend HTTP client could not be constructed.
    #[error("failed to build the backend client: {0}")]
    Api(#[from] ApiError),
}

/// Shared handles to every collaborator the command surfaces need.
#[derive(Clone)]
pub struct AppContext {
    /// Published menu.
    pub catalog: Arc<dyn MenuCatalog>,

    /// Pickup slot directory.
    pub slots: Arc<dyn TimeSlotDirectory>,

    /// Order persistence backend.
    pub orders: Arc<dyn OrderBackend>,

    /// Saved student identity.
    pub identity: Arc<dyn IdentityStore>,
}

impl AppContext {
    /// Build the context from configuration.
    ///
    /// # Errors
    ///
    /// Returns an [`AppInitError`] when the HTTP client cannot be built.
    pub fn from_config(config: &AppConfig) -> Result<Self, AppInitError> {
        let api = ApiClient::new(ApiConfig {
            base_url: config.backend.api_url.clone(),
            timeout: Duration::from_secs(config.backend.api_timeout_secs),
        })?;

        Ok(Self {
            catalog: Arc::new(HttpMenuCatalog::new(api.clone())),
            slots: Arc::new(HttpTimeSlotDirectory::new(api.clone())),
            orders: Arc::new(HttpOrderBackend::new(api)),
            identity: Arc::new(JsonFileIdentityStore::new(
                config.identity.identity_file.clone(),
            )),
        })
    }
}
