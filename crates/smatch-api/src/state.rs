//! Application state.

use std::sync::Arc;

use smatch_store::{StoreClient, StoreError};

use crate::config::ApiConfig;

/// Shared application state. The store client is the only shared
/// handle; handlers use it read-only.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub store: Arc<StoreClient>,
}

impl AppState {
    /// Create state with an explicit store client.
    pub fn new(config: ApiConfig, store: StoreClient) -> Self {
        Self {
            config,
            store: Arc::new(store),
        }
    }

    /// Create state with a store client built from the environment.
    pub fn from_env(config: ApiConfig) -> Result<Self, StoreError> {
        Ok(Self::new(config, StoreClient::from_env()?))
    }
}
