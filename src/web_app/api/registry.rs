// web_app/api/registry.rs - Process-wide backend client
//
// The server binary builds one `BackendClient` at startup and registers it
// here so server functions can reach it without threading it through
// Actix state. The client holds no session data.

use std::sync::{Mutex, OnceLock, PoisonError};

use super::backend::{BackendClient, BackendResult};
use super::config::BackendConfig;

static BACKEND: OnceLock<BackendClient> = OnceLock::new();
static TEST_BACKEND_OVERRIDE: Mutex<Option<BackendClient>> = Mutex::new(None);

/// Register the global backend client
pub fn init_backend(client: BackendClient) {
    tracing::info!("Initializing global backend client for {}", client.base_url());
    if BACKEND.set(client).is_err() {
        tracing::warn!("Backend client already initialized");
    }
}

/// Set a client override for testing
pub fn set_test_backend(client: BackendClient) {
    let mut guard = TEST_BACKEND_OVERRIDE
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    *guard = Some(client);
}

/// Get the global backend client
pub fn get_backend() -> Option<BackendClient> {
    {
        let guard = TEST_BACKEND_OVERRIDE
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(ref client) = *guard {
            return Some(client.clone());
        }
    }

    let client = BACKEND.get().cloned();
    if client.is_none() {
        tracing::warn!("Global backend client is not initialized");
    }
    client
}

/// Build a client from the environment
pub fn create_backend() -> BackendResult<BackendClient> {
    BackendClient::new(&BackendConfig::from_env())
}
