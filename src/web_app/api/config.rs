// web_app/api/config.rs - Backend connection settings
//
// Read once at startup from the environment (a `.env` file is honored).
// Unset or blank variables fall back to defaults that match the
// docker-compose service name of the backend.

use std::env;

use tracing::info;

pub const DEFAULT_BACKEND_URL: &str = "http://backend:8000";

pub const BACKEND_URL_VAR: &str = "BACKEND_URL";
pub const USER_AGENT_VAR: &str = "BACKEND_USER_AGENT";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BackendConfig {
    /// Base URL the `/health` and `/generate_query` paths are appended to
    pub backend_url: String,
    pub user_agent: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            user_agent: default_user_agent(),
        }
    }
}

impl BackendConfig {
    /// Loads settings from the process environment.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads settings through `lookup`, falling back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            backend_url: load(&lookup, BACKEND_URL_VAR, DEFAULT_BACKEND_URL),
            user_agent: load(&lookup, USER_AGENT_VAR, &default_user_agent()),
        }
    }
}

fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

fn load(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: &str) -> String {
    lookup(key)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
}
