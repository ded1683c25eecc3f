// web_app/api/backend.rs - HTTP client for the query-generation backend
//
// Two calls, no retries: `GET /health` and `POST /generate_query`. Every
// failure comes back as a `BackendError`; callers decide how to show it.

use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use thiserror::Error;

use super::config::BackendConfig;
use crate::web_app::model::{HealthStatus, ModelResponse, UserQuery};

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("Invalid backend configuration: {0}")]
    Config(String),

    #[error("Backend unreachable at {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Backend returned {status} for {url}: {body}")]
    Status {
        url: String,
        status: StatusCode,
        body: String,
    },

    #[error("Malformed response from {url}: {source}")]
    Parse {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

pub type BackendResult<T> = Result<T, BackendError>;

#[derive(Clone, Debug)]
pub struct BackendClient {
    http: Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(config: &BackendConfig) -> BackendResult<Self> {
        let base_url = config.backend_url.trim_end_matches('/').to_string();

        let parsed = Url::parse(&base_url)
            .map_err(|e| BackendError::Config(format!("{}: {}", config.backend_url, e)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(BackendError::Config(format!(
                "{}: scheme must be http or https",
                config.backend_url
            )));
        }

        let http = Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| BackendError::Config(e.to_string()))?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// `GET {backend}/health`
    pub async fn fetch_health(&self) -> BackendResult<HealthStatus> {
        let url = self.endpoint("health");
        tracing::debug!("Health check: {}", url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|source| BackendError::Network { url: url.clone(), source })?;

        let health: HealthStatus = decode(&url, response).await?;
        tracing::info!(
            "Backend health: message='{}', cache_count={}",
            health.message,
            health.cache_count
        );
        Ok(health)
    }

    /// `POST {backend}/generate_query` with `{"text": text}`
    pub async fn generate_query(&self, text: &str) -> BackendResult<ModelResponse> {
        let url = self.endpoint("generate_query");
        let body = UserQuery { text: text.to_string() };
        tracing::info!("Generate query request: text='{}'", text);

        let response = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|source| BackendError::Network { url: url.clone(), source })?;

        let generated: ModelResponse = decode(&url, response).await?;
        tracing::info!("Generate query successful: {} results", generated.results.len());
        Ok(generated)
    }
}

async fn decode<T: DeserializeOwned>(url: &str, response: reqwest::Response) -> BackendResult<T> {
    let status = response.status();
    let body = response.text().await.map_err(|source| BackendError::Network {
        url: url.to_string(),
        source,
    })?;

    if !status.is_success() {
        return Err(BackendError::Status {
            url: url.to_string(),
            status,
            body,
        });
    }

    serde_json::from_str(&body).map_err(|source| BackendError::Parse {
        url: url.to_string(),
        source,
    })
}
