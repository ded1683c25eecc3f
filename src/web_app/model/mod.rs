// web_app/model/mod.rs - Shared data models for client and server
//
// These structs mirror the JSON exchanged with the query-generation backend
// and hold the per-session UI state. They compile for every target (SSR,
// hydrate, and plain test builds) since nothing here touches Leptos.

use serde::{Deserialize, Serialize};

/// Payload of `GET /health`
///
/// Fields default when the backend omits them, so the banner shows an
/// empty value instead of failing the page.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub cache_count: i64,
}

/// Body of `POST /generate_query`
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserQuery {
    pub text: String,
}

/// One supplement returned by the backend
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    pub brand: String,
    pub name: String,
    pub image: String,
    pub rating: f64,
    pub summary: String,
    pub description: String,
    pub ingredients: String,
    pub distance: f64,
    pub reviews: Vec<String>,
}

/// Payload of `POST /generate_query`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelResponse {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub generative_summary: String,
    #[serde(default)]
    pub results: Vec<Product>,
}

/// Last known backend health
#[derive(Clone, Debug, Default, PartialEq)]
pub enum HealthState {
    /// No health check has completed yet
    #[default]
    Unknown,
    Ok(HealthStatus),
    Unavailable(String),
}

impl HealthState {
    pub fn from_result(result: Result<HealthStatus, String>) -> Self {
        match result {
            Ok(status) => HealthState::Ok(status),
            Err(message) => HealthState::Unavailable(message),
        }
    }

    /// Status to display; empty when the check has not succeeded
    pub fn status(&self) -> HealthStatus {
        match self {
            HealthState::Ok(status) => status.clone(),
            _ => HealthStatus::default(),
        }
    }
}

/// Where the current query is in its request lifecycle
#[derive(Clone, Debug, Default, PartialEq)]
pub enum QueryPhase {
    /// Nothing submitted yet
    #[default]
    Idle,
    /// Request in flight
    Loading,
    /// Latest response, kept until the next submit
    Rendered(ModelResponse),
    /// Latest request failed; the message is shown inline
    Failed(String),
}

impl QueryPhase {
    pub fn is_loading(&self) -> bool {
        matches!(self, QueryPhase::Loading)
    }

    pub fn response(&self) -> Option<&ModelResponse> {
        match self {
            QueryPhase::Rendered(response) => Some(response),
            _ => None,
        }
    }
}

/// User-controlled display toggles
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiFlags {
    pub show_product_detail: bool,
}

/// Everything one browser session knows
///
/// Created when the page mounts and dropped with it. The page owns exactly
/// one instance and is its only writer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    health: HealthState,
    query: UserQuery,
    phase: QueryPhase,
    flags: UiFlags,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn health(&self) -> &HealthState {
        &self.health
    }

    /// Replaces the health state wholesale
    pub fn set_health(&mut self, health: HealthState) {
        self.health = health;
    }

    pub fn query_text(&self) -> &str {
        &self.query.text
    }

    pub fn set_query_text(&mut self, text: impl Into<String>) {
        self.query.text = text.into();
    }

    pub fn show_product_detail(&self) -> bool {
        self.flags.show_product_detail
    }

    pub fn set_show_product_detail(&mut self, show: bool) {
        self.flags.show_product_detail = show;
    }

    pub fn flags(&self) -> UiFlags {
        self.flags
    }

    pub fn phase(&self) -> &QueryPhase {
        &self.phase
    }

    pub fn response(&self) -> Option<&ModelResponse> {
        self.phase.response()
    }

    /// Moves to `Loading` and returns the text to send.
    ///
    /// Returns `None` without touching the state while a request is already
    /// in flight.
    pub fn begin_submit(&mut self) -> Option<String> {
        if self.phase.is_loading() {
            return None;
        }
        self.phase = QueryPhase::Loading;
        Some(self.query.text.clone())
    }

    /// Stores the outcome of the request started by `begin_submit`,
    /// replacing any previous response or error.
    pub fn finish_submit(&mut self, result: Result<ModelResponse, String>) {
        self.phase = match result {
            Ok(response) => QueryPhase::Rendered(response),
            Err(message) => QueryPhase::Failed(message),
        };
    }
}
