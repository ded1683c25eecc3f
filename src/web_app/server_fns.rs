// web_app/server_fns.rs - Leptos server function declarations
//
// The browser never talks to the query-generation backend directly. These
// server functions run on the UI server and forward to `BackendClient`; on
// the client the #[server] macro turns them into POSTs to `/api`.
//
// This file must be compiled for BOTH ssr and hydrate features.

use leptos::prelude::*;
use crate::web_app::model::*;

#[cfg(feature = "ssr")]
async fn backend() -> Result<crate::web_app::api::BackendClient, ServerFnError> {
    use actix_web::{web::Data, HttpRequest};
    use leptos_actix::extract;
    use crate::web_app::api::{registry, BackendClient};

    // Context first (tests can provide one), then the global client
    if let Some(client) = use_context::<BackendClient>() {
        return Ok(client);
    }

    if let Some(client) = registry::get_backend() {
        return Ok(client);
    }

    match extract::<HttpRequest>().await {
        Ok(req) => {
            if let Some(client) = req.app_data::<Data<BackendClient>>() {
                return Ok(client.as_ref().clone());
            }
        }
        Err(e) => {
            tracing::error!("Failed to extract HttpRequest: {}", e);
        }
    }

    Err(ServerFnError::new("Backend client not available"))
}

/// Current backend status for the sidebar banner
#[server(GetHealth, "/api")]
pub async fn get_health() -> Result<HealthStatus, ServerFnError> {
    let client = backend().await?;

    client.fetch_health().await.map_err(|e| {
        tracing::error!("Health check failed: {}", e);
        ServerFnError::new(format!("Health check failed: {}", e))
    })
}

/// Turn a natural-language question into a generated query, summary, and
/// matching products
#[server(GenerateQuery, "/api")]
pub async fn generate_query(text: String) -> Result<ModelResponse, ServerFnError> {
    let client = backend().await?;

    client.generate_query(&text).await.map_err(|e| {
        tracing::error!("Generate query failed: {}", e);
        ServerFnError::new(format!("Query generation failed: {}", e))
    })
}
