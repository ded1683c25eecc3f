// tests/backend_client_tests.rs
// Exercises BackendClient against a canned HTTP backend

mod common;

use common::{spawn_backend, unused_addr, Route};
use healthsearch_web::fixtures::payloads::{empty_health_json, sample_health_json, sample_response_json};
use healthsearch_web::web_app::api::{BackendClient, BackendConfig, BackendError};

#[tokio::test]
async fn test_fetch_health() -> anyhow::Result<()> {
    let backend = spawn_backend(vec![Route::json("GET", "/health", sample_health_json())]).await?;

    let health = backend.client().fetch_health().await?;
    assert_eq!(health.message, "Alive!");
    assert_eq!(health.cache_count, 42);

    let requests = backend.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].path, "/health");
    Ok(())
}

#[tokio::test]
async fn test_fetch_health_missing_fields() -> anyhow::Result<()> {
    let backend = spawn_backend(vec![Route::json("GET", "/health", empty_health_json())]).await?;

    let health = backend.client().fetch_health().await?;
    assert_eq!(health.message, "");
    assert_eq!(health.cache_count, 0);
    Ok(())
}

#[tokio::test]
async fn test_generate_query_posts_text() -> anyhow::Result<()> {
    let backend = spawn_backend(vec![Route::json(
        "POST",
        "/generate_query",
        sample_response_json("best vitamin for sleep", 7),
    )])
    .await?;

    let response = backend.client().generate_query("best vitamin for sleep").await?;
    assert_eq!(response.results.len(), 7);
    assert!(response.query.contains("best vitamin for sleep"));
    assert!(!response.generative_summary.is_empty());

    let requests = backend.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].path, "/generate_query");
    let sent: serde_json::Value = serde_json::from_str(&requests[0].body)?;
    assert_eq!(sent, serde_json::json!({"text": "best vitamin for sleep"}));
    Ok(())
}

#[tokio::test]
async fn test_trailing_slash_in_base_url() -> anyhow::Result<()> {
    let backend = spawn_backend(vec![Route::json("GET", "/health", sample_health_json())]).await?;
    let client = BackendClient::new(&BackendConfig {
        backend_url: format!("{}/", backend.url()),
        ..Default::default()
    })?;

    client.fetch_health().await?;
    assert_eq!(backend.requests()[0].path, "/health");
    Ok(())
}

#[tokio::test]
async fn test_server_error_maps_to_status() -> anyhow::Result<()> {
    let backend = spawn_backend(vec![Route::raw("POST", "/generate_query", 500, "boom")]).await?;

    let err = backend.client().generate_query("zinc").await.unwrap_err();
    match err {
        BackendError::Status { status, body, .. } => {
            assert_eq!(status.as_u16(), 500);
            assert_eq!(body, "boom");
        }
        other => panic!("expected status error, got {other:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn test_malformed_json_maps_to_parse() -> anyhow::Result<()> {
    let backend = spawn_backend(vec![Route::raw("GET", "/health", 200, "<html>oops</html>")]).await?;

    let err = backend.client().fetch_health().await.unwrap_err();
    assert!(matches!(err, BackendError::Parse { .. }), "got {err:?}");
    Ok(())
}

#[tokio::test]
async fn test_wrong_shape_maps_to_parse() -> anyhow::Result<()> {
    let backend = spawn_backend(vec![Route::raw(
        "POST",
        "/generate_query",
        200,
        r#"{"results": "not a list"}"#,
    )])
    .await?;

    let err = backend.client().generate_query("zinc").await.unwrap_err();
    assert!(matches!(err, BackendError::Parse { .. }), "got {err:?}");
    Ok(())
}

#[tokio::test]
async fn test_unreachable_backend_maps_to_network() -> anyhow::Result<()> {
    let addr = unused_addr().await?;
    let client = BackendClient::new(&BackendConfig {
        backend_url: format!("http://{}", addr),
        ..Default::default()
    })?;

    let err = client.fetch_health().await.unwrap_err();
    assert!(matches!(err, BackendError::Network { .. }), "got {err:?}");
    assert!(err.to_string().starts_with("Backend unreachable at"));
    Ok(())
}

#[tokio::test]
async fn test_unrouted_path_maps_to_not_found() -> anyhow::Result<()> {
    let backend = spawn_backend(vec![Route::json("GET", "/health", sample_health_json())]).await?;

    let err = backend.client().generate_query("iron").await.unwrap_err();
    match err {
        BackendError::Status { status, body, .. } => {
            assert_eq!(status.as_u16(), 404);
            assert_eq!(body, "not found");
        }
        other => panic!("expected status error, got {other:?}"),
    }

    // The request is still recorded with its JSON body
    let requests = backend.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "POST");
    let sent: serde_json::Value = serde_json::from_str(&requests[0].body)?;
    assert_eq!(sent["text"], "iron");
    Ok(())
}
