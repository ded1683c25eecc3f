// common/mod.rs - Shared test utilities
//
// Provides a canned-response HTTP backend for exercising the real reqwest
// client: each test spawns its own axum router on an ephemeral port, so
// tests stay independent and can run in parallel.

#![allow(dead_code)]

#[cfg(feature = "backend-client")]
pub use canned::*;

#[cfg(feature = "backend-client")]
mod canned {
    use std::net::SocketAddr;
    use std::sync::{Arc, Mutex};

    use axum::extract::State;
    use axum::http::{header, Method, StatusCode, Uri};
    use axum::response::{IntoResponse, Response};
    use axum::Router;
    use healthsearch_web::web_app::api::{BackendClient, BackendConfig};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// One canned reply, matched on method and path
    #[derive(Clone, Debug)]
    pub struct Route {
        pub method: &'static str,
        pub path: &'static str,
        pub status: u16,
        pub body: String,
    }

    impl Route {
        pub fn json(method: &'static str, path: &'static str, body: serde_json::Value) -> Self {
            Self { method, path, status: 200, body: body.to_string() }
        }

        pub fn raw(method: &'static str, path: &'static str, status: u16, body: &str) -> Self {
            Self { method, path, status, body: body.to_string() }
        }
    }

    /// A request the canned backend received
    #[derive(Clone, Debug)]
    pub struct RecordedRequest {
        pub method: String,
        pub path: String,
        pub body: String,
    }

    #[derive(Clone)]
    struct Canned {
        routes: Arc<Vec<Route>>,
        requests: Arc<Mutex<Vec<RecordedRequest>>>,
    }

    pub struct CannedBackend {
        pub addr: SocketAddr,
        requests: Arc<Mutex<Vec<RecordedRequest>>>,
        handle: JoinHandle<()>,
    }

    impl CannedBackend {
        pub fn url(&self) -> String {
            format!("http://{}", self.addr)
        }

        pub fn client(&self) -> BackendClient {
            BackendClient::new(&BackendConfig {
                backend_url: self.url(),
                ..Default::default()
            })
            .expect("client for canned backend")
        }

        pub fn requests(&self) -> Vec<RecordedRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    impl Drop for CannedBackend {
        fn drop(&mut self) {
            self.handle.abort();
        }
    }

    /// Start a backend answering `routes`; anything else gets a 404.
    pub async fn spawn_backend(routes: Vec<Route>) -> anyhow::Result<CannedBackend> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let requests = Arc::new(Mutex::new(Vec::new()));

        let app = Router::new().fallback(answer).with_state(Canned {
            routes: Arc::new(routes),
            requests: Arc::clone(&requests),
        });

        let handle = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                eprintln!("Canned backend on {} stopped: {}", addr, e);
            }
        });

        Ok(CannedBackend { addr, requests, handle })
    }

    /// An address nothing is listening on
    pub async fn unused_addr() -> anyhow::Result<SocketAddr> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        drop(listener);
        Ok(addr)
    }

    async fn answer(
        State(canned): State<Canned>,
        method: Method,
        uri: Uri,
        body: String,
    ) -> Response {
        let path = uri.path().to_string();

        let reply = canned
            .routes
            .iter()
            .find(|r| r.method == method.as_str() && r.path == path)
            .map(|r| {
                let status = StatusCode::from_u16(r.status)
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                (status, r.body.clone())
            })
            .unwrap_or((StatusCode::NOT_FOUND, "not found".to_string()));

        canned.requests.lock().unwrap().push(RecordedRequest {
            method: method.to_string(),
            path,
            body,
        });

        (reply.0, [(header::CONTENT_TYPE, "application/json")], reply.1).into_response()
    }
}
