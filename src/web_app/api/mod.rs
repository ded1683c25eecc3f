// web_app/api/mod.rs - Server-side access to the query-generation backend
//
// config: environment settings
// backend: reqwest client and error type
// registry: the process-wide client used by server functions

pub mod backend;
pub mod config;
pub mod registry;

pub use backend::{BackendClient, BackendError, BackendResult};
pub use config::BackendConfig;
