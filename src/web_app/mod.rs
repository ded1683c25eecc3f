// web_app/mod.rs - Root module for the Leptos web application
//
// Architecture:
// - model/: Session state and backend payload types (all targets)
// - view/: Pure view models computed from the model (all targets)
// - api/: reqwest client for the query-generation backend (server only)
// - server_fns: Server function declarations (both client and server)
// - components/: Reusable UI components (both SSR and hydrate)
// - pages/: Page-level components (both SSR and hydrate)
// - app.rs: Root application component with routing (both SSR and hydrate)

pub mod model;
pub mod view;

// Backend client - never compiled to WASM
#[cfg(feature = "backend-client")]
pub mod api;

// Server function declarations - must be available to both client and server
// The #[server] macro generates client stubs that call the server via HTTP
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod server_fns;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod components;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod pages;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;

// Re-export main app component for convenience
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub use app::App;
