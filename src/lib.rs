// lib.rs - Root module for the healthsearch_web library
//
// The library is shared by the SSR server binary and the WASM bundle that
// hydrates the page in the browser.

/// Sample backend payloads for tests and local development
pub mod fixtures;

/// The Leptos application, its state, and the backend client
pub mod web_app;

/// WASM entry point: attaches the reactive app to the server-rendered HTML
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::web_app::App;

    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
