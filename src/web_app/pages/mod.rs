// web_app/pages/mod.rs - Page components module
//
// - HealthSearchPage: query form, generated panels, and product grid

pub mod search;

// Re-export page components
pub use search::HealthSearchPage;
