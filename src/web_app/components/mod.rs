// web_app/components/mod.rs - UI components module
//
// Structure:
// - common.rs: Reusable atomic components (Button, Checkbox, Loading, etc.)
// - search.rs: Query form and generated query/summary panels
// - sidebar.rs: About panel and backend health banner
// - product.rs: Product grid, cards, and review highlighting

pub mod common;
pub mod product;
pub mod search;
pub mod sidebar;

// Re-export commonly used components for convenience
pub use common::*;
pub use product::*;
pub use search::*;
pub use sidebar::*;
