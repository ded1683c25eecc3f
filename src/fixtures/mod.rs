// fixtures/mod.rs - Sample backend payloads
//
// Realistic `/health` and `/generate_query` payloads, shared by unit tests,
// integration tests, and anyone running the UI against a stub backend.
// Each payload is available both as typed model values and as the JSON the
// backend would send.

pub mod payloads;

pub use payloads::{sample_health, sample_product, sample_response};
