// fixtures/payloads.rs
//
// Supplements cycle through a fixed catalogue so any result count can be
// produced; names get an index suffix to keep them distinct.

use serde_json::{json, Value};

use crate::web_app::model::{HealthStatus, ModelResponse, Product};

const CATALOGUE: [(&str, &str, f64); 4] = [
    ("Nature's Rest", "Magnesium Glycinate", 4.7),
    ("Calm Leaf", "Melatonin 3mg", 4.1),
    ("Sunwise", "Vitamin D3", 3.6),
    ("Deep Roots", "Ashwagandha Root", 2.2),
];

pub fn sample_health() -> HealthStatus {
    HealthStatus {
        message: "Alive!".to_string(),
        cache_count: 42,
    }
}

/// Product `index` of the sample catalogue
pub fn sample_product(index: usize) -> Product {
    let (brand, name, rating) = CATALOGUE[index % CATALOGUE.len()];
    Product {
        brand: brand.to_string(),
        name: format!("{} #{}", name, index + 1),
        image: format!("https://images.example.com/supplements/{}.png", index + 1),
        rating,
        summary: format!("Reviewers say {} helps them wind down.", name),
        description: format!("{} in easy-to-swallow capsules.", name),
        ingredients: "Active ingredient, rice flour, vegetable cellulose".to_string(),
        distance: 0.1 + index as f64 * 0.05,
        reviews: vec![
            "I <span className='annotation'>fell asleep faster</span> after a week.".to_string(),
            "No more waking up at 3am.".to_string(),
            "Capsules are large but <span className='annotation'>worth it</span>.".to_string(),
            "Bought a second bottle.".to_string(),
        ],
    }
}

/// A `/generate_query` response with `count` results
pub fn sample_response(text: &str, count: usize) -> ModelResponse {
    ModelResponse {
        query: format!(
            "{{ Get {{ Product(nearText: {{concepts: [\"{}\"]}}, limit: {}) {{ name brand }} }} }}",
            text, count
        ),
        generative_summary: format!("Top picks for \"{}\" focus on magnesium and melatonin.", text),
        results: (0..count).map(sample_product).collect(),
    }
}

/// JSON body the backend sends for `GET /health`
pub fn sample_health_json() -> Value {
    serde_json::to_value(sample_health()).unwrap_or(Value::Null)
}

/// JSON body the backend sends for `POST /generate_query`
pub fn sample_response_json(text: &str, count: usize) -> Value {
    serde_json::to_value(sample_response(text, count)).unwrap_or(Value::Null)
}

/// A health payload missing every field
pub fn empty_health_json() -> Value {
    json!({})
}
