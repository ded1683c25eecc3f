// web_app/view/mod.rs - Pure view models
//
// Everything the components display is computed here from plain data, so
// the layout rules (grid partitioning, star count, detail gating, review
// highlighting) are testable without a Leptos runtime. The components in
// `web_app::components` only turn these values into markup.

pub mod review;

pub use review::{highlight_annotations, ReviewText, Segment};

use crate::web_app::model::{HealthStatus, ModelResponse, Product};

/// Cards per grid row
pub const PRODUCTS_PER_ROW: usize = 3;
/// Reviews shown in a card's detail block
pub const MAX_REVIEWS_SHOWN: usize = 3;
pub const MAX_STARS: usize = 5;
pub const STAR_GLYPH: &str = "⭐";
/// Product image width in pixels
pub const PRODUCT_IMAGE_WIDTH: u32 = 300;

pub const SUMMARY_PREFIX: &str = "✨ Generated Product Summary: ";

/// One grid row; `None` marks an empty slot after the last product
pub type ProductRow<'a> = [Option<&'a Product>; PRODUCTS_PER_ROW];

/// Product at `index`, or `None` when the index is past the end.
pub fn product_slot(results: &[Product], index: usize) -> Option<&Product> {
    results.get(index)
}

/// Splits results into rows of three slots.
///
/// Always yields `ceil(n / 3)` rows; only the last row can have empty slots.
pub fn product_rows(results: &[Product]) -> Vec<ProductRow<'_>> {
    (0..results.len())
        .step_by(PRODUCTS_PER_ROW)
        .map(|start| {
            let row: ProductRow<'_> =
                std::array::from_fn(|offset| product_slot(results, start + offset));
            row
        })
        .collect()
}

/// Whole stars for a rating, clamped to `0..=5`. NaN counts as zero.
pub fn star_count(rating: f64) -> usize {
    if rating.is_nan() {
        return 0;
    }
    rating.floor().clamp(0.0, MAX_STARS as f64) as usize
}

pub fn star_glyphs(rating: f64) -> String {
    STAR_GLYPH.repeat(star_count(rating))
}

/// Hover title for a card's star row; shows the exact rating.
pub fn rating_title(rating: f64) -> String {
    format!("Rating: {:.1}", rating)
}

pub fn summary_line(response: &ModelResponse) -> String {
    format!("{}{}", SUMMARY_PREFIX, response.generative_summary)
}

pub fn backend_status_line(status: &HealthStatus) -> String {
    format!("Weaviate backend: {}", status.message)
}

pub fn cache_count_line(status: &HealthStatus) -> String {
    format!("Cached query count: {}", status.cache_count)
}

/// Fields shown on every product card
#[derive(Clone, Debug, PartialEq)]
pub struct ProductCardView {
    pub brand: String,
    pub name: String,
    pub image: String,
    pub stars: String,
    pub rating_title: String,
    pub review_summary: String,
    /// Present only while product detail is switched on
    pub detail: Option<ProductDetailView>,
}

/// Extra fields behind the "Show Product Detail" toggle
#[derive(Clone, Debug, PartialEq)]
pub struct ProductDetailView {
    pub description: String,
    pub ingredients: String,
    pub distance: String,
    pub reviews: Vec<ReviewText>,
}

impl ProductCardView {
    pub fn new(product: &Product, show_detail: bool) -> Self {
        Self {
            brand: product.brand.clone(),
            name: product.name.clone(),
            image: product.image.clone(),
            stars: star_glyphs(product.rating),
            rating_title: rating_title(product.rating),
            review_summary: product.summary.clone(),
            detail: show_detail.then(|| ProductDetailView::new(product)),
        }
    }
}

impl ProductDetailView {
    pub fn new(product: &Product) -> Self {
        Self {
            description: product.description.clone(),
            ingredients: product.ingredients.clone(),
            // Debug formatting keeps the trailing `.0` on whole distances
            distance: format!("{:?}", product.distance),
            reviews: product
                .reviews
                .iter()
                .take(MAX_REVIEWS_SHOWN)
                .map(|review| ReviewText::parse(review))
                .collect(),
        }
    }
}

/// Card views for a whole grid, row by row
pub fn card_rows(results: &[Product], show_detail: bool) -> Vec<Vec<Option<ProductCardView>>> {
    product_rows(results)
        .into_iter()
        .map(|row| {
            row.into_iter()
                .map(|slot| slot.map(|product| ProductCardView::new(product, show_detail)))
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(name: &str, rating: f64, reviews: usize) -> Product {
        Product {
            brand: "Acme".to_string(),
            name: name.to_string(),
            image: format!("https://img.example/{}.png", name),
            rating,
            summary: "Users report calmer evenings.".to_string(),
            description: "Magnesium glycinate".to_string(),
            ingredients: "Magnesium, rice flour".to_string(),
            distance: 0.25,
            reviews: (0..reviews).map(|i| format!("review {}", i)).collect(),
        }
    }

    #[test]
    fn test_star_count() {
        let cases: [(f64, usize); 8] = [
            (0.0, 0),
            (1.0, 1),
            (3.5, 3),
            (4.7, 4),
            (5.0, 5),
            (7.0, 5),
            (-2.0, 0),
            (f64::NAN, 0),
        ];
        for (rating, expected) in cases {
            assert_eq!(star_count(rating), expected, "Stars for rating {}", rating);
        }
    }

    #[test]
    fn test_star_glyphs() {
        assert_eq!(star_glyphs(4.7), "⭐⭐⭐⭐");
        assert_eq!(star_glyphs(0.0), "");
        assert_eq!(star_glyphs(f64::INFINITY), "⭐⭐⭐⭐⭐");
    }

    #[test]
    fn test_rating_title() {
        assert_eq!(rating_title(4.66), "Rating: 4.7");
        assert_eq!(rating_title(5.0), "Rating: 5.0");
        // Out-of-range ratings are shown as sent; only the stars are clamped
        assert_eq!(rating_title(9.0), "Rating: 9.0");
        assert_eq!(rating_title(-1.0), "Rating: -1.0");
        assert_eq!(rating_title(f64::NAN), "Rating: NaN");

        let card = ProductCardView::new(&product("zinc", 9.0, 0), false);
        assert_eq!(card.stars, "⭐⭐⭐⭐⭐");
        assert_eq!(card.rating_title, "Rating: 9.0");
    }

    #[test]
    fn test_distance_keeps_decimal_point() {
        let mut whole = product("zinc", 4.0, 0);
        whole.distance = 1.0;
        assert_eq!(ProductDetailView::new(&whole).distance, "1.0");

        whole.distance = 0.0;
        assert_eq!(ProductDetailView::new(&whole).distance, "0.0");
    }

    #[test]
    fn test_product_slot_out_of_range() {
        let results = vec![product("a", 4.0, 0)];
        assert!(product_slot(&results, 0).is_some());
        assert!(product_slot(&results, 1).is_none());
        assert!(product_slot(&[], 0).is_none());
    }

    #[test]
    fn test_rows_partial_last_row() {
        let results: Vec<Product> = (0..5).map(|i| product(&i.to_string(), 3.0, 0)).collect();
        let rows = product_rows(&results);

        assert_eq!(rows.len(), 2);
        assert!(rows[0].iter().all(Option::is_some));
        assert_eq!(rows[1].iter().filter(|slot| slot.is_some()).count(), 2);
        assert!(rows[1][2].is_none());
        assert_eq!(rows[1][0].map(|p| p.name.as_str()), Some("3"));
    }

    #[test]
    fn test_card_without_detail() {
        let card = ProductCardView::new(&product("zinc", 4.2, 5), false);
        assert_eq!(card.stars, "⭐⭐⭐⭐");
        assert_eq!(card.brand, "Acme");
        assert!(card.detail.is_none());
    }

    #[test]
    fn test_detail_caps_reviews() {
        let detail = ProductDetailView::new(&product("zinc", 4.2, 5));
        assert_eq!(detail.reviews.len(), MAX_REVIEWS_SHOWN);
        assert_eq!(detail.reviews[2].plain_text(), "review 2");
        assert_eq!(detail.distance, "0.25");

        let detail = ProductDetailView::new(&product("zinc", 4.2, 1));
        assert_eq!(detail.reviews.len(), 1);
    }

    #[test]
    fn test_summary_and_health_lines() {
        let response = ModelResponse {
            generative_summary: "Magnesium helps.".to_string(),
            ..Default::default()
        };
        assert_eq!(summary_line(&response), "✨ Generated Product Summary: Magnesium helps.");

        let status = HealthStatus { message: "Alive!".to_string(), cache_count: 7 };
        assert_eq!(backend_status_line(&status), "Weaviate backend: Alive!");
        assert_eq!(cache_count_line(&status), "Cached query count: 7");
    }
}
