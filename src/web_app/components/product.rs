// web_app/components/product.rs - Product display components
//
// Components for displaying backend results:
// - ProductGrid: rows of three card slots
// - ProductCard: one supplement with its generated review summary
// - ProductDetail: description, ingredients, distance, first reviews
// - ReviewLine: a review with its highlighted passages

use leptos::prelude::*;

use super::common::StarRating;
use crate::web_app::model::Product;
use crate::web_app::view::{
    product_rows, ProductCardView, ProductDetailView, ReviewText, Segment, PRODUCT_IMAGE_WIDTH,
};

/// Product card for the results grid
#[component]
pub fn ProductCard(
    product: Product,
    /// Whether to include the detail block
    show_detail: bool,
) -> impl IntoView {
    let card = ProductCardView::new(&product, show_detail);

    view! {
        <div class="flex flex-col gap-2">
            <hr class="border-2 border-gray-400" />
            <span class="text-sm text-gray-500 font-mono">{card.brand}</span>
            <h3 class="font-bold text-gray-900 text-lg">{card.name}</h3>
            <img
                src=card.image
                width=PRODUCT_IMAGE_WIDTH.to_string()
                class="rounded-lg"
                alt=""
            />
            <StarRating stars=card.stars title=card.rating_title />
            <p class="text-gray-700">
                "🤖 "
                <strong>"Generated Review Summary"</strong>
                " "
                {card.review_summary}
            </p>
            {card.detail.map(|detail| view! { <ProductDetail detail=detail /> })}
        </div>
    }
}

/// Extended product information
#[component]
pub fn ProductDetail(detail: ProductDetailView) -> impl IntoView {
    view! {
        <div class="space-y-2 text-gray-700">
            <p>"📝 Description:" {detail.description}</p>
            <p>"🍏 Ingredients:" {detail.ingredients}</p>
            <p>"📏 Distance: " {detail.distance}</p>
            {detail
                .reviews
                .into_iter()
                .map(|review| view! { <ReviewLine review=review /> })
                .collect_view()}
        </div>
    }
}

/// A review with annotated passages highlighted
#[component]
pub fn ReviewLine(review: ReviewText) -> impl IntoView {
    view! {
        <p class="text-sm">
            {review
                .into_segments()
                .into_iter()
                .map(|segment| match segment {
                    Segment::Plain(text) => view! { <span>{text}</span> }.into_any(),
                    Segment::Highlight(text) => view! {
                        <span class="review-highlight text-red-600">{text}</span>
                    }
                    .into_any(),
                })
                .collect_view()}
        </p>
    }
}

/// Results grid component
///
/// Renders `ceil(n / 3)` rows of three slots. Slots past the last product
/// stay empty.
#[component]
pub fn ProductGrid(
    results: Vec<Product>,
    show_detail: bool,
) -> impl IntoView {
    let rows = product_rows(&results)
        .into_iter()
        .map(|row| {
            let slots = row
                .into_iter()
                .map(|slot| {
                    let card = slot.cloned().map(|product| {
                        view! { <ProductCard product=product show_detail=show_detail /> }
                    });
                    view! { <div class="min-w-0">{card}</div> }
                })
                .collect_view();
            view! { <div class="grid grid-cols-3 gap-6">{slots}</div> }
        })
        .collect_view();

    view! {
        <div class="w-full space-y-8">{rows}</div>
    }
}
