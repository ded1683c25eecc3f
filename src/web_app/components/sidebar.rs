// web_app/components/sidebar.rs - About text, detail toggle, backend health

use leptos::prelude::*;

use super::common::ErrorDisplay;
use crate::web_app::model::HealthState;
use crate::web_app::view::{backend_status_line, cache_count_line};

pub const ABOUT_TEXT: &str = "Converts natural language to a GraphQL query to search for \
                              supplements with specific health effects based on user-written \
                              reviews. The demo uses generative search to further enhance the \
                              results by providing product and review summaries.";

pub const UPSTREAM_DEMO_URL: &str = "https://github.com/weaviate/healthsearch-demo";
pub const BLOG_URL: &str = "https://weaviate.io/blog/healthsearch-demo";

/// Static project description
#[component]
pub fn AboutPanel() -> impl IntoView {
    view! {
        <section class="space-y-3">
            <h2 class="text-lg font-bold text-gray-900">"About"</h2>
            <div class="bg-blue-50 border border-blue-100 rounded-lg p-4 text-sm text-blue-900 space-y-2">
                <p>"Welcome to the Rust version of Healthsearch!"</p>
                <p>{ABOUT_TEXT}</p>
                <p>
                    "Check the original Weaviate Healthsearch code at "
                    <a class="underline" href=UPSTREAM_DEMO_URL>{UPSTREAM_DEMO_URL}</a>
                </p>
                <p>
                    "Read about the demo at "
                    <a class="underline" href=BLOG_URL>{BLOG_URL}</a>
                </p>
            </div>
        </section>
    }
}

/// Backend status lines
///
/// An unknown state renders empty values; a failed check renders inline.
#[component]
pub fn HealthBanner(health: HealthState) -> impl IntoView {
    match health {
        HealthState::Unavailable(message) => view! {
            <ErrorDisplay title="Backend unavailable" error=message />
        }
        .into_any(),
        other => {
            let status = other.status();
            view! {
                <div class="text-sm text-gray-700 space-y-1">
                    <p>{backend_status_line(&status)}</p>
                    <p>{cache_count_line(&status)}</p>
                </div>
            }
            .into_any()
        }
    }
}

/// Sidebar layout
///
/// The banner is passed in as children so the page can wrap it in its own
/// Suspense boundary.
#[component]
pub fn Sidebar(children: Children) -> impl IntoView {
    view! {
        <aside class="w-full lg:w-80 flex-shrink-0 bg-white border-r border-gray-200 p-6 space-y-6">
            <AboutPanel />
            {children()}
        </aside>
    }
}
