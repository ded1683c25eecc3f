// web_app/pages/search.rs - Health search page
//
// The only page of the app. It owns the session state and runs each
// render cycle: health check, sidebar, title, query form, and the result
// panels for whatever phase the current query is in.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::web_app::components::*;
use crate::web_app::model::*;
use crate::web_app::server_fns::{generate_query, get_health};
use crate::web_app::view::summary_line;

/// Main search page component
#[component]
pub fn HealthSearchPage() -> impl IntoView {
    let session = RwSignal::new(SessionState::new());

    // Bumped on every interaction; the health check reruns once per bump
    let render_cycle = RwSignal::new(0_u32);

    let health = Resource::new(move || render_cycle.get(), |_| get_health());

    let pending = Signal::derive(move || session.with(|s| s.phase().is_loading()));
    let show_detail = Signal::derive(move || session.with(|s| s.show_product_detail()));

    let on_toggle_detail = Callback::new(move |show: bool| {
        session.update(|s| s.set_show_product_detail(show));
        render_cycle.update(|c| *c += 1);
    });

    let on_submit = Callback::new(move |text: String| {
        let request = session
            .try_update(|s| {
                s.set_query_text(text);
                s.begin_submit()
            })
            .flatten();
        let Some(text) = request else {
            tracing::debug!("Submit ignored: request already in flight");
            return;
        };
        render_cycle.update(|c| *c += 1);

        spawn_local(async move {
            let result = generate_query(text).await.map_err(|e| e.to_string());
            session.update(|s| s.finish_submit(result));
        });
    });

    view! {
        <div class="min-h-screen bg-gray-50 font-sans text-gray-900 flex flex-col lg:flex-row">
            <Sidebar>
                <Checkbox
                    checked=show_detail
                    label="Show Product Detail".to_string()
                    on_change=on_toggle_detail
                />
                <Suspense fallback=|| view! { <Loading message="Checking backend..." /> }>
                    {move || {
                        health.get().map(|result| {
                            let state = HealthState::from_result(result.map_err(|e| e.to_string()));
                            view! { <HealthBanner health=state /> }
                        })
                    }}
                </Suspense>
            </Sidebar>

            <main class="flex-1 max-w-6xl mx-auto px-4 sm:px-6 lg:px-8 py-8 space-y-8">
                <h1 class="text-3xl font-bold text-center text-black">
                    "HealthSearch Powered by Weaviate and Leptos"
                </h1>

                <section class="bg-white rounded-2xl shadow-sm p-6 border border-gray-100">
                    <QueryForm
                        initial_text=session.with_untracked(|s| s.query_text().to_string())
                        pending=pending
                        on_submit=on_submit
                    />
                </section>

                <section class="space-y-6">
                    {move || session.with(results_view)}
                </section>
            </main>
        </div>
    }
}

/// Panels for the current query phase
///
/// Only a rendered response shows the query, summary, and grid.
fn results_view(state: &SessionState) -> AnyView {
    let show_detail = state.show_product_detail();

    match state.phase() {
        QueryPhase::Idle => ().into_any(),
        QueryPhase::Loading => view! { <Loading message="Generating query..." /> }.into_any(),
        QueryPhase::Failed(message) => view! {
            <ErrorDisplay title="Query generation failed" error=message.clone() />
        }
        .into_any(),
        QueryPhase::Rendered(response) => view! {
            <GeneratedQueryPanel query=response.query.clone() />
            <GeneratedSummary line=summary_line(response) />
            <ProductGrid results=response.results.clone() show_detail=show_detail />
        }
        .into_any(),
    }
}
