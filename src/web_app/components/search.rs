// web_app/components/search.rs - Query form and generated-output panels
//
// - QueryForm: natural-language input plus the Generate button
// - GeneratedQueryPanel: the backend's GraphQL query, collapsed by default
// - GeneratedSummary: one-line generative summary of the results

use leptos::prelude::*;

use super::common::{Button, TextInput};

pub const QUERY_HELP: &str = "Search for products with specific health effects based \
                              on user-written reviews. Press Generate to create a \
                              GraphQL Query. Use the generated query to retrieve a \
                              list of products. Check Show Product Detail for more \
                              information.";

/// Query form
///
/// Keeps its own copy of the text so typing does not touch the session;
/// `on_submit` receives the text when the form is submitted.
#[component]
pub fn QueryForm(
    /// Text shown when the form first renders
    #[prop(into)]
    initial_text: String,
    /// True while a request is in flight
    pending: Signal<bool>,
    on_submit: Callback<String>,
) -> impl IntoView {
    let text = RwSignal::new(initial_text);

    let submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(text.get());
    };

    view! {
        <form on:submit=submit class="w-full space-y-4">
            <TextInput
                value=text
                label="Natural Language Query"
                help=QUERY_HELP
                placeholder="e.g. best vitamin for sleep"
            />
            <Button button_type="submit" disabled=pending>
                {move || if pending.get() { "Generating..." } else { "Generate" }}
            </Button>
        </form>
    }
}

/// Generated GraphQL query inside a closed disclosure
#[component]
pub fn GeneratedQueryPanel(
    #[prop(into)]
    query: String,
) -> impl IntoView {
    view! {
        <details class="bg-white rounded-xl border border-gray-200 shadow-sm">
            <summary class="px-4 py-3 cursor-pointer font-medium text-gray-700 select-none">
                "GraphQL Query"
            </summary>
            <pre class="px-4 pb-4 text-sm overflow-x-auto">
                <code class="font-mono text-gray-800">{query}</code>
            </pre>
        </details>
    }
}

#[component]
pub fn GeneratedSummary(
    /// Full line including the label
    #[prop(into)]
    line: String,
) -> impl IntoView {
    view! {
        <p class="text-gray-800 leading-relaxed">{line}</p>
    }
}
