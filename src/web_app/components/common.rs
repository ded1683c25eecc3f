// web_app/components/common.rs - Reusable UI components
//
// Small, stateless building blocks that receive all data via props.

use leptos::prelude::*;

/// Loading spinner component
///
/// Displays a centered spinner with optional message.
#[component]
pub fn Loading(
    /// Optional message to display below the spinner
    #[prop(default = "Loading...")]
    message: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center p-12">
            <div class="animate-spin rounded-full h-10 w-10 border-4 border-gray-200 border-t-blue-600"></div>
            <span class="mt-4 text-gray-500 font-medium animate-pulse">{message}</span>
        </div>
    }
}

/// Error display component
///
/// Shown in place of a panel whose backend call failed; the rest of the
/// page stays usable.
#[component]
pub fn ErrorDisplay(
    /// The error message to display
    error: String,
    #[prop(default = "Error Occurred")]
    title: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-red-50 border border-red-200 rounded-xl p-6 flex items-start gap-4">
            <div class="bg-red-100 p-2 rounded-full text-red-600">
                <span class="text-xl font-bold">"⚠"</span>
            </div>
            <div>
                <h3 class="text-red-800 font-bold mb-1">{title}</h3>
                <p class="text-red-600 text-sm">{error}</p>
            </div>
        </div>
    }
}

/// Primary button component
#[component]
pub fn Button(
    /// Button label text
    children: Children,
    /// Whether the button is disabled
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
    /// Button type (submit, button, reset)
    #[prop(default = "button")]
    button_type: &'static str,
    /// Additional CSS classes
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let base_class = "px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700 \
                      transition-colors disabled:bg-gray-400 disabled:cursor-not-allowed \
                      font-medium shadow-sm active:transform active:scale-95";

    view! {
        <button
            type=button_type
            disabled=move || disabled.get()
            class=format!("{} {}", base_class, class)
        >
            {children()}
        </button>
    }
}

/// Labeled text input with optional help text
#[component]
pub fn TextInput(
    /// The current value
    value: RwSignal<String>,
    label: &'static str,
    #[prop(optional)]
    help: Option<&'static str>,
    #[prop(default = "")]
    placeholder: &'static str,
) -> impl IntoView {
    let class = "w-full px-4 py-2 border border-gray-300 rounded-lg \
                 focus:ring-2 focus:ring-blue-500 focus:border-transparent \
                 outline-none transition-shadow shadow-sm";

    view! {
        <label class="block">
            <span class="block text-sm font-medium text-gray-700 mb-1" title=help>
                {label}
                {help.map(|_| view! { <span class="ml-1 text-gray-400 cursor-help">"ⓘ"</span> })}
            </span>
            <input
                type="text"
                placeholder=placeholder
                class=class
                prop:value=move || value.get()
                on:input=move |ev| {
                    value.set(event_target_value(&ev));
                }
            />
        </label>
    }
}

/// Checkbox component
///
/// A styled checkbox with label.
#[component]
pub fn Checkbox(
    /// Whether the checkbox is checked; the owner updates it from `on_change`
    #[prop(into)]
    checked: Signal<bool>,
    /// Label text
    label: String,
    /// Change handler
    #[prop(optional)]
    on_change: Option<Callback<bool>>,
) -> impl IntoView {
    view! {
        <label class="flex items-center gap-3 cursor-pointer group">
            <input
                type="checkbox"
                class="rounded border-gray-300 text-blue-600 focus:ring-blue-500 h-4 w-4"
                prop:checked=move || checked.get()
                on:change=move |ev| {
                    let new_value = event_target_checked(&ev);
                    if let Some(handler) = on_change {
                        handler.run(new_value);
                    }
                }
            />
            <span class="text-gray-700 group-hover:text-gray-900 transition-colors">{label}</span>
        </label>
    }
}

/// Star rating display component
///
/// One ⭐ per whole rating point, no half or empty stars.
#[component]
pub fn StarRating(
    /// Pre-rendered star glyphs
    stars: String,
    /// Hover text with the exact rating
    title: String,
) -> impl IntoView {
    view! {
        <div class="text-lg leading-none" title=title>
            {stars}
        </div>
    }
}
