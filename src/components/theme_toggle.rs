//! Light/dark toggle button.

use leptos::prelude::*;

use crate::state::context::use_theme;

/// Button flipping the provided theme. Shows a sun while dark and a moon
/// while light.
#[component]
pub fn ThemeToggle(#[prop(optional, into)] class: Option<String>) -> impl IntoView {
    let theme = use_theme();
    let class = class.unwrap_or_else(|| "btn theme-toggle".to_owned());

    view! {
        <button
            class=class
            title="Toggle dark mode"
            aria-pressed=move || if theme.is_dark() { "true" } else { "false" }
            on:click=move |_| theme.toggle_theme()
        >
            {move || if theme.is_dark() { "\u{2600}" } else { "\u{263E}" }}
        </button>
    }
}
