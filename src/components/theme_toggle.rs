//! Theme Toggle Component

use leptos::prelude::*;

use crate::context::use_theme;
use crate::theme::ElementRole;

/// Button flipping between dark and light mode
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();

    let label = move || {
        if theme.dark_mode.get() { "Switch to light mode" } else { "Switch to dark mode" }
    };
    let icon = move || if theme.dark_mode.get() { "☀" } else { "☾" };

    view! {
        <button
            class=theme.token(ElementRole::ThemeToggle)
            aria-label=label
            on:click=move |ev: web_sys::MouseEvent| {
                ev.prevent_default();
                theme.toggle();
            }
        >
            {icon}
        </button>
    }
}
