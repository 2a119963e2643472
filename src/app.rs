//! Landing Page App
//!
//! Carousel, task grid and theme toggle composed into the home page.

use leptos::prelude::*;
use leptos_carousel::{bind_viewport_resize, create_carousel_signals};

use crate::components::{Carousel, CarouselControls, TaskGrid, ThemeToggle};
use crate::config::CAROUSEL_GAP_PX;
use crate::context::ThemeContext;
use crate::models::{GENERATION_TASKS, SLIDES};
use crate::theme::{style_token, ElementRole};

#[component]
pub fn HomePage() -> impl IntoView {
    // Theme: stored preference or system scheme, applied before first paint
    let theme = ThemeContext::bootstrap();
    provide_context(theme);

    // Carousel
    let carousel = create_carousel_signals(SLIDES.len(), CAROUSEL_GAP_PX);
    bind_viewport_resize(carousel);

    web_sys::console::log_1(&format!(
        "[APP] Home page: {} slides, {} tasks, viewport={:?}",
        SLIDES.len(),
        GENERATION_TASKS.len(),
        carousel.viewport_read.get_untracked(),
    ).into());

    // Placeholder: no gallery view exists yet
    let on_show_all = |ev: web_sys::MouseEvent| ev.prevent_default();

    let gallery_class = move || format!("{} mt-8 mb-4", style_token(theme.dark_mode.get(), ElementRole::Heading));

    view! {
        <div class=theme.token(ElementRole::Page)>
            <div class="flex justify-end">
                <ThemeToggle />
            </div>

            <div class="flex flex-col items-center">
                <Carousel carousel=carousel slides=SLIDES />
                <CarouselControls carousel=carousel />
            </div>

            <div class="flex justify-end mb-4">
                <button class=theme.token(ElementRole::ShowAllButton) on:click=on_show_all>
                    "^ show all"
                </button>
            </div>

            <TaskGrid tasks=GENERATION_TASKS />

            <h1 class=gallery_class>"GALLERY"</h1>
        </div>
    }
}
