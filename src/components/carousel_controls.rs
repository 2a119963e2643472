//! Carousel Controls Component
//!
//! Selector dots plus previous/next buttons.

use leptos::prelude::*;
use leptos_carousel::{make_on_dot, make_on_next, make_on_prev, CarouselSignals};

use crate::context::use_theme;
use crate::theme::{style_token, ElementRole};

#[component]
pub fn CarouselControls(carousel: CarouselSignals) -> impl IntoView {
    let theme = use_theme();

    view! {
        <div class="flex justify-center items-center mb-4 sm:mb-6 lg:mb-8">
            <div class="flex flex-col sm:flex-row gap-4 items-center">
                <div class="flex flex-row gap-2">
                    {(0..carousel.count).map(|i| {
                        let dot_class = move || {
                            let role = if carousel.is_active(i) { ElementRole::DotActive } else { ElementRole::DotIdle };
                            style_token(theme.dark_mode.get(), role)
                        };
                        view! {
                            <button
                                class=dot_class
                                aria-label=format!("Go to image {}", i + 1)
                                on:click=make_on_dot(carousel, i)
                            ></button>
                        }
                    }).collect_view()}
                </div>

                <div class="flex flex-row gap-2">
                    <button
                        class=theme.token(ElementRole::NavButton)
                        aria-label="Previous"
                        on:click=make_on_prev(carousel)
                    >
                        "<"
                    </button>
                    <button
                        class=theme.token(ElementRole::NavButton)
                        aria-label="Next"
                        on:click=make_on_next(carousel)
                    >
                        ">"
                    </button>
                </div>
            </div>
        </div>
    }
}
