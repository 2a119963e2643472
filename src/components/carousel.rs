//! Carousel Component
//!
//! Slide track translated so the active slide sits in the middle of the viewport.

use leptos::prelude::*;
use leptos_carousel::CarouselSignals;

use crate::components::{ImageFrame, ImageSizing};
use crate::models::Slide;

#[component]
pub fn Carousel(
    carousel: CarouselSignals,
    slides: &'static [Slide],
) -> impl IntoView {
    let offset = Memo::new(move |_| carousel.offset());

    Effect::new(move |_| {
        let active = carousel.active_read.get();
        web_sys::console::log_1(&format!("[CAROUSEL] active={:?} offset={}px", active, offset.get_untracked()).into());
    });

    let viewport_style = move || format!("width: 100%; max-width: {}px;", carousel.track_width());
    let track_style = move || {
        format!("gap: {}px; transform: translateX({}px);", carousel.gap, offset.get())
    };

    view! {
        <div class="relative my-4 sm:my-6 lg:my-8 w-full max-w-full">
            <div class="mx-auto overflow-hidden" style=viewport_style>
                <div class="flex transition-transform duration-500 ease-in-out" style=track_style>
                    {slides.iter().enumerate().map(|(i, slide)| {
                        let slide_style = move || {
                            let width = carousel.widths().get(i).copied().unwrap_or(0);
                            format!("max-width: {}px; height: clamp(200px, 40vw, 400px);", width)
                        };
                        view! {
                            <div
                                class="w-full flex-shrink-0 relative rounded-lg overflow-hidden shadow-lg"
                                style=slide_style
                            >
                                <ImageFrame
                                    src=slide.image
                                    alt=slide.alt_text()
                                    sizing=ImageSizing::FillCover
                                />
                            </div>
                        }
                    }).collect_view()}
                </div>
            </div>
        </div>
    }
}
