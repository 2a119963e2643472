//! Image Frame Component
//!
//! Plain `<img>` with the sizing the caller asks for. No loading or optimization.

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageSizing {
    /// Fixed pixel dimensions
    Fixed { width: u32, height: u32 },
    /// Fill the (positioned) parent and crop to cover
    FillCover,
}

#[component]
pub fn ImageFrame(
    src: &'static str,
    #[prop(into)] alt: String,
    sizing: ImageSizing,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    match sizing {
        ImageSizing::Fixed { width, height } => view! {
            <img
                src=src
                alt=alt
                width=width.to_string()
                height=height.to_string()
                class=class
                loading="lazy"
            />
        }.into_any(),
        ImageSizing::FillCover => view! {
            <img
                src=src
                alt=alt
                class=class
                style="position: absolute; inset: 0; width: 100%; height: 100%; object-fit: cover;"
                loading="lazy"
            />
        }.into_any(),
    }
}
