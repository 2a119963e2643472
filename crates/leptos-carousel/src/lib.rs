//! Leptos Carousel Utilities
//!
//! Centered-slide carousel for Leptos. Tracks the active slide and the viewport width,
//! and derives slide widths and the track offset from them.

mod layout;
mod selection;

pub use layout::{
    center_offset, slide_width_for, slide_widths, track_width, BREAKPOINTS, DEFAULT_GAP_PX,
    FALLBACK_SLIDE_WIDTH, WIDE_SLIDE_WIDTH,
};
pub use selection::{next, prev, select_dot};

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Carousel state signals
#[derive(Clone, Copy)]
pub struct CarouselSignals {
    /// Centered slide (None = nothing centered)
    pub active_read: ReadSignal<Option<usize>>,
    pub active_write: WriteSignal<Option<usize>>,
    /// Last measured `window.innerWidth` (None outside a browser)
    pub viewport_read: ReadSignal<Option<f64>>,
    pub viewport_write: WriteSignal<Option<f64>>,
    /// Number of slides
    pub count: usize,
    /// Gap between slides in px
    pub gap: u32,
}

impl CarouselSignals {
    /// Per-slide widths for the current viewport (tracked)
    pub fn widths(&self) -> Vec<u32> {
        slide_widths(self.viewport_read.get(), self.count)
    }

    /// Width of the visible track (tracked)
    pub fn track_width(&self) -> u32 {
        track_width(&self.widths(), self.gap)
    }

    /// Offset that centers the active slide (tracked)
    pub fn offset(&self) -> i32 {
        center_offset(&self.widths(), self.gap, self.active_read.get())
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active_read.get() == Some(index)
    }
}

pub fn create_carousel_signals(count: usize, gap: u32) -> CarouselSignals {
    let (active_read, active_write) = signal(None::<usize>);
    let (viewport_read, viewport_write) = signal(read_viewport_width());
    CarouselSignals {
        active_read,
        active_write,
        viewport_read,
        viewport_write,
        count,
        gap,
    }
}

/// `window.innerWidth`, or None when there is no window
pub fn read_viewport_width() -> Option<f64> {
    web_sys::window()?.inner_width().ok()?.as_f64()
}

/// Click handler for the "previous" control
pub fn make_on_prev(carousel: CarouselSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        carousel.active_write.update(|active| *active = prev(*active, carousel.count));
    }
}

/// Click handler for the "next" control
pub fn make_on_next(carousel: CarouselSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        carousel.active_write.update(|active| *active = next(*active, carousel.count));
    }
}

/// Click handler for the selector dot of slide `index`
pub fn make_on_dot(carousel: CarouselSignals, index: usize) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        carousel.active_write.update(|active| *active = select_dot(*active, index, carousel.count));
    }
}

/// Re-measure the viewport on every window resize
pub fn bind_viewport_resize(carousel: CarouselSignals) {
    use wasm_bindgen::closure::Closure;

    let on_resize = Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
        let width = read_viewport_width();
        if carousel.viewport_read.get_untracked() != width {
            carousel.viewport_write.set(width);
        }
    });

    if let Some(win) = web_sys::window() {
        let _ = win.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
    }
    on_resize.forget();
}
