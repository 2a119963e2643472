//! UI Components
//!
//! Leptos components making up the landing page.

mod carousel;
mod carousel_controls;
mod image_frame;
mod task_grid;
mod theme_toggle;

pub use carousel::Carousel;
pub use carousel_controls::CarouselControls;
pub use image_frame::{ImageFrame, ImageSizing};
pub use task_grid::TaskGrid;
pub use theme_toggle::ThemeToggle;
