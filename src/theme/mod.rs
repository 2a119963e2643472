//! Theme
//!
//! Dark/light state, its persistence, and class selection per element.

mod browser;
mod controller;
mod style;

pub use browser::{system_prefers_dark, BrowserPreferences};
pub use controller::{PreferenceSink, ThemeController};
pub use style::{style_token, ElementRole};
