//! Page Configuration
//!
//! Compile-time settings for the landing page.

/// localStorage key holding the theme preference ("true" / "false")
pub const THEME_STORAGE_KEY: &str = "darkMode";

/// Class set on `<html>` while dark mode is on
pub const DARK_CLASS: &str = "dark";

/// Media query used when no preference has been stored
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Gap between carousel slides in px
pub const CAROUSEL_GAP_PX: u32 = leptos_carousel::DEFAULT_GAP_PX;

/// Edge length of a task card icon in px
pub const TASK_ICON_PX: u32 = 48;
