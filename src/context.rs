//! Theme Context
//!
//! Dark-mode state shared with child components via Leptos Context API.

use leptos::prelude::*;

use crate::theme::{style_token, system_prefers_dark, BrowserPreferences, ElementRole, ThemeController};

#[derive(Clone, Copy)]
pub struct ThemeContext {
    /// Current dark-mode flag - read
    pub dark_mode: ReadSignal<bool>,
    /// Current dark-mode flag - write
    set_dark_mode: WriteSignal<bool>,
    /// Owns persistence; updated in the same handler as the signal
    controller: StoredValue<ThemeController<BrowserPreferences>>,
}

impl ThemeContext {
    /// Run the bootstrap (stored preference, else system scheme) and wrap the result
    pub fn bootstrap() -> Self {
        let controller = ThemeController::bootstrap(BrowserPreferences, system_prefers_dark);
        let initial = controller.dark_mode();
        web_sys::console::log_1(&format!("[THEME] Initial dark mode: {}", initial).into());

        let (dark_mode, set_dark_mode) = signal(initial);
        Self {
            dark_mode,
            set_dark_mode,
            controller: StoredValue::new(controller),
        }
    }

    pub fn toggle(&self) {
        let mut next = false;
        self.controller.update_value(|controller| next = controller.toggle());
        web_sys::console::log_1(&format!("[THEME] Dark mode -> {}", next).into());
        self.set_dark_mode.set(next);
    }

    /// Reactive class string for `role`
    pub fn token(&self, role: ElementRole) -> impl Fn() -> &'static str + Copy + 'static {
        let dark_mode = self.dark_mode;
        move || style_token(dark_mode.get(), role)
    }
}

/// Get the theme context
pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}
