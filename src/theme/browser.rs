//! Browser Preference Sink
//!
//! localStorage + `<html class="dark">` backing for the theme controller.

use gloo_storage::errors::StorageError;
use gloo_storage::{LocalStorage, Storage};

use super::controller::PreferenceSink;
use crate::config::{DARK_CLASS, DARK_SCHEME_QUERY, THEME_STORAGE_KEY};

/// Persists to localStorage and toggles the dark class on the document root
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserPreferences;

impl PreferenceSink for BrowserPreferences {
    fn load(&self) -> Option<bool> {
        match LocalStorage::get::<bool>(THEME_STORAGE_KEY) {
            Ok(value) => Some(value),
            Err(StorageError::KeyNotFound(_)) => None,
            Err(e) => {
                web_sys::console::warn_1(&format!("[THEME] Ignoring stored preference: {}", e).into());
                None
            }
        }
    }

    fn apply(&mut self, dark_mode: bool) {
        if let Err(e) = set_root_class(dark_mode) {
            web_sys::console::error_1(&format!("[THEME] Failed to apply theme class: {}", e).into());
        }
        if let Err(e) = LocalStorage::set(THEME_STORAGE_KEY, dark_mode) {
            web_sys::console::error_1(&format!("[THEME] Failed to persist preference: {}", e).into());
        }
    }
}

/// `prefers-color-scheme: dark`; false when media queries are unavailable
pub fn system_prefers_dark() -> bool {
    web_sys::window()
        .and_then(|win| win.match_media(DARK_SCHEME_QUERY).ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

fn set_root_class(dark_mode: bool) -> Result<(), String> {
    let root = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.document_element())
        .ok_or_else(|| "no document element".to_string())?;
    root.class_list()
        .toggle_with_force(DARK_CLASS, dark_mode)
        .map(|_| ())
        .map_err(|e| format!("{:?}", e))
}
