//! Theme Controller
//!
//! Owns the dark-mode flag and mirrors every change into a `PreferenceSink`.

/// Where the theme preference is persisted and applied
pub trait PreferenceSink {
    /// Previously stored preference, if any
    fn load(&self) -> Option<bool>;
    /// Apply the preference to the page and persist it
    fn apply(&mut self, dark_mode: bool);
}

#[derive(Debug)]
pub struct ThemeController<S: PreferenceSink> {
    sink: S,
    dark_mode: bool,
}

impl<S: PreferenceSink> ThemeController<S> {
    /// Initial value comes from the sink, else from `system_prefers_dark`.
    /// The system preference is only queried when nothing is stored.
    pub fn bootstrap(sink: S, system_prefers_dark: impl FnOnce() -> bool) -> Self {
        let dark_mode = sink.load().unwrap_or_else(system_prefers_dark);
        let mut controller = Self { sink, dark_mode };
        controller.sink.apply(dark_mode);
        controller
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    /// Flip the flag; returns the new value
    pub fn toggle(&mut self) -> bool {
        self.set(!self.dark_mode);
        self.dark_mode
    }

    pub fn set(&mut self, dark_mode: bool) {
        self.dark_mode = dark_mode;
        self.sink.apply(dark_mode);
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    /// In-memory stand-in for localStorage + the document class
    #[derive(Debug, Default)]
    struct MemorySink {
        stored: Option<String>,
        dark_class: bool,
        applies: usize,
    }

    impl MemorySink {
        fn with_stored(value: &str) -> Self {
            Self { stored: Some(value.to_string()), ..Default::default() }
        }
    }

    impl PreferenceSink for MemorySink {
        fn load(&self) -> Option<bool> {
            self.stored.as_deref().and_then(|v| v.parse().ok())
        }

        fn apply(&mut self, dark_mode: bool) {
            self.stored = Some(dark_mode.to_string());
            self.dark_class = dark_mode;
            self.applies += 1;
        }
    }

    #[test]
    fn test_bootstrap_falls_back_to_system_dark() {
        let controller = ThemeController::bootstrap(MemorySink::default(), || true);
        assert!(controller.dark_mode());
        assert_eq!(controller.sink().stored.as_deref(), Some("true"));
        assert!(controller.sink().dark_class);
    }

    #[test]
    fn test_bootstrap_falls_back_to_system_light() {
        let controller = ThemeController::bootstrap(MemorySink::default(), || false);
        assert!(!controller.dark_mode());
        assert_eq!(controller.sink().stored.as_deref(), Some("false"));
        assert!(!controller.sink().dark_class);
    }

    #[test]
    fn test_stored_preference_wins_without_querying_system() {
        let queried = Cell::new(false);
        let controller = ThemeController::bootstrap(MemorySink::with_stored("false"), || {
            queried.set(true);
            true
        });
        assert!(!controller.dark_mode());
        assert!(!queried.get());
        assert_eq!(controller.sink().applies, 1);
    }

    #[test]
    fn test_unparseable_stored_value_uses_system() {
        let controller = ThemeController::bootstrap(MemorySink::with_stored("maybe"), || true);
        assert!(controller.dark_mode());
        assert_eq!(controller.sink().stored.as_deref(), Some("true"));
    }

    #[test]
    fn test_toggle_keeps_sink_in_sync() {
        let mut controller = ThemeController::bootstrap(MemorySink::default(), || false);
        assert!(controller.toggle());
        assert_eq!(controller.sink().stored.as_deref(), Some("true"));
        assert!(controller.sink().dark_class);
    }

    #[test]
    fn test_toggle_twice_restores_original() {
        let mut controller = ThemeController::bootstrap(MemorySink::with_stored("true"), || false);
        let stored = controller.sink().stored.clone();
        let class = controller.sink().dark_class;

        controller.toggle();
        controller.toggle();

        assert!(controller.dark_mode());
        assert_eq!(controller.sink().stored, stored);
        assert_eq!(controller.sink().dark_class, class);
        assert_eq!(controller.sink().applies, 3);
    }
}
