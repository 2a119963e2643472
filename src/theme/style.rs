//! Style Tokens
//!
//! Maps (dark mode, element role) to the Tailwind classes for that element.

/// Themed elements on the page
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementRole {
    Page,
    Heading,
    TaskCard,
    TaskTitle,
    TaskText,
    OpenButton,
    NavButton,
    ShowAllButton,
    ThemeToggle,
    DotActive,
    DotIdle,
}

impl ElementRole {
    pub const ALL: [ElementRole; 11] = [
        ElementRole::Page,
        ElementRole::Heading,
        ElementRole::TaskCard,
        ElementRole::TaskTitle,
        ElementRole::TaskText,
        ElementRole::OpenButton,
        ElementRole::NavButton,
        ElementRole::ShowAllButton,
        ElementRole::ThemeToggle,
        ElementRole::DotActive,
        ElementRole::DotIdle,
    ];
}

pub fn style_token(dark_mode: bool, role: ElementRole) -> &'static str {
    use ElementRole::*;
    match (role, dark_mode) {
        (Page, false) => "min-h-screen py-4 sm:py-6 lg:py-8 px-4 sm:px-6 lg:px-8 bg-white",
        (Page, true) => "min-h-screen py-4 sm:py-6 lg:py-8 px-4 sm:px-6 lg:px-8 bg-gray-900",

        (Heading, false) => "text-2xl sm:text-3xl lg:text-4xl font-bold text-gray-800",
        (Heading, true) => "text-2xl sm:text-3xl lg:text-4xl font-bold text-gray-100",

        (TaskCard, false) => "ml-0 bg-white p-1 sm:p-4 duration-300",
        (TaskCard, true) => "ml-0 bg-gray-800 p-1 sm:p-4 duration-300 rounded-md",

        (TaskTitle, false) => "text-base sm:text-lg font-semibold text-gray-800 mr-2",
        (TaskTitle, true) => "text-base sm:text-lg font-semibold text-gray-100 mr-2",

        (TaskText, false) => "text-gray-600 text-sm mb-2 sm:mb-0 sm:mr-2 flex-grow",
        (TaskText, true) => "text-gray-400 text-sm mb-2 sm:mb-0 sm:mr-2 flex-grow",

        (OpenButton, false) => "w-16 h-8 sm:w-20 sm:h-10 bg-gray-200 text-gray-700 rounded-full hover:bg-blue-600 hover:text-white transition-colors duration-300 font-medium text-xs sm:text-sm flex-shrink-0",
        (OpenButton, true) => "w-16 h-8 sm:w-20 sm:h-10 bg-gray-700 text-gray-200 rounded-full hover:bg-blue-600 hover:text-white transition-colors duration-300 font-medium text-xs sm:text-sm flex-shrink-0",

        (NavButton, false) => "border text-black border-gray-300 rounded-md px-3 py-1 hover:bg-gray-100 text-sm sm:text-base",
        (NavButton, true) => "border text-gray-100 border-gray-600 rounded-md px-3 py-1 hover:bg-gray-700 text-sm sm:text-base",

        (ShowAllButton, false) => "border-none text-blue-500 rounded-md px-3 py-1 hover:bg-gray-100 text-sm sm:text-base",
        (ShowAllButton, true) => "border-none text-blue-400 rounded-md px-3 py-1 hover:bg-gray-800 text-sm sm:text-base",

        (ThemeToggle, false) => "rounded-full border border-gray-300 px-3 py-1 text-gray-800 hover:bg-gray-100",
        (ThemeToggle, true) => "rounded-full border border-gray-600 px-3 py-1 text-yellow-300 hover:bg-gray-700",

        (DotActive, false) => "w-3 h-3 sm:w-4 sm:h-4 rounded-full focus:outline-none bg-black",
        (DotActive, true) => "w-3 h-3 sm:w-4 sm:h-4 rounded-full focus:outline-none bg-white",

        (DotIdle, _) => "w-3 h-3 sm:w-4 sm:h-4 rounded-full focus:outline-none bg-blue-500",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_role_has_a_token() {
        for role in ElementRole::ALL {
            assert!(!style_token(false, role).is_empty());
            assert!(!style_token(true, role).is_empty());
        }
    }

    #[test]
    fn test_dark_mode_changes_surfaces() {
        for role in [ElementRole::Page, ElementRole::Heading, ElementRole::TaskCard, ElementRole::NavButton] {
            assert_ne!(style_token(false, role), style_token(true, role), "{:?}", role);
        }
    }

    #[test]
    fn test_dots_distinguish_active() {
        for dark in [false, true] {
            assert_ne!(style_token(dark, ElementRole::DotActive), style_token(dark, ElementRole::DotIdle));
        }
        assert!(style_token(false, ElementRole::DotActive).ends_with("bg-black"));
        assert!(style_token(false, ElementRole::DotIdle).ends_with("bg-blue-500"));
    }
}
