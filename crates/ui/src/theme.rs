/// Visual themes available to the table widget.
///
/// The widget supports a binary light/dark toggle; the theme only affects
/// presentation (CSS classes), never behavior.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// CSS class key for the widget container.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Resolve the theme from a boolean dark-mode flag.
    pub fn from_dark(dark: bool) -> Self {
        if dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}
