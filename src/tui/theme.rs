//! Theme system for consistent UI colors across dark and light modes.
//!
//! Resolves the configured [`ThemeMode`] to a palette, detecting the OS
//! preference when the mode is `Auto`.

use ratatui::style::Color;

use crate::config::ThemeMode;

/// Semantic color theme for the TUI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    // Primary UI colors
    /// Primary color for borders and titles
    pub primary: Color,
    /// Accent color for the highlighted key and focus states
    pub accent: Color,
    /// Success color, also used for occupied keys
    pub success: Color,
    /// Error color
    pub error: Color,
    /// Warning color
    pub warning: Color,

    // Text hierarchy
    /// Primary text content color
    pub text: Color,
    /// Secondary text color for less important content
    pub text_secondary: Color,
    /// Muted text for help text and keys outside the valid set
    pub text_muted: Color,

    // Backgrounds
    /// Main background color
    pub background: Color,
    /// Selection background color
    pub highlight_bg: Color,
    /// Background of free keys
    pub surface: Color,
}

impl Theme {
    /// Picks a theme for the configured mode.
    #[must_use]
    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Auto => Self::detect(),
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    /// Detects the OS theme and returns the matching palette.
    #[must_use]
    pub fn detect() -> Self {
        match dark_light::detect() {
            dark_light::Mode::Light => Self::light(),
            // Dark and undetectable both use the dark palette
            _ => Self::dark(),
        }
    }

    /// Dark palette.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::Cyan,
            accent: Color::Yellow,
            success: Color::Green,
            error: Color::Red,
            warning: Color::Yellow,

            text: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::DarkGray,

            background: Color::Black,
            highlight_bg: Color::DarkGray,
            surface: Color::Rgb(40, 40, 40),
        }
    }

    /// Light palette.
    ///
    /// Accent colors are darkened for visibility on light backgrounds.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::Blue,
            accent: Color::Rgb(180, 100, 0), // Dark orange for visibility
            success: Color::Rgb(0, 128, 0),  // Dark green
            error: Color::Red,
            warning: Color::Rgb(200, 100, 0),

            text: Color::Black,
            text_secondary: Color::Rgb(60, 60, 60),
            text_muted: Color::Gray,

            background: Color::White,
            highlight_bg: Color::Rgb(230, 230, 230),
            surface: Color::Rgb(225, 225, 225),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::detect()
    }
}
