//! Theme system for light/dark mode support

use ratatui::style::Color;

/// Semantic colors used throughout the UI
#[derive(Debug, Clone)]
pub struct Theme {
    // Backgrounds
    pub bg_selection: Color,

    // Text
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // Borders
    pub border_focused: Color,
    pub border_unfocused: Color,

    // Accents
    pub accent_primary: Color,
    pub accent_highlight: Color,

    // Status
    pub status_error: Color,
    pub status_warning: Color,
    pub status_info: Color,

    // Status bar
    pub statusbar_session_bg: Color,
    pub statusbar_session_fg: Color,
    pub statusbar_pane_bg: Color,
    pub statusbar_pane_fg: Color,

    // Pending join requests badge
    pub badge_bg: Color,
    pub badge_fg: Color,
}

/// Theme variant selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeVariant {
    #[default]
    Dark,
    Light,
}

impl ThemeVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeVariant::Dark => "dark",
            ThemeVariant::Light => "light",
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            ThemeVariant::Dark => ThemeVariant::Light,
            ThemeVariant::Light => ThemeVariant::Dark,
        }
    }

    pub fn theme(&self) -> Theme {
        match self {
            ThemeVariant::Dark => Theme::dark(),
            ThemeVariant::Light => Theme::light(),
        }
    }
}

impl Theme {
    /// Dark theme - optimized for dark terminal backgrounds
    pub fn dark() -> Self {
        Self {
            bg_selection: Color::Rgb(50, 50, 70),

            text_primary: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::DarkGray,

            border_focused: Color::Cyan,
            border_unfocused: Color::DarkGray,

            accent_primary: Color::Cyan,
            accent_highlight: Color::Yellow,

            status_error: Color::Red,
            status_warning: Color::Yellow,
            status_info: Color::Gray,

            statusbar_session_bg: Color::Blue,
            statusbar_session_fg: Color::White,
            statusbar_pane_bg: Color::DarkGray,
            statusbar_pane_fg: Color::White,

            badge_bg: Color::Magenta,
            badge_fg: Color::White,
        }
    }

    /// Light theme - optimized for light terminal backgrounds
    pub fn light() -> Self {
        Self {
            bg_selection: Color::Rgb(200, 215, 240),

            text_primary: Color::Black,
            text_secondary: Color::Rgb(60, 60, 60),
            text_muted: Color::Gray,

            border_focused: Color::Blue,
            border_unfocused: Color::Gray,

            accent_primary: Color::Blue,
            accent_highlight: Color::Rgb(180, 120, 0),

            status_error: Color::Red,
            status_warning: Color::Rgb(180, 120, 0),
            status_info: Color::Rgb(60, 60, 60),

            statusbar_session_bg: Color::Blue,
            statusbar_session_fg: Color::White,
            statusbar_pane_bg: Color::Gray,
            statusbar_pane_fg: Color::Black,

            badge_bg: Color::Magenta,
            badge_fg: Color::White,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_toggle() {
        assert_eq!(ThemeVariant::Dark.toggle(), ThemeVariant::Light);
        assert_eq!(ThemeVariant::Light.toggle().as_str(), "dark");
    }

    #[test]
    fn test_variants_differ() {
        assert_ne!(
            ThemeVariant::Dark.theme().text_primary,
            ThemeVariant::Light.theme().text_primary
        );
    }
}
