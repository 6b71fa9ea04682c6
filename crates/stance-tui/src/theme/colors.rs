//! Catppuccin color palettes for the TUI.

use ratatui::style::Color;
use stance_engine::{Consistency, ThemeName};

/// Theme color palette.
#[derive(Debug, Clone)]
pub struct Theme {
    // Backgrounds
    pub base: Color,
    pub surface: Color,

    // Foregrounds
    pub text: Color,
    pub subtext: Color,
    pub muted: Color,

    // Accents
    pub primary: Color,

    // Semantic
    pub warning: Color,
    pub error: Color,

    // Chart
    pub stroke: Color,
    pub reference: Color,
    pub consistent: Color,
    pub inconsistent: Color,

    // Borders
    pub border: Color,
    pub border_focused: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::mocha()
    }
}

impl Theme {
    /// Palette for a configured theme name.
    pub fn named(name: ThemeName) -> Self {
        match name {
            ThemeName::Mocha => Self::mocha(),
            ThemeName::Latte => Self::latte(),
            ThemeName::HighContrast => Self::high_contrast(),
        }
    }

    /// Marker and box accent for an event.
    pub fn marker(&self, consistency: Consistency) -> Color {
        match consistency {
            Consistency::Consistent => self.consistent,
            Consistency::InconsistentWith(_) => self.inconsistent,
        }
    }

    /// Catppuccin Mocha theme (default dark theme).
    pub fn mocha() -> Self {
        Self {
            base: Color::Rgb(30, 30, 46),    // #1e1e2e
            surface: Color::Rgb(49, 50, 68), // #313244

            text: Color::Rgb(205, 214, 244),    // #cdd6f4
            subtext: Color::Rgb(166, 173, 200), // #a6adc8
            muted: Color::Rgb(108, 112, 134),   // #6c7086

            primary: Color::Rgb(180, 190, 254), // #b4befe (lavender)

            warning: Color::Rgb(249, 226, 175), // #f9e2af (yellow)
            error: Color::Rgb(243, 139, 168),   // #f38ba8 (red)

            stroke: Color::Rgb(136, 132, 216),     // #8884d8
            reference: Color::Rgb(88, 91, 112),    // #585b70
            consistent: Color::Rgb(137, 180, 250), // #89b4fa (blue)
            inconsistent: Color::Rgb(243, 139, 168),

            border: Color::Rgb(69, 71, 90),              // #45475a
            border_focused: Color::Rgb(180, 190, 254), // #b4befe
        }
    }

    /// Catppuccin Latte theme (light theme).
    pub fn latte() -> Self {
        Self {
            base: Color::Rgb(239, 241, 245),    // #eff1f5
            surface: Color::Rgb(230, 233, 239), // #e6e9ef

            text: Color::Rgb(76, 79, 105),    // #4c4f69
            subtext: Color::Rgb(92, 95, 119), // #5c5f77
            muted: Color::Rgb(140, 143, 161), // #8c8fa1

            primary: Color::Rgb(114, 135, 253), // #7287fd

            warning: Color::Rgb(223, 142, 29), // #df8e1d
            error: Color::Rgb(210, 15, 57),    // #d20f39

            stroke: Color::Rgb(136, 132, 216),
            reference: Color::Rgb(172, 176, 190), // #acb0be
            consistent: Color::Rgb(30, 102, 245), // #1e66f5
            inconsistent: Color::Rgb(210, 15, 57),

            border: Color::Rgb(188, 192, 204),          // #bcc0cc
            border_focused: Color::Rgb(114, 135, 253), // #7287fd
        }
    }

    /// High contrast theme.
    pub fn high_contrast() -> Self {
        Self {
            base: Color::Black,
            surface: Color::Rgb(20, 20, 20),

            text: Color::White,
            subtext: Color::Rgb(200, 200, 200),
            muted: Color::Rgb(150, 150, 150),

            primary: Color::Cyan,

            warning: Color::Yellow,
            error: Color::Red,

            stroke: Color::Magenta,
            reference: Color::Gray,
            consistent: Color::Blue,
            inconsistent: Color::Red,

            border: Color::White,
            border_focused: Color::Cyan,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stance_engine::EventId;

    #[test]
    fn test_default_is_mocha() {
        assert!(matches!(Theme::default().base, Color::Rgb(30, 30, 46)));
    }

    #[test]
    fn test_named_themes() {
        assert!(matches!(Theme::named(ThemeName::Latte).base, Color::Rgb(239, 241, 245)));
        assert!(matches!(Theme::named(ThemeName::HighContrast).base, Color::Black));
    }

    #[test]
    fn test_marker_colors_distinct_in_every_theme() {
        for theme in [Theme::mocha(), Theme::latte(), Theme::high_contrast()] {
            assert_ne!(
                theme.marker(Consistency::Consistent),
                theme.marker(Consistency::InconsistentWith(EventId(1)))
            );
        }
    }
}
