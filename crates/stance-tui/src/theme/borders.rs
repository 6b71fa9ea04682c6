//! Border line sets for the chart frame, event boxes and overlays.

use ratatui::symbols::border;
use stance_engine::Panel;

use super::icons::IconMode;

/// Border characters, with an ASCII-safe variant for `NO_COLOR` terminals.
#[derive(Debug, Clone, Default)]
pub struct BorderSet {
    mode: IconMode,
}

impl BorderSet {
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> IconMode {
        self.mode
    }

    /// Chart frame and resting boxes.
    pub fn frame(&self) -> border::Set {
        match self.mode {
            IconMode::Unicode => border::ROUNDED,
            IconMode::Ascii => border::PLAIN,
        }
    }

    /// Open boxes, focused boxes and the help overlay.
    pub fn emphasis(&self) -> border::Set {
        match self.mode {
            IconMode::Unicode => border::THICK,
            IconMode::Ascii => border::DOUBLE,
        }
    }

    /// Border of an event box in the given state.
    pub fn for_box(&self, panel: Panel, focused: bool) -> border::Set {
        if focused || panel == Panel::Expanded {
            self.emphasis()
        } else {
            self.frame()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unicode_sets() {
        let borders = BorderSet::default();
        assert_eq!(borders.mode(), IconMode::Unicode);
        assert_eq!(borders.frame().top_left, "╭");
        assert_eq!(borders.emphasis().top_left, "┏");
    }

    #[test]
    fn test_ascii_mode_avoids_rounded_corners() {
        let borders = BorderSet::new(IconMode::Ascii);
        assert_eq!(borders.frame().top_left, "┌");
        assert_eq!(borders.emphasis().top_left, "╔");
    }

    #[test]
    fn test_box_states() {
        let borders = BorderSet::default();
        let resting = borders.for_box(Panel::Collapsed, false);
        assert_eq!(resting.top_left, borders.frame().top_left);
        assert_eq!(
            borders.for_box(Panel::Collapsed, true).top_left,
            borders.emphasis().top_left
        );
        assert_eq!(
            borders.for_box(Panel::Expanded, false).top_left,
            borders.emphasis().top_left
        );
    }
}
