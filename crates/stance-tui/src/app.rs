//! Application state and update logic for the stance TUI.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use stance_engine::{
    layout, ChartConfig, Config, Dataset, Disclosure, EventId, EventPosition, SentimentEvent,
};
use tracing::debug;

use crate::avatar::{Avatar, AvatarResolver, InitialsResolver};
use crate::chart::{place_boxes, plot_area, PlacedBox, Projection};
use crate::event::Action;
use crate::theme::{BorderSet, IconMode, IconSet, Theme};
use crate::view::split_screen;

/// Minimum terminal width for the chart.
pub const MIN_WIDTH: u16 = 40;

/// Minimum terminal height for the chart.
pub const MIN_HEIGHT: u16 = 12;

/// Application state.
#[derive(Debug)]
pub struct App {
    /// Events being shown, fixed for the lifetime of the app.
    pub dataset: Dataset,
    /// Layout of `dataset`, computed once.
    pub positions: Vec<EventPosition>,
    /// Resolved avatar per event.
    pub avatars: Vec<Avatar>,
    /// Which event is expanded.
    pub disclosure: Disclosure,
    /// Index of the event under keyboard or hover focus.
    pub focused: Option<usize>,
    /// Whether the help overlay is visible.
    pub show_help: bool,
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Minimum drawing surface.
    pub chart: ChartConfig,
    pub theme: Theme,
    pub icons: IconSet,
    pub borders: BorderSet,
    /// Current terminal size, used for mouse hit testing.
    pub terminal_size: (u16, u16),
}

impl App {
    /// Create an app for a dataset, with initials avatars.
    pub fn new(dataset: Dataset, config: &Config) -> Self {
        Self::with_resolver(dataset, config, &InitialsResolver)
    }

    /// Create an app with a custom avatar resolver.
    pub fn with_resolver(dataset: Dataset, config: &Config, resolver: &dyn AvatarResolver) -> Self {
        let positions = layout(dataset.events());
        let avatars = dataset.events().iter().map(|e| resolver.resolve(e)).collect();
        let mode = IconMode::resolve(config.icons);

        Self {
            dataset,
            positions,
            avatars,
            disclosure: Disclosure::new(),
            focused: None,
            show_help: false,
            should_quit: false,
            chart: config.chart,
            theme: Theme::named(config.theme),
            icons: IconSet::new(mode),
            borders: BorderSet::new(mode),
            terminal_size: (80, 24),
        }
    }

    /// Use a fixed icon mode, ignoring the config and `NO_COLOR`.
    #[must_use]
    pub fn with_icon_mode(mut self, mode: IconMode) -> Self {
        self.icons = IconSet::new(mode);
        self.borders = BorderSet::new(mode);
        self
    }

    /// Check if terminal is too small to draw the chart.
    pub fn is_too_small(&self) -> bool {
        self.terminal_size.0 < MIN_WIDTH || self.terminal_size.1 < MIN_HEIGHT
    }

    /// Handle terminal resize.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.terminal_size = (width, height);
    }

    /// The focused event, if any.
    pub fn focused_event(&self) -> Option<&SentimentEvent> {
        self.focused.and_then(|i| self.dataset.events().get(i))
    }

    /// The expanded event, if any.
    pub fn open_event(&self) -> Option<&SentimentEvent> {
        self.disclosure.open().and_then(|id| self.dataset.get(id))
    }

    /// Projection of the layout for a full-screen `area`.
    pub fn projection(&self, area: Rect) -> Projection {
        let (chart_area, _) = split_screen(area);
        Projection::fit(plot_area(chart_area), &self.positions, self.chart)
    }

    /// Event boxes for a full-screen `area`, in drawing order.
    pub fn boxes(&self, area: Rect) -> Vec<PlacedBox> {
        place_boxes(
            self.dataset.events(),
            &self.positions,
            &self.avatars,
            &self.disclosure,
            &self.projection(area),
            &self.icons,
        )
    }

    fn screen_area(&self) -> Rect {
        Rect::new(0, 0, self.terminal_size.0, self.terminal_size.1)
    }

    /// Expand or collapse an event and focus it.
    pub fn toggle(&mut self, id: EventId) {
        self.disclosure.toggle(id);
        if let Some(index) = self.dataset.index_of(id) {
            self.focused = Some(index);
        }
    }

    /// Handle a click at a terminal cell. Returns the toggled event.
    pub fn click(&mut self, column: u16, row: u16) -> Option<EventId> {
        if self.show_help || self.is_too_small() {
            return None;
        }
        let boxes = self.boxes(self.screen_area());
        let id = crate::chart::hit_test(&boxes, column, row)?.id;
        debug!(%id, column, row, "click");
        self.toggle(id);
        Some(id)
    }

    /// Focus the box under the pointer, if any.
    pub fn hover(&mut self, column: u16, row: u16) {
        if self.show_help || self.is_too_small() {
            return;
        }
        let boxes = self.boxes(self.screen_area());
        if let Some(hit) = crate::chart::hit_test(&boxes, column, row) {
            self.focused = Some(hit.index);
        }
    }

    /// Handle a mouse event.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.click(mouse.column, mouse.row);
            }
            MouseEventKind::Moved => self.hover(mouse.column, mouse.row),
            _ => {}
        }
    }

    /// Handle an action.
    pub fn handle_action(&mut self, action: Action) {
        if action == Action::None {
            return;
        }

        // Any action dismisses help; only Help itself re-reads as a toggle.
        if self.show_help {
            self.show_help = false;
            return;
        }

        match action {
            Action::Quit => self.should_quit = true,
            Action::Help => self.show_help = true,
            Action::Back => self.disclosure.close(),
            Action::Select => match self.focused_event().map(|e| e.id) {
                Some(id) => self.toggle(id),
                None => self.focus_first(),
            },
            Action::Left => self.focus_prev(),
            Action::Right => self.focus_next(),
            Action::First => self.focus_first(),
            Action::Last => self.focus_last(),
            Action::None => {}
        }
    }

    /// Move focus left. Stops at the first event (no wrap).
    fn focus_prev(&mut self) {
        if self.dataset.is_empty() {
            return;
        }
        self.focused = match self.focused {
            Some(i) => Some(i.saturating_sub(1)),
            None => Some(self.dataset.len() - 1),
        };
    }

    /// Move focus right. Stops at the last event (no wrap).
    fn focus_next(&mut self) {
        if self.dataset.is_empty() {
            return;
        }
        let last = self.dataset.len() - 1;
        self.focused = match self.focused {
            Some(i) => Some((i + 1).min(last)),
            None => Some(0),
        };
    }

    fn focus_first(&mut self) {
        if !self.dataset.is_empty() {
            self.focused = Some(0);
        }
    }

    fn focus_last(&mut self) {
        if !self.dataset.is_empty() {
            self.focused = Some(self.dataset.len() - 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{create_test_app, TEST_HEIGHT, TEST_WIDTH};
    use crossterm::event::KeyModifiers;
    use stance_engine::Panel;

    fn center_of(app: &App, id: EventId) -> (u16, u16) {
        let area = Rect::new(0, 0, TEST_WIDTH, TEST_HEIGHT);
        let placed = app.boxes(area).into_iter().find(|b| b.id == id).unwrap();
        (placed.rect.x + placed.rect.width / 2, placed.rect.y + placed.rect.height / 2)
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_new_app() {
        let app = create_test_app();
        assert_eq!(app.positions.len(), 5);
        assert_eq!(app.avatars[0].glyph, "SA");
        assert_eq!(app.disclosure.open(), None);
        assert_eq!(app.focused, None);
    }

    #[test]
    fn test_icon_mode_override() {
        let app = App::new(Dataset::sample(), &Config::default()).with_icon_mode(IconMode::Ascii);
        assert_eq!(app.icons.mode(), IconMode::Ascii);
        assert_eq!(app.borders.mode(), IconMode::Ascii);
        assert_eq!(create_test_app().icons.mode(), IconMode::Unicode);
    }

    #[test]
    fn test_click_toggles_box() {
        let mut app = create_test_app();
        let (col, row) = center_of(&app, EventId(3));

        assert_eq!(app.click(col, row), Some(EventId(3)));
        assert_eq!(app.disclosure.open(), Some(EventId(3)));
        assert_eq!(app.focused, Some(2));

        // The expanded box covers the same center cell.
        let (col, row) = center_of(&app, EventId(3));
        assert_eq!(app.click(col, row), Some(EventId(3)));
        assert_eq!(app.disclosure.open(), None);
    }

    #[test]
    fn test_click_other_box_switches() {
        let mut app = create_test_app();
        let (col, row) = center_of(&app, EventId(1));
        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), col, row));
        assert_eq!(app.disclosure.open(), Some(EventId(1)));

        let (col, row) = center_of(&app, EventId(4));
        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), col, row));
        assert_eq!(app.disclosure.open(), Some(EventId(4)));
        assert_eq!(app.disclosure.panel(EventId(1)), Panel::Collapsed);
    }

    #[test]
    fn test_click_outside_does_nothing() {
        let mut app = create_test_app();
        assert_eq!(app.click(0, 0), None);
        assert_eq!(app.disclosure.open(), None);
    }

    #[test]
    fn test_hover_focuses() {
        let mut app = create_test_app();
        let (col, row) = center_of(&app, EventId(5));
        app.handle_mouse(mouse(MouseEventKind::Moved, col, row));
        assert_eq!(app.focused_event().map(|e| e.id), Some(EventId(5)));
        assert_eq!(app.disclosure.open(), None);
    }

    #[test]
    fn test_keyboard_toggle() {
        let mut app = create_test_app();

        // First Select only focuses.
        app.handle_action(Action::Select);
        assert_eq!(app.focused, Some(0));
        assert_eq!(app.disclosure.open(), None);

        app.handle_action(Action::Right);
        app.handle_action(Action::Select);
        assert_eq!(app.open_event().map(|e| e.id), Some(EventId(2)));

        app.handle_action(Action::Select);
        assert_eq!(app.disclosure.open(), None);
    }

    #[test]
    fn test_escape_closes_open_event() {
        let mut app = create_test_app();
        app.toggle(EventId(4));
        app.handle_action(Action::Back);
        assert_eq!(app.disclosure.open(), None);
    }

    #[test]
    fn test_focus_bounds() {
        let mut app = create_test_app();
        app.handle_action(Action::Left);
        assert_eq!(app.focused, Some(4));
        app.handle_action(Action::Right);
        assert_eq!(app.focused, Some(4));
        app.handle_action(Action::First);
        app.handle_action(Action::Left);
        assert_eq!(app.focused, Some(0));
        app.handle_action(Action::Last);
        assert_eq!(app.focused, Some(4));
    }

    #[test]
    fn test_empty_dataset_navigation() {
        let mut app = App::new(Dataset::default(), &Config::default());
        app.handle_action(Action::Right);
        app.handle_action(Action::Select);
        assert_eq!(app.focused, None);
        assert!(app.boxes(Rect::new(0, 0, 80, 24)).is_empty());
    }

    #[test]
    fn test_help_closes_before_quit() {
        let mut app = create_test_app();
        app.handle_action(Action::Help);
        assert!(app.show_help);

        app.handle_action(Action::Quit);
        assert!(!app.show_help);
        assert!(!app.should_quit);

        app.handle_action(Action::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn test_clicks_ignored_under_help() {
        let mut app = create_test_app();
        let (col, row) = center_of(&app, EventId(1));
        app.show_help = true;
        assert_eq!(app.click(col, row), None);
    }

    #[test]
    fn test_too_small() {
        let mut app = create_test_app();
        assert!(!app.is_too_small());
        app.resize(39, 24);
        assert!(app.is_too_small());
        app.resize(40, 11);
        assert!(app.is_too_small());
    }
}
