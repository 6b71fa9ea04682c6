//! Test utilities for stance-tui rendering tests.

use crate::app::App;
use crate::theme::IconMode;
use crate::view::{render_app, screen_text};
use ratatui::{buffer::Buffer, layout::Rect};
use stance_engine::{Config, Dataset};

/// Default terminal width for tests.
pub const TEST_WIDTH: u16 = 100;

/// Default terminal height for tests.
pub const TEST_HEIGHT: u16 = 30;

/// Create a test app over the sample dataset, sized to the test terminal.
pub fn create_test_app() -> App {
    create_app_with(Dataset::sample(), TEST_WIDTH, TEST_HEIGHT)
}

/// Create a test app with Unicode glyphs whatever the environment says.
pub fn create_app_with(dataset: Dataset, width: u16, height: u16) -> App {
    let mut app = App::new(dataset, &Config::default()).with_icon_mode(IconMode::Unicode);
    app.resize(width, height);
    app
}

/// Convert a buffer to a string for assertions.
pub fn buffer_to_string(buffer: &Buffer) -> String {
    screen_text(buffer)
}

/// Render the app into a `width` x `height` buffer and return it as a string.
pub fn render_app_to_string(app: &App, width: u16, height: u16) -> String {
    let area = Rect::new(0, 0, width, height);
    let mut buffer = Buffer::empty(area);
    render_app(app, area, &mut buffer);
    buffer_to_string(&buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_test_app() {
        let app = create_test_app();
        assert_eq!(app.dataset.len(), 5);
        assert_eq!(app.terminal_size, (TEST_WIDTH, TEST_HEIGHT));
    }

    #[test]
    fn test_buffer_to_string() {
        let area = Rect::new(0, 0, 10, 3);
        let mut buffer = Buffer::empty(area);
        buffer.set_string(0, 0, "Hello", ratatui::style::Style::default());
        buffer.set_string(0, 1, "World", ratatui::style::Style::default());

        let result = buffer_to_string(&buffer);
        assert_eq!(result, "Hello\nWorld\n");
    }
}
