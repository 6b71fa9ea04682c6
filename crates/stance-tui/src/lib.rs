//! stance-tui: terminal timeline of a persona's political sentiment
//!
//! This crate provides the interactive layer for stance, including:
//! - Line chart of sentiment over time with consistency-colored markers
//! - Event boxes that expand one at a time on click or Enter
//! - Headless mode for testing and automation

mod app;
pub mod avatar;
pub mod chart;
mod event;
pub mod headless;
#[cfg(test)]
pub mod test_utils;
mod text;
pub mod theme;
mod view;
pub mod widgets;

pub use app::{App, MIN_HEIGHT, MIN_WIDTH};
pub use event::{key_to_action, Action, Event, EventHandler};
pub use stance_engine;
pub use view::render_app;

use crossterm::{
    cursor::Show as ShowCursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use stance_engine::{Config, Dataset};
use std::io::{self, stdout};
use tracing::info;

/// RAII guard for terminal state restoration.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen, ShowCursor);
    }
}

/// Run the TUI application.
///
/// Sets up the terminal, runs the event loop until the user quits, and
/// restores the terminal on exit (including on error).
pub async fn run_tui(config: &Config, dataset: Dataset) -> Result<(), Box<dyn std::error::Error>> {
    enable_raw_mode()?;
    let _guard = TerminalGuard;

    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(dataset, config);
    let size = terminal.size()?;
    app.resize(size.width, size.height);
    info!(events = app.dataset.len(), "starting timeline");

    // 4 Hz tick rate
    let mut events = EventHandler::new(250);

    let result = run_loop(&mut terminal, &mut app, &mut events).await;

    terminal.show_cursor()?;

    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &mut EventHandler,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| {
            let area = frame.area();
            render_app(app, area, frame.buffer_mut());
        })?;

        if let Some(event) = events.next().await {
            match event {
                Event::Key(key) => app.handle_action(key_to_action(key)),
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                Event::Resize(width, height) => app.resize(width, height),
                Event::Tick => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Get the TUI version.
pub fn tui_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
