//! Headless mode for the stance TUI.
//!
//! Runs the timeline against a `TestBackend` instead of a real terminal,
//! for E2E tests and automation. Inputs are sent over a channel and the
//! screen is captured after each render.

use crate::app::App;
use crate::event::Action;
use crate::view::{render_app, screen_text};
use ratatui::{backend::TestBackend, Terminal};
use stance_engine::{Config, Dataset, EventId};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

/// Default terminal dimensions for headless mode.
pub const DEFAULT_WIDTH: u16 = 100;
pub const DEFAULT_HEIGHT: u16 = 30;

/// Input delivered to a headless TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// A key action.
    Action(Action),
    /// A left click at a terminal cell.
    Click { column: u16, row: u16 },
}

/// State captured from the headless TUI after each render.
#[derive(Debug, Clone, Default)]
pub struct HeadlessState {
    /// Expanded event.
    pub open: Option<EventId>,
    /// Focused event.
    pub focused: Option<EventId>,
    /// Text contents of the terminal buffer.
    pub screen_contents: String,
    /// Whether the TUI should quit.
    pub should_quit: bool,
    /// Whether help overlay is visible.
    pub show_help: bool,
}

/// Handle to control a headless TUI instance.
pub struct HeadlessHandle {
    input_tx: mpsc::UnboundedSender<Input>,
    state_rx: watch::Receiver<HeadlessState>,
}

impl HeadlessHandle {
    /// Send an action to the TUI.
    ///
    /// Returns `true` if the action was sent successfully.
    pub fn send_action(&self, action: Action) -> bool {
        self.input_tx.send(Input::Action(action)).is_ok()
    }

    /// Send a left click at a terminal cell.
    pub fn send_click(&self, column: u16, row: u16) -> bool {
        self.input_tx.send(Input::Click { column, row }).is_ok()
    }

    /// Get the current state of the TUI.
    pub fn state(&self) -> HeadlessState {
        self.state_rx.borrow().clone()
    }

    /// Wait until a condition is met on the state.
    ///
    /// Returns the state when the condition is met, or `None` if timed out.
    pub async fn wait_for<F>(
        &mut self,
        condition: F,
        timeout: std::time::Duration,
    ) -> Option<HeadlessState>
    where
        F: Fn(&HeadlessState) -> bool,
    {
        let deadline = tokio::time::Instant::now() + timeout;

        loop {
            let state = self.state();
            if condition(&state) {
                return Some(state);
            }

            let remaining = deadline.saturating_duration_since(tokio::time::Instant::now());
            if remaining.is_zero() {
                return None;
            }

            if tokio::time::timeout(remaining, self.state_rx.changed())
                .await
                .is_err()
            {
                return None;
            }
        }
    }

    /// Wait for specific text to appear on screen.
    pub async fn wait_for_text(
        &mut self,
        text: &str,
        timeout: std::time::Duration,
    ) -> Option<HeadlessState> {
        self.wait_for(|s| s.screen_contents.contains(text), timeout)
            .await
    }

    /// Check if the TUI has quit.
    pub fn has_quit(&self) -> bool {
        self.state().should_quit
    }
}

/// Configuration for headless mode.
#[derive(Debug, Clone)]
pub struct HeadlessConfig {
    /// Terminal width.
    pub width: u16,
    /// Terminal height.
    pub height: u16,
    /// Tick rate in milliseconds.
    pub tick_rate_ms: u64,
}

impl Default for HeadlessConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            tick_rate_ms: 50,
        }
    }
}

/// Run the TUI in headless mode.
///
/// Returns a handle to control the TUI and a join handle for the background task.
///
/// # Example
///
/// ```ignore
/// let (mut handle, task) = run_tui_headless(&Config::default(), Dataset::sample(), HeadlessConfig::default());
///
/// handle.send_action(Action::Right);
/// handle.send_action(Action::Select);
/// let state = handle.wait_for_text("Supported climate bill", Duration::from_secs(1)).await;
///
/// handle.send_action(Action::Quit);
/// task.await.unwrap();
/// ```
pub fn run_tui_headless(
    config: &Config,
    dataset: Dataset,
    headless: HeadlessConfig,
) -> (HeadlessHandle, JoinHandle<Result<(), String>>) {
    let (input_tx, input_rx) = mpsc::unbounded_channel();
    let (state_tx, state_rx) = watch::channel(HeadlessState::default());

    let app = App::new(dataset, config);

    let task = tokio::spawn(async move {
        run_headless_loop(app, headless, input_rx, state_tx)
            .await
            .map_err(|e| e.to_string())
    });

    let handle = HeadlessHandle { input_tx, state_rx };

    (handle, task)
}

async fn run_headless_loop(
    mut app: App,
    config: HeadlessConfig,
    mut input_rx: mpsc::UnboundedReceiver<Input>,
    state_tx: watch::Sender<HeadlessState>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let backend = TestBackend::new(config.width, config.height);
    let mut terminal = Terminal::new(backend)?;
    app.resize(config.width, config.height);

    let tick_duration = std::time::Duration::from_millis(config.tick_rate_ms);

    loop {
        terminal.draw(|frame| {
            let area = frame.area();
            render_app(&app, area, frame.buffer_mut());
        })?;

        let screen_contents = screen_text(terminal.backend().buffer());

        let _ = state_tx.send(HeadlessState {
            open: app.disclosure.open(),
            focused: app.focused_event().map(|e| e.id),
            screen_contents,
            should_quit: app.should_quit,
            show_help: app.show_help,
        });

        if app.should_quit {
            break;
        }

        let input = tokio::select! {
            Some(input) = input_rx.recv() => input,
            () = tokio::time::sleep(tick_duration) => Input::Action(Action::None),
        };

        match input {
            Input::Action(action) => app.handle_action(action),
            Input::Click { column, row } => {
                app.click(column, row);
            }
        }
    }

    Ok(())
}
