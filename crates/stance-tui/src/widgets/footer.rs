//! Footer: tooltip line for the focused event, then key hints.
//!
//! ```text
//! 2023-03-15 │ ⚠ inconsistent with #1 │ Senator A │ -0.80 │ high
//! [←/→] focus │ [Enter] toggle │ [Esc] close │ [?] help │ [q] quit     5 events
//! ```

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use stance_engine::{Consistency, EventId, SentimentEvent};

use crate::text::visual_width;
use crate::theme::{IconSet, Theme};

/// A single keybinding hint.
#[derive(Debug, Clone)]
pub struct KeyHint {
    /// The key or key combination (e.g., "Enter", "←/→").
    pub key: String,
    /// The action description (e.g., "toggle").
    pub action: String,
}

impl KeyHint {
    /// Create a new key hint.
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

/// Two-line footer widget.
pub struct Footer<'a> {
    focused: Option<&'a SentimentEvent>,
    open: Option<EventId>,
    event_count: usize,
    hints: &'a [KeyHint],
    theme: &'a Theme,
    icons: &'a IconSet,
}

impl<'a> Footer<'a> {
    /// Create a footer.
    pub fn new(hints: &'a [KeyHint], theme: &'a Theme, icons: &'a IconSet) -> Self {
        Self {
            focused: None,
            open: None,
            event_count: 0,
            hints,
            theme,
            icons,
        }
    }

    /// Event described in the tooltip line.
    #[must_use]
    pub fn focused(mut self, event: Option<&'a SentimentEvent>) -> Self {
        self.focused = event;
        self
    }

    /// Currently expanded event.
    #[must_use]
    pub fn open(mut self, open: Option<EventId>) -> Self {
        self.open = open;
        self
    }

    /// Number of events in the dataset.
    #[must_use]
    pub fn event_count(mut self, count: usize) -> Self {
        self.event_count = count;
        self
    }

    /// Hints for the timeline view.
    pub fn default_hints() -> Vec<KeyHint> {
        vec![
            KeyHint::new("\u{2190}/\u{2192}", "focus"),
            KeyHint::new("Enter", "toggle"),
            KeyHint::new("Esc", "close"),
            KeyHint::new("?", "help"),
            KeyHint::new("q", "quit"),
        ]
    }

    fn tooltip(&self) -> Line<'static> {
        let muted = Style::default().fg(self.theme.muted);
        let sep = Span::styled(self.icons.separator(), muted);

        let Some(event) = self.focused else {
            let msg = if self.event_count == 0 {
                "No events"
            } else {
                "Click an event or use \u{2190}/\u{2192} to focus one"
            };
            return Line::styled(msg, muted);
        };

        let consistency = match event.consistency {
            Consistency::Consistent => Span::styled(
                format!("{} consistent", self.icons.consistent()),
                Style::default().fg(self.theme.consistent),
            ),
            Consistency::InconsistentWith(earlier) => Span::styled(
                format!("{} inconsistent with {earlier}", self.icons.warning()),
                Style::default().fg(self.theme.error),
            ),
        };

        // Consistency comes right after the date so narrow footers keep it.
        Line::from(vec![
            Span::styled(event.date_str(), Style::default().fg(self.theme.subtext)),
            sep.clone(),
            consistency,
            sep.clone(),
            Span::styled(event.persona.clone(), Style::default().fg(self.theme.text)),
            sep.clone(),
            Span::styled(format!("{:+.2}", event.sentiment), Style::default().fg(self.theme.text)),
            sep,
            Span::styled(event.importance.label(), Style::default().fg(self.theme.subtext)),
        ])
    }

    /// Spans of the hints that fit in `budget` columns. Hints are never cut
    /// in the middle.
    fn hint_spans(&self, budget: usize) -> Vec<Span<'a>> {
        let muted = Style::default().fg(self.theme.muted);
        let sep_width = visual_width(self.icons.separator());
        let mut spans = Vec::new();
        let mut used = 0;
        for (i, hint) in self.hints.iter().enumerate() {
            let mut width = visual_width(&hint.key) + visual_width(&hint.action) + 3;
            if i > 0 {
                width += sep_width;
            }
            if used + width > budget {
                break;
            }
            used += width;
            if i > 0 {
                spans.push(Span::styled(self.icons.separator(), muted));
            }
            spans.push(Span::styled("[", muted));
            spans.push(Span::styled(hint.key.as_str(), Style::default().fg(self.theme.primary)));
            spans.push(Span::styled("] ", muted));
            spans.push(Span::styled(hint.action.as_str(), Style::default().fg(self.theme.subtext)));
        }
        spans
    }

    fn status(&self) -> String {
        let plural = if self.event_count == 1 { "" } else { "s" };
        match self.open {
            Some(id) => format!("{} event{plural} \u{b7} open {id}", self.event_count),
            None => format!("{} event{plural}", self.event_count),
        }
    }
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let style = Style::default().bg(self.theme.base);
        buf.set_style(area, style);

        let tooltip_area = Rect::new(area.x, area.y, area.width, 1);
        Paragraph::new(self.tooltip()).render(tooltip_area, buf);

        if area.height < 2 {
            return;
        }
        let hints_area = Rect::new(area.x, area.y + 1, area.width, 1);
        let status = self.status();
        let status_width = visual_width(&status);
        let width = usize::from(area.width);

        if status_width >= width {
            Paragraph::new(Line::from(self.hint_spans(width))).render(hints_area, buf);
            return;
        }

        // One column keeps the hints and the status apart.
        Paragraph::new(Line::from(self.hint_spans(width - status_width - 1))).render(hints_area, buf);
        Paragraph::new(Line::styled(status, Style::default().fg(self.theme.muted)))
            .alignment(Alignment::Right)
            .render(hints_area, buf);
    }
}
