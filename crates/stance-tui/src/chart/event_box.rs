//! Event boxes overlaid on the chart.
//!
//! Every event gets a box centered on its projected position. Collapsed
//! boxes show only the avatar; the single expanded box adds persona, the
//! inconsistency message and the description. The expanded box is placed
//! last so it draws on top and wins hit tests.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Widget},
};
use stance_engine::{Consistency, Disclosure, EventId, EventPosition, Panel, SentimentEvent};

use super::projection::Projection;
use crate::avatar::Avatar;
use crate::text::{truncate_to_width, visual_width, wrap_text};
use crate::theme::{BorderSet, IconSet, Theme};

/// Outer width of a collapsed box.
pub const COLLAPSED_WIDTH: u16 = 6;

/// Outer height of a collapsed box.
pub const COLLAPSED_HEIGHT: u16 = 3;

/// Outer width of the expanded box (before clamping to the plot).
pub const EXPANDED_WIDTH: u16 = 34;

/// Shown in expanded boxes of events flagged as inconsistent.
pub const INCONSISTENT_MESSAGE: &str = "Inconsistent with previous statement";

/// A box with its final on-screen rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedBox {
    pub id: EventId,
    /// Index of the event in the dataset.
    pub index: usize,
    pub rect: Rect,
    pub panel: Panel,
}

/// One unstyled line of an expanded box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyLine {
    /// Avatar glyph and persona name.
    Header { glyph: String, persona: String },
    /// Part of the wrapped description.
    Text(String),
    /// Date, sentiment, importance.
    Meta(String),
    /// Part of the wrapped inconsistency message.
    Warning(String),
}

/// Lines of an expanded box for an inner width.
pub fn expanded_body(
    event: &SentimentEvent,
    avatar: &Avatar,
    width: usize,
    icons: &IconSet,
) -> Vec<BodyLine> {
    let persona_width = width.saturating_sub(visual_width(&avatar.glyph) + 1);
    let mut lines = vec![BodyLine::Header {
        glyph: avatar.glyph.clone(),
        persona: truncate_to_width(&event.persona, persona_width),
    }];

    // Directly under the header so a clipped box still shows it.
    match event.consistency {
        Consistency::Consistent => {}
        Consistency::InconsistentWith(_) => {
            let warning = format!("{} {INCONSISTENT_MESSAGE}", icons.warning());
            lines.extend(wrap_text(&warning, width).into_iter().map(BodyLine::Warning));
        }
    }

    lines.extend(wrap_text(&event.description, width).into_iter().map(BodyLine::Text));

    let meta = [
        event.date_str(),
        format!("{:+.2}", event.sentiment),
        event.importance.label().to_string(),
    ]
    .join(icons.separator());
    lines.push(BodyLine::Meta(truncate_to_width(&meta, width)));

    lines
}

/// Center a `width` x `height` box on `center`, shifted to stay inside `bounds`.
fn centered_within(center: Position, width: u16, height: u16, bounds: Rect) -> Rect {
    let width = width.min(bounds.width);
    let height = height.min(bounds.height);
    let x = center
        .x
        .saturating_sub(width / 2)
        .clamp(bounds.x, bounds.right() - width);
    let y = center
        .y
        .saturating_sub(height / 2)
        .clamp(bounds.y, bounds.bottom() - height);
    Rect::new(x, y, width, height)
}

/// Compute every box's rectangle, in drawing order.
pub fn place_boxes(
    events: &[SentimentEvent],
    positions: &[EventPosition],
    avatars: &[Avatar],
    disclosure: &Disclosure,
    projection: &Projection,
    icons: &IconSet,
) -> Vec<PlacedBox> {
    let bounds = projection.area();
    if bounds.is_empty() {
        return Vec::new();
    }

    let mut placed = Vec::with_capacity(events.len());
    let mut expanded = None;

    for (index, ((event, pos), avatar)) in events.iter().zip(positions).zip(avatars).enumerate() {
        let center = projection.to_cell(pos.x, pos.y);
        match disclosure.panel(event.id) {
            Panel::Collapsed => placed.push(PlacedBox {
                id: event.id,
                index,
                rect: centered_within(center, COLLAPSED_WIDTH, COLLAPSED_HEIGHT, bounds),
                panel: Panel::Collapsed,
            }),
            Panel::Expanded => {
                let width = EXPANDED_WIDTH.min(bounds.width);
                let body = expanded_body(event, avatar, usize::from(width.saturating_sub(2)), icons);
                let height = u16::try_from(body.len() + 2).unwrap_or(u16::MAX);
                expanded = Some(PlacedBox {
                    id: event.id,
                    index,
                    rect: centered_within(center, width, height, bounds),
                    panel: Panel::Expanded,
                });
            }
        }
    }

    placed.extend(expanded);
    placed
}

/// Topmost box containing the cell, if any.
pub fn hit_test(boxes: &[PlacedBox], column: u16, row: u16) -> Option<&PlacedBox> {
    boxes
        .iter()
        .rev()
        .find(|b| b.rect.contains(Position { x: column, y: row }))
}

/// A single event box.
pub struct EventBox<'a> {
    event: &'a SentimentEvent,
    avatar: &'a Avatar,
    panel: Panel,
    focused: bool,
    theme: &'a Theme,
    icons: &'a IconSet,
    borders: &'a BorderSet,
}

impl<'a> EventBox<'a> {
    /// Create a box for an event.
    pub fn new(
        event: &'a SentimentEvent,
        avatar: &'a Avatar,
        panel: Panel,
        theme: &'a Theme,
        icons: &'a IconSet,
        borders: &'a BorderSet,
    ) -> Self {
        Self {
            event,
            avatar,
            panel,
            focused: false,
            theme,
            icons,
            borders,
        }
    }

    /// Set whether the box has keyboard or hover focus.
    #[must_use]
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn styled_body(&self, width: usize) -> Vec<Line<'static>> {
        let text = Style::default().fg(self.theme.text);
        expanded_body(self.event, self.avatar, width, self.icons)
            .into_iter()
            .map(|line| match line {
                BodyLine::Header { glyph, persona } => Line::from(vec![
                    Span::styled(
                        glyph,
                        Style::default()
                            .fg(self.theme.marker(self.event.consistency))
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(" "),
                    Span::styled(persona, text.add_modifier(Modifier::BOLD)),
                ]),
                BodyLine::Text(s) => Line::styled(s, text),
                BodyLine::Meta(s) => Line::styled(s, Style::default().fg(self.theme.muted)),
                BodyLine::Warning(s) => Line::styled(s, Style::default().fg(self.theme.error)),
            })
            .collect()
    }
}

impl Widget for EventBox<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let expanded = self.panel == Panel::Expanded;
        let border_set = self.borders.for_box(self.panel, self.focused);
        let border_color = if self.focused {
            self.theme.border_focused
        } else {
            self.theme.marker(self.event.consistency)
        };

        let block = Block::bordered()
            .border_set(border_set)
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(self.theme.surface));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.is_empty() {
            return;
        }

        if expanded {
            Paragraph::new(self.styled_body(usize::from(inner.width))).render(inner, buf);
        } else {
            let glyph = Span::styled(
                self.avatar.glyph.as_str(),
                Style::default()
                    .fg(self.theme.text)
                    .add_modifier(Modifier::BOLD),
            );
            Paragraph::new(Line::from(glyph))
                .alignment(Alignment::Center)
                .render(inner, buf);
        }
    }
}
