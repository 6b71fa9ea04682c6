//! Top-level rendering: chart, event boxes, footer and overlays.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Clear, Paragraph, Widget},
};

use crate::app::{App, MIN_HEIGHT, MIN_WIDTH};
use crate::chart::{ChartWidget, EventBox};
use crate::widgets::Footer;

/// Split the screen into the chart area and the two-line footer.
pub fn split_screen(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(2)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Create a centered rect with fixed dimensions.
pub fn centered_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// Text of a buffer, one line per row, trailing spaces trimmed.
pub fn screen_text(buffer: &Buffer) -> String {
    let area = buffer.area;
    let rows: Vec<String> = (area.top()..area.bottom())
        .map(|y| {
            let row: String = (area.left()..area.right())
                .filter_map(|x| buffer.cell((x, y)))
                .map(ratatui::buffer::Cell::symbol)
                .collect();
            row.trim_end_matches(' ').to_string()
        })
        .collect();
    rows.join("\n")
}

/// Render the whole app into `area`.
pub fn render_app(app: &App, area: Rect, buf: &mut Buffer) {
    buf.set_style(area, Style::default().bg(app.theme.base));

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        render_too_small(app, area, buf);
        return;
    }

    let (chart_area, footer_area) = split_screen(area);
    let projection = app.projection(area);

    ChartWidget::new(
        app.dataset.events(),
        &app.positions,
        &projection,
        &app.theme,
        &app.borders,
    )
    .render(chart_area, buf);

    for placed in app.boxes(area) {
        let event = &app.dataset.events()[placed.index];
        EventBox::new(
            event,
            &app.avatars[placed.index],
            placed.panel,
            &app.theme,
            &app.icons,
            &app.borders,
        )
        .focused(app.focused == Some(placed.index))
        .render(placed.rect, buf);
    }

    if app.dataset.is_empty() {
        let msg = Paragraph::new("No events")
            .alignment(Alignment::Center)
            .style(Style::default().fg(app.theme.muted));
        msg.render(centered_fixed(chart_area.width, 1, chart_area), buf);
    }

    let hints = Footer::default_hints();
    Footer::new(&hints, &app.theme, &app.icons)
        .focused(app.focused_event())
        .open(app.disclosure.open())
        .event_count(app.dataset.len())
        .render(footer_area, buf);

    if app.show_help {
        render_help_overlay(app, area, buf);
    }
}

fn render_too_small(app: &App, area: Rect, buf: &mut Buffer) {
    let text = vec![
        Line::styled(
            "Terminal too small",
            Style::default()
                .fg(app.theme.warning)
                .add_modifier(Modifier::BOLD),
        ),
        Line::styled(
            format!("Need at least {MIN_WIDTH}x{MIN_HEIGHT}"),
            Style::default().fg(app.theme.muted),
        ),
    ];
    Paragraph::new(text)
        .alignment(Alignment::Center)
        .render(centered_fixed(area.width, 2, area), buf);
}

/// Render the help overlay centered in `area`.
pub fn render_help_overlay(app: &App, area: Rect, buf: &mut Buffer) {
    let help_text = r"
  Timeline
    Click / Enter / Space   Expand or collapse event
    Left/Right or h/l       Focus previous/next
    Home/End or g/G         Focus first/last
    Esc                     Collapse open event
    q / Ctrl+C              Quit
    ?                       Toggle this help

  [Press any key to close]
";

    let width = 58.min(area.width.saturating_sub(4));
    let height = 13.min(area.height.saturating_sub(4));
    let overlay_area = centered_fixed(width, height, area);

    Clear.render(overlay_area, buf);

    let block = Block::bordered()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(app.theme.primary)
                .add_modifier(Modifier::BOLD),
        )
        .border_set(app.borders.emphasis())
        .border_style(Style::default().fg(app.theme.border_focused))
        .style(Style::default().bg(app.theme.surface).fg(app.theme.text));

    Paragraph::new(help_text).block(block).render(overlay_area, buf);
}
