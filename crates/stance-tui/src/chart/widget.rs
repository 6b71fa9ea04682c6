//! Chart widget: frame, axes, line, markers.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Style, Stylize},
    symbols::Marker,
    widgets::{
        canvas::{Canvas, Circle, Line as CanvasLine, Points},
        Block, Widget,
    },
};
use stance_engine::{y_for, EventPosition, SentimentEvent};

use super::projection::Projection;
use crate::theme::{BorderSet, Theme};

/// Columns reserved left of the plot for y-axis labels.
pub const Y_GUTTER: u16 = 3;

/// Plot rectangle inside a chart area: border, y gutter and x label row removed.
pub fn plot_area(chart_area: Rect) -> Rect {
    let inner = Block::bordered().inner(chart_area);
    Rect::new(
        inner.x + Y_GUTTER.min(inner.width),
        inner.y,
        inner.width.saturating_sub(Y_GUTTER),
        inner.height.saturating_sub(1),
    )
}

/// Framed sentiment line chart.
pub struct ChartWidget<'a> {
    events: &'a [SentimentEvent],
    positions: &'a [EventPosition],
    projection: &'a Projection,
    theme: &'a Theme,
    borders: &'a BorderSet,
}

impl<'a> ChartWidget<'a> {
    /// Create a chart widget. `projection` must be fitted to `plot_area` of
    /// the area this widget is rendered into.
    pub fn new(
        events: &'a [SentimentEvent],
        positions: &'a [EventPosition],
        projection: &'a Projection,
        theme: &'a Theme,
        borders: &'a BorderSet,
    ) -> Self {
        Self {
            events,
            positions,
            projection,
            theme,
            borders,
        }
    }

    fn render_y_axis(&self, buf: &mut Buffer) {
        let plot = self.projection.area();
        let x = plot.x.saturating_sub(Y_GUTTER);
        let style = Style::default().fg(self.theme.muted);
        for (label, sentiment) in [("+1", 1.0), ("0", 0.0), ("-1", -1.0)] {
            let row = self.projection.row_for_sentiment(sentiment);
            buf.set_string(x, row, format!("{label:>2}"), style);
        }
    }

    /// Date labels under events, skipping any that would overlap.
    fn render_x_axis(&self, buf: &mut Buffer) {
        let plot = self.projection.area();
        let row = plot.bottom();
        let right = plot.right();
        let style = Style::default().fg(self.theme.muted);
        let mut next_free = plot.x;

        for (event, pos) in self.events.iter().zip(self.positions) {
            let label = event.date_str();
            let len = u16::try_from(label.len()).unwrap_or(u16::MAX);
            if len > plot.width {
                break;
            }
            let center = self.projection.to_cell(pos.x, pos.y).x;
            let start = center.saturating_sub(len / 2).clamp(plot.x, right - len);
            if start < next_free {
                continue;
            }
            buf.set_string(start, row, &label, style);
            next_free = start + len + 1;
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn reference_dots(&self) -> Vec<(f64, f64)> {
        let [x_min, x_max] = self.projection.x_bounds();
        let count = usize::from(self.projection.area().width / 2).max(2);
        let step = (x_max - x_min) / (count - 1) as f64;
        (0..count)
            .map(|i| self.projection.to_canvas(x_min + step * i as f64, y_for(0.0)))
            .collect()
    }
}

impl Widget for ChartWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .border_set(self.borders.frame())
            .border_style(Style::default().fg(self.theme.border))
            .title(" Political Consistency ".fg(self.theme.text))
            .style(Style::default().bg(self.theme.base));
        block.render(area, buf);

        let plot = self.projection.area();
        if plot.width == 0 || plot.height == 0 {
            return;
        }

        self.render_y_axis(buf);
        self.render_x_axis(buf);

        let dots = self.reference_dots();
        let canvas = Canvas::default()
            .marker(Marker::Braille)
            .background_color(self.theme.base)
            .x_bounds(self.projection.x_bounds())
            .y_bounds(self.projection.y_bounds())
            .paint(|ctx| {
                ctx.draw(&Points {
                    coords: &dots,
                    color: self.theme.reference,
                });
                ctx.layer();

                for pair in self.positions.windows(2) {
                    let (x1, y1) = self.projection.to_canvas(pair[0].x, pair[0].y);
                    let (x2, y2) = self.projection.to_canvas(pair[1].x, pair[1].y);
                    ctx.draw(&CanvasLine {
                        x1,
                        y1,
                        x2,
                        y2,
                        color: self.theme.stroke,
                    });
                }
                ctx.layer();

                for (event, pos) in self.events.iter().zip(self.positions) {
                    let (x, y) = self.projection.to_canvas(pos.x, pos.y);
                    let color = self.theme.marker(event.consistency);
                    let radius = event.importance.marker_radius();
                    // Concentric rings read as a filled dot at braille resolution.
                    for ring in [radius, radius * 2.0 / 3.0, radius / 3.0] {
                        ctx.draw(&Circle {
                            x,
                            y,
                            radius: ring,
                            color,
                        });
                    }
                }
            });
        canvas.render(plot, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use ratatui::style::Color;
    use stance_engine::{layout, ChartConfig, Dataset};

    fn render_chart(width: u16, height: u16) -> Buffer {
        let data = Dataset::sample();
        let positions = layout(data.events());
        let area = Rect::new(0, 0, width, height);
        let projection = Projection::fit(plot_area(area), &positions, ChartConfig::default());
        let theme = Theme::mocha();
        let borders = BorderSet::default();
        let mut buf = Buffer::empty(area);
        ChartWidget::new(data.events(), &positions, &projection, &theme, &borders)
            .render(area, &mut buf);
        buf
    }

    fn cells_with_fg(buf: &Buffer, color: Color) -> usize {
        buf.content().iter().filter(|c| c.fg == color).count()
    }

    #[test]
    fn test_plot_area() {
        let plot = plot_area(Rect::new(0, 0, 100, 28));
        assert_eq!(plot, Rect::new(4, 1, 95, 25));
        assert_eq!(plot_area(Rect::new(0, 0, 2, 2)).width, 0);
    }

    #[test]
    fn test_frame_and_labels() {
        let text = buffer_to_string(&render_chart(100, 28));
        assert!(text.contains("Political Consistency"));
        assert!(text.contains("+1"));
        assert!(text.contains("-1"));
        assert!(text.contains("2023-01-01"));
        assert!(text.contains("2023-11-15"));
    }

    #[test]
    fn test_inconsistent_markers_use_distinct_color() {
        let theme = Theme::mocha();
        let buf = render_chart(100, 28);
        assert!(cells_with_fg(&buf, theme.inconsistent) > 0);
        assert!(cells_with_fg(&buf, theme.consistent) > 0);
        assert_ne!(theme.inconsistent, theme.consistent);
    }

    #[test]
    fn test_tiny_area_does_not_panic() {
        let _ = render_chart(4, 3);
        let _ = render_chart(0, 0);
    }
}
