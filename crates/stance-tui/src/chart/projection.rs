//! Projection of layout pixels onto a terminal rectangle.
//!
//! Layout space has its origin top-left with `y` growing downward. The
//! canvas has `y` growing upward, so canvas coordinates flip `y`.

use ratatui::layout::{Position, Rect};
use stance_engine::layout::{X_OFFSET, Y_OFFSET};
use stance_engine::{y_for, ChartConfig, EventPosition, Extent};

/// Visible layout window mapped onto `area`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    area: Rect,
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

impl Projection {
    /// Fit the layout into `area`.
    ///
    /// The window starts at the origin, covers at least the configured chart
    /// size and the full `[-1, 1]` sentiment range, and grows to include
    /// every position.
    pub fn fit(area: Rect, positions: &[EventPosition], chart: ChartConfig) -> Self {
        let extent = Extent::of(positions);
        let full_range = y_for(-1.0) + Y_OFFSET;
        Self {
            area,
            x_min: extent.min_x.min(0.0),
            x_max: (extent.max_x + X_OFFSET).max(chart.width),
            y_min: extent.min_y.min(0.0),
            y_max: (extent.max_y + Y_OFFSET).max(chart.height).max(full_range),
        }
    }

    /// The terminal rectangle being drawn into.
    pub fn area(&self) -> Rect {
        self.area
    }

    /// Horizontal canvas bounds.
    pub fn x_bounds(&self) -> [f64; 2] {
        [self.x_min, self.x_max]
    }

    /// Vertical canvas bounds.
    pub fn y_bounds(&self) -> [f64; 2] {
        [0.0, self.y_max - self.y_min]
    }

    /// Convert a layout point to canvas coordinates.
    pub fn to_canvas(&self, x: f64, y: f64) -> (f64, f64) {
        (x, self.y_max - y)
    }

    /// Convert a layout point to the nearest cell inside the area.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn to_cell(&self, x: f64, y: f64) -> Position {
        let fx = ((x - self.x_min) / (self.x_max - self.x_min)).clamp(0.0, 1.0);
        let fy = ((y - self.y_min) / (self.y_max - self.y_min)).clamp(0.0, 1.0);
        let cols = f64::from(self.area.width.saturating_sub(1));
        let rows = f64::from(self.area.height.saturating_sub(1));
        Position {
            x: self.area.x + (fx * cols).round() as u16,
            y: self.area.y + (fy * rows).round() as u16,
        }
    }

    /// Row on which a sentiment value is drawn.
    pub fn row_for_sentiment(&self, sentiment: f64) -> u16 {
        self.to_cell(self.x_min, y_for(sentiment)).y
    }
}
