//! Layout mapping from event data to pixel coordinates.
//!
//! Coordinates are in a top-left origin pixel space:
//! - `x = days_since_epoch * 2 + 20`, epoch being the first event's date
//! - `y = (1 - sentiment) * 150 + 10`, so `+1` sits at the top (`y = 10`)
//!   and `-1` at the bottom (`y = 310`)
//!
//! The mapper trusts its input: nothing is clamped or validated.

use crate::event::{EventId, SentimentEvent};
use chrono::NaiveDate;
use serde::Serialize;

/// Horizontal pixels per elapsed day.
pub const PX_PER_DAY: f64 = 2.0;

/// Horizontal offset of the epoch.
pub const X_OFFSET: f64 = 20.0;

/// Vertical pixels per unit of `1 - sentiment`.
pub const Y_SCALE: f64 = 150.0;

/// Vertical offset of `sentiment = 1`.
pub const Y_OFFSET: f64 = 10.0;

/// Screen position of one event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EventPosition {
    pub id: EventId,
    pub x: f64,
    pub y: f64,
}

/// Horizontal coordinate for a date relative to an epoch.
#[allow(clippy::cast_precision_loss)]
pub fn x_for(date: NaiveDate, epoch: NaiveDate) -> f64 {
    let days = (date - epoch).num_days();
    days as f64 * PX_PER_DAY + X_OFFSET
}

/// Vertical coordinate for a sentiment value.
pub fn y_for(sentiment: f64) -> f64 {
    (1.0 - sentiment) * Y_SCALE + Y_OFFSET
}

/// Map every event to its position, using the first event's date as epoch.
///
/// Returns an empty layout for an empty list.
pub fn layout(events: &[SentimentEvent]) -> Vec<EventPosition> {
    let Some(first) = events.first() else {
        return Vec::new();
    };
    let epoch = first.date;

    events
        .iter()
        .map(|event| EventPosition {
            id: event.id,
            x: x_for(event.date, epoch),
            y: y_for(event.sentiment),
        })
        .collect()
}

/// Bounding box of a layout. Zero-sized at the origin for an empty layout.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Extent {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Extent {
    /// Compute the extent of a layout.
    pub fn of(positions: &[EventPosition]) -> Self {
        let Some(first) = positions.first() else {
            return Self::default();
        };
        let start = Self {
            min_x: first.x,
            max_x: first.x,
            min_y: first.y,
            max_y: first.y,
        };
        positions[1..].iter().fold(start, |acc, p| Self {
            min_x: acc.min_x.min(p.x),
            max_x: acc.max_x.max(p.x),
            min_y: acc.min_y.min(p.y),
            max_y: acc.max_y.max(p.y),
        })
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}
