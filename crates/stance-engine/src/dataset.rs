//! Immutable, validated event lists.
//!
//! Validation happens once, at the boundary: duplicate ids and malformed
//! records are rejected here so that layout and rendering stay total.

use crate::event::{EventId, Importance, SentimentEvent};
use chrono::NaiveDate;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info, warn};

/// Avatar reference used by the built-in sample.
pub const SAMPLE_IMAGE: &str = "/api/placeholder/50/50";

/// A validated list of events, expected in chronological order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    events: Vec<SentimentEvent>,
}

impl Dataset {
    /// Validate and wrap a list of events.
    ///
    /// Rejects duplicate ids. Out-of-order dates are accepted with a warning,
    /// since the layout simply measures from the first event.
    pub fn new(events: Vec<SentimentEvent>) -> Result<Self, DatasetError> {
        let mut seen = HashSet::with_capacity(events.len());
        for event in &events {
            if !seen.insert(event.id) {
                return Err(DatasetError::DuplicateId(event.id));
            }
        }

        if let Some(pair) = events.windows(2).find(|w| w[1].date < w[0].date) {
            warn!(
                before = %pair[0].id,
                after = %pair[1].id,
                "events are not in chronological order"
            );
        }

        for event in &events {
            if let crate::Consistency::InconsistentWith(earlier) = event.consistency {
                if !seen.contains(&earlier) {
                    debug!(event = %event.id, %earlier, "inconsistency refers to an unknown event");
                }
            }
        }

        Ok(Self { events })
    }

    /// The five-event sample shown when no dataset is configured.
    pub fn sample() -> Self {
        let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default();
        let events = vec![
            SentimentEvent::new(1, date(2023, 1, 1), 0.5, Importance::Medium, "Senator A", "Supported climate bill"),
            SentimentEvent::new(2, date(2023, 3, 15), -0.8, Importance::High, "Senator A", "Voted against carbon tax")
                .inconsistent_with(1),
            SentimentEvent::new(3, date(2023, 6, 30), 0.2, Importance::Low, "Senator B", "Proposed education reform"),
            SentimentEvent::new(4, date(2023, 9, 1), 1.0, Importance::High, "Senator A", "Announced green energy initiative"),
            SentimentEvent::new(5, date(2023, 11, 15), -0.3, Importance::Medium, "Senator B", "Criticized education spending")
                .inconsistent_with(3),
        ];
        Self {
            events: events.into_iter().map(|e| e.with_image(SAMPLE_IMAGE)).collect(),
        }
    }

    /// Parse a JSON array of events.
    pub fn from_json(content: &str) -> Result<Self, DatasetError> {
        let events: Vec<SentimentEvent> =
            serde_json::from_str(content).map_err(DatasetError::Parse)?;
        Self::new(events)
    }

    /// Load a JSON array of events from a file.
    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        let content = std::fs::read_to_string(path)?;
        let dataset = Self::from_json(&content)?;
        info!(path = %path.display(), events = dataset.len(), "loaded dataset");
        Ok(dataset)
    }

    /// Serialize as a pretty-printed JSON array.
    pub fn to_json(&self) -> Result<String, DatasetError> {
        serde_json::to_string_pretty(&self.events).map_err(DatasetError::Serialize)
    }

    /// Get all events.
    pub fn events(&self) -> &[SentimentEvent] {
        &self.events
    }

    /// Find an event by id.
    pub fn get(&self, id: EventId) -> Option<&SentimentEvent> {
        self.events.iter().find(|e| e.id == id)
    }

    /// Position of an event in the list.
    pub fn index_of(&self, id: EventId) -> Option<usize> {
        self.events.iter().position(|e| e.id == id)
    }

    /// Get the number of events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Check if the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Errors that can occur when building or loading a dataset.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// I/O error reading the dataset file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON, date, or importance value.
    #[error("Parse error: {0}")]
    Parse(#[source] serde_json::Error),

    /// Error serializing events to JSON.
    #[error("Serialize error: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Two events share an id.
    #[error("Duplicate event id: {0}")]
    DuplicateId(EventId),
}
