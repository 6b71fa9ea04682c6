//! Sentiment event types.
//!
//! An event is one recorded statement or action by a persona:
//! - when it happened and how positive it was (sentiment in [-1, 1])
//! - how much it matters (importance, drives marker size)
//! - whether it contradicts an earlier event (consistency flag)

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique event identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(pub u32);

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Categorical weight of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Importance {
    Low,
    Medium,
    High,
}

impl Importance {
    /// Marker radius in layout pixels.
    pub fn marker_radius(self) -> f64 {
        match self {
            Self::Low => 5.0,
            Self::Medium => 10.0,
            Self::High => 15.0,
        }
    }

    /// Lowercase label, matching the wire format.
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// Whether an event contradicts an earlier one.
///
/// The referenced id is a display hint only; it is never resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Consistency {
    #[default]
    Consistent,
    InconsistentWith(EventId),
}

impl Consistency {
    /// Check if this event is flagged as inconsistent.
    pub fn is_inconsistent(self) -> bool {
        matches!(self, Self::InconsistentWith(_))
    }

    fn from_wire(value: Option<EventId>) -> Self {
        value.map_or(Self::Consistent, Self::InconsistentWith)
    }

    fn to_wire(self) -> Option<EventId> {
        match self {
            Self::Consistent => None,
            Self::InconsistentWith(id) => Some(id),
        }
    }
}

/// A dated, scored statement by a persona.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "EventRecord", into = "EventRecord")]
pub struct SentimentEvent {
    pub id: EventId,
    pub date: NaiveDate,
    /// Expected in [-1, 1]; not clamped.
    pub sentiment: f64,
    pub importance: Importance,
    /// Display name of the subject.
    pub persona: String,
    /// Free-text description.
    pub description: String,
    /// Avatar resource reference, resolved by the renderer.
    pub image: String,
    pub consistency: Consistency,
}

impl SentimentEvent {
    /// Create a consistent event.
    pub fn new(
        id: u32,
        date: NaiveDate,
        sentiment: f64,
        importance: Importance,
        persona: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: EventId(id),
            date,
            sentiment,
            importance,
            persona: persona.into(),
            description: description.into(),
            image: String::new(),
            consistency: Consistency::Consistent,
        }
    }

    /// Set the avatar resource reference.
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Flag this event as contradicting an earlier one.
    #[must_use]
    pub fn inconsistent_with(mut self, earlier: u32) -> Self {
        self.consistency = Consistency::InconsistentWith(EventId(earlier));
        self
    }

    /// Date formatted for display (`YYYY-MM-DD`).
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// JSON shape of an event, with the optional `inconsistentWith` key.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EventRecord {
    id: EventId,
    date: NaiveDate,
    sentiment: f64,
    importance: Importance,
    persona: String,
    event: String,
    #[serde(default)]
    image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    inconsistent_with: Option<EventId>,
}

impl From<EventRecord> for SentimentEvent {
    fn from(record: EventRecord) -> Self {
        Self {
            id: record.id,
            date: record.date,
            sentiment: record.sentiment,
            importance: record.importance,
            persona: record.persona,
            description: record.event,
            image: record.image,
            consistency: Consistency::from_wire(record.inconsistent_with),
        }
    }
}

impl From<SentimentEvent> for EventRecord {
    fn from(event: SentimentEvent) -> Self {
        Self {
            id: event.id,
            date: event.date,
            sentiment: event.sentiment,
            importance: event.importance,
            persona: event.persona,
            event: event.description,
            image: event.image,
            inconsistent_with: event.consistency.to_wire(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_radius_table() {
        assert_eq!(Importance::High.marker_radius(), 15.0);
        assert_eq!(Importance::Medium.marker_radius(), 10.0);
        assert_eq!(Importance::Low.marker_radius(), 5.0);
    }

    #[test]
    fn test_parse_inconsistent_event() {
        let json = r#"{
            "id": 2,
            "date": "2023-03-15",
            "sentiment": -0.8,
            "importance": "high",
            "persona": "Senator A",
            "event": "Voted against carbon tax",
            "inconsistentWith": 1,
            "image": "/api/placeholder/50/50"
        }"#;
        let event: SentimentEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.id, EventId(2));
        assert_eq!(event.importance, Importance::High);
        assert_eq!(event.description, "Voted against carbon tax");
        assert_eq!(event.consistency, Consistency::InconsistentWith(EventId(1)));
        assert_eq!(event.date_str(), "2023-03-15");
    }

    #[test]
    fn test_missing_flag_is_consistent() {
        let json = r#"{"id": 3, "date": "2023-06-30", "sentiment": 0.2,
            "importance": "low", "persona": "Senator B", "event": "Proposed education reform"}"#;
        let event: SentimentEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.consistency, Consistency::Consistent);
        assert!(event.image.is_empty());
    }

    #[test]
    fn test_consistent_event_omits_flag_when_serialized() {
        let date = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        let event = SentimentEvent::new(1, date, 0.5, Importance::Medium, "A", "x");
        let json = serde_json::to_string(&event).unwrap();
        assert!(!json.contains("inconsistentWith"));
        assert!(json.contains(r#""event":"x""#));

        let flagged = event.inconsistent_with(7);
        let json = serde_json::to_string(&flagged).unwrap();
        assert!(json.contains(r#""inconsistentWith":7"#));
    }

    #[test]
    fn test_malformed_date_rejected() {
        let json = r#"{"id": 1, "date": "2023-13-45", "sentiment": 0.0,
            "importance": "low", "persona": "A", "event": "x"}"#;
        assert!(serde_json::from_str::<SentimentEvent>(json).is_err());
    }

    #[test]
    fn test_unknown_importance_rejected() {
        let json = r#"{"id": 1, "date": "2023-01-01", "sentiment": 0.0,
            "importance": "critical", "persona": "A", "event": "x"}"#;
        assert!(serde_json::from_str::<SentimentEvent>(json).is_err());
    }

    #[test]
    fn test_event_id_display() {
        assert_eq!(EventId(4).to_string(), "#4");
    }
}
