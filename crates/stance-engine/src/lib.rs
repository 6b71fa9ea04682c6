//! stance-engine: Headless core of the stance sentiment timeline
//!
//! This crate provides everything that does not touch a terminal:
//! - Event model with importance and consistency flags
//! - Boundary-validated datasets (built-in sample, JSON files)
//! - Layout mapping from dates and sentiment to pixel coordinates
//! - Disclosure state (at most one expanded event)
//! - Configuration

pub mod config;
pub mod dataset;
pub mod disclosure;
pub mod event;
pub mod layout;

// Re-export commonly used types
pub use config::{ChartConfig, Config, ConfigError, IconPreference, ThemeName};
pub use dataset::{Dataset, DatasetError, SAMPLE_IMAGE};
pub use disclosure::{Disclosure, Panel};
pub use event::{Consistency, EventId, Importance, SentimentEvent};
pub use layout::{layout, x_for, y_for, EventPosition, Extent};

/// Returns the engine version.
pub fn engine_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_version() {
        let version = engine_version();
        assert!(!version.is_empty());
        assert!(version.starts_with("0."));
    }
}
