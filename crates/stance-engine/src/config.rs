//! Configuration types for stance.
//!
//! This module defines the configuration schema: which dataset to show,
//! the minimum chart surface, and display preferences.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::dataset::{Dataset, DatasetError};

/// Main configuration for stance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Event file to display. The built-in sample is used when absent.
    /// A relative path in a config file is relative to that file.
    #[serde(default)]
    pub dataset: Option<PathBuf>,

    /// Chart surface settings.
    #[serde(default)]
    pub chart: ChartConfig,

    /// Color theme.
    #[serde(default)]
    pub theme: ThemeName,

    /// Icon and border style.
    #[serde(default)]
    pub icons: IconPreference,
}

/// Minimum drawing surface, in layout pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(default = "default_width")]
    pub width: f64,

    #[serde(default = "default_height")]
    pub height: f64,
}

fn default_width() -> f64 {
    600.0
}

fn default_height() -> f64 {
    300.0
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
        }
    }
}

/// Color theme selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ThemeName {
    /// Dark theme.
    #[default]
    Mocha,
    /// Light theme.
    Latte,
    /// Maximum contrast.
    HighContrast,
}

/// Icon style selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum IconPreference {
    #[default]
    Unicode,
    Ascii,
}

impl Config {
    /// Load configuration from a file.
    ///
    /// A relative `dataset` path is resolved against the file's directory.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        let mut config: Self = serde_json::from_str(&content).map_err(ConfigError::Parse)?;
        if let (Some(dataset), Some(dir)) = (&config.dataset, path.parent()) {
            if dataset.is_relative() {
                config.dataset = Some(dir.join(dataset));
            }
        }
        Ok(config)
    }

    /// Save configuration to a file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigError::Io)?;
        }
        std::fs::write(path, content).map_err(ConfigError::Io)
    }

    /// Load the configured dataset, or the sample when none is set.
    pub fn load_dataset(&self) -> Result<Dataset, DatasetError> {
        match &self.dataset {
            Some(path) => Dataset::load(path),
            None => Ok(Dataset::sample()),
        }
    }
}

/// Errors that can occur when working with configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// I/O error reading or writing config.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing config JSON.
    #[error("Parse error: {0}")]
    Parse(#[source] serde_json::Error),

    /// Error serializing config to JSON.
    #[error("Serialize error: {0}")]
    Serialize(#[source] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.dataset, None);
        assert_eq!(config.chart.width, 600.0);
        assert_eq!(config.chart.height, 300.0);
        assert_eq!(config.theme, ThemeName::Mocha);
        assert_eq!(config.icons, IconPreference::Unicode);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{"theme": "high_contrast", "chart": {"width": 800}}"#).unwrap();
        assert_eq!(config.theme, ThemeName::HighContrast);
        assert_eq!(config.chart.width, 800.0);
        assert_eq!(config.chart.height, 300.0);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("nested").join("stance.json");
        let config = Config {
            dataset: Some(PathBuf::from("events.json")),
            icons: IconPreference::Ascii,
            ..Default::default()
        };

        config.save(&path).unwrap();
        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded.icons, IconPreference::Ascii);
        assert_eq!(loaded.dataset, Some(dir.path().join("nested").join("events.json")));
    }

    #[test]
    fn test_relative_dataset_follows_config_file() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(dir.path().join("events.json"), Dataset::sample().to_json().unwrap()).unwrap();
        let path = dir.path().join("stance.json");
        std::fs::write(&path, r#"{"dataset": "events.json"}"#).unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.dataset, Some(dir.path().join("events.json")));
        assert_eq!(config.load_dataset().unwrap(), Dataset::sample());
    }

    #[test]
    fn test_absolute_dataset_is_kept() {
        let dir = tempfile::TempDir::new().unwrap();
        let absolute = dir.path().join("data").join("events.json");
        let path = dir.path().join("stance.json");
        Config {
            dataset: Some(absolute.clone()),
            ..Default::default()
        }
        .save(&path)
        .unwrap();

        assert_eq!(Config::load(&path).unwrap().dataset, Some(absolute));
    }

    #[test]
    fn test_load_invalid_json() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("stance.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(Config::load(&path), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_dataset_defaults_to_sample() {
        let data = Config::default().load_dataset().unwrap();
        assert_eq!(data, Dataset::sample());
    }
}
