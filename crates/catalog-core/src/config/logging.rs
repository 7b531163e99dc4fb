//! Logging configuration.

use serde::{Deserialize, Serialize};

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Multi-line, human-readable events.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

/// Logging and tracing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Fallback filter directive when `RUST_LOG` is unset, e.g. `"info"`
    /// or `"plugin_catalog_mock=debug,info"`.
    #[serde(default = "default_level")]
    pub level: String,
    /// Event format.
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
        }
    }
}

impl LoggingConfig {
    /// Whether structured JSON output was requested.
    pub fn is_json(&self) -> bool {
        self.format == LogFormat::Json
    }
}

fn default_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info");
        assert!(!config.is_json());
    }

    #[test]
    fn test_parse_json_format() {
        let config: LoggingConfig =
            toml::from_str("level = \"debug\"\nformat = \"json\"\n").expect("parse toml");
        assert!(config.is_json());
        assert_eq!(config.level, "debug");
    }
}
