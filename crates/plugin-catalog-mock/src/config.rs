//! Catalog and import configuration for the mock plugin.
//!
//! JSON keys are camelCase, as the host stores them; snake_case aliases
//! let the same structs load from TOML configuration files.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use validator::Validate;

use crate::error::MockError;

/// Multiplier applied to `delay` for publication and deletion calls.
pub const PUBLICATION_DELAY_FACTOR: u32 = 10;

/// How `count` is computed in a listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CountMode {
    /// Children of the folder before search and paging.
    #[default]
    #[serde(alias = "before_filter")]
    BeforeFilter,
    /// Search matches before paging.
    #[serde(alias = "after_filter")]
    AfterFilter,
}

/// How `nbRows` relates to the CSV header line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RowCounting {
    /// Header plus `nbRows` data lines.
    #[default]
    #[serde(alias = "exclude_header")]
    ExcludeHeader,
    /// `nbRows` lines in total, header included.
    #[serde(alias = "include_header")]
    IncludeHeader,
}

/// Configuration of one mock catalog.
#[derive(Debug, Clone, PartialEq, Eq, Validate, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MockConfig {
    /// URL of the simulated remote catalog. Informational only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(url)]
    pub url: Option<String>,

    /// Artificial latency in milliseconds.
    #[serde(default)]
    #[validate(range(max = 60000))]
    pub delay: u64,

    /// Whether `list` honours the `q` parameter.
    #[serde(default, alias = "search_capability")]
    pub search_capability: bool,

    /// Whether `list` honours `page` and `size`.
    #[serde(default, alias = "pagination_capability")]
    pub pagination_capability: bool,

    /// Listing count convention.
    #[serde(default, alias = "count_mode")]
    pub count_mode: CountMode,

    /// Download row counting convention.
    #[serde(default, alias = "row_counting")]
    pub row_counting: RowCounting,

    /// Base of the URLs fabricated by publications.
    #[serde(
        default = "default_publication_base_url",
        alias = "publication_base_url"
    )]
    #[validate(url)]
    pub publication_base_url: String,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            url: None,
            delay: 0,
            search_capability: false,
            pagination_capability: false,
            count_mode: CountMode::default(),
            row_counting: RowCounting::default(),
            publication_base_url: default_publication_base_url(),
        }
    }
}

fn default_publication_base_url() -> String {
    "https://example.com".to_string()
}

impl MockConfig {
    /// Parse and validate a raw configuration. `null` means all defaults.
    pub fn from_value(value: &Value) -> Result<Self, MockError> {
        let config: Self = parse_object(value).map_err(MockError::InvalidConfig)?;
        config
            .validate()
            .map_err(|e| MockError::InvalidConfig(e.to_string()))?;
        Ok(config)
    }

    /// Latency applied to reads.
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay)
    }

    /// Latency applied to publications and deletions.
    pub fn publication_delay(&self) -> Duration {
        self.delay() * PUBLICATION_DELAY_FACTOR
    }

    /// Publication base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.publication_base_url.trim_end_matches('/')
    }

    /// JSON schema of the catalog configuration.
    pub fn schema() -> Value {
        json!({
            "type": "object",
            "title": "Configuration",
            "properties": {
                "url": {
                    "type": "string",
                    "title": "Catalog URL",
                    "format": "uri"
                },
                "delay": {
                    "type": "integer",
                    "title": "Delay (ms)",
                    "description": "Simulated latency of every call",
                    "minimum": 0,
                    "maximum": 60000,
                    "default": 0
                },
                "searchCapability": {
                    "type": "boolean",
                    "title": "Enable search",
                    "default": false
                },
                "paginationCapability": {
                    "type": "boolean",
                    "title": "Enable pagination",
                    "default": false
                },
                "countMode": {
                    "type": "string",
                    "title": "Count mode",
                    "enum": ["beforeFilter", "afterFilter"],
                    "default": "beforeFilter"
                },
                "rowCounting": {
                    "type": "string",
                    "title": "Row counting",
                    "enum": ["excludeHeader", "includeHeader"],
                    "default": "excludeHeader"
                },
                "publicationBaseUrl": {
                    "type": "string",
                    "title": "Publication base URL",
                    "format": "uri",
                    "default": "https://example.com"
                },
                "secretField": {
                    "type": "string",
                    "title": "Secret field",
                    "description": "Stored in the secrets channel, never in the configuration",
                    "writeOnly": true
                }
            }
        })
    }
}

/// Per-download options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Validate, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportConfig {
    /// Number of rows to keep from the sample payload.
    #[serde(default = "default_nb_rows", alias = "nb_rows")]
    #[validate(range(min = 5, max = 50))]
    pub nb_rows: u32,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            nb_rows: default_nb_rows(),
        }
    }
}

fn default_nb_rows() -> u32 {
    10
}

impl ImportConfig {
    /// Parse and validate a raw import configuration.
    pub fn from_value(value: &Value) -> Result<Self, MockError> {
        let config: Self = parse_object(value).map_err(MockError::InvalidImportConfig)?;
        config
            .validate()
            .map_err(|e| MockError::InvalidImportConfig(e.to_string()))?;
        Ok(config)
    }

    /// JSON schema of the import configuration.
    pub fn schema() -> Value {
        json!({
            "type": "object",
            "title": "Import configuration",
            "properties": {
                "nbRows": {
                    "type": "integer",
                    "title": "Number of rows",
                    "minimum": 5,
                    "maximum": 50,
                    "default": 10
                }
            }
        })
    }
}

fn parse_object<T: serde::de::DeserializeOwned>(value: &Value) -> Result<T, String> {
    let value = match value {
        Value::Null => Value::Object(Default::default()),
        other => other.clone(),
    };
    serde_json::from_value(value).map_err(|e| e.to_string())
}
