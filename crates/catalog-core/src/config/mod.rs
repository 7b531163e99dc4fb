//! Host configuration schemas.
//!
//! Configuration is deserialized from TOML files via the `config` crate and
//! overlaid with `CATALOG_MOCK__*` environment variables. The `catalog`
//! section is kept as raw JSON: its shape belongs to the plugin, which
//! validates it through its own schema.

pub mod logging;

pub use self::logging::{LogFormat, LoggingConfig};

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Environment variable prefix for configuration overrides.
pub const ENV_PREFIX: &str = "CATALOG_MOCK";

/// Root host configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Raw plugin configuration, handed to the plugin's `prepare` and
    /// `assert_config_valid` hooks.
    #[serde(default)]
    pub catalog: serde_json::Value,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    ///
    /// Merges `config_path` with an optional `config/<env>` overlay and
    /// environment variables prefixed with `CATALOG_MOCK__`. Missing files
    /// are not an error; every section falls back to its defaults.
    pub fn load(config_path: &str, env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let temp = tempfile::tempdir().expect("tempdir");
        let missing = temp.path().join("absent.toml");
        let config = AppConfig::load(missing.to_str().expect("utf8"), "no-such-env")
            .expect("defaults apply");
        assert_eq!(config.logging.level, "info");
        assert!(config.catalog.is_null() || config.catalog.is_object());
    }

    #[test]
    fn test_load_catalog_section_as_raw_json() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("catalog.toml");
        std::fs::write(
            &path,
            "[logging]\nlevel = \"debug\"\nformat = \"pretty\"\n\n[catalog]\ndelay = 5\nsearch_capability = true\n",
        )
        .expect("write");

        let config =
            AppConfig::load(path.to_str().expect("utf8"), "no-such-env").expect("load config");

        assert_eq!(config.logging.level, "debug");
        assert!(!config.logging.is_json());
        assert_eq!(config.catalog["delay"], serde_json::json!(5));
        assert_eq!(config.catalog["search_capability"], serde_json::json!(true));
    }

    #[test]
    fn test_malformed_file_is_configuration_error() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("broken.toml");
        std::fs::write(&path, "[logging\nlevel = ").expect("write");

        let err = AppConfig::load(path.to_str().expect("utf8"), "no-such-env")
            .expect_err("must fail");
        assert_eq!(err.kind, crate::error::ErrorKind::Configuration);
    }
}
