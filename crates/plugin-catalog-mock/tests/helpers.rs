//! Shared test helpers for integration tests.
#![allow(dead_code)]

use serde_json::{Value, json};

use catalog_core::CatalogSecrets;
use catalog_plugin::{CatalogPlugin, Dataset, PrepareContext};
use plugin_catalog_mock::MockCatalogPlugin;
use plugin_catalog_mock::metadata::BASE_CAPABILITIES;

/// Build a plugin the way a host does: prepare, validate, construct.
pub async fn configured_plugin(config: Value) -> MockCatalogPlugin {
    configured_plugin_with_secrets(config, CatalogSecrets::default()).await
}

/// Same as [`configured_plugin`], starting from stored secrets.
pub async fn configured_plugin_with_secrets(
    config: Value,
    secrets: CatalogSecrets,
) -> MockCatalogPlugin {
    let bare = MockCatalogPlugin::unconfigured().expect("Failed to build plugin");
    let prepared = bare
        .prepare(PrepareContext {
            catalog_config: config,
            secrets,
            capabilities: BASE_CAPABILITIES.to_vec(),
        })
        .await
        .expect("Failed to prepare configuration");
    bare.assert_config_valid(&prepared.catalog_config)
        .expect("Prepared configuration is invalid");
    MockCatalogPlugin::from_prepared(&prepared).expect("Failed to configure plugin")
}

/// Plugin with search and pagination enabled.
pub async fn full_plugin() -> MockCatalogPlugin {
    configured_plugin(json!({ "searchCapability": true, "paginationCapability": true })).await
}

/// A dataset to publish.
pub fn dataset() -> Dataset {
    Dataset {
        id: "ds-42".to_string(),
        slug: "population-legale".to_string(),
        title: "Population légale".to_string(),
    }
}

/// Every folder id of the sample catalog with its depth.
pub const SAMPLE_FOLDERS: [(&str, usize); 4] = [
    ("category-geospatial", 1),
    ("category-geospatial/transport", 2),
    ("category-geospatial/transport/cycling", 3),
    ("category-demographic", 1),
];
