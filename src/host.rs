//! Plugin bootstrap: prepare, validate and register the mock plugin.

use std::sync::Arc;

use catalog_core::config::AppConfig;
use catalog_core::{AppResult, CatalogSecrets};
use catalog_plugin::{Capability, CatalogPlugin, PluginRegistry, PrepareContext};
use plugin_catalog_mock::{MockCatalogPlugin, PLUGIN_ID};

/// Host state shared by every command.
#[derive(Debug)]
pub struct CatalogHost {
    registry: PluginRegistry,
}

impl CatalogHost {
    /// Run the plugin's `prepare` hook on the configured catalog section,
    /// validate the result and register the configured plugin.
    pub async fn bootstrap(config: &AppConfig) -> AppResult<Self> {
        let secrets = CatalogSecrets::load()?;
        let bare = MockCatalogPlugin::unconfigured()?;

        let prepared = bare
            .prepare(PrepareContext {
                catalog_config: config.catalog.clone(),
                secrets,
                capabilities: bare.metadata().capabilities.clone(),
            })
            .await?;
        bare.assert_config_valid(&prepared.catalog_config)?;

        let plugin = MockCatalogPlugin::from_prepared(&prepared)?;
        tracing::info!(
            delay_ms = plugin.config().delay,
            search = plugin.config().search_capability,
            pagination = plugin.config().pagination_capability,
            secret_set = prepared.secrets.is_set(),
            "Catalog plugin configured"
        );

        let registry = PluginRegistry::new();
        registry.register(Arc::new(plugin)).await?;

        Ok(Self { registry })
    }

    /// The mock plugin, provided it declares `capability`.
    pub async fn plugin(&self, capability: Capability) -> AppResult<Arc<dyn CatalogPlugin>> {
        self.registry.require(PLUGIN_ID, capability).await
    }

    /// The registry itself.
    pub fn registry(&self) -> &PluginRegistry {
        &self.registry
    }
}
