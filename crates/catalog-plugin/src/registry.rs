//! Plugin registry: stores catalog plugin instances by id.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{info, warn};

use catalog_core::{AppError, AppResult};

use crate::metadata::{Capability, PluginMetadata};
use crate::plugin::{CatalogPlugin, unsupported};

/// Registry of all registered catalog plugins.
#[derive(Debug)]
pub struct PluginRegistry {
    /// Plugin ID → plugin instance.
    plugins: RwLock<HashMap<String, Arc<dyn CatalogPlugin>>>,
}

impl PluginRegistry {
    /// Creates a new empty plugin registry.
    pub fn new() -> Self {
        Self {
            plugins: RwLock::new(HashMap::new()),
        }
    }

    /// Registers a plugin under its metadata id.
    pub async fn register(&self, plugin: Arc<dyn CatalogPlugin>) -> AppResult<()> {
        let metadata = plugin.metadata();
        let id = metadata.id.clone();

        let mut plugins = self.plugins.write().await;
        if plugins.contains_key(&id) {
            warn!(plugin_id = %id, "Plugin already registered");
            return Err(AppError::invalid_argument(format!(
                "Plugin '{id}' is already registered"
            )));
        }

        info!(
            plugin_id = %id,
            title = %metadata.title,
            capabilities = metadata.capabilities.len(),
            "Registering plugin"
        );
        plugins.insert(id, plugin);

        Ok(())
    }

    /// Unregisters a plugin by ID.
    pub async fn unregister(&self, plugin_id: &str) -> AppResult<Arc<dyn CatalogPlugin>> {
        let mut plugins = self.plugins.write().await;
        let plugin = plugins
            .remove(plugin_id)
            .ok_or_else(|| AppError::not_found(format!("Plugin '{plugin_id}' not found")))?;

        info!(plugin_id = %plugin_id, "Plugin unregistered");

        Ok(plugin)
    }

    /// Gets a plugin by ID.
    pub async fn get(&self, plugin_id: &str) -> Option<Arc<dyn CatalogPlugin>> {
        let plugins = self.plugins.read().await;
        plugins.get(plugin_id).cloned()
    }

    /// Gets a plugin by ID, provided it declares `capability`.
    ///
    /// Hosts call this before dispatching an optional operation.
    pub async fn require(
        &self,
        plugin_id: &str,
        capability: Capability,
    ) -> AppResult<Arc<dyn CatalogPlugin>> {
        let plugin = self
            .get(plugin_id)
            .await
            .ok_or_else(|| AppError::not_found(format!("Plugin '{plugin_id}' not found")))?;

        if !plugin.metadata().supports(capability) {
            return Err(unsupported(plugin.metadata(), capability));
        }
        Ok(plugin)
    }

    /// Lists the metadata of every registered plugin, sorted by id.
    pub async fn list(&self) -> Vec<PluginMetadata> {
        let plugins = self.plugins.read().await;
        let mut metadata: Vec<PluginMetadata> =
            plugins.values().map(|p| p.metadata().clone()).collect();
        metadata.sort_by(|a, b| a.id.cmp(&b.id));
        metadata
    }

    /// Returns plugin count.
    pub async fn count(&self) -> usize {
        let plugins = self.plugins.read().await;
        plugins.len()
    }

    /// Checks whether a plugin is registered.
    pub async fn contains(&self, plugin_id: &str) -> bool {
        let plugins = self.plugins.read().await;
        plugins.contains_key(plugin_id)
    }
}

impl Default for PluginRegistry {
    fn default() -> Self {
        Self::new()
    }
}
