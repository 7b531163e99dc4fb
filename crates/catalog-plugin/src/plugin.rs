//! The contract every catalog plugin implements.

use async_trait::async_trait;
use serde_json::Value;

use catalog_core::{AppError, AppResult};

use crate::metadata::{Capability, PluginMetadata};
use crate::publication::{Dataset, Publication};
use crate::types::{
    DeleteRequest, DownloadRequest, DownloadedResource, ListParams, ListResult, PrepareContext,
    ResourceEntry,
};

/// A catalog plugin.
///
/// Operations guarded by a capability have default implementations that
/// return [`ErrorKind::Unsupported`](catalog_core::ErrorKind::Unsupported),
/// so a plugin only overrides what it declares.
#[async_trait]
pub trait CatalogPlugin: Send + Sync + std::fmt::Debug {
    /// Static description of the plugin.
    fn metadata(&self) -> &PluginMetadata;

    /// JSON schema of the catalog configuration.
    fn config_schema(&self) -> Value;

    /// JSON schema of the per-download import configuration.
    fn import_config_schema(&self) -> Option<Value> {
        None
    }

    /// Validate a raw catalog configuration.
    fn assert_config_valid(&self, config: &Value) -> AppResult<()>;

    /// Normalize a catalog configuration before it is stored.
    ///
    /// Plugins typically move sensitive fields into the secrets channel and
    /// adjust the declared capabilities here.
    async fn prepare(&self, context: PrepareContext) -> AppResult<PrepareContext> {
        Ok(context)
    }

    /// List the children of a folder.
    async fn list(&self, params: ListParams) -> AppResult<ListResult>;

    /// Look up one resource by id.
    async fn get_resource(&self, resource_id: &str) -> AppResult<ResourceEntry>;

    /// Download a resource into the caller's temporary directory.
    async fn download_resource(&self, request: DownloadRequest) -> AppResult<DownloadedResource> {
        let _ = request;
        Err(unsupported(self.metadata(), Capability::Import))
    }

    /// Publish a dataset and report where it landed.
    async fn publish_dataset(
        &self,
        dataset: Dataset,
        publication: Publication,
    ) -> AppResult<Publication> {
        let _ = (dataset, publication);
        Err(unsupported(self.metadata(), Capability::PublishDataset))
    }

    /// Delete a previously made publication.
    async fn delete_dataset(&self, request: DeleteRequest) -> AppResult<()> {
        let _ = request;
        Err(unsupported(self.metadata(), Capability::DeletePublication))
    }
}

/// The error returned when a plugin does not implement `capability`.
pub fn unsupported(metadata: &PluginMetadata, capability: Capability) -> AppError {
    AppError::unsupported(format!(
        "Plugin '{}' does not support '{}'",
        metadata.id, capability
    ))
}
