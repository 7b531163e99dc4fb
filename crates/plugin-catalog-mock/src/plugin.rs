//! Mock catalog plugin implementation, wired into the catalog plugin contract.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::{Map, Value};
use tracing::{debug, info};

use catalog_core::secret::SECRET_MASK;
use catalog_core::{AppError, AppResult, CatalogSecrets};
use catalog_plugin::{
    CatalogPlugin, Capability, Dataset, DeleteRequest, DownloadRequest, DownloadedResource,
    ListParams, ListResult, PluginMetadata, PrepareContext, Publication, ResourceEntry,
};

use crate::config::{ImportConfig, MockConfig};
use crate::download::{FsUtils, SAMPLE_CSV};
use crate::error::MockError;
use crate::fixture;
use crate::listing;
use crate::metadata::{capabilities_for, plugin_metadata};
use crate::tree::CatalogTree;

const SECRET_FIELD: &str = "secretField";

/// Mock catalog plugin serving an in-memory folder tree.
#[derive(Debug)]
pub struct MockCatalogPlugin {
    /// Plugin metadata, including the declared capabilities.
    metadata: PluginMetadata,
    /// Validated catalog configuration.
    config: MockConfig,
    /// Secrets moved out of the configuration by `prepare`.
    secrets: CatalogSecrets,
    /// Shared, immutable catalog content.
    tree: Arc<CatalogTree>,
}

impl MockCatalogPlugin {
    /// Create a plugin serving the sample catalog.
    pub fn new(config: MockConfig, secrets: CatalogSecrets) -> AppResult<Self> {
        Ok(Self::with_tree(config, secrets, fixture::sample_tree()?))
    }

    /// Create a plugin serving `tree`.
    pub fn with_tree(config: MockConfig, secrets: CatalogSecrets, tree: Arc<CatalogTree>) -> Self {
        let capabilities = capabilities_for(config.search_capability, config.pagination_capability);
        Self {
            metadata: plugin_metadata(capabilities),
            config,
            secrets,
            tree,
        }
    }

    /// Create a plugin from the output of [`CatalogPlugin::prepare`].
    ///
    /// The declared capabilities are the prepared ones.
    pub fn from_prepared(context: &PrepareContext) -> AppResult<Self> {
        let config = MockConfig::from_value(&context.catalog_config)?;
        let mut plugin = Self::new(config, context.secrets.clone())?;
        plugin.metadata.capabilities = context.capabilities.clone();
        Ok(plugin)
    }

    /// A plugin with default configuration and no secret, used to run
    /// `prepare` before the real configuration is known.
    pub fn unconfigured() -> AppResult<Self> {
        Self::new(MockConfig::default(), CatalogSecrets::default())
    }

    /// The active configuration.
    pub fn config(&self) -> &MockConfig {
        &self.config
    }

    /// The catalog content.
    pub fn tree(&self) -> &CatalogTree {
        &self.tree
    }
}

async fn simulate_latency(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

fn flag(config: &Map<String, Value>, camel: &str, snake: &str) -> bool {
    config
        .get(camel)
        .or_else(|| config.get(snake))
        .and_then(Value::as_bool)
        .unwrap_or(false)
}

#[async_trait]
impl CatalogPlugin for MockCatalogPlugin {
    fn metadata(&self) -> &PluginMetadata {
        &self.metadata
    }

    fn config_schema(&self) -> Value {
        MockConfig::schema()
    }

    fn import_config_schema(&self) -> Option<Value> {
        Some(ImportConfig::schema())
    }

    fn assert_config_valid(&self, config: &Value) -> AppResult<()> {
        MockConfig::from_value(config)?;
        Ok(())
    }

    async fn prepare(&self, context: PrepareContext) -> AppResult<PrepareContext> {
        let PrepareContext {
            catalog_config,
            mut secrets,
            capabilities,
        } = context;

        let mut config = match catalog_config {
            Value::Null => Map::new(),
            Value::Object(map) => map,
            other => {
                return Err(AppError::invalid_argument(format!(
                    "Catalog configuration must be an object, got {other}"
                )));
            }
        };

        let submitted = config
            .remove(SECRET_FIELD)
            .or_else(|| config.remove("secret_field"));
        match submitted {
            Some(Value::String(value)) if value == SECRET_MASK => {
                config.insert(SECRET_FIELD.to_string(), Value::from(SECRET_MASK));
            }
            Some(Value::String(value)) if !value.is_empty() => {
                secrets.set_secret_field(Some(value));
                config.insert(SECRET_FIELD.to_string(), Value::from(SECRET_MASK));
                debug!("Moved secret field into the secrets channel");
            }
            _ => {
                if secrets.is_set() {
                    debug!("Secret field cleared");
                }
                secrets.set_secret_field(None);
            }
        }

        let search = flag(&config, "searchCapability", "search_capability");
        let pagination = flag(&config, "paginationCapability", "pagination_capability");
        let mut capabilities: Vec<Capability> = capabilities
            .into_iter()
            .filter(|c| !matches!(c, Capability::Search | Capability::Pagination))
            .collect();
        if search {
            capabilities.push(Capability::Search);
        }
        if pagination {
            capabilities.push(Capability::Pagination);
        }

        debug!(search, pagination, secret_set = secrets.is_set(), "Prepared catalog configuration");

        Ok(PrepareContext {
            catalog_config: Value::Object(config),
            secrets,
            capabilities,
        })
    }

    async fn list(&self, params: ListParams) -> AppResult<ListResult> {
        debug!(
            folder_id = ?params.current_folder_id,
            q = ?params.q,
            page = ?params.page,
            size = ?params.size,
            "Listing catalog folder"
        );
        let page = listing::page_window(&self.config, &params)?;

        simulate_latency(self.config.delay()).await;

        let result = listing::list(&self.tree, &self.config, &self.secrets, &params, page)?;
        debug!(
            count = result.count,
            returned = result.results.len(),
            depth = result.path.len(),
            "Listed catalog folder"
        );
        Ok(result)
    }

    async fn get_resource(&self, resource_id: &str) -> AppResult<ResourceEntry> {
        debug!(resource_id = %resource_id, "Looking up resource");

        simulate_latency(self.config.delay()).await;

        let resource = self
            .tree
            .find_resource(resource_id)
            .ok_or_else(|| MockError::ResourceNotFound {
                id: resource_id.to_string(),
            })?;
        Ok(listing::resource_entry(resource, &self.secrets))
    }

    async fn download_resource(&self, request: DownloadRequest) -> AppResult<DownloadedResource> {
        let import_config = ImportConfig::from_value(&request.import_config)?;
        debug!(
            resource_id = %request.resource_id,
            nb_rows = import_config.nb_rows,
            tmp_dir = %request.tmp_dir.display(),
            "Downloading resource"
        );

        simulate_latency(self.config.delay()).await;

        let resource = self
            .tree
            .find_resource(&request.resource_id)
            .ok_or_else(|| MockError::ResourceNotFound {
                id: request.resource_id.clone(),
            })?;

        let contents = FsUtils::truncate_rows(
            SAMPLE_CSV,
            import_config.nb_rows as usize,
            self.config.row_counting,
        );
        let file_name = FsUtils::download_file_name(&resource.id);
        let file_path = FsUtils::write_atomic(&request.tmp_dir, &file_name, &contents).await?;

        info!(
            resource_id = %resource.id,
            path = %file_path.display(),
            bytes = contents.len(),
            "Resource downloaded"
        );

        Ok(DownloadedResource {
            resource: listing::resource_entry(resource, &self.secrets),
            file_path,
        })
    }

    async fn publish_dataset(
        &self,
        dataset: Dataset,
        publication: Publication,
    ) -> AppResult<Publication> {
        let action = publication.parsed_action()?;
        let published =
            crate::publication::simulate(&dataset, publication, action, self.config.base_url())?;

        info!(dataset_id = %dataset.id, action = %action, "Publishing dataset");

        simulate_latency(self.config.publication_delay()).await;

        Ok(published)
    }

    async fn delete_dataset(&self, request: DeleteRequest) -> AppResult<()> {
        info!(
            folder_id = ?request.folder_id,
            resource_id = ?request.resource_id,
            "Deleting publication"
        );

        simulate_latency(self.config.publication_delay()).await;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::ErrorKind;
    use serde_json::json;

    fn context(config: Value) -> PrepareContext {
        PrepareContext {
            catalog_config: config,
            secrets: CatalogSecrets::default(),
            capabilities: capabilities_for(false, false),
        }
    }

    #[tokio::test]
    async fn test_prepare_moves_secret() {
        let plugin = MockCatalogPlugin::unconfigured().expect("plugin");
        let prepared = plugin
            .prepare(context(json!({ "delay": 5, "secretField": "hunter2" })))
            .await
            .expect("prepare");
        assert_eq!(prepared.catalog_config["secretField"], SECRET_MASK);
        assert_eq!(prepared.catalog_config["delay"], 5);
        assert_eq!(prepared.secrets.expose_secret_field(), Some("hunter2"));
    }

    #[tokio::test]
    async fn test_prepare_keeps_secret_behind_mask() {
        let plugin = MockCatalogPlugin::unconfigured().expect("plugin");
        let mut ctx = context(json!({ "secretField": SECRET_MASK }));
        ctx.secrets = CatalogSecrets::new(Some("stored".to_string()));
        let prepared = plugin.prepare(ctx).await.expect("prepare");
        assert_eq!(prepared.secrets.expose_secret_field(), Some("stored"));
        assert_eq!(prepared.catalog_config["secretField"], SECRET_MASK);
    }

    #[tokio::test]
    async fn test_prepare_clears_secret() {
        let plugin = MockCatalogPlugin::unconfigured().expect("plugin");
        for config in [json!({}), json!({ "secretField": "" })] {
            let mut ctx = context(config);
            ctx.secrets = CatalogSecrets::new(Some("stored".to_string()));
            let prepared = plugin.prepare(ctx).await.expect("prepare");
            assert!(!prepared.secrets.is_set());
            assert!(prepared.catalog_config.get("secretField").is_none());
        }
    }

    #[tokio::test]
    async fn test_prepare_adjusts_capabilities() {
        let plugin = MockCatalogPlugin::unconfigured().expect("plugin");
        let prepared = plugin
            .prepare(context(json!({ "searchCapability": true })))
            .await
            .expect("prepare");
        assert!(prepared.capabilities.contains(&Capability::Search));
        assert!(!prepared.capabilities.contains(&Capability::Pagination));

        let again = plugin
            .prepare(PrepareContext {
                catalog_config: json!({ "paginationCapability": true }),
                ..prepared
            })
            .await
            .expect("prepare");
        assert!(!again.capabilities.contains(&Capability::Search));
        assert!(again.capabilities.contains(&Capability::Pagination));
        assert_eq!(
            again.capabilities.iter().filter(|c| **c == Capability::Pagination).count(),
            1
        );
    }

    #[tokio::test]
    async fn test_prepare_rejects_non_object() {
        let plugin = MockCatalogPlugin::unconfigured().expect("plugin");
        let err = plugin.prepare(context(json!([1, 2]))).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidArgument);
    }

    #[tokio::test]
    async fn test_from_prepared_uses_prepared_capabilities() {
        let plugin = MockCatalogPlugin::unconfigured().expect("plugin");
        let prepared = plugin
            .prepare(context(json!({ "searchCapability": true, "secretField": "s" })))
            .await
            .expect("prepare");
        let configured = MockCatalogPlugin::from_prepared(&prepared).expect("configured");
        assert!(configured.metadata().supports(Capability::Search));
        assert!(configured.config().search_capability);
        assert_eq!(configured.secrets.expose_secret_field(), Some("s"));
    }

    #[test]
    fn test_assert_config_valid() {
        let plugin = MockCatalogPlugin::unconfigured().expect("plugin");
        assert!(plugin.assert_config_valid(&json!({ "delay": 10 })).is_ok());
        let err = plugin
            .assert_config_valid(&json!({ "delay": 100000 }))
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_schemas_exposed() {
        let plugin = MockCatalogPlugin::unconfigured().expect("plugin");
        assert_eq!(plugin.config_schema()["type"], "object");
        assert!(plugin.import_config_schema().is_some());
        assert_eq!(plugin.tree().roots().count(), 2);
    }
}
