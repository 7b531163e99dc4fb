//! Integration tests for registering the mock plugin with a host registry.

mod helpers;

use std::sync::Arc;

use catalog_core::ErrorKind;
use catalog_plugin::{Capability, ListParams, PluginRegistry};
use plugin_catalog_mock::PLUGIN_ID;
use serde_json::json;

#[tokio::test]
async fn test_registered_plugin_declares_base_capabilities() {
    let registry = PluginRegistry::new();
    registry
        .register(Arc::new(helpers::configured_plugin(json!({})).await))
        .await
        .expect("register");

    for capability in [
        Capability::Import,
        Capability::ImportConfig,
        Capability::PublishDataset,
        Capability::DeletePublication,
    ] {
        assert!(registry.require(PLUGIN_ID, capability).await.is_ok());
    }

    let err = registry
        .require(PLUGIN_ID, Capability::Search)
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Unsupported);
}

#[tokio::test]
async fn test_prepared_flags_enable_capabilities() {
    let registry = PluginRegistry::new();
    registry
        .register(Arc::new(helpers::full_plugin().await))
        .await
        .expect("register");

    let plugin = registry
        .require(PLUGIN_ID, Capability::Search)
        .await
        .expect("search declared");
    assert!(registry.require(PLUGIN_ID, Capability::Pagination).await.is_ok());

    let result = plugin
        .list(ListParams::in_folder("category-demographic").with_query("naissances"))
        .await
        .expect("list");
    assert_eq!(result.results.len(), 1);
}

#[tokio::test]
async fn test_duplicate_mock_registration() {
    let registry = PluginRegistry::new();
    registry
        .register(Arc::new(helpers::configured_plugin(json!({})).await))
        .await
        .expect("register");

    let err = registry
        .register(Arc::new(helpers::configured_plugin(json!({})).await))
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::InvalidArgument);
    assert_eq!(registry.list().await.len(), 1);
}
