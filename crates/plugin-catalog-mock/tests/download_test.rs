//! Integration tests for resource lookup and download.

mod helpers;

use std::sync::Arc;
use std::time::Duration;

use catalog_core::secret::SECRET_MASK;
use catalog_core::{CatalogSecrets, ErrorKind};
use catalog_plugin::{CatalogPlugin, DownloadRequest, ItemKind};
use futures::future::join_all;
use plugin_catalog_mock::tree::{CatalogTree, ResourceNode};
use plugin_catalog_mock::{MockCatalogPlugin, MockConfig};
use serde_json::{Value, json};

const POPULATION: &str = "category-demographic/resource-population-2023";

fn request(resource_id: &str, import_config: Value, dir: &std::path::Path) -> DownloadRequest {
    DownloadRequest {
        resource_id: resource_id.to_string(),
        import_config,
        tmp_dir: dir.to_path_buf(),
    }
}

#[tokio::test]
async fn test_get_resource() {
    let plugin = helpers::configured_plugin(json!({})).await;

    let resource = plugin.get_resource(POPULATION).await.expect("resource");

    assert_eq!(resource.id, POPULATION);
    assert_eq!(resource.title, "Population par commune 2023");
    assert_eq!(resource.kind, ItemKind::Resource);
}

#[tokio::test]
async fn test_get_resource_nested() {
    let plugin = helpers::configured_plugin(json!({})).await;

    let resource = plugin
        .get_resource("category-geospatial/transport/cycling/resource-bike-lanes")
        .await
        .expect("resource");

    assert_eq!(resource.format, "geojson");
}

#[tokio::test]
async fn test_get_unknown_resource() {
    let plugin = helpers::configured_plugin(json!({})).await;

    let err = plugin.get_resource("resource-unknown").await.unwrap_err();

    assert_eq!(err.kind, ErrorKind::NotFound);
}

#[tokio::test]
async fn test_resource_description_masks_secret() {
    let plugin =
        helpers::configured_plugin(json!({ "secretField": "top-secret-value" })).await;

    let resource = plugin.get_resource(POPULATION).await.expect("resource");
    let description = resource.description.expect("description");

    assert!(description.ends_with(SECRET_MASK));
    assert!(!description.contains("top-secret-value"));
}

#[tokio::test]
async fn test_download_excludes_header_by_default() {
    let plugin = helpers::configured_plugin(json!({})).await;
    let temp = tempfile::tempdir().expect("tempdir");

    let downloaded = plugin
        .download_resource(request(POPULATION, json!({ "nbRows": 7 }), temp.path()))
        .await
        .expect("download");

    assert_eq!(downloaded.resource.id, POPULATION);
    assert!(downloaded.file_path.starts_with(temp.path()));
    let content = std::fs::read_to_string(&downloaded.file_path).expect("read");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 8);
    assert!(lines[0].starts_with("code_commune"));
}

#[tokio::test]
async fn test_download_including_header() {
    let plugin = helpers::configured_plugin(json!({ "rowCounting": "includeHeader" })).await;
    let temp = tempfile::tempdir().expect("tempdir");

    let downloaded = plugin
        .download_resource(request(POPULATION, json!({ "nbRows": 7 }), temp.path()))
        .await
        .expect("download");

    let content = std::fs::read_to_string(&downloaded.file_path).expect("read");
    assert_eq!(content.lines().count(), 7);
}

#[tokio::test]
async fn test_download_default_rows() {
    let plugin = helpers::configured_plugin(json!({})).await;
    let temp = tempfile::tempdir().expect("tempdir");

    let downloaded = plugin
        .download_resource(request(POPULATION, Value::Null, temp.path()))
        .await
        .expect("download");

    let content = std::fs::read_to_string(&downloaded.file_path).expect("read");
    assert_eq!(content.lines().count(), 11);
}

#[tokio::test]
async fn test_download_writes_one_file() {
    let plugin = helpers::configured_plugin(json!({})).await;
    let temp = tempfile::tempdir().expect("tempdir");

    plugin
        .download_resource(request(POPULATION, json!({ "nbRows": 5 }), temp.path()))
        .await
        .expect("download");

    let entries: Vec<_> = std::fs::read_dir(temp.path())
        .expect("read_dir")
        .filter_map(Result::ok)
        .collect();
    assert_eq!(entries.len(), 1);
    assert_eq!(
        entries[0].file_name(),
        "category-demographic_resource-population-2023.csv"
    );
}

#[tokio::test]
async fn test_downloads_sharing_last_segment_do_not_collide() {
    let tree = CatalogTree::builder()
        .root("a", "A")
        .root("b", "B")
        .resource("a", ResourceNode::new("a/data", "Data A", "csv"))
        .resource("b", ResourceNode::new("b/data", "Data B", "csv"))
        .build()
        .expect("valid tree");
    let plugin =
        MockCatalogPlugin::with_tree(MockConfig::default(), Default::default(), Arc::new(tree));
    let temp = tempfile::tempdir().expect("tempdir");

    let first = plugin
        .download_resource(request("a/data", json!({ "nbRows": 5 }), temp.path()))
        .await
        .expect("download a");
    let second = plugin
        .download_resource(request("b/data", json!({ "nbRows": 6 }), temp.path()))
        .await
        .expect("download b");

    assert_ne!(first.file_path, second.file_path);
    assert_eq!(std::fs::read_dir(temp.path()).expect("read_dir").count(), 2);
    let first_content = std::fs::read_to_string(&first.file_path).expect("read a");
    assert_eq!(first_content.lines().count(), 6);
}

#[tokio::test]
async fn test_download_unknown_resource() {
    let plugin = helpers::configured_plugin(json!({})).await;
    let temp = tempfile::tempdir().expect("tempdir");

    let err = plugin
        .download_resource(request("nope", json!({}), temp.path()))
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::NotFound);
    assert_eq!(std::fs::read_dir(temp.path()).expect("read_dir").count(), 0);
}

#[tokio::test]
async fn test_download_missing_directory() {
    let plugin = helpers::configured_plugin(json!({})).await;
    let temp = tempfile::tempdir().expect("tempdir");

    let err = plugin
        .download_resource(request(POPULATION, json!({}), &temp.path().join("absent")))
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::Storage);
}

#[tokio::test(start_paused = true)]
async fn test_invalid_import_config_fails_before_delay() {
    let plugin = helpers::configured_plugin(json!({ "delay": 1000 })).await;
    let temp = tempfile::tempdir().expect("tempdir");
    let start = tokio::time::Instant::now();

    for nb_rows in [4, 51] {
        let err = plugin
            .download_resource(request(POPULATION, json!({ "nbRows": nb_rows }), temp.path()))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidArgument);
    }

    assert_eq!(start.elapsed(), Duration::ZERO);
}

#[tokio::test]
async fn test_concurrent_downloads_into_distinct_dirs() {
    let plugin = helpers::configured_plugin_with_secrets(
        json!({ "delay": 5 }),
        CatalogSecrets::default(),
    )
    .await;
    let dirs: Vec<_> = (0..8)
        .map(|_| tempfile::tempdir().expect("tempdir"))
        .collect();

    let results = join_all(dirs.iter().enumerate().map(|(i, dir)| {
        plugin.download_resource(request(
            POPULATION,
            json!({ "nbRows": 5 + i }),
            dir.path(),
        ))
    }))
    .await;

    for (i, result) in results.into_iter().enumerate() {
        let downloaded = result.expect("download");
        assert!(downloaded.file_path.starts_with(dirs[i].path()));
        let content = std::fs::read_to_string(&downloaded.file_path).expect("read");
        assert_eq!(content.lines().count(), 5 + i + 1);
    }
}
