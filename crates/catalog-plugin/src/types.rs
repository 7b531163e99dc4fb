//! Wire types exchanged between the host and a catalog plugin.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use catalog_core::CatalogSecrets;

use crate::metadata::Capability;

/// Kind marker serialized as the `type` field of every catalog item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    /// A grouping node.
    Folder,
    /// A downloadable file-like entity.
    Resource,
}

/// A folder as seen by the host, used both in listings and breadcrumbs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderEntry {
    /// Folder identifier.
    pub id: String,
    /// Folder title.
    pub title: String,
    /// Always [`ItemKind::Folder`].
    #[serde(rename = "type")]
    pub kind: ItemKind,
}

impl FolderEntry {
    /// Create a folder entry.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            kind: ItemKind::Folder,
        }
    }
}

/// A resource as seen by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceEntry {
    /// Resource identifier.
    pub id: String,
    /// Resource title.
    pub title: String,
    /// Free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// File format (`csv`, `geojson`, ...).
    pub format: String,
    /// MIME type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    /// URL of the resource on the remote catalog.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    /// Size in bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    /// Always [`ItemKind::Resource`].
    #[serde(rename = "type")]
    pub kind: ItemKind,
}

/// One entry of a listing: folder or resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CatalogItem {
    /// A resource. Tried first when deserializing since folders lack `format`.
    Resource(ResourceEntry),
    /// A folder.
    Folder(FolderEntry),
}

impl CatalogItem {
    /// Item identifier.
    pub fn id(&self) -> &str {
        match self {
            Self::Folder(folder) => &folder.id,
            Self::Resource(resource) => &resource.id,
        }
    }

    /// Item title.
    pub fn title(&self) -> &str {
        match self {
            Self::Folder(folder) => &folder.title,
            Self::Resource(resource) => &resource.title,
        }
    }

    /// Item kind.
    pub fn kind(&self) -> ItemKind {
        match self {
            Self::Folder(_) => ItemKind::Folder,
            Self::Resource(_) => ItemKind::Resource,
        }
    }
}

/// Parameters of a `list` call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    /// Folder whose children are listed; root folders when absent.
    #[serde(default)]
    pub current_folder_id: Option<String>,
    /// Text query.
    #[serde(default)]
    pub q: Option<String>,
    /// Page number (1-based).
    #[serde(default)]
    pub page: Option<i64>,
    /// Page size.
    #[serde(default)]
    pub size: Option<i64>,
}

impl ListParams {
    /// List the children of `folder_id`.
    pub fn in_folder(folder_id: impl Into<String>) -> Self {
        Self {
            current_folder_id: Some(folder_id.into()),
            ..Self::default()
        }
    }

    /// Set the text query.
    pub fn with_query(mut self, q: impl Into<String>) -> Self {
        self.q = Some(q.into());
        self
    }

    /// Set the page window.
    pub fn with_page(mut self, page: i64, size: i64) -> Self {
        self.page = Some(page);
        self.size = Some(size);
        self
    }
}

/// Result of a `list` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListResult {
    /// Total number of items, per the plugin's count convention.
    pub count: usize,
    /// Folders first, then resources.
    pub results: Vec<CatalogItem>,
    /// Breadcrumbs from the root ancestor to the current folder.
    pub path: Vec<FolderEntry>,
}

/// Parameters of a `download_resource` call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadRequest {
    /// Resource to download.
    pub resource_id: String,
    /// Raw import configuration, validated by the plugin.
    #[serde(default)]
    pub import_config: Value,
    /// Caller-owned directory receiving the file.
    pub tmp_dir: PathBuf,
}

/// A downloaded resource and where its file landed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadedResource {
    /// Resource descriptor.
    #[serde(flatten)]
    pub resource: ResourceEntry,
    /// Path of the written file inside the caller's directory.
    pub file_path: PathBuf,
}

/// Parameters of a `delete_dataset` call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteRequest {
    /// Remote folder of the publication.
    #[serde(default)]
    pub folder_id: Option<String>,
    /// Remote resource of the publication.
    #[serde(default)]
    pub resource_id: Option<String>,
}

/// Input and output of the `prepare` hook.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrepareContext {
    /// Raw catalog configuration as entered by the catalog owner.
    pub catalog_config: Value,
    /// Secrets held outside the configuration.
    pub secrets: CatalogSecrets,
    /// Capabilities currently declared for this catalog.
    pub capabilities: Vec<Capability>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_items_serialize_type_marker() {
        let folder = CatalogItem::Folder(FolderEntry::new("f", "Folder"));
        let json = serde_json::to_value(&folder).expect("serialize");
        assert_eq!(json, serde_json::json!({ "id": "f", "title": "Folder", "type": "folder" }));

        let resource = CatalogItem::Resource(ResourceEntry {
            id: "r".to_string(),
            title: "Resource".to_string(),
            description: None,
            format: "csv".to_string(),
            mime_type: Some("text/csv".to_string()),
            origin: None,
            size: Some(12),
            kind: ItemKind::Resource,
        });
        let json = serde_json::to_value(&resource).expect("serialize");
        assert_eq!(json["type"], "resource");
        assert_eq!(json["mimeType"], "text/csv");
        assert!(json.get("description").is_none());
    }

    #[test]
    fn test_untagged_items_deserialize_to_right_variant() {
        let items: Vec<CatalogItem> = serde_json::from_value(serde_json::json!([
            { "id": "f", "title": "Folder", "type": "folder" },
            { "id": "r", "title": "Resource", "format": "csv", "type": "resource" }
        ]))
        .expect("deserialize");
        assert_eq!(items[0].kind(), ItemKind::Folder);
        assert_eq!(items[1].kind(), ItemKind::Resource);
        assert_eq!(items[1].id(), "r");
    }

    #[test]
    fn test_list_params_wire_names() {
        let params: ListParams = serde_json::from_value(serde_json::json!({
            "currentFolderId": "a", "q": "pop", "page": 2, "size": 5
        }))
        .expect("deserialize");
        assert_eq!(params, ListParams::in_folder("a").with_query("pop").with_page(2, 5));
    }

    #[test]
    fn test_downloaded_resource_flattens_descriptor() {
        let downloaded = DownloadedResource {
            resource: ResourceEntry {
                id: "r".to_string(),
                title: "Resource".to_string(),
                description: Some("d".to_string()),
                format: "csv".to_string(),
                mime_type: None,
                origin: None,
                size: None,
                kind: ItemKind::Resource,
            },
            file_path: PathBuf::from("/tmp/x/r.csv"),
        };
        let json = serde_json::to_value(&downloaded).expect("serialize");
        assert_eq!(json["id"], "r");
        assert_eq!(json["filePath"], "/tmp/x/r.csv");
    }
}
