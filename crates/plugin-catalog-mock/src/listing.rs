//! Folder listing: children, breadcrumbs, search and paging.

use catalog_core::types::PageRequest;
use catalog_core::{AppResult, CatalogSecrets};
use catalog_plugin::{CatalogItem, FolderEntry, ItemKind, ListParams, ListResult, ResourceEntry};
use tracing::debug;

use crate::config::{CountMode, MockConfig};
use crate::error::MockError;
use crate::tree::{CatalogTree, FolderNode, ResourceNode};

/// Validate the paging parameters of `params`.
///
/// Returns `None` when pagination is disabled, in which case `page` and
/// `size` are ignored.
pub fn page_window(config: &MockConfig, params: &ListParams) -> AppResult<Option<PageRequest>> {
    if !config.pagination_capability {
        if params.page.is_some() || params.size.is_some() {
            debug!(
                page = ?params.page,
                size = ?params.size,
                "Pagination disabled, ignoring page parameters"
            );
        }
        return Ok(None);
    }
    PageRequest::from_params(params.page, params.size).map(Some)
}

/// List the children of `params.current_folder_id`, or the root folders.
pub fn list(
    tree: &CatalogTree,
    config: &MockConfig,
    secrets: &CatalogSecrets,
    params: &ListParams,
    page: Option<PageRequest>,
) -> Result<ListResult, MockError> {
    let (children, path) = match params.current_folder_id.as_deref() {
        None => (tree.roots().map(Child::Folder).collect::<Vec<_>>(), Vec::new()),
        Some(id) => {
            let folder = tree
                .folder(id)
                .ok_or_else(|| MockError::FolderNotFound { id: id.to_string() })?;
            let children: Vec<Child<'_>> = tree
                .child_folders(folder)
                .map(Child::Folder)
                .chain(tree.child_resources(folder).map(Child::Resource))
                .collect();
            let path = tree
                .ancestry(folder)
                .into_iter()
                .map(folder_entry)
                .collect();
            (children, path)
        }
    };

    let total = children.len();
    let matches = match (params.q.as_deref(), config.search_capability) {
        (Some(q), true) if !q.is_empty() => {
            let needle = q.to_lowercase();
            children
                .into_iter()
                .filter(|child| child.matches(&needle))
                .collect()
        }
        (Some(q), false) => {
            debug!(q = %q, "Search disabled, ignoring query");
            children
        }
        _ => children,
    };

    let count = match config.count_mode {
        CountMode::BeforeFilter => total,
        CountMode::AfterFilter => matches.len(),
    };

    let window = match page {
        Some(page) => page.window(matches),
        None => matches,
    };

    let results = window
        .into_iter()
        .map(|child| child.into_item(secrets))
        .collect();

    Ok(ListResult {
        count,
        results,
        path,
    })
}

/// The caller-facing descriptor of a fixture resource.
///
/// When a secret is stored, the description ends with its masked echo.
pub fn resource_entry(resource: &ResourceNode, secrets: &CatalogSecrets) -> ResourceEntry {
    let description = match secrets.masked_secret_field() {
        Some(mask) if resource.description.is_empty() => mask.to_string(),
        Some(mask) => format!("{}\n\n{}", resource.description, mask),
        None => resource.description.clone(),
    };

    ResourceEntry {
        id: resource.id.clone(),
        title: resource.title.clone(),
        description: (!description.is_empty()).then_some(description),
        format: resource.format.clone(),
        mime_type: resource.mime_type.clone(),
        origin: resource.origin.clone(),
        size: resource.size,
        kind: ItemKind::Resource,
    }
}

fn folder_entry(folder: &FolderNode) -> FolderEntry {
    FolderEntry::new(folder.id.clone(), folder.title.clone())
}

/// A child borrowed from the tree, converted to an owned item last.
enum Child<'a> {
    Folder(&'a FolderNode),
    Resource(&'a ResourceNode),
}

impl Child<'_> {
    /// Case-insensitive match on the title, and on the stored description
    /// for resources. `needle` is already lowercase.
    fn matches(&self, needle: &str) -> bool {
        match self {
            Self::Folder(folder) => folder.title.to_lowercase().contains(needle),
            Self::Resource(resource) => {
                resource.title.to_lowercase().contains(needle)
                    || resource.description.to_lowercase().contains(needle)
            }
        }
    }

    fn into_item(self, secrets: &CatalogSecrets) -> CatalogItem {
        match self {
            Self::Folder(folder) => CatalogItem::Folder(folder_entry(folder)),
            Self::Resource(resource) => CatalogItem::Resource(resource_entry(resource, secrets)),
        }
    }
}
