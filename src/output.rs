//! Table and JSON output formatting for CLI commands.

use serde::Serialize;
use tabled::{Table, Tabled};

use catalog_plugin::{CatalogItem, RemoteRef};

/// Output format selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON output
    Json,
}

/// One listing entry as a table row
#[derive(Debug, Serialize, Tabled)]
pub struct ItemRow {
    /// Folder or resource
    #[tabled(rename = "type")]
    pub kind: String,
    /// Identifier
    pub id: String,
    /// Title
    pub title: String,
    /// File format
    pub format: String,
    /// Size in bytes
    pub size: String,
}

impl From<&CatalogItem> for ItemRow {
    fn from(item: &CatalogItem) -> Self {
        let (kind, format, size) = match item {
            CatalogItem::Folder(_) => ("folder", String::new(), String::new()),
            CatalogItem::Resource(resource) => (
                "resource",
                resource.format.clone(),
                resource.size.map(|s| s.to_string()).unwrap_or_default(),
            ),
        };
        Self {
            kind: kind.to_string(),
            id: item.id().to_string(),
            title: item.title().to_string(),
            format,
            size,
        }
    }
}

/// A remote folder or resource as a table row
#[derive(Debug, Serialize, Tabled)]
pub struct RemoteRow {
    /// `folder` or `resource`
    pub target: String,
    /// Remote identifier
    pub id: String,
    /// Remote title
    pub title: String,
    /// Remote URL
    pub url: String,
}

impl RemoteRow {
    /// Build a row for `remote`.
    pub fn new(target: &str, remote: &RemoteRef) -> Self {
        Self {
            target: target.to_string(),
            id: remote.id.clone(),
            title: remote.title.clone(),
            url: remote.url.clone(),
        }
    }
}

/// Print a list of items in the selected format
pub fn print_list<T: Serialize + Tabled>(items: &[T], format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            if items.is_empty() {
                println!("No results found.");
            } else {
                let table = Table::new(items).to_string();
                println!("{}", table);
            }
        }
        OutputFormat::Json => print_json(&items),
    }
}

/// Print any serializable value as pretty JSON
pub fn print_json<T: Serialize + ?Sized>(value: &T) {
    let json = serde_json::to_string_pretty(value).unwrap_or_else(|_| "null".to_string());
    println!("{}", json);
}

/// Print a success message
pub fn print_success(msg: &str) {
    println!("✓ {}", msg);
}

/// Print an error message
pub fn print_error(msg: &str) {
    eprintln!("✗ {}", msg);
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:<24} {}", format!("{}:", key), value);
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_plugin::{FolderEntry, ItemKind, ResourceEntry};

    #[test]
    fn test_item_rows() {
        let folder = ItemRow::from(&CatalogItem::Folder(FolderEntry::new("f", "F")));
        assert_eq!(folder.kind, "folder");
        assert_eq!(folder.title, "F");
        assert!(folder.format.is_empty());

        let resource = ItemRow::from(&CatalogItem::Resource(ResourceEntry {
            id: "r".to_string(),
            title: "R".to_string(),
            description: None,
            format: "csv".to_string(),
            mime_type: None,
            origin: None,
            size: Some(42),
            kind: ItemKind::Resource,
        }));
        assert_eq!(resource.kind, "resource");
        assert_eq!(resource.size, "42");
        assert_eq!((resource.id.as_str(), resource.title.as_str()), ("r", "R"));
    }
}
