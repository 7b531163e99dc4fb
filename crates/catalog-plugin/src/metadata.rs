//! Plugin metadata and declared capabilities.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A named optional feature a plugin may declare.
///
/// The host only invokes operations whose capability the plugin declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Capability {
    /// Resources can be listed and downloaded.
    Import,
    /// Downloads accept an import configuration.
    ImportConfig,
    /// Listing accepts a text query.
    Search,
    /// Listing accepts page/size parameters.
    Pagination,
    /// Datasets can be published to the catalog.
    PublishDataset,
    /// Publications can be deleted from the catalog.
    DeletePublication,
}

impl Capability {
    /// Wire name of the capability.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Import => "import",
            Self::ImportConfig => "importConfig",
            Self::Search => "search",
            Self::Pagination => "pagination",
            Self::PublishDataset => "publishDataset",
            Self::DeletePublication => "deletePublication",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Localized UI strings shown by the host for one language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleText {
    /// Catalog description.
    pub description: String,
    /// Publication action → menu label.
    #[serde(default)]
    pub action_labels: BTreeMap<String, String>,
    /// Publication action → confirmation button text.
    #[serde(default)]
    pub action_buttons: BTreeMap<String, String>,
    /// Publication action → wizard step title.
    #[serde(default)]
    pub step_titles: BTreeMap<String, String>,
}

/// Static description of a plugin.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginMetadata {
    /// Unique plugin identifier.
    pub id: String,
    /// Human-readable plugin title.
    pub title: String,
    /// Plugin description.
    pub description: String,
    /// Path of the thumbnail image, relative to the plugin.
    pub thumbnail_path: String,
    /// Capabilities the plugin implements.
    pub capabilities: Vec<Capability>,
    /// Language code → localized strings.
    #[serde(default)]
    pub i18n: BTreeMap<String, LocaleText>,
}

impl PluginMetadata {
    /// Whether the plugin declares `capability`.
    pub fn supports(&self, capability: Capability) -> bool {
        self.capabilities.contains(&capability)
    }
}
