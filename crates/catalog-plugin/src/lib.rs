//! # catalog-plugin
//!
//! Contract between a data catalog host and its catalog plugins. Provides:
//!
//! - The [`CatalogPlugin`] trait with capability-gated optional operations
//! - Wire types for listings, downloads and publications
//! - A [`PluginRegistry`] that checks declared capabilities before dispatch

pub mod metadata;
pub mod plugin;
pub mod publication;
pub mod registry;
pub mod types;

pub use metadata::{Capability, LocaleText, PluginMetadata};
pub use plugin::CatalogPlugin;
pub use publication::{Dataset, Publication, PublicationAction, RemoteRef};
pub use registry::PluginRegistry;
pub use types::{
    CatalogItem, DeleteRequest, DownloadRequest, DownloadedResource, FolderEntry, ItemKind,
    ListParams, ListResult, PrepareContext, ResourceEntry,
};
