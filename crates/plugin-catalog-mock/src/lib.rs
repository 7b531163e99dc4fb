//! # Plugin Catalog Mock
//!
//! A catalog plugin that simulates a remote data catalog from an in-memory
//! folder tree. Listing, lookup, download, publication and deletion all
//! behave like a real catalog, with a configurable artificial latency, so
//! hosts can exercise the plugin contract without a live service.
//!
//! Downloads write a bundled sample CSV truncated to the requested number
//! of rows. Publications fabricate remote ids and URLs under a configurable
//! base URL.

pub mod config;
pub mod download;
pub mod error;
pub mod fixture;
pub mod listing;
pub mod metadata;
pub mod plugin;
pub mod publication;
pub mod tree;

pub use config::{CountMode, ImportConfig, MockConfig, RowCounting};
pub use error::MockError;
pub use metadata::PLUGIN_ID;
pub use plugin::MockCatalogPlugin;
pub use tree::{CatalogTree, CatalogTreeBuilder, ResourceNode};
