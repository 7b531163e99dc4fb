//! Core type definitions used across the catalog workspace.

pub mod pagination;

pub use pagination::{DEFAULT_PAGE_SIZE, PageRequest};
