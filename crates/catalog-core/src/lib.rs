//! # catalog-core
//!
//! Core crate for the catalog plugin workspace. Contains the unified error
//! system, configuration schemas, pagination types and the sensitive-value
//! channel used for plugin secrets.
//!
//! This crate has **no** internal dependencies on other catalog crates.

pub mod config;
pub mod error;
pub mod result;
pub mod secret;
pub mod types;

pub use error::{AppError, ErrorKind};
pub use result::AppResult;
pub use secret::CatalogSecrets;
