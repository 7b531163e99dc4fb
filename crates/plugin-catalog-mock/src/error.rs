//! Unified error type for the mock catalog plugin.
//!
//! Fixture, validation, publication and filesystem failures are consolidated
//! into a single `MockError` enum that maps cleanly to
//! `catalog_core::AppError`.

use std::path::PathBuf;

use catalog_core::{AppError, ErrorKind};
use catalog_plugin::PublicationAction;
use thiserror::Error;

/// Unified error type for all mock catalog operations.
#[derive(Debug, Error)]
pub enum MockError {
    // --- Lookup errors ---
    /// Folder id does not exist in the fixture.
    #[error("Folder with ID {id} not found")]
    FolderNotFound {
        /// The requested folder id.
        id: String,
    },

    /// Resource id does not exist in the fixture.
    #[error("Resource with ID {id} not found")]
    ResourceNotFound {
        /// The requested resource id.
        id: String,
    },

    // --- Validation errors ---
    /// Catalog configuration failed validation.
    #[error("Invalid catalog configuration: {0}")]
    InvalidConfig(String),

    /// Import configuration failed validation.
    #[error("Invalid import configuration: {0}")]
    InvalidImportConfig(String),

    /// A replace action was requested without the item to replace.
    #[error("Action '{action}' requires an existing {target}")]
    MissingRemoteTarget {
        /// The requested action.
        action: PublicationAction,
        /// `remoteFolder` or `remoteResource`.
        target: &'static str,
    },

    // --- Fixture errors ---
    /// Two folders or two resources share an id.
    #[error("Duplicate {kind} id in fixture: {id}")]
    DuplicateId {
        /// `folder` or `resource`.
        kind: &'static str,
        /// The repeated id.
        id: String,
    },

    /// A folder or resource names a parent that was never declared.
    #[error("Unknown parent folder '{parent}' for '{id}'")]
    UnknownParent {
        /// The child id.
        id: String,
        /// The missing parent id.
        parent: String,
    },

    /// Following parent links from a folder leads back to it.
    #[error("Folder '{id}' is its own ancestor")]
    Cycle {
        /// A folder on the cycle.
        id: String,
    },

    // --- Filesystem errors ---
    /// Download directory does not exist or is not a directory.
    #[error("Target directory does not exist: {path}")]
    TargetDirMissing {
        /// The caller-supplied directory.
        path: PathBuf,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<MockError> for AppError {
    fn from(err: MockError) -> Self {
        match err {
            MockError::FolderNotFound { .. } | MockError::ResourceNotFound { .. } => {
                AppError::not_found(err.to_string())
            }
            MockError::InvalidConfig(_)
            | MockError::InvalidImportConfig(_)
            | MockError::MissingRemoteTarget { .. } => AppError::invalid_argument(err.to_string()),
            MockError::DuplicateId { .. }
            | MockError::UnknownParent { .. }
            | MockError::Cycle { .. } => AppError::internal(err.to_string()),
            MockError::TargetDirMissing { .. } => AppError::storage(err.to_string()),
            MockError::Io(source) => {
                AppError::with_source(ErrorKind::Storage, "Failed to write resource file", source)
            }
        }
    }
}
