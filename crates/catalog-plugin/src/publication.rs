//! Publication requests and their outcome.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use catalog_core::AppError;

/// A local dataset being published.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    /// Dataset identifier.
    pub id: String,
    /// URL-safe dataset name.
    pub slug: String,
    /// Dataset title.
    pub title: String,
}

/// A folder or resource on the remote catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteRef {
    /// Remote identifier.
    pub id: String,
    /// Remote title.
    pub title: String,
    /// Remote URL.
    pub url: String,
}

/// The kinds of publication a catalog can perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PublicationAction {
    /// Create a new folder at the catalog root.
    CreateFolderInRoot,
    /// Create a new folder inside an existing one.
    CreateFolder,
    /// Create a new resource inside an existing folder.
    CreateResource,
    /// Overwrite an existing folder.
    ReplaceFolder,
    /// Overwrite an existing resource.
    ReplaceResource,
}

impl PublicationAction {
    /// Every supported action, in menu order.
    pub const ALL: [PublicationAction; 5] = [
        Self::CreateFolderInRoot,
        Self::CreateFolder,
        Self::CreateResource,
        Self::ReplaceFolder,
        Self::ReplaceResource,
    ];

    /// Wire name of the action.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreateFolderInRoot => "createFolderInRoot",
            Self::CreateFolder => "createFolder",
            Self::CreateResource => "createResource",
            Self::ReplaceFolder => "replaceFolder",
            Self::ReplaceResource => "replaceResource",
        }
    }
}

impl fmt::Display for PublicationAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PublicationAction {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| AppError::invalid_argument(format!("Unknown action: {s}")))
    }
}

/// A publication request and, once performed, its result.
///
/// `action` stays a plain string on the wire so an unknown action reaches
/// the plugin and is rejected there with a proper error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Publication {
    /// Requested action.
    pub action: String,
    /// Target or created remote folder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote_folder: Option<RemoteRef>,
    /// Target or created remote resource.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote_resource: Option<RemoteRef>,
}

impl Publication {
    /// A request for `action` with no remote targets yet.
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            remote_folder: None,
            remote_resource: None,
        }
    }

    /// Parse the requested action.
    pub fn parsed_action(&self) -> Result<PublicationAction, AppError> {
        self.action.parse()
    }

    /// Attach an existing remote folder.
    pub fn with_remote_folder(mut self, folder: RemoteRef) -> Self {
        self.remote_folder = Some(folder);
        self
    }

    /// Attach an existing remote resource.
    pub fn with_remote_resource(mut self, resource: RemoteRef) -> Self {
        self.remote_resource = Some(resource);
        self
    }
}
