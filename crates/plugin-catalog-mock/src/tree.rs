//! Immutable folder/resource tree backing the simulated remote catalog.
//!
//! Nodes live in flat vectors and refer to each other by index. Every walk
//! (ancestry, resource search) is iterative, so fixture depth never
//! translates into stack depth.

use std::collections::{HashMap, HashSet};

use crate::error::MockError;

/// A folder of the catalog.
#[derive(Debug, Clone)]
pub struct FolderNode {
    /// Folder identifier.
    pub id: String,
    /// Folder title.
    pub title: String,
    parent: Option<usize>,
    folders: Vec<usize>,
    resources: Vec<usize>,
}

impl FolderNode {
    /// Whether the folder sits at the catalog root.
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// A resource of the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceNode {
    /// Resource identifier.
    pub id: String,
    /// Resource title.
    pub title: String,
    /// Description as stored in the fixture.
    pub description: String,
    /// File format.
    pub format: String,
    /// MIME type.
    pub mime_type: Option<String>,
    /// URL on the remote catalog.
    pub origin: Option<String>,
    /// Size in bytes.
    pub size: Option<u64>,
}

impl ResourceNode {
    /// A resource with only the mandatory fields set.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        format: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            format: format.into(),
            mime_type: None,
            origin: None,
            size: None,
        }
    }

    /// Set the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the MIME type.
    pub fn mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    /// Set the origin URL.
    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    /// Set the size in bytes.
    pub fn size(mut self, size: u64) -> Self {
        self.size = Some(size);
        self
    }
}

/// The whole catalog: a forest of folders holding resources.
#[derive(Debug, Clone)]
pub struct CatalogTree {
    folders: Vec<FolderNode>,
    resources: Vec<ResourceNode>,
    roots: Vec<usize>,
    folder_index: HashMap<String, usize>,
}

impl CatalogTree {
    /// Start building a tree.
    pub fn builder() -> CatalogTreeBuilder {
        CatalogTreeBuilder::default()
    }

    /// Look up a folder by id.
    pub fn folder(&self, id: &str) -> Option<&FolderNode> {
        self.folder_index.get(id).map(|&idx| &self.folders[idx])
    }

    /// Root folders in declaration order.
    pub fn roots(&self) -> impl Iterator<Item = &FolderNode> {
        self.roots.iter().map(|&idx| &self.folders[idx])
    }

    /// Direct subfolders of `folder`, in declaration order.
    pub fn child_folders<'a>(
        &'a self,
        folder: &'a FolderNode,
    ) -> impl Iterator<Item = &'a FolderNode> + 'a {
        folder.folders.iter().map(|&idx| &self.folders[idx])
    }

    /// Resources held by `folder`, in declaration order.
    pub fn child_resources<'a>(
        &'a self,
        folder: &'a FolderNode,
    ) -> impl Iterator<Item = &'a ResourceNode> + 'a {
        folder.resources.iter().map(|&idx| &self.resources[idx])
    }

    /// Folders from the root ancestor down to and including `folder`.
    pub fn ancestry<'a>(&'a self, folder: &'a FolderNode) -> Vec<&'a FolderNode> {
        let mut path = vec![folder];
        let mut parent = folder.parent;
        while let Some(idx) = parent {
            let node = &self.folders[idx];
            path.push(node);
            parent = node.parent;
        }
        path.reverse();
        path
    }

    /// Find a resource anywhere in the tree.
    ///
    /// Depth-first over the roots in order; a folder's own resources are
    /// checked before its subfolders.
    pub fn find_resource(&self, id: &str) -> Option<&ResourceNode> {
        let mut stack: Vec<usize> = self.roots.iter().rev().copied().collect();
        while let Some(idx) = stack.pop() {
            let folder = &self.folders[idx];
            if let Some(resource) = self.child_resources(folder).find(|r| r.id == id) {
                return Some(resource);
            }
            stack.extend(folder.folders.iter().rev().copied());
        }
        None
    }

    /// Number of folders.
    pub fn folder_count(&self) -> usize {
        self.folders.len()
    }

    /// Number of resources.
    pub fn resource_count(&self) -> usize {
        self.resources.len()
    }
}

/// Collects folders and resources, then checks them into a [`CatalogTree`].
///
/// Folders may be declared in any order; parents are resolved at build time.
#[derive(Debug, Default)]
pub struct CatalogTreeBuilder {
    folders: Vec<(String, String, Option<String>)>,
    resources: Vec<(String, ResourceNode)>,
}

impl CatalogTreeBuilder {
    /// Declare a root folder.
    pub fn root(self, id: impl Into<String>, title: impl Into<String>) -> Self {
        self.push_folder(id.into(), title.into(), None)
    }

    /// Declare a folder under `parent`.
    pub fn folder(
        self,
        parent: impl Into<String>,
        id: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        self.push_folder(id.into(), title.into(), Some(parent.into()))
    }

    /// Declare a resource inside `folder`.
    pub fn resource(mut self, folder: impl Into<String>, resource: ResourceNode) -> Self {
        self.resources.push((folder.into(), resource));
        self
    }

    fn push_folder(mut self, id: String, title: String, parent: Option<String>) -> Self {
        self.folders.push((id, title, parent));
        self
    }

    /// Resolve references and check the tree shape.
    ///
    /// Fails on duplicate ids, unknown parents and parent cycles.
    pub fn build(self) -> Result<CatalogTree, MockError> {
        let mut folder_index = HashMap::with_capacity(self.folders.len());
        for (idx, (id, _, _)) in self.folders.iter().enumerate() {
            if folder_index.insert(id.clone(), idx).is_some() {
                return Err(MockError::DuplicateId {
                    kind: "folder",
                    id: id.clone(),
                });
            }
        }

        let mut folders = Vec::with_capacity(self.folders.len());
        let mut roots = Vec::new();
        for (idx, (id, title, parent)) in self.folders.into_iter().enumerate() {
            let parent = match parent {
                None => {
                    roots.push(idx);
                    None
                }
                Some(parent_id) => match folder_index.get(&parent_id) {
                    Some(&p) => Some(p),
                    None => {
                        return Err(MockError::UnknownParent {
                            id,
                            parent: parent_id,
                        });
                    }
                },
            };
            folders.push(FolderNode {
                id,
                title,
                parent,
                folders: Vec::new(),
                resources: Vec::new(),
            });
        }

        for idx in 0..folders.len() {
            if let Some(parent) = folders[idx].parent {
                folders[parent].folders.push(idx);
            }
        }
        check_acyclic(&folders)?;

        let mut seen = HashSet::with_capacity(self.resources.len());
        let mut resources = Vec::with_capacity(self.resources.len());
        for (folder_id, resource) in self.resources {
            if !seen.insert(resource.id.clone()) {
                return Err(MockError::DuplicateId {
                    kind: "resource",
                    id: resource.id,
                });
            }
            let Some(&folder) = folder_index.get(&folder_id) else {
                return Err(MockError::UnknownParent {
                    id: resource.id,
                    parent: folder_id,
                });
            };
            folders[folder].resources.push(resources.len());
            resources.push(resource);
        }

        Ok(CatalogTree {
            folders,
            resources,
            roots,
            folder_index,
        })
    }
}

/// A folder whose parent chain is longer than the folder count loops.
fn check_acyclic(folders: &[FolderNode]) -> Result<(), MockError> {
    for folder in folders {
        let mut steps = 0;
        let mut parent = folder.parent;
        while let Some(idx) = parent {
            steps += 1;
            if steps > folders.len() {
                return Err(MockError::Cycle {
                    id: folder.id.clone(),
                });
            }
            parent = folders[idx].parent;
        }
    }
    Ok(())
}
