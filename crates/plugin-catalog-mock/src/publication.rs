//! Publication simulator: fabricates remote identifiers and URLs.

use catalog_plugin::{Dataset, Publication, PublicationAction, RemoteRef};

use crate::error::MockError;

/// Apply `action` to `publication` as the remote catalog would.
///
/// `base_url` has no trailing slash.
pub fn simulate(
    dataset: &Dataset,
    mut publication: Publication,
    action: PublicationAction,
    base_url: &str,
) -> Result<Publication, MockError> {
    match action {
        PublicationAction::CreateFolderInRoot | PublicationAction::CreateFolder => {
            publication.remote_folder = Some(RemoteRef {
                id: format!("folder-{}", dataset.id),
                title: dataset.title.clone(),
                url: format!("{base_url}/folders/folder-{}", dataset.slug),
            });
        }
        PublicationAction::CreateResource => {
            publication.remote_resource = Some(RemoteRef {
                id: format!("resource-{}", dataset.id),
                title: dataset.title.clone(),
                url: format!("{base_url}/resources/resource-{}", dataset.slug),
            });
        }
        PublicationAction::ReplaceFolder => {
            let existing = publication
                .remote_folder
                .take()
                .ok_or(MockError::MissingRemoteTarget {
                    action,
                    target: "remoteFolder",
                })?;
            publication.remote_folder = Some(RemoteRef {
                id: existing.id,
                title: dataset.title.clone(),
                url: format!("{base_url}/folders/{}", dataset.slug),
            });
        }
        PublicationAction::ReplaceResource => {
            let existing = publication
                .remote_resource
                .take()
                .ok_or(MockError::MissingRemoteTarget {
                    action,
                    target: "remoteResource",
                })?;
            publication.remote_resource = Some(RemoteRef {
                id: existing.id,
                title: dataset.title.clone(),
                url: format!("{base_url}/resources/{}", dataset.slug),
            });
        }
    }
    Ok(publication)
}
