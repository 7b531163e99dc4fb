//! Publication and deletion commands.

use clap::Args;

use catalog_core::{AppError, AppResult};
use catalog_plugin::{
    Capability, Dataset, DeleteRequest, Publication, PublicationAction, RemoteRef,
};

use crate::host::CatalogHost;
use crate::output::{self, OutputFormat, RemoteRow};

/// Arguments for the publish command
#[derive(Debug, Args)]
pub struct PublishArgs {
    /// Publication action (createFolderInRoot, createFolder, createResource,
    /// replaceFolder, replaceResource)
    #[arg(short, long)]
    pub action: String,

    /// Dataset ID
    #[arg(long)]
    pub dataset_id: String,

    /// Dataset slug
    #[arg(long)]
    pub slug: String,

    /// Dataset title
    #[arg(long)]
    pub title: String,

    /// Existing remote folder ID (parent or folder to replace)
    #[arg(long)]
    pub remote_folder: Option<String>,

    /// Existing remote resource ID (resource to replace)
    #[arg(long)]
    pub remote_resource: Option<String>,
}

/// Arguments for the delete command
#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Remote folder ID
    #[arg(long)]
    pub folder_id: Option<String>,

    /// Remote resource ID
    #[arg(long)]
    pub resource_id: Option<String>,
}

fn existing(id: &str) -> RemoteRef {
    RemoteRef {
        id: id.to_string(),
        title: String::new(),
        url: String::new(),
    }
}

/// Publish through the registered plugin and return what the host keeps.
///
/// After `createResource` the returned `remoteFolder` is only the parent
/// context that was passed in, so it is dropped.
pub async fn publish_dataset(
    host: &CatalogHost,
    dataset: Dataset,
    publication: Publication,
) -> AppResult<Publication> {
    let plugin = host.plugin(Capability::PublishDataset).await?;
    let mut published = plugin.publish_dataset(dataset, publication).await?;

    if published.parsed_action()? == PublicationAction::CreateResource {
        published.remote_folder = None;
    }
    Ok(published)
}

/// Execute the publish command
pub async fn publish(
    args: &PublishArgs,
    host: &CatalogHost,
    format: OutputFormat,
) -> Result<(), AppError> {
    let mut publication = Publication::new(args.action.clone());
    if let Some(id) = &args.remote_folder {
        publication = publication.with_remote_folder(existing(id));
    }
    if let Some(id) = &args.remote_resource {
        publication = publication.with_remote_resource(existing(id));
    }

    let dataset = Dataset {
        id: args.dataset_id.clone(),
        slug: args.slug.clone(),
        title: args.title.clone(),
    };
    let published = publish_dataset(host, dataset, publication).await?;

    match format {
        OutputFormat::Json => output::print_json(&published),
        OutputFormat::Table => {
            let mut rows = Vec::new();
            if let Some(folder) = &published.remote_folder {
                rows.push(RemoteRow::new("folder", folder));
            }
            if let Some(resource) = &published.remote_resource {
                rows.push(RemoteRow::new("resource", resource));
            }
            output::print_list(&rows, format);
            output::print_success(&format!("Dataset published ({})", published.action));
        }
    }
    Ok(())
}

/// Execute the delete command
pub async fn delete(args: &DeleteArgs, host: &CatalogHost) -> Result<(), AppError> {
    let plugin = host.plugin(Capability::DeletePublication).await?;
    plugin
        .delete_dataset(DeleteRequest {
            folder_id: args.folder_id.clone(),
            resource_id: args.resource_id.clone(),
        })
        .await?;
    output::print_success("Publication deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::config::AppConfig;

    fn dataset() -> Dataset {
        Dataset {
            id: "ds-1".to_string(),
            slug: "ventes".to_string(),
            title: "Ventes".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_resource_drops_parent_folder() {
        let host = CatalogHost::bootstrap(&AppConfig::default())
            .await
            .expect("bootstrap");

        let published = publish_dataset(
            &host,
            dataset(),
            Publication::new("createResource").with_remote_folder(existing("parent-7")),
        )
        .await
        .expect("publish");

        assert!(published.remote_folder.is_none());
        assert_eq!(
            published.remote_resource.expect("resource").id,
            "resource-ds-1"
        );
    }

    #[tokio::test]
    async fn test_create_folder_keeps_new_folder() {
        let host = CatalogHost::bootstrap(&AppConfig::default())
            .await
            .expect("bootstrap");

        let published = publish_dataset(
            &host,
            dataset(),
            Publication::new("createFolder").with_remote_folder(existing("parent-7")),
        )
        .await
        .expect("publish");

        assert_eq!(published.remote_folder.expect("folder").id, "folder-ds-1");
    }
}
