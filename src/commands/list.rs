//! Folder listing command.

use clap::Args;

use catalog_core::AppError;
use catalog_plugin::{Capability, ListParams};

use crate::host::CatalogHost;
use crate::output::{self, ItemRow, OutputFormat};

/// Arguments for the list command
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Folder to list (omit for root folders)
    #[arg(long)]
    pub folder: Option<String>,

    /// Text query, honoured when search is enabled
    #[arg(short, long)]
    pub query: Option<String>,

    /// Page number (1-based), honoured when pagination is enabled
    #[arg(short, long, allow_negative_numbers = true)]
    pub page: Option<i64>,

    /// Page size, honoured when pagination is enabled
    #[arg(short, long, allow_negative_numbers = true)]
    pub size: Option<i64>,
}

/// Execute the list command
pub async fn execute(
    args: &ListArgs,
    host: &CatalogHost,
    format: OutputFormat,
) -> Result<(), AppError> {
    let plugin = host.plugin(Capability::Import).await?;

    if args.query.is_some() && !plugin.metadata().supports(Capability::Search) {
        tracing::warn!("Search is not enabled for this catalog; the query is ignored");
    }
    if (args.page.is_some() || args.size.is_some())
        && !plugin.metadata().supports(Capability::Pagination)
    {
        tracing::warn!("Pagination is not enabled for this catalog; page options are ignored");
    }

    let result = plugin
        .list(ListParams {
            current_folder_id: args.folder.clone(),
            q: args.query.clone(),
            page: args.page,
            size: args.size,
        })
        .await?;

    match format {
        OutputFormat::Json => output::print_json(&result),
        OutputFormat::Table => {
            let breadcrumbs: Vec<&str> = result.path.iter().map(|p| p.title.as_str()).collect();
            output::print_kv("Path", &format!("/{}", breadcrumbs.join(" / ")));
            output::print_kv("Count", &result.count.to_string());
            let rows: Vec<ItemRow> = result.results.iter().map(ItemRow::from).collect();
            output::print_list(&rows, format);
        }
    }

    Ok(())
}
