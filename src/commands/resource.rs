//! Resource lookup and download commands.

use std::path::PathBuf;

use clap::Args;
use serde_json::json;

use catalog_core::AppError;
use catalog_plugin::{Capability, DownloadRequest, ResourceEntry};

use crate::host::CatalogHost;
use crate::output::{self, OutputFormat};

/// Arguments for the get command
#[derive(Debug, Args)]
pub struct GetArgs {
    /// Resource ID
    pub resource_id: String,
}

/// Arguments for the download command
#[derive(Debug, Args)]
pub struct DownloadArgs {
    /// Resource ID
    pub resource_id: String,

    /// Number of rows to keep (5 to 50)
    #[arg(short = 'n', long)]
    pub rows: Option<i64>,

    /// Existing directory receiving the file
    #[arg(short, long, default_value = ".")]
    pub dir: PathBuf,
}

/// Execute the get command
pub async fn get(args: &GetArgs, host: &CatalogHost, format: OutputFormat) -> Result<(), AppError> {
    let plugin = host.plugin(Capability::Import).await?;
    let resource = plugin.get_resource(&args.resource_id).await?;

    match format {
        OutputFormat::Json => output::print_json(&resource),
        OutputFormat::Table => print_resource(&resource),
    }
    Ok(())
}

/// Execute the download command
pub async fn download(
    args: &DownloadArgs,
    host: &CatalogHost,
    format: OutputFormat,
) -> Result<(), AppError> {
    let plugin = host.plugin(Capability::Import).await?;

    let import_config = match args.rows {
        Some(rows) => {
            host.plugin(Capability::ImportConfig).await?;
            json!({ "nbRows": rows })
        }
        None => serde_json::Value::Null,
    };

    let downloaded = plugin
        .download_resource(DownloadRequest {
            resource_id: args.resource_id.clone(),
            import_config,
            tmp_dir: args.dir.clone(),
        })
        .await?;

    match format {
        OutputFormat::Json => output::print_json(&downloaded),
        OutputFormat::Table => {
            print_resource(&downloaded.resource);
            output::print_success(&format!("Written to {}", downloaded.file_path.display()));
        }
    }
    Ok(())
}

fn print_resource(resource: &ResourceEntry) {
    output::print_kv("ID", &resource.id);
    output::print_kv("Title", &resource.title);
    output::print_kv("Format", &resource.format);
    if let Some(mime_type) = &resource.mime_type {
        output::print_kv("MIME type", mime_type);
    }
    if let Some(size) = resource.size {
        output::print_kv("Size", &size.to_string());
    }
    if let Some(origin) = &resource.origin {
        output::print_kv("Origin", origin);
    }
    if let Some(description) = &resource.description {
        println!();
        println!("{}", description);
    }
}
