//! CLI command definitions and dispatch.

pub mod info;
pub mod list;
pub mod publish;
pub mod resource;

use clap::{Parser, Subcommand};

use catalog_core::AppError;
use catalog_core::config::AppConfig;

use crate::host::CatalogHost;
use crate::output::OutputFormat;

/// Catalog Mock: exercise the catalog plugin contract against a simulated catalog
#[derive(Debug, Parser)]
#[command(name = "catalog-mock", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file (extension optional)
    #[arg(short, long, default_value = "config/default")]
    pub config: String,

    /// Environment overlay loaded from `config/<env>`
    #[arg(short, long, default_value = "development")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show plugin metadata and schemas
    Info(info::InfoArgs),
    /// List a catalog folder
    List(list::ListArgs),
    /// Show one resource
    Get(resource::GetArgs),
    /// Download a resource into a directory
    Download(resource::DownloadArgs),
    /// Publish a dataset
    Publish(publish::PublishArgs),
    /// Delete a publication
    Delete(publish::DeleteArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self, config: &AppConfig) -> Result<(), AppError> {
        let host = CatalogHost::bootstrap(config).await?;

        match &self.command {
            Commands::Info(args) => info::execute(args, &host, self.format).await,
            Commands::List(args) => list::execute(args, &host, self.format).await,
            Commands::Get(args) => resource::get(args, &host, self.format).await,
            Commands::Download(args) => resource::download(args, &host, self.format).await,
            Commands::Publish(args) => publish::publish(args, &host, self.format).await,
            Commands::Delete(args) => publish::delete(args, &host).await,
        }
    }
}
