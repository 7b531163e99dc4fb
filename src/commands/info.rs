//! Plugin metadata command.

use clap::Args;
use serde_json::json;

use catalog_core::AppError;
use catalog_plugin::Capability;

use crate::host::CatalogHost;
use crate::output::{self, OutputFormat};

/// Arguments for the info command
#[derive(Debug, Args)]
pub struct InfoArgs {
    /// Also print the configuration schemas
    #[arg(short, long)]
    pub schemas: bool,

    /// Language of the localized strings
    #[arg(short, long, default_value = "en")]
    pub lang: String,
}

/// Execute the info command
pub async fn execute(
    args: &InfoArgs,
    host: &CatalogHost,
    format: OutputFormat,
) -> Result<(), AppError> {
    let plugin = host.plugin(Capability::Import).await?;
    let metadata = plugin.metadata();
    tracing::debug!(plugins = host.registry().count().await, "Describing plugin");

    match format {
        OutputFormat::Json => {
            let mut value = json!({ "metadata": metadata });
            if args.schemas {
                value["configSchema"] = plugin.config_schema();
                value["importConfigSchema"] = plugin.import_config_schema().unwrap_or_default();
            }
            output::print_json(&value);
        }
        OutputFormat::Table => {
            output::print_kv("ID", &metadata.id);
            output::print_kv("Title", &metadata.title);
            output::print_kv("Description", &metadata.description);
            output::print_kv("Thumbnail", &metadata.thumbnail_path);
            let capabilities: Vec<&str> =
                metadata.capabilities.iter().map(Capability::as_str).collect();
            output::print_kv("Capabilities", &capabilities.join(", "));

            if let Some(text) = metadata.i18n.get(&args.lang) {
                output::print_kv("Catalog", &text.description);
                for (action, label) in &text.action_labels {
                    output::print_kv(&format!("Action {action}"), label);
                }
            } else {
                tracing::warn!(lang = %args.lang, "No localized strings for language");
            }

            if args.schemas {
                println!();
                output::print_json(&plugin.config_schema());
                if let Some(schema) = plugin.import_config_schema() {
                    output::print_json(&schema);
                }
            }
        }
    }

    Ok(())
}
