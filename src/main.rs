//! Catalog Mock CLI: a command-line host for the mock catalog plugin.
//!
//! Loads configuration, initialises logging, registers the plugin and runs
//! one plugin operation per invocation.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use catalog_core::config::AppConfig;

mod commands;
mod host;
mod output;

use commands::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match AppConfig::load(&cli.config, &cli.env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = cli.execute(&config).await {
        tracing::error!(error = %e, "Command failed");
        output::print_error(&e.to_string());
        std::process::exit(1);
    }
}

/// Initialize tracing/logging. Logs go to stderr so JSON output stays clean.
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    if config.logging.is_json() {
        fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();
    } else {
        fmt()
            .pretty()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();
    }
}
