//! Storybook CLI binary.
//!
//! - `serve` runs the story endpoint
//! - `generate` turns journal text into a story through a running endpoint

use clap::Parser;
use storybook::{ObservabilityConfig, init_observability_with_config, shutdown_observability};

mod cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use cli::{Cli, Commands, run_generate, run_serve};

    // Provider credentials may live in .env
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    init_observability_with_config(ObservabilityConfig::default().with_log_level(log_level))
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    let result = match cli.command {
        Commands::Serve(args) => run_serve(args).await,
        Commands::Generate(args) => run_generate(args).await,
    };

    shutdown_observability();
    result
}
