//! CLI command definitions.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Storybook - turn weekly journal entries into a pediatric storybook paragraph
#[derive(Parser, Debug)]
#[command(name = "storybook")]
#[command(about = "Turn weekly journal entries into a pediatric storybook paragraph", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve the story endpoint
    Serve(ServeArgs),

    /// Generate a story from journal text through a running endpoint
    Generate(GenerateArgs),
}

/// Arguments for `storybook serve`
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Configuration file (defaults to ./storybook.toml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Interface to bind, overriding configuration
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind, overriding configuration
    #[arg(long)]
    pub port: Option<u16>,
}

/// Arguments for `storybook generate`
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Journal file, one per week; repeat for more weeks. Reads stdin when omitted
    #[arg(long = "file", short = 'f')]
    pub files: Vec<PathBuf>,

    /// Base URL of the story endpoint
    #[arg(long, default_value = "http://127.0.0.1:3000")]
    pub endpoint: String,
}
