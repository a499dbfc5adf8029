//! Mage AI CLI
//!
//! Command-line interface for managing pipelines and blocks on a Mage AI
//! server.

mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;

#[derive(Parser)]
#[command(name = "mageai")]
#[command(about = "Manage Mage AI pipelines and blocks", long_about = None)]
struct Cli {
    /// Mage AI server host
    #[arg(long, env = "MAGEAI_HOST", default_value = "http://localhost:6789")]
    host: String,

    /// API key sent with every call
    #[arg(long, env = "MAGEAI_API_KEY", hide_env_values = true)]
    api_key: String,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config {
        host: cli.host,
        api_key: cli.api_key,
    };

    handle_command(cli.command, &config).await
}
