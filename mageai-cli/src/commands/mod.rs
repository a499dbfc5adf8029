//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod block;
mod pipeline;

pub use block::BlockCommands;
pub use pipeline::PipelineCommands;

use anyhow::Result;
use clap::Subcommand;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Pipeline management
    Pipeline {
        #[command(subcommand)]
        command: PipelineCommands,
    },
    /// Block management
    Block {
        #[command(subcommand)]
        command: BlockCommands,
    },
}

/// Route the command to the appropriate handler module.
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Pipeline { command } => pipeline::handle_pipeline_command(command, config).await,
        Commands::Block { command } => block::handle_block_command(command, config).await,
    }
}
