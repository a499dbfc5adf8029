//! Block command handlers

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::*;

use mageai_client::Client;
use mageai_core::domain::block::Block;
use mageai_core::graph::BlockGraph;

use crate::config::Config;

/// Block subcommands
#[derive(Subcommand)]
pub enum BlockCommands {
    /// List the blocks of a pipeline with their dependency edges
    List {
        /// Owning pipeline UUID
        pipeline: String,
    },
    /// Get block details
    Get {
        /// Owning pipeline UUID
        pipeline: String,
        /// Block UUID
        uuid: String,
    },
    /// Delete a block
    Delete {
        /// Owning pipeline UUID
        pipeline: String,
        /// Block UUID
        uuid: String,
    },
}

/// Handle block commands
pub async fn handle_block_command(command: BlockCommands, config: &Config) -> Result<()> {
    let client =
        Client::new(&config.client_config()).context("Failed to create Mage AI client")?;

    match command {
        BlockCommands::List { pipeline } => list_blocks(&client, &pipeline).await,
        BlockCommands::Get { pipeline, uuid } => get_block(&client, &pipeline, &uuid).await,
        BlockCommands::Delete { pipeline, uuid } => delete_block(&client, &pipeline, &uuid).await,
    }
}

async fn list_blocks(client: &Client, pipeline_uuid: &str) -> Result<()> {
    let blocks = client.list_blocks(pipeline_uuid).await?;
    if blocks.is_empty() {
        println!("No blocks in pipeline {}", pipeline_uuid.cyan());
        return Ok(());
    }

    let graph = BlockGraph::from_blocks(&blocks);
    for block in &blocks {
        println!(
            "{}  {} ({}, {})",
            block.uuid.cyan(),
            block.name.bold(),
            block.block_type,
            block.status
        );
        let upstream = graph.upstream_of(&block.uuid);
        if !upstream.is_empty() {
            let edges = upstream.into_iter().collect::<Vec<_>>().join(", ");
            println!("    upstream:   {}", edges.dimmed());
        }
        let downstream = graph.downstream_of(&block.uuid);
        if !downstream.is_empty() {
            let edges = downstream.into_iter().collect::<Vec<_>>().join(", ");
            println!("    downstream: {}", edges.dimmed());
        }
    }
    Ok(())
}

async fn get_block(client: &Client, pipeline_uuid: &str, uuid: &str) -> Result<()> {
    let block = client.read_block(pipeline_uuid, uuid).await?;
    print_block(&block);
    Ok(())
}

async fn delete_block(client: &Client, pipeline_uuid: &str, uuid: &str) -> Result<()> {
    client.delete_block(pipeline_uuid, uuid).await?;
    println!("{} {}", "✓ Deleted block".green().bold(), uuid.cyan());
    Ok(())
}

fn print_block(block: &Block) {
    println!("  UUID:     {}", block.uuid.cyan());
    println!("  Name:     {}", block.name.bold());
    println!("  Type:     {}", block.block_type);
    println!("  Status:   {}", block.status);
    if !block.language.is_empty() {
        println!("  Language: {}", block.language);
    }
    if !block.upstream_blocks.is_empty() {
        let edges = block
            .upstream_blocks
            .iter()
            .cloned()
            .collect::<Vec<_>>()
            .join(", ");
        println!("  Upstream: {}", edges.dimmed());
    }
    if block.all_upstream_blocks_executed {
        println!("  {}", "All upstream blocks executed".green());
    }
}
