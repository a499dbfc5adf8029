//! Pipeline command handlers

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::*;

use mageai_client::Client;
use mageai_core::domain::pipeline::{Pipeline, PipelineType};
use mageai_core::dto::pipeline::PipelineRequest;

use crate::config::Config;

/// Pipeline subcommands
#[derive(Subcommand)]
pub enum PipelineCommands {
    /// List all pipelines
    List,
    /// Get pipeline details
    Get {
        /// Pipeline UUID
        uuid: String,
    },
    /// Create a new pipeline
    Create {
        /// Pipeline name
        #[arg(short, long)]
        name: String,

        /// Pipeline type (integration, pyspark, python, streaming)
        #[arg(short = 't', long = "type", default_value = "python")]
        pipeline_type: String,
    },
    /// Update a pipeline's name or type
    Update {
        /// Pipeline UUID
        uuid: String,

        /// New pipeline name
        #[arg(short, long)]
        name: String,

        /// Pipeline type (integration, pyspark, python, streaming)
        #[arg(short = 't', long = "type", default_value = "python")]
        pipeline_type: String,
    },
    /// Delete a pipeline
    Delete {
        /// Pipeline UUID
        uuid: String,
    },
}

/// Handle pipeline commands
pub async fn handle_pipeline_command(command: PipelineCommands, config: &Config) -> Result<()> {
    let client =
        Client::new(&config.client_config()).context("Failed to create Mage AI client")?;

    match command {
        PipelineCommands::List => list_pipelines(&client).await,
        PipelineCommands::Get { uuid } => get_pipeline(&client, &uuid).await,
        PipelineCommands::Create {
            name,
            pipeline_type,
        } => create_pipeline(&client, name, &pipeline_type).await,
        PipelineCommands::Update {
            uuid,
            name,
            pipeline_type,
        } => update_pipeline(&client, &uuid, name, &pipeline_type).await,
        PipelineCommands::Delete { uuid } => delete_pipeline(&client, &uuid).await,
    }
}

fn request(name: String, pipeline_type: &str) -> Result<PipelineRequest> {
    let pipeline_type = pipeline_type
        .parse::<PipelineType>()
        .context("Invalid pipeline type")?;
    Ok(PipelineRequest {
        name,
        pipeline_type,
    })
}

async fn list_pipelines(client: &Client) -> Result<()> {
    let pipelines = client.list_pipelines().await?;
    if pipelines.is_empty() {
        println!("No pipelines found");
        return Ok(());
    }

    for pipeline in pipelines {
        println!(
            "{}  {} ({}, {} blocks)",
            pipeline.uuid.cyan(),
            pipeline.name.bold(),
            pipeline.pipeline_type,
            pipeline.blocks.len()
        );
    }
    Ok(())
}

async fn get_pipeline(client: &Client, uuid: &str) -> Result<()> {
    let pipeline = client.read_pipeline(uuid).await?;
    print_pipeline(&pipeline);
    Ok(())
}

async fn create_pipeline(client: &Client, name: String, pipeline_type: &str) -> Result<()> {
    let pipeline = client.create_pipeline(request(name, pipeline_type)?).await?;

    println!("{}", "✓ Pipeline created".green().bold());
    print_pipeline(&pipeline);
    Ok(())
}

async fn update_pipeline(
    client: &Client,
    uuid: &str,
    name: String,
    pipeline_type: &str,
) -> Result<()> {
    let pipeline = client
        .update_pipeline(uuid, request(name, pipeline_type)?)
        .await?;

    println!("{}", "✓ Pipeline updated".green().bold());
    print_pipeline(&pipeline);
    Ok(())
}

async fn delete_pipeline(client: &Client, uuid: &str) -> Result<()> {
    client.delete_pipeline(uuid).await?;
    println!("{} {}", "✓ Deleted pipeline".green().bold(), uuid.cyan());
    Ok(())
}

fn print_pipeline(pipeline: &Pipeline) {
    println!("  UUID:    {}", pipeline.uuid.cyan());
    println!("  Name:    {}", pipeline.name.bold());
    println!("  Type:    {}", pipeline.pipeline_type);
    if !pipeline.description.is_empty() {
        println!("  Desc:    {}", pipeline.description.dimmed());
    }
    if !pipeline.tags.is_empty() {
        println!("  Tags:    {}", pipeline.tags.join(", ").dimmed());
    }
    println!("  Blocks:  {}", pipeline.blocks.len());
    if !pipeline.created_at.is_empty() {
        println!("  Created: {}", pipeline.created_at.dimmed());
    }
}
