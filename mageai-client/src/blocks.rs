//! Block CRUD operations
//!
//! Blocks live under their owning pipeline. The wire protocol uses the
//! singular `block` segment for item reads and deletes but the plural
//! `blocks` segment for create and update; that asymmetry is part of the
//! existing contract and is preserved exactly.

use reqwest::Method;

use mageai_core::domain::block::Block;
use mageai_core::dto::block::BlockRequest;

use crate::codec::{self, Decoded};
use crate::error::{ClientError, Result};
use crate::pipelines::PIPELINES_PATH;
use crate::transport::Transport;
use crate::{Client, join_path};

/// Item path segment for a single block.
pub(crate) const BLOCK_PATH: &str = "block";
/// Collection path segment for a pipeline's blocks.
pub(crate) const BLOCKS_PATH: &str = "blocks";

impl<T: Transport> Client<T> {
    /// Create a block under a pipeline.
    pub async fn create_block(&self, pipeline_uuid: &str, request: BlockRequest) -> Result<Block> {
        tracing::debug!("creating block {} in pipeline {}", request.name, pipeline_uuid);
        let body = codec::encode_block(request)?;
        let bytes = self
            .transport()
            .call(
                Method::POST,
                &join_path(&[PIPELINES_PATH, pipeline_uuid, BLOCKS_PATH]),
                Some(body),
            )
            .await?;
        match codec::decode_block(&bytes)? {
            Decoded::Resource(block) => Ok(block),
            Decoded::Failure(error) => {
                Err(ClientError::api("creating block for the pipeline", error))
            }
        }
    }

    /// Read one block.
    pub async fn read_block(&self, pipeline_uuid: &str, uuid: &str) -> Result<Block> {
        tracing::debug!("reading block {} in pipeline {}", uuid, pipeline_uuid);
        let bytes = self
            .transport()
            .call(
                Method::GET,
                &join_path(&[PIPELINES_PATH, pipeline_uuid, BLOCK_PATH, uuid]),
                None,
            )
            .await?;
        match codec::decode_block(&bytes)? {
            Decoded::Resource(block) => Ok(block),
            Decoded::Failure(error) => {
                Err(ClientError::api("getting the block for the pipeline", error))
            }
        }
    }

    /// List a pipeline's blocks.
    ///
    /// A `null` list in the response is an error signal distinct from a
    /// pipeline with zero blocks; a partial result is never returned.
    pub async fn list_blocks(&self, pipeline_uuid: &str) -> Result<Vec<Block>> {
        tracing::debug!("listing blocks in pipeline {}", pipeline_uuid);
        let bytes = self
            .transport()
            .call(
                Method::GET,
                &join_path(&[PIPELINES_PATH, pipeline_uuid, BLOCKS_PATH]),
                None,
            )
            .await?;
        match codec::decode_blocks(&bytes)? {
            Decoded::Resource(blocks) => Ok(blocks),
            Decoded::Failure(error) => {
                Err(ClientError::api("getting blocks for the pipeline", error))
            }
        }
    }

    /// Update a block, resubmitting the full writable shape wholesale.
    pub async fn update_block(
        &self,
        pipeline_uuid: &str,
        uuid: &str,
        request: BlockRequest,
    ) -> Result<Block> {
        tracing::debug!("updating block {} in pipeline {}", uuid, pipeline_uuid);
        let body = codec::encode_block(request)?;
        let bytes = self
            .transport()
            .call(
                Method::PUT,
                &join_path(&[PIPELINES_PATH, pipeline_uuid, BLOCKS_PATH, uuid]),
                Some(body),
            )
            .await?;
        match codec::decode_block(&bytes)? {
            Decoded::Resource(block) => Ok(block),
            Decoded::Failure(error) => {
                Err(ClientError::api("updating block for the pipeline", error))
            }
        }
    }

    /// Delete a block.
    pub async fn delete_block(&self, pipeline_uuid: &str, uuid: &str) -> Result<()> {
        tracing::info!("deleting block {} in pipeline {}", uuid, pipeline_uuid);
        let bytes = self
            .transport()
            .call(
                Method::DELETE,
                &join_path(&[PIPELINES_PATH, pipeline_uuid, BLOCK_PATH, uuid]),
                None,
            )
            .await?;
        match codec::decode_block(&bytes)? {
            Decoded::Resource(_) => Ok(()),
            Decoded::Failure(error) => Err(ClientError::api("deleting block", error)),
        }
    }
}
