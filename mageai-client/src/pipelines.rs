//! Pipeline CRUD operations

use reqwest::Method;

use mageai_core::domain::pipeline::Pipeline;
use mageai_core::dto::pipeline::PipelineRequest;

use crate::codec::{self, Decoded};
use crate::error::{ClientError, Result};
use crate::transport::Transport;
use crate::{Client, join_path};

/// Collection path for pipelines.
pub(crate) const PIPELINES_PATH: &str = "pipelines";

impl<T: Transport> Client<T> {
    /// Create a pipeline.
    ///
    /// Only `name` and `type` are client-supplied; the returned record
    /// carries every server-assigned field.
    pub async fn create_pipeline(&self, request: PipelineRequest) -> Result<Pipeline> {
        tracing::debug!("creating pipeline: {}", request.name);
        let body = codec::encode_pipeline(request)?;
        let bytes = self
            .transport()
            .call(Method::POST, PIPELINES_PATH, Some(body))
            .await?;
        match codec::decode_pipeline(&bytes)? {
            Decoded::Resource(pipeline) => Ok(pipeline),
            Decoded::Failure(error) => Err(ClientError::api("creating pipeline", error)),
        }
    }

    /// Read one pipeline.
    ///
    /// The returned record is the server's full view and replaces any local
    /// copy wholesale; this is drift correction, not a merge.
    pub async fn read_pipeline(&self, uuid: &str) -> Result<Pipeline> {
        tracing::debug!("reading pipeline: {}", uuid);
        let bytes = self
            .transport()
            .call(Method::GET, &join_path(&[PIPELINES_PATH, uuid]), None)
            .await?;
        match codec::decode_pipeline(&bytes)? {
            Decoded::Resource(pipeline) => Ok(pipeline),
            Decoded::Failure(error) => Err(ClientError::api("getting pipeline", error)),
        }
    }

    /// List all pipelines.
    pub async fn list_pipelines(&self) -> Result<Vec<Pipeline>> {
        tracing::debug!("listing pipelines");
        let bytes = self
            .transport()
            .call(Method::GET, PIPELINES_PATH, None)
            .await?;
        codec::decode_pipelines(&bytes)
    }

    /// Update a pipeline's mutable fields (name and type).
    pub async fn update_pipeline(&self, uuid: &str, request: PipelineRequest) -> Result<Pipeline> {
        tracing::debug!("updating pipeline: {}", uuid);
        let body = codec::encode_pipeline(request)?;
        let bytes = self
            .transport()
            .call(Method::PUT, &join_path(&[PIPELINES_PATH, uuid]), Some(body))
            .await?;
        match codec::decode_pipeline(&bytes)? {
            Decoded::Resource(pipeline) => Ok(pipeline),
            Decoded::Failure(error) => Err(ClientError::api("updating pipeline", error)),
        }
    }

    /// Delete a pipeline.
    ///
    /// The server still answers with a resource envelope and the
    /// empty-identifier convention applies, but callers get no resource body
    /// back from a delete.
    pub async fn delete_pipeline(&self, uuid: &str) -> Result<()> {
        tracing::info!("deleting pipeline: {}", uuid);
        let bytes = self
            .transport()
            .call(Method::DELETE, &join_path(&[PIPELINES_PATH, uuid]), None)
            .await?;
        match codec::decode_pipeline(&bytes)? {
            Decoded::Resource(_) => Ok(()),
            Decoded::Failure(error) => Err(ClientError::api("deleting pipeline", error)),
        }
    }
}
