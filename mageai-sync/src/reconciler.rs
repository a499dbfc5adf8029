//! Create/refresh/update/destroy flows
//!
//! Each flow is one client operation followed by one sink write: validate
//! the desired record, call the server, persist the server's full response.
//! Flows hold no cross-call state beyond the shared client handle, so an
//! outer orchestrator may run many of them in parallel for independent
//! resources. Failures are returned as-is; nothing is retried here.

use async_trait::async_trait;
use thiserror::Error;

use mageai_client::{Client, ClientError, Transport};
use mageai_core::domain::InvalidLiteral;
use mageai_core::domain::block::Block;
use mageai_core::domain::pipeline::Pipeline;

use crate::desired::{DesiredBlock, DesiredPipeline};

/// Persists resolved resource records on behalf of the operator.
///
/// Persist calls always receive the server's full record, never the desired
/// record that produced it; discard calls drop the local copy after a remote
/// delete.
#[async_trait]
pub trait StateSink: Send {
    async fn persist_pipeline(&mut self, pipeline: &Pipeline) -> anyhow::Result<()>;
    async fn persist_block(&mut self, pipeline_uuid: &str, block: &Block) -> anyhow::Result<()>;
    async fn discard_pipeline(&mut self, uuid: &str) -> anyhow::Result<()>;
    async fn discard_block(&mut self, pipeline_uuid: &str, uuid: &str) -> anyhow::Result<()>;
}

/// Errors surfaced by reconciliation flows.
#[derive(Debug, Error)]
pub enum SyncError {
    /// A desired-state field failed validation; no request was sent.
    #[error(transparent)]
    Validation(#[from] InvalidLiteral),

    /// The client operation failed (transport, decode, or API error).
    #[error(transparent)]
    Client(#[from] ClientError),

    /// The state sink refused the resolved record.
    #[error("state sink error: {0}")]
    Sink(anyhow::Error),
}

/// Drives pipelines and blocks toward their desired state.
pub struct Reconciler<'a, T: Transport> {
    client: &'a Client<T>,
}

impl<'a, T: Transport> Reconciler<'a, T> {
    pub fn new(client: &'a Client<T>) -> Self {
        Self { client }
    }

    /// Create a remote pipeline and persist the resolved record.
    pub async fn create_pipeline<S: StateSink>(
        &self,
        desired: &DesiredPipeline,
        sink: &mut S,
    ) -> Result<Pipeline, SyncError> {
        let request = desired.to_request()?;
        tracing::info!("creating pipeline: {}", request.name);
        let pipeline = self.client.create_pipeline(request).await?;
        sink.persist_pipeline(&pipeline)
            .await
            .map_err(SyncError::Sink)?;
        Ok(pipeline)
    }

    /// Re-read the remote record and replace the persisted copy wholesale.
    pub async fn refresh_pipeline<S: StateSink>(
        &self,
        uuid: &str,
        sink: &mut S,
    ) -> Result<Pipeline, SyncError> {
        tracing::debug!("refreshing pipeline: {}", uuid);
        let pipeline = self.client.read_pipeline(uuid).await?;
        sink.persist_pipeline(&pipeline)
            .await
            .map_err(SyncError::Sink)?;
        Ok(pipeline)
    }

    /// Push the mutable pipeline fields and persist the server's response.
    pub async fn update_pipeline<S: StateSink>(
        &self,
        uuid: &str,
        desired: &DesiredPipeline,
        sink: &mut S,
    ) -> Result<Pipeline, SyncError> {
        let request = desired.to_request()?;
        tracing::info!("updating pipeline: {}", uuid);
        let pipeline = self.client.update_pipeline(uuid, request).await?;
        sink.persist_pipeline(&pipeline)
            .await
            .map_err(SyncError::Sink)?;
        Ok(pipeline)
    }

    /// Delete the remote pipeline and drop the local record.
    pub async fn destroy_pipeline<S: StateSink>(
        &self,
        uuid: &str,
        sink: &mut S,
    ) -> Result<(), SyncError> {
        tracing::info!("destroying pipeline: {}", uuid);
        self.client.delete_pipeline(uuid).await?;
        sink.discard_pipeline(uuid).await.map_err(SyncError::Sink)?;
        Ok(())
    }

    /// Create a remote block under a pipeline and persist the resolved record.
    pub async fn create_block<S: StateSink>(
        &self,
        pipeline_uuid: &str,
        desired: &DesiredBlock,
        sink: &mut S,
    ) -> Result<Block, SyncError> {
        let request = desired.to_request()?;
        tracing::info!("creating block {} in pipeline {}", request.name, pipeline_uuid);
        let block = self.client.create_block(pipeline_uuid, request).await?;
        sink.persist_block(pipeline_uuid, &block)
            .await
            .map_err(SyncError::Sink)?;
        Ok(block)
    }

    /// Re-read a block and replace the persisted copy wholesale.
    pub async fn refresh_block<S: StateSink>(
        &self,
        pipeline_uuid: &str,
        uuid: &str,
        sink: &mut S,
    ) -> Result<Block, SyncError> {
        tracing::debug!("refreshing block {} in pipeline {}", uuid, pipeline_uuid);
        let block = self.client.read_block(pipeline_uuid, uuid).await?;
        sink.persist_block(pipeline_uuid, &block)
            .await
            .map_err(SyncError::Sink)?;
        Ok(block)
    }

    /// Resubmit a block's writable fields and persist the server's response.
    pub async fn update_block<S: StateSink>(
        &self,
        pipeline_uuid: &str,
        uuid: &str,
        desired: &DesiredBlock,
        sink: &mut S,
    ) -> Result<Block, SyncError> {
        let request = desired.to_request()?;
        tracing::info!("updating block {} in pipeline {}", uuid, pipeline_uuid);
        let block = self.client.update_block(pipeline_uuid, uuid, request).await?;
        sink.persist_block(pipeline_uuid, &block)
            .await
            .map_err(SyncError::Sink)?;
        Ok(block)
    }

    /// Delete the remote block and drop the local record.
    pub async fn destroy_block<S: StateSink>(
        &self,
        pipeline_uuid: &str,
        uuid: &str,
        sink: &mut S,
    ) -> Result<(), SyncError> {
        tracing::info!("destroying block {} in pipeline {}", uuid, pipeline_uuid);
        self.client.delete_block(pipeline_uuid, uuid).await?;
        sink.discard_block(pipeline_uuid, uuid)
            .await
            .map_err(SyncError::Sink)?;
        Ok(())
    }
}
