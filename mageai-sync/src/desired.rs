//! Operator-declared desired state
//!
//! These records mirror what an operator writes down, not what the server
//! reports: enumerated fields are raw strings and are parsed against the
//! closed literal sets when converted to wire requests. Conversion failure
//! means no request is ever sent.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use mageai_core::domain::InvalidLiteral;
use mageai_core::domain::block::BlockConfiguration;
use mageai_core::domain::pipeline::PipelineType;
use mageai_core::domain::retry::RetryConfig;
use mageai_core::dto::block::BlockRequest;
use mageai_core::dto::pipeline::PipelineRequest;

/// Desired attributes for a pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesiredPipeline {
    pub name: String,
    /// Raw operator string; empty means the default (`python`).
    #[serde(rename = "type")]
    pub pipeline_type: String,
}

impl DesiredPipeline {
    /// Validate and convert into the wire request shape.
    pub fn to_request(&self) -> Result<PipelineRequest, InvalidLiteral> {
        let pipeline_type = if self.pipeline_type.is_empty() {
            PipelineType::default()
        } else {
            self.pipeline_type.parse()?
        };
        Ok(PipelineRequest {
            name: self.name.clone(),
            pipeline_type,
        })
    }
}

/// Desired attributes for a block within one pipeline.
///
/// `upstream_blocks` references sibling blocks of the owning pipeline only
/// and is resubmitted wholesale on update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesiredBlock {
    pub name: String,
    /// Raw operator string; required, no default.
    #[serde(rename = "type")]
    pub block_type: String,
    pub language: String,
    pub color: String,
    pub content: String,
    pub extension_uuid: String,
    pub priority: i32,
    pub retry_config: RetryConfig,
    pub upstream_blocks: BTreeSet<String>,
    pub configuration: BlockConfiguration,
}

impl DesiredBlock {
    /// Validate and convert into the wire request shape.
    pub fn to_request(&self) -> Result<BlockRequest, InvalidLiteral> {
        Ok(BlockRequest {
            color: self.color.clone(),
            configuration: self.configuration.clone(),
            content: self.content.clone(),
            extension_uuid: self.extension_uuid.clone(),
            language: self.language.clone(),
            name: self.name.clone(),
            priority: self.priority,
            retry_config: self.retry_config,
            block_type: self.block_type.parse()?,
            upstream_blocks: self.upstream_blocks.clone(),
        })
    }
}
