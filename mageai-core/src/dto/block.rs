//! Block request and response wire shapes

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::block::{Block, BlockConfiguration, BlockType};
use crate::domain::retry::RetryConfig;

/// Client-writable block attributes.
///
/// Any of these may be resubmitted wholesale on update, including the full
/// `upstream_blocks` set. Server-assigned fields (uuid, status,
/// all_upstream_blocks_executed, downstream_blocks, ...) are deliberately
/// absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlockRequest {
    pub color: String,
    pub configuration: BlockConfiguration,
    pub content: String,
    pub extension_uuid: String,
    pub language: String,
    pub name: String,
    pub priority: i32,
    pub retry_config: RetryConfig,
    #[serde(rename = "type")]
    pub block_type: BlockType,
    pub upstream_blocks: BTreeSet<String>,
}

/// `{"block": {...}}` write-body wrapper.
#[derive(Debug, Clone, Serialize)]
pub struct BlockWriteBody {
    pub block: BlockRequest,
}

/// `{"block": {...}}` success envelope.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BlockResponse {
    #[serde(default)]
    pub block: Option<Block>,
}

/// `{"blocks": [...]}` collection envelope.
///
/// `None` (a `null` or missing list) is the server's error signal for this
/// collection; an empty vec is a pipeline with zero blocks. The two are not
/// interchangeable.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BlocksResponse {
    #[serde(default)]
    pub blocks: Option<Vec<Block>>,
}
