//! Block domain types

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::InvalidLiteral;
use crate::domain::retry::RetryConfig;

/// A block as reported by the Mage AI server.
///
/// Always owned by exactly one pipeline, referenced by the pipeline's uuid
/// rather than embedded. The upstream/downstream identifier sets reference
/// sibling blocks of that pipeline only; decoding collapses duplicate wire
/// entries into set semantics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Block {
    pub uuid: String,
    pub name: String,
    #[serde(rename = "type")]
    pub block_type: BlockType,
    pub language: String,
    pub color: String,
    pub content: String,
    pub extension_uuid: String,
    pub executor_type: String,
    pub upstream_blocks: BTreeSet<String>,
    pub downstream_blocks: BTreeSet<String>,
    pub priority: i32,
    pub timeout: i64,
    pub retry_config: RetryConfig,
    pub status: BlockStatus,
    pub has_callback: bool,
    /// True only when every upstream block has status `executed`.
    pub all_upstream_blocks_executed: bool,
    pub configuration: BlockConfiguration,
    pub pipelines: Vec<String>,
}

/// SQL/dbt-specific block settings.
///
/// Present but empty for other block types; every field is an opaque string
/// forwarded to the server as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockConfiguration {
    pub data_provider: String,
    pub data_provider_database: String,
    pub data_provider_profile: String,
    pub data_provider_schema: String,
    pub data_provider_table: String,
    pub export_write_policy: String,
    pub use_raw_sql: String,
}

/// Kind of work a block performs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockType {
    Callback,
    Chart,
    Conditional,
    #[default]
    Custom,
    DataExporter,
    DataLoader,
    Dbt,
    Extension,
    GlobalDataProduct,
    Markdown,
    Scratchpad,
    Sensor,
    Transformer,
}

impl BlockType {
    pub const ALL: [BlockType; 13] = [
        BlockType::Callback,
        BlockType::Chart,
        BlockType::Conditional,
        BlockType::Custom,
        BlockType::DataExporter,
        BlockType::DataLoader,
        BlockType::Dbt,
        BlockType::Extension,
        BlockType::GlobalDataProduct,
        BlockType::Markdown,
        BlockType::Scratchpad,
        BlockType::Sensor,
        BlockType::Transformer,
    ];

    /// The exact wire literal.
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockType::Callback => "callback",
            BlockType::Chart => "chart",
            BlockType::Conditional => "conditional",
            BlockType::Custom => "custom",
            BlockType::DataExporter => "data_exporter",
            BlockType::DataLoader => "data_loader",
            BlockType::Dbt => "dbt",
            BlockType::Extension => "extension",
            BlockType::GlobalDataProduct => "global_data_product",
            BlockType::Markdown => "markdown",
            BlockType::Scratchpad => "scratchpad",
            BlockType::Sensor => "sensor",
            BlockType::Transformer => "transformer",
        }
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BlockType {
    type Err = InvalidLiteral;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "callback" => Ok(BlockType::Callback),
            "chart" => Ok(BlockType::Chart),
            "conditional" => Ok(BlockType::Conditional),
            "custom" => Ok(BlockType::Custom),
            "data_exporter" => Ok(BlockType::DataExporter),
            "data_loader" => Ok(BlockType::DataLoader),
            "dbt" => Ok(BlockType::Dbt),
            "extension" => Ok(BlockType::Extension),
            "global_data_product" => Ok(BlockType::GlobalDataProduct),
            "markdown" => Ok(BlockType::Markdown),
            "scratchpad" => Ok(BlockType::Scratchpad),
            "sensor" => Ok(BlockType::Sensor),
            "transformer" => Ok(BlockType::Transformer),
            other => Err(InvalidLiteral {
                kind: "block type",
                value: other.to_string(),
                expected: "callback, chart, conditional, custom, data_exporter, \
                           data_loader, dbt, extension, global_data_product, markdown, \
                           scratchpad, sensor, transformer",
            }),
        }
    }
}

/// Execution status the server assigns to a block. Read-only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockStatus {
    Executed,
    Failed,
    #[default]
    NotExecuted,
    Updated,
}

impl BlockStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockStatus::Executed => "executed",
            BlockStatus::Failed => "failed",
            BlockStatus::NotExecuted => "not_executed",
            BlockStatus::Updated => "updated",
        }
    }
}

impl fmt::Display for BlockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
