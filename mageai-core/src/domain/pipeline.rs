//! Pipeline domain types

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::InvalidLiteral;
use crate::domain::block::Block;
use crate::domain::retry::RetryConfig;
use crate::graph::BlockGraph;

/// A pipeline as reported by the Mage AI server.
///
/// Only `name` and `type` are ever client-supplied; every other field is
/// assigned by the server and replaced wholesale on read. Missing response
/// fields decode to their zero values, matching the server's habit of
/// omitting what it has not populated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pipeline {
    pub uuid: String,
    pub name: String,
    #[serde(rename = "type")]
    pub pipeline_type: PipelineType,
    pub description: String,
    pub tags: Vec<String>,
    pub retry_config: RetryConfig,
    pub blocks: Vec<Block>,
    pub cache_block_output_in_memory: bool,
    pub run_pipeline_in_one_process: bool,
    pub executor_count: i32,
    pub created_at: String,
    pub updated_at: String,
    pub variables_dir: String,
}

impl Pipeline {
    /// Dependency-graph view over this pipeline's blocks.
    pub fn graph(&self) -> BlockGraph {
        BlockGraph::from_blocks(&self.blocks)
    }
}

/// Pipeline execution flavor.
///
/// The wire literals are fixed and case-sensitive; unknown values are
/// rejected when a response is decoded or an operator string is parsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineType {
    Integration,
    Pyspark,
    #[default]
    Python,
    Streaming,
}

impl PipelineType {
    pub const ALL: [PipelineType; 4] = [
        PipelineType::Integration,
        PipelineType::Pyspark,
        PipelineType::Python,
        PipelineType::Streaming,
    ];

    /// The exact wire literal.
    pub fn as_str(&self) -> &'static str {
        match self {
            PipelineType::Integration => "integration",
            PipelineType::Pyspark => "pyspark",
            PipelineType::Python => "python",
            PipelineType::Streaming => "streaming",
        }
    }
}

impl fmt::Display for PipelineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PipelineType {
    type Err = InvalidLiteral;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "integration" => Ok(PipelineType::Integration),
            "pyspark" => Ok(PipelineType::Pyspark),
            "python" => Ok(PipelineType::Python),
            "streaming" => Ok(PipelineType::Streaming),
            other => Err(InvalidLiteral {
                kind: "pipeline type",
                value: other.to_string(),
                expected: "integration, pyspark, python, streaming",
            }),
        }
    }
}
