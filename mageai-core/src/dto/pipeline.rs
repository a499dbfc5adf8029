//! Pipeline request and response wire shapes

use serde::{Deserialize, Serialize};

use crate::domain::pipeline::{Pipeline, PipelineType};

/// Client-writable pipeline attributes.
///
/// Create and update both send exactly this shape; the server assigns
/// everything else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub pipeline_type: PipelineType,
}

/// `{"pipeline": {...}}` write-body wrapper.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineWriteBody {
    pub pipeline: PipelineRequest,
}

/// `{"pipeline": {...}}` success envelope.
///
/// The field is optional so that error-envelope bytes still decode; the
/// codec treats an absent record the same as an empty identifier.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PipelineResponse {
    #[serde(default)]
    pub pipeline: Option<Pipeline>,
}

/// `{"pipelines": [...]}` collection envelope.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PipelinesResponse {
    #[serde(default)]
    pub pipelines: Vec<Pipeline>,
}
