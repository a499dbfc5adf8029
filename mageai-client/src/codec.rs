//! Resource codec
//!
//! Pure translation between wire bytes and domain records. The server
//! signals business failures with a body whose primary identifier is empty
//! or absent rather than a distinct discriminator, so decoding is a tagged
//! classification: attempt the success envelope first, then re-decode the
//! same bytes as the error envelope when the identifier is missing.

use serde::Serialize;
use serde::de::DeserializeOwned;

use mageai_core::domain::block::Block;
use mageai_core::domain::pipeline::Pipeline;
use mageai_core::dto::block::{BlockRequest, BlockResponse, BlockWriteBody, BlocksResponse};
use mageai_core::dto::error::{ApiErrorBody, ErrorResponse};
use mageai_core::dto::pipeline::{
    PipelineRequest, PipelineResponse, PipelineWriteBody, PipelinesResponse,
};

use crate::error::{ClientError, Result};

/// Outcome of classifying a response body.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Decoded<T> {
    /// Success envelope with a populated identifier.
    Resource(T),
    /// Error envelope, or a success shape with an empty identifier.
    Failure(ApiErrorBody),
}

fn decode_as<T: DeserializeOwned>(bytes: &[u8], context: &'static str) -> Result<T> {
    serde_json::from_slice(bytes).map_err(|err| ClientError::decode(context, err))
}

fn encode_as<T: Serialize>(body: &T, context: &'static str) -> Result<Vec<u8>> {
    serde_json::to_vec(body).map_err(|err| ClientError::decode(context, err))
}

/// Decode the success envelope; when `extract` finds no usable resource,
/// re-decode the same bytes as the error envelope.
fn classify<E, T>(
    bytes: &[u8],
    context: &'static str,
    extract: impl FnOnce(E) -> Option<T>,
) -> Result<Decoded<T>>
where
    E: DeserializeOwned,
{
    let envelope: E = decode_as(bytes, context)?;
    match extract(envelope) {
        Some(resource) => Ok(Decoded::Resource(resource)),
        None => {
            let error: ErrorResponse = decode_as(bytes, context)?;
            Ok(Decoded::Failure(error.error))
        }
    }
}

pub(crate) fn encode_pipeline(request: PipelineRequest) -> Result<Vec<u8>> {
    encode_as(&PipelineWriteBody { pipeline: request }, "pipeline request")
}

pub(crate) fn encode_block(request: BlockRequest) -> Result<Vec<u8>> {
    encode_as(&BlockWriteBody { block: request }, "block request")
}

pub(crate) fn decode_pipeline(bytes: &[u8]) -> Result<Decoded<Pipeline>> {
    classify(bytes, "pipeline", |envelope: PipelineResponse| {
        envelope.pipeline.filter(|pipeline| !pipeline.uuid.is_empty())
    })
}

/// The pipelines collection has no error-signal convention; the list decodes
/// as-is, defaulting to empty when absent.
pub(crate) fn decode_pipelines(bytes: &[u8]) -> Result<Vec<Pipeline>> {
    let envelope: PipelinesResponse = decode_as(bytes, "pipelines")?;
    Ok(envelope.pipelines)
}

pub(crate) fn decode_block(bytes: &[u8]) -> Result<Decoded<Block>> {
    classify(bytes, "block", |envelope: BlockResponse| {
        envelope.block.filter(|block| !block.uuid.is_empty())
    })
}

/// The blocks collection uses list presence as its success signal: `null` or
/// a missing key marks an error envelope, while an empty list is a pipeline
/// with zero blocks.
pub(crate) fn decode_blocks(bytes: &[u8]) -> Result<Decoded<Vec<Block>>> {
    classify(bytes, "blocks", |envelope: BlocksResponse| envelope.blocks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mageai_core::domain::block::BlockType;
    use mageai_core::domain::pipeline::PipelineType;
    use serde_json::{Value, json};

    #[test]
    fn test_decode_populated_pipeline() {
        let bytes = json!({"pipeline": {"uuid": "p-1", "name": "etl", "type": "streaming"}})
            .to_string()
            .into_bytes();
        match decode_pipeline(&bytes).unwrap() {
            Decoded::Resource(pipeline) => {
                assert_eq!(pipeline.uuid, "p-1");
                assert_eq!(pipeline.pipeline_type, PipelineType::Streaming);
            }
            Decoded::Failure(error) => panic!("unexpected failure: {error:?}"),
        }
    }

    #[test]
    fn test_empty_identifier_classifies_as_failure() {
        let bytes = json!({"pipeline": {"uuid": "", "name": ""}})
            .to_string()
            .into_bytes();
        assert!(matches!(
            decode_pipeline(&bytes).unwrap(),
            Decoded::Failure(_)
        ));
    }

    #[test]
    fn test_error_envelope_classifies_as_failure() {
        let bytes =
            json!({"error": {"code": 404, "exception": "NotFound", "message": "no such pipeline"}})
                .to_string()
                .into_bytes();
        match decode_block(&bytes).unwrap() {
            Decoded::Failure(error) => {
                assert_eq!(error.code, 404);
                assert_eq!(error.exception, "NotFound");
                assert_eq!(error.message, "no such pipeline");
            }
            Decoded::Resource(block) => panic!("unexpected resource: {block:?}"),
        }
    }

    #[test]
    fn test_null_blocks_list_is_a_failure_signal() {
        let bytes = json!({"blocks": null}).to_string().into_bytes();
        assert!(matches!(decode_blocks(&bytes).unwrap(), Decoded::Failure(_)));
    }

    #[test]
    fn test_empty_blocks_list_is_zero_blocks() {
        let bytes = json!({"blocks": []}).to_string().into_bytes();
        match decode_blocks(&bytes).unwrap() {
            Decoded::Resource(blocks) => assert!(blocks.is_empty()),
            Decoded::Failure(error) => panic!("unexpected failure: {error:?}"),
        }
    }

    #[test]
    fn test_malformed_bytes_are_a_decode_error() {
        let err = decode_pipeline(b"not json").unwrap_err();
        assert!(matches!(err, ClientError::Decode { context: "pipeline", .. }));
    }

    #[test]
    fn test_encode_pipeline_sends_only_mutable_fields() {
        let bytes = encode_pipeline(PipelineRequest {
            name: "etl".to_string(),
            pipeline_type: PipelineType::Pyspark,
        })
        .unwrap();
        let value: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value, json!({"pipeline": {"name": "etl", "type": "pyspark"}}));
    }

    #[test]
    fn test_encode_block_excludes_server_assigned_fields() {
        let bytes = encode_block(BlockRequest {
            name: "extract".to_string(),
            block_type: BlockType::DataLoader,
            language: "python".to_string(),
            ..BlockRequest::default()
        })
        .unwrap();
        let value: Value = serde_json::from_slice(&bytes).unwrap();
        let block = value.get("block").and_then(Value::as_object).unwrap();
        for server_only in ["uuid", "status", "all_upstream_blocks_executed", "downstream_blocks"] {
            assert!(!block.contains_key(server_only), "{server_only} was encoded");
        }
        assert_eq!(block["type"], json!("data_loader"));
        assert_eq!(block["upstream_blocks"], json!([]));
    }

    #[test]
    fn test_block_request_round_trip() {
        let request = BlockRequest {
            name: "transform".to_string(),
            block_type: BlockType::Transformer,
            language: "sql".to_string(),
            priority: 2,
            upstream_blocks: ["extract".to_string()].into(),
            ..BlockRequest::default()
        };
        let bytes = encode_block(request.clone()).unwrap();
        let value: Value = serde_json::from_slice(&bytes).unwrap();
        let decoded: BlockRequest = serde_json::from_value(value["block"].clone()).unwrap();
        assert_eq!(decoded, request);
    }
}
