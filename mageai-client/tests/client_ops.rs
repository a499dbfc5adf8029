//! Client operation tests over a stubbed transport.
//!
//! The stub records every call and replays canned bodies, so each test pins
//! down the exact method, path, and request body an operation produces along
//! with how the response is classified.

use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::Method;
use serde_json::{Value, json};

use mageai_client::{Client, ClientError, Result, Transport};
use mageai_core::domain::block::{BlockStatus, BlockType};
use mageai_core::domain::pipeline::PipelineType;
use mageai_core::dto::block::BlockRequest;
use mageai_core::dto::pipeline::PipelineRequest;

#[derive(Default)]
struct StubTransport {
    responses: Mutex<Vec<Vec<u8>>>,
    calls: Mutex<Vec<(Method, String, Option<Vec<u8>>)>>,
}

impl StubTransport {
    fn replying(body: Value) -> Self {
        let stub = StubTransport::default();
        stub.responses
            .lock()
            .unwrap()
            .push(body.to_string().into_bytes());
        stub
    }

    fn calls(&self) -> Vec<(Method, String, Option<Vec<u8>>)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn call(&self, method: Method, path: &str, body: Option<Vec<u8>>) -> Result<Vec<u8>> {
        self.calls
            .lock()
            .unwrap()
            .push((method, path.to_string(), body));
        let mut responses = self.responses.lock().unwrap();
        assert!(!responses.is_empty(), "unexpected transport call to {path}");
        Ok(responses.remove(0))
    }
}

fn body_json(call: &(Method, String, Option<Vec<u8>>)) -> Value {
    serde_json::from_slice(call.2.as_deref().expect("call had no body")).unwrap()
}

#[tokio::test]
async fn test_create_block_returns_server_record() {
    let client = Client::with_transport(StubTransport::replying(json!({
        "block": {
            "uuid": "b-9",
            "name": "extract",
            "type": "data_loader",
            "upstream_blocks": [],
            "downstream_blocks": []
        }
    })));

    let block = client
        .create_block(
            "p-1",
            BlockRequest {
                name: "extract".to_string(),
                block_type: BlockType::DataLoader,
                language: "python".to_string(),
                ..BlockRequest::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(block.uuid, "b-9");
    assert_eq!(block.block_type, BlockType::DataLoader);
    assert_eq!(block.status, BlockStatus::NotExecuted);
    assert!(block.upstream_blocks.is_empty());

    let calls = client.transport().calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, Method::POST);
    assert_eq!(calls[0].1, "pipelines/p-1/blocks");
    let body = body_json(&calls[0]);
    assert_eq!(body["block"]["type"], json!("data_loader"));
    assert!(body["block"].get("uuid").is_none());
}

#[tokio::test]
async fn test_update_pipeline_error_envelope_is_an_api_error() {
    let client = Client::with_transport(StubTransport::replying(json!({
        "error": {"code": 404, "exception": "NotFound", "message": "no such pipeline"}
    })));

    let err = client
        .update_pipeline(
            "p-1",
            PipelineRequest {
                name: "etl".to_string(),
                pipeline_type: PipelineType::Streaming,
            },
        )
        .await
        .unwrap_err();

    assert!(err.is_not_found());
    match err {
        ClientError::Api { code, exception, .. } => {
            assert_eq!(code, 404);
            assert_eq!(exception, "NotFound");
        }
        other => panic!("expected Api error, got {other:?}"),
    }

    let calls = client.transport().calls();
    assert_eq!(calls[0].0, Method::PUT);
    assert_eq!(calls[0].1, "pipelines/p-1");
}

#[tokio::test]
async fn test_create_pipeline_sends_only_name_and_type() {
    let client = Client::with_transport(StubTransport::replying(json!({
        "pipeline": {"uuid": "p-1", "name": "etl", "type": "python"}
    })));

    let pipeline = client
        .create_pipeline(PipelineRequest {
            name: "etl".to_string(),
            pipeline_type: PipelineType::Python,
        })
        .await
        .unwrap();
    assert_eq!(pipeline.uuid, "p-1");

    let calls = client.transport().calls();
    assert_eq!(calls[0].0, Method::POST);
    assert_eq!(calls[0].1, "pipelines");
    assert_eq!(
        body_json(&calls[0]),
        json!({"pipeline": {"name": "etl", "type": "python"}})
    );
}

#[tokio::test]
async fn test_empty_identifier_is_never_a_success() {
    let client = Client::with_transport(StubTransport::replying(json!({
        "pipeline": {"uuid": "", "name": ""}
    })));

    let err = client.read_pipeline("p-1").await.unwrap_err();
    assert!(matches!(err, ClientError::Api { .. }));
    assert!(!err.is_transport());
}

#[tokio::test]
async fn test_null_blocks_list_is_an_error_not_an_empty_result() {
    let client = Client::with_transport(StubTransport::replying(json!({"blocks": null})));

    let err = client.list_blocks("p-1").await.unwrap_err();
    assert!(matches!(err, ClientError::Api { .. }));
}

#[tokio::test]
async fn test_empty_blocks_list_is_zero_blocks() {
    let client = Client::with_transport(StubTransport::replying(json!({"blocks": []})));

    let blocks = client.list_blocks("p-1").await.unwrap();
    assert!(blocks.is_empty());
    assert_eq!(client.transport().calls()[0].1, "pipelines/p-1/blocks");
}

#[tokio::test]
async fn test_block_item_paths_use_singular_segment() {
    let client = Client::with_transport(StubTransport::replying(json!({
        "block": {"uuid": "b-2", "name": "load", "type": "data_exporter"}
    })));

    client.read_block("p-1", "b-2").await.unwrap();
    assert_eq!(client.transport().calls()[0].1, "pipelines/p-1/block/b-2");
}

#[tokio::test]
async fn test_block_update_path_uses_plural_segment() {
    let client = Client::with_transport(StubTransport::replying(json!({
        "block": {"uuid": "b-2", "name": "load", "type": "data_exporter"}
    })));

    client
        .update_block(
            "p-1",
            "b-2",
            BlockRequest {
                name: "load".to_string(),
                block_type: BlockType::DataExporter,
                ..BlockRequest::default()
            },
        )
        .await
        .unwrap();

    let calls = client.transport().calls();
    assert_eq!(calls[0].0, Method::PUT);
    assert_eq!(calls[0].1, "pipelines/p-1/blocks/b-2");
}

#[tokio::test]
async fn test_delete_applies_the_envelope_convention() {
    let client = Client::with_transport(StubTransport::replying(json!({
        "pipeline": {"uuid": "p-1", "name": "etl", "type": "python"}
    })));
    client.delete_pipeline("p-1").await.unwrap();
    let calls = client.transport().calls();
    assert_eq!(calls[0].0, Method::DELETE);
    assert_eq!(calls[0].1, "pipelines/p-1");

    let failing = Client::with_transport(StubTransport::replying(json!({
        "error": {"code": 500, "exception": "ServerError", "message": "boom"}
    })));
    let err = failing.delete_block("p-1", "b-2").await.unwrap_err();
    assert!(matches!(err, ClientError::Api { code: 500, .. }));
    assert_eq!(failing.transport().calls()[0].1, "pipelines/p-1/block/b-2");
}

#[tokio::test]
async fn test_list_pipelines_decodes_collection() {
    let client = Client::with_transport(StubTransport::replying(json!({
        "pipelines": [
            {"uuid": "p-1", "name": "etl", "type": "python"},
            {"uuid": "p-2", "name": "events", "type": "streaming"}
        ]
    })));

    let pipelines = client.list_pipelines().await.unwrap();
    assert_eq!(pipelines.len(), 2);
    assert_eq!(pipelines[1].pipeline_type, PipelineType::Streaming);
}

#[tokio::test]
async fn test_read_after_create_returns_equal_record() {
    let record = json!({
        "pipeline": {
            "uuid": "p-1",
            "name": "etl",
            "type": "python",
            "tags": ["nightly"],
            "retry_config": {"delay": 5, "exponential_backoff": true, "max_delay": 60, "retries": 3}
        }
    });
    let stub = StubTransport::replying(record.clone());
    stub.responses
        .lock()
        .unwrap()
        .push(record.to_string().into_bytes());
    let client = Client::with_transport(stub);

    let created = client
        .create_pipeline(PipelineRequest {
            name: "etl".to_string(),
            pipeline_type: PipelineType::Python,
        })
        .await
        .unwrap();
    let read = client.read_pipeline("p-1").await.unwrap();
    assert_eq!(created, read);
}
