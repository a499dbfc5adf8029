//! Mage AI HTTP Client
//!
//! A type-safe client for the Mage AI REST API covering pipeline and block
//! CRUD. Each operation performs exactly one round-trip over an injected
//! transport handle and keeps no state across calls, so independent
//! resources can be reconciled in parallel by an outer driver.
//!
//! # Example
//!
//! ```no_run
//! use mageai_client::{Client, ClientConfig};
//! use mageai_core::domain::pipeline::PipelineType;
//! use mageai_core::dto::pipeline::PipelineRequest;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::new(&ClientConfig {
//!         host: "http://localhost:6789".to_string(),
//!         api_key: "secret".to_string(),
//!     })?;
//!
//!     let pipeline = client
//!         .create_pipeline(PipelineRequest {
//!             name: "etl".to_string(),
//!             pipeline_type: PipelineType::Python,
//!         })
//!         .await?;
//!
//!     println!("created pipeline: {}", pipeline.uuid);
//!     Ok(())
//! }
//! ```

mod blocks;
mod codec;
pub mod error;
mod pipelines;
pub mod transport;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use transport::{HttpTransport, Transport};

/// Configuration for connecting to a Mage AI server.
///
/// Created once and shared read-only across every reconciliation call.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base host of the server, e.g. "http://localhost:6789".
    pub host: String,
    /// API key sent in the X-API-KEY header on every call.
    pub api_key: String,
}

/// Client for the Mage AI REST API.
///
/// Operations are grouped into resource-specific modules (pipelines, blocks)
/// as `impl` extensions of this struct. The transport parameter defaults to
/// the production HTTP transport; tests substitute a stub.
#[derive(Debug, Clone)]
pub struct Client<T = HttpTransport> {
    transport: T,
}

impl Client<HttpTransport> {
    /// Create a client backed by the HTTP transport.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        Ok(Self {
            transport: HttpTransport::new(config)?,
        })
    }
}

impl<T: Transport> Client<T> {
    /// Create a client over a custom transport.
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    /// Access the underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }
}

/// Join opaque path segments into an item path.
///
/// Identifiers are server-supplied and contain no separators of their own.
pub(crate) fn join_path(segments: &[&str]) -> String {
    segments.join("/")
}
