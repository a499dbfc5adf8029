//! Error types for the Mage AI client
//!
//! Four disjoint kinds surface to callers: pre-flight validation, transport
//! failure, decode failure, and server-reported API errors. Nothing is
//! retried or swallowed; every failure carries the operation it came from so
//! the caller can produce an operator-facing diagnostic.

use thiserror::Error;

use mageai_core::dto::error::ApiErrorBody;

pub use mageai_core::domain::InvalidLiteral;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when using the Mage AI client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The HTTP round-trip itself failed (network error or timeout).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status at the transport layer,
    /// before any body interpretation.
    #[error("unexpected status code: {status}")]
    UnexpectedStatus {
        /// HTTP status code
        status: u16,
    },

    /// Response bytes matched neither the success nor the error envelope.
    #[error("error decoding {context} response: {source}")]
    Decode {
        /// Which shape was being decoded, e.g. "pipeline".
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// The transport succeeded and the bytes parsed, but the payload reported
    /// a business-level failure.
    #[error("error {operation}: {exception}, status code: {code}")]
    Api {
        /// Operation that failed, e.g. "creating pipeline".
        operation: &'static str,
        /// Status code reported inside the error envelope.
        code: i64,
        /// Exception name reported by the server.
        exception: String,
        /// Human-readable message reported by the server.
        message: String,
    },

    /// A client-supplied enumerated field failed validation before any
    /// network call was attempted.
    #[error(transparent)]
    Validation(#[from] InvalidLiteral),

    /// The configured host (or a URL derived from it) could not be parsed.
    #[error("invalid URL {value:?}: {reason}")]
    Config { value: String, reason: String },
}

impl ClientError {
    /// Build an Api error from a decoded error envelope.
    pub fn api(operation: &'static str, body: ApiErrorBody) -> Self {
        Self::Api {
            operation,
            code: body.code,
            exception: body.exception,
            message: body.message,
        }
    }

    pub(crate) fn unexpected_status(status: u16) -> Self {
        Self::UnexpectedStatus { status }
    }

    pub(crate) fn decode(context: &'static str, source: serde_json::Error) -> Self {
        Self::Decode { context, source }
    }

    pub(crate) fn config(value: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        Self::Config {
            value: value.into(),
            reason: reason.to_string(),
        }
    }

    /// Check if the server reported the resource as missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Api { code: 404, .. })
    }

    /// Check if this failure happened before any network call.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if the HTTP round-trip itself failed.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::UnexpectedStatus { .. })
    }
}
