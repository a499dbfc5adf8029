//! Error envelope wire shape

use serde::{Deserialize, Serialize};

/// Body of the server's error envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiErrorBody {
    pub code: i64,
    pub exception: String,
    pub message: String,
}

/// `{"error": {...}}` envelope the server returns on business failures.
///
/// The same bytes may first decode as a success envelope with an empty
/// identifier; classification happens in the codec.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub error: ApiErrorBody,
}
