//! Server-side execution retry policy

use serde::{Deserialize, Serialize};

/// Retry policy the server applies when executing a pipeline or block.
///
/// Purely descriptive of remote execution behavior: `delay` seconds before
/// the first retry, doubled each time when `exponential_backoff` is set and
/// capped at `max_delay`, for at most `retries` attempts. The client never
/// applies this to its own HTTP calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    pub delay: i32,
    pub exponential_backoff: bool,
    pub max_delay: i32,
    pub retries: i32,
}
