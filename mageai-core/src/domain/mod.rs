//! Core domain types
//!
//! Resource records as the Mage AI server reports them. These are shared
//! between the HTTP client (which decodes them) and the reconciliation driver
//! (which persists them into operator state).

pub mod block;
pub mod pipeline;
pub mod retry;

use thiserror::Error;

/// Error produced when an operator-supplied string is not one of the
/// enumerated wire literals.
///
/// Raised before any request is sent; the server never sees the bad value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {kind}: {value:?} (expected one of: {expected})")]
pub struct InvalidLiteral {
    /// Which enumerated field was being parsed, e.g. "pipeline type".
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
    /// Comma-separated accepted literals, for the operator diagnostic.
    pub expected: &'static str,
}
