//! Wire shapes for the Mage AI REST API
//!
//! Request DTOs carry only the fields the API accepts as input; the
//! server-assigned fields of the domain records can never be encoded because
//! they simply do not exist here. Response envelopes mirror the server's
//! `{"pipeline": ...}` / `{"block": ...}` / `{"error": ...}` wrappers.

pub mod block;
pub mod error;
pub mod pipeline;
