//! Mage AI Reconciliation Driver
//!
//! Converges remote Mage AI state toward an operator-declared desired state.
//! Desired records arrive from a desired-state provider with their `type`
//! fields as raw strings; they are validated against the closed literal sets
//! here, before any network call. Every resolved server record is handed to
//! a [`StateSink`] so the operator's view tracks the remote truth.

pub mod desired;
pub mod reconciler;

pub use desired::{DesiredBlock, DesiredPipeline};
pub use reconciler::{Reconciler, StateSink, SyncError};
