//! Error handling and retry configuration.
//!
//! This module provides:
//! - Error type definitions (initialization, transport, scan)
//! - Categorization of `reqwest` failures into transport errors
//! - The bounded retry schedule for probes
//!
//! Transport errors are local to one probe. Only a failure of the initial
//! header fetch becomes a [`ScanError`].

mod categorization;
mod types;

// Re-export public API
pub use categorization::{categorize_reqwest_error, get_retry_strategy, timeout_message};
pub use types::{InitializationError, ScanError, TransportError};
