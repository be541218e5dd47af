//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, retry budget, probed methods)
//! - Security header name constants and the important-headers allow-list
//! - CLI option types and parsing

mod constants;
mod headers;
mod types;

// Re-export all constants
pub use constants::*;
pub use headers::*;
pub use types::{Config, LogFormat, LogLevel, OutputFormat};
