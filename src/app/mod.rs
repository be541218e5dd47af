//! Scan-level helpers.
//!
//! This module provides target URL normalization and the scan log sink used
//! by the scanner and shown to the report consumer.

pub mod logging;
pub mod url;

// Re-export public API
pub use logging::{log_headers, LogEntry, LogKind, MemoryLog, ScanLog};
pub use url::normalize_target_url;
