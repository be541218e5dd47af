//! Configuration constants.
//!
//! This module defines the operational parameters of a scan: probe timeouts,
//! the retry budget, the default method list and the relay allow-list.

use std::time::Duration;

/// Per-probe timeout in milliseconds.
///
/// Applies independently to the initial header fetch and to every method probe.
pub const PROBE_TIMEOUT_MS: u64 = 5000;

/// Per-probe timeout as a `Duration`.
pub const PROBE_TIMEOUT: Duration = Duration::from_millis(PROBE_TIMEOUT_MS);

/// Maximum number of attempts per probe (including the initial attempt).
/// Set to 2 = initial attempt + 1 retry. Only timeouts are retried.
pub const PROBE_MAX_ATTEMPTS: usize = 2;

/// Delay in milliseconds before retrying a timed-out probe.
pub const RETRY_DELAY_MS: u64 = 0;

/// User-Agent sent with every outbound request.
pub const DEFAULT_USER_AGENT: &str = "Security-Scanner/1.0";

/// Methods probed when none are given on the command line.
pub const DEFAULT_PROBE_METHODS: &[&str] = &["TRACE", "OPTIONS", "HEAD", "DEBUG"];

/// Methods the relay server agrees to forward.
/// Anything else is rejected with 400 before any upstream request is made.
pub const RELAY_ALLOWED_METHODS: &[&str] = &["GET", "HEAD", "OPTIONS", "TRACE", "DEBUG"];

/// Placeholder shown for important headers the server did not return.
pub const NOT_SET_PLACEHOLDER: &str = "Not set";

/// Environment variable consulted for a bearer token when none is passed explicitly.
pub const TOKEN_ENV_VAR: &str = "HEADER_SCANNER_TOKEN";

// HTTP status codes (for clarity and consistency)
pub const HTTP_STATUS_OK: u16 = 200;
pub const HTTP_STATUS_BAD_REQUEST: u16 = 400;
pub const HTTP_STATUS_FORBIDDEN: u16 = 403;
pub const HTTP_STATUS_METHOD_NOT_ALLOWED: u16 = 405;
pub const HTTP_STATUS_REQUEST_TIMEOUT: u16 = 408;
pub const HTTP_STATUS_INTERNAL_SERVER_ERROR: u16 = 500;
pub const HTTP_STATUS_BAD_GATEWAY: u16 = 502;
