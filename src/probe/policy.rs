//! Method probe policy: deciding from a status code whether a method is enabled.
//!
//! From a browser-like vantage point a 405 is the only unambiguous refusal,
//! so every other status counts as "enabled" for ordinary methods. DEBUG is
//! the exception: only an exact 200 counts, since that answer is itself the
//! vulnerability signal.
//!
//! The heuristic cannot tell a genuinely enabled method from a blocked or
//! opaque response. [`ProbeOutcome::Indeterminate`] marks those cases without
//! changing `enabled`.

use serde::Serialize;

use crate::config::{HTTP_STATUS_FORBIDDEN, HTTP_STATUS_METHOD_NOT_ALLOWED, HTTP_STATUS_OK};
use crate::error_handling::TransportError;

/// Classification of one method probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProbeOutcome {
    /// The server accepted the method
    Enabled,
    /// The server refused the method
    Disabled,
    /// Counted as enabled by the heuristic, but the status may come from a
    /// proxy or an opaque response rather than the target itself
    Indeterminate,
    /// No status was obtained; nothing could be confirmed
    Error,
}

fn is_debug(method: &str) -> bool {
    method.eq_ignore_ascii_case("DEBUG")
}

/// Whether `method` is considered enabled given the status it produced.
pub fn method_enabled(method: &str, status: u16) -> bool {
    if is_debug(method) {
        status == HTTP_STATUS_OK
    } else {
        status != HTTP_STATUS_METHOD_NOT_ALLOWED
    }
}

/// Classifies a probe that produced `status`.
///
/// Agrees with [`method_enabled`] on enabled/disabled; additionally reports
/// status 0 and 403 on non-DEBUG methods as indeterminate.
pub fn classify(method: &str, status: u16) -> ProbeOutcome {
    if !method_enabled(method, status) {
        return ProbeOutcome::Disabled;
    }
    if !is_debug(method) && (status == 0 || status == HTTP_STATUS_FORBIDDEN) {
        ProbeOutcome::Indeterminate
    } else {
        ProbeOutcome::Enabled
    }
}

/// Result of probing one method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MethodProbeResult {
    pub method: String,
    pub status_code: Option<u16>,
    pub enabled: bool,
    pub outcome: ProbeOutcome,
    pub error: Option<String>,
}

impl MethodProbeResult {
    /// Result for a probe that got an answer.
    pub fn from_status(method: &str, status: u16) -> Self {
        Self {
            method: method.to_string(),
            status_code: Some(status),
            enabled: method_enabled(method, status),
            outcome: classify(method, status),
            error: None,
        }
    }

    /// Result for a probe whose transport failed: not enabled, but not a
    /// confirmed refusal either.
    pub fn from_error(method: &str, error: &TransportError) -> Self {
        Self {
            method: method.to_string(),
            status_code: None,
            enabled: false,
            outcome: ProbeOutcome::Error,
            error: Some(error.to_string()),
        }
    }

    pub fn is_debug(&self) -> bool {
        is_debug(&self.method)
    }

    /// Short verdict used in the scan log.
    pub fn log_label(&self) -> String {
        match self.outcome {
            ProbeOutcome::Error => "COULD NOT BE DETERMINED (request failed)".to_string(),
            ProbeOutcome::Disabled => "NOT ALLOWED (secure)".to_string(),
            ProbeOutcome::Enabled if self.is_debug() => {
                "ENABLED (danger: 200 status code returned)".to_string()
            }
            ProbeOutcome::Enabled => "ALLOWED (potentially unsafe)".to_string(),
            ProbeOutcome::Indeterminate => format!(
                "ALLOWED (potentially unsafe; status {} may not come from the target)",
                self.status_code.unwrap_or_default()
            ),
        }
    }

    /// Security impact line for the report.
    pub fn security_impact(&self) -> String {
        let method = self.method.to_ascii_uppercase();
        match (method.as_str(), self.outcome) {
            (_, ProbeOutcome::Error) => format!(
                "{} method could not be checked: {}",
                method,
                self.error.as_deref().unwrap_or("unknown error")
            ),
            ("TRACE", ProbeOutcome::Disabled) => "TRACE method is properly disabled".to_string(),
            ("TRACE", _) => "TRACE method should be disabled for security".to_string(),
            ("DEBUG", ProbeOutcome::Disabled) => "DEBUG method is properly disabled".to_string(),
            ("DEBUG", _) => "DEBUG method is enabled - potential security risk".to_string(),
            _ => "Standard HTTP method".to_string(),
        }
    }
}
