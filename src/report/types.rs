//! Report data structures.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::HeaderSet;
use crate::probe::{MethodProbeResult, ProbeOutcome};
use crate::security::Verdict;

/// One cookie of a `Set-Cookie` row, as displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CookieDisplay {
    pub name: String,
    /// Attributes after the `name=value` pair, e.g. `["Path=/", "Secure"]`
    pub attributes: Vec<String>,
}

/// The assessment of one header row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderAssessment {
    pub name: String,
    /// Raw value, `None` when the server did not send the header
    pub value: Option<String>,
    /// Value for display: the raw value or "Not set"
    pub display_value: String,
    /// Individual cookies; only filled for `Set-Cookie`
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub cookies: Vec<CookieDisplay>,
    pub verdict: Verdict,
}

/// Knobs that change which rows a report contains.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportOptions {
    /// Add the X-XSS-Protection row to the allow-list
    pub include_xss_protection: bool,
    /// Also list every header the server sent outside the allow-list
    pub show_all_headers: bool,
}

/// The complete result of one scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanReport {
    pub url: String,
    /// Status of the initial GET
    pub status: u16,
    pub scanned_at: DateTime<Utc>,
    pub headers: HeaderSet,
    pub header_verdicts: Vec<HeaderAssessment>,
    pub method_results: Vec<MethodProbeResult>,
}

impl ScanReport {
    /// Header rows that came back as warnings.
    pub fn header_warnings(&self) -> impl Iterator<Item = &HeaderAssessment> {
        self.header_verdicts.iter().filter(|h| h.verdict.is_warning())
    }

    /// Methods the probe policy considers enabled.
    pub fn enabled_methods(&self) -> impl Iterator<Item = &MethodProbeResult> {
        self.method_results.iter().filter(|m| m.enabled)
    }

    /// Result for `method`, compared case-insensitively.
    pub fn method(&self, method: &str) -> Option<&MethodProbeResult> {
        self.method_results
            .iter()
            .find(|m| m.method.eq_ignore_ascii_case(method))
    }

    /// Whether any probe failed without a status.
    pub fn has_probe_errors(&self) -> bool {
        self.method_results
            .iter()
            .any(|m| m.outcome == ProbeOutcome::Error)
    }
}
