//! JSON rendering.

use serde::Serialize;

use crate::app::LogEntry;
use crate::report::ScanReport;

#[derive(Serialize)]
struct JsonOutput<'a> {
    report: &'a ScanReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    log: Option<&'a [LogEntry]>,
}

/// Serializes the report, and the scan log when given, as pretty JSON.
pub fn render_json(
    report: &ScanReport,
    log: Option<&[LogEntry]>,
) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonOutput { report, log })
}
