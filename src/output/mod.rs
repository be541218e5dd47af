//! Report presentation: colored plain text or JSON.

mod json;
mod plain;

use crate::app::LogEntry;
use crate::config::OutputFormat;
use crate::report::ScanReport;

pub use json::render_json;
pub use plain::{render_log, render_plain};

/// Renders `report` in `format`, followed by the scan log when given.
pub fn render(
    report: &ScanReport,
    format: OutputFormat,
    log: Option<&[LogEntry]>,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => render_json(report, log),
        OutputFormat::Plain => {
            let mut out = render_plain(report);
            if let Some(entries) = log {
                out.push('\n');
                out.push_str(&render_log(entries));
            }
            Ok(out)
        }
    }
}
