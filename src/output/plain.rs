//! Colored plain-text rendering.

use std::fmt::Write;

use colored::*;

use crate::app::{LogEntry, LogKind};
use crate::probe::{MethodProbeResult, ProbeOutcome};
use crate::report::{HeaderAssessment, ScanReport};
use crate::security::{Verdict, VerdictStatus};

/// Renders the report as terminal tables: headers first, then methods.
pub fn render_plain(report: &ScanReport) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{} {} (status {})",
        "Security scan for".bold(),
        report.url.cyan(),
        report.status
    );
    let _ = writeln!(out);

    let _ = writeln!(out, "{}", "Security headers".bold().underline());
    for row in &report.header_verdicts {
        render_header_row(&mut out, row);
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "{}", "HTTP methods".bold().underline());
    for result in &report.method_results {
        render_method_row(&mut out, result);
    }
    let _ = writeln!(out);

    let warnings = report.header_warnings().count();
    let risky = report
        .enabled_methods()
        .filter(|m| is_risky(&m.method))
        .count();
    let _ = writeln!(
        out,
        "Summary: {} header warning{}, {} risky method{} enabled",
        warnings,
        if warnings == 1 { "" } else { "s" },
        risky,
        if risky == 1 { "" } else { "s" }
    );
    if report.has_probe_errors() {
        let failed = report
            .method_results
            .iter()
            .filter(|m| m.outcome == ProbeOutcome::Error)
            .count();
        let _ = writeln!(
            out,
            "{} method check{} could not be completed",
            failed,
            if failed == 1 { "" } else { "s" }
        );
    }

    out
}

fn render_header_row(out: &mut String, row: &HeaderAssessment) {
    let value = match row.value {
        Some(_) => row.display_value.normal(),
        None => row.display_value.dimmed(),
    };
    let _ = writeln!(out, "  {}: {}", row.name.bold(), value);
    for cookie in &row.cookies {
        let _ = writeln!(
            out,
            "      cookie {}: {}",
            cookie.name,
            cookie.attributes.join("; ")
        );
    }
    let _ = writeln!(out, "      {}", verdict_line(&row.verdict));
}

fn render_method_row(out: &mut String, result: &MethodProbeResult) {
    let status = result
        .status_code
        .map(|s| s.to_string())
        .unwrap_or_else(|| "-".to_string());
    let state = match result.outcome {
        ProbeOutcome::Enabled if is_risky(&result.method) => "enabled".red().bold(),
        ProbeOutcome::Enabled => "enabled".normal(),
        ProbeOutcome::Indeterminate => "enabled?".yellow(),
        ProbeOutcome::Disabled => "disabled".green(),
        ProbeOutcome::Error => "error".yellow(),
    };
    let _ = writeln!(
        out,
        "  {:<8} {:>4}  {:<9} {}",
        result.method,
        status,
        state,
        result.security_impact()
    );
}

fn verdict_line(verdict: &Verdict) -> String {
    let label = match verdict.status {
        VerdictStatus::Success => "[success]".green(),
        VerdictStatus::Warning => "[warning]".yellow(),
        VerdictStatus::Info => "[info]".blue(),
    };
    format!("{} {}", label, verdict.message)
}

fn is_risky(method: &str) -> bool {
    method.eq_ignore_ascii_case("TRACE") || method.eq_ignore_ascii_case("DEBUG")
}

/// Renders the scan log, one entry per line.
pub fn render_log(entries: &[LogEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        let kind = match entry.kind {
            LogKind::Request => "request ".blue(),
            LogKind::Response => "response".green(),
            LogKind::Error => "error   ".red(),
        };
        let _ = writeln!(
            out,
            "{} {} {}",
            entry.timestamp.format("%H:%M:%S%.3f"),
            kind,
            entry.message
        );
    }
    out
}
