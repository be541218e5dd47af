//! Aggregation of header and method verdicts into a [`ScanReport`].

use chrono::Utc;

use crate::config::{important_headers, HEADER_SET_COOKIE, NOT_SET_PLACEHOLDER};
use crate::models::HeaderSet;
use crate::probe::MethodProbeResult;
use crate::security::{analyze_header, cookie_name, split_cookies};

use super::types::{CookieDisplay, HeaderAssessment, ReportOptions, ScanReport};

/// Builds the report for one scan. Performs no I/O.
///
/// Every allow-listed header gets a row, present or not; absent ones show
/// "Not set" with the analyzer's missing-header verdict. Repeated headers are
/// shown folded with `", "` while the analyzers still see the full set.
pub fn build_report(
    url: &str,
    status: u16,
    headers: HeaderSet,
    method_results: Vec<MethodProbeResult>,
    options: ReportOptions,
) -> ScanReport {
    let allow_list = important_headers(options.include_xss_protection);

    let mut header_verdicts: Vec<HeaderAssessment> = allow_list
        .iter()
        .map(|name| assess_header(name, &headers))
        .collect();

    if options.show_all_headers {
        for name in headers.names() {
            if !allow_list.contains(&name.as_str()) {
                header_verdicts.push(assess_header(&name, &headers));
            }
        }
    }

    ScanReport {
        url: url.to_string(),
        status,
        scanned_at: Utc::now(),
        headers,
        header_verdicts,
        method_results,
    }
}

fn assess_header(name: &str, headers: &HeaderSet) -> HeaderAssessment {
    let value = headers.joined(name);
    let verdict = analyze_header(name, value.as_deref(), Some(headers));

    let cookies = match &value {
        Some(v) if name.eq_ignore_ascii_case(HEADER_SET_COOKIE) => cookie_rows(v),
        _ => Vec::new(),
    };

    HeaderAssessment {
        name: name.to_string(),
        display_value: value
            .clone()
            .unwrap_or_else(|| NOT_SET_PLACEHOLDER.to_string()),
        value,
        cookies,
        verdict,
    }
}

/// Splits a folded Set-Cookie value into display rows.
pub fn cookie_rows(value: &str) -> Vec<CookieDisplay> {
    split_cookies(value)
        .into_iter()
        .filter(|cookie| !cookie.trim().is_empty())
        .map(|cookie| CookieDisplay {
            name: cookie_name(cookie).to_string(),
            attributes: cookie
                .split(';')
                .skip(1)
                .map(str::trim)
                .filter(|attr| !attr.is_empty())
                .map(str::to_string)
                .collect(),
        })
        .collect()
}
