//! Strict-Transport-Security analysis.

use std::sync::LazyLock;

use regex::Regex;

use super::Verdict;

static MAX_AGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)max-age=\d+").expect("MAX_AGE_RE is a valid regex")
});

static INCLUDE_SUBDOMAINS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)includesubdomains").expect("INCLUDE_SUBDOMAINS_RE is a valid regex")
});

/// Assesses a Strict-Transport-Security value.
///
/// `occurrences` is how many times the header appeared in the response
/// (compared case-insensitively); anything other than exactly one is a
/// misconfiguration. Directive problems accumulate into one message joined
/// by `"; "`.
pub fn analyze_strict_transport_security(value: &str, occurrences: usize) -> Verdict {
    if value.trim().is_empty() {
        return Verdict::warning("Strict-Transport-Security header is missing");
    }

    if occurrences != 1 {
        return Verdict::warning("Strict-Transport-Security header must be present exactly once");
    }

    let mut issues: Vec<&str> = Vec::new();

    match MAX_AGE_RE.find_iter(value).count() {
        0 => issues.push("Missing max-age directive"),
        1 => {}
        _ => issues.push("Multiple max-age directives found (only one allowed)"),
    }

    match INCLUDE_SUBDOMAINS_RE.find_iter(value).count() {
        0 => issues.push("Missing includeSubDomains directive"),
        1 => {}
        _ => issues.push("Multiple includeSubDomains directives found (only one allowed)"),
    }

    if issues.is_empty() {
        Verdict::success("Strict-Transport-Security is properly configured")
    } else {
        Verdict::warning(issues.join("; "))
    }
}
