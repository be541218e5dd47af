//! Content-Security-Policy analysis.

use super::Verdict;

/// Assesses a Content-Security-Policy value.
///
/// Checks run in priority order and the first failure is reported:
/// empty policy, `'unsafe-inline'` or a `*` wildcard anywhere, missing
/// `default-src`, missing `script-src`.
pub fn analyze_csp(value: &str) -> Verdict {
    if value.trim().is_empty() {
        return Verdict::warning("No CSP header found");
    }

    let directives: Vec<&str> = value.split(';').map(str::trim).collect();
    let has_unsafe_inline = directives.iter().any(|d| d.contains("'unsafe-inline'"));
    let has_wildcard = directives.iter().any(|d| d.contains('*'));
    let has_default_src = directives.iter().any(|d| d.starts_with("default-src"));
    let has_script_src = directives.iter().any(|d| d.starts_with("script-src"));

    if has_unsafe_inline || has_wildcard {
        return Verdict::warning("CSP contains unsafe directives (unsafe-inline or wildcards)");
    }
    if !has_default_src {
        return Verdict::warning("Missing default-src directive");
    }
    if !has_script_src {
        return Verdict::warning("Missing script-src directive");
    }
    Verdict::success("CSP is properly configured")
}
