//! Header analyzer dispatch.

use crate::models::HeaderSet;

use super::cookies::analyze_set_cookie;
use super::csp::analyze_csp;
use super::frame_options::analyze_x_frame_options;
use super::hsts::analyze_strict_transport_security;
use super::types::{HeaderKind, Verdict};

/// Assesses X-XSS-Protection: any value counts as present.
pub fn analyze_x_xss_protection(value: &str) -> Verdict {
    if value.trim().is_empty() {
        Verdict::warning("X-XSS-Protection header is missing")
    } else {
        Verdict::success("XSS protection is enabled")
    }
}

/// Assesses X-Content-Type-Options: only `nosniff` is accepted.
pub fn analyze_x_content_type_options(value: &str) -> Verdict {
    if value.trim().eq_ignore_ascii_case("nosniff") {
        Verdict::success("MIME-type sniffing prevention is enabled")
    } else {
        Verdict::warning("MIME-type sniffing prevention is not properly configured")
    }
}

/// Assesses Referrer-Policy: any value counts as configured.
pub fn analyze_referrer_policy(value: &str) -> Verdict {
    if value.trim().is_empty() {
        Verdict::warning("Referrer-Policy header is missing")
    } else {
        Verdict::success("Referrer policy is configured")
    }
}

impl HeaderKind {
    /// Runs this kind's analyzer.
    ///
    /// `value` is `None` when the header was not returned; it then takes the
    /// analyzer's missing-header branch. `occurrences` only matters for
    /// Strict-Transport-Security.
    pub fn analyze(&self, value: Option<&str>, occurrences: usize) -> Verdict {
        let value = value.unwrap_or_default();
        match self {
            HeaderKind::ContentSecurityPolicy => analyze_csp(value),
            HeaderKind::SetCookie => analyze_set_cookie(value),
            HeaderKind::StrictTransportSecurity => {
                analyze_strict_transport_security(value, occurrences)
            }
            HeaderKind::XFrameOptions => analyze_x_frame_options(value),
            HeaderKind::XXssProtection => analyze_x_xss_protection(value),
            HeaderKind::XContentTypeOptions => analyze_x_content_type_options(value),
            HeaderKind::ReferrerPolicy => analyze_referrer_policy(value),
            HeaderKind::Other => Verdict::info("Standard header"),
        }
    }
}

/// Analyzes one header by name.
///
/// When `all_headers` is supplied, the Strict-Transport-Security occurrence
/// count is taken from it; otherwise a present value counts as one occurrence.
/// Never panics, whatever the input.
pub fn analyze_header(name: &str, value: Option<&str>, all_headers: Option<&HeaderSet>) -> Verdict {
    let kind = HeaderKind::from_name(name);
    let occurrences = match all_headers {
        Some(headers) => headers.occurrences(name.trim()),
        None => usize::from(value.is_some_and(|v| !v.is_empty())),
    };
    kind.analyze(value, occurrences)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::security::VerdictStatus;

    #[test]
    fn test_unknown_headers_are_standard() {
        for (name, value) in [("Server", "nginx"), ("x-custom", ""), ("", "DENY")] {
            assert_eq!(
                analyze_header(name, Some(value), None),
                Verdict::info("Standard header")
            );
        }
        assert_eq!(
            analyze_header("cache-control", None, None),
            Verdict::info("Standard header")
        );
    }

    #[test]
    fn test_dispatch_is_case_insensitive() {
        let verdict = analyze_header("X-Frame-Options", Some("DENY"), None);
        assert_eq!(verdict.status, VerdictStatus::Success);
    }

    #[test]
    fn test_absent_headers_take_missing_branch() {
        assert_eq!(
            analyze_header("content-security-policy", None, None),
            Verdict::warning("No CSP header found")
        );
        assert_eq!(
            analyze_header("strict-transport-security", None, None),
            Verdict::warning("Strict-Transport-Security header is missing")
        );
        assert!(analyze_header("set-cookie", None, None).is_success());
        assert!(analyze_header("referrer-policy", None, None).is_warning());
        assert!(analyze_header("x-xss-protection", None, None).is_warning());
        assert!(analyze_header("x-content-type-options", None, None).is_warning());
    }

    #[test]
    fn test_hsts_occurrences_from_header_set() {
        let headers: HeaderSet = [
            ("Strict-Transport-Security", "max-age=600; includeSubDomains"),
            ("strict-transport-security", "max-age=600; includeSubDomains"),
        ]
        .into_iter()
        .collect();
        let verdict = analyze_header(
            "strict-transport-security",
            headers.get("strict-transport-security"),
            Some(&headers),
        );
        assert!(verdict.message.contains("exactly once"));
    }

    #[test]
    fn test_hsts_occurrences_without_header_set() {
        let verdict = analyze_header(
            "strict-transport-security",
            Some("max-age=600; includeSubDomains"),
            None,
        );
        assert!(verdict.is_success());
    }

    #[test]
    fn test_simple_analyzers() {
        assert!(analyze_x_xss_protection("0").is_success());
        assert!(analyze_x_content_type_options("NoSniff").is_success());
        assert!(analyze_x_content_type_options("sniff").is_warning());
        assert!(analyze_referrer_policy("no-referrer").is_success());
    }

    #[test]
    fn test_analyzers_are_idempotent() {
        let value = Some("default-src 'self'; script-src 'self'");
        let first = analyze_header("content-security-policy", value, None);
        let second = analyze_header("content-security-policy", value, None);
        assert_eq!(first, second);
    }
}
