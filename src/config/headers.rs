//! HTTP header name constants.
//!
//! This module defines constants for the security headers the scanner
//! assesses and the allow-list of headers that always appear in a report.

// Security header names (lower-case, as compared by the analyzers)
/// Content Security Policy header
pub const HEADER_CONTENT_SECURITY_POLICY: &str = "content-security-policy";
/// Set-Cookie header
pub const HEADER_SET_COOKIE: &str = "set-cookie";
/// HTTP Strict Transport Security header
pub const HEADER_STRICT_TRANSPORT_SECURITY: &str = "strict-transport-security";
/// X-Frame-Options header
pub const HEADER_X_FRAME_OPTIONS: &str = "x-frame-options";
/// X-Content-Type-Options header
pub const HEADER_X_CONTENT_TYPE_OPTIONS: &str = "x-content-type-options";
/// Referrer-Policy header
pub const HEADER_REFERRER_POLICY: &str = "referrer-policy";
/// X-XSS-Protection header
pub const HEADER_X_XSS_PROTECTION: &str = "x-xss-protection";

/// Headers always shown in a report, whether or not the server returned them.
/// To add/remove headers, modify this array.
pub const IMPORTANT_HEADERS: &[&str] = &[
    HEADER_CONTENT_SECURITY_POLICY,
    HEADER_SET_COOKIE,
    HEADER_STRICT_TRANSPORT_SECURITY,
    HEADER_X_FRAME_OPTIONS,
    HEADER_X_CONTENT_TYPE_OPTIONS,
    HEADER_REFERRER_POLICY,
];

/// Returns the important-headers allow-list, optionally extended with X-XSS-Protection.
pub fn important_headers(include_xss_protection: bool) -> Vec<&'static str> {
    let mut headers = IMPORTANT_HEADERS.to_vec();
    if include_xss_protection {
        headers.push(HEADER_X_XSS_PROTECTION);
    }
    headers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_important_headers_default() {
        let headers = important_headers(false);
        assert_eq!(headers.len(), 6);
        assert!(!headers.contains(&HEADER_X_XSS_PROTECTION));
    }

    #[test]
    fn test_important_headers_with_xss_protection() {
        let headers = important_headers(true);
        assert_eq!(headers.len(), 7);
        assert_eq!(headers.last(), Some(&HEADER_X_XSS_PROTECTION));
    }

    #[test]
    fn test_header_constants_are_lowercase() {
        for header in important_headers(true) {
            assert_eq!(header, header.to_ascii_lowercase());
        }
    }
}
