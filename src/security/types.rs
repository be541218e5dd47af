//! Verdict and header-kind types.

use serde::Serialize;
use strum::IntoEnumIterator;
use strum_macros::EnumIter as EnumIterMacro;

use crate::config::{
    HEADER_CONTENT_SECURITY_POLICY, HEADER_REFERRER_POLICY, HEADER_SET_COOKIE,
    HEADER_STRICT_TRANSPORT_SECURITY, HEADER_X_CONTENT_TYPE_OPTIONS, HEADER_X_FRAME_OPTIONS,
    HEADER_X_XSS_PROTECTION,
};

/// Classification of a single header or method assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VerdictStatus {
    /// The header is present and correctly configured
    Success,
    /// The header is missing or misconfigured
    Warning,
    /// The header carries no security meaning for this scanner
    Info,
}

impl VerdictStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VerdictStatus::Success => "success",
            VerdictStatus::Warning => "warning",
            VerdictStatus::Info => "info",
        }
    }
}

impl std::fmt::Display for VerdictStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of analyzing one header: a status plus a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub status: VerdictStatus,
    pub message: String,
}

impl Verdict {
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(VerdictStatus::Success, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(VerdictStatus::Warning, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(VerdictStatus::Info, message)
    }

    fn new(status: VerdictStatus, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == VerdictStatus::Success
    }

    pub fn is_warning(&self) -> bool {
        self.status == VerdictStatus::Warning
    }
}

/// The closed set of headers the scanner knows how to assess.
///
/// Anything else resolves to [`HeaderKind::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum HeaderKind {
    ContentSecurityPolicy,
    SetCookie,
    StrictTransportSecurity,
    XFrameOptions,
    XXssProtection,
    XContentTypeOptions,
    ReferrerPolicy,
    Other,
}

impl HeaderKind {
    /// Resolves a header name, compared case-insensitively.
    pub fn from_name(name: &str) -> Self {
        let name = name.trim();
        HeaderKind::iter()
            .find(|kind| kind.header_name().is_some_and(|h| h.eq_ignore_ascii_case(name)))
            .unwrap_or(HeaderKind::Other)
    }

    /// Lower-cased wire name, `None` for [`HeaderKind::Other`].
    pub fn header_name(&self) -> Option<&'static str> {
        match self {
            HeaderKind::ContentSecurityPolicy => Some(HEADER_CONTENT_SECURITY_POLICY),
            HeaderKind::SetCookie => Some(HEADER_SET_COOKIE),
            HeaderKind::StrictTransportSecurity => Some(HEADER_STRICT_TRANSPORT_SECURITY),
            HeaderKind::XFrameOptions => Some(HEADER_X_FRAME_OPTIONS),
            HeaderKind::XXssProtection => Some(HEADER_X_XSS_PROTECTION),
            HeaderKind::XContentTypeOptions => Some(HEADER_X_CONTENT_TYPE_OPTIONS),
            HeaderKind::ReferrerPolicy => Some(HEADER_REFERRER_POLICY),
            HeaderKind::Other => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_is_case_insensitive() {
        assert_eq!(
            HeaderKind::from_name("Content-Security-Policy"),
            HeaderKind::ContentSecurityPolicy
        );
        assert_eq!(HeaderKind::from_name("SET-COOKIE"), HeaderKind::SetCookie);
        assert_eq!(
            HeaderKind::from_name("x-frame-options"),
            HeaderKind::XFrameOptions
        );
        assert_eq!(HeaderKind::from_name("Server"), HeaderKind::Other);
        assert_eq!(HeaderKind::from_name(""), HeaderKind::Other);
    }

    #[test]
    fn test_every_known_kind_round_trips_through_its_name() {
        for kind in HeaderKind::iter() {
            match kind.header_name() {
                Some(name) => assert_eq!(HeaderKind::from_name(name), kind),
                None => assert_eq!(kind, HeaderKind::Other),
            }
        }
    }

    #[test]
    fn test_verdict_status_serializes_lowercase() {
        let verdict = Verdict::warning("X-Frame-Options header is missing");
        let json = serde_json::to_string(&verdict).unwrap();
        assert_eq!(
            json,
            r#"{"status":"warning","message":"X-Frame-Options header is missing"}"#
        );
    }
}
