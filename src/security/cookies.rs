//! Set-Cookie analysis and cookie splitting.
//!
//! A folded `Set-Cookie` value may carry several cookies joined by commas,
//! but commas also appear inside cookie values and `Expires` dates. A comma
//! only separates two cookies when the text after it reaches an `=` before
//! any `;`, i.e. the next segment starts with a `name=` pair.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use super::Verdict;

static SECURE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(?:;|^) *secure *(?:=|;|$)").expect("SECURE_RE is a valid regex"));

static HTTP_ONLY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:;|^) *httponly *(?:=|;|$)").expect("HTTP_ONLY_RE is a valid regex")
});

const UNNAMED_COOKIE: &str = "[unnamed cookie]";

/// Splits a folded `Set-Cookie` value into individual cookie strings.
///
/// Segments are returned untrimmed, exactly as they appear between separators.
pub fn split_cookies(value: &str) -> Vec<&str> {
    let mut cookies = Vec::new();
    let mut start = 0;

    for (idx, ch) in value.char_indices() {
        if ch != ',' {
            continue;
        }
        let rest = &value[idx + 1..];
        let segment_end = rest.find(';').unwrap_or(rest.len());
        if rest[..segment_end].contains('=') {
            cookies.push(&value[start..idx]);
            start = idx + 1;
        }
    }
    cookies.push(&value[start..]);
    cookies
}

/// Name of a cookie: the text before the first `=` or `;`.
pub fn cookie_name(cookie: &str) -> &str {
    let end = cookie.find(['=', ';']).unwrap_or(cookie.len());
    let name = cookie[..end].trim();
    if name.is_empty() {
        UNNAMED_COOKIE
    } else {
        name
    }
}

/// Security flags found on one cookie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CookieFlags {
    pub name: String,
    pub secure: bool,
    pub http_only: bool,
}

impl CookieFlags {
    pub fn parse(cookie: &str) -> Self {
        Self {
            name: cookie_name(cookie).to_string(),
            secure: SECURE_RE.is_match(cookie),
            http_only: HTTP_ONLY_RE.is_match(cookie),
        }
    }
}

/// Assesses a (possibly folded) Set-Cookie value.
///
/// No header at all is acceptable. Otherwise every cookie must carry both the
/// `Secure` and the `HttpOnly` attribute; each missing flag is listed by
/// cookie name.
pub fn analyze_set_cookie(value: &str) -> Verdict {
    if value.trim().is_empty() {
        return Verdict::success("No Set-Cookie header present, which is acceptable");
    }

    let cookies: Vec<CookieFlags> = split_cookies(value)
        .into_iter()
        .filter(|segment| segment.contains('='))
        .map(|segment| CookieFlags::parse(segment.trim()))
        .collect();

    if cookies.is_empty() {
        return Verdict::success("No cookies detected in the header");
    }

    let mut issues = Vec::new();
    for cookie in &cookies {
        if !cookie.secure {
            issues.push(format!(
                "Cookie \"{}\" does not have the Secure flag",
                cookie.name
            ));
        }
        if !cookie.http_only {
            issues.push(format!(
                "Cookie \"{}\" does not have the HttpOnly flag",
                cookie.name
            ));
        }
    }

    let count = cookies.len();
    if issues.is_empty() {
        Verdict::success(format!(
            "All {} cookie{} marked as Secure and HttpOnly",
            count,
            if count == 1 { " is" } else { "s are" }
        ))
    } else {
        Verdict::warning(format!(
            "Found {} cookie{}. Issues: {}",
            count,
            if count == 1 { "" } else { "s" },
            issues.join("; ")
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_two_cookies() {
        let parts = split_cookies("a=1; Secure; HttpOnly, b=2; Secure");
        assert_eq!(parts, vec!["a=1; Secure; HttpOnly", " b=2; Secure"]);
    }

    #[test]
    fn test_split_keeps_expires_date_intact() {
        let value = "id=a3fWa; Expires=Wed, 21 Oct 2015 07:28:00 GMT; Secure, lang=en; HttpOnly";
        let parts = split_cookies(value);
        assert_eq!(parts.len(), 2);
        assert!(parts[0].contains("Wed, 21 Oct 2015"));
        assert_eq!(parts[1].trim(), "lang=en; HttpOnly");
    }

    #[test]
    fn test_split_single_cookie() {
        assert_eq!(split_cookies("sid=abc"), vec!["sid=abc"]);
        assert_eq!(split_cookies(""), vec![""]);
    }

    #[test]
    fn test_split_comma_in_value_without_following_pair() {
        // "b" after the comma never reaches an '=' before ';'
        assert_eq!(split_cookies("list=a,b; Secure"), vec!["list=a,b; Secure"]);
    }

    #[test]
    fn test_cookie_name_extraction() {
        assert_eq!(cookie_name(" sid=abc; Secure"), "sid");
        assert_eq!(cookie_name("flag; Secure"), "flag");
        assert_eq!(cookie_name("=value"), "[unnamed cookie]");
    }

    #[test]
    fn test_flags_must_be_standalone_attributes() {
        let flags = CookieFlags::parse("token=secure; path=/httponly");
        assert!(!flags.secure);
        assert!(!flags.http_only);

        let flags = CookieFlags::parse("token=x;secure;HTTPONLY");
        assert!(flags.secure);
        assert!(flags.http_only);
    }

    #[test]
    fn test_flags_allow_spaces_before_separator() {
        let flags = CookieFlags::parse("a=1; Secure ; HttpOnly ");
        assert!(flags.secure);
        assert!(flags.http_only);
        assert!(analyze_set_cookie("a=1; Secure ; HttpOnly").is_success());
    }

    #[test]
    fn test_set_cookie_one_cookie_missing_http_only() {
        let verdict = analyze_set_cookie("a=1; Secure; HttpOnly, b=2; Secure");
        assert!(verdict.is_warning());
        assert!(verdict
            .message
            .contains("Cookie \"b\" does not have the HttpOnly flag"));
        assert!(!verdict.message.contains("Cookie \"a\""));
        assert!(!verdict.message.contains("Secure flag"));
    }

    #[test]
    fn test_set_cookie_fully_flagged() {
        let verdict = analyze_set_cookie("a=1; Secure; HttpOnly");
        assert!(verdict.is_success());
        assert_eq!(verdict.message, "All 1 cookie is marked as Secure and HttpOnly");
    }

    #[test]
    fn test_set_cookie_absent_is_acceptable() {
        let verdict = analyze_set_cookie("");
        assert!(verdict.is_success());
        assert!(verdict.message.contains("acceptable"));
    }

    #[test]
    fn test_set_cookie_reports_both_flags_per_cookie() {
        let verdict = analyze_set_cookie("sid=1");
        assert_eq!(
            verdict.message,
            "Found 1 cookie. Issues: Cookie \"sid\" does not have the Secure flag; \
             Cookie \"sid\" does not have the HttpOnly flag"
        );
    }

    #[test]
    fn test_set_cookie_without_pairs() {
        let verdict = analyze_set_cookie("garbage");
        assert_eq!(verdict, Verdict::success("No cookies detected in the header"));
    }
}
