//! X-Frame-Options analysis.

use super::Verdict;

/// Assesses an X-Frame-Options value.
///
/// Accepted forms (case-insensitive, surrounding whitespace ignored): `DENY`,
/// `SAMEORIGIN`, and `ALLOW-FROM <origin>` with exactly one space and a single
/// token. Trailing semicolons or extra parameters are rejected.
pub fn analyze_x_frame_options(value: &str) -> Verdict {
    if value.trim().is_empty() {
        return Verdict::warning("X-Frame-Options header is missing");
    }

    let normalized = value.trim().to_ascii_uppercase();
    let valid = match normalized.as_str() {
        "DENY" | "SAMEORIGIN" => true,
        other => other
            .strip_prefix("ALLOW-FROM ")
            .is_some_and(is_single_token),
    };

    if valid {
        Verdict::success("X-Frame-Options is properly set")
    } else {
        Verdict::warning("X-Frame-Options should be set to DENY, SAMEORIGIN or 'ALLOW-FROM <url>'")
    }
}

fn is_single_token(origin: &str) -> bool {
    !origin.is_empty() && !origin.contains(';') && !origin.chars().any(char::is_whitespace)
}
