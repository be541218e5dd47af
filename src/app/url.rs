//! Target URL normalization.

use crate::error_handling::ScanError;

/// Maximum accepted URL length, matching common browser and server limits.
const MAX_URL_LENGTH: usize = 2048;

/// Normalizes user input into an absolute http(s) URL.
///
/// Surrounding whitespace is dropped and `https://` is assumed when no scheme
/// is given. The result must parse, use http or https, and name a host.
pub fn normalize_target_url(input: &str) -> Result<String, ScanError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ScanError::InvalidUrl("URL is required".to_string()));
    }

    let normalized = with_default_scheme(trimmed);
    if normalized.len() > MAX_URL_LENGTH {
        return Err(ScanError::InvalidUrl(format!(
            "URL exceeds maximum length ({} > {})",
            normalized.len(),
            MAX_URL_LENGTH
        )));
    }

    let parsed = url::Url::parse(&normalized)
        .map_err(|e| ScanError::InvalidUrl(format!("{}: {}", trimmed, e)))?;
    match parsed.scheme() {
        "http" | "https" => {}
        other => {
            return Err(ScanError::InvalidUrl(format!(
                "unsupported scheme '{}' in {}",
                other, trimmed
            )))
        }
    }
    if parsed.host_str().map_or(true, str::is_empty) {
        return Err(ScanError::InvalidUrl(format!("missing host in {}", trimmed)));
    }

    Ok(normalized)
}

/// Prefixes `https://` unless the input already starts with http:// or https://.
pub(crate) fn with_default_scheme(url: &str) -> String {
    let lower = url.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        url.to_string()
    } else {
        format!("https://{url}")
    }
}
