//! Bearer tokens from the identity provider.
//!
//! The scanner does not implement any login flow. An identity provider
//! supplies a token and authenticated probes attach it as
//! `Authorization: Bearer <token>`.

use crate::config::TOKEN_ENV_VAR;
use crate::error_handling::TransportError;

/// Source of bearer tokens.
pub trait TokenProvider {
    /// Returns the current token, or `None` when no identity is configured.
    fn bearer_token(&self) -> Result<Option<String>, TransportError>;
}

/// A token fixed at startup, normally `Config::bearer_token`, which clap fills
/// from `--bearer-token` or `HEADER_SCANNER_TOKEN`.
#[derive(Debug, Clone, Default)]
pub struct StaticTokenProvider {
    token: Option<String>,
}

impl StaticTokenProvider {
    pub fn new(token: Option<String>) -> Self {
        let token = token
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());
        Self { token }
    }
}

impl TokenProvider for StaticTokenProvider {
    fn bearer_token(&self) -> Result<Option<String>, TransportError> {
        Ok(self.token.clone())
    }
}

/// Resolves the token for a scan: `None` unless authentication was requested.
///
/// Asking for an authenticated scan without any token is an error rather
/// than a silent anonymous scan.
pub fn resolve_token(
    provider: &impl TokenProvider,
    with_auth: bool,
) -> Result<Option<String>, TransportError> {
    if !with_auth {
        return Ok(None);
    }
    match provider.bearer_token()? {
        Some(token) => Ok(Some(token)),
        None => Err(TransportError::Auth(format!(
            "authentication requested but no token configured (set --bearer-token or {})",
            TOKEN_ENV_VAR
        ))),
    }
}
