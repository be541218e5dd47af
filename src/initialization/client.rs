//! HTTP client initialization.

use std::sync::Arc;
use std::time::Duration;

use reqwest::ClientBuilder;

/// Initializes the client used for probing targets.
///
/// Redirects are not followed: a probe reports on the response the target
/// itself produced for the method, not on wherever it points. The relay
/// server uses the same client for its outbound fetches.
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client(
    user_agent: &str,
    timeout: Duration,
) -> Result<Arc<reqwest::Client>, reqwest::Error> {
    let client = ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(timeout)
        .user_agent(user_agent.to_string())
        .build()?;
    Ok(Arc::new(client))
}
