//! Direct transport: requests go straight from this process to the target.

use std::sync::Arc;
use std::time::Duration;

use log::debug;
use reqwest::Method;

use crate::error_handling::{categorize_reqwest_error, TransportError};
use crate::models::HeaderSet;

use super::{ProbeRequest, Transport, TransportResponse};

/// Issues requests with a shared `reqwest::Client`.
///
/// The client must be built with redirects disabled (see
/// [`crate::initialization::init_client`]) so 3xx answers are observed as-is.
#[derive(Debug, Clone)]
pub struct DirectTransport {
    client: Arc<reqwest::Client>,
    timeout: Duration,
}

impl DirectTransport {
    pub fn new(client: Arc<reqwest::Client>, timeout: Duration) -> Self {
        Self { client, timeout }
    }
}

impl Transport for DirectTransport {
    async fn send(&self, request: &ProbeRequest) -> Result<TransportResponse, TransportError> {
        let method = Method::from_bytes(request.method.as_bytes())
            .map_err(|_| TransportError::InvalidMethod(request.method.clone()))?;

        let builder = self
            .client
            .request(method, &request.url)
            .timeout(self.timeout);
        let response = request
            .apply_to_request_builder(builder)
            .send()
            .await
            .map_err(|e| categorize_reqwest_error(&e, self.timeout))?;

        let status = response.status();
        debug!(
            "{} {} -> {}",
            request.method,
            request.url,
            status.as_u16()
        );

        Ok(TransportResponse {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            headers: HeaderSet::from(response.headers()),
            url: response.url().to_string(),
            // Redirects are never followed, so the final URL is the requested one
            redirected: false,
            ok: status.is_success(),
        })
    }
}
