//! Relay transport: requests are forwarded by a relay endpoint.
//!
//! The relay receives `{url, method}` as JSON, performs the request itself
//! and answers with either the response summary or an error payload.

use std::sync::Arc;
use std::time::Duration;

use log::debug;

use crate::config::{HTTP_STATUS_BAD_GATEWAY, HTTP_STATUS_BAD_REQUEST, HTTP_STATUS_REQUEST_TIMEOUT};
use crate::error_handling::{categorize_reqwest_error, TransportError};

use super::request::RelayRequestBody;
use super::types::{RelayFailure, RelaySuccess};
use super::{ProbeRequest, Transport, TransportResponse};

/// Sends every request through a relay endpoint.
#[derive(Debug, Clone)]
pub struct RelayTransport {
    client: Arc<reqwest::Client>,
    endpoint: String,
    timeout: Duration,
}

impl RelayTransport {
    pub fn new(client: Arc<reqwest::Client>, endpoint: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            timeout,
        }
    }
}

impl Transport for RelayTransport {
    async fn send(&self, request: &ProbeRequest) -> Result<TransportResponse, TransportError> {
        let builder = self
            .client
            .post(&self.endpoint)
            .timeout(self.timeout)
            .json(&RelayRequestBody::from(request));
        let response = request
            .apply_to_request_builder(builder)
            .send()
            .await
            .map_err(|e| categorize_reqwest_error(&e, self.timeout))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| categorize_reqwest_error(&e, self.timeout))?;
        debug!(
            "Relay answered {} for {} {}",
            status, request.method, request.url
        );

        decode_relay_reply(status, &body)
    }
}

/// Decodes a relay reply body received with HTTP status `status`.
pub(crate) fn decode_relay_reply(status: u16, body: &str) -> Result<TransportResponse, TransportError> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| TransportError::Relay {
            status,
            message: format!("Invalid relay response: {}", e),
        })?;

    let is_error = value
        .get("error")
        .and_then(serde_json::Value::as_bool)
        .unwrap_or(false);

    if is_error {
        let failure: RelayFailure =
            serde_json::from_value(value).map_err(|e| TransportError::Relay {
                status,
                message: format!("Invalid relay error payload: {}", e),
            })?;
        return Err(relay_failure_to_error(status, failure));
    }

    let success: RelaySuccess = serde_json::from_value(value).map_err(|e| TransportError::Relay {
        status,
        message: format!("Invalid relay response: {}", e),
    })?;
    Ok(success.into())
}

fn relay_failure_to_error(status: u16, failure: RelayFailure) -> TransportError {
    let message = if failure.message.is_empty() {
        "Relay error".to_string()
    } else {
        failure.message
    };

    if failure.is_timeout == Some(true) || status == HTTP_STATUS_REQUEST_TIMEOUT {
        TransportError::Timeout(message)
    } else if status == HTTP_STATUS_BAD_REQUEST {
        TransportError::MethodNotAllowed(message)
    } else if status == HTTP_STATUS_BAD_GATEWAY {
        TransportError::Unreachable(message)
    } else {
        TransportError::Relay { status, message }
    }
}
