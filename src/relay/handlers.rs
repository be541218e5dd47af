//! Relay request handlers.

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use log::{debug, error, info};

use crate::app::url::with_default_scheme;
use crate::config::RELAY_ALLOWED_METHODS;
use crate::error_handling::TransportError;
use crate::fetch::{ProbeRequest, RelayFailure, RelayRequestBody, Transport};

use super::types::RelayState;

const CORS_ALLOW_HEADERS: &str = "authorization, x-client-info, apikey, content-type";

/// Answers CORS preflight requests.
pub async fn preflight_handler() -> Response {
    with_cors(StatusCode::OK.into_response())
}

/// Performs the upstream request described by the JSON body.
pub async fn relay_handler(State(state): State<RelayState>, body: Bytes) -> Response {
    let request = match parse_relay_body(&body) {
        Ok(request) => request,
        Err(message) => {
            error!("Error processing relay request: {}", message);
            return failure_response(StatusCode::INTERNAL_SERVER_ERROR, message, None, None);
        }
    };

    info!("Scanning URL: {} with method: {}", request.url, request.method);

    if !method_allowed(&request.method) {
        return failure_response(
            StatusCode::BAD_REQUEST,
            format!("Method {} is not allowed", request.method),
            Some(request.method),
            None,
        );
    }

    match state.transport.send(&request).await {
        Ok(response) => {
            debug!(
                "Relayed {} {} -> {}",
                request.method, request.url, response.status
            );
            with_cors(Json(response.to_relay_success(&request.method)).into_response())
        }
        Err(err) => {
            error!("Fetch error with method {}: {}", request.method, err);
            error_response(&err, request.method)
        }
    }
}

/// Parses `{url, method}`; the method defaults to GET and the URL gets
/// `https://` when it has no http(s) scheme.
pub(crate) fn parse_relay_body(body: &[u8]) -> Result<ProbeRequest, String> {
    let parsed: RelayRequestBody =
        serde_json::from_slice(body).map_err(|e| format!("Invalid request body: {}", e))?;

    let url = parsed
        .url
        .map(|u| u.trim().to_string())
        .filter(|u| !u.is_empty())
        .ok_or_else(|| "URL is required".to_string())?;
    let method = parsed
        .method
        .map(|m| m.trim().to_ascii_uppercase())
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| "GET".to_string());

    Ok(ProbeRequest::new(with_default_scheme(&url), method))
}

pub(crate) fn method_allowed(method: &str) -> bool {
    RELAY_ALLOWED_METHODS
        .iter()
        .any(|allowed| allowed.eq_ignore_ascii_case(method))
}

/// Maps an upstream failure onto the relay's error reply.
pub(crate) fn error_response(err: &TransportError, method: String) -> Response {
    let status =
        StatusCode::from_u16(err.relay_status()).unwrap_or(StatusCode::BAD_GATEWAY);
    let is_timeout = err.is_timeout().then_some(true);
    let message = match err {
        TransportError::Timeout(message) | TransportError::Unreachable(message) => {
            message.clone()
        }
        other => other.to_string(),
    };
    failure_response(status, message, Some(method), is_timeout)
}

fn failure_response(
    status: StatusCode,
    message: impl Into<String>,
    method: Option<String>,
    is_timeout: Option<bool>,
) -> Response {
    let body = RelayFailure {
        error: true,
        message: message.into(),
        method,
        is_timeout,
    };
    with_cors((status, Json(body)).into_response())
}

fn with_cors(mut response: Response) -> Response {
    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(CORS_ALLOW_HEADERS),
    );
    response
}
