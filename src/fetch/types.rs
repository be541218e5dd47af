//! Transport response types and the relay wire format.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::HeaderSet;

/// What a transport reports back for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub status_text: String,
    pub headers: HeaderSet,
    pub url: String,
    pub redirected: bool,
    pub ok: bool,
}

/// Successful relay reply.
///
/// Headers are a JSON object, so repeated headers arrive folded into one
/// comma-joined value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RelaySuccess {
    pub status: u16,
    #[serde(default)]
    pub status_text: String,
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub redirected: bool,
    #[serde(default)]
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
}

/// Relay error reply.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RelayFailure {
    pub error: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_timeout: Option<bool>,
}

impl From<RelaySuccess> for TransportResponse {
    fn from(reply: RelaySuccess) -> Self {
        Self {
            status: reply.status,
            status_text: reply.status_text,
            headers: reply.headers.into_iter().collect(),
            url: reply.url,
            redirected: reply.redirected,
            ok: reply.ok,
        }
    }
}

impl TransportResponse {
    /// Folds the response into the relay's JSON reply.
    pub fn to_relay_success(&self, method: &str) -> RelaySuccess {
        let mut headers: BTreeMap<String, String> = BTreeMap::new();
        for name in self.headers.names() {
            if let Some(value) = self.headers.joined(&name) {
                headers.insert(name, value);
            }
        }
        RelaySuccess {
            status: self.status,
            status_text: self.status_text.clone(),
            headers,
            url: self.url.clone(),
            redirected: self.redirected,
            ok: self.ok,
            method: Some(method.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relay_success_uses_camel_case() {
        let json = r#"{"status":200,"statusText":"OK","headers":{"x-frame-options":"DENY"},
                      "url":"https://example.com/","redirected":false,"ok":true}"#;
        let reply: RelaySuccess = serde_json::from_str(json).unwrap();
        let response = TransportResponse::from(reply);
        assert_eq!(response.status, 200);
        assert_eq!(response.status_text, "OK");
        assert_eq!(response.headers.get("X-Frame-Options"), Some("DENY"));
        assert!(response.ok);
    }

    #[test]
    fn test_relay_failure_timeout_flag() {
        let json = r#"{"error":true,"message":"Request timed out after 5 seconds","isTimeout":true}"#;
        let reply: RelayFailure = serde_json::from_str(json).unwrap();
        assert!(reply.error);
        assert_eq!(reply.is_timeout, Some(true));
    }

    #[test]
    fn test_to_relay_success_folds_repeated_headers() {
        let response = TransportResponse {
            status: 200,
            status_text: "OK".into(),
            headers: [("Set-Cookie", "a=1"), ("set-cookie", "b=2")]
                .into_iter()
                .collect(),
            url: "https://example.com/".into(),
            redirected: false,
            ok: true,
        };
        let reply = response.to_relay_success("GET");
        assert_eq!(reply.headers.get("set-cookie").map(String::as_str), Some("a=1, b=2"));
        assert_eq!(reply.method.as_deref(), Some("GET"));
    }
}
