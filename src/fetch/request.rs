//! Outbound request description.

use serde::{Deserialize, Serialize};

/// One request to issue against the target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeRequest {
    /// Normalized target URL
    pub url: String,
    /// HTTP method name, upper-case
    pub method: String,
    /// Bearer token to attach, when the probe is authenticated
    pub bearer_token: Option<String>,
}

impl ProbeRequest {
    pub fn new(url: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method: method.into(),
            bearer_token: None,
        }
    }

    /// Attaches a bearer token; `None` leaves the request anonymous.
    pub fn with_bearer_token(mut self, token: Option<String>) -> Self {
        self.bearer_token = token;
        self
    }

    /// Applies the request's authentication to a `reqwest::RequestBuilder`.
    ///
    /// The token becomes an `Authorization: Bearer <token>` header and nothing
    /// else about the request changes.
    pub(crate) fn apply_to_request_builder(
        &self,
        builder: reqwest::RequestBuilder,
    ) -> reqwest::RequestBuilder {
        match &self.bearer_token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }
}

/// Body POSTed to the relay.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelayRequestBody {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub method: Option<String>,
}

impl From<&ProbeRequest> for RelayRequestBody {
    fn from(request: &ProbeRequest) -> Self {
        Self {
            url: Some(request.url.clone()),
            method: Some(request.method.clone()),
        }
    }
}
