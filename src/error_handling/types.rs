//! Error type definitions.
//!
//! This module defines all error types used throughout the application.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

use crate::config::{
    HTTP_STATUS_BAD_GATEWAY, HTTP_STATUS_BAD_REQUEST, HTTP_STATUS_INTERNAL_SERVER_ERROR,
    HTTP_STATUS_REQUEST_TIMEOUT,
};

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Failure of a single request issued through a transport.
///
/// Every variant is local to one probe: a transport error never aborts the
/// other probes of a scan.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The request did not complete within the probe timeout.
    #[error("{0}")]
    Timeout(String),

    /// The target could not be reached (DNS, connect, TLS, reset).
    #[error("Failed to connect to the target server: {0}")]
    Unreachable(String),

    /// The relay refused to forward this method.
    #[error("Method not allowed by relay: {0}")]
    MethodNotAllowed(String),

    /// The method name is not a valid HTTP token.
    #[error("Invalid HTTP method: {0}")]
    InvalidMethod(String),

    /// The relay answered with an error payload or an unreadable body.
    #[error("Relay error ({status}): {message}")]
    Relay { status: u16, message: String },

    /// The identity provider could not supply a token.
    #[error("Could not obtain bearer token: {0}")]
    Auth(String),

    /// Every attempt timed out.
    #[error("Request timed out after {attempts} attempts")]
    RetriesExhausted { attempts: usize },
}

impl TransportError {
    /// Whether this failure is a timeout, the only retriable class.
    pub fn is_timeout(&self) -> bool {
        matches!(self, TransportError::Timeout(_))
    }

    /// HTTP status the relay answers with for this failure.
    pub fn relay_status(&self) -> u16 {
        match self {
            TransportError::Timeout(_) | TransportError::RetriesExhausted { .. } => {
                HTTP_STATUS_REQUEST_TIMEOUT
            }
            TransportError::Unreachable(_) => HTTP_STATUS_BAD_GATEWAY,
            TransportError::MethodNotAllowed(_) | TransportError::InvalidMethod(_) => {
                HTTP_STATUS_BAD_REQUEST
            }
            TransportError::Relay { status, .. } => *status,
            TransportError::Auth(_) => HTTP_STATUS_INTERNAL_SERVER_ERROR,
        }
    }
}

/// Errors that abort a whole scan.
#[derive(Error, Debug)]
pub enum ScanError {
    /// The target URL could not be normalized into an http(s) URL.
    #[error("Invalid target URL: {0}")]
    InvalidUrl(String),

    /// The initial header fetch failed; nothing can be assessed.
    #[error("Failed to fetch headers from {url}: {source}")]
    InitialFetch {
        url: String,
        #[source]
        source: TransportError,
    },

    /// An authenticated scan was requested but no token is available.
    #[error(transparent)]
    Auth(TransportError),

    /// A shared resource (HTTP client, logger) could not be created.
    #[error(transparent)]
    Initialization(#[from] InitializationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_timeouts_are_retriable() {
        assert!(TransportError::Timeout("Request timed out after 5 seconds".into()).is_timeout());
        assert!(!TransportError::Unreachable("dns".into()).is_timeout());
        assert!(!TransportError::MethodNotAllowed("FOO".into()).is_timeout());
        assert!(!TransportError::RetriesExhausted { attempts: 2 }.is_timeout());
    }

    #[test]
    fn test_relay_status_mapping() {
        assert_eq!(TransportError::Timeout("t".into()).relay_status(), 408);
        assert_eq!(TransportError::Unreachable("x".into()).relay_status(), 502);
        assert_eq!(TransportError::MethodNotAllowed("FOO".into()).relay_status(), 400);
        assert_eq!(
            TransportError::Relay {
                status: 500,
                message: "boom".into()
            }
            .relay_status(),
            500
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            TransportError::RetriesExhausted { attempts: 2 }.to_string(),
            "Request timed out after 2 attempts"
        );
        let err = ScanError::InitialFetch {
            url: "https://example.com".into(),
            source: TransportError::Unreachable("connection refused".into()),
        };
        assert!(err.to_string().contains("https://example.com"));
        assert!(err.to_string().contains("connection refused"));
    }
}
