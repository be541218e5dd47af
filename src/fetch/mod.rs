//! Transports: how requests reach the target.
//!
//! The scanner never talks HTTP itself; it hands a [`ProbeRequest`] to a
//! [`Transport`] and receives a [`TransportResponse`] or a
//! [`TransportError`]. Two transports exist:
//! - [`DirectTransport`] fetches from this process
//! - [`RelayTransport`] forwards through a relay endpoint (see [`crate::relay`])

mod direct;
mod relay;
mod request;
mod types;

use std::future::Future;

use crate::error_handling::TransportError;

pub use direct::DirectTransport;
pub use relay::RelayTransport;
pub use request::{ProbeRequest, RelayRequestBody};
pub use types::{RelayFailure, RelaySuccess, TransportResponse};

/// Performs one HTTP request and reports status and headers.
///
/// Implementations enforce their own timeout and must not follow redirects.
pub trait Transport {
    fn send(
        &self,
        request: &ProbeRequest,
    ) -> impl Future<Output = Result<TransportResponse, TransportError>> + Send;
}

/// A transport chosen at runtime from configuration.
#[derive(Debug, Clone)]
pub enum AnyTransport {
    Direct(DirectTransport),
    Relay(RelayTransport),
}

impl Transport for AnyTransport {
    async fn send(&self, request: &ProbeRequest) -> Result<TransportResponse, TransportError> {
        match self {
            AnyTransport::Direct(transport) => transport.send(request).await,
            AnyTransport::Relay(transport) => transport.send(request).await,
        }
    }
}
