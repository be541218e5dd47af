//! Relay server data structures.

use crate::fetch::DirectTransport;

/// Shared state for the relay server
#[derive(Debug, Clone)]
pub struct RelayState {
    /// Transport used for the upstream fetch; its timeout bounds every request
    pub transport: DirectTransport,
}

impl RelayState {
    pub fn new(transport: DirectTransport) -> Self {
        Self { transport }
    }
}
