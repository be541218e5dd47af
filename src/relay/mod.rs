//! Relay server.
//!
//! Performs requests on behalf of a [`crate::fetch::RelayTransport`]:
//! `POST /` with `{url, method}` answers with the upstream status and
//! headers, or with an error payload:
//! - missing URL or unreadable body: 500
//! - method outside the allow-list: 400
//! - upstream timeout: 408 with `isTimeout: true`
//! - other upstream failures: 502
//!
//! Redirects are not followed. Every reply carries permissive CORS headers.

mod handlers;
mod types;

use axum::routing::post;
use axum::Router;

use handlers::{preflight_handler, relay_handler};
pub use types::RelayState;

/// Builds the relay router.
pub fn relay_router(state: RelayState) -> Router {
    Router::new()
        .route("/", post(relay_handler).options(preflight_handler))
        .with_state(state)
}

/// Creates and starts the relay server
pub async fn start_relay_server(port: u16, state: RelayState) -> Result<(), anyhow::Error> {
    let app = relay_router(state);

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind relay server to port {}: {}", port, e))?;

    log::info!("Relay server listening on http://127.0.0.1:{}/", port);

    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Relay server error: {}", e))?;

    Ok(())
}
