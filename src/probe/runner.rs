//! Probe execution: timeout, bounded retry, and logging around a transport.

use std::time::Duration;

use futures::future::join_all;
use tokio_retry::RetryIf;

use crate::app::{log_headers, ScanLog};
use crate::config::{PROBE_MAX_ATTEMPTS, PROBE_TIMEOUT, RETRY_DELAY_MS};
use crate::error_handling::{get_retry_strategy, timeout_message, TransportError};
use crate::fetch::{ProbeRequest, Transport, TransportResponse};

use super::policy::MethodProbeResult;

/// Timeout and retry budget applied to every request of a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeConfig {
    /// Per-attempt timeout
    pub timeout: Duration,
    /// Total attempts, first one included; only timeouts are retried
    pub max_attempts: usize,
    /// Pause between attempts
    pub retry_delay: Duration,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            timeout: PROBE_TIMEOUT,
            max_attempts: PROBE_MAX_ATTEMPTS,
            retry_delay: Duration::from_millis(RETRY_DELAY_MS),
        }
    }
}

/// Sends `request`, retrying only on timeout.
///
/// Each attempt is bounded by `config.timeout` regardless of what the
/// transport enforces itself. When every attempt times out the result is
/// [`TransportError::RetriesExhausted`]; any other failure is returned as-is
/// after its first occurrence.
pub async fn request_with_retry<T, L>(
    transport: &T,
    request: &ProbeRequest,
    config: &ProbeConfig,
    log: &L,
) -> Result<TransportResponse, TransportError>
where
    T: Transport + Sync,
    L: ScanLog,
{
    let attempts = config.max_attempts.max(1);
    let strategy = get_retry_strategy(attempts, config.retry_delay);

    let action = || {
        log.request(format!(
            "Making {} request to {}...",
            request.method, request.url
        ));
        async move {
            match tokio::time::timeout(config.timeout, transport.send(request)).await {
                Ok(result) => result,
                Err(_) => Err(TransportError::Timeout(timeout_message(config.timeout))),
            }
        }
    };

    let condition = |error: &TransportError| {
        if error.is_timeout() {
            log.request(format!(
                "{} request timed out, retrying...",
                request.method
            ));
            true
        } else {
            false
        }
    };

    match RetryIf::start(strategy, action, condition).await {
        Ok(response) => Ok(response),
        Err(error) if error.is_timeout() => {
            log.error(format!(
                "{} request failed after retry: Timeout",
                request.method
            ));
            Err(TransportError::RetriesExhausted { attempts })
        }
        Err(error) => {
            log.error(format!("Error with {} request: {}", request.method, error));
            Err(error)
        }
    }
}

/// Probes one method and classifies the answer.
///
/// Log order within the probe: the `Testing` line, the raw status and
/// headers, then the verdict. A failed probe logs the error and yields a
/// result with `enabled == false` and the error text set.
pub async fn check_method<T, L>(
    transport: &T,
    url: &str,
    method: &str,
    bearer_token: Option<String>,
    config: &ProbeConfig,
    log: &L,
) -> MethodProbeResult
where
    T: Transport + Sync,
    L: ScanLog,
{
    log.request(format!("Testing {} method...", method));
    let request = ProbeRequest::new(url, method).with_bearer_token(bearer_token);

    match request_with_retry(transport, &request, config, log).await {
        Ok(response) => {
            log.response(format!(
                "{} request completed with status: {}",
                method, response.status
            ));
            log_headers(log, &response.headers, &format!("{} header ", method));

            let result = MethodProbeResult::from_status(method, response.status);
            log.response(format!("{} method: {}", method, result.log_label()));
            result
        }
        Err(error) => {
            log.error(format!("Error checking {} method: {}", method, error));
            MethodProbeResult::from_error(method, &error)
        }
    }
}

/// Probes every method concurrently. Results keep the order of `methods`.
pub async fn probe_methods<T, L>(
    transport: &T,
    url: &str,
    methods: &[String],
    bearer_token: Option<&str>,
    config: &ProbeConfig,
    log: &L,
) -> Vec<MethodProbeResult>
where
    T: Transport + Sync,
    L: ScanLog,
{
    let probes = methods.iter().map(|method| {
        check_method(
            transport,
            url,
            method,
            bearer_token.map(str::to_string),
            config,
            log,
        )
    });
    join_all(probes).await
}
