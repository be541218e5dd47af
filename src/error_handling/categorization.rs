//! Error categorization and retry strategy.
//!
//! This module maps `reqwest` failures onto [`TransportError`] and builds the
//! bounded retry schedule used by method probes.

use std::time::Duration;
use tokio_retry::strategy::FixedInterval;

use super::types::TransportError;

/// Creates the retry schedule for a probe.
///
/// Yields `max_attempts - 1` delays (the first attempt is not a retry), each
/// `delay` long. `max_attempts` of 0 or 1 means no retries at all.
pub fn get_retry_strategy(max_attempts: usize, delay: Duration) -> impl Iterator<Item = Duration> {
    FixedInterval::new(delay).take(max_attempts.saturating_sub(1))
}

/// Categorizes a `reqwest::Error` into a [`TransportError`].
///
/// `timeout` is only used to word the timeout message.
pub fn categorize_reqwest_error(error: &reqwest::Error, timeout: Duration) -> TransportError {
    if error.is_timeout() {
        TransportError::Timeout(timeout_message(timeout))
    } else if error.is_builder() {
        TransportError::InvalidMethod(error.to_string())
    } else if error.is_connect() || error.is_request() {
        TransportError::Unreachable(error_chain_message(error))
    } else {
        TransportError::Unreachable(error.to_string())
    }
}

/// Message used for timed-out requests, e.g. "Request timed out after 5 seconds".
pub fn timeout_message(timeout: Duration) -> String {
    let millis = timeout.as_millis();
    if millis % 1000 == 0 {
        let secs = millis / 1000;
        format!(
            "Request timed out after {} second{}",
            secs,
            if secs == 1 { "" } else { "s" }
        )
    } else {
        format!("Request timed out after {} ms", millis)
    }
}

/// Flattens an error and its sources into one line.
fn error_chain_message(error: &(dyn std::error::Error + 'static)) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_retry_strategy_single_retry() {
        let delays: Vec<Duration> = get_retry_strategy(2, Duration::ZERO).collect();
        assert_eq!(delays, vec![Duration::ZERO]);
    }

    #[test]
    fn test_get_retry_strategy_no_retries() {
        assert_eq!(get_retry_strategy(1, Duration::ZERO).count(), 0);
        assert_eq!(get_retry_strategy(0, Duration::ZERO).count(), 0);
    }

    #[test]
    fn test_get_retry_strategy_fixed_delay() {
        let delays: Vec<Duration> =
            get_retry_strategy(4, Duration::from_millis(250)).collect();
        assert_eq!(delays.len(), 3);
        assert!(delays.iter().all(|d| *d == Duration::from_millis(250)));
    }

    #[test]
    fn test_timeout_message() {
        assert_eq!(
            timeout_message(Duration::from_millis(5000)),
            "Request timed out after 5 seconds"
        );
        assert_eq!(
            timeout_message(Duration::from_secs(1)),
            "Request timed out after 1 second"
        );
        assert_eq!(
            timeout_message(Duration::from_millis(250)),
            "Request timed out after 250 ms"
        );
    }

    #[tokio::test]
    async fn test_categorize_connect_error() {
        // Port 1 on localhost is closed on any sane test host
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(2))
            .build()
            .unwrap();
        let err = client
            .get("http://127.0.0.1:1/")
            .send()
            .await
            .expect_err("connection should be refused");
        let categorized = categorize_reqwest_error(&err, Duration::from_secs(2));
        assert!(matches!(categorized, TransportError::Unreachable(_)));
    }
}
