//! End-to-end scans against a mock HTTP server.
//!
//! These tests drive `run_scan()` the way the binary does, with `httptest`
//! standing in for the target. No real network access is needed.

use std::time::Duration;

use httptest::{all_of, matchers::*, responders::*, Expectation, Server};

use header_scanner::probe::ProbeOutcome;
use header_scanner::security::VerdictStatus;
use header_scanner::{run_scan, Config, LogKind, ScanError, TransportError};

fn config_for(server: &Server) -> Config {
    Config {
        url: Some(format!("http://{}/", server.addr())),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_full_scan_against_mock_server() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/")).respond_with(
            status_code(200)
                .append_header("X-Frame-Options", "SAMEORIGIN")
                .append_header(
                    "Strict-Transport-Security",
                    "max-age=31536000; includeSubDomains",
                )
                .append_header("Set-Cookie", "sid=abc; Secure; HttpOnly")
                .append_header("X-Content-Type-Options", "nosniff"),
        ),
    );
    server.expect(
        Expectation::matching(request::method_path("TRACE", "/"))
            .respond_with(status_code(405)),
    );
    server.expect(
        Expectation::matching(request::method_path("OPTIONS", "/"))
            .respond_with(status_code(204).append_header("Allow", "GET, HEAD, OPTIONS")),
    );
    server.expect(
        Expectation::matching(request::method_path("HEAD", "/")).respond_with(status_code(200)),
    );
    server.expect(
        Expectation::matching(request::method_path("DEBUG", "/")).respond_with(status_code(200)),
    );

    let outcome = run_scan(config_for(&server)).await.expect("scan succeeds");
    let report = &outcome.report;

    assert_eq!(report.status, 200);
    assert_eq!(report.header_verdicts.len(), 6);

    let verdict_of = |name: &str| {
        report
            .header_verdicts
            .iter()
            .find(|h| h.name == name)
            .unwrap_or_else(|| panic!("missing row {}", name))
    };
    assert_eq!(verdict_of("x-frame-options").verdict.status, VerdictStatus::Success);
    assert_eq!(
        verdict_of("strict-transport-security").verdict.status,
        VerdictStatus::Success
    );
    assert_eq!(verdict_of("set-cookie").verdict.status, VerdictStatus::Success);
    assert_eq!(
        verdict_of("x-content-type-options").verdict.status,
        VerdictStatus::Success
    );
    assert_eq!(verdict_of("content-security-policy").display_value, "Not set");
    assert_eq!(verdict_of("referrer-policy").verdict.status, VerdictStatus::Warning);

    let trace = report.method("TRACE").unwrap();
    assert_eq!(trace.status_code, Some(405));
    assert!(!trace.enabled);
    assert_eq!(trace.outcome, ProbeOutcome::Disabled);

    let debug = report.method("DEBUG").unwrap();
    assert!(debug.enabled);
    assert_eq!(debug.outcome, ProbeOutcome::Enabled);

    assert!(report.method("OPTIONS").unwrap().enabled);
    assert!(report.method("HEAD").unwrap().enabled);

    assert!(outcome
        .log
        .iter()
        .any(|e| e.kind == LogKind::Response && e.message == "DEBUG method: ENABLED (danger: 200 status code returned)"));
    assert!(outcome
        .log
        .iter()
        .any(|e| e.message == "TRACE method: NOT ALLOWED (secure)"));
}

#[tokio::test]
async fn test_debug_non_200_is_disabled_and_other_statuses_enable_trace() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/")).respond_with(status_code(200)),
    );
    server.expect(
        Expectation::matching(request::method_path("TRACE", "/")).respond_with(status_code(404)),
    );
    server.expect(
        Expectation::matching(request::method_path("DEBUG", "/")).respond_with(status_code(404)),
    );

    let config = Config {
        methods: vec!["TRACE".to_string(), "DEBUG".to_string()],
        ..config_for(&server)
    };
    let outcome = run_scan(config).await.expect("scan succeeds");

    assert!(outcome.report.method("TRACE").unwrap().enabled);
    assert!(!outcome.report.method("DEBUG").unwrap().enabled);
}

#[tokio::test]
async fn test_authenticated_scan_sends_bearer_token() {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/"),
            request::headers(contains(("authorization", "Bearer s3cret"))),
        ])
        .respond_with(status_code(200)),
    );
    server.expect(
        Expectation::matching(all_of![
            request::method_path("TRACE", "/"),
            request::headers(contains(("authorization", "Bearer s3cret"))),
        ])
        .respond_with(status_code(405)),
    );

    let config = Config {
        methods: vec!["TRACE".to_string()],
        bearer_token: Some("s3cret".to_string()),
        with_auth: true,
        ..config_for(&server)
    };
    let outcome = run_scan(config).await.expect("scan succeeds");
    assert!(!outcome.report.method("TRACE").unwrap().enabled);
}

#[tokio::test]
async fn test_auth_without_token_fails_before_any_request() {
    let config = Config {
        url: Some("http://127.0.0.1:1/".to_string()),
        with_auth: true,
        bearer_token: None,
        ..Default::default()
    };
    let err = run_scan(config).await.unwrap_err();
    assert!(matches!(err, ScanError::Auth(TransportError::Auth(_))));
}

#[tokio::test]
async fn test_initial_fetch_failure_aborts_scan() {
    let config = Config {
        url: Some("http://127.0.0.1:1/".to_string()),
        max_attempts: 1,
        ..Default::default()
    };
    let err = run_scan(config).await.unwrap_err();
    assert!(matches!(err, ScanError::InitialFetch { .. }));
}

#[tokio::test]
async fn test_invalid_url_is_rejected() {
    let config = Config {
        url: Some("ftp://example.com".to_string()),
        ..Default::default()
    };
    let err = run_scan(config).await.unwrap_err();
    assert!(matches!(err, ScanError::InvalidUrl(_)));
}

#[tokio::test]
async fn test_timed_out_probe_is_retried_once_then_reported() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/")).respond_with(status_code(200)),
    );
    server.expect(
        Expectation::matching(request::method_path("TRACE", "/"))
            .times(2)
            .respond_with(delay_and_then(Duration::from_secs(2), status_code(200))),
    );

    let config = Config {
        methods: vec!["TRACE".to_string()],
        timeout_ms: 200,
        max_attempts: 2,
        ..config_for(&server)
    };
    let outcome = run_scan(config).await.expect("scan succeeds");

    let trace = outcome.report.method("TRACE").unwrap();
    assert!(!trace.enabled);
    assert_eq!(trace.outcome, ProbeOutcome::Error);
    assert_eq!(
        trace.error.as_deref(),
        Some("Request timed out after 2 attempts")
    );
    assert!(outcome
        .log
        .iter()
        .any(|e| e.kind == LogKind::Error && e.message == "TRACE request failed after retry: Timeout"));
}

#[tokio::test]
async fn test_hanging_methods_run_concurrently_and_fail_independently() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/")).respond_with(status_code(200)),
    );
    for method in ["TRACE", "OPTIONS", "HEAD"] {
        server.expect(
            Expectation::matching(request::method_path(method, "/"))
                .times(2)
                .respond_with(delay_and_then(Duration::from_secs(3), status_code(200))),
        );
    }
    server.expect(
        Expectation::matching(request::method_path("DEBUG", "/")).respond_with(status_code(200)),
    );

    let timeout = Duration::from_millis(400);
    let max_attempts = 2;
    let config = Config {
        methods: vec![
            "TRACE".to_string(),
            "OPTIONS".to_string(),
            "HEAD".to_string(),
            "DEBUG".to_string(),
        ],
        timeout_ms: timeout.as_millis() as u64,
        max_attempts,
        ..config_for(&server)
    };

    let started = std::time::Instant::now();
    let outcome = run_scan(config).await.expect("scan succeeds");
    let elapsed = started.elapsed();

    let debug = outcome.report.method("DEBUG").unwrap();
    assert_eq!(debug.outcome, ProbeOutcome::Enabled);
    assert_eq!(debug.status_code, Some(200));

    for method in ["TRACE", "OPTIONS", "HEAD"] {
        let result = outcome.report.method(method).unwrap();
        assert_eq!(result.outcome, ProbeOutcome::Error, "{}", method);
        assert!(!result.enabled);
        assert_eq!(
            result.error.as_deref(),
            Some("Request timed out after 2 attempts")
        );
    }

    // Three hanging methods one after another would need 3 * 800 ms
    let one_method_budget = timeout * max_attempts as u32;
    assert!(
        elapsed < one_method_budget * 2,
        "scan took {:?}, methods were not checked concurrently",
        elapsed
    );
}

#[tokio::test]
async fn test_redirects_are_not_followed() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/")).respond_with(
            status_code(301)
                .append_header("Location", "/elsewhere")
                .append_header("X-Frame-Options", "DENY"),
        ),
    );

    let config = Config {
        methods: Vec::new(),
        ..config_for(&server)
    };
    let outcome = run_scan(config).await.expect("scan succeeds");
    assert_eq!(outcome.report.status, 301);
    assert!(outcome.report.headers.contains("x-frame-options"));
    assert!(outcome.report.method_results.is_empty());
}
