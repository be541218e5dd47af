//! header_scanner library: security header and HTTP method assessment
//!
//! Fetches a target's response headers, grades the security-relevant ones
//! (CSP, Set-Cookie, HSTS, X-Frame-Options, ...) and probes whether
//! diagnostic methods such as TRACE and DEBUG are enabled.
//!
//! # Example
//!
//! ```no_run
//! use header_scanner::{Config, run_scan};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     url: Some("example.com".to_string()),
//!     ..Default::default()
//! };
//!
//! let outcome = run_scan(config).await?;
//! for result in &outcome.report.method_results {
//!     println!("{}: enabled={}", result.method, result.enabled);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

pub mod app;
pub mod auth;
pub mod config;
pub mod error_handling;
pub mod fetch;
pub mod initialization;
pub mod models;
pub mod output;
pub mod probe;
pub mod relay;
pub mod report;
pub mod security;

// Re-export public API
pub use app::{LogEntry, LogKind, MemoryLog, ScanLog};
pub use config::{Config, LogFormat, LogLevel, OutputFormat};
pub use error_handling::{ScanError, TransportError};
pub use models::HeaderSet;
pub use report::{ReportOptions, ScanReport};
pub use run::{run_scan, scan_with, ScanOutcome};

// Internal run module (contains the main scanning logic)
mod run {
    use log::info;

    use crate::app::{log_headers, normalize_target_url, LogEntry, MemoryLog, ScanLog};
    use crate::auth::{resolve_token, StaticTokenProvider};
    use crate::config::Config;
    use crate::error_handling::{InitializationError, ScanError};
    use crate::fetch::{AnyTransport, DirectTransport, ProbeRequest, RelayTransport, Transport};
    use crate::initialization::init_client;
    use crate::probe::{probe_methods, request_with_retry, ProbeConfig};
    use crate::report::{build_report, ReportOptions, ScanReport};

    /// A finished scan: the report plus the request/response log.
    #[derive(Debug, Clone)]
    pub struct ScanOutcome {
        pub report: ScanReport,
        pub log: Vec<LogEntry>,
    }

    /// Runs one scan with the provided configuration.
    ///
    /// Builds the transport (direct, or through `config.relay`), resolves the
    /// bearer token when `with_auth` is set, and delegates to [`scan_with`]
    /// with a fresh log.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid, a requested token is missing,
    /// the HTTP client cannot be built, or the initial header fetch fails.
    /// Failed method probes never fail the scan.
    pub async fn run_scan(config: Config) -> Result<ScanOutcome, ScanError> {
        let url = normalize_target_url(config.url.as_deref().unwrap_or_default())?;
        let token = resolve_token(
            &StaticTokenProvider::new(config.bearer_token.clone()),
            config.with_auth,
        )
        .map_err(ScanError::Auth)?;

        let timeout = config.probe_timeout();
        let client =
            init_client(&config.user_agent, timeout).map_err(InitializationError::from)?;
        let transport = match &config.relay {
            Some(endpoint) => {
                info!("Sending requests through relay {}", endpoint);
                AnyTransport::Relay(RelayTransport::new(client, endpoint.clone(), timeout))
            }
            None => AnyTransport::Direct(DirectTransport::new(client, timeout)),
        };

        let probe_config = ProbeConfig {
            timeout,
            max_attempts: config.max_attempts,
            ..ProbeConfig::default()
        };
        let options = ReportOptions {
            include_xss_protection: config.include_xss_protection,
            show_all_headers: config.show_all_headers,
        };

        let log = MemoryLog::new();
        let report = scan_with(
            &transport,
            &url,
            &config.normalized_methods(),
            token.as_deref(),
            &probe_config,
            options,
            &log,
        )
        .await?;

        Ok(ScanOutcome {
            report,
            log: log.entries(),
        })
    }

    /// Scans `url` through `transport`, appending to `log`.
    ///
    /// The header fetch (GET) comes first and its failure aborts the scan.
    /// Method probes then run concurrently; each failure stays in its own
    /// result.
    pub async fn scan_with<T, L>(
        transport: &T,
        url: &str,
        methods: &[String],
        bearer_token: Option<&str>,
        probe_config: &ProbeConfig,
        options: ReportOptions,
        log: &L,
    ) -> Result<ScanReport, ScanError>
    where
        T: Transport + Sync,
        L: ScanLog,
    {
        info!("Scanning {}", url);
        log.request(format!("Fetching headers from {}...", url));

        let request =
            ProbeRequest::new(url, "GET").with_bearer_token(bearer_token.map(str::to_string));
        let response = match request_with_retry(transport, &request, probe_config, log).await {
            Ok(response) => response,
            Err(source) => {
                log.error(format!("Error fetching headers: {}", source));
                return Err(ScanError::InitialFetch {
                    url: url.to_string(),
                    source,
                });
            }
        };

        log.response(format!(
            "Received response with status: {}",
            response.status
        ));
        log_headers(log, &response.headers, "");

        let method_results =
            probe_methods(transport, url, methods, bearer_token, probe_config, log).await;

        info!(
            "Scan of {} finished: {} methods probed",
            url,
            method_results.len()
        );
        Ok(build_report(
            url,
            response.status,
            response.headers,
            method_results,
            options,
        ))
    }
}
