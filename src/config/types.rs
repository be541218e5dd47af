//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_PROBE_METHODS, DEFAULT_USER_AGENT, PROBE_MAX_ATTEMPTS, PROBE_TIMEOUT_MS,
    TOKEN_ENV_VAR,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Report output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored tables for a terminal
    Plain,
    /// The full report serialized as JSON
    Json,
}

/// Scanner configuration.
///
/// Parsed from the command line by the binary, or constructed programmatically
/// by library users.
///
/// # Examples
///
/// ```no_run
/// use header_scanner::Config;
///
/// let config = Config {
///     url: Some("example.com".to_string()),
///     methods: vec!["TRACE".to_string(), "DEBUG".to_string()],
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "header_scanner",
    about = "Checks a website's security headers and whether TRACE/DEBUG are enabled."
)]
pub struct Config {
    /// Target URL (https:// is assumed when no scheme is given)
    #[arg(value_parser, required_unless_present = "serve_relay")]
    pub url: Option<String>,

    /// Send requests through a relay endpoint instead of fetching directly
    #[arg(long)]
    pub relay: Option<String>,

    /// Methods to probe (comma separated)
    #[arg(long, value_delimiter = ',', default_values = DEFAULT_PROBE_METHODS)]
    pub methods: Vec<String>,

    /// Per-probe timeout in milliseconds
    #[arg(long, default_value_t = PROBE_TIMEOUT_MS)]
    pub timeout_ms: u64,

    /// Maximum attempts per probe; only timeouts are retried
    #[arg(long, default_value_t = PROBE_MAX_ATTEMPTS)]
    pub max_attempts: usize,

    /// Bearer token supplied by the identity provider
    #[arg(long, env = TOKEN_ENV_VAR, hide_env_values = true)]
    pub bearer_token: Option<String>,

    /// Attach the bearer token to every request
    #[arg(long)]
    pub with_auth: bool,

    /// Include X-XSS-Protection in the important-headers table
    #[arg(long)]
    pub include_xss_protection: bool,

    /// Also list headers outside the important-headers allow-list
    #[arg(long)]
    pub show_all_headers: bool,

    /// Report output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    pub output: OutputFormat,

    /// Print the request/response log after the report
    #[arg(long)]
    pub show_log: bool,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Run the relay server on this port instead of scanning
    #[arg(long)]
    pub serve_relay: Option<u16>,
}

impl Config {
    /// Per-probe timeout as a `Duration`.
    pub fn probe_timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Probed methods, upper-cased with blanks and duplicates removed.
    pub fn normalized_methods(&self) -> Vec<String> {
        let mut methods: Vec<String> = Vec::new();
        for method in &self.methods {
            let method = method.trim().to_ascii_uppercase();
            if !method.is_empty() && !methods.contains(&method) {
                methods.push(method);
            }
        }
        methods
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: None,
            relay: None,
            methods: DEFAULT_PROBE_METHODS.iter().map(|m| m.to_string()).collect(),
            timeout_ms: PROBE_TIMEOUT_MS,
            max_attempts: PROBE_MAX_ATTEMPTS,
            bearer_token: None,
            with_auth: false,
            include_xss_protection: false,
            show_all_headers: false,
            output: OutputFormat::Plain,
            show_log: false,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            serve_relay: None,
        }
    }
}
