//! Scan log: the request/response trail shown to the report consumer.
//!
//! Each scan owns a fresh sink. Probes running concurrently append to the
//! same sink, so entries from different probes may interleave; only the order
//! within one probe is meaningful.

use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::HeaderSet;
use crate::security::{cookie_name, split_cookies};

/// Kind of a log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogKind {
    Request,
    Response,
    Error,
}

/// One timestamped line of the scan log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "type")]
    pub kind: LogKind,
    pub message: String,
}

impl LogEntry {
    pub fn new(kind: LogKind, message: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            kind,
            message: message.into(),
        }
    }
}

/// Append-only sink for scan log entries.
pub trait ScanLog: Sync {
    fn append(&self, entry: LogEntry);

    /// Records an entry and mirrors it to the `log` facade.
    fn record(&self, kind: LogKind, message: impl Into<String>)
    where
        Self: Sized,
    {
        let entry = LogEntry::new(kind, message);
        match kind {
            LogKind::Error => log::warn!("{}", entry.message),
            LogKind::Request | LogKind::Response => log::debug!("{}", entry.message),
        }
        self.append(entry);
    }

    fn request(&self, message: impl Into<String>)
    where
        Self: Sized,
    {
        self.record(LogKind::Request, message);
    }

    fn response(&self, message: impl Into<String>)
    where
        Self: Sized,
    {
        self.record(LogKind::Response, message);
    }

    fn error(&self, message: impl Into<String>)
    where
        Self: Sized,
    {
        self.record(LogKind::Error, message);
    }
}

/// In-memory scan log.
#[derive(Debug, Default)]
pub struct MemoryLog {
    entries: Mutex<Vec<LogEntry>>,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every entry appended so far.
    pub fn entries(&self) -> Vec<LogEntry> {
        match self.entries.lock() {
            Ok(entries) => entries.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn len(&self) -> usize {
        match self.entries.lock() {
            Ok(entries) => entries.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ScanLog for MemoryLog {
    fn append(&self, entry: LogEntry) {
        match self.entries.lock() {
            Ok(mut entries) => entries.push(entry),
            Err(poisoned) => poisoned.into_inner().push(entry),
        }
    }
}

/// Logs every header as a `response` entry, prefixed with `prefix`.
///
/// A folded `Set-Cookie` value holding several cookies is additionally broken
/// down one cookie per line, split the same way the cookie analyzer splits it.
pub fn log_headers(log: &impl ScanLog, headers: &HeaderSet, prefix: &str) {
    for (name, value) in headers.iter() {
        log.response(format!("{}{}: {}", prefix, name, value));

        if name.eq_ignore_ascii_case("set-cookie") {
            let cookies = split_cookies(value);
            if cookies.len() > 1 {
                log.response(format!("{}Found {} cookies:", prefix, cookies.len()));
                for (i, cookie) in cookies.iter().enumerate() {
                    log.response(format!(
                        "{}  Cookie {} ({}): {}",
                        prefix,
                        i + 1,
                        cookie_name(cookie),
                        cookie.trim()
                    ));
                }
            }
        }
    }
}
