//! Assessment aggregation.
//!
//! Merges header verdicts and method probe results into the [`ScanReport`]
//! handed to the presentation layer.

mod builder;
mod types;

pub use builder::{build_report, cookie_rows};
pub use types::{CookieDisplay, HeaderAssessment, ReportOptions, ScanReport};
