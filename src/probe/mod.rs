//! HTTP method probing.
//!
//! - [`policy`] decides what a status code means for a method
//! - [`runner`] issues the probes with timeout, retry, and logging

pub mod policy;
mod runner;

pub use policy::{classify, method_enabled, MethodProbeResult, ProbeOutcome};
pub use runner::{check_method, probe_methods, request_with_retry, ProbeConfig};
