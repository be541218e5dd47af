//! Shared resource setup: the HTTP client and the logger.

mod client;
mod logger;

pub use client::init_client;
pub use logger::init_logger_with;
