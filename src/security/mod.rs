//! Security header analysis.
//!
//! One pure analyzer per header family maps a raw header value to a
//! [`Verdict`]. Malformed values are never errors: they come back as
//! `warning` verdicts. Dispatch goes through the closed [`HeaderKind`]
//! enumeration; unknown headers get `{info, "Standard header"}`.

mod analysis;
mod cookies;
mod csp;
mod frame_options;
mod hsts;
mod types;

pub use analysis::{
    analyze_header, analyze_referrer_policy, analyze_x_content_type_options,
    analyze_x_xss_protection,
};
pub use cookies::{analyze_set_cookie, cookie_name, split_cookies, CookieFlags};
pub use csp::analyze_csp;
pub use frame_options::analyze_x_frame_options;
pub use hsts::analyze_strict_transport_security;
pub use types::{HeaderKind, Verdict, VerdictStatus};
