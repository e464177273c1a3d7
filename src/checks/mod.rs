//! Check executors.
//!
//! Four independent, stateless verifications, one per category:
//! - [`check_host`]: forward resolution compared as a set
//! - [`check_reverse_dns`]: exactly one PTR answer compared exactly
//! - [`check_mx`]: MX exchanges compared as sorted sequences
//! - [`check_url`]: one HTTP GET without redirects, then status, headers
//!   and body substring
//!
//! Each check writes zero or more messages into an [`ErrorSink`] and logs its
//! elapsed time. None of them returns an error: every failure is recorded.
//!
//! [`ErrorSink`]: crate::error_handling::ErrorSink

mod context;
mod host;
mod http;
mod mx;
mod reverse;

#[cfg(test)]
pub(crate) mod test_support;

use strum_macros::{Display, EnumIter};

// Re-export public API
pub use context::CheckContext;
pub use host::check_host;
pub use http::check_url;
pub use mx::check_mx;
pub use reverse::check_reverse_dns;

/// The check categories, in dispatch order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, Display)]
pub enum CheckKind {
    #[strum(to_string = "host")]
    Host,
    #[strum(to_string = "reverse DNS")]
    ReverseDns,
    #[strum(to_string = "MX")]
    Mx,
    #[strum(to_string = "URL")]
    Url,
}
