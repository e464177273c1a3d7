//! DNS lookups used by the host, reverse and MX checks.
//!
//! The checks talk to DNS through the [`DnsLookup`] trait. The production
//! implementation, [`HickoryLookup`], wraps an async `hickory-resolver`
//! instance; tests substitute their own static implementations.

mod lookup;
mod resolver;

// Re-export public API
pub use lookup::{strip_root_dot, DnsLookup};
pub use resolver::HickoryLookup;
