//! Site descriptors.
//!
//! A config document is a list of sparse [`SiteEntry`] records. Each entry
//! can trigger up to four checks; the per-check inputs are extracted as
//! typed targets so the checks never look at the raw document.

mod entry;
mod targets;

// Re-export public API
pub use entry::{AddressList, SiteEntry};
pub use targets::{HostTarget, MxTarget, ReverseTarget, UrlTarget};
