//! Error categorization.
//!
//! This module maps library errors onto the short kind names used in
//! recorded failure messages.

use hickory_resolver::error::{ResolveError, ResolveErrorKind};

use super::types::LookupError;

/// Categorizes a `reqwest::Error` into a short kind name.
///
/// # Arguments
///
/// * `error` - The `reqwest::Error` to categorize
///
/// # Returns
///
/// A static label such as `"timeout"` or `"connect"`.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> &'static str {
    if error.is_builder() {
        "builder"
    } else if error.is_redirect() {
        "redirect"
    } else if error.is_timeout() {
        "timeout"
    } else if error.is_connect() {
        "connect"
    } else if error.is_request() {
        "request"
    } else if error.is_body() {
        "body"
    } else if error.is_decode() {
        "decode"
    } else if error.is_status() {
        "status"
    } else {
        "other"
    }
}

/// Converts a hickory `ResolveError` into a `LookupError`.
///
/// "No records" is kept distinct because the MX and reverse checks report it
/// differently from transport failures.
pub fn categorize_resolve_error(query: &str, error: &ResolveError) -> LookupError {
    match error.kind() {
        ResolveErrorKind::NoRecordsFound { .. } => LookupError::NoRecords {
            query: query.to_string(),
        },
        ResolveErrorKind::Timeout => {
            LookupError::Timeout(std::time::Duration::from_secs(crate::config::DNS_TIMEOUT_SECS))
        }
        _ => LookupError::Resolve(error.to_string()),
    }
}
