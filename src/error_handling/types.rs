//! Error type definitions.
//!
//! This module defines every typed failure the checker can produce, from
//! startup problems through per-check verification mismatches.

use std::time::Duration;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

use crate::checks::CheckKind;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Failure to turn one config source into a list of entries.
///
/// Each of these is recorded against the file it came from; the run moves on
/// to the next source.
#[derive(Error, Debug)]
pub enum ConfigLoadError {
    /// The file could not be opened or read.
    #[error("cannot read file: {0}")]
    Io(#[from] std::io::Error),

    /// The file extension is not a recognized format.
    #[error("unsupported config format '{0}' (expected .json, .yaml or .yml)")]
    UnsupportedFormat(String),

    /// JSON syntax error.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML syntax error, or a merge key (`<<`) that cannot be applied.
    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Parsed YAML that has no JSON-shaped equivalent (e.g. a float mapping key).
    #[error("unsupported YAML value: {0}")]
    YamlValue(serde_json::Error),

    /// The document has no top-level `sites` key.
    #[error("document has no top-level 'sites' key")]
    MissingSites,

    /// `sites` exists but is not a sequence.
    #[error("'sites' must be a sequence of entries")]
    SitesNotSequence,
}

/// Unexpected fault while dispatching a single entry.
///
/// Caught at the entry boundary: the offending entry is reported and the
/// remaining entries still run.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// A field has the wrong shape (e.g. `host: 5`).
    #[error("malformed entry: {0}")]
    Malformed(#[from] serde_json::Error),

    /// A check was triggered but a field it needs is absent.
    #[error("{check} check requires field '{field}'")]
    MissingField {
        /// Check that needed the field
        check: CheckKind,
        /// Name of the absent field
        field: &'static str,
    },

    /// A field is present with an unusable value.
    #[error("invalid field '{field}': {reason}")]
    InvalidField {
        /// Name of the offending field
        field: &'static str,
        /// Why the value was rejected
        reason: String,
    },

    /// The task checking the entry panicked or was cancelled.
    #[error("check task failed: {0}")]
    Panicked(String),
}

/// DNS lookup failure, classified so checks can react to "no records".
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The name exists (or not) but has no records of the queried type.
    #[error("no records found for {query}")]
    NoRecords {
        /// Query that came back empty
        query: String,
    },

    /// The lookup did not complete within the deadline.
    #[error("lookup timed out after {0:?}")]
    Timeout(Duration),

    /// The address to reverse-resolve is not an IP address.
    #[error("'{0}' is not a valid IP address")]
    InvalidAddress(String),

    /// Any other resolver failure.
    #[error("{0}")]
    Resolve(String),
}

impl LookupError {
    /// Short name of the failure kind, used in recorded messages.
    pub fn kind(&self) -> &'static str {
        match self {
            LookupError::NoRecords { .. } => "NoRecords",
            LookupError::Timeout(_) => "Timeout",
            LookupError::InvalidAddress(_) => "InvalidAddress",
            LookupError::Resolve(_) => "ResolveError",
        }
    }
}

/// A verification failure produced by one of the checks.
///
/// The `Display` output is exactly what gets recorded in the run's error list.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckFailure {
    /// Forward resolution of a host failed.
    #[error("Host {host} lookup failed: {source} ({})", .source.kind())]
    HostLookupFailed {
        /// Host being resolved
        host: String,
        /// Resolver failure
        source: LookupError,
    },

    /// Resolved address set differs from the expected set.
    #[error("Host {host} expected IPs {expected:?} received {observed:?}")]
    HostMismatch {
        /// Host being resolved
        host: String,
        /// Expected addresses (sorted)
        expected: Vec<String>,
        /// Observed addresses (sorted)
        observed: Vec<String>,
    },

    /// PTR query for an address failed.
    #[error("IP {ip} reverse lookup failed: {source} ({})", .source.kind())]
    ReverseLookupFailed {
        /// Address being reverse-resolved
        ip: String,
        /// Resolver failure
        source: LookupError,
    },

    /// PTR query returned more than one answer.
    #[error("IP {ip} reverse lookup expected exactly one PTR record, received {count}")]
    ReverseAnswerCount {
        /// Address being reverse-resolved
        ip: String,
        /// Number of PTR answers
        count: usize,
    },

    /// The single PTR target differs from the expected name.
    #[error("IP {ip} reverse lookup returned '{observed}' expected '{expected}'")]
    ReverseMismatch {
        /// Address being reverse-resolved
        ip: String,
        /// PTR target without the trailing dot
        observed: String,
        /// Expected name
        expected: String,
    },

    /// The domain has no MX records.
    #[error("Domain {domain} could not find MX record")]
    MxMissing {
        /// Mail domain
        domain: String,
    },

    /// MX query failed for a reason other than "no records".
    #[error("Domain {domain} MX lookup failed: {source} ({})", .source.kind())]
    MxLookupFailed {
        /// Mail domain
        domain: String,
        /// Resolver failure
        source: LookupError,
    },

    /// Sorted MX exchange list differs from the sorted expected list.
    #[error("Domain {domain} expected MX {expected:?} received {observed:?}")]
    MxMismatch {
        /// Mail domain
        domain: String,
        /// Expected exchanges (sorted)
        expected: Vec<String>,
        /// Observed exchanges (sorted)
        observed: Vec<String>,
    },

    /// The HTTP request itself failed.
    #[error("URL {url} got an exception: {message} ({kind})")]
    UrlRequestFailed {
        /// Requested URL
        url: String,
        /// Request failure category
        kind: &'static str,
        /// Underlying error message
        message: String,
    },

    /// Response status differs from the expected status.
    #[error("URL {url} expected {expected} received {received}")]
    UrlStatusMismatch {
        /// Requested URL
        url: String,
        /// Expected status code
        expected: u16,
        /// Received status code
        received: u16,
    },

    /// An expected header is absent from the response.
    #[error("URL {url} is expected to have a header \"{header}\" but it is missing")]
    UrlHeaderMissing {
        /// Requested URL
        url: String,
        /// Header name
        header: String,
    },

    /// An expected header has a different value.
    #[error("URL {url} is expected to have header {header}={expected} but it is {received}")]
    UrlHeaderMismatch {
        /// Requested URL
        url: String,
        /// Header name
        header: String,
        /// Expected value
        expected: String,
        /// Received value
        received: String,
    },

    /// The response body does not contain the expected substring.
    #[error("URL {url} expected html_contains '{expected}' but did not receive it")]
    UrlBodyMissing {
        /// Requested URL
        url: String,
        /// Expected substring
        expected: String,
    },

    /// The body could not be read or decoded as UTF-8.
    #[error("URL {url} body could not be decoded: {message}")]
    UrlBodyUnreadable {
        /// Requested URL
        url: String,
        /// Decode failure
        message: String,
    },
}
