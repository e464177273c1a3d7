//! Configuration constants.
//!
//! This module defines the constants used throughout the checker, including
//! network timeouts, well-known address presets, and recognized config file
//! extensions.

// Network operation timeouts
/// DNS query timeout in seconds
/// Most DNS queries complete in <1s, 3s fails fast on unresponsive servers
pub const DNS_TIMEOUT_SECS: u64 = 3;
/// Number of attempts the resolver makes per DNS query
pub const DNS_ATTEMPTS: usize = 2;
/// TCP connection timeout in seconds for HTTP checks
pub const TCP_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Default per-request timeout in seconds for HTTP checks
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Upper bound for `--max-concurrency`
pub const MAX_CONCURRENCY_LIMIT: usize = 256;

/// Default User-Agent string for HTTP checks.
pub const DEFAULT_USER_AGENT: &str = concat!("site_monitor/", env!("CARGO_PKG_VERSION"));

// Address presets
/// Preset name accepted in place of an `ips` list.
pub const GITHUB_PRESET: &str = "github";
/// The four GitHub Pages addresses the `github` preset expands to.
pub const GITHUB_PAGES_IPS: [&str; 4] = [
    "185.199.108.153",
    "185.199.109.153",
    "185.199.110.153",
    "185.199.111.153",
];

// Config documents
/// File extensions parsed as JSON (compared case-insensitively)
pub const JSON_EXTENSIONS: &[&str] = &["json"];
/// File extensions parsed as YAML (compared case-insensitively)
pub const YAML_EXTENSIONS: &[&str] = &["yaml", "yml"];
/// Top-level key holding the list of site entries
pub const SITES_KEY: &str = "sites";
/// Entry key that switches an entry off when falsy
pub const ENABLED_KEY: &str = "enabled";
/// YAML 1.1 words for false that stay plain strings under a YAML 1.2 parser
/// (compared case-insensitively)
pub const YAML_FALSE_WORDS: &[&str] = &["false", "no", "n", "off"];

/// Separator line logged between the run and its final summary
pub const SUMMARY_SEPARATOR: &str = "--------------------------";
