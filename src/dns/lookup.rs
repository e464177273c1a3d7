//! The DNS lookup seam.

use std::net::IpAddr;

use async_trait::async_trait;

use crate::error_handling::LookupError;

/// Record lookups needed by the checks.
///
/// Implementations return names exactly as the resolver produced them; callers
/// normalize the trailing root dot with [`strip_root_dot`].
#[async_trait]
pub trait DnsLookup: Send + Sync {
    /// IPv4 addresses of `host`, as dotted-quad strings.
    async fn resolve_host(&self, host: &str) -> Result<Vec<String>, LookupError>;

    /// PTR targets of the reverse name for `ip`.
    async fn lookup_ptr(&self, ip: IpAddr) -> Result<Vec<String>, LookupError>;

    /// Exchange hostnames of the MX records of `domain`.
    async fn lookup_mx(&self, domain: &str) -> Result<Vec<String>, LookupError>;
}

/// Removes one trailing root-domain dot, if present.
pub fn strip_root_dot(name: &str) -> &str {
    name.strip_suffix('.').unwrap_or(name)
}
