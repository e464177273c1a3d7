//! DNS resolver initialization.
//!
//! This module provides functions to initialize the DNS resolver with proper
//! timeout configuration.

use std::sync::Arc;
use std::time::Duration;

use hickory_resolver::config::{LookupIpStrategy, ResolverConfig, ResolverOpts};
use hickory_resolver::TokioAsyncResolver;

use crate::config::{DNS_ATTEMPTS, DNS_TIMEOUT_SECS};
use crate::dns::HickoryLookup;

/// Initializes the DNS resolver used by the host, reverse and MX checks.
///
/// Uses the host system configuration (e.g. `/etc/resolv.conf`) so results
/// match what the machine itself resolves. Falls back to hickory's default
/// upstream set when the system configuration cannot be read.
///
/// Forward lookups are IPv4-only and every query is bounded by
/// `DNS_TIMEOUT_SECS` per attempt.
pub fn init_resolver() -> Arc<HickoryLookup> {
    let (config, mut opts) = match hickory_resolver::system_conf::read_system_conf() {
        Ok(system) => system,
        Err(e) => {
            log::warn!("Failed to read system DNS configuration ({e}); using default resolvers");
            (ResolverConfig::default(), ResolverOpts::default())
        }
    };

    opts.timeout = Duration::from_secs(DNS_TIMEOUT_SECS);
    opts.attempts = DNS_ATTEMPTS;
    opts.ip_strategy = LookupIpStrategy::Ipv4Only;

    Arc::new(HickoryLookup::new(TokioAsyncResolver::tokio(config, opts)))
}
