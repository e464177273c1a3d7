//! `hickory-resolver` backed lookups.

use std::net::IpAddr;

use async_trait::async_trait;
use hickory_resolver::TokioAsyncResolver;

use super::lookup::DnsLookup;
use crate::error_handling::{categorize_resolve_error, LookupError};

/// Production [`DnsLookup`] over an async hickory resolver.
///
/// The resolver's own timeout and attempt settings bound every query; see
/// `initialization::init_resolver` for how it is configured.
pub struct HickoryLookup {
    resolver: TokioAsyncResolver,
}

impl HickoryLookup {
    pub fn new(resolver: TokioAsyncResolver) -> Self {
        Self { resolver }
    }
}

#[async_trait]
impl DnsLookup for HickoryLookup {
    async fn resolve_host(&self, host: &str) -> Result<Vec<String>, LookupError> {
        let response = self
            .resolver
            .lookup_ip(host)
            .await
            .map_err(|e| categorize_resolve_error(host, &e))?;
        Ok(response.iter().map(|ip| ip.to_string()).collect())
    }

    async fn lookup_ptr(&self, ip: IpAddr) -> Result<Vec<String>, LookupError> {
        let response = self
            .resolver
            .reverse_lookup(ip)
            .await
            .map_err(|e| categorize_resolve_error(&ip.to_string(), &e))?;
        Ok(response.iter().map(|name| name.to_string()).collect())
    }

    async fn lookup_mx(&self, domain: &str) -> Result<Vec<String>, LookupError> {
        let response = self
            .resolver
            .mx_lookup(domain)
            .await
            .map_err(|e| categorize_resolve_error(domain, &e))?;
        Ok(response
            .iter()
            .map(|mx| mx.exchange().to_string())
            .collect())
    }
}
