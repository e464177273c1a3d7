//! Test doubles for check execution.

use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use super::CheckContext;
use crate::dns::DnsLookup;
use crate::error_handling::LookupError;
use crate::initialization::init_client;

/// A [`DnsLookup`] with canned answers. Anything not configured has no records.
#[derive(Default)]
pub struct StaticLookup {
    hosts: HashMap<String, Result<Vec<String>, LookupError>>,
    ptrs: HashMap<IpAddr, Result<Vec<String>, LookupError>>,
    mx: HashMap<String, Result<Vec<String>, LookupError>>,
    delay: Option<Duration>,
    host_delays: HashMap<String, Duration>,
    answer_log: Option<Arc<Mutex<Vec<String>>>>,
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn no_records(query: &str) -> LookupError {
    LookupError::NoRecords {
        query: query.to_string(),
    }
}

impl StaticLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn host(mut self, name: &str, ips: &[&str]) -> Self {
        self.hosts.insert(name.to_string(), Ok(owned(ips)));
        self
    }

    pub fn host_error(mut self, name: &str, error: LookupError) -> Self {
        self.hosts.insert(name.to_string(), Err(error));
        self
    }

    pub fn ptr(mut self, ip: &str, names: &[&str]) -> Self {
        self.ptrs
            .insert(ip.parse().expect("test IP must parse"), Ok(owned(names)));
        self
    }

    pub fn mx(mut self, domain: &str, exchanges: &[&str]) -> Self {
        self.mx.insert(domain.to_string(), Ok(owned(exchanges)));
        self
    }

    pub fn mx_error(mut self, domain: &str, error: LookupError) -> Self {
        self.mx.insert(domain.to_string(), Err(error));
        self
    }

    /// Makes every lookup sleep before answering.
    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Makes forward lookups of `name` alone sleep before answering.
    pub fn slow_host(mut self, name: &str, delay: Duration) -> Self {
        self.host_delays.insert(name.to_string(), delay);
        self
    }

    /// Appends each forward-lookup name to `log` as its answer is returned.
    pub fn log_answers(mut self, log: Arc<Mutex<Vec<String>>>) -> Self {
        self.answer_log = Some(log);
        self
    }

    async fn pause(&self) {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
    }
}

#[async_trait]
impl DnsLookup for StaticLookup {
    async fn resolve_host(&self, host: &str) -> Result<Vec<String>, LookupError> {
        self.pause().await;
        if let Some(delay) = self.host_delays.get(host) {
            tokio::time::sleep(*delay).await;
        }
        if let Some(log) = &self.answer_log {
            log.lock().expect("answer log lock").push(host.to_string());
        }
        self.hosts
            .get(host)
            .cloned()
            .unwrap_or_else(|| Err(no_records(host)))
    }

    async fn lookup_ptr(&self, ip: IpAddr) -> Result<Vec<String>, LookupError> {
        self.pause().await;
        self.ptrs
            .get(&ip)
            .cloned()
            .unwrap_or_else(|| Err(no_records(&ip.to_string())))
    }

    async fn lookup_mx(&self, domain: &str) -> Result<Vec<String>, LookupError> {
        self.pause().await;
        self.mx
            .get(domain)
            .cloned()
            .unwrap_or_else(|| Err(no_records(domain)))
    }
}

/// A context over `lookup` with a real (redirect-free) HTTP client.
pub fn context_with(lookup: StaticLookup, check_timeout: Duration) -> CheckContext {
    let client = init_client(&crate::Config {
        timeout_seconds: 5,
        ..Default::default()
    })
    .expect("test HTTP client should build");
    CheckContext::new(Arc::new(lookup), client, check_timeout)
}

pub fn context(lookup: StaticLookup) -> CheckContext {
    context_with(lookup, Duration::from_secs(5))
}
