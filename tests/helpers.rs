// Shared test helpers for building check contexts and config sources.
//
// Integration tests never touch real DNS: they run against `FakeDns`, and
// URL checks go to a local wiremock server.

use std::collections::HashMap;
use std::io::Write;
use std::net::IpAddr;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use site_monitor::initialization::init_client;
use site_monitor::{CheckContext, Config, DnsLookup, LookupError};
use tempfile::NamedTempFile;

/// Canned DNS answers; anything not configured has no records.
#[derive(Default)]
pub struct FakeDns {
    hosts: HashMap<String, Vec<String>>,
    ptrs: HashMap<IpAddr, Vec<String>>,
    mx: HashMap<String, Vec<String>>,
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn answer(
    table: Option<&Vec<String>>,
    query: impl ToString,
) -> Result<Vec<String>, LookupError> {
    table.cloned().ok_or_else(|| LookupError::NoRecords {
        query: query.to_string(),
    })
}

#[allow(dead_code)] // Not every test file uses every record type
impl FakeDns {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn host(mut self, name: &str, ips: &[&str]) -> Self {
        self.hosts.insert(name.to_string(), owned(ips));
        self
    }

    pub fn ptr(mut self, ip: &str, names: &[&str]) -> Self {
        self.ptrs
            .insert(ip.parse().expect("test IP must parse"), owned(names));
        self
    }

    pub fn mx(mut self, domain: &str, exchanges: &[&str]) -> Self {
        self.mx.insert(domain.to_string(), owned(exchanges));
        self
    }
}

#[async_trait]
impl DnsLookup for FakeDns {
    async fn resolve_host(&self, host: &str) -> Result<Vec<String>, LookupError> {
        answer(self.hosts.get(host), host)
    }

    async fn lookup_ptr(&self, ip: IpAddr) -> Result<Vec<String>, LookupError> {
        answer(self.ptrs.get(&ip), ip)
    }

    async fn lookup_mx(&self, domain: &str) -> Result<Vec<String>, LookupError> {
        answer(self.mx.get(domain), domain)
    }
}

/// A shared check context over `dns` with the production HTTP client.
pub fn context(dns: FakeDns) -> Arc<CheckContext> {
    let client = init_client(&Config {
        timeout_seconds: 5,
        ..Default::default()
    })
    .expect("Failed to build HTTP client");
    Arc::new(CheckContext::new(
        Arc::new(dns),
        client,
        Duration::from_secs(5),
    ))
}

/// Writes `contents` to a temp file ending in `suffix` (e.g. ".yaml").
pub fn write_source(suffix: &str, contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp file");
    file
}
