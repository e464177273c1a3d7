//! Per-check views of a site entry.
//!
//! Each accessor returns `None` when the triggering field is absent (the check
//! is skipped), and an error when the check is triggered but its inputs are
//! missing or unusable.

use std::collections::BTreeMap;

use url::Url;

use super::entry::SiteEntry;
use crate::checks::CheckKind;
use crate::error_handling::DispatchError;

/// Inputs for the forward-resolution check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostTarget {
    pub host: String,
    pub expected_ips: Vec<String>,
}

/// Inputs for the reverse-DNS check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReverseTarget {
    pub ip: String,
    pub expected_name: String,
}

/// Inputs for the MX check. `expected_exchanges` comes from the entry's `ips`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MxTarget {
    pub domain: String,
    pub expected_exchanges: Vec<String>,
}

/// Inputs for the HTTP check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlTarget {
    pub url: String,
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub html_contains: Option<String>,
}

fn missing(check: CheckKind, field: &'static str) -> DispatchError {
    DispatchError::MissingField { check, field }
}

impl SiteEntry {
    pub fn host_target(&self) -> Option<Result<HostTarget, DispatchError>> {
        let host = self.host.as_ref()?;
        Some(self.expected_values(CheckKind::Host).map(|expected_ips| HostTarget {
            host: host.clone(),
            expected_ips,
        }))
    }

    pub fn reverse_target(&self) -> Option<Result<ReverseTarget, DispatchError>> {
        let ip = self.ip.as_ref()?;
        Some(
            self.reverse
                .as_ref()
                .map(|expected| ReverseTarget {
                    ip: ip.clone(),
                    expected_name: expected.clone(),
                })
                .ok_or_else(|| missing(CheckKind::ReverseDns, "reverse")),
        )
    }

    pub fn mx_target(&self) -> Option<Result<MxTarget, DispatchError>> {
        let domain = self.mx.as_ref()?;
        Some(
            self.expected_values(CheckKind::Mx)
                .map(|expected_exchanges| MxTarget {
                    domain: domain.clone(),
                    expected_exchanges,
                }),
        )
    }

    pub fn url_target(&self) -> Option<Result<UrlTarget, DispatchError>> {
        let url = self.url.as_ref()?;
        Some(self.build_url_target(url))
    }

    /// `ips` with any preset expanded; both host and MX checks read it.
    fn expected_values(&self, check: CheckKind) -> Result<Vec<String>, DispatchError> {
        self.ips
            .as_ref()
            .ok_or_else(|| missing(check, "ips"))?
            .expand()
    }

    fn build_url_target(&self, url: &str) -> Result<UrlTarget, DispatchError> {
        validate_url(url)?;
        let status_code = self
            .status_code
            .ok_or_else(|| missing(CheckKind::Url, "status_code"))?;
        Ok(UrlTarget {
            url: url.to_string(),
            status_code,
            headers: self.headers.clone().unwrap_or_default(),
            html_contains: self.html_contains.clone(),
        })
    }
}

/// Accepts absolute `http`/`https` URLs only.
fn validate_url(raw: &str) -> Result<(), DispatchError> {
    let parsed = Url::parse(raw).map_err(|e| DispatchError::InvalidField {
        field: "url",
        reason: format!("'{raw}' is not a valid URL: {e}"),
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(DispatchError::InvalidField {
            field: "url",
            reason: format!("unsupported scheme '{other}' in '{raw}'"),
        }),
    }
}
