//! Shared resources for check execution.

use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};

use log::info;

use super::CheckKind;
use crate::dns::DnsLookup;
use crate::error_handling::LookupError;
use crate::utils::TimingStats;

/// Everything a check needs besides its target.
///
/// Built once per run and shared (behind `Arc`) by every entry task.
pub struct CheckContext {
    /// DNS lookups for host, reverse and MX checks
    pub resolver: Arc<dyn DnsLookup>,
    /// HTTP client for URL checks; must not follow redirects
    pub client: reqwest::Client,
    /// Upper bound for a single DNS lookup
    pub check_timeout: Duration,
    /// Per-kind elapsed time aggregation
    pub timing: Arc<TimingStats>,
}

impl CheckContext {
    pub fn new(
        resolver: Arc<dyn DnsLookup>,
        client: reqwest::Client,
        check_timeout: Duration,
    ) -> Self {
        Self {
            resolver,
            client,
            check_timeout,
            timing: Arc::new(TimingStats::new()),
        }
    }

    /// Runs a lookup, turning an overrun of `check_timeout` into `LookupError::Timeout`.
    pub(crate) async fn within_deadline<T, F>(&self, lookup: F) -> Result<T, LookupError>
    where
        F: Future<Output = Result<T, LookupError>>,
    {
        tokio::time::timeout(self.check_timeout, lookup)
            .await
            .unwrap_or_else(|_| Err(LookupError::Timeout(self.check_timeout)))
    }

    /// Logs and records how long a check took.
    pub(crate) fn finish(&self, kind: CheckKind, start: Instant) {
        let elapsed = start.elapsed();
        info!(
            "elapsed time checking {kind}: {:.3}s",
            elapsed.as_secs_f64()
        );
        self.timing.record(kind, elapsed);
    }
}
