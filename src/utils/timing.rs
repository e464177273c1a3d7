//! Timing metrics for performance analysis.
//!
//! Aggregates elapsed time per check kind so a run can report where its time went.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use strum::IntoEnumIterator;

use crate::checks::CheckKind;

/// Counters for one check kind. Times are stored in microseconds.
#[derive(Debug, Default)]
struct KindTiming {
    count: AtomicU64,
    sum_micros: AtomicU64,
    max_micros: AtomicU64,
}

/// Thread-safe per-kind timing aggregation.
///
/// All kinds are initialized on creation, so recording never allocates and
/// can be shared across entry tasks behind an `Arc`.
#[derive(Debug)]
pub struct TimingStats {
    kinds: HashMap<CheckKind, KindTiming>,
}

impl Default for TimingStats {
    fn default() -> Self {
        Self::new()
    }
}

impl TimingStats {
    pub fn new() -> Self {
        let kinds = CheckKind::iter()
            .map(|kind| (kind, KindTiming::default()))
            .collect();
        Self { kinds }
    }

    /// Records one check's elapsed time.
    pub fn record(&self, kind: CheckKind, elapsed: Duration) {
        let micros = duration_to_micros(elapsed);
        if let Some(timing) = self.kinds.get(&kind) {
            timing.count.fetch_add(1, Ordering::Relaxed);
            timing.sum_micros.fetch_add(micros, Ordering::Relaxed);
            timing.max_micros.fetch_max(micros, Ordering::Relaxed);
        }
    }

    /// Number of checks of `kind` recorded so far.
    pub fn count(&self, kind: CheckKind) -> u64 {
        self.kinds
            .get(&kind)
            .map(|t| t.count.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    /// Total time spent in checks of `kind`.
    pub fn total(&self, kind: CheckKind) -> Duration {
        self.kinds
            .get(&kind)
            .map(|t| Duration::from_micros(t.sum_micros.load(Ordering::Relaxed)))
            .unwrap_or_default()
    }

    /// Mean time per check of `kind`, zero if none ran.
    pub fn average(&self, kind: CheckKind) -> Duration {
        let count = self.count(kind);
        if count == 0 {
            return Duration::ZERO;
        }
        self.total(kind) / u32::try_from(count).unwrap_or(u32::MAX)
    }

    /// Slowest single check of `kind`.
    pub fn max(&self, kind: CheckKind) -> Duration {
        self.kinds
            .get(&kind)
            .map(|t| Duration::from_micros(t.max_micros.load(Ordering::Relaxed)))
            .unwrap_or_default()
    }

    /// Logs a per-kind summary of timing statistics.
    pub fn log_summary(&self) {
        let total_checks: u64 = CheckKind::iter().map(|kind| self.count(kind)).sum();
        if total_checks == 0 {
            log::info!("No timing data collected");
            return;
        }

        log::info!("=== Timing Metrics Summary ({} checks) ===", total_checks);
        for kind in CheckKind::iter() {
            let count = self.count(kind);
            if count == 0 {
                continue;
            }
            log::info!(
                "  {:12} {:>5} checks  avg {:>6} ms  max {:>6} ms  total {:>7} ms",
                kind.to_string(),
                count,
                duration_to_ms(self.average(kind)),
                duration_to_ms(self.max(kind)),
                duration_to_ms(self.total(kind)),
            );
        }
    }
}

fn duration_to_micros(duration: Duration) -> u64 {
    u64::try_from(duration.as_micros()).unwrap_or(u64::MAX)
}

/// Converts a duration to whole milliseconds, rounding to nearest.
pub fn duration_to_ms(duration: Duration) -> u64 {
    (duration_to_micros(duration).saturating_add(500)) / 1000
}
