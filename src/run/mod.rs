//! Run orchestration.
//!
//! Sources are processed one after another in the order given. Within a
//! source, entries are dispatched as independent tasks, at most
//! `max_concurrency` at a time, and their results are merged back in document
//! order. Nothing short of a startup failure stops the run.

mod load;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use futures::stream::{self, StreamExt};
use log::{error, info};

use crate::checks::CheckContext;
use crate::config::{Config, SUMMARY_SEPARATOR};
use crate::dispatch::{dispatch_isolated, EntryOutcome};
use crate::error_handling::ErrorSink;
use crate::initialization::{init_client, init_resolver};

pub use load::{load_source, parse_document, SourceFormat};

/// Results of a run.
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    /// Every recorded failure message, in recording order
    pub errors: Vec<String>,
    /// Sources that loaded successfully
    pub sources_processed: usize,
    /// Sources that could not be loaded
    pub sources_failed: usize,
    /// Entries whose checks ran (whether or not they passed)
    pub entries_checked: usize,
    /// Entries switched off by a falsy `enabled`
    pub entries_skipped: usize,
    /// Entries that could not be dispatched
    pub entries_failed: usize,
    /// Wall-clock time for the whole run
    pub elapsed: Duration,
}

impl RunReport {
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }

    /// Process exit status: 0 if nothing was recorded, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.is_success() {
            0
        } else {
            1
        }
    }
}

/// Runs all checks described by `config.files`.
///
/// Builds the shared resolver and HTTP client, processes every source, and
/// logs the timing summary when `show_timing` is set.
///
/// # Errors
///
/// Returns an error only for invalid configuration or when the HTTP client
/// cannot be built. Check failures are reported in the returned
/// [`RunReport`], never as an error.
pub async fn run_checks(config: Config) -> Result<RunReport> {
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid configuration: {e}"))?;

    let client = init_client(&config).context("Failed to initialize HTTP client")?;
    let resolver = init_resolver();
    let ctx = Arc::new(CheckContext::new(
        resolver,
        client,
        Duration::from_secs(config.timeout_seconds),
    ));

    let report = run_sources(&config.files, Arc::clone(&ctx), config.max_concurrency).await;

    if config.show_timing {
        ctx.timing.log_summary();
    }
    Ok(report)
}

/// Processes each source in order and returns the combined report.
///
/// A source that fails to load records one error and the run moves on to the
/// next source. The final summary is logged before returning: either every
/// recorded error again, or a single all-clear line.
pub async fn run_sources(
    files: &[PathBuf],
    ctx: Arc<CheckContext>,
    max_concurrency: usize,
) -> RunReport {
    let start = Instant::now();
    let mut sink = ErrorSink::new();
    let mut report = RunReport::default();

    for file in files {
        info!("Processing {}", file.display());
        let file_start = Instant::now();

        let entries = match load_source(file).await {
            Ok(entries) => entries,
            Err(e) => {
                sink.record(format!(
                    "Failed to load config file {}: {e}",
                    file.display()
                ));
                report.sources_failed += 1;
                continue;
            }
        };
        report.sources_processed += 1;

        let source: Arc<str> = Arc::from(file.display().to_string());
        let entry_count = entries.len();
        let mut results = stream::iter(entries)
            .map(|raw| dispatch_isolated(raw, Arc::clone(&ctx), Arc::clone(&source)))
            .buffered(max_concurrency.max(1));

        while let Some(entry) = results.next().await {
            match entry.outcome {
                EntryOutcome::Skipped => report.entries_skipped += 1,
                EntryOutcome::Checked { .. } => report.entries_checked += 1,
                EntryOutcome::Failed => report.entries_failed += 1,
            }
            sink.absorb(entry.errors);
        }

        info!(
            "Finished {} ({} entries) in {:.3}s",
            file.display(),
            entry_count,
            file_start.elapsed().as_secs_f64()
        );
    }

    report.elapsed = start.elapsed();
    info!("Total elapsed time: {:.3}s", report.elapsed.as_secs_f64());
    info!("{SUMMARY_SEPARATOR}");

    if sink.has_errors() {
        for message in sink.all() {
            error!("{message}");
        }
    } else {
        info!("Everything is fine");
    }

    report.errors = sink.into_errors();
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::test_support::{context, StaticLookup};
    use std::io::Write;
    use std::sync::Mutex;

    fn source(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(suffix)
            .tempfile()
            .expect("temp file");
        file.write_all(contents.as_bytes()).expect("write temp file");
        file
    }

    #[test]
    fn test_exit_code() {
        let mut report = RunReport::default();
        assert_eq!(report.exit_code(), 0);
        report.errors.push("Domain x could not find MX record".to_string());
        assert_eq!(report.exit_code(), 1);
    }

    #[tokio::test]
    async fn test_no_sources_is_clean() {
        let ctx = Arc::new(context(StaticLookup::new()));
        let report = run_sources(&[], ctx, 1).await;
        assert!(report.is_success());
        assert_eq!(report.sources_processed, 0);
    }

    #[tokio::test]
    async fn test_load_failure_does_not_stop_later_sources() {
        let bad = source(".txt", "sites: []");
        let good = source(
            ".json",
            r#"{"sites": [{"host": "a.example", "ips": ["192.0.2.1"]}]}"#,
        );
        let ctx = Arc::new(context(StaticLookup::new().host("a.example", &["192.0.2.1"])));

        let report = run_sources(
            &[bad.path().to_path_buf(), good.path().to_path_buf()],
            ctx,
            1,
        )
        .await;

        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].starts_with("Failed to load config file"));
        assert_eq!(report.sources_failed, 1);
        assert_eq!(report.sources_processed, 1);
        assert_eq!(report.entries_checked, 1);
    }

    #[tokio::test]
    async fn test_errors_follow_entry_order_under_concurrency() {
        // The first entry answers last; its error must still come first
        let doc = r#"{"sites": [
            {"host": "one.example", "ips": ["192.0.2.1"]},
            {"host": "two.example", "ips": ["192.0.2.2"]},
            {"host": "three.example", "ips": ["192.0.2.3"]}
        ]}"#;
        let file = source(".json", doc);
        let answered = Arc::new(Mutex::new(Vec::new()));
        let lookup = StaticLookup::new()
            .log_answers(Arc::clone(&answered))
            .host("one.example", &["198.51.100.1"])
            .slow_host("one.example", Duration::from_millis(300))
            .host("two.example", &["198.51.100.2"])
            .host("three.example", &["198.51.100.3"]);
        let ctx = Arc::new(context(lookup));

        let report = run_sources(&[file.path().to_path_buf()], ctx, 3).await;

        // Completion order differs from document order
        let answered = answered.lock().unwrap().clone();
        assert_eq!(answered.len(), 3);
        assert_eq!(answered.last().map(String::as_str), Some("one.example"));

        let hosts: Vec<&str> = report
            .errors
            .iter()
            .map(|e| e.split_whitespace().nth(1).unwrap_or_default())
            .collect();
        assert_eq!(hosts, ["one.example", "two.example", "three.example"]);
    }

    #[tokio::test]
    async fn test_counts_by_outcome() {
        let doc = "\
sites:
  - enabled: false
    host: off.example
  - host: 12
  - mx: mail.example
    ips: [mx.mail.example]
";
        let file = source(".yaml", doc);
        let ctx = Arc::new(context(
            StaticLookup::new().mx("mail.example", &["mx.mail.example."]),
        ));

        let report = run_sources(&[file.path().to_path_buf()], ctx, 2).await;

        assert_eq!(report.entries_skipped, 1);
        assert_eq!(report.entries_failed, 1);
        assert_eq!(report.entries_checked, 1);
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].starts_with("Failed to process site"));
    }

    #[tokio::test]
    async fn test_run_checks_rejects_invalid_config() {
        let config = Config {
            files: vec![PathBuf::from("sites.json")],
            max_concurrency: 0,
            ..Default::default()
        };
        assert!(run_checks(config).await.is_err());
    }
}
