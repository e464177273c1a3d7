//! Per-entry check dispatch.
//!
//! [`dispatch_entry`] decides which checks an entry triggers and runs them in
//! the fixed order host, reverse DNS, MX, URL. [`dispatch_isolated`] wraps it
//! in its own task so that a malformed entry, or even a panicking check,
//! is reported against that entry alone.

use std::sync::Arc;

use log::debug;
use serde_json::Value;

use crate::checks::{check_host, check_mx, check_reverse_dns, check_url, CheckContext};
use crate::error_handling::{DispatchError, ErrorSink};
use crate::site::SiteEntry;

/// What happened to one entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryOutcome {
    /// `enabled` was falsy; nothing ran
    Skipped,
    /// Dispatch completed; `checks_run` checks executed (they may have recorded failures)
    Checked { checks_run: usize },
    /// Dispatch stopped on a `DispatchError`
    Failed,
}

/// Outcome plus every message recorded while processing the entry.
#[derive(Debug)]
pub struct EntryReport {
    pub outcome: EntryOutcome,
    pub errors: ErrorSink,
}

/// Runs the checks an entry asks for.
///
/// Absent trigger fields skip their check. The first `DispatchError` stops the
/// entry; failures already recorded by earlier checks stay in `sink`.
///
/// # Errors
///
/// Returns `DispatchError` if the entry is malformed or a triggered check lacks
/// a field it needs.
pub async fn dispatch_entry(
    raw: &Value,
    ctx: &CheckContext,
    sink: &mut ErrorSink,
) -> Result<EntryOutcome, DispatchError> {
    // Checked before parsing so a disabled entry never produces errors
    if SiteEntry::is_disabled(raw) {
        debug!("Skipping disabled entry {}", describe_entry(raw));
        return Ok(EntryOutcome::Skipped);
    }

    let entry = SiteEntry::from_value(raw)?;
    let mut checks_run = 0;

    if let Some(target) = entry.host_target() {
        check_host(&target?, ctx, sink).await;
        checks_run += 1;
    }
    if let Some(target) = entry.reverse_target() {
        check_reverse_dns(&target?, ctx, sink).await;
        checks_run += 1;
    }
    if let Some(target) = entry.mx_target() {
        check_mx(&target?, ctx, sink).await;
        checks_run += 1;
    }
    if let Some(target) = entry.url_target() {
        check_url(&target?, ctx, sink).await;
        checks_run += 1;
    }

    if checks_run == 0 {
        debug!("Entry {} triggers no checks", describe_entry(raw));
    }
    Ok(EntryOutcome::Checked { checks_run })
}

/// Dispatches `raw` inside a dedicated task.
///
/// A `DispatchError` or a panic in the task becomes one recorded error naming
/// the entry and its source; it never propagates to the caller.
pub async fn dispatch_isolated(
    raw: Value,
    ctx: Arc<CheckContext>,
    source: Arc<str>,
) -> EntryReport {
    let description = describe_entry(&raw);

    let handle = tokio::spawn(async move {
        let mut sink = ErrorSink::new();
        let result = dispatch_entry(&raw, &ctx, &mut sink).await;
        (sink, result)
    });

    let (mut sink, error) = match handle.await {
        Ok((sink, Ok(outcome))) => {
            return EntryReport {
                outcome,
                errors: sink,
            }
        }
        Ok((sink, Err(e))) => (sink, e),
        Err(join_error) => (
            ErrorSink::new(),
            DispatchError::Panicked(join_error.to_string()),
        ),
    };

    sink.record(format!(
        "Failed to process site {description} from file {source}: {error}"
    ));
    EntryReport {
        outcome: EntryOutcome::Failed,
        errors: sink,
    }
}

/// Compact single-line rendering of an entry for messages.
pub fn describe_entry(raw: &Value) -> String {
    serde_json::to_string(raw).unwrap_or_else(|_| raw.to_string())
}
