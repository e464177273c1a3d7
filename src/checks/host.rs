//! Forward resolution check.

use std::collections::BTreeSet;
use std::time::Instant;

use log::info;

use super::{CheckContext, CheckKind};
use crate::error_handling::{CheckFailure, ErrorSink};
use crate::site::HostTarget;

/// Resolves `target.host` and requires the address set to equal the expected set.
///
/// Order and duplicates are irrelevant on both sides. A lookup failure of any
/// kind is recorded with its kind name.
pub async fn check_host(target: &HostTarget, ctx: &CheckContext, sink: &mut ErrorSink) {
    info!("Host: {}", target.host);
    let start = Instant::now();

    match ctx
        .within_deadline(ctx.resolver.resolve_host(&target.host))
        .await
    {
        Ok(observed) => {
            info!("hostname: {} ip_addresses={:?}", target.host, observed);
            if let Some(failure) = compare_addresses(&target.host, &target.expected_ips, &observed)
            {
                sink.record(failure.to_string());
            }
        }
        Err(source) => sink.record(
            CheckFailure::HostLookupFailed {
                host: target.host.clone(),
                source,
            }
            .to_string(),
        ),
    }

    ctx.finish(CheckKind::Host, start);
}

/// Set comparison; the failure lists both sides sorted and deduplicated.
fn compare_addresses(
    host: &str,
    expected: &[String],
    observed: &[String],
) -> Option<CheckFailure> {
    let expected: BTreeSet<&String> = expected.iter().collect();
    let observed: BTreeSet<&String> = observed.iter().collect();
    if expected == observed {
        return None;
    }
    Some(CheckFailure::HostMismatch {
        host: host.to_string(),
        expected: expected.into_iter().cloned().collect(),
        observed: observed.into_iter().cloned().collect(),
    })
}
