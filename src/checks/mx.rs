//! MX record check.

use std::time::Instant;

use log::info;

use super::{CheckContext, CheckKind};
use crate::dns::strip_root_dot;
use crate::error_handling::{CheckFailure, ErrorSink, LookupError};
use crate::site::MxTarget;

/// Compares the domain's MX exchanges with the expected hostnames.
///
/// Both lists are normalized (trailing root dot removed) and sorted, then
/// compared as sequences, so duplicate counts matter. "No MX records" is
/// reported with its own message; other lookup failures are recorded too.
pub async fn check_mx(target: &MxTarget, ctx: &CheckContext, sink: &mut ErrorSink) {
    info!("Domain: {}", target.domain);
    let start = Instant::now();

    match ctx
        .within_deadline(ctx.resolver.lookup_mx(&target.domain))
        .await
    {
        Ok(exchanges) => {
            info!("MX for {}: {:?}", target.domain, exchanges);
            if let Some(failure) =
                compare_exchanges(&target.domain, &target.expected_exchanges, &exchanges)
            {
                sink.record(failure.to_string());
            }
        }
        Err(LookupError::NoRecords { .. }) => sink.record(
            CheckFailure::MxMissing {
                domain: target.domain.clone(),
            }
            .to_string(),
        ),
        Err(source) => sink.record(
            CheckFailure::MxLookupFailed {
                domain: target.domain.clone(),
                source,
            }
            .to_string(),
        ),
    }

    ctx.finish(CheckKind::Mx, start);
}

fn sorted_names(names: &[String]) -> Vec<String> {
    let mut names: Vec<String> = names
        .iter()
        .map(|name| strip_root_dot(name).to_string())
        .collect();
    names.sort();
    names
}

fn compare_exchanges(
    domain: &str,
    expected: &[String],
    observed: &[String],
) -> Option<CheckFailure> {
    let expected = sorted_names(expected);
    let observed = sorted_names(observed);
    if expected == observed {
        return None;
    }
    Some(CheckFailure::MxMismatch {
        domain: domain.to_string(),
        expected,
        observed,
    })
}
