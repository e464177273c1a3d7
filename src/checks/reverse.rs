//! Reverse DNS (PTR) check.

use std::net::IpAddr;
use std::time::Instant;

use log::{debug, info};

use super::{CheckContext, CheckKind};
use crate::dns::strip_root_dot;
use crate::error_handling::{CheckFailure, ErrorSink, LookupError};
use crate::site::ReverseTarget;

/// Requires exactly one PTR answer for `target.ip`, equal to the expected name.
///
/// The answer's trailing root dot is stripped before comparing; the expected
/// name is compared as written. Every failure mode records a single error.
pub async fn check_reverse_dns(target: &ReverseTarget, ctx: &CheckContext, sink: &mut ErrorSink) {
    info!("IP: {}", target.ip);
    let start = Instant::now();

    if let Err(failure) = verify(target, ctx).await {
        sink.record(failure.to_string());
    }

    ctx.finish(CheckKind::ReverseDns, start);
}

async fn verify(target: &ReverseTarget, ctx: &CheckContext) -> Result<(), CheckFailure> {
    let lookup_failed = |source| CheckFailure::ReverseLookupFailed {
        ip: target.ip.clone(),
        source,
    };

    let ip: IpAddr = target
        .ip
        .parse()
        .map_err(|_| lookup_failed(LookupError::InvalidAddress(target.ip.clone())))?;
    let names = ctx
        .within_deadline(ctx.resolver.lookup_ptr(ip))
        .await
        .map_err(lookup_failed)?;

    compare_ptr(target, &names)
}

fn compare_ptr(target: &ReverseTarget, names: &[String]) -> Result<(), CheckFailure> {
    let [name] = names else {
        return Err(CheckFailure::ReverseAnswerCount {
            ip: target.ip.clone(),
            count: names.len(),
        });
    };

    let observed = strip_root_dot(name);
    debug!("PTR for {} is '{}'", target.ip, observed);
    if observed != target.expected_name {
        return Err(CheckFailure::ReverseMismatch {
            ip: target.ip.clone(),
            observed: observed.to_string(),
            expected: target.expected_name.clone(),
        });
    }
    Ok(())
}
