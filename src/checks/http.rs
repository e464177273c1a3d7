//! HTTP endpoint check.

use std::time::Instant;

use log::{debug, info};
use reqwest::header::HeaderMap;

use super::{CheckContext, CheckKind};
use crate::error_handling::{categorize_reqwest_error, CheckFailure, ErrorSink};
use crate::site::UrlTarget;

/// Issues one GET to `target.url` and verifies the response.
///
/// Redirects are not followed: a 301 is evaluated as a 301. A request-level
/// failure records one error and stops. Otherwise the status, every listed
/// header, and the body substring are checked independently, each mismatch
/// producing its own error.
pub async fn check_url(target: &UrlTarget, ctx: &CheckContext, sink: &mut ErrorSink) {
    info!("URL: {}", target.url);
    let start = Instant::now();

    let response = match ctx.client.get(&target.url).send().await {
        Ok(response) => response,
        Err(e) => {
            sink.record(
                CheckFailure::UrlRequestFailed {
                    url: target.url.clone(),
                    kind: categorize_reqwest_error(&e),
                    message: e.to_string(),
                }
                .to_string(),
            );
            ctx.finish(CheckKind::Url, start);
            return;
        }
    };

    let status = response.status().as_u16();
    info!("status_code: {status}");
    debug!("headers: {:?}", response.headers());

    for failure in evaluate_head(target, status, response.headers()) {
        sink.record(failure.to_string());
    }

    if let Some(expected) = &target.html_contains {
        let failure = match response.bytes().await {
            Ok(body) => evaluate_body(&target.url, expected, &body),
            Err(e) => Some(CheckFailure::UrlBodyUnreadable {
                url: target.url.clone(),
                message: e.to_string(),
            }),
        };
        if let Some(failure) = failure {
            sink.record(failure.to_string());
        }
    }

    ctx.finish(CheckKind::Url, start);
}

/// Status and header expectations. Headers not listed in the target are ignored.
fn evaluate_head(target: &UrlTarget, status: u16, headers: &HeaderMap) -> Vec<CheckFailure> {
    let mut failures = Vec::new();

    if status != target.status_code {
        failures.push(CheckFailure::UrlStatusMismatch {
            url: target.url.clone(),
            expected: target.status_code,
            received: status,
        });
    }

    for (name, expected) in &target.headers {
        match header_value(headers, name) {
            None => failures.push(CheckFailure::UrlHeaderMissing {
                url: target.url.clone(),
                header: name.clone(),
            }),
            Some(received) if &received != expected => {
                failures.push(CheckFailure::UrlHeaderMismatch {
                    url: target.url.clone(),
                    header: name.clone(),
                    expected: expected.clone(),
                    received,
                })
            }
            Some(_) => {}
        }
    }

    failures
}

/// Case-insensitive lookup; repeated headers are joined with `", "`.
fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    let values: Vec<String> = headers
        .get_all(name)
        .iter()
        .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
        .collect();
    if values.is_empty() {
        None
    } else {
        Some(values.join(", "))
    }
}

fn evaluate_body(url: &str, expected: &str, body: &[u8]) -> Option<CheckFailure> {
    match std::str::from_utf8(body) {
        Ok(text) if text.contains(expected) => None,
        Ok(_) => Some(CheckFailure::UrlBodyMissing {
            url: url.to_string(),
            expected: expected.to_string(),
        }),
        Err(e) => Some(CheckFailure::UrlBodyUnreadable {
            url: url.to_string(),
            message: e.to_string(),
        }),
    }
}
