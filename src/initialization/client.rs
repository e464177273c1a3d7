//! HTTP client initialization.

use std::time::Duration;

use crate::config::{Config, TCP_CONNECT_TIMEOUT_SECS};
use crate::error_handling::InitializationError;
use reqwest::ClientBuilder;

/// Initializes the HTTP client for URL checks.
///
/// Creates a `reqwest::Client` configured with:
/// - Redirects disabled, so a redirect response is evaluated as-is
/// - Request timeout from the config, plus a shorter TCP connect timeout
/// - User-Agent from the config
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client(config: &Config) -> Result<reqwest::Client, InitializationError> {
    let client = ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(Duration::from_secs(config.timeout_seconds))
        .connect_timeout(Duration::from_secs(
            TCP_CONNECT_TIMEOUT_SECS.min(config.timeout_seconds),
        ))
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(client)
}
