use reqwest::redirect::Policy;
use std::time::Duration;

use crate::config::Config;
use crate::core::constants::http::MAX_REDIRECTS;
use crate::core::error::Result;

/// Build the HTTP client shared by sitemap fetching and page probing.
///
/// Every request made through it carries the configured User-Agent and is
/// bounded by the configured per-request timeout.
pub fn build_client(config: &Config) -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .timeout(config.timeout_duration())
        .redirect(Policy::limited(MAX_REDIRECTS))
        .user_agent(config.user_agent())
        .pool_max_idle_per_host(config.batch_size().min(20))
        .pool_idle_timeout(Duration::from_secs(30))
        .tcp_keepalive(Duration::from_secs(60))
        .build()?;

    Ok(client)
}

/// Describe a transport error by its innermost useful message.
pub fn describe_transport_error(err: &reqwest::Error) -> String {
    if err.is_timeout() {
        return "operation timed out".to_string();
    }

    std::error::Error::source(err)
        .map(|e| e.to_string())
        .unwrap_or_else(|| err.to_string())
}
