use crate::config::Config;
use crate::core::types::ValidationResult;
use log::{debug, error, info, warn};

/// Initialize the logger with appropriate level based on verbosity
pub fn init_logger(verbose: bool, quiet: bool) {
    let level = if quiet {
        log::LevelFilter::Off
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Off // Only show structured logs in verbose mode
    };

    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    debug!("Logger initialized with level: {level:?}");
}

/// Log configuration information
pub fn log_config_info(config: &Config) {
    info!(
        "Configuration: batch_size={}, timeout={}s",
        config.batch_size(),
        config.timeout_duration().as_secs()
    );
    info!(
        "HTTP: user_agent=\"{}\", expected_content_type=\"{}\"",
        config.user_agent(),
        config.expected_content_type()
    );
}

/// Log a sitemap document fetch during tree resolution
pub fn log_sitemap_fetch(sitemap_url: &str) {
    info!("Fetching sitemap from: {sitemap_url}");
}

/// Log the outcome of sitemap tree resolution
pub fn log_resolution_complete(root_url: &str, url_count: usize, duration_ms: u128) {
    info!("Resolved {url_count} URLs from {root_url} ({duration_ms}ms)");
}

/// Log validation progress
pub fn log_validation_start(url_count: usize, batch_size: usize) {
    info!(
        "Starting validation of {url_count} URLs in {} batch(es) of up to {batch_size}",
        url_count.div_ceil(batch_size.max(1))
    );
}

/// Log validation completion
pub fn log_validation_complete(url_count: usize, failed: usize, duration_ms: u128) {
    if failed == 0 {
        info!("✅ Validation complete: {url_count}/{url_count} URLs valid ({duration_ms}ms)");
    } else {
        warn!(
            "❌ Validation complete: {}/{} URLs valid, {} failed ({}ms)",
            url_count - failed,
            url_count,
            failed,
            duration_ms
        );
    }
}

/// Log individual URL validation results for debugging
pub fn log_url_result(result: &ValidationResult) {
    match (&result.content_type, &result.error, result.success) {
        (Some(content_type), _, true) => debug!("✓ {} -> {content_type}", result.url),
        (Some(content_type), _, false) => debug!("✗ {} -> {content_type}", result.url),
        (None, Some(error), _) => debug!("✗ {} -> {error}", result.url),
        (None, None, _) => debug!("✗ {} -> no content-type", result.url),
    }
}

/// Log error information
pub fn log_error(message: &str, source: Option<&dyn std::error::Error>) {
    match source {
        Some(err) => error!("{message}: {err}"),
        None => error!("{message}"),
    }
}
