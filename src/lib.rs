//! sitemap-probe resolves a nested sitemap tree into its page URLs and checks
//! that every page is served with the expected content-type.
//!
//! The crate is organized into:
//! - [`core`]: shared types, errors, constants and HTTP client setup
//! - [`config`]: TOML configuration and CLI merging
//! - [`discovery`]: sitemap fetching, parsing and tree resolution
//! - [`validation`]: per-URL probing and bounded batch execution
//! - [`reporting`]: result aggregation and logging
//! - [`ui`]: CLI definition, terminal output and progress

pub mod config;
pub mod core;
pub mod discovery;
pub mod reporting;
pub mod ui;
pub mod validation;

// Re-export commonly used types for convenience
pub use config::{CliConfig, Config};
pub use core::{Result, SitemapDocument, SitemapProbeError, ValidationResult, ValidationSummary};
pub use discovery::{FetchSitemap, HttpFetcher, PairMatcher, UrlPair, resolve_sitemap_tree};
pub use reporting::ProgressObserver;
pub use validation::{BatchValidator, HttpProber, ProbeUrl};

/// Resolve the sitemap tree at `root_url` and validate every page it lists.
///
/// Resolution failures are returned as errors before any page is probed.
/// Per-page failures are part of the returned summary.
pub async fn validate_sitemap(
    config: &Config,
    root_url: &str,
    observer: Option<&mut dyn ProgressObserver>,
) -> Result<ValidationSummary> {
    let client = core::http::build_client(config)?;
    let fetcher = HttpFetcher::new(client.clone());
    let urls = resolve_sitemap_tree(&fetcher, root_url).await?;

    let prober = HttpProber::new(client, config.expected_content_type());
    let validator = BatchValidator::new(prober, config.batch_size());
    Ok(validator.validate(&urls, observer).await)
}
