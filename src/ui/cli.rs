// Command-line interface definitions and parsing for sitemap-probe

use crate::config::CliConfig;
use crate::core::constants::{defaults, output_formats, timeouts};
use crate::core::error::{Result, SitemapProbeError};
use clap::{Parser, Subcommand};
use url::Url;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Root sitemap URL to resolve and validate
    pub sitemap_url: Option<String>,

    // Core Options
    /// Per-request timeout in seconds (default: 30)
    #[arg(
        short = 't',
        long,
        value_name = "SECONDS",
        help_heading = "Core Options"
    )]
    pub timeout: Option<u64>,

    /// URLs validated concurrently per batch (default: 10)
    #[arg(
        short = 'b',
        long,
        value_name = "COUNT",
        help_heading = "Core Options"
    )]
    pub batch_size: Option<usize>,

    /// Content-type prefix pages must be served with (default: text/markdown)
    #[arg(long, value_name = "MIME", help_heading = "Core Options")]
    pub content_type: Option<String>,

    // Discovery
    /// Only resolve the sitemap tree and print its URLs
    #[arg(long, help_heading = "Discovery")]
    pub list: bool,

    /// With --list, print URLs matching REGEX with its first two capture groups
    #[arg(long, value_name = "REGEX", requires = "list", help_heading = "Discovery")]
    pub pair_pattern: Option<String>,

    // Output & Verbosity
    /// Suppress progress output
    #[arg(short = 'q', long, help_heading = "Output & Verbosity")]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long, help_heading = "Output & Verbosity")]
    pub verbose: bool,

    /// Output format
    #[arg(long, value_name = "FORMAT", value_parser = output_formats::ALL, help_heading = "Output & Verbosity")]
    pub format: Option<String>,

    /// Disable the progress line
    #[arg(long, help_heading = "Output & Verbosity")]
    pub no_progress: bool,

    // Network
    /// Client-identification User-Agent header
    #[arg(long, value_name = "AGENT", help_heading = "Network")]
    pub user_agent: Option<String>,

    // Configuration
    /// Use specific config file
    #[arg(long, value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<String>,

    /// Ignore config files
    #[arg(long, help_heading = "Configuration")]
    pub no_config: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate shell completions
    #[command(name = "completion-generate", arg_required_else_help = true)]
    CompletionGenerate {
        /// The shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Convert derive-based CLI arguments to a CliConfig, rejecting unusable values
pub fn cli_to_config(cli: &Cli) -> Result<CliConfig> {
    if let Some(timeout) = cli.timeout {
        if timeout < timeouts::MIN_TIMEOUT_SECONDS {
            return Err(SitemapProbeError::InvalidArgument(
                "Timeout cannot be 0. Expected a positive integer representing seconds."
                    .to_string(),
            ));
        }
        if timeout > timeouts::MAX_TIMEOUT_SECONDS {
            eprintln!(
                "Warning: Timeout of {timeout} seconds is quite large. Consider using a smaller value for better user experience."
            );
        }
    }

    if let Some(batch_size) = cli.batch_size {
        if batch_size == 0 {
            return Err(SitemapProbeError::InvalidArgument(
                "Batch size cannot be 0. Expected a positive integer representing the number of concurrent requests."
                    .to_string(),
            ));
        }
        if batch_size > defaults::LARGE_BATCH_SIZE {
            eprintln!(
                "Warning: Batch size of {batch_size} is quite high and may overwhelm servers. Consider using a smaller value."
            );
        }
    }

    if let Some(ref content_type) = cli.content_type
        && content_type.trim().is_empty()
    {
        return Err(SitemapProbeError::InvalidArgument(
            "Content type cannot be empty.".to_string(),
        ));
    }

    Ok(CliConfig {
        timeout: cli.timeout,
        batch_size: cli.batch_size,
        user_agent: cli.user_agent.clone(),
        expected_content_type: cli.content_type.clone(),
        quiet: cli.quiet,
        verbose: cli.verbose,
        output_format: cli.format.clone(),
        no_progress: cli.no_progress,
        list_only: cli.list,
        pair_pattern: cli.pair_pattern.clone(),
        config_file: cli.config.clone(),
        no_config: cli.no_config,
    })
}

/// Check that the root sitemap URL is an absolute http(s) URL
pub fn validate_sitemap_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw).map_err(|e| {
        SitemapProbeError::InvalidArgument(format!("'{raw}' is not a valid URL: {e}"))
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(SitemapProbeError::InvalidArgument(format!(
            "'{raw}' uses unsupported scheme '{scheme}', expected http or https"
        ))),
    }
}
