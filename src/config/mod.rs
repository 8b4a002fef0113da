//! Configuration management
//!
//! This module handles loading and managing configuration from
//! TOML files and CLI arguments.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::core::constants::{defaults, http, output_formats, timeouts};
use crate::core::error::{Result, SitemapProbeError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Per-request timeout in seconds, applied to sitemap fetches and page probes
    pub timeout: Option<u64>,

    /// Number of URLs validated concurrently per batch
    pub batch_size: Option<usize>,

    /// Client-identification header sent with every request
    pub user_agent: Option<String>,

    /// Content-type prefix a page must be served with to pass
    pub expected_content_type: Option<String>,

    /// Output format (text, json, minimal)
    pub output_format: Option<String>,

    /// Enable verbose logging
    pub verbose: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timeout: Some(timeouts::DEFAULT_TIMEOUT_SECONDS),
            batch_size: Some(defaults::BATCH_SIZE),
            user_agent: Some(http::DEFAULT_USER_AGENT.to_string()),
            expected_content_type: Some(defaults::EXPECTED_CONTENT_TYPE.to_string()),
            output_format: Some(output_formats::DEFAULT.to_string()),
            verbose: Some(false),
        }
    }
}

impl Config {
    /// Load configuration from file, falling back to defaults for absent keys
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            SitemapProbeError::Config(format!(
                "Could not read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            SitemapProbeError::Config(format!(
                "Invalid TOML in config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Try to find and load a config file in standard locations
    pub fn load_from_standard_locations() -> Self {
        if let Ok(config) = Self::load_from_file(defaults::CONFIG_FILE_NAME) {
            return config;
        }

        // Parent directories, up to 3 levels
        for i in 1..=3 {
            let path = format!("{}{}", "../".repeat(i), defaults::CONFIG_FILE_NAME);
            if let Ok(config) = Self::load_from_file(&path) {
                return config;
            }
        }

        Self::default()
    }

    /// Merge this config with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli_config: &CliConfig) {
        if let Some(timeout) = cli_config.timeout {
            self.timeout = Some(timeout);
        }
        if let Some(batch_size) = cli_config.batch_size {
            self.batch_size = Some(batch_size);
        }
        if let Some(ref user_agent) = cli_config.user_agent {
            self.user_agent = Some(user_agent.clone());
        }
        if let Some(ref content_type) = cli_config.expected_content_type {
            self.expected_content_type = Some(content_type.clone());
        }
        if let Some(ref output_format) = cli_config.output_format {
            self.output_format = Some(output_format.clone());
        }
        if cli_config.verbose {
            self.verbose = Some(true);
        }
    }

    /// Get timeout as Duration
    pub fn timeout_duration(&self) -> Duration {
        Duration::from_secs(self.timeout.unwrap_or(timeouts::DEFAULT_TIMEOUT_SECONDS))
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size.unwrap_or(defaults::BATCH_SIZE)
    }

    pub fn user_agent(&self) -> &str {
        self.user_agent.as_deref().unwrap_or(http::DEFAULT_USER_AGENT)
    }

    pub fn expected_content_type(&self) -> &str {
        self.expected_content_type
            .as_deref()
            .unwrap_or(defaults::EXPECTED_CONTENT_TYPE)
    }

    pub fn output_format(&self) -> &str {
        self.output_format
            .as_deref()
            .unwrap_or(output_formats::DEFAULT)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if let Some(timeout) = self.timeout {
            if timeout < timeouts::MIN_TIMEOUT_SECONDS {
                return Err(SitemapProbeError::Config(
                    "Timeout cannot be 0. Expected a positive integer representing seconds."
                        .to_string(),
                ));
            }
            if timeout > timeouts::HARD_MAX_TIMEOUT_SECONDS {
                return Err(SitemapProbeError::Config(format!(
                    "Timeout of {timeout} seconds is extremely large (>24 hours). Consider using a smaller value."
                )));
            }
        }

        if self.batch_size == Some(0) {
            return Err(SitemapProbeError::Config(
                "Batch size cannot be 0. Expected a positive integer.".to_string(),
            ));
        }

        if let Some(ref content_type) = self.expected_content_type
            && content_type.trim().is_empty()
        {
            return Err(SitemapProbeError::Config(
                "Expected content type cannot be empty.".to_string(),
            ));
        }

        if let Some(ref format) = self.output_format
            && !output_formats::ALL.contains(&format.as_str())
        {
            return Err(SitemapProbeError::Config(format!(
                "Invalid output format '{format}'. Expected one of: {}.",
                output_formats::ALL.join(", ")
            )));
        }

        Ok(())
    }
}

/// Configuration options that can come from CLI
#[derive(Debug, Default)]
pub struct CliConfig {
    // Core options
    pub timeout: Option<u64>,                  // --timeout
    pub batch_size: Option<usize>,             // --batch-size
    pub user_agent: Option<String>,            // --user-agent
    pub expected_content_type: Option<String>, // --content-type

    // Output & format
    pub quiet: bool,                   // --quiet
    pub verbose: bool,                 // --verbose
    pub output_format: Option<String>, // --format
    pub no_progress: bool,             // --no-progress

    // Discovery
    pub list_only: bool,              // --list
    pub pair_pattern: Option<String>, // --pair-pattern

    // Configuration
    pub config_file: Option<String>, // --config
    pub no_config: bool,             // --no-config
}
