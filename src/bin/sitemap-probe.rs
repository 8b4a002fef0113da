use clap::{CommandFactory, Parser};
use sitemap_probe::config::{CliConfig, Config};
use sitemap_probe::core::constants::output_formats;
use sitemap_probe::core::http::build_client;
use sitemap_probe::discovery::{HttpFetcher, PairMatcher, resolve_sitemap_tree};
use sitemap_probe::reporting::logging;
use sitemap_probe::ui::output;
use sitemap_probe::ui::{
    Cli, Commands, ProgressReporter, cli_to_config, print_completions, validate_sitemap_url,
};
use sitemap_probe::validation::{BatchValidator, HttpProber};
use sitemap_probe::{SitemapProbeError, ValidationSummary};

use std::io::{self, Write};
use std::time::Instant;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Handle completion commands first
    if let Some(exit_code) = handle_completion_commands(&cli) {
        std::process::exit(exit_code);
    }

    // A sitemap URL is required when not using completions
    let Some(ref sitemap_url) = cli.sitemap_url else {
        eprintln!("{}", Cli::command().render_usage());
        eprintln!("\nFor more information, try '--help'.");
        std::process::exit(1);
    };

    match run_sitemap_probe_logic(&cli, sitemap_url).await {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("Validation failed: {e}");
            std::process::exit(1);
        }
    }
}

/// Handle completion commands and return exit code if a completion command was processed
pub fn handle_completion_commands(cli: &Cli) -> Option<i32> {
    match cli.command {
        Some(Commands::CompletionGenerate { shell }) => {
            let mut app = Cli::command();
            print_completions(shell, &mut app);
            Some(0)
        }
        None => None,
    }
}

/// Main sitemap validation logic extracted from main() for testing
pub async fn run_sitemap_probe_logic(
    cli: &Cli,
    sitemap_url: &str,
) -> Result<i32, Box<dyn std::error::Error>> {
    let cli_config = cli_to_config(cli)?;
    validate_sitemap_url(sitemap_url)?;

    // Load and merge configuration
    let config = load_and_merge_config(&cli_config)?;

    // Setup logging and output settings
    let output_settings = setup_output_settings(&cli_config, &config);
    logging::init_logger(output_settings.verbose, output_settings.quiet);
    logging::log_config_info(&config);

    // Compile the pair pattern before any network traffic
    let pair_matcher = cli_config
        .pair_pattern
        .as_deref()
        .map(PairMatcher::new)
        .transpose()?;

    let client = build_client(&config)?;
    let urls = resolve_urls(sitemap_url, &HttpFetcher::new(client.clone()), &output_settings)
        .await?;

    if cli_config.list_only {
        print_url_list(&urls, pair_matcher.as_ref(), &output_settings.output_format)?;
        return Ok(0);
    }

    if output_settings.should_show_url_info() {
        output::display_url_discovery(urls.len());
    }

    // Initialize progress reporter
    let mut progress = create_progress_reporter(&output_settings);

    let prober = HttpProber::new(client, config.expected_content_type());
    let summary = validate_urls(&urls, prober, &config, progress.as_mut()).await;

    finalize_progress_reporter(progress.as_ref(), &summary);

    output::display_results(
        &summary,
        &output_settings.output_format,
        config.expected_content_type(),
    )?;

    Ok(determine_exit_code(&summary))
}

/// Load configuration from file or standard locations and merge with CLI config
pub fn load_and_merge_config(cli_config: &CliConfig) -> Result<Config, SitemapProbeError> {
    let mut config = if cli_config.no_config {
        Config::default()
    } else if let Some(ref config_file) = cli_config.config_file {
        Config::load_from_file(config_file).inspect_err(|e| {
            logging::log_error(
                &format!("Could not load config file '{config_file}'"),
                Some(e),
            );
        })?
    } else {
        Config::load_from_standard_locations()
    };

    // Merge CLI arguments with configuration (CLI takes precedence)
    config.merge_with_cli(cli_config);
    config.validate()?;
    Ok(config)
}

/// Settings for output formatting and display
pub struct OutputSettings {
    pub quiet: bool,
    pub verbose: bool,
    pub output_format: String,
    pub show_progress: bool,
}

impl OutputSettings {
    pub fn should_show_url_info(&self) -> bool {
        !self.quiet && self.output_format == output_formats::TEXT
    }
}

/// Setup output settings based on CLI and config
pub fn setup_output_settings(cli_config: &CliConfig, config: &Config) -> OutputSettings {
    let quiet = cli_config.quiet;
    let output_format = config.output_format().to_string();
    let show_progress =
        !quiet && !cli_config.no_progress && output_format == output_formats::TEXT;

    OutputSettings {
        quiet,
        verbose: config.verbose.unwrap_or(false),
        output_format,
        show_progress,
    }
}

/// Resolve the sitemap tree behind a spinner
pub async fn resolve_urls(
    sitemap_url: &str,
    fetcher: &HttpFetcher,
    output_settings: &OutputSettings,
) -> Result<Vec<String>, SitemapProbeError> {
    let spinner =
        ProgressReporter::new(output_settings.show_progress).create_spinner("Resolving sitemap tree...");

    let start_time = Instant::now();
    let resolved = resolve_sitemap_tree(fetcher, sitemap_url).await;

    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    let urls = resolved.inspect_err(|e| {
        logging::log_error("Could not resolve sitemap tree", Some(e));
    })?;
    logging::log_resolution_complete(sitemap_url, urls.len(), start_time.elapsed().as_millis());

    Ok(urls)
}

/// Print the resolved URLs, or the pairs picked out of them
pub fn print_url_list(
    urls: &[String],
    pair_matcher: Option<&PairMatcher>,
    output_format: &str,
) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match pair_matcher {
        Some(matcher) => output::write_pairs(&mut out, &matcher.extract(urls), output_format)?,
        None => output::write_url_list(&mut out, urls, output_format)?,
    }

    out.flush()
}

/// Create progress reporter if needed
pub fn create_progress_reporter(output_settings: &OutputSettings) -> Option<ProgressReporter> {
    output_settings
        .show_progress
        .then(|| ProgressReporter::new(true))
}

/// Validate URLs in batches, feeding the progress reporter as results arrive
pub async fn validate_urls(
    urls: &[String],
    prober: HttpProber,
    config: &Config,
    progress: Option<&mut ProgressReporter>,
) -> ValidationSummary {
    let validator = BatchValidator::new(prober, config.batch_size());

    logging::log_validation_start(urls.len(), validator.batch_size());

    let start_time = Instant::now();
    let summary = match progress {
        Some(reporter) => {
            reporter.start_url_validation(urls.len());
            validator.validate(urls, Some(reporter)).await
        }
        None => validator.validate(urls, None).await,
    };

    logging::log_validation_complete(
        summary.total,
        summary.failed,
        start_time.elapsed().as_millis(),
    );

    summary
}

/// Finalize progress reporting
pub fn finalize_progress_reporter(progress: Option<&ProgressReporter>, summary: &ValidationSummary) {
    if let Some(progress) = progress {
        progress.finish_url_validation(summary.successful, summary.total);
    }
}

/// Any failed URL fails the run
pub fn determine_exit_code(summary: &ValidationSummary) -> i32 {
    if summary.has_failures() { 1 } else { 0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sitemap_probe::ValidationResult;

    fn create_test_cli() -> Cli {
        Cli {
            command: None,
            sitemap_url: Some("https://example.com/sitemap.xml".to_string()),
            timeout: None,
            batch_size: None,
            content_type: None,
            list: false,
            pair_pattern: None,
            quiet: false,
            verbose: false,
            format: None,
            no_progress: false,
            user_agent: None,
            config: None,
            no_config: true,
        }
    }

    fn summary_with(successes: &[bool]) -> ValidationSummary {
        ValidationSummary::from_results(
            successes
                .iter()
                .enumerate()
                .map(|(i, success)| {
                    ValidationResult::from_response(
                        format!("https://example.com/{i}"),
                        *success,
                        Some("text/markdown".to_string()),
                    )
                })
                .collect(),
        )
    }

    #[test]
    fn test_handle_completion_commands_none() {
        let cli = create_test_cli();
        assert_eq!(handle_completion_commands(&cli), None);
    }

    #[test]
    fn test_load_and_merge_config_no_config_flag() {
        let cli_config = cli_to_config(&create_test_cli()).unwrap();
        let config = load_and_merge_config(&cli_config).unwrap();
        assert_eq!(config.batch_size(), 10);
        assert_eq!(config.output_format(), "text");
    }

    #[test]
    fn test_load_and_merge_config_with_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"batch_size = 3\noutput_format = \"json\"")
            .unwrap();

        let mut cli = create_test_cli();
        cli.no_config = false;
        cli.config = Some(file.path().to_string_lossy().into_owned());
        cli.batch_size = Some(7);

        let cli_config = cli_to_config(&cli).unwrap();
        let config = load_and_merge_config(&cli_config).unwrap();

        // CLI wins over the file, the file wins over defaults
        assert_eq!(config.batch_size(), 7);
        assert_eq!(config.output_format(), "json");
    }

    #[test]
    fn test_load_and_merge_config_invalid_file() {
        let mut cli = create_test_cli();
        cli.no_config = false;
        cli.config = Some("/definitely/not/here.toml".to_string());

        let cli_config = cli_to_config(&cli).unwrap();
        assert!(load_and_merge_config(&cli_config).is_err());
    }

    #[test]
    fn test_setup_output_settings() {
        let config = Config::default();

        let settings = setup_output_settings(&CliConfig::default(), &config);
        assert!(settings.show_progress);
        assert!(settings.should_show_url_info());

        let quiet = CliConfig {
            quiet: true,
            ..Default::default()
        };
        let settings = setup_output_settings(&quiet, &config);
        assert!(!settings.show_progress);
        assert!(!settings.should_show_url_info());

        let no_progress = CliConfig {
            no_progress: true,
            ..Default::default()
        };
        assert!(!setup_output_settings(&no_progress, &config).show_progress);
    }

    #[test]
    fn test_setup_output_settings_json_format() {
        let config = Config {
            output_format: Some("json".to_string()),
            ..Default::default()
        };
        let settings = setup_output_settings(&CliConfig::default(), &config);
        assert!(!settings.show_progress);
        assert!(!settings.should_show_url_info());
        assert!(create_progress_reporter(&settings).is_none());
    }

    #[test]
    fn test_create_progress_reporter_enabled() {
        let settings = setup_output_settings(&CliConfig::default(), &Config::default());
        let reporter = create_progress_reporter(&settings);
        assert!(reporter.is_some_and(|r| r.is_enabled()));
    }

    #[test]
    fn test_determine_exit_code() {
        assert_eq!(determine_exit_code(&summary_with(&[])), 0);
        assert_eq!(determine_exit_code(&summary_with(&[true, true])), 0);
        assert_eq!(determine_exit_code(&summary_with(&[true, false])), 1);
    }

    #[test]
    fn test_finalize_progress_reporter() {
        let summary = summary_with(&[true, false]);
        let mut reporter = ProgressReporter::new(true);
        reporter.start_url_validation(2);
        finalize_progress_reporter(Some(&reporter), &summary);
        finalize_progress_reporter(None, &summary);
    }
}
