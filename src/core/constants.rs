/// Application-wide constants to avoid magic values throughout the codebase.
///
/// This module centralizes all magic strings, numbers, and other literal values
/// used across the application, making them easier to maintain and modify.
/// Output format constants
pub mod output_formats {
    /// Text output format - colorful, emoji-enhanced summary and failure listing
    pub const TEXT: &str = "text";
    /// JSON output format - the full validation summary for automation
    pub const JSON: &str = "json";
    /// Minimal output format - one failing URL per line
    pub const MINIMAL: &str = "minimal";

    /// Default output format
    pub const DEFAULT: &str = TEXT;

    /// All valid output formats
    pub const ALL: [&str; 3] = [TEXT, JSON, MINIMAL];
}

/// HTTP client constants
pub mod http {
    /// Client-identification header sent with every request
    pub const DEFAULT_USER_AGENT: &str = "PromptingBot ChatGPT-User/1.0.0";
    /// Maximum number of redirects followed per request
    pub const MAX_REDIRECTS: usize = 10;
}

/// Timeout and duration constants
pub mod timeouts {
    /// Default per-request timeout in seconds
    pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
    /// Maximum reasonable timeout in seconds (1 hour)
    pub const MAX_TIMEOUT_SECONDS: u64 = 3600;
    /// Timeouts above this are rejected (24 hours)
    pub const HARD_MAX_TIMEOUT_SECONDS: u64 = 86400;
    /// Minimum timeout in seconds
    pub const MIN_TIMEOUT_SECONDS: u64 = 1;
}

/// Default configuration values
pub mod defaults {
    /// Number of URLs validated concurrently per batch
    pub const BATCH_SIZE: usize = 10;
    /// Batch sizes above this are allowed but warned about
    pub const LARGE_BATCH_SIZE: usize = 100;
    /// Content-type prefix a page must be served with
    pub const EXPECTED_CONTENT_TYPE: &str = "text/markdown";
    /// Config file name searched for in standard locations
    pub const CONFIG_FILE_NAME: &str = ".sitemap-probe.toml";
}

/// Sitemap protocol element names (matched by local name)
pub mod sitemap {
    /// Root element of a sitemap index
    pub const INDEX_ROOT: &str = "sitemapindex";
    /// Entry element of a sitemap index
    pub const INDEX_ENTRY: &str = "sitemap";
    /// Root element of a leaf sitemap
    pub const URLSET_ROOT: &str = "urlset";
    /// Entry element of a leaf sitemap
    pub const URLSET_ENTRY: &str = "url";
    /// Location element inside an entry
    pub const LOCATION: &str = "loc";
}

/// Display and formatting constants
pub mod display {
    /// Emoji for success status
    pub const SUCCESS_EMOJI: &str = "✅";
    /// Emoji for error status
    pub const ERROR_EMOJI: &str = "❌";
    /// Placeholder for a missing content-type
    pub const NOT_AVAILABLE: &str = "N/A";
    /// URLs longer than this are truncated on the progress line
    pub const PROGRESS_URL_WIDTH: usize = 80;
}
