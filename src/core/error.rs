use std::fmt;

/// Error types for sitemap-probe operations
///
/// Everything here is fatal to a run. Per-URL validation failures are never
/// represented as errors; they are captured as `ValidationResult` data.
#[derive(Debug)]
pub enum SitemapProbeError {
    /// IO error (config files, writing reports)
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// HTTP client construction error
    Http(reqwest::Error),

    /// A sitemap document could not be fetched
    Fetch {
        url: String,
        status: Option<u16>,
        message: String,
    },

    /// A sitemap document is not well-formed or has an unexpected shape
    Parse { url: String, cause: String },

    /// A sitemap was referenced again during the same resolution run
    Cycle { url: String },

    /// Regex compilation error
    Regex(regex::Error),

    /// TOML parsing error
    TomlParsing(toml::de::Error),

    /// Invalid argument error
    InvalidArgument(String),
}

impl fmt::Display for SitemapProbeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SitemapProbeError::Io(err) => write!(f, "IO error: {err}"),
            SitemapProbeError::Config(msg) => write!(f, "Configuration error: {msg}"),
            SitemapProbeError::Http(err) => write!(f, "HTTP error: {err}"),
            SitemapProbeError::Fetch {
                url,
                status: Some(status),
                message,
            } => write!(f, "Failed to fetch sitemap {url}: {status} {message}"),
            SitemapProbeError::Fetch {
                url,
                status: None,
                message,
            } => write!(f, "Failed to fetch sitemap {url}: {message}"),
            SitemapProbeError::Parse { url, cause } => {
                write!(f, "Failed to parse sitemap {url}: {cause}")
            }
            SitemapProbeError::Cycle { url } => {
                write!(f, "Sitemap cycle detected: {url} was already visited")
            }
            SitemapProbeError::Regex(err) => write!(f, "Regex error: {err}"),
            SitemapProbeError::TomlParsing(err) => write!(f, "TOML parsing error: {err}"),
            SitemapProbeError::InvalidArgument(msg) => write!(f, "Invalid argument: {msg}"),
        }
    }
}

impl std::error::Error for SitemapProbeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SitemapProbeError::Io(err) => Some(err),
            SitemapProbeError::Http(err) => Some(err),
            SitemapProbeError::Regex(err) => Some(err),
            SitemapProbeError::TomlParsing(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SitemapProbeError {
    fn from(err: std::io::Error) -> Self {
        SitemapProbeError::Io(err)
    }
}

impl From<reqwest::Error> for SitemapProbeError {
    fn from(err: reqwest::Error) -> Self {
        SitemapProbeError::Http(err)
    }
}

impl From<regex::Error> for SitemapProbeError {
    fn from(err: regex::Error) -> Self {
        SitemapProbeError::Regex(err)
    }
}

impl From<toml::de::Error> for SitemapProbeError {
    fn from(err: toml::de::Error) -> Self {
        SitemapProbeError::TomlParsing(err)
    }
}

/// Type alias for Results using SitemapProbeError
pub type Result<T> = std::result::Result<T, SitemapProbeError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_error_display() {
        let config_error = SitemapProbeError::Config("Invalid timeout".to_string());
        assert_eq!(
            format!("{config_error}"),
            "Configuration error: Invalid timeout"
        );

        let cycle_error = SitemapProbeError::Cycle {
            url: "https://example.com/sitemap.xml".to_string(),
        };
        assert_eq!(
            format!("{cycle_error}"),
            "Sitemap cycle detected: https://example.com/sitemap.xml was already visited"
        );
    }

    #[test]
    fn test_fetch_error_display_with_and_without_status() {
        let with_status = SitemapProbeError::Fetch {
            url: "https://example.com/sitemap.xml".to_string(),
            status: Some(404),
            message: "Not Found".to_string(),
        };
        assert_eq!(
            with_status.to_string(),
            "Failed to fetch sitemap https://example.com/sitemap.xml: 404 Not Found"
        );

        let transport = SitemapProbeError::Fetch {
            url: "https://example.com/sitemap.xml".to_string(),
            status: None,
            message: "connection refused".to_string(),
        };
        assert_eq!(
            transport.to_string(),
            "Failed to fetch sitemap https://example.com/sitemap.xml: connection refused"
        );
    }

    #[test]
    fn test_parse_error_display() {
        let err = SitemapProbeError::Parse {
            url: "https://example.com/sitemap.xml".to_string(),
            cause: "unexpected root element <html>".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to parse sitemap https://example.com/sitemap.xml: unexpected root element <html>"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "test");
        let err = SitemapProbeError::from(io_error);

        match err {
            SitemapProbeError::Io(_) => {} // Expected
            _ => panic!("Expected Io variant"),
        }
    }

    #[test]
    #[allow(clippy::invalid_regex)]
    fn test_error_from_regex() {
        let regex_error = regex::Regex::new("[invalid").unwrap_err();
        let err = SitemapProbeError::from(regex_error);

        match err {
            SitemapProbeError::Regex(_) => {} // Expected
            _ => panic!("Expected Regex variant"),
        }
    }

    #[test]
    fn test_error_from_toml() {
        let toml_error = toml::from_str::<toml::Value>("invalid toml [").unwrap_err();
        let err = SitemapProbeError::from(toml_error);

        match err {
            SitemapProbeError::TomlParsing(_) => {} // Expected
            _ => panic!("Expected TomlParsing variant"),
        }
    }

    #[test]
    fn test_error_source() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "test");
        let err = SitemapProbeError::Io(io_error);
        assert!(err.source().is_some());

        let cycle = SitemapProbeError::Cycle {
            url: "x".to_string(),
        };
        assert!(cycle.source().is_none());
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SitemapProbeError>();
    }
}
