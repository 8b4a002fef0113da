use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;

use crate::config::Config;
use crate::core::error::Result;
use crate::core::http::{build_client, describe_transport_error};
use crate::core::types::ValidationResult;
use crate::reporting::logging;

#[async_trait]
pub trait ProbeUrl {
    /// Probe one page URL. Never fails: transport errors become a failed result.
    async fn probe(&self, url: &str) -> ValidationResult;
}

/// Probes pages with HTTP HEAD and checks the served content-type.
#[derive(Debug, Clone)]
pub struct HttpProber {
    client: reqwest::Client,
    expected_content_type: String,
}

impl HttpProber {
    pub fn new(client: reqwest::Client, expected_content_type: &str) -> Self {
        Self {
            client,
            expected_content_type: expected_content_type.to_string(),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(
            build_client(config)?,
            config.expected_content_type(),
        ))
    }
}

#[async_trait]
impl ProbeUrl for HttpProber {
    async fn probe(&self, url: &str) -> ValidationResult {
        let result = match self.client.head(url).send().await {
            Ok(response) => {
                let content_type = response
                    .headers()
                    .get(CONTENT_TYPE)
                    .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned());
                let success =
                    matches_content_type(content_type.as_deref(), &self.expected_content_type);
                ValidationResult::from_response(url.to_string(), success, content_type)
            }
            Err(err) => ValidationResult::from_error(url.to_string(), describe_transport_error(&err)),
        };

        logging::log_url_result(&result);
        result
    }
}

/// Whether `content_type` starts with `expected`, ignoring ASCII case.
///
/// The status code plays no part: a 404 served as markdown still matches.
pub fn matches_content_type(content_type: Option<&str>, expected: &str) -> bool {
    content_type.is_some_and(|value| {
        value
            .trim_start()
            .to_ascii_lowercase()
            .starts_with(&expected.to_ascii_lowercase())
    })
}
