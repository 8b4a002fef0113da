use async_trait::async_trait;
use log::debug;

use crate::config::Config;
use crate::core::error::{Result, SitemapProbeError};
use crate::core::http::{build_client, describe_transport_error};

#[async_trait]
pub trait FetchSitemap {
    /// Fetch the raw body of the sitemap document at `url`.
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// Fetches sitemap documents over HTTP GET.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(build_client(config)?))
    }
}

#[async_trait]
impl FetchSitemap for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| SitemapProbeError::Fetch {
                url: url.to_string(),
                status: None,
                message: describe_transport_error(&err),
            })?;

        let status = response.status();
        debug!("GET {url} -> {}", status.as_u16());

        if !status.is_success() {
            return Err(SitemapProbeError::Fetch {
                url: url.to_string(),
                status: Some(status.as_u16()),
                message: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        response.text().await.map_err(|err| SitemapProbeError::Fetch {
            url: url.to_string(),
            status: Some(status.as_u16()),
            message: format!("could not read body: {}", describe_transport_error(&err)),
        })
    }
}
