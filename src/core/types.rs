use serde::Serialize;
use std::fmt;

/// A parsed sitemap document.
///
/// Only lives for one resolution step: the resolver either queues the child
/// sitemaps of an `Index` or appends the page URLs of a `Leaf`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SitemapDocument {
    /// Child sitemap URLs, in document order
    Index(Vec<String>),
    /// Page URLs, in document order
    Leaf(Vec<String>),
}

impl SitemapDocument {
    /// Location values carried by this document, whatever its kind.
    pub fn locations(&self) -> &[String] {
        match self {
            SitemapDocument::Index(locs) | SitemapDocument::Leaf(locs) => locs,
        }
    }
}

/// Outcome of probing a single page URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub url: String,
    pub success: bool,
    /// Observed `content-type` header, if the server sent one
    pub content_type: Option<String>,
    /// Transport error message, if the request never got a response
    pub error: Option<String>,
}

impl ValidationResult {
    /// Result for a URL that answered, classified by its content-type.
    pub fn from_response(url: String, success: bool, content_type: Option<String>) -> Self {
        Self {
            url,
            success,
            content_type,
            error: None,
        }
    }

    /// Result for a URL whose request failed before a response arrived.
    pub fn from_error(url: String, error: String) -> Self {
        Self {
            url,
            success: false,
            content_type: None,
            error: Some(error),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.success
    }

    pub fn is_not_ok(&self) -> bool {
        !self.success
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match (&self.content_type, &self.error) {
            (_, Some(error)) => write!(f, "{} - {}", self.url, error),
            (Some(content_type), None) => write!(f, "{} - {}", self.url, content_type),
            (None, None) => write!(f, "{} - no content-type", self.url),
        }
    }
}

/// Totals and ordered results of a validation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationSummary {
    pub total: usize,
    pub successful: usize,
    pub failed: usize,
    /// One entry per resolved URL, in resolution order
    pub results: Vec<ValidationResult>,
}

impl ValidationSummary {
    pub fn from_results(results: Vec<ValidationResult>) -> Self {
        let total = results.len();
        let successful = results.iter().filter(|r| r.is_ok()).count();
        Self {
            total,
            successful,
            failed: total - successful,
            results,
        }
    }

    pub fn failures(&self) -> impl Iterator<Item = &ValidationResult> {
        self.results.iter().filter(|r| r.is_not_ok())
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}
