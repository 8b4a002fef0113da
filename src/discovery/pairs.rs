use regex::Regex;
use serde::Serialize;

use crate::core::error::{Result, SitemapProbeError};

/// A resolved URL together with the two values captured from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UrlPair {
    pub url: String,
    pub first: String,
    pub second: String,
}

/// Picks out URLs that name a pair of things, e.g.
/// `https://example.com/apps/(?<first>[^/]+)/integrations/(?<second>[^/]+)`.
///
/// The first two capture groups of the pattern are the pair.
#[derive(Debug, Clone)]
pub struct PairMatcher {
    pattern: Regex,
}

impl PairMatcher {
    pub fn new(pattern: &str) -> Result<Self> {
        let pattern = Regex::new(pattern)?;
        // captures_len counts the implicit whole-match group
        if pattern.captures_len() < 3 {
            return Err(SitemapProbeError::InvalidArgument(format!(
                "Pair pattern '{pattern}' needs at least two capture groups"
            )));
        }
        Ok(Self { pattern })
    }

    pub fn match_url(&self, url: &str) -> Option<UrlPair> {
        let captures = self.pattern.captures(url)?;
        let first = captures.get(1)?.as_str();
        let second = captures.get(2)?.as_str();
        if first.is_empty() || second.is_empty() {
            return None;
        }

        Some(UrlPair {
            url: url.to_string(),
            first: first.to_string(),
            second: second.to_string(),
        })
    }

    /// Matching pairs, in the order of `urls`.
    pub fn extract(&self, urls: &[String]) -> Vec<UrlPair> {
        urls.iter().filter_map(|url| self.match_url(url)).collect()
    }
}
