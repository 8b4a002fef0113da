//! Sitemap discovery
//!
//! This module fetches and parses sitemap documents and resolves a
//! nested sitemap tree into a flat, ordered sequence of page URLs.

pub mod fetcher;
pub mod pairs;
pub mod parser;
pub mod resolver;

// Re-export commonly used items
pub use fetcher::{FetchSitemap, HttpFetcher};
pub use pairs::{PairMatcher, UrlPair};
pub use parser::parse_sitemap;
pub use resolver::resolve_sitemap_tree;
