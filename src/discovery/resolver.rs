use log::{debug, info};
use std::collections::HashSet;
use url::Url;

use crate::core::error::{Result, SitemapProbeError};
use crate::core::types::SitemapDocument;
use crate::discovery::fetcher::FetchSitemap;
use crate::discovery::parser::parse_sitemap;
use crate::reporting::logging;

/// One unit of work on the resolution stack.
enum Step {
    /// Fetch and expand a sitemap
    Visit(String),
    /// All children of this index have been resolved
    Leave(String),
}

/// Resolve the sitemap tree rooted at `root_url` into its page URLs.
///
/// Walks the tree depth-first, left to right, with an explicit stack: each
/// child of an index is fully resolved before its next sibling is fetched,
/// and one fetch completes before the next begins. Page URLs keep the order
/// they were encountered in, duplicates included. A sitemap listed more than
/// once is resolved each time it is listed.
///
/// Any fetch or parse failure aborts the walk, as does an index that
/// references one of its own ancestors (`Cycle`).
pub async fn resolve_sitemap_tree<F>(fetcher: &F, root_url: &str) -> Result<Vec<String>>
where
    F: FetchSitemap + Sync + ?Sized,
{
    let mut pending = vec![Step::Visit(root_url.to_string())];
    // Indexes on the path from the root to the sitemap being visited
    let mut ancestors = HashSet::new();
    let mut resolved = Vec::new();
    let mut fetched = 0usize;

    while let Some(step) = pending.pop() {
        let sitemap_url = match step {
            Step::Visit(url) => url,
            Step::Leave(url) => {
                ancestors.remove(&url);
                continue;
            }
        };

        if ancestors.contains(&sitemap_url) {
            return Err(SitemapProbeError::Cycle { url: sitemap_url });
        }

        logging::log_sitemap_fetch(&sitemap_url);
        let xml = fetcher.fetch(&sitemap_url).await?;
        fetched += 1;

        match parse_sitemap(&sitemap_url, &xml)? {
            SitemapDocument::Index(children) => {
                debug!("{sitemap_url} is an index of {} sitemaps", children.len());
                ancestors.insert(sitemap_url.clone());
                pending.push(Step::Leave(sitemap_url.clone()));
                // Reversed so the first child is popped next
                for child in children.iter().rev() {
                    let child = resolve_location(&sitemap_url, child);
                    debug!("Found nested sitemap: {child}");
                    pending.push(Step::Visit(child));
                }
            }
            SitemapDocument::Leaf(urls) => {
                debug!("{sitemap_url} lists {} URLs", urls.len());
                resolved.extend(urls.iter().map(|loc| resolve_location(&sitemap_url, loc)));
            }
        }
    }

    info!("Resolved {} URLs from {fetched} sitemap(s)", resolved.len());
    Ok(resolved)
}

/// Join a relative `<loc>` value onto the sitemap it came from.
///
/// Absolute locations are returned verbatim.
fn resolve_location(sitemap_url: &str, loc: &str) -> String {
    match Url::parse(loc) {
        Err(url::ParseError::RelativeUrlWithoutBase) => Url::parse(sitemap_url)
            .and_then(|base| base.join(loc))
            .map(String::from)
            .unwrap_or_else(|_| loc.to_string()),
        _ => loc.to_string(),
    }
}
