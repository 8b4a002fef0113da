use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::core::constants::sitemap;
use crate::core::error::{Result, SitemapProbeError};
use crate::core::types::SitemapDocument;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    Index,
    Leaf,
}

impl Shape {
    fn entry_name(self) -> &'static [u8] {
        match self {
            Shape::Index => sitemap::INDEX_ENTRY.as_bytes(),
            Shape::Leaf => sitemap::URLSET_ENTRY.as_bytes(),
        }
    }

    fn into_document(self, locations: Vec<String>) -> SitemapDocument {
        match self {
            Shape::Index => SitemapDocument::Index(locations),
            Shape::Leaf => SitemapDocument::Leaf(locations),
        }
    }
}

/// Parse a sitemap document fetched from `url`.
///
/// Accepts a `<sitemapindex>` of `<sitemap><loc>` entries or a `<urlset>` of
/// `<url><loc>` entries, matching element names by local name. Locations are
/// trimmed and kept in document order; entries without a non-empty `<loc>`
/// are skipped. Anything else is a `Parse` error carrying `url`.
pub fn parse_sitemap(url: &str, xml: &str) -> Result<SitemapDocument> {
    parse_document(xml).map_err(|cause| SitemapProbeError::Parse {
        url: url.to_string(),
        cause,
    })
}

/// Tracks where the reader currently is relative to root, entry and `<loc>`.
#[derive(Debug, Default)]
struct ParseState {
    shape: Option<Shape>,
    depth: usize,
    root_closed: bool,
    in_entry: bool,
    in_loc: bool,
    loc_text: String,
    entry_loc: Option<String>,
    locations: Vec<String>,
}

impl ParseState {
    fn open(&mut self, element: &BytesStart) -> std::result::Result<(), String> {
        self.depth += 1;
        let name = element.local_name();
        let name = name.as_ref();

        match self.depth {
            1 => {
                if self.root_closed {
                    return Err("document has more than one root element".to_string());
                }
                self.shape = Some(if name == sitemap::INDEX_ROOT.as_bytes() {
                    Shape::Index
                } else if name == sitemap::URLSET_ROOT.as_bytes() {
                    Shape::Leaf
                } else {
                    return Err(format!(
                        "unexpected root element <{}>, expected <{}> or <{}>",
                        String::from_utf8_lossy(name),
                        sitemap::URLSET_ROOT,
                        sitemap::INDEX_ROOT
                    ));
                });
            }
            2 => {
                self.in_entry = self.shape.is_some_and(|shape| name == shape.entry_name());
                self.entry_loc = None;
            }
            3 if self.in_entry && name == sitemap::LOCATION.as_bytes() => {
                self.in_loc = true;
                self.loc_text.clear();
            }
            _ => {}
        }

        Ok(())
    }

    fn close(&mut self) {
        match self.depth {
            1 => self.root_closed = true,
            2 if self.in_entry => {
                if let Some(loc) = self.entry_loc.take() {
                    self.locations.push(loc);
                }
                self.in_entry = false;
            }
            3 if self.in_loc => {
                let loc = self.loc_text.trim();
                // First non-empty <loc> of an entry wins
                if self.entry_loc.is_none() && !loc.is_empty() {
                    self.entry_loc = Some(loc.to_string());
                }
                self.in_loc = false;
            }
            _ => {}
        }
        self.depth = self.depth.saturating_sub(1);
    }

    fn finish(self) -> std::result::Result<SitemapDocument, String> {
        if self.depth != 0 {
            return Err("unexpected end of document, root element is not closed".to_string());
        }
        match self.shape {
            Some(shape) => Ok(shape.into_document(self.locations)),
            None => Err("document has no root element".to_string()),
        }
    }
}

fn parse_document(xml: &str) -> std::result::Result<SitemapDocument, String> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut state = ParseState::default();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => state.open(&e)?,
            Ok(Event::Empty(e)) => {
                state.open(&e)?;
                state.close();
            }
            Ok(Event::End(_)) => state.close(),
            Ok(Event::Text(t)) if state.in_loc => {
                let text = t
                    .unescape()
                    .map_err(|e| format!("invalid text at position {}: {e}", reader.buffer_position()))?;
                state.loc_text.push_str(&text);
            }
            Ok(Event::CData(c)) if state.in_loc => {
                state.loc_text.push_str(&String::from_utf8_lossy(&c));
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(format!(
                    "malformed XML at position {}: {e}",
                    reader.buffer_position()
                ));
            }
            _ => {}
        }
    }

    state.finish()
}
