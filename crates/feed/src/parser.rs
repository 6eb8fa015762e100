// ABOUTME: Root-level RSS/RDF parsing: version detection and channel/item collection.
// ABOUTME: RssParser owns the per-parse namespace table; parse_feed is the stateless entry point.

use crate::channel::parse_channel;
use crate::error::ParseError;
use crate::item::parse_item;
use crate::models::Feed;
use crate::namespace::{NamespaceResolver, RSS_09_NAMESPACE, RSS_10_NAMESPACE};
use crate::options::ParseOptions;
use crate::pull::{EventKind, PullParser};

const DEFAULT_RSS_VERSION: &str = "2.0";

/// Parses an RSS 0.9x/2.0 or RDF (RSS 0.9/1.0) document with default options.
///
/// # Returns
/// * `Ok(Feed)` - fully populated feed
/// * `Err(ParseError)` - the first fatal condition encountered
pub fn parse_feed(document: &str) -> Result<Feed, ParseError> {
    RssParser::new().parse(document)
}

/// Reusable parser. Namespace declarations are reset for every document.
#[derive(Debug, Default)]
pub struct RssParser {
    options: ParseOptions,
    namespaces: NamespaceResolver,
}

impl RssParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ParseOptions) -> Self {
        Self {
            options,
            namespaces: NamespaceResolver::new(),
        }
    }

    pub fn parse(&mut self, document: &str) -> Result<Feed, ParseError> {
        self.namespaces = NamespaceResolver::new();
        let mut p = PullParser::new(document);
        p.next_tag()?;
        self.parse_root(&mut p)
    }

    fn parse_root(&mut self, p: &mut PullParser<'_>) -> Result<Feed, ParseError> {
        expect_root(p, EventKind::StartTag)?;
        self.namespaces.record_declarations(p.attributes());
        let version = detect_version(p);
        tracing::debug!(root = p.name(), version = %version, "detected feed version");

        let mut channel: Option<Feed> = None;
        let mut root_items = Vec::new();

        while p.next_tag()? == EventKind::StartTag {
            self.namespaces.record_declarations(p.attributes());

            match p.name() {
                "channel" => {
                    channel = Some(parse_channel(p, &mut self.namespaces, &self.options)?);
                }
                // Early RSS versions put items beside the channel rather than inside it.
                "item" => root_items.push(parse_item(p, &mut self.namespaces)?),
                _ => {
                    tracing::trace!(name = p.name(), "skipping root element");
                    p.skip()?;
                }
            }
        }

        expect_root(p, EventKind::EndTag)?;

        let mut feed = channel.ok_or(ParseError::MissingChannel)?;
        feed.items.extend(root_items);
        feed.version = version;
        Ok(feed)
    }
}

/// The root must be `rss` or `RDF`; a miss reports both expectations.
fn expect_root(p: &PullParser<'_>, kind: EventKind) -> Result<(), ParseError> {
    let rss = p.expect(kind, "rss");
    let rdf = p.expect(kind, "RDF");
    match (rss, rdf) {
        (Err(rss_err), Err(rdf_err)) => Err(rss_err.or(rdf_err)),
        _ => Ok(()),
    }
}

fn detect_version(p: &PullParser<'_>) -> String {
    match p.name() {
        "rss" => match p.attribute("version") {
            Some(version) if !version.is_empty() => version.to_string(),
            _ => DEFAULT_RSS_VERSION.to_string(),
        },
        "RDF" => match p.attribute("xmlns") {
            Some(RSS_09_NAMESPACE) => "0.9".to_string(),
            Some(RSS_10_NAMESPACE) => "1.0".to_string(),
            _ => String::new(),
        },
        _ => String::new(),
    }
}
