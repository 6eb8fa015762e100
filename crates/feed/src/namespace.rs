// ABOUTME: Namespace prefix bookkeeping for extension capture.
// ABOUTME: Resolves a namespace URL to a canonical prefix, then a feed-declared one, then itself.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::pull::Attr;

pub const RSS_09_NAMESPACE: &str = "http://channel.netscape.com/rdf/simple/0.9/";
pub const RSS_10_NAMESPACE: &str = "http://purl.org/rss/1.0/";

/// Well-known RSS extension namespaces and their canonical prefixes.
/// Keys are lowercase so lookups can lowercase the queried URL.
static GLOBAL_NAMESPACES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("http://webns.net/mvcb/", "admin"),
        ("http://purl.org/rss/1.0/modules/aggregation/", "ag"),
        ("http://purl.org/rss/1.0/modules/annotate/", "annotate"),
        ("http://media.tangent.org/rss/1.0/", "audio"),
        ("http://backend.userland.com/blogchannelmodule", "blogChannel"),
        ("http://web.resource.org/cc/", "cc"),
        ("http://www.microsoft.com/schemas/rss/core/2005", "cf"),
        ("http://purl.org/rss/1.0/modules/company", "company"),
        ("http://purl.org/rss/1.0/modules/content/", "content"),
        ("http://conversationsnetwork.org/rssnamespace-1.0/", "conversationsNetwork"),
        ("http://cyber.law.harvard.edu/rss/creativecommonsrssmodule.html", "creativeCommons"),
        ("http://purl.org/dc/elements/1.1/", "dc"),
        ("http://purl.org/dc/terms/", "dcterms"),
        ("http://purl.org/rss/1.0/modules/email/", "email"),
        ("http://purl.org/rss/1.0/modules/event/", "ev"),
        ("http://rssnamespace.org/feedburner/ext/1.0", "feedburner"),
        ("http://purl.org/syndication/history/1.0", "fh"),
        ("http://xmlns.com/foaf/0.1/", "foaf"),
        ("http://www.w3.org/2003/01/geo/wgs84_pos#", "geo"),
        ("http://geourl.org/rss/module/", "geourl"),
        ("http://www.georss.org/georss", "georss"),
        ("http://www.opengis.net/gml", "gml"),
        ("http://postneo.com/icbm", "icbm"),
        ("http://purl.org/rss/1.0/modules/image/", "image"),
        ("urn:atom-extension:indexing", "indexing"),
        ("http://www.itunes.com/dtds/podcast-1.0.dtd", "itunes"),
        ("http://purl.org/rss/1.0/modules/link/", "l"),
        ("http://www.w3.org/1998/math/mathml", "mathml"),
        ("http://search.yahoo.com/mrss/", "media"),
        ("http://a9.com/-/spec/opensearchrss/1.0/", "opensearch10"),
        ("http://a9.com/-/spec/opensearch/1.1/", "opensearch"),
        ("http://www.opml.org/spec2", "opml"),
        ("https://podcastindex.org/namespace/1.0", "podcast"),
        ("http://podlove.org/simple-chapters", "psc"),
        ("http://www.w3.org/1999/02/22-rdf-syntax-ns#", "rdf"),
        ("http://www.w3.org/2000/01/rdf-schema#", "rdfs"),
        ("http://purl.org/rss/1.0/modules/reference/", "ref"),
        ("http://purl.org/rss/1.0/modules/richequiv/", "reqv"),
        ("http://purl.org/rss/1.0/modules/rss091#", "rss091"),
        ("http://purl.org/rss/1.0/modules/search/", "search"),
        ("http://purl.org/rss/1.0/modules/slash/", "slash"),
        ("http://purl.org/rss/1.0/modules/servicestatus/", "ss"),
        ("http://hacks.benhammersley.com/rss/streaming/", "str"),
        ("http://purl.org/rss/1.0/modules/subscription/", "sub"),
        ("http://www.w3.org/2000/svg", "svg"),
        ("http://feedsync.org/2007/feedsync", "sx"),
        ("http://purl.org/rss/1.0/modules/syndication/", "sy"),
        ("http://purl.org/rss/1.0/modules/taxonomy/", "taxo"),
        ("http://purl.org/rss/1.0/modules/threading/", "thr"),
        ("http://purl.org/rss/1.0/modules/textinput/", "ti"),
        ("http://madskills.com/public/xml/rss/module/trackback/", "trackback"),
        ("http://wellformedweb.org/commentapi/", "wfw"),
        ("http://purl.org/rss/1.0/modules/wiki/", "wiki"),
        ("http://www.w3.org/1999/xhtml", "xhtml"),
        ("http://www.w3.org/1999/xlink", "xlink"),
        ("http://www.w3.org/xml/1998/namespace", "xml"),
    ])
});

/// True for elements that belong to RSS itself: no namespace, or the RSS 0.9
/// and 1.0 default namespaces used by RDF documents.
pub fn is_rss_namespace(space: &str) -> bool {
    space.is_empty() || space == RSS_09_NAMESPACE || space == RSS_10_NAMESPACE
}

/// Canonical prefix for a well-known namespace URL.
fn canonical_prefix(url: &str) -> Option<&'static str> {
    GLOBAL_NAMESPACES.get(url).copied()
}

/// Feed-local map of declared namespace URL to prefix.
///
/// One instance lives for exactly one parse so declarations never leak
/// between documents.
#[derive(Debug, Default, Clone)]
pub struct NamespaceResolver {
    declared: HashMap<String, String>,
}

impl NamespaceResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores every `xmlns:prefix="url"` declaration on a start tag.
    /// Both sides are lowercased. A later declaration of the same URL wins.
    pub fn record_declarations(&mut self, attrs: &[Attr]) {
        for attr in attrs.iter().filter(|attr| attr.is_namespace_decl()) {
            self.declared
                .insert(attr.value.to_lowercase(), attr.name.to_lowercase());
        }
    }

    /// Resolves a namespace URL (or undeclared raw prefix) to the prefix
    /// extensions are filed under.
    pub fn resolve(&self, space: &str) -> String {
        let lowered = space.to_lowercase();

        if let Some(prefix) = canonical_prefix(&lowered) {
            return prefix.to_string();
        }

        if let Some(prefix) = self.declared.get(&lowered) {
            return prefix.clone();
        }

        space.to_string()
    }

    /// Declared prefix for a URL, ignoring the global table.
    pub fn declared_prefix(&self, url: &str) -> Option<&str> {
        self.declared.get(&url.to_lowercase()).map(String::as_str)
    }
}
