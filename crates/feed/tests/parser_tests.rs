// ABOUTME: Integration tests for RSS/RDF document parsing.
// ABOUTME: Covers version detection, item ordering, root-level items, dates and error kinds.

use feedgraph_rss::{parse_feed, Category, Enclosure, ParseError};
use pretty_assertions::assert_eq;

/// Channel-only RSS 2.0 feed with two items and channel categories.
#[test]
fn test_rss2_channel_items_in_order() {
    let rss = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
    <channel>
        <title>Tech Blog</title>
        <link>https://example.com</link>
        <description>A tech blog about programming</description>
        <language>en-us</language>
        <pubDate>Mon, 15 Jan 2024 10:00:00 +0000</pubDate>
        <category>tech</category>
        <category domain="https://example.com/tags">rust</category>
        <item>
            <title>First Article</title>
            <link>https://example.com/post1</link>
            <guid>article-1</guid>
            <pubDate>Mon, 15 Jan 2024 10:00:00 +0000</pubDate>
            <description>This is a summary of the first article.</description>
        </item>
        <item>
            <title>Second Article</title>
            <link>https://example.com/post2</link>
            <guid isPermaLink="false">article-2</guid>
        </item>
    </channel>
</rss>"#;

    let feed = parse_feed(rss).unwrap();

    assert_eq!(feed.version, "2.0");
    assert_eq!(feed.title.as_deref(), Some("Tech Blog"));
    assert_eq!(feed.link.as_deref(), Some("https://example.com"));
    assert_eq!(feed.language.as_deref(), Some("en-us"));
    assert!(feed.pub_date_parsed.is_some());

    let titles: Vec<&str> = feed
        .items
        .iter()
        .filter_map(|i| i.title.as_deref())
        .collect();
    assert_eq!(titles, vec!["First Article", "Second Article"]);

    assert_eq!(
        feed.categories,
        vec![
            Category {
                value: "tech".to_string(),
                domain: None,
            },
            Category {
                value: "rust".to_string(),
                domain: Some("https://example.com/tags".to_string()),
            },
        ]
    );

    let guid = feed.items[1].guid.as_ref().unwrap();
    assert_eq!(guid.value, "article-2");
    assert_eq!(guid.is_permalink.as_deref(), Some("false"));
    assert!(feed.extensions.is_empty());
}

/// RSS 0.91 layout with items beside the channel: they land after channel items.
#[test]
fn test_root_level_items_appended_after_channel_items() {
    let rss = r#"<rss version="0.91">
    <item><title>root-1</title></item>
    <channel>
        <title>Legacy</title>
        <item><title>chan-1</title></item>
        <item><title>chan-2</title></item>
    </channel>
    <item><title>root-2</title></item>
</rss>"#;

    let feed = parse_feed(rss).unwrap();
    assert_eq!(feed.version, "0.91");

    let titles: Vec<&str> = feed
        .items
        .iter()
        .filter_map(|i| i.title.as_deref())
        .collect();
    assert_eq!(titles, vec!["chan-1", "chan-2", "root-1", "root-2"]);
}

/// RSS 1.0 document: items are siblings of channel under rdf:RDF.
#[test]
fn test_rdf_10_feed() {
    let rdf = r#"<?xml version="1.0"?>
<rdf:RDF
  xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
  xmlns:dc="http://purl.org/dc/elements/1.1/"
  xmlns="http://purl.org/rss/1.0/">
  <channel rdf:about="http://example.com/">
    <title>RDF Site</title>
    <link>http://example.com/</link>
    <description>An RSS 1.0 feed</description>
    <dc:date>2024-01-15T10:00:00Z</dc:date>
  </channel>
  <item rdf:about="http://example.com/1">
    <title>One</title>
    <link>http://example.com/1</link>
  </item>
  <item rdf:about="http://example.com/2">
    <title>Two</title>
    <link>http://example.com/2</link>
  </item>
</rdf:RDF>"#;

    let feed = parse_feed(rdf).unwrap();
    assert_eq!(feed.version, "1.0");
    assert_eq!(feed.title.as_deref(), Some("RDF Site"));
    assert_eq!(feed.items.len(), 2);
    assert_eq!(feed.items[1].link.as_deref(), Some("http://example.com/2"));
    assert_eq!(feed.extension("dc", "date")[0].value, "2024-01-15T10:00:00Z");
}

#[test]
fn test_rdf_09_and_unknown_namespace_versions() {
    let rdf09 = r#"<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
        xmlns="http://channel.netscape.com/rdf/simple/0.9/"><channel><title>Old</title></channel></rdf:RDF>"#;
    assert_eq!(parse_feed(rdf09).unwrap().version, "0.9");

    let unknown = r#"<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
        xmlns="http://example.com/not-rss/"><channel/></rdf:RDF>"#;
    assert_eq!(parse_feed(unknown).unwrap().version, "");
}

#[test]
fn test_missing_version_defaults_to_2_0() {
    let feed = parse_feed("<rss><channel><title>x</title></channel></rss>").unwrap();
    assert_eq!(feed.version, "2.0");
}

#[test]
fn test_channel_as_root_is_structural_error() {
    let err = parse_feed("<channel><title>x</title></channel>").unwrap_err();
    assert!(err.is_mismatch(), "unexpected error: {err}");
    let message = err.to_string();
    assert!(message.contains("<rss>"), "{message}");
    assert!(message.contains("<RDF>"), "{message}");
}

#[test]
fn test_no_channel_is_missing_channel() {
    let err = parse_feed(r#"<rss version="2.0"><item><title>x</title></item></rss>"#).unwrap_err();
    assert_eq!(err, ParseError::MissingChannel);

    let err = parse_feed(r#"<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"/>"#)
        .unwrap_err();
    assert_eq!(err, ParseError::MissingChannel);
}

#[test]
fn test_second_channel_replaces_first() {
    let feed = parse_feed(
        "<rss><channel><title>first</title><item><title>a</title></item></channel>\
         <channel><title>second</title></channel></rss>",
    )
    .unwrap();
    assert_eq!(feed.title.as_deref(), Some("second"));
    assert!(feed.items.is_empty());
}

#[test]
fn test_unparseable_pub_date_is_not_fatal() {
    let feed = parse_feed(
        "<rss><channel><pubDate>the day before yesterday</pubDate>\
         <item><pubDate>32 Foo 2024</pubDate></item></channel></rss>",
    )
    .unwrap();
    assert_eq!(feed.pub_date.as_deref(), Some("the day before yesterday"));
    assert_eq!(feed.pub_date_parsed, None);
    assert_eq!(feed.items[0].pub_date.as_deref(), Some("32 Foo 2024"));
    assert_eq!(feed.items[0].pub_date_parsed, None);
}

#[test]
fn test_enclosure_and_source_attributes_round_trip() {
    let feed = parse_feed(
        r#"<rss><channel><item>
            <enclosure url="http://x/a.mp3" length="123" type="audio/mpeg"/>
            <source url="http://x/upstream.xml">Upstream</source>
        </item></channel></rss>"#,
    )
    .unwrap();
    let item = &feed.items[0];
    assert_eq!(
        item.enclosure,
        Some(Enclosure {
            url: Some("http://x/a.mp3".to_string()),
            length: Some("123".to_string()),
            mime_type: Some("audio/mpeg".to_string()),
        })
    );
    let source = item.source.as_ref().unwrap();
    assert_eq!(source.url.as_deref(), Some("http://x/upstream.xml"));
    assert_eq!(source.title, "Upstream");
}

#[test]
fn test_channel_image_is_separate_from_channel_title() {
    let feed = parse_feed(
        "<rss><channel><title>Channel</title>\
         <image><url>http://x/logo.png</url><title>Logo</title><link>http://x/</link></image>\
         </channel></rss>",
    )
    .unwrap();
    assert_eq!(feed.title.as_deref(), Some("Channel"));
    let image = feed.image.unwrap();
    assert_eq!(image.title.as_deref(), Some("Logo"));
    assert_eq!(image.url.as_deref(), Some("http://x/logo.png"));
}

#[test]
fn test_entities_and_cdata_in_text() {
    let feed = parse_feed(
        "<rss><channel><title>Q&amp;A</title>\
         <description><![CDATA[<p>Hello</p>]]></description></channel></rss>",
    )
    .unwrap();
    assert_eq!(feed.title.as_deref(), Some("Q&A"));
    assert_eq!(feed.description.as_deref(), Some("<p>Hello</p>"));
}

#[test]
fn test_malformed_xml_is_stream_error() {
    let err = parse_feed("<rss><channel><title>x</channel></rss>").unwrap_err();
    assert!(
        matches!(err, ParseError::Xml(_) | ParseError::Mismatch { .. }),
        "unexpected error: {err:?}"
    );
}

#[test]
fn test_truncated_document() {
    let err = parse_feed("<rss><channel><title>x</title>").unwrap_err();
    assert!(
        matches!(err, ParseError::Xml(_) | ParseError::UnexpectedEof),
        "unexpected error: {err:?}"
    );
}

#[test]
fn test_empty_document() {
    assert!(parse_feed("").is_err());
}

#[test]
fn test_atom_is_rejected() {
    let err = parse_feed(r#"<feed xmlns="http://www.w3.org/2005/Atom"><title>x</title></feed>"#)
        .unwrap_err();
    assert!(err.is_mismatch());
}
