// ABOUTME: Integration tests for namespaced extension capture.
// ABOUTME: Covers prefix canonicalisation, multiplicity, nesting and the item-level scope boundary.

use feedgraph_rss::parse_feed;
use pretty_assertions::assert_eq;

#[test]
fn test_podcast_channel_extensions() {
    let rss = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0" xmlns:itunes="http://www.itunes.com/dtds/podcast-1.0.dtd">
    <channel>
        <title>Tech Podcast</title>
        <itunes:image href="https://podcast/img.jpg"/>
        <itunes:author>Jane</itunes:author>
        <itunes:category text="Technology">
            <itunes:category text="Software How-To"/>
        </itunes:category>
        <itunes:category text="News"/>
        <item>
            <title>Episode 1</title>
            <itunes:duration>01:02:03</itunes:duration>
            <enclosure url="https://cdn/show.mp3" type="audio/mpeg" length="12345"/>
        </item>
    </channel>
</rss>"#;

    let feed = parse_feed(rss).unwrap();

    let image = &feed.extension("itunes", "image")[0];
    assert_eq!(image.attrs.get("href").map(String::as_str), Some("https://podcast/img.jpg"));
    assert_eq!(feed.extension("itunes", "author")[0].value, "Jane");

    let categories = feed.extension("itunes", "category");
    assert_eq!(categories.len(), 2);
    assert_eq!(categories[0].attrs["text"], "Technology");
    assert_eq!(categories[1].attrs["text"], "News");
    let nested = categories[0].child("category").unwrap();
    assert_eq!(nested.attrs["text"], "Software How-To");

    // Item-level extensions are not captured anywhere.
    assert!(feed.extension("itunes", "duration").is_empty());
    assert_eq!(feed.extensions.len(), 1);
    assert_eq!(feed.items.len(), 1);
}

#[test]
fn test_same_url_different_author_prefixes_resolve_alike() {
    let a = parse_feed(
        r#"<rss xmlns:dc="http://purl.org/dc/elements/1.1/"><channel>
            <dc:creator>Alice</dc:creator></channel></rss>"#,
    )
    .unwrap();
    let b = parse_feed(
        r#"<rss xmlns:dublin="http://purl.org/dc/elements/1.1/"><channel>
            <dublin:creator>Bob</dublin:creator></channel></rss>"#,
    )
    .unwrap();

    assert_eq!(a.extension("dc", "creator")[0].value, "Alice");
    assert_eq!(b.extension("dc", "creator")[0].value, "Bob");
    assert!(b.extensions.get("dublin").is_none());
}

#[test]
fn test_sibling_extensions_keep_document_order() {
    let feed = parse_feed(
        r#"<rss><channel xmlns:acme="http://acme.example/ns">
            <acme:tag>one</acme:tag>
            <title>between</title>
            <acme:tag>two</acme:tag>
        </channel></rss>"#,
    )
    .unwrap();

    let values: Vec<&str> = feed
        .extension("acme", "tag")
        .iter()
        .map(|e| e.value.as_str())
        .collect();
    assert_eq!(values, vec!["one", "two"]);
    assert_eq!(feed.title.as_deref(), Some("between"));
}

#[test]
fn test_later_declaration_of_same_url_wins() {
    let feed = parse_feed(
        r#"<rss xmlns:a="http://acme.example/ns"><channel>
            <title xmlns:acme="http://acme.example/ns">T</title>
            <a:thing>x</a:thing>
        </channel></rss>"#,
    )
    .unwrap();
    assert_eq!(feed.extension("acme", "thing")[0].value, "x");
}

#[test]
fn test_deep_extension_tree() {
    let feed = parse_feed(
        r#"<rss xmlns:media="http://search.yahoo.com/mrss/"><channel>
            <media:group>
                <media:content url="http://x/1.mp4" medium="video">
                    <media:title>Clip</media:title>
                    <media:thumbnail url="http://x/1.jpg"/>
                </media:content>
                <media:content url="http://x/2.mp4"/>
            </media:group>
        </channel></rss>"#,
    )
    .unwrap();

    let group = &feed.extension("media", "group")[0];
    let contents = &group.children["content"];
    assert_eq!(contents.len(), 2);
    assert_eq!(contents[0].attrs["medium"], "video");
    assert_eq!(contents[0].child("title").unwrap().value, "Clip");
    assert_eq!(contents[0].child("thumbnail").unwrap().attrs["url"], "http://x/1.jpg");
    assert_eq!(contents[1].attrs["url"], "http://x/2.mp4");
}

#[test]
fn test_extensions_serialize_to_json() {
    let feed = parse_feed(
        r#"<rss xmlns:sy="http://purl.org/rss/1.0/modules/syndication/"><channel>
            <sy:updatePeriod>hourly</sy:updatePeriod></channel></rss>"#,
    )
    .unwrap();
    let json = serde_json::to_value(&feed).unwrap();
    assert_eq!(
        json["extensions"]["sy"]["updatePeriod"][0]["value"],
        serde_json::json!("hourly")
    );
}
