// ABOUTME: Parser for the RSS <channel> element.
// ABOUTME: Known RSS tags go to typed fields; foreign-namespace elements are filed as extensions.

use crate::elements::{
    parse_category, parse_cloud, parse_image, parse_text_input, parse_text_list,
};
use crate::error::ParseError;
use crate::extension::parse_extension;
use crate::item::parse_item;
use crate::models::Feed;
use crate::namespace::{is_rss_namespace, NamespaceResolver};
use crate::options::ParseOptions;
use crate::pull::{EventKind, PullParser};
use crate::time_parse::parse_date;

/// Channel-level tags with a typed destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelTag {
    Title,
    Description,
    Link,
    Language,
    Copyright,
    ManagingEditor,
    WebMaster,
    PubDate,
    LastBuildDate,
    Generator,
    Docs,
    Ttl,
    Rating,
    Image,
    TextInput,
    Cloud,
    SkipHours,
    SkipDays,
    Item,
    Category,
    Unknown,
}

impl ChannelTag {
    pub fn from_name(name: &str) -> Self {
        match name {
            "title" => ChannelTag::Title,
            "description" => ChannelTag::Description,
            "link" => ChannelTag::Link,
            "language" => ChannelTag::Language,
            "copyright" => ChannelTag::Copyright,
            "managingEditor" => ChannelTag::ManagingEditor,
            "webMaster" => ChannelTag::WebMaster,
            "pubDate" => ChannelTag::PubDate,
            "lastBuildDate" => ChannelTag::LastBuildDate,
            "generator" => ChannelTag::Generator,
            "docs" => ChannelTag::Docs,
            "ttl" => ChannelTag::Ttl,
            "rating" => ChannelTag::Rating,
            "image" => ChannelTag::Image,
            "textInput" => ChannelTag::TextInput,
            "cloud" => ChannelTag::Cloud,
            "skipHours" => ChannelTag::SkipHours,
            "skipDays" => ChannelTag::SkipDays,
            "item" => ChannelTag::Item,
            "category" => ChannelTag::Category,
            _ => ChannelTag::Unknown,
        }
    }

    /// Like `from_name`, but elements from a foreign namespace are always `Unknown`.
    pub fn classify(space: &str, name: &str) -> Self {
        if is_rss_namespace(space) {
            Self::from_name(name)
        } else {
            ChannelTag::Unknown
        }
    }
}

/// Builds a `Feed` from the `<channel>` the parser is positioned on.
/// The returned feed has an empty `version`; the root parser stamps it.
pub fn parse_channel(
    p: &mut PullParser<'_>,
    namespaces: &mut NamespaceResolver,
    options: &ParseOptions,
) -> Result<Feed, ParseError> {
    p.expect(EventKind::StartTag, "channel")?;
    let mut feed = Feed::default();

    while p.next_tag()? == EventKind::StartTag {
        namespaces.record_declarations(p.attributes());

        match ChannelTag::classify(p.namespace(), p.name()) {
            ChannelTag::Title => feed.title = Some(p.next_text()?),
            ChannelTag::Description => feed.description = Some(p.next_text()?),
            ChannelTag::Link => feed.link = Some(p.next_text()?),
            ChannelTag::Language => feed.language = Some(p.next_text()?),
            ChannelTag::Copyright => feed.copyright = Some(p.next_text()?),
            ChannelTag::ManagingEditor => feed.managing_editor = Some(p.next_text()?),
            ChannelTag::WebMaster => feed.web_master = Some(p.next_text()?),
            ChannelTag::PubDate => {
                let raw = p.next_text()?;
                feed.pub_date_parsed = parse_optional_date(&raw, "pubDate");
                feed.pub_date = Some(raw);
            }
            ChannelTag::LastBuildDate => {
                let raw = p.next_text()?;
                feed.last_build_date_parsed = parse_optional_date(&raw, "lastBuildDate");
                feed.last_build_date = Some(raw);
            }
            ChannelTag::Generator => feed.generator = Some(p.next_text()?),
            ChannelTag::Docs => feed.docs = Some(p.next_text()?),
            ChannelTag::Ttl => feed.ttl = Some(p.next_text()?),
            ChannelTag::Rating => feed.rating = Some(p.next_text()?),
            ChannelTag::Image => feed.image = Some(parse_image(p)?),
            ChannelTag::TextInput => feed.text_input = Some(parse_text_input(p)?),
            ChannelTag::Cloud => feed.cloud = Some(parse_cloud(p)?),
            ChannelTag::SkipHours => feed.skip_hours = parse_text_list(p, "skipHours", "hour")?,
            ChannelTag::SkipDays => feed.skip_days = parse_text_list(p, "skipDays", "day")?,
            ChannelTag::Item => feed.items.push(parse_item(p, namespaces)?),
            ChannelTag::Category => feed.categories.push(parse_category(p)?),
            ChannelTag::Unknown if !p.namespace().is_empty() => {
                let prefix = namespaces.resolve(p.namespace());
                let ext = parse_extension(p, options.max_extension_depth)?;
                feed.extensions
                    .entry(prefix)
                    .or_default()
                    .entry(ext.name.clone())
                    .or_default()
                    .push(ext);
            }
            ChannelTag::Unknown => {
                tracing::trace!(name = p.name(), "skipping channel element");
                p.skip()?;
            }
        }
    }

    p.expect(EventKind::EndTag, "channel")?;
    Ok(feed)
}

fn parse_optional_date(raw: &str, field: &'static str) -> Option<chrono::DateTime<chrono::Utc>> {
    match parse_date(raw) {
        Ok(date) => Some(date),
        Err(err) => {
            tracing::debug!(field, error = %err, "channel date left unparsed");
            None
        }
    }
}
