// ABOUTME: Parser for a single RSS <item> element.
// ABOUTME: Known item tags map to typed fields; everything else, extensions included, is skipped.

use crate::elements::{parse_category, parse_enclosure, parse_guid, parse_source};
use crate::error::ParseError;
use crate::models::Item;
use crate::namespace::{is_rss_namespace, NamespaceResolver};
use crate::pull::{EventKind, PullParser};
use crate::time_parse::parse_date;

/// Item-level tags with a typed destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemTag {
    Title,
    Description,
    Link,
    Author,
    Comments,
    PubDate,
    Source,
    Enclosure,
    Guid,
    Category,
    Unknown,
}

impl ItemTag {
    pub fn from_name(name: &str) -> Self {
        match name {
            "title" => ItemTag::Title,
            "description" => ItemTag::Description,
            "link" => ItemTag::Link,
            "author" => ItemTag::Author,
            "comments" => ItemTag::Comments,
            "pubDate" => ItemTag::PubDate,
            "source" => ItemTag::Source,
            "enclosure" => ItemTag::Enclosure,
            "guid" => ItemTag::Guid,
            "category" => ItemTag::Category,
            _ => ItemTag::Unknown,
        }
    }

    /// Like `from_name`, but elements from a foreign namespace are always `Unknown`.
    pub fn classify(space: &str, name: &str) -> Self {
        if is_rss_namespace(space) {
            Self::from_name(name)
        } else {
            ItemTag::Unknown
        }
    }
}

/// Builds one `Item` from the `<item>` the parser is positioned on.
pub fn parse_item(
    p: &mut PullParser<'_>,
    namespaces: &mut NamespaceResolver,
) -> Result<Item, ParseError> {
    p.expect(EventKind::StartTag, "item")?;
    let mut item = Item::default();

    while p.next_tag()? == EventKind::StartTag {
        namespaces.record_declarations(p.attributes());

        match ItemTag::classify(p.namespace(), p.name()) {
            ItemTag::Title => item.title = Some(p.next_text()?),
            ItemTag::Description => item.description = Some(p.next_text()?),
            ItemTag::Link => item.link = Some(p.next_text()?),
            ItemTag::Author => item.author = Some(p.next_text()?),
            ItemTag::Comments => item.comments = Some(p.next_text()?),
            ItemTag::PubDate => {
                let raw = p.next_text()?;
                item.pub_date_parsed = match parse_date(&raw) {
                    Ok(date) => Some(date),
                    Err(err) => {
                        tracing::debug!(error = %err, "item pubDate left unparsed");
                        None
                    }
                };
                item.pub_date = Some(raw);
            }
            ItemTag::Source => item.source = Some(parse_source(p)?),
            ItemTag::Enclosure => item.enclosure = Some(parse_enclosure(p)?),
            ItemTag::Guid => item.guid = Some(parse_guid(p)?),
            ItemTag::Category => item.categories.push(parse_category(p)?),
            ItemTag::Unknown => {
                tracing::trace!(
                    name = p.name(),
                    namespace = p.namespace(),
                    "skipping item element"
                );
                p.skip()?;
            }
        }
    }

    p.expect(EventKind::EndTag, "item")?;
    Ok(item)
}
