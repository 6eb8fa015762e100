// ABOUTME: Single-element extractors for source, enclosure, guid, category, image and friends.
// ABOUTME: Each expects its start tag, reads attributes and/or text, and ends on its end tag.

use crate::error::ParseError;
use crate::models::{Category, Cloud, Enclosure, Guid, Image, Source, TextInput};
use crate::pull::{EventKind, PullParser};

fn attr(p: &PullParser<'_>, name: &str) -> Option<String> {
    p.attribute(name).map(str::to_string)
}

/// `<source url="...">Title</source>`
pub fn parse_source(p: &mut PullParser<'_>) -> Result<Source, ParseError> {
    p.expect(EventKind::StartTag, "source")?;
    let url = attr(p, "url");
    let title = p.next_text()?;
    p.expect(EventKind::EndTag, "source")?;
    Ok(Source { url, title })
}

/// `<enclosure url="..." length="..." type="..."/>`. Any content is ignored.
pub fn parse_enclosure(p: &mut PullParser<'_>) -> Result<Enclosure, ParseError> {
    p.expect(EventKind::StartTag, "enclosure")?;
    let enclosure = Enclosure {
        url: attr(p, "url"),
        length: attr(p, "length"),
        mime_type: attr(p, "type"),
    };
    p.skip()?;
    p.expect(EventKind::EndTag, "enclosure")?;
    Ok(enclosure)
}

pub fn parse_guid(p: &mut PullParser<'_>) -> Result<Guid, ParseError> {
    p.expect(EventKind::StartTag, "guid")?;
    let is_permalink = attr(p, "isPermaLink").or_else(|| attr(p, "isPermalink"));
    let value = p.next_text()?;
    p.expect(EventKind::EndTag, "guid")?;
    Ok(Guid {
        value,
        is_permalink,
    })
}

pub fn parse_category(p: &mut PullParser<'_>) -> Result<Category, ParseError> {
    p.expect(EventKind::StartTag, "category")?;
    let domain = attr(p, "domain");
    let value = p.next_text()?;
    p.expect(EventKind::EndTag, "category")?;
    Ok(Category { value, domain })
}

/// Channel `<image>`; unknown children are skipped.
pub fn parse_image(p: &mut PullParser<'_>) -> Result<Image, ParseError> {
    p.expect(EventKind::StartTag, "image")?;
    let mut image = Image::default();

    while p.next_tag()? == EventKind::StartTag {
        let slot = match p.name() {
            "url" => &mut image.url,
            "title" => &mut image.title,
            "link" => &mut image.link,
            "width" => &mut image.width,
            "height" => &mut image.height,
            _ => {
                p.skip()?;
                continue;
            }
        };
        *slot = Some(p.next_text()?);
    }

    p.expect(EventKind::EndTag, "image")?;
    Ok(image)
}

pub fn parse_text_input(p: &mut PullParser<'_>) -> Result<TextInput, ParseError> {
    p.expect(EventKind::StartTag, "textInput")?;
    let mut input = TextInput::default();

    while p.next_tag()? == EventKind::StartTag {
        let slot = match p.name() {
            "title" => &mut input.title,
            "description" => &mut input.description,
            "name" => &mut input.name,
            "link" => &mut input.link,
            _ => {
                p.skip()?;
                continue;
            }
        };
        *slot = Some(p.next_text()?);
    }

    p.expect(EventKind::EndTag, "textInput")?;
    Ok(input)
}

/// `<cloud>` is attribute-only.
pub fn parse_cloud(p: &mut PullParser<'_>) -> Result<Cloud, ParseError> {
    p.expect(EventKind::StartTag, "cloud")?;
    let cloud = Cloud {
        domain: attr(p, "domain"),
        port: attr(p, "port"),
        path: attr(p, "path"),
        register_procedure: attr(p, "registerProcedure"),
        protocol: attr(p, "protocol"),
    };
    p.skip()?;
    p.expect(EventKind::EndTag, "cloud")?;
    Ok(cloud)
}

/// Collects the text of every `child` element inside `container`, in order.
/// Used for `skipHours/hour` and `skipDays/day`.
pub fn parse_text_list(
    p: &mut PullParser<'_>,
    container: &str,
    child: &str,
) -> Result<Vec<String>, ParseError> {
    p.expect(EventKind::StartTag, container)?;
    let mut values = Vec::new();

    while p.next_tag()? == EventKind::StartTag {
        if p.name() == child {
            values.push(p.next_text()?);
        } else {
            p.skip()?;
        }
    }

    p.expect(EventKind::EndTag, container)?;
    Ok(values)
}
