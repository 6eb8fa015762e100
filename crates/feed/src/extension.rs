// ABOUTME: Generic capture of arbitrary (namespaced) XML subtrees.
// ABOUTME: Builds Extension trees with attributes, last text value, and ordered children by name.

use crate::error::ParseError;
use crate::models::Extension;
use crate::pull::{EventKind, PullParser, ANY};

/// Materializes the element the parser is positioned on, including its whole
/// subtree, and leaves the parser on the element's end tag.
///
/// `max_depth` bounds nesting; the element itself is depth 1.
pub fn parse_extension(p: &mut PullParser<'_>, max_depth: usize) -> Result<Extension, ParseError> {
    parse_node(p, 1, max_depth)
}

fn parse_node(
    p: &mut PullParser<'_>,
    depth: usize,
    max_depth: usize,
) -> Result<Extension, ParseError> {
    p.expect(EventKind::StartTag, ANY)?;
    if depth > max_depth {
        return Err(ParseError::TooDeep { limit: max_depth });
    }

    let mut ext = Extension {
        name: p.name().to_string(),
        ..Extension::default()
    };
    for attr in p.attributes() {
        ext.attrs.insert(attr.name.clone(), attr.value.clone());
    }

    loop {
        match p.next()? {
            EventKind::EndTag => break,
            EventKind::StartTag => {
                let child = parse_node(p, depth + 1, max_depth)?;
                ext.children
                    .entry(child.name.clone())
                    .or_default()
                    .push(child);
            }
            EventKind::Text => ext.value = p.text().to_string(),
            EventKind::EndDocument => return Err(ParseError::UnexpectedEof),
        }
    }

    p.expect(EventKind::EndTag, &ext.name)?;
    Ok(ext)
}
