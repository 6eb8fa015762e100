// ABOUTME: Forward-only pull adapter over quick-xml's namespace-aware reader.
// ABOUTME: Exposes start/end/text events plus tag-level helpers (next_tag, next_text, expect, skip).

use quick_xml::escape::resolve_xml_entity;
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::ResolveResult;
use quick_xml::reader::NsReader;
use std::fmt;

use crate::error::ParseError;

/// Name that matches any tag in `PullParser::expect`.
pub const ANY: &str = "*";

/// Kind of the event the parser is positioned on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    StartTag,
    EndTag,
    Text,
    EndDocument,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EventKind::StartTag => "StartTag",
            EventKind::EndTag => "EndTag",
            EventKind::Text => "Text",
            EventKind::EndDocument => "EndDocument",
        };
        write!(f, "{}", s)
    }
}

/// An attribute of the current start tag.
///
/// `prefix` is the literal prefix written in the document (`xmlns` for
/// namespace declarations); it is not resolved to a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attr {
    pub prefix: Option<String>,
    pub name: String,
    pub value: String,
}

impl Attr {
    /// True for `xmlns:prefix="url"` declarations.
    pub fn is_namespace_decl(&self) -> bool {
        self.prefix.as_deref() == Some("xmlns")
    }
}

/// Owned form of one tokenizer event, before text runs are merged.
#[derive(Debug)]
enum Token {
    Start {
        name: String,
        space: String,
        attrs: Vec<Attr>,
    },
    End {
        name: String,
        space: String,
    },
    Chars(String),
    Eof,
}

/// Streaming cursor over an XML document.
///
/// Empty elements are reported as a start tag immediately followed by its
/// end tag. Consecutive text, CDATA and entity references arrive as a single
/// `Text` event. Comments, processing instructions and doctypes are dropped.
pub struct PullParser<'a> {
    reader: NsReader<&'a [u8]>,
    buf: Vec<u8>,
    peeked: Option<Token>,
    event: EventKind,
    name: String,
    space: String,
    attrs: Vec<Attr>,
    text: String,
}

impl<'a> PullParser<'a> {
    pub fn new(input: &'a str) -> Self {
        let mut reader = NsReader::from_str(input);
        let config = reader.config_mut();
        config.expand_empty_elements = true;
        config.trim_text(false);

        Self {
            reader,
            buf: Vec::new(),
            peeked: None,
            event: EventKind::EndDocument,
            name: String::new(),
            space: String::new(),
            attrs: Vec::new(),
            text: String::new(),
        }
    }

    pub fn event(&self) -> EventKind {
        self.event
    }

    /// Local name of the current start or end tag.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Namespace of the current tag: the bound URL, the raw prefix when the
    /// prefix was never declared, or empty for no namespace.
    pub fn namespace(&self) -> &str {
        &self.space
    }

    /// Text of the current `Text` event.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Attributes of the current start tag, in document order.
    pub fn attributes(&self) -> &[Attr] {
        &self.attrs
    }

    /// First attribute of the current start tag with the given local name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|attr| attr.name == name)
            .map(|attr| attr.value.as_str())
    }

    /// Advances to the very next event.
    pub fn next(&mut self) -> Result<EventKind, ParseError> {
        match self.pull()? {
            Token::Start { name, space, attrs } => {
                self.name = name;
                self.space = space;
                self.attrs = attrs;
                self.text.clear();
                self.event = EventKind::StartTag;
            }
            Token::End { name, space } => {
                self.name = name;
                self.space = space;
                self.attrs.clear();
                self.text.clear();
                self.event = EventKind::EndTag;
            }
            Token::Chars(mut text) => {
                loop {
                    match self.pull()? {
                        Token::Chars(more) => text.push_str(&more),
                        other => {
                            self.peeked = Some(other);
                            break;
                        }
                    }
                }
                self.text = text;
                self.event = EventKind::Text;
            }
            Token::Eof => {
                self.name.clear();
                self.space.clear();
                self.attrs.clear();
                self.text.clear();
                self.event = EventKind::EndDocument;
            }
        }
        Ok(self.event)
    }

    /// Advances past any text to the next start or end tag.
    pub fn next_tag(&mut self) -> Result<EventKind, ParseError> {
        loop {
            match self.next()? {
                EventKind::Text => continue,
                EventKind::EndDocument => return Err(ParseError::UnexpectedEof),
                kind => return Ok(kind),
            }
        }
    }

    /// Reads the text content of the current element and leaves the parser
    /// on its end tag. An element with no text yields an empty string; an
    /// element with child elements is a mismatch.
    pub fn next_text(&mut self) -> Result<String, ParseError> {
        self.expect(EventKind::StartTag, ANY)?;
        let name = self.name.clone();

        let mut result = String::new();
        let mut kind = self.next()?;
        if kind == EventKind::Text {
            result = std::mem::take(&mut self.text);
            kind = self.next()?;
        }
        if kind == EventKind::EndDocument {
            return Err(ParseError::UnexpectedEof);
        }

        self.expect(EventKind::EndTag, &name)?;
        Ok(result)
    }

    /// Fails unless the current event is `kind` named `name` (or `ANY`).
    pub fn expect(&self, kind: EventKind, name: &str) -> Result<(), ParseError> {
        if self.event == kind && (name == ANY || self.name == name) {
            return Ok(());
        }
        let expected = if name == ANY {
            format!("{} <any>", kind)
        } else {
            format!("{} <{}>", kind, name)
        };
        Err(ParseError::mismatch(expected, self.describe()))
    }

    /// Consumes the subtree rooted at the current start tag, leaving the
    /// parser on its matching end tag.
    pub fn skip(&mut self) -> Result<(), ParseError> {
        self.expect(EventKind::StartTag, ANY)?;
        let mut depth = 0usize;
        loop {
            match self.next()? {
                EventKind::StartTag => depth += 1,
                EventKind::EndTag => {
                    if depth == 0 {
                        return Ok(());
                    }
                    depth -= 1;
                }
                EventKind::Text => {}
                EventKind::EndDocument => return Err(ParseError::UnexpectedEof),
            }
        }
    }

    fn describe(&self) -> String {
        match self.event {
            EventKind::StartTag | EventKind::EndTag => format!("{} <{}>", self.event, self.name),
            kind => kind.to_string(),
        }
    }

    fn pull(&mut self) -> Result<Token, ParseError> {
        match self.peeked.take() {
            Some(token) => Ok(token),
            None => read_token(&mut self.reader, &mut self.buf),
        }
    }
}

/// Reads raw events until one the pull interface cares about.
fn read_token(reader: &mut NsReader<&[u8]>, buf: &mut Vec<u8>) -> Result<Token, ParseError> {
    loop {
        buf.clear();
        let (resolve, event) = reader
            .read_resolved_event_into(buf)
            .map_err(ParseError::xml)?;
        let space = namespace_of(resolve);

        match event {
            Event::Start(ref e) | Event::Empty(ref e) => {
                return Ok(Token::Start {
                    name: String::from_utf8_lossy(e.local_name().as_ref()).into_owned(),
                    space,
                    attrs: read_attrs(e)?,
                });
            }
            Event::End(ref e) => {
                return Ok(Token::End {
                    name: String::from_utf8_lossy(e.local_name().as_ref()).into_owned(),
                    space,
                });
            }
            Event::Text(ref e) => {
                let text = e.decode().map_err(ParseError::xml)?;
                return Ok(Token::Chars(text.into_owned()));
            }
            Event::CData(ref e) => {
                return Ok(Token::Chars(String::from_utf8_lossy(e).into_owned()));
            }
            Event::GeneralRef(ref e) => {
                let raw = e.decode().map_err(ParseError::xml)?;
                return Ok(Token::Chars(resolve_entity(&raw)?));
            }
            Event::Eof => return Ok(Token::Eof),
            _ => continue,
        }
    }
}

fn namespace_of(resolve: ResolveResult<'_>) -> String {
    match resolve {
        ResolveResult::Bound(ns) => String::from_utf8_lossy(ns.as_ref()).into_owned(),
        ResolveResult::Unknown(prefix) => String::from_utf8_lossy(&prefix).into_owned(),
        ResolveResult::Unbound => String::new(),
    }
}

fn read_attrs(e: &BytesStart<'_>) -> Result<Vec<Attr>, ParseError> {
    let mut attrs = Vec::new();
    for attr in e.attributes() {
        let attr = attr.map_err(ParseError::xml)?;
        let prefix = attr
            .key
            .prefix()
            .map(|p| String::from_utf8_lossy(p.as_ref()).into_owned());
        let name = String::from_utf8_lossy(attr.key.local_name().as_ref()).into_owned();
        let value = attr.unescape_value().map_err(ParseError::xml)?.into_owned();
        attrs.push(Attr {
            prefix,
            name,
            value,
        });
    }
    Ok(attrs)
}

/// Resolves `&name;` to its character value. Unknown named entities are
/// kept literally.
fn resolve_entity(raw: &str) -> Result<String, ParseError> {
    if let Some(resolved) = resolve_xml_entity(raw) {
        return Ok(resolved.to_string());
    }

    if let Some(rest) = raw.strip_prefix('#') {
        let code = match rest.strip_prefix('x').or_else(|| rest.strip_prefix('X')) {
            Some(hex) => u32::from_str_radix(hex, 16),
            None => rest.parse::<u32>(),
        }
        .map_err(|_| ParseError::Xml(format!("invalid character reference &{};", raw)))?;

        let ch = char::from_u32(code)
            .ok_or_else(|| ParseError::Xml(format!("invalid code point {} in &{};", code, raw)))?;
        return Ok(ch.to_string());
    }

    Ok(format!("&{};", raw))
}
