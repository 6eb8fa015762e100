// ABOUTME: Typed models for a parsed RSS/RDF document.
// ABOUTME: Feed owns its items, categories and generic extension trees.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Extension trees keyed by element name, each name holding every occurrence in order.
pub type ExtensionMap = BTreeMap<String, Vec<Extension>>;

/// Extension trees keyed by resolved namespace prefix.
pub type Extensions = BTreeMap<String, ExtensionMap>;

/// Channel-level metadata plus everything nested inside it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Feed {
    pub version: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
    pub language: Option<String>,
    pub copyright: Option<String>,
    pub managing_editor: Option<String>,
    pub web_master: Option<String>,
    pub pub_date: Option<String>,
    pub pub_date_parsed: Option<DateTime<Utc>>,
    pub last_build_date: Option<String>,
    pub last_build_date_parsed: Option<DateTime<Utc>>,
    pub generator: Option<String>,
    pub docs: Option<String>,
    pub ttl: Option<String>,
    pub rating: Option<String>,
    pub image: Option<Image>,
    pub text_input: Option<TextInput>,
    pub cloud: Option<Cloud>,
    pub skip_hours: Vec<String>,
    pub skip_days: Vec<String>,
    pub items: Vec<Item>,
    pub categories: Vec<Category>,
    pub extensions: Extensions,
}

/// One entry of the feed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub title: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
    pub author: Option<String>,
    pub comments: Option<String>,
    pub pub_date: Option<String>,
    pub pub_date_parsed: Option<DateTime<Utc>>,
    pub source: Option<Source>,
    pub enclosure: Option<Enclosure>,
    pub guid: Option<Guid>,
    pub categories: Vec<Category>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub url: Option<String>,
    pub title: String,
}

/// Media attachment; all fields come from attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enclosure {
    pub url: Option<String>,
    pub length: Option<String>,
    pub mime_type: Option<String>,
}

/// `is_permalink` keeps the raw attribute: absent is not the same as "false".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guid {
    pub value: String,
    pub is_permalink: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub value: String,
    pub domain: Option<String>,
}

/// Channel image. Its `title`/`link` are independent of the channel's own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub url: Option<String>,
    pub title: Option<String>,
    pub link: Option<String>,
    pub width: Option<String>,
    pub height: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub name: Option<String>,
    pub link: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cloud {
    pub domain: Option<String>,
    pub port: Option<String>,
    pub path: Option<String>,
    pub register_procedure: Option<String>,
    pub protocol: Option<String>,
}

/// Schema-less capture of a namespaced element and its whole subtree.
///
/// Attribute namespaces are dropped; attributes are keyed by local name.
/// `value` holds the last run of character data seen directly inside the
/// element; mixed content is not concatenated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extension {
    pub name: String,
    pub value: String,
    pub attrs: BTreeMap<String, String>,
    pub children: ExtensionMap,
}

impl Feed {
    /// Looks up every capture of `name` under namespace `prefix`.
    pub fn extension(&self, prefix: &str, name: &str) -> &[Extension] {
        self.extensions
            .get(prefix)
            .and_then(|by_name| by_name.get(name))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

impl Extension {
    /// First child named `name`, if any.
    pub fn child(&self, name: &str) -> Option<&Extension> {
        self.children.get(name).and_then(|list| list.first())
    }
}
