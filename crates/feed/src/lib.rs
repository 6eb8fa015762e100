// ABOUTME: RSS/RDF feed extraction library.
// ABOUTME: Turns an RSS 0.9x/1.0/2.0 document into typed models plus generic namespace extensions.

//! Recursive-descent RSS parser over a pull-style XML event stream.
//!
//! # Example
//!
//! ```
//! use feedgraph_rss::parse_feed;
//!
//! let feed = parse_feed(r#"<rss version="2.0"><channel><title>Hi</title></channel></rss>"#).unwrap();
//! assert_eq!(feed.version, "2.0");
//! assert_eq!(feed.title.as_deref(), Some("Hi"));
//! ```

pub mod channel;
pub mod elements;
pub mod error;
pub mod extension;
pub mod item;
pub mod models;
pub mod namespace;
pub mod options;
pub mod parser;
pub mod pull;
pub mod time_parse;

pub use error::{DateError, ParseError};
pub use models::{
    Category, Cloud, Enclosure, Extension, ExtensionMap, Extensions, Feed, Guid, Image, Item,
    Source, TextInput,
};
pub use namespace::NamespaceResolver;
pub use options::ParseOptions;
pub use parser::{parse_feed, RssParser};
pub use time_parse::parse_date;
