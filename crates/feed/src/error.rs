// ABOUTME: Error types for RSS/RDF extraction.
// ABOUTME: Provides ParseError for fatal conditions and DateError for recoverable date failures.

use std::fmt;
use thiserror::Error;

/// Errors that abort a feed parse. The first fatal condition wins.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The current event did not match what the extractor expected.
    #[error("expected {expected} but found {found}")]
    Mismatch { expected: String, found: String },

    /// The underlying tokenizer rejected the document.
    #[error("malformed xml: {0}")]
    Xml(String),

    /// The event stream ended while an element was still open.
    #[error("unexpected end of document")]
    UnexpectedEof,

    /// The root element closed without a `channel` child.
    #[error("no channel element found")]
    MissingChannel,

    /// Extension nesting went past `ParseOptions::max_extension_depth`.
    #[error("extension element nesting exceeds limit of {limit}")]
    TooDeep { limit: usize },
}

impl ParseError {
    /// Wraps a tokenizer-level failure, keeping its message verbatim.
    pub fn xml(err: impl fmt::Display) -> Self {
        ParseError::Xml(err.to_string())
    }

    /// Creates a Mismatch error.
    pub fn mismatch(expected: impl Into<String>, found: impl Into<String>) -> Self {
        ParseError::Mismatch {
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Joins two mismatches on the same event into one, as done for the
    /// `rss`/`RDF` root check. Any other pairing keeps `self`.
    pub fn or(self, other: ParseError) -> Self {
        match (self, other) {
            (
                ParseError::Mismatch { expected, found },
                ParseError::Mismatch {
                    expected: other_expected,
                    ..
                },
            ) => ParseError::Mismatch {
                expected: format!("{} or {}", expected, other_expected),
                found,
            },
            (this, _) => this,
        }
    }

    /// True for structural mismatches (wrong tag or event kind).
    pub fn is_mismatch(&self) -> bool {
        matches!(self, ParseError::Mismatch { .. })
    }
}

/// Failure of the date parser. Never fatal to a feed parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    #[error("unrecognised date format: {0:?}")]
    InvalidFormat(String),
}
