// ABOUTME: Configuration options for the RSS parser.
// ABOUTME: Carries the recursion cap for generic extension capture.

/// Default limit on extension element nesting.
pub const DEFAULT_MAX_EXTENSION_DEPTH: usize = 256;

/// Configuration options for an `RssParser`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Deepest extension subtree accepted, counting the extension element
    /// itself as depth 1. Deeper documents fail with `ParseError::TooDeep`.
    pub max_extension_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_extension_depth: DEFAULT_MAX_EXTENSION_DEPTH,
        }
    }
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the extension recursion cap. A value of zero rejects every
    /// extension element.
    pub fn max_extension_depth(mut self, depth: usize) -> Self {
        self.max_extension_depth = depth;
        self
    }
}
