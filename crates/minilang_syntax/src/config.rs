//! Lexer configuration.
//!
//! The only tunable today is how block comments are recognized.

/// How `/* ... */` block comments are matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommentMode {
    /// A comment must close on the line it opens. An opening `/*` with no `*/` before the next line
    /// break is not a comment at all: the `/` lexes as a division operator.
    #[default]
    SingleLine,
    /// A comment may span line breaks. An opening `/*` that never closes is a lexical error.
    MultiLine,
}

/// Lexer configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LexerConfig {
    /// Block comment matching mode
    pub comments: CommentMode,
}

impl LexerConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the block comment matching mode
    pub fn with_comment_mode(mut self, mode: CommentMode) -> Self {
        self.comments = mode;
        self
    }
}
