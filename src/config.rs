//! Frontend configuration.
//!
//! Groups the per-stage settings so callers configure the whole pipeline in one place.

pub use minilang_syntax::config::{CommentMode, LexerConfig};

/// Pipeline configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrontendConfig {
    /// Tokenizer settings
    pub lexer: LexerConfig,
}

impl FrontendConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the block comment matching mode
    pub fn with_comment_mode(mut self, mode: CommentMode) -> Self {
        self.lexer = self.lexer.with_comment_mode(mode);
        self
    }
}
