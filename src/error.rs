//! Unified error type for the full pipeline.

use miette::Diagnostic;
use thiserror::Error;

use minilang_syntax::diagnostics::{LexicalError, SyntaxError};

/// Failure of either frontend stage.
///
/// Both variants are transparent: `Display` and diagnostic codes come from the stage error.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum FrontendError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Lexical(#[from] LexicalError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Syntax(#[from] SyntaxError),
}

impl FrontendError {
    /// Attach the source text so a miette handler can render labelled snippets.
    pub fn with_source(self, name: impl AsRef<str>, source: impl Into<String>) -> miette::Report {
        miette::Report::new(self).with_source_code(miette::NamedSource::new(name, source.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use miette::Diagnostic as _;

    #[test]
    fn test_transparent_display_and_code() {
        let err = FrontendError::from(SyntaxError::EmptyInput);
        assert_eq!(err.to_string(), "empty input: expected a program");
        assert_eq!(
            err.code().map(|c| c.to_string()),
            Some("minilang::syntax::empty_input".to_string())
        );
    }

    #[test]
    fn test_with_source_keeps_message() {
        let err = crate::parse_source("program p { x = 1 @ }").unwrap_err();
        let report = err.with_source("demo.ml", "program p { x = 1 @ }");
        assert_eq!(report.to_string(), "unexpected character '@' at offset 18");
    }
}
