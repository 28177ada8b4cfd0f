//! Error types for the minilang frontend.
//!
//! Two error kinds, both terminal: the lexer stops at the first character it cannot classify and the
//! parser stops at the first token the active production does not accept. There is no recovery and
//! no partial result.
//!
//! Both types derive [`miette::Diagnostic`] so callers can attach the source text and render a
//! labelled report; the library itself never prints or logs them.

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

use crate::lexer::{Token, TokenKind};

/// Failure to classify source text.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum LexicalError {
    /// No token pattern matches at this position.
    #[error("unexpected character {character:?} at offset {}", .span.offset())]
    #[diagnostic(
        code(minilang::lex::unexpected_character),
        help("tokens are keywords, ASCII identifiers, numbers, operators, or one of ; : {{ }} ( )")
    )]
    UnexpectedCharacter {
        character: char,
        #[label("not the start of any token")]
        span: SourceSpan,
    },

    /// A `/*` block comment that never closes (multi-line comment mode only).
    #[error("unterminated block comment starting at offset {}", .span.offset())]
    #[diagnostic(code(minilang::lex::unterminated_comment), help("close the comment with `*/`"))]
    UnterminatedComment {
        #[label("comment opened here")]
        span: SourceSpan,
    },
}

impl LexicalError {
    pub(crate) fn unexpected_character(character: char, offset: usize) -> Self {
        LexicalError::UnexpectedCharacter {
            character,
            span: (offset, character.len_utf8()).into(),
        }
    }

    pub(crate) fn unterminated_comment(offset: usize) -> Self {
        LexicalError::UnterminatedComment { span: (offset, 2).into() }
    }

    /// Byte offset into the source where scanning failed.
    pub fn offset(&self) -> usize {
        match self {
            LexicalError::UnexpectedCharacter { span, .. } | LexicalError::UnterminatedComment { span } => {
                span.offset()
            }
        }
    }

    /// The offending character, for [`LexicalError::UnexpectedCharacter`].
    pub fn character(&self) -> Option<char> {
        match self {
            LexicalError::UnexpectedCharacter { character, .. } => Some(*character),
            LexicalError::UnterminatedComment { .. } => None,
        }
    }
}

/// Failure to match the token stream against the grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum SyntaxError {
    /// The parser was handed no tokens at all.
    #[error("empty input: expected a program")]
    #[diagnostic(code(minilang::syntax::empty_input))]
    EmptyInput,

    /// The current token is not accepted by the active production.
    ///
    /// An empty `expected` list means the parser expected the end of input.
    #[error("unexpected token {found}, expected {}", describe_expected(.expected))]
    #[diagnostic(code(minilang::syntax::unexpected_token))]
    UnexpectedToken { found: Token, expected: Vec<TokenKind> },

    /// The token stream ran out in the middle of a production.
    #[error("unexpected end of input, expected {}", describe_expected(.expected))]
    #[diagnostic(code(minilang::syntax::unexpected_end), help("is a closing `}}` or `;` missing?"))]
    UnexpectedEnd { expected: Vec<TokenKind> },

    /// Parentheses, blocks and chained operators together nest past the parser's limit.
    #[error("nesting deeper than {limit} levels at {found}")]
    #[diagnostic(
        code(minilang::syntax::nesting_too_deep),
        help("split the expression or the nested blocks into separate statements")
    )]
    NestingTooDeep { found: Token, limit: usize },
}

impl SyntaxError {
    /// The offending token, when the error was caused by one.
    pub fn found(&self) -> Option<&Token> {
        match self {
            SyntaxError::UnexpectedToken { found, .. } | SyntaxError::NestingTooDeep { found, .. } => Some(found),
            SyntaxError::EmptyInput | SyntaxError::UnexpectedEnd { .. } => None,
        }
    }

    /// The token kinds the failing production would have accepted.
    pub fn expected(&self) -> &[TokenKind] {
        match self {
            SyntaxError::UnexpectedToken { expected, .. } | SyntaxError::UnexpectedEnd { expected } => expected,
            SyntaxError::EmptyInput | SyntaxError::NestingTooDeep { .. } => &[],
        }
    }
}

fn describe_expected(expected: &[TokenKind]) -> String {
    match expected {
        [] => "end of input".to_string(),
        [only] => only.to_string(),
        many => {
            let names: Vec<&str> = many.iter().map(|k| k.as_str()).collect();
            format!("one of {}", names.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexical_error_accessors() {
        let err = LexicalError::unexpected_character('@', 7);
        assert_eq!(err.offset(), 7);
        assert_eq!(err.character(), Some('@'));
        assert_eq!(err.to_string(), "unexpected character '@' at offset 7");

        let err = LexicalError::unterminated_comment(3);
        assert_eq!(err.offset(), 3);
        assert_eq!(err.character(), None);
    }

    #[test]
    fn test_syntax_error_messages() {
        let err = SyntaxError::UnexpectedToken {
            found: Token::new(TokenKind::Int, "int"),
            expected: vec![TokenKind::Colon],
        };
        assert_eq!(err.to_string(), "unexpected token INT 'int', expected COLON");

        let err = SyntaxError::UnexpectedEnd {
            expected: vec![TokenKind::Identifier, TokenKind::Number],
        };
        assert_eq!(
            err.to_string(),
            "unexpected end of input, expected one of IDENTIFIER, NUMBER"
        );

        let err = SyntaxError::UnexpectedToken {
            found: Token::new(TokenKind::Semicolon, ";"),
            expected: vec![],
        };
        assert_eq!(err.to_string(), "unexpected token SEMICOLON ';', expected end of input");
    }

    #[test]
    fn test_diagnostic_codes() {
        let err = SyntaxError::EmptyInput;
        assert_eq!(
            err.code().map(|c| c.to_string()),
            Some("minilang::syntax::empty_input".to_string())
        );
        let err = SyntaxError::NestingTooDeep {
            found: Token::new(TokenKind::LParen, "("),
            limit: 256,
        };
        assert_eq!(
            err.code().map(|c| c.to_string()),
            Some("minilang::syntax::nesting_too_deep".to_string())
        );
        assert_eq!(err.to_string(), "nesting deeper than 256 levels at LPAREN '('");
        let err = LexicalError::unexpected_character('$', 0);
        assert_eq!(
            err.code().map(|c| c.to_string()),
            Some("minilang::lex::unexpected_character".to_string())
        );
    }
}
