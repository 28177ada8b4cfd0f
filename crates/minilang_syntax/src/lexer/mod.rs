//! Lexer for the minilang teaching language.
//!
//! Scans source text once, left to right, and produces the ordered token sequence consumed by the
//! parser. Whitespace and block comments are recognized and dropped.
//!
//! ## Classification order
//!
//! At each scan position the first matching rule wins:
//!
//! 1. keywords, then identifiers: a maximal ASCII word is scanned and looked up in the keyword
//!    registry, so keyword spellings beat the identifier rule while `programme` stays an identifier
//! 2. numbers: `[0-9]+(\.[0-9]*)?`
//! 3. punctuation `; : { }`, then block comments, then `( )`
//! 4. operators `+ -`, `* /`, relational `< > <= >= == !=`, then `=`
//! 5. whitespace
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (`TokenKind`, `Token`)

pub mod tokens;

pub use tokens::{Token, TokenKind};

use crate::config::{CommentMode, LexerConfig};
use crate::diagnostics::LexicalError;
use minilang_core::lang::keywords;
use minilang_core::lang::operators::{self, OperatorClass};
use minilang_core::lang::punctuation::{self, PunctuationId};

/// Lexer for minilang source code.
///
/// The lexer owns no state beyond its scan position and the tokens produced so far, and stops at
/// the first character it cannot classify.
pub struct Lexer<'a> {
    source: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    current_pos: usize,
    config: LexerConfig,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer with the default configuration.
    pub fn new(source: &'a str) -> Self {
        Self::with_config(source, LexerConfig::default())
    }

    /// Create a new lexer with an explicit configuration.
    pub fn with_config(source: &'a str, config: LexerConfig) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            current_pos: 0,
            config,
            tokens: Vec::new(),
        }
    }

    /// Tokenize the entire source code.
    ///
    /// ## Errors
    /// Returns the first [`LexicalError`]; tokens scanned before it are discarded.
    pub fn tokenize(mut self) -> Result<Vec<Token>, LexicalError> {
        while !self.is_at_end() {
            self.scan_token()?;
        }
        Ok(self.tokens)
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn is_at_end(&mut self) -> bool {
        self.chars.peek().is_none()
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn advance(&mut self) -> Option<char> {
        if let Some((pos, c)) = self.chars.next() {
            self.current_pos = pos + c.len_utf8();
            Some(c)
        } else {
            None
        }
    }

    fn advance_to(&mut self, offset: usize) {
        while self.current_pos < offset && self.advance().is_some() {}
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    // ========================================================================
    // Main scanning dispatch
    // ========================================================================

    fn scan_token(&mut self) -> Result<(), LexicalError> {
        let start = self.current_pos;

        let Some(c) = self.advance() else {
            return Ok(());
        };

        match c {
            _ if is_ident_start(c) => self.scan_word(start),
            '0'..='9' => self.scan_number(start)?,

            '/' if self.peek() == Some('*') => self.scan_block_comment(start)?,

            '+' | '-' => self.add_operator(OperatorClass::Additive, start),
            '*' | '/' => self.add_operator(OperatorClass::Multiplicative, start),
            '<' | '>' => {
                self.match_char('=');
                self.add_operator(OperatorClass::Relational, start);
            }
            '=' => {
                if self.match_char('=') {
                    self.add_operator(OperatorClass::Relational, start);
                } else {
                    self.add_punct(PunctuationId::Assign, start);
                }
            }
            '!' => {
                if self.match_char('=') {
                    self.add_operator(OperatorClass::Relational, start);
                } else {
                    return Err(LexicalError::unexpected_character(c, start));
                }
            }

            _ if c.is_whitespace() => self.skip_whitespace(),

            _ => match punctuation::from_char(c) {
                Some(id) => self.add_punct(id, start),
                None => return Err(LexicalError::unexpected_character(c, start)),
            },
        }

        Ok(())
    }

    fn add_token(&mut self, kind: TokenKind, start: usize) {
        let text = &self.source[start..self.current_pos];
        self.tokens.push(Token::new(kind, text));
    }

    fn add_punct(&mut self, id: PunctuationId, start: usize) {
        self.add_token(id.into(), start);
    }

    fn add_operator(&mut self, class: OperatorClass, start: usize) {
        debug_assert!(
            operators::from_str(&self.source[start..self.current_pos]).is_some_and(|id| operators::class(id) == class),
            "operator spelling not in registry"
        );
        self.add_token(class.into(), start);
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    // ========================================================================
    // Words and numbers
    // ========================================================================

    fn scan_word(&mut self, start: usize) {
        while self.peek().is_some_and(is_ident_continue) {
            self.advance();
        }

        let spelling = &self.source[start..self.current_pos];

        // Only a whole word can be a keyword; `programme` falls through to an identifier.
        match keywords::from_str(spelling) {
            Some(id) => self.add_token(id.into(), start),
            None => self.add_token(TokenKind::Identifier, start),
        }
    }

    /// Scan `[0-9]+(\.[0-9]*)?`.
    ///
    /// A number glued to a following identifier character (`12abc`) has no word boundary and is
    /// rejected at its first digit.
    fn scan_number(&mut self, start: usize) -> Result<(), LexicalError> {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }
        if self.match_char('.') {
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
        }

        if self.peek().is_some_and(is_ident_continue) {
            let first = self.source[start..].chars().next().unwrap_or('0');
            return Err(LexicalError::unexpected_character(first, start));
        }

        self.add_token(TokenKind::Number, start);
        Ok(())
    }

    // ========================================================================
    // Comments
    // ========================================================================

    /// Handle `/*` at `start` (the `/` is already consumed).
    fn scan_block_comment(&mut self, start: usize) -> Result<(), LexicalError> {
        let body_start = start + 2;
        let rest = &self.source[body_start..];

        let close = match self.config.comments {
            CommentMode::SingleLine => {
                let line = rest.split('\n').next().unwrap_or_default();
                line.find("*/")
            }
            CommentMode::MultiLine => rest.find("*/"),
        };

        match (close, self.config.comments) {
            (Some(idx), _) => {
                self.advance_to(body_start + idx + 2);
                Ok(())
            }
            // Not a comment on this line: the `/` is a division operator and the `*` is
            // scanned on its own next.
            (None, CommentMode::SingleLine) => {
                self.add_operator(OperatorClass::Multiplicative, start);
                Ok(())
            }
            (None, CommentMode::MultiLine) => Err(LexicalError::unterminated_comment(start)),
        }
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// Check if a character can start an identifier (ASCII-only).
fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Check if a character can continue an identifier (ASCII-only).
fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Tokenize a source string with the default configuration.
///
/// This is a shorthand for `Lexer::new(source).tokenize()`.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexicalError> {
    let tokens = Lexer::new(source).tokenize()?;
    tracing::debug!(token_count = tokens.len(), "tokenized source");
    Ok(tokens)
}

/// Tokenize a source string with an explicit configuration.
#[tracing::instrument(skip_all, fields(source_len = source.len(), comments = ?config.comments))]
pub fn tokenize_with_config(source: &str, config: &LexerConfig) -> Result<Vec<Token>, LexicalError> {
    let tokens = Lexer::with_config(source, config.clone()).tokenize()?;
    tracing::debug!(token_count = tokens.len(), "tokenized source");
    Ok(tokens)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source).unwrap().into_iter().map(|t| t.kind).collect()
    }

    fn texts(source: &str) -> Vec<String> {
        tokenize(source).unwrap().into_iter().map(|t| t.text).collect()
    }

    #[test]
    fn test_keyword_registry_parity() {
        for k in keywords::KEYWORDS {
            let tokens = tokenize(k.canonical).unwrap();
            assert_eq!(tokens.len(), 1, "expected a single token for {:?}", k.canonical);
            assert_eq!(tokens[0].kind, TokenKind::from(k.id));
            assert_eq!(tokens[0].text, k.canonical);
        }
    }

    #[test]
    fn test_operator_registry_parity() {
        for o in operators::OPERATORS {
            let tokens = tokenize(o.spelling).unwrap();
            assert_eq!(tokens.len(), 1, "expected a single token for {:?}", o.spelling);
            assert_eq!(tokens[0].kind, TokenKind::from(o.class));
            assert_eq!(tokens[0].operator_id(), Some(o.id));
        }
    }

    #[test]
    fn test_punctuation_registry_parity() {
        for p in punctuation::PUNCTUATION {
            let tokens = tokenize(p.canonical).unwrap();
            assert_eq!(tokens, vec![Token::new(p.id.into(), p.canonical)]);
        }
    }

    #[test]
    fn test_keyword_vs_identifier() {
        assert_eq!(kinds("program"), vec![TokenKind::Program]);
        assert_eq!(tokenize("programme").unwrap(), vec![Token::new(TokenKind::Identifier, "programme")]);
        assert_eq!(kinds("if_ iff _if"), vec![TokenKind::Identifier; 3]);
        assert_eq!(kinds("while1"), vec![TokenKind::Identifier]);
    }

    #[test]
    fn test_numbers() {
        assert_eq!(texts("42 3.14 7."), vec!["42", "3.14", "7."]);
        assert_eq!(kinds("42 3.14 7."), vec![TokenKind::Number; 3]);
    }

    #[test]
    fn test_number_followed_by_letter_is_rejected() {
        let err = tokenize("x = 12abc;").unwrap_err();
        assert_eq!(err.offset(), 4);
        assert_eq!(err.character(), Some('1'));
    }

    #[test]
    fn test_second_decimal_point_is_rejected() {
        let err = tokenize("1.2.3").unwrap_err();
        assert_eq!(err.offset(), 3);
        assert_eq!(err.character(), Some('.'));
    }

    #[test]
    fn test_relational_before_assign() {
        assert_eq!(
            kinds("a == b = c != d <= e >= f < g > h"),
            vec![
                TokenKind::Identifier,
                TokenKind::RelOp,
                TokenKind::Identifier,
                TokenKind::Assign,
                TokenKind::Identifier,
                TokenKind::RelOp,
                TokenKind::Identifier,
                TokenKind::RelOp,
                TokenKind::Identifier,
                TokenKind::RelOp,
                TokenKind::Identifier,
                TokenKind::RelOp,
                TokenKind::Identifier,
                TokenKind::RelOp,
                TokenKind::Identifier,
            ]
        );
        assert_eq!(texts("<=>="), vec!["<=", ">="]);
    }

    #[test]
    fn test_lone_bang_is_rejected() {
        let err = tokenize("!x").unwrap_err();
        assert_eq!(err.character(), Some('!'));
        assert_eq!(err.offset(), 0);
    }

    #[test]
    fn test_unexpected_character() {
        let err = tokenize("var x : int; @").unwrap_err();
        assert!(matches!(err, LexicalError::UnexpectedCharacter { character: '@', .. }));
        assert_eq!(err.offset(), 13);
    }

    #[test]
    fn test_non_ascii_identifier_rejected() {
        let err = tokenize("π = 1").unwrap_err();
        assert_eq!(err.character(), Some('π'));
        assert_eq!(err.offset(), 0);
    }

    #[test]
    fn test_whitespace_is_dropped() {
        assert_eq!(texts(" \t x \n\r\n = \n 1 ; "), vec!["x", "=", "1", ";"]);
        assert!(tokenize("  \n\t ").unwrap().is_empty());
        assert!(tokenize("").unwrap().is_empty());
    }

    #[test]
    fn test_single_line_comment_is_dropped() {
        assert_eq!(texts("x /* note */ = 1;"), vec!["x", "=", "1", ";"]);
        assert_eq!(texts("/**/x"), vec!["x"]);
    }

    #[test]
    fn test_comment_does_not_span_lines_by_default() {
        // The `/*` has no close on its line, so it lexes as two multiplicative operators.
        let tokens = tokenize("a /* first\nsecond */ b").unwrap();
        let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Identifier,
                TokenKind::MulOp,
                TokenKind::MulOp,
                TokenKind::Identifier,
                TokenKind::Identifier,
                TokenKind::MulOp,
                TokenKind::MulOp,
                TokenKind::Identifier,
            ]
        );
        assert_eq!(tokens[1].text, "/");
        assert_eq!(tokens[2].text, "*");
    }

    #[test]
    fn test_multi_line_comment_mode() {
        let config = LexerConfig::new().with_comment_mode(CommentMode::MultiLine);
        let tokens = tokenize_with_config("a /* first\nsecond */ b", &config).unwrap();
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "b"]);
    }

    #[test]
    fn test_unterminated_comment_in_multi_line_mode() {
        let config = LexerConfig::new().with_comment_mode(CommentMode::MultiLine);
        let err = tokenize_with_config("x = 1; /* open", &config).unwrap_err();
        assert!(matches!(err, LexicalError::UnterminatedComment { .. }));
        assert_eq!(err.offset(), 7);
    }

    #[test]
    fn test_division_is_not_a_comment() {
        assert_eq!(texts("a / b * c"), vec!["a", "/", "b", "*", "c"]);
    }

    #[test]
    fn test_sample_declarations_and_if() {
        let tokens = tokenize("var x:int; x=10; if (x == 10) { print(x); }").unwrap();
        assert_eq!(tokens.len(), 22);
        assert_eq!(tokens[0], Token::new(TokenKind::Var, "var"));
        assert_eq!(tokens[12], Token::new(TokenKind::RelOp, "=="));
        assert_eq!(tokens[21], Token::new(TokenKind::RBrace, "}"));
    }
}
