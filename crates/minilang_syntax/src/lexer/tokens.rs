//! Token types for the minilang lexer.
//!
//! [`TokenKind`] is the closed set of kinds that crosses the lexer → parser boundary. Whitespace and
//! comments are recognized by the lexer but never become tokens, so they have no variant here.
//!
//! ## Notes
//! - Keyword and punctuation kinds convert from the `minilang_core::lang` registry ids.
//! - Operator tokens are grouped by tier (`AddOp`, `MulOp`, `RelOp`); the exact operator is carried
//!   in the token text and resolved with [`Token::operator_id`](crate::token_helpers).

use std::fmt;

use minilang_core::lang::keywords::KeywordId;
use minilang_core::lang::operators::OperatorClass;
use minilang_core::lang::punctuation::PunctuationId;

// ============================================================================
// TOKEN TYPES
// ============================================================================

/// Kind of token produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // ========== Keywords ==========
    Program,
    Var,
    Int,
    Float,
    Bool,
    If,
    Else,
    While,
    Print,
    True,
    False,

    // ========== Identifiers and Literals ==========
    Identifier,
    Number,

    // ========== Punctuation ==========
    Semicolon,
    Colon,
    LBrace,
    RBrace,
    LParen,
    RParen,

    // ========== Operators ==========
    AddOp,
    MulOp,
    RelOp,
    Assign,
}

impl TokenKind {
    /// Every token kind, in the order of the lexer's classification table.
    pub const ALL: &'static [TokenKind] = &[
        TokenKind::Program,
        TokenKind::Var,
        TokenKind::Int,
        TokenKind::Float,
        TokenKind::Bool,
        TokenKind::If,
        TokenKind::Else,
        TokenKind::While,
        TokenKind::Print,
        TokenKind::True,
        TokenKind::False,
        TokenKind::Identifier,
        TokenKind::Number,
        TokenKind::Semicolon,
        TokenKind::Colon,
        TokenKind::LBrace,
        TokenKind::RBrace,
        TokenKind::LParen,
        TokenKind::RParen,
        TokenKind::AddOp,
        TokenKind::MulOp,
        TokenKind::RelOp,
        TokenKind::Assign,
    ];

    /// Upper-case wire name of the kind (`PROGRAM`, `ADD_OP`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Program => "PROGRAM",
            TokenKind::Var => "VAR",
            TokenKind::Int => "INT",
            TokenKind::Float => "FLOAT",
            TokenKind::Bool => "BOOL",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::While => "WHILE",
            TokenKind::Print => "PRINT",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Number => "NUMBER",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Colon => "COLON",
            TokenKind::LBrace => "LBRACE",
            TokenKind::RBrace => "RBRACE",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::AddOp => "ADD_OP",
            TokenKind::MulOp => "MUL_OP",
            TokenKind::RelOp => "REL_OP",
            TokenKind::Assign => "ASSIGN",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<KeywordId> for TokenKind {
    fn from(id: KeywordId) -> Self {
        match id {
            KeywordId::Program => TokenKind::Program,
            KeywordId::Var => TokenKind::Var,
            KeywordId::Int => TokenKind::Int,
            KeywordId::Float => TokenKind::Float,
            KeywordId::Bool => TokenKind::Bool,
            KeywordId::If => TokenKind::If,
            KeywordId::Else => TokenKind::Else,
            KeywordId::While => TokenKind::While,
            KeywordId::Print => TokenKind::Print,
            KeywordId::True => TokenKind::True,
            KeywordId::False => TokenKind::False,
        }
    }
}

impl From<PunctuationId> for TokenKind {
    fn from(id: PunctuationId) -> Self {
        match id {
            PunctuationId::Semicolon => TokenKind::Semicolon,
            PunctuationId::Colon => TokenKind::Colon,
            PunctuationId::LBrace => TokenKind::LBrace,
            PunctuationId::RBrace => TokenKind::RBrace,
            PunctuationId::LParen => TokenKind::LParen,
            PunctuationId::RParen => TokenKind::RParen,
            PunctuationId::Assign => TokenKind::Assign,
        }
    }
}

impl From<OperatorClass> for TokenKind {
    fn from(class: OperatorClass) -> Self {
        match class {
            OperatorClass::Additive => TokenKind::AddOp,
            OperatorClass::Multiplicative => TokenKind::MulOp,
            OperatorClass::Relational => TokenKind::RelOp,
        }
    }
}

/// A classified lexical unit: its kind plus the exact matched source text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} '{}'", self.kind, self.text)
    }
}
