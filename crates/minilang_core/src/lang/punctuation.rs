//! Punctuation vocabulary.
//!
//! Delimiters, separators, and the assignment marker. `=` lives here rather than in
//! [`crate::lang::operators`] because it never appears inside an expression.
//!
//! ## Examples
//! ```rust
//! use minilang_core::lang::punctuation::{self, PunctuationId};
//!
//! assert_eq!(punctuation::from_str(";"), Some(PunctuationId::Semicolon));
//! assert_eq!(punctuation::as_str(PunctuationId::LBrace), "{");
//! ```

/// Stable identifier for punctuation tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationId {
    Semicolon,
    Colon,
    LBrace,
    RBrace,
    LParen,
    RParen,
    Assign,
}

/// Metadata for a punctuation token.
#[derive(Debug, Clone, Copy)]
pub struct PunctuationInfo {
    pub id: PunctuationId,
    pub canonical: &'static str,
}

/// Registry of all punctuation.
pub const PUNCTUATION: &[PunctuationInfo] = &[
    PunctuationInfo {
        id: PunctuationId::Semicolon,
        canonical: ";",
    },
    PunctuationInfo {
        id: PunctuationId::Colon,
        canonical: ":",
    },
    PunctuationInfo {
        id: PunctuationId::LBrace,
        canonical: "{",
    },
    PunctuationInfo {
        id: PunctuationId::RBrace,
        canonical: "}",
    },
    PunctuationInfo {
        id: PunctuationId::LParen,
        canonical: "(",
    },
    PunctuationInfo {
        id: PunctuationId::RParen,
        canonical: ")",
    },
    PunctuationInfo {
        id: PunctuationId::Assign,
        canonical: "=",
    },
];

/// Canonical spelling.
pub fn as_str(id: PunctuationId) -> &'static str {
    info_for(id).canonical
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: PunctuationId) -> &'static PunctuationInfo {
    PUNCTUATION
        .iter()
        .find(|p| p.id == id)
        .expect("INVARIANT: every PunctuationId has a registry entry")
}

/// Lookup by spelling.
pub fn from_str(s: &str) -> Option<PunctuationId> {
    PUNCTUATION.iter().find(|p| p.canonical == s).map(|p| p.id)
}

/// Lookup a single-character punctuation mark.
///
/// Used by the lexer's character dispatch; every entry in [`PUNCTUATION`] is one character long.
pub fn from_char(c: char) -> Option<PunctuationId> {
    let mut buf = [0u8; 4];
    from_str(c.encode_utf8(&mut buf))
}
