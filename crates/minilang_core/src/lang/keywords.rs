//! Define the reserved keyword vocabulary for minilang.
//!
//! This module is the single source of truth for reserved words: a stable identifier
//! ([`KeywordId`]) plus a const metadata table ([`KEYWORDS`]) that records canonical spellings.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive** and matches whole words only; `programme` is not
//!   a keyword.
//! - The lexer scans a full identifier-shaped word first and consults this registry afterwards, which
//!   is what gives keywords priority over identifiers.
//!
//! ## Examples
//! ```rust
//! use minilang_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("program"), Some(KeywordId::Program));
//! assert_eq!(keywords::from_str("programme"), None);
//! assert_eq!(keywords::as_str(KeywordId::Print), "print");
//! ```

/// Stable identifier for every reserved keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    // Structure
    Program,
    Var,

    // Types
    Int,
    Float,
    Bool,

    // Statements
    If,
    Else,
    While,
    Print,

    // Literals
    True,
    False,
}

/// Metadata for a keyword.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
}

/// Registry of all keywords.
///
/// ## Notes
/// - The ordering mirrors the token-kind enumeration of the language and is relied on by docs only;
///   lookup is by exact spelling, so order has no effect on classification.
pub const KEYWORDS: &[KeywordInfo] = &[
    info(KeywordId::Program, "program"),
    info(KeywordId::Var, "var"),
    info(KeywordId::Int, "int"),
    info(KeywordId::Float, "float"),
    info(KeywordId::Bool, "bool"),
    info(KeywordId::If, "if"),
    info(KeywordId::Else, "else"),
    info(KeywordId::While, "while"),
    info(KeywordId::Print, "print"),
    info(KeywordId::True, "true"),
    info(KeywordId::False, "false"),
];

/// Canonical spelling.
///
/// ## Parameters
/// - `id`: Keyword identifier.
///
/// ## Returns
/// - The canonical spelling for `id`.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS
        .iter()
        .find(|k| k.id == id)
        .expect("INVARIANT: every KeywordId has a registry entry")
}

/// Lookup by spelling.
///
/// ## Returns
/// - `Some(KeywordId)` if `s` is exactly a reserved word.
/// - `None` otherwise.
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.canonical == s).map(|k| k.id)
}

const fn info(id: KeywordId, canonical: &'static str) -> KeywordInfo {
    KeywordInfo { id, canonical }
}
