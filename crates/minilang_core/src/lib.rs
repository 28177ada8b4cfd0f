//! Canonical language vocabulary for the minilang teaching language.
//!
//! This crate is intentionally small and dependency-free. It owns the *identity* of every reserved
//! word, operator, and punctuation mark, so the lexer, parser, and any later tooling agree on
//! spellings without scattering string literals across the codebase.
//!
//! ## Notes
//! - This is a "vocabulary" crate: **no IO**, no global state, and no syntax-tree types.
//! - The lexer/parser enforce syntax; registries only provide spellings and metadata.

pub mod lang;
