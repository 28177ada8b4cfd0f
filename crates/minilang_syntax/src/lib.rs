//! Syntax frontend for minilang: tokenizer, recursive-descent parser, AST, diagnostics.
//!
//! Data flows one way: source text → [`lexer::tokenize`] → token sequence → [`parser::parse`] → AST
//! rooted at a `Program` [`ast::Node`].
//!
//! ## Notes
//! - This crate is "syntax-only": no name resolution, type checking, or evaluation.
//! - Both stages are pure and fail fast: the first malformed character or token aborts the whole
//!   operation with a [`diagnostics::LexicalError`] or [`diagnostics::SyntaxError`].
//! - Vocabulary identity (keywords/operators/punctuation) comes from `minilang_core::lang` registries.
//!
//! ## Examples
//! ```rust
//! use minilang_syntax::{lexer, parser};
//!
//! let tokens = lexer::tokenize("program demo { var x : int; x = 1 + 2; }").unwrap();
//! let program = parser::parse(&tokens).unwrap();
//! assert_eq!(program.children.len(), 2);
//! ```

pub mod ast;
pub mod config;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod token_helpers;
