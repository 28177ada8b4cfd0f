#![forbid(unsafe_code)]
//! minilang: front-end for a minimal imperative teaching language.
//!
//! This crate is the library facade over the workspace: it re-exports the tokenizer, parser, and AST
//! from `minilang_syntax` and adds a one-call [`parse_source`] that runs both stages.
//!
//! ## Panic Policy
//!
//! - **Production code**: errors are values. Tokenizing and parsing return `Result` and never panic on
//!   malformed input. Nesting deeper than [`parser::MAX_NESTING_DEPTH`] is reported as
//!   [`SyntaxError::NestingTooDeep`] instead of exhausting the stack.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//! - **True invariants**: registry lookups that cannot fail for a well-formed registry use
//!   `.expect("INVARIANT: reason")`.
//!
//! ## Examples
//! ```rust
//! use minilang::ast::NodeKind;
//!
//! let program = minilang::parse_source("program demo { var x : int; x = 10; print(x); }").unwrap();
//! assert_eq!(program.kind, NodeKind::Program);
//! assert_eq!(program.statements().unwrap().children.len(), 2);
//! ```

pub mod config;
pub mod error;
pub mod telemetry;

pub use minilang_syntax::ast;
pub use minilang_syntax::diagnostics;
pub use minilang_syntax::lexer;
pub use minilang_syntax::parser;

pub use minilang_syntax::ast::{Node, NodeKind, Payload};
pub use minilang_syntax::diagnostics::{LexicalError, SyntaxError};
pub use minilang_syntax::lexer::{Token, TokenKind, tokenize};
pub use minilang_syntax::parser::{parse, parse_expression};

pub use config::FrontendConfig;
pub use error::FrontendError;

/// Tokenize and parse a complete program with the default configuration.
///
/// ## Errors
/// - [`FrontendError::Lexical`] if the source contains a character no token rule matches.
/// - [`FrontendError::Syntax`] if the token sequence does not form a program.
pub fn parse_source(source: &str) -> Result<Node, FrontendError> {
    parse_source_with_config(source, &FrontendConfig::default())
}

/// Tokenize and parse a complete program with an explicit configuration.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn parse_source_with_config(source: &str, config: &FrontendConfig) -> Result<Node, FrontendError> {
    let tokens = lexer::tokenize_with_config(source, &config.lexer)?;
    let program = parser::parse(&tokens)?;
    tracing::debug!(nodes = program.node_count(), "parsed program");
    Ok(program)
}

/// Tokenize and parse a single expression, e.g. `"10 - 3 - 2"`, with the default configuration.
pub fn parse_expression_source(source: &str) -> Result<Node, FrontendError> {
    parse_expression_source_with_config(source, &FrontendConfig::default())
}

/// Tokenize and parse a single expression with an explicit configuration.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn parse_expression_source_with_config(source: &str, config: &FrontendConfig) -> Result<Node, FrontendError> {
    let tokens = lexer::tokenize_with_config(source, &config.lexer)?;
    Ok(parse_expression(&tokens)?)
}
