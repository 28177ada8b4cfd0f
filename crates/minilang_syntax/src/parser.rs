//! Recursive-descent parser for minilang.
//!
//! Consumes the token sequence produced by [`crate::lexer`] with exactly one token of lookahead and
//! no backtracking, building a tree rooted at a `Program` [`Node`].
//!
//! ## Grammar
//!
//! ```text
//! Program     := 'program' IDENTIFIER '{' VarSection Statements '}'
//! VarSection  := VarDecl*
//! VarDecl     := 'var' IDENTIFIER ':' ('int' | 'float' | 'bool') ';'
//! Statements  := Statement*
//! Statement   := Assignment | IfStmt | WhileStmt | PrintStmt
//! Assignment  := IDENTIFIER '=' Expr ';'
//! IfStmt      := 'if' '(' Expr ')' '{' Statements '}' ('else' '{' Statements '}')?
//! WhileStmt   := 'while' '(' Expr ')' '{' Statements '}'
//! PrintStmt   := 'print' '(' Expr ')' ';'
//! Expr        := SimpleExpr (REL_OP SimpleExpr)*
//! SimpleExpr  := Term (ADD_OP Term)*
//! Term        := Factor (MUL_OP Factor)*
//! Factor      := IDENTIFIER | NUMBER | '(' Expr ')' | 'true' | 'false'
//! ```
//!
//! ## Examples
//!
//! ```rust
//! use minilang_syntax::{lexer, parser};
//!
//! let tokens = lexer::tokenize("program p { var x : int; x = 10 - 3 - 2; }").unwrap();
//! let program = parser::parse(&tokens).unwrap();
//! assert_eq!(program.program_name(), Some("p"));
//! ```

use crate::ast::Node;
use crate::diagnostics::SyntaxError;
use crate::lexer::{Token, TokenKind};
use minilang_core::lang::types::VarType;

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/decl.rs");
include!("parser/stmts.rs");
include!("parser/expr.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
