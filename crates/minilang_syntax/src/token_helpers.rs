//! Small helper APIs for working with `Token` / `TokenKind`.
//!
//! These helpers exist to reduce repetitive `matches!(...)` at call sites and to bridge between flat
//! token kinds and the registry ids in `minilang_core::lang`.

use crate::lexer::{Token, TokenKind};
use minilang_core::lang::keywords::{self, KeywordId};
use minilang_core::lang::operators::{self, OperatorId};
use minilang_core::lang::types::VarType;

impl TokenKind {
    /// Return the keyword id, if this is a keyword kind.
    pub fn keyword_id(self) -> Option<KeywordId> {
        keywords::KEYWORDS
            .iter()
            .map(|k| k.id)
            .find(|&id| TokenKind::from(id) == self)
    }

    /// Return `true` if this is a reserved-word kind.
    pub fn is_keyword(self) -> bool {
        self.keyword_id().is_some()
    }

    /// Return `true` if this is one of the operator tiers (`ADD_OP`, `MUL_OP`, `REL_OP`).
    pub fn is_operator(self) -> bool {
        matches!(self, TokenKind::AddOp | TokenKind::MulOp | TokenKind::RelOp)
    }

    /// Return `true` if a statement may begin with this kind.
    pub fn is_statement_start(self) -> bool {
        matches!(
            self,
            TokenKind::Identifier | TokenKind::If | TokenKind::While | TokenKind::Print
        )
    }

    /// Return the declared type this kind spells, if it is a type keyword.
    pub fn var_type(self) -> Option<VarType> {
        self.keyword_id().and_then(VarType::from_keyword)
    }
}

impl Token {
    /// Convenience wrapper for `self.kind.keyword_id()`.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        self.kind.keyword_id()
    }

    /// Resolve the operator spelled by an operator token.
    ///
    /// ## Returns
    /// - `Some(OperatorId)` when the text is a known operator *and* belongs to this token's tier.
    /// - `None` for non-operator tokens or mismatched text (e.g. a hand-built `ADD_OP "*"`).
    pub fn operator_id(&self) -> Option<OperatorId> {
        if !self.kind.is_operator() {
            return None;
        }
        operators::from_str(&self.text).filter(|&id| TokenKind::from(operators::class(id)) == self.kind)
    }
}
