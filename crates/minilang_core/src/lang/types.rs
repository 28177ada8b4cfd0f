//! Declarable variable types.
//!
//! The three primitive types a `var` declaration may name. Each one is spelled by a reserved
//! keyword, so conversion goes through [`KeywordId`].

use std::fmt;

use super::keywords::{self, KeywordId};

/// A declared variable type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VarType {
    Int,
    Float,
    Bool,
}

/// All declarable types, in declaration-keyword order.
pub const VAR_TYPES: &[VarType] = &[VarType::Int, VarType::Float, VarType::Bool];

impl VarType {
    /// The keyword that spells this type.
    pub fn keyword(self) -> KeywordId {
        match self {
            VarType::Int => KeywordId::Int,
            VarType::Float => KeywordId::Float,
            VarType::Bool => KeywordId::Bool,
        }
    }

    /// Resolve a type keyword. Returns `None` for keywords that do not name a type.
    pub fn from_keyword(id: KeywordId) -> Option<Self> {
        match id {
            KeywordId::Int => Some(VarType::Int),
            KeywordId::Float => Some(VarType::Float),
            KeywordId::Bool => Some(VarType::Bool),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        keywords::as_str(self.keyword())
    }
}

impl fmt::Display for VarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
