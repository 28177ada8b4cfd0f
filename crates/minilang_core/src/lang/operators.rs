//! Operator vocabulary.
//!
//! minilang has three binary operator tiers. Each operator id records its spelling and its tier
//! ([`OperatorClass`]).
//!
//! ## Notes
//! - Every operator is binary, infix, and left-associative.
//! - Precedence lives in the parser: relational binds loosest and multiplicative tightest, by
//!   production nesting.
//!
//! ## Examples
//! ```rust
//! use minilang_core::lang::operators::{self, OperatorClass, OperatorId};
//!
//! assert_eq!(operators::from_str("<="), Some(OperatorId::LtEq));
//! assert_eq!(operators::class(OperatorId::Star), OperatorClass::Multiplicative);
//! ```

/// Stable identifier for every operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    // Additive
    Plus,
    Minus,

    // Multiplicative
    Star,
    Slash,

    // Relational
    Lt,
    Gt,
    LtEq,
    GtEq,
    EqEq,
    NotEq,
}

/// Precedence tier an operator belongs to.
///
/// The tier also names the token kind the lexer emits (`ADD_OP`, `MUL_OP`, `REL_OP`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorClass {
    Relational,
    Additive,
    Multiplicative,
}

/// Metadata for an operator.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    pub spelling: &'static str,
    pub class: OperatorClass,
}

/// Registry of all operators.
pub const OPERATORS: &[OperatorInfo] = &[
    op(OperatorId::Plus, "+", OperatorClass::Additive),
    op(OperatorId::Minus, "-", OperatorClass::Additive),
    op(OperatorId::Star, "*", OperatorClass::Multiplicative),
    op(OperatorId::Slash, "/", OperatorClass::Multiplicative),
    op(OperatorId::Lt, "<", OperatorClass::Relational),
    op(OperatorId::Gt, ">", OperatorClass::Relational),
    op(OperatorId::LtEq, "<=", OperatorClass::Relational),
    op(OperatorId::GtEq, ">=", OperatorClass::Relational),
    op(OperatorId::EqEq, "==", OperatorClass::Relational),
    op(OperatorId::NotEq, "!=", OperatorClass::Relational),
];

/// Return the full metadata entry for an operator.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    OPERATORS
        .iter()
        .find(|o| o.id == id)
        .expect("INVARIANT: every OperatorId has a registry entry")
}

/// Spelling of an operator.
pub fn as_str(id: OperatorId) -> &'static str {
    info_for(id).spelling
}

/// Precedence tier of an operator.
pub fn class(id: OperatorId) -> OperatorClass {
    info_for(id).class
}

/// Resolve an operator spelling to its identifier.
///
/// ## Returns
/// - `Some(OperatorId)` if the spelling exists in [`OPERATORS`].
/// - `None` otherwise.
pub fn from_str(spelling: &str) -> Option<OperatorId> {
    OPERATORS.iter().find(|o| o.spelling == spelling).map(|o| o.id)
}

const fn op(id: OperatorId, spelling: &'static str, class: OperatorClass) -> OperatorInfo {
    OperatorInfo { id, spelling, class }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classes() {
        assert_eq!(class(OperatorId::Minus), OperatorClass::Additive);
        assert_eq!(class(OperatorId::Slash), OperatorClass::Multiplicative);
        assert_eq!(class(OperatorId::NotEq), OperatorClass::Relational);
    }

    #[test]
    fn test_unknown_spellings() {
        assert_eq!(from_str("="), None);
        assert_eq!(from_str("!"), None);
        assert_eq!(from_str("**"), None);
    }
}
