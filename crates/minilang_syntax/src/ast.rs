//! Abstract Syntax Tree definitions for minilang
//!
//! The tree is built from a single tagged node type: every [`Node`] has a [`NodeKind`], an ordered
//! list of exclusively owned children, and an optional [`Payload`] leaf value.
//!
//! ## Shapes
//!
//! | kind            | payload               | children                          |
//! |-----------------|-----------------------|-----------------------------------|
//! | `Program`       | program name          | `VarSection`, `StatementList`     |
//! | `VarSection`    | -                     | `VarDecl`*                        |
//! | `VarDecl`       | name + declared type  | -                                 |
//! | `StatementList` | -                     | statements                        |
//! | `Assignment`    | target name           | value expression                  |
//! | `If`            | -                     | condition, then-list, else-list?  |
//! | `While`         | -                     | condition, body list              |
//! | `Print`         | -                     | expression                        |
//! | `Binary`        | operator              | lhs, rhs                          |
//! | `Identifier`    | name                  | -                                 |
//! | `Number`        | literal text          | -                                 |
//! | `Boolean`       | literal value         | -                                 |
//!
//! The constructors below are the only way the parser builds nodes, so parsed trees always have these
//! shapes.

use std::fmt;

use minilang_core::lang::operators::{self, OperatorId};
use minilang_core::lang::types::VarType;

/// Syntactic construct a node represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Program,
    VarSection,
    VarDecl,
    StatementList,
    Assignment,
    If,
    While,
    Print,
    Binary,
    Identifier,
    Number,
    Boolean,
}

impl NodeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Program => "Program",
            NodeKind::VarSection => "VarSection",
            NodeKind::VarDecl => "VarDecl",
            NodeKind::StatementList => "StatementList",
            NodeKind::Assignment => "Assignment",
            NodeKind::If => "If",
            NodeKind::While => "While",
            NodeKind::Print => "Print",
            NodeKind::Binary => "Binary",
            NodeKind::Identifier => "Identifier",
            NodeKind::Number => "Number",
            NodeKind::Boolean => "Boolean",
        }
    }

    /// Return `true` for kinds that may appear in a `StatementList`.
    pub fn is_statement(self) -> bool {
        matches!(self, NodeKind::Assignment | NodeKind::If | NodeKind::While | NodeKind::Print)
    }

    /// Return `true` for kinds produced by the expression grammar.
    pub fn is_expression(self) -> bool {
        matches!(
            self,
            NodeKind::Binary | NodeKind::Identifier | NodeKind::Number | NodeKind::Boolean
        )
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Leaf value attached to a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    /// Program name, assignment target, or referenced identifier.
    Name(String),
    /// A variable declaration.
    Decl { name: String, ty: VarType },
    /// Operator of a binary expression.
    Operator(OperatorId),
    /// Numeric literal, exactly as written (`3.`, `007`).
    Number(String),
    Boolean(bool),
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Payload::Name(name) => f.write_str(name),
            Payload::Decl { name, ty } => write!(f, "{name}: {ty}"),
            Payload::Operator(op) => f.write_str(operators::as_str(*op)),
            Payload::Number(text) => f.write_str(text),
            Payload::Boolean(value) => write!(f, "{value}"),
        }
    }
}

/// A node of the syntax tree.
///
/// ## Notes
/// - Dropping, [`Node::depth`], [`Node::node_count`] and the `Display` dump walk the tree with an
///   explicit stack, so a hand-built tree of any depth is safe for them. The derived `Clone`,
///   `PartialEq` and `Debug` still recurse; the parser keeps parsed trees shallow (see
///   [`crate::parser::MAX_NESTING_DEPTH`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub kind: NodeKind,
    pub children: Vec<Node>,
    pub payload: Option<Payload>,
}

impl Drop for Node {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

// ============================================================================
// Construction
// ============================================================================

impl Node {
    fn new(kind: NodeKind, children: Vec<Node>, payload: Option<Payload>) -> Self {
        Self {
            kind,
            children,
            payload,
        }
    }

    pub fn program(name: impl Into<String>, var_section: Node, statements: Node) -> Self {
        Self::new(
            NodeKind::Program,
            vec![var_section, statements],
            Some(Payload::Name(name.into())),
        )
    }

    pub fn var_section(decls: Vec<Node>) -> Self {
        Self::new(NodeKind::VarSection, decls, None)
    }

    pub fn var_decl(name: impl Into<String>, ty: VarType) -> Self {
        Self::new(
            NodeKind::VarDecl,
            Vec::new(),
            Some(Payload::Decl { name: name.into(), ty }),
        )
    }

    pub fn statement_list(statements: Vec<Node>) -> Self {
        Self::new(NodeKind::StatementList, statements, None)
    }

    pub fn assignment(target: impl Into<String>, value: Node) -> Self {
        Self::new(NodeKind::Assignment, vec![value], Some(Payload::Name(target.into())))
    }

    /// `if` statement; the else branch is a third child only when present.
    pub fn if_stmt(condition: Node, then_branch: Node, else_branch: Option<Node>) -> Self {
        let mut children = vec![condition, then_branch];
        children.extend(else_branch);
        Self::new(NodeKind::If, children, None)
    }

    pub fn while_stmt(condition: Node, body: Node) -> Self {
        Self::new(NodeKind::While, vec![condition, body], None)
    }

    pub fn print(value: Node) -> Self {
        Self::new(NodeKind::Print, vec![value], None)
    }

    pub fn binary(op: OperatorId, lhs: Node, rhs: Node) -> Self {
        Self::new(NodeKind::Binary, vec![lhs, rhs], Some(Payload::Operator(op)))
    }

    pub fn identifier(name: impl Into<String>) -> Self {
        Self::new(NodeKind::Identifier, Vec::new(), Some(Payload::Name(name.into())))
    }

    pub fn number(text: impl Into<String>) -> Self {
        Self::new(NodeKind::Number, Vec::new(), Some(Payload::Number(text.into())))
    }

    pub fn boolean(value: bool) -> Self {
        Self::new(NodeKind::Boolean, Vec::new(), Some(Payload::Boolean(value)))
    }
}

// ============================================================================
// Accessors
// ============================================================================

impl Node {
    fn child_if(&self, kind: NodeKind, index: usize) -> Option<&Node> {
        if self.kind == kind { self.children.get(index) } else { None }
    }

    /// Program name, for `Program` nodes.
    pub fn program_name(&self) -> Option<&str> {
        match (&self.kind, &self.payload) {
            (NodeKind::Program, Some(Payload::Name(name))) => Some(name),
            _ => None,
        }
    }

    /// The declaration section, for `Program` nodes.
    pub fn declarations(&self) -> Option<&Node> {
        self.child_if(NodeKind::Program, 0)
    }

    /// The top-level statement list, for `Program` nodes.
    pub fn statements(&self) -> Option<&Node> {
        self.child_if(NodeKind::Program, 1)
    }

    /// The name carried by a declaration, assignment, identifier reference, or program.
    pub fn name(&self) -> Option<&str> {
        match &self.payload {
            Some(Payload::Name(name)) | Some(Payload::Decl { name, .. }) => Some(name),
            _ => None,
        }
    }

    /// Declared type, for `VarDecl` nodes.
    pub fn var_type(&self) -> Option<VarType> {
        match &self.payload {
            Some(Payload::Decl { ty, .. }) => Some(*ty),
            _ => None,
        }
    }

    /// Operator, for `Binary` nodes.
    pub fn operator(&self) -> Option<OperatorId> {
        match &self.payload {
            Some(Payload::Operator(op)) => Some(*op),
            _ => None,
        }
    }

    pub fn lhs(&self) -> Option<&Node> {
        self.child_if(NodeKind::Binary, 0)
    }

    pub fn rhs(&self) -> Option<&Node> {
        self.child_if(NodeKind::Binary, 1)
    }

    /// Condition of an `If` or `While`.
    pub fn condition(&self) -> Option<&Node> {
        match self.kind {
            NodeKind::If | NodeKind::While => self.children.first(),
            _ => None,
        }
    }

    /// Then-branch of an `If`, or body of a `While`.
    pub fn body(&self) -> Option<&Node> {
        match self.kind {
            NodeKind::If | NodeKind::While => self.children.get(1),
            _ => None,
        }
    }

    pub fn else_branch(&self) -> Option<&Node> {
        self.child_if(NodeKind::If, 2)
    }

    /// Height of the tree rooted here (a leaf has depth 1).
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 1)];
        while let Some((node, level)) = stack.pop() {
            deepest = deepest.max(level);
            stack.extend(node.children.iter().map(|child| (child, level + 1)));
        }
        deepest
    }

    /// Number of nodes in the tree rooted here.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.iter());
        }
        count
    }

    fn write_tree(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack = vec![(self, 0usize)];
        while let Some((node, level)) = stack.pop() {
            write!(f, "{:indent$}{}", "", node.kind, indent = level * 2)?;
            if let Some(payload) = &node.payload {
                write!(f, ": {payload}")?;
            }
            writeln!(f)?;
            // Reversed so the first child is printed first.
            stack.extend(node.children.iter().rev().map(|child| (child, level + 1)));
        }
        Ok(())
    }
}

/// Indented tree dump: one line per node, two spaces per level, `Kind` or `Kind: payload`.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_tree(f)
    }
}
