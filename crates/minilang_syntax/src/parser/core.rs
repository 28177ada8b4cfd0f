/// Deepest nesting the parser accepts.
///
/// Every `(`, every `{ ... }` block and every folded binary operator counts one level, so both the
/// parser's recursion and the height of the tree it builds stay bounded. Going past the limit fails
/// with [`SyntaxError::NestingTooDeep`].
pub const MAX_NESTING_DEPTH: usize = 256;

/// Parser core type and entrypoints.
///
/// ## Notes
/// - This file is `include!`'d into `crate::parser` to keep all parser methods in a
///   single module while avoiding a single "god file".
/// - The parser is single-pass and fail-fast: the first unexpected token aborts the parse.
pub struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Create a new parser for a token stream.
    ///
    /// ## Parameters
    /// - `tokens`: Token stream produced by `minilang_syntax::lexer`.
    pub fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, pos: 0, depth: 0 }
    }

    /// Parse the entire token stream as a program.
    ///
    /// ## Errors
    /// - [`SyntaxError::EmptyInput`] for an empty stream.
    /// - [`SyntaxError::UnexpectedToken`] / [`SyntaxError::UnexpectedEnd`] at the first token that
    ///   does not fit the grammar, including any token left over after the closing `}`.
    pub fn parse(mut self) -> Result<Node, SyntaxError> {
        if self.tokens.is_empty() {
            return Err(SyntaxError::EmptyInput);
        }
        let program = self.program()?;
        self.expect_end()?;
        Ok(program)
    }

    /// Parse the entire token stream as a single expression.
    pub fn parse_expression(mut self) -> Result<Node, SyntaxError> {
        if self.tokens.is_empty() {
            return Err(SyntaxError::EmptyInput);
        }
        let expr = self.expr()?;
        self.expect_end()?;
        Ok(expr)
    }
}
