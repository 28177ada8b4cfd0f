/// Parse a token stream into a `Program` [`Node`].
///
/// This is the main public entrypoint for parsing.
///
/// ## Parameters
/// - `tokens`: Token stream produced by `minilang_syntax::lexer`.
///
/// ## Errors
/// Returns the first [`SyntaxError`]; an empty stream is [`SyntaxError::EmptyInput`].
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn parse(tokens: &[Token]) -> Result<Node, SyntaxError> {
    Parser::new(tokens).parse()
}

/// Parse a token stream holding exactly one expression.
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn parse_expression(tokens: &[Token]) -> Result<Node, SyntaxError> {
    Parser::new(tokens).parse_expression()
}
