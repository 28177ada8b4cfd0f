/// Token-stream primitives.
///
/// `expect` is the only way a production consumes a token; `check` is the non-consuming
/// single-token lookahead used by the repetition loops and the optional `else`.
impl<'a> Parser<'a> {
    /// Return the current token without consuming it, or `None` at end of input.
    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    /// Return `true` if the current token's kind is one of `kinds`.
    fn check(&self, kinds: &[TokenKind]) -> bool {
        self.peek().is_some_and(|token| kinds.contains(&token.kind))
    }

    /// Consume the current token if its kind is one of `kinds`.
    ///
    /// ## Errors
    /// Names the actual token (or end of input) together with the accepted kinds.
    fn expect(&mut self, kinds: &[TokenKind]) -> Result<&'a Token, SyntaxError> {
        match self.peek() {
            Some(token) if kinds.contains(&token.kind) => {
                self.pos += 1;
                Ok(token)
            }
            Some(token) => Err(SyntaxError::UnexpectedToken {
                found: token.clone(),
                expected: kinds.to_vec(),
            }),
            None => Err(SyntaxError::UnexpectedEnd {
                expected: kinds.to_vec(),
            }),
        }
    }

    fn expect_end(&self) -> Result<(), SyntaxError> {
        match self.peek() {
            None => Ok(()),
            Some(token) => Err(SyntaxError::UnexpectedToken {
                found: token.clone(),
                expected: Vec::new(),
            }),
        }
    }

    /// Enter one nesting level at `token`.
    ///
    /// ## Errors
    /// [`SyntaxError::NestingTooDeep`] once [`MAX_NESTING_DEPTH`] levels are already open.
    fn descend(&mut self, token: &Token) -> Result<(), SyntaxError> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(SyntaxError::NestingTooDeep {
                found: token.clone(),
                limit: MAX_NESTING_DEPTH,
            });
        }
        self.depth += 1;
        Ok(())
    }

    fn ascend(&mut self, levels: usize) {
        self.depth -= levels;
    }
}
