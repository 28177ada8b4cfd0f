/// Statement parsing methods.
///
/// A statement list runs until the lookahead is not a statement-starting token; the caller then
/// consumes the closing `}`.
impl<'a> Parser<'a> {
    // ========================================================================
    // Statements
    // ========================================================================

    fn statements(&mut self) -> Result<Node, SyntaxError> {
        let mut stmts = Vec::new();
        while let Some(token) = self.peek().filter(|t| t.kind.is_statement_start()) {
            let stmt = match token.kind {
                TokenKind::If => self.if_stmt()?,
                TokenKind::While => self.while_stmt()?,
                TokenKind::Print => self.print_stmt()?,
                _ => self.assignment()?,
            };
            stmts.push(stmt);
        }
        Ok(Node::statement_list(stmts))
    }

    /// Parse `'{' Statements '}'`.
    fn block(&mut self) -> Result<Node, SyntaxError> {
        let open = self.expect(&[TokenKind::LBrace])?;
        self.descend(open)?;
        let body = self.statements()?;
        self.expect(&[TokenKind::RBrace])?;
        self.ascend(1);
        Ok(body)
    }

    /// Parse `'(' Expr ')'`.
    fn parenthesized(&mut self) -> Result<Node, SyntaxError> {
        self.expect(&[TokenKind::LParen])?;
        let expr = self.expr()?;
        self.expect(&[TokenKind::RParen])?;
        Ok(expr)
    }

    fn assignment(&mut self) -> Result<Node, SyntaxError> {
        let target = self.expect(&[TokenKind::Identifier])?;
        self.expect(&[TokenKind::Assign])?;
        let value = self.expr()?;
        self.expect(&[TokenKind::Semicolon])?;
        Ok(Node::assignment(&target.text, value))
    }

    fn if_stmt(&mut self) -> Result<Node, SyntaxError> {
        self.expect(&[TokenKind::If])?;
        let condition = self.parenthesized()?;
        let then_branch = self.block()?;

        let else_branch = if self.check(&[TokenKind::Else]) {
            self.expect(&[TokenKind::Else])?;
            Some(self.block()?)
        } else {
            None
        };

        Ok(Node::if_stmt(condition, then_branch, else_branch))
    }

    fn while_stmt(&mut self) -> Result<Node, SyntaxError> {
        self.expect(&[TokenKind::While])?;
        let condition = self.parenthesized()?;
        let body = self.block()?;
        Ok(Node::while_stmt(condition, body))
    }

    fn print_stmt(&mut self) -> Result<Node, SyntaxError> {
        self.expect(&[TokenKind::Print])?;
        let value = self.parenthesized()?;
        self.expect(&[TokenKind::Semicolon])?;
        Ok(Node::print(value))
    }
}
