/// Expression parsing methods.
///
/// Precedence is encoded by production nesting: relational (`Expr`) binds loosest, then additive
/// (`SimpleExpr`), then multiplicative (`Term`), with `Factor` as the base case. Every tier folds
/// left, so `a - b - c` parses as `(a - b) - c`.
impl<'a> Parser<'a> {
    // ========================================================================
    // Expressions
    // ========================================================================

    fn expr(&mut self) -> Result<Node, SyntaxError> {
        self.left_assoc(TokenKind::RelOp, Self::simple_expr)
    }

    fn simple_expr(&mut self) -> Result<Node, SyntaxError> {
        self.left_assoc(TokenKind::AddOp, Self::term)
    }

    fn term(&mut self) -> Result<Node, SyntaxError> {
        self.left_assoc(TokenKind::MulOp, Self::factor)
    }

    /// Parse `operand (op operand)*`, folding each application into the left operand.
    fn left_assoc(
        &mut self,
        op_kind: TokenKind,
        operand: fn(&mut Self) -> Result<Node, SyntaxError>,
    ) -> Result<Node, SyntaxError> {
        let mut left = operand(self)?;
        let mut folds = 0;
        while self.check(&[op_kind]) {
            let token = self.expect(&[op_kind])?;
            let op = token.operator_id().ok_or_else(|| SyntaxError::UnexpectedToken {
                found: token.clone(),
                expected: vec![op_kind],
            })?;
            // Each fold puts the chain so far one level deeper in the tree.
            self.descend(token)?;
            folds += 1;
            let right = operand(self)?;
            left = Node::binary(op, left, right);
        }
        self.ascend(folds);
        Ok(left)
    }

    fn factor(&mut self) -> Result<Node, SyntaxError> {
        const FACTOR_START: &[TokenKind] = &[
            TokenKind::Identifier,
            TokenKind::Number,
            TokenKind::LParen,
            TokenKind::True,
            TokenKind::False,
        ];

        let token = self.expect(FACTOR_START)?;
        match token.kind {
            TokenKind::Identifier => Ok(Node::identifier(&token.text)),
            TokenKind::Number => Ok(Node::number(&token.text)),
            TokenKind::True => Ok(Node::boolean(true)),
            TokenKind::False => Ok(Node::boolean(false)),
            _ => {
                self.descend(token)?;
                let expr = self.expr()?;
                self.expect(&[TokenKind::RParen])?;
                self.ascend(1);
                Ok(expr)
            }
        }
    }
}
