/// Program and declaration-section parsing.
impl<'a> Parser<'a> {
    // ========================================================================
    // Program
    // ========================================================================

    fn program(&mut self) -> Result<Node, SyntaxError> {
        self.expect(&[TokenKind::Program])?;
        let name = self.expect(&[TokenKind::Identifier])?;
        self.expect(&[TokenKind::LBrace])?;
        let var_section = self.var_section()?;
        let statements = self.statements()?;
        self.expect(&[TokenKind::RBrace])?;

        tracing::trace!(
            program = %name.text,
            declarations = var_section.children.len(),
            statements = statements.children.len(),
            "parsed program"
        );
        Ok(Node::program(&name.text, var_section, statements))
    }

    // ========================================================================
    // Declarations
    // ========================================================================

    fn var_section(&mut self) -> Result<Node, SyntaxError> {
        let mut decls = Vec::new();
        while self.check(&[TokenKind::Var]) {
            decls.push(self.var_decl()?);
        }
        Ok(Node::var_section(decls))
    }

    fn var_decl(&mut self) -> Result<Node, SyntaxError> {
        const TYPE_KINDS: &[TokenKind] = &[TokenKind::Int, TokenKind::Float, TokenKind::Bool];

        self.expect(&[TokenKind::Var])?;
        let name = self.expect(&[TokenKind::Identifier])?;
        self.expect(&[TokenKind::Colon])?;
        let ty_token = self.expect(TYPE_KINDS)?;
        let ty: VarType = ty_token.kind.var_type().ok_or_else(|| SyntaxError::UnexpectedToken {
            found: ty_token.clone(),
            expected: TYPE_KINDS.to_vec(),
        })?;
        self.expect(&[TokenKind::Semicolon])?;
        Ok(Node::var_decl(&name.text, ty))
    }
}
