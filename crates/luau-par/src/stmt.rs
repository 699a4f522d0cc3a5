//! Statement grammar.
//!
//! `block` consumes statements until one of its caller-supplied terminator
//! kinds (or end of file) is reached. A `return` does not have to be the
//! last statement in a block; the block loop keeps accepting statements
//! after it, matching the reference checker's permissive behavior.

use luau_diag::SyntaxError;
use luau_lex::TokenKind;

use crate::parser::Parser;

impl<'a> Parser<'a> {
    pub(crate) fn block(&mut self, end_kinds: &[TokenKind]) -> Result<(), SyntaxError> {
        loop {
            if self.at_end() || end_kinds.contains(&self.peek().kind) {
                return Ok(());
            }
            if self.check(TokenKind::Return) {
                self.return_statement()?;
                continue;
            }
            self.statement()?;
        }
    }

    fn statement(&mut self) -> Result<(), SyntaxError> {
        match self.peek().kind {
            TokenKind::Semicolon => {
                self.advance();
                Ok(())
            }
            TokenKind::Local => self.local_statement(),
            TokenKind::If => self.if_statement(),
            TokenKind::While => self.while_statement(),
            TokenKind::Do => self.do_statement(),
            TokenKind::For => self.for_statement(),
            TokenKind::Repeat => self.repeat_statement(),
            TokenKind::Function => self.function_statement(),
            TokenKind::Break => {
                self.advance();
                Ok(())
            }
            TokenKind::Continue => {
                self.advance();
                Ok(())
            }
            TokenKind::Goto => {
                self.advance();
                self.expect_name("label name")?;
                Ok(())
            }
            TokenKind::ColonColon => {
                self.advance();
                self.expect_name("label name")?;
                self.expect(TokenKind::ColonColon, "'::'")?;
                Ok(())
            }
            TokenKind::Export => self.export_statement(),
            TokenKind::Name if self.check_keyword_name("type") && self.peek_at(1).kind == TokenKind::Name => {
                self.type_alias_statement()
            }
            _ => self.assignment_or_call(),
        }
    }

    fn local_statement(&mut self) -> Result<(), SyntaxError> {
        self.expect(TokenKind::Local, "'local'")?;
        if self.match_token(TokenKind::Function) {
            self.expect_name("function name")?;
            self.function_body()?;
            return Ok(());
        }
        if self.check_keyword_name("type") && self.peek_at(1).kind == TokenKind::Name {
            self.advance();
            self.type_alias_body()?;
            return Ok(());
        }
        loop {
            self.expect_name("variable name")?;
            if self.match_token(TokenKind::Colon) {
                self.skip_type_annotation()?;
            }
            if !self.match_token(TokenKind::Comma) {
                break;
            }
        }
        if self.match_token(TokenKind::Eq) {
            self.expression_list()?;
        }
        Ok(())
    }

    fn if_statement(&mut self) -> Result<(), SyntaxError> {
        self.expect(TokenKind::If, "'if'")?;
        self.expression()?;
        self.expect(TokenKind::Then, "'then'")?;
        self.block(&[TokenKind::ElseIf, TokenKind::Else, TokenKind::End])?;
        while self.match_token(TokenKind::ElseIf) {
            self.expression()?;
            self.expect(TokenKind::Then, "'then'")?;
            self.block(&[TokenKind::ElseIf, TokenKind::Else, TokenKind::End])?;
        }
        if self.match_token(TokenKind::Else) {
            self.block(&[TokenKind::End])?;
        }
        self.expect(TokenKind::End, "'end'")?;
        Ok(())
    }

    fn while_statement(&mut self) -> Result<(), SyntaxError> {
        self.expect(TokenKind::While, "'while'")?;
        self.expression()?;
        self.expect(TokenKind::Do, "'do'")?;
        self.block(&[TokenKind::End])?;
        self.expect(TokenKind::End, "'end'")?;
        Ok(())
    }

    fn do_statement(&mut self) -> Result<(), SyntaxError> {
        self.expect(TokenKind::Do, "'do'")?;
        self.block(&[TokenKind::End])?;
        self.expect(TokenKind::End, "'end'")?;
        Ok(())
    }

    fn repeat_statement(&mut self) -> Result<(), SyntaxError> {
        self.expect(TokenKind::Repeat, "'repeat'")?;
        self.block(&[TokenKind::Until])?;
        self.expect(TokenKind::Until, "'until'")?;
        self.expression()?;
        Ok(())
    }

    fn for_statement(&mut self) -> Result<(), SyntaxError> {
        self.expect(TokenKind::For, "'for'")?;
        self.expect_name("loop variable name")?;
        if self.match_token(TokenKind::Eq) {
            self.expression()?;
            self.expect(TokenKind::Comma, "','")?;
            self.expression()?;
            if self.match_token(TokenKind::Comma) {
                self.expression()?;
            }
        } else {
            if self.match_token(TokenKind::Colon) {
                self.skip_type_annotation()?;
            }
            while self.match_token(TokenKind::Comma) {
                self.expect_name("loop variable name")?;
                if self.match_token(TokenKind::Colon) {
                    self.skip_type_annotation()?;
                }
            }
            self.expect(TokenKind::In, "'in'")?;
            self.expression_list()?;
        }
        self.expect(TokenKind::Do, "'do'")?;
        self.block(&[TokenKind::End])?;
        self.expect(TokenKind::End, "'end'")?;
        Ok(())
    }

    fn function_statement(&mut self) -> Result<(), SyntaxError> {
        self.expect(TokenKind::Function, "'function'")?;
        self.function_name()?;
        self.function_body()?;
        Ok(())
    }

    fn function_name(&mut self) -> Result<(), SyntaxError> {
        self.expect_name("function name")?;
        while self.match_token(TokenKind::Dot) {
            self.expect_name("field name")?;
        }
        if self.match_token(TokenKind::Colon) {
            self.expect_name("method name")?;
        }
        Ok(())
    }

    /// Parses everything after the `function` keyword: optional generic
    /// parameters, the parameter list, an optional return-type annotation,
    /// the body, and the closing `end`.
    pub(crate) fn function_body(&mut self) -> Result<(), SyntaxError> {
        self.function_generic_params_optional()?;
        self.expect(TokenKind::LParen, "'('")?;
        if !self.check(TokenKind::RParen) {
            loop {
                if self.check(TokenKind::DotDotDot) {
                    self.advance();
                    if self.match_token(TokenKind::Colon) {
                        self.skip_type_annotation()?;
                    }
                    break;
                }
                self.expect_name("parameter name")?;
                if self.match_token(TokenKind::Colon) {
                    self.skip_type_annotation()?;
                }
                if !self.match_token(TokenKind::Comma) {
                    break;
                }
            }
        }
        self.expect(TokenKind::RParen, "')'")?;
        if self.match_token(TokenKind::Colon) {
            self.skip_type_annotation()?;
        }
        self.block(&[TokenKind::End])?;
        self.expect(TokenKind::End, "'end'")?;
        Ok(())
    }

    fn function_generic_params_optional(&mut self) -> Result<(), SyntaxError> {
        if !self.match_token(TokenKind::Lt) {
            return Ok(());
        }
        loop {
            self.expect_name("generic parameter name")?;
            self.match_token(TokenKind::DotDotDot);
            if !self.match_token(TokenKind::Comma) {
                break;
            }
        }
        self.expect(TokenKind::Gt, "'>'")?;
        Ok(())
    }

    fn return_statement(&mut self) -> Result<(), SyntaxError> {
        self.expect(TokenKind::Return, "'return'")?;
        if self.can_start_expression() {
            self.expression_list()?;
        }
        self.match_token(TokenKind::Semicolon);
        Ok(())
    }

    fn can_start_expression(&self) -> bool {
        matches!(
            self.peek().kind,
            TokenKind::Nil
                | TokenKind::True
                | TokenKind::False
                | TokenKind::Number
                | TokenKind::String
                | TokenKind::DotDotDot
                | TokenKind::Function
                | TokenKind::LBrace
                | TokenKind::Name
                | TokenKind::LParen
                | TokenKind::Not
                | TokenKind::Hash
                | TokenKind::Minus
                | TokenKind::Tilde
                | TokenKind::If
        )
    }

    fn export_statement(&mut self) -> Result<(), SyntaxError> {
        self.expect(TokenKind::Export, "'export'")?;
        self.type_alias_statement()
    }

    fn type_alias_statement(&mut self) -> Result<(), SyntaxError> {
        self.expect_name("'type'")?;
        self.type_alias_body()
    }

    /// Everything after the `type` keyword has already been consumed by the
    /// caller (by `type_alias_statement` or by `local_statement` for `local
    /// type`): the alias name, optional generics, `=`, and the aliased type.
    fn type_alias_body(&mut self) -> Result<(), SyntaxError> {
        self.expect_name("type alias name")?;
        self.function_generic_params_optional()?;
        self.expect(TokenKind::Eq, "'='")?;
        self.skip_type_expression()?;
        Ok(())
    }

    fn is_compound_assign_op(&self) -> bool {
        matches!(
            self.peek().kind,
            TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Star
                | TokenKind::Slash
                | TokenKind::SlashSlash
                | TokenKind::Percent
                | TokenKind::Caret
                | TokenKind::DotDot
                | TokenKind::LtLt
                | TokenKind::GtGt
                | TokenKind::Amp
                | TokenKind::Pipe
        ) && self.peek_at(1).kind == TokenKind::Eq
    }

    fn assignment_or_call(&mut self) -> Result<(), SyntaxError> {
        let mut target_count = 1;
        let mut last_ends_in_call = self.suffixed_expression()?;
        if self.is_compound_assign_op() {
            self.advance();
            self.advance();
            self.expression()?;
            return Ok(());
        }
        while self.match_token(TokenKind::Comma) {
            target_count += 1;
            last_ends_in_call = self.suffixed_expression()?;
        }
        if self.match_token(TokenKind::Eq) {
            self.expression_list()?;
            return Ok(());
        }
        if target_count == 1 && last_ends_in_call {
            return Ok(());
        }
        Err(self.error_expected_function_call())
    }
}

#[cfg(test)]
mod tests {
    use luau_lex::Lexer;

    use crate::parser::Parser;

    fn parses(source: &str) -> bool {
        let tokens = Lexer::new(source).tokenize().unwrap();
        Parser::new(tokens).parse_chunk().is_ok()
    }

    #[test]
    fn parses_local_with_type_annotation() {
        assert!(parses("local x: number = 1"));
    }

    #[test]
    fn parses_local_function() {
        assert!(parses("local function f(a: number, b: string): boolean\n  return true\nend"));
    }

    #[test]
    fn parses_if_elseif_else() {
        assert!(parses("if a then b() elseif c then d() else e() end"));
    }

    #[test]
    fn parses_numeric_and_generic_for() {
        assert!(parses("for i = 1, 10 do end"));
        assert!(parses("for k, v in pairs(t) do end"));
    }

    #[test]
    fn parses_while_and_repeat() {
        assert!(parses("while a do b() end"));
        assert!(parses("repeat a() until b"));
    }

    #[test]
    fn parses_function_statement_with_method_name() {
        assert!(parses("function obj.inner:method(self, a) return a end"));
    }

    #[test]
    fn parses_generic_function() {
        assert!(parses("function identity<T>(x: T): T\n  return x\nend"));
    }

    #[test]
    fn parses_type_alias_and_export() {
        assert!(parses("type Point = {x: number, y: number}"));
        assert!(parses("export type Point = {x: number, y: number}"));
    }

    #[test]
    fn parses_goto_and_label() {
        assert!(parses("::top::\ngoto top"));
    }

    #[test]
    fn parses_multiple_assignment() {
        assert!(parses("a, b = b, a"));
    }

    #[test]
    fn parses_compound_assignment_operators() {
        assert!(parses("x += 1"));
        assert!(parses("x ..= \"!\""));
        assert!(parses("x //= 2"));
    }

    #[test]
    fn parses_local_type_alias() {
        assert!(parses("local type Handler = (number) -> boolean"));
    }

    #[test]
    fn rejects_bare_expression_statement() {
        assert!(!parses("1 + 2"));
    }

    #[test]
    fn rejects_non_call_prefix_expression_statement_with_the_expected_message() {
        let tokens = Lexer::new("a + b").tokenize().unwrap();
        let err = Parser::new(tokens).parse_chunk().unwrap_err();
        assert_eq!(err.message, "Expected function call in statement");
    }

    #[test]
    fn accepts_statement_after_return() {
        assert!(parses("return 1\nlocal x = 2"));
    }

    #[test]
    fn rejects_unclosed_if() {
        assert!(!parses("if a then b()"));
    }

    #[test]
    fn accepts_call_statement() {
        assert!(parses("print(\"hi\")"));
    }
}
