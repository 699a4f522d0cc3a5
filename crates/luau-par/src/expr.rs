//! Expression grammar: the standard Lua/Luau ten-level precedence chain
//! (or, and, comparison, concat, additive, multiplicative, unary, power,
//! suffix, primary), plus the Luau-specific `::` cast suffix.
//!
//! Every method here validates and discards; there is nothing to build.

use luau_diag::SyntaxError;
use luau_lex::TokenKind;

use crate::parser::Parser;

impl<'a> Parser<'a> {
    /// `if-then-else` is a valid expression at the top level of `_expression`.
    pub(crate) fn expression(&mut self) -> Result<(), SyntaxError> {
        if self.check(TokenKind::If) {
            self.advance();
            self.expression()?;
            self.expect(TokenKind::Then, "'then' in if expression")?;
            self.expression()?;
            while self.match_token(TokenKind::ElseIf) {
                self.expression()?;
                self.expect(TokenKind::Then, "'then' in if expression")?;
                self.expression()?;
            }
            self.expect(TokenKind::Else, "'else' in if expression")?;
            self.expression()?;
            return Ok(());
        }
        self.or_expr()
    }

    fn or_expr(&mut self) -> Result<(), SyntaxError> {
        self.and_expr()?;
        while self.match_token(TokenKind::Or) {
            self.and_expr()?;
        }
        Ok(())
    }

    fn and_expr(&mut self) -> Result<(), SyntaxError> {
        self.comparison_expr()?;
        while self.match_token(TokenKind::And) {
            self.comparison_expr()?;
        }
        Ok(())
    }

    fn comparison_expr(&mut self) -> Result<(), SyntaxError> {
        self.bitor_expr()?;
        loop {
            let op = self.peek().kind;
            if matches!(
                op,
                TokenKind::EqEq
                    | TokenKind::TildeEq
                    | TokenKind::Lt
                    | TokenKind::LtEq
                    | TokenKind::Gt
                    | TokenKind::GtEq
            ) {
                self.advance();
                self.bitor_expr()?;
            } else {
                break;
            }
        }
        Ok(())
    }

    /// Binary `|`. Luau's binary bitwise-xor is spelled `~`, but the lexer
    /// never distinguishes it from the unary complement/`~=` prefix, so
    /// (as in the reference checker) it is only ever recognized in unary
    /// position.
    fn bitor_expr(&mut self) -> Result<(), SyntaxError> {
        self.bitand_expr()?;
        while self.match_token(TokenKind::Pipe) {
            self.bitand_expr()?;
        }
        Ok(())
    }

    fn bitand_expr(&mut self) -> Result<(), SyntaxError> {
        self.shift_expr()?;
        while self.match_token(TokenKind::Amp) {
            self.shift_expr()?;
        }
        Ok(())
    }

    fn shift_expr(&mut self) -> Result<(), SyntaxError> {
        self.concat_expr()?;
        while matches!(self.peek().kind, TokenKind::LtLt | TokenKind::GtGt) {
            self.advance();
            self.concat_expr()?;
        }
        Ok(())
    }

    /// Right-associative: `a .. b .. c` parses as `a .. (b .. c)`.
    fn concat_expr(&mut self) -> Result<(), SyntaxError> {
        self.additive_expr()?;
        if self.match_token(TokenKind::DotDot) {
            self.concat_expr()?;
        }
        Ok(())
    }

    fn additive_expr(&mut self) -> Result<(), SyntaxError> {
        self.multiplicative_expr()?;
        while matches!(self.peek().kind, TokenKind::Plus | TokenKind::Minus) {
            self.advance();
            self.multiplicative_expr()?;
        }
        Ok(())
    }

    fn multiplicative_expr(&mut self) -> Result<(), SyntaxError> {
        self.unary_expr()?;
        while matches!(
            self.peek().kind,
            TokenKind::Star | TokenKind::Slash | TokenKind::SlashSlash | TokenKind::Percent
        ) {
            self.advance();
            self.unary_expr()?;
        }
        Ok(())
    }

    fn unary_expr(&mut self) -> Result<(), SyntaxError> {
        if matches!(
            self.peek().kind,
            TokenKind::Not | TokenKind::Hash | TokenKind::Minus | TokenKind::Tilde
        ) {
            self.advance();
            self.unary_expr()
        } else {
            self.pow_expr()
        }
    }

    /// Right-associative and binds tighter than unary on its exponent:
    /// `-2 ^ 2` is `-(2 ^ 2)`, `2 ^ -2` is `2 ^ (-2)`.
    fn pow_expr(&mut self) -> Result<(), SyntaxError> {
        self.primary_expression()?;
        if self.match_token(TokenKind::Caret) {
            self.unary_expr()?;
        }
        Ok(())
    }

    fn primary_expression(&mut self) -> Result<(), SyntaxError> {
        match self.peek().kind {
            TokenKind::Nil | TokenKind::True | TokenKind::False | TokenKind::Number | TokenKind::String | TokenKind::DotDotDot => {
                self.advance();
                Ok(())
            }
            TokenKind::Function => self.function_body(),
            TokenKind::LBrace => self.table_constructor(),
            TokenKind::Name | TokenKind::LParen => self.suffixed_expression().map(|_| ()),
            _ => Err(self.error_unexpected("expression")),
        }
    }

    fn prefix_expression(&mut self) -> Result<(), SyntaxError> {
        match self.peek().kind {
            TokenKind::Name => {
                self.advance();
                Ok(())
            }
            TokenKind::LParen => {
                self.advance();
                self.expression()?;
                self.expect(TokenKind::RParen, "')'")?;
                Ok(())
            }
            _ => Err(self.error_unexpected("expression")),
        }
    }

    /// Parses a prefix expression followed by zero or more suffixes.
    /// Returns whether the last suffix consumed was a function/method call,
    /// which is exactly the shape an expression statement must end in.
    pub(crate) fn suffixed_expression(&mut self) -> Result<bool, SyntaxError> {
        self.prefix_expression()?;
        let mut ends_in_call = false;
        loop {
            match self.peek().kind {
                TokenKind::Dot => {
                    self.advance();
                    self.expect_name("field name")?;
                    ends_in_call = false;
                }
                TokenKind::LBracket => {
                    self.advance();
                    self.expression()?;
                    self.expect(TokenKind::RBracket, "']'")?;
                    ends_in_call = false;
                }
                TokenKind::Colon => {
                    self.advance();
                    self.expect_name("method name")?;
                    self.parse_args()?;
                    ends_in_call = true;
                }
                TokenKind::ColonColon => {
                    self.advance();
                    self.skip_type_expression()?;
                    ends_in_call = false;
                }
                TokenKind::LParen | TokenKind::LBrace | TokenKind::String => {
                    self.parse_args()?;
                    ends_in_call = true;
                }
                _ => break,
            }
        }
        Ok(ends_in_call)
    }

    pub(crate) fn parse_args(&mut self) -> Result<(), SyntaxError> {
        match self.peek().kind {
            TokenKind::LParen => {
                self.advance();
                if !self.check(TokenKind::RParen) {
                    self.expression_list()?;
                }
                self.expect(TokenKind::RParen, "')'")?;
                Ok(())
            }
            TokenKind::LBrace => self.table_constructor(),
            TokenKind::String => {
                self.advance();
                Ok(())
            }
            _ => Err(self.error_expected("function call arguments")),
        }
    }

    pub(crate) fn expression_list(&mut self) -> Result<(), SyntaxError> {
        self.expression()?;
        while self.match_token(TokenKind::Comma) {
            self.expression()?;
        }
        Ok(())
    }

    /// Each field is `[expr] = expr`, `[expr] : type`, `NAME = expr`,
    /// `NAME : type`, or a bare array-style `expr`.
    pub(crate) fn table_constructor(&mut self) -> Result<(), SyntaxError> {
        self.expect(TokenKind::LBrace, "'{'")?;
        while !self.check(TokenKind::RBrace) {
            match self.peek().kind {
                TokenKind::LBracket => {
                    self.advance();
                    self.expression()?;
                    self.expect(TokenKind::RBracket, "']'")?;
                    if self.match_token(TokenKind::Eq) {
                        self.expression()?;
                    } else if self.match_token(TokenKind::Colon) {
                        self.skip_type_annotation()?;
                    } else {
                        return Err(self.error_expected("'=' or ':' after table key"));
                    }
                }
                TokenKind::Name if self.peek_at(1).kind == TokenKind::Eq => {
                    self.advance();
                    self.advance();
                    self.expression()?;
                }
                TokenKind::Name if self.peek_at(1).kind == TokenKind::Colon => {
                    self.advance();
                    self.advance();
                    self.skip_type_annotation()?;
                }
                _ => {
                    self.expression()?;
                }
            }
            if self.check(TokenKind::Comma) || self.check(TokenKind::Semicolon) {
                self.advance();
                if self.check(TokenKind::RBrace) {
                    break;
                }
                if self.starts_block_keyword() || self.check_keyword_name("type") {
                    break;
                }
            } else {
                break;
            }
        }
        self.expect(TokenKind::RBrace, "'}'")?;
        Ok(())
    }

    /// Whether the current token could only begin a new statement — used to
    /// tolerate a forgotten `}` when a separator is immediately followed by
    /// the start of a clearly unrelated statement.
    fn starts_block_keyword(&self) -> bool {
        matches!(
            self.peek().kind,
            TokenKind::Local
                | TokenKind::Function
                | TokenKind::If
                | TokenKind::For
                | TokenKind::While
                | TokenKind::Repeat
                | TokenKind::Return
                | TokenKind::Break
                | TokenKind::Continue
                | TokenKind::Goto
                | TokenKind::Export
        )
    }
}

#[cfg(test)]
mod tests {
    use luau_lex::Lexer;

    use crate::parser::Parser;

    fn parses(source: &str) -> bool {
        let tokens = Lexer::new(source).tokenize().unwrap();
        let mut p = Parser::new(tokens);
        p.expression().is_ok() && p.check(luau_lex::TokenKind::Eof)
    }

    #[test]
    fn parses_arithmetic_precedence() {
        assert!(parses("1 + 2 * 3 - 4 / 2"));
    }

    #[test]
    fn parses_right_assoc_power_and_concat() {
        assert!(parses("2 ^ 3 ^ 2"));
        assert!(parses("\"a\" .. \"b\" .. \"c\""));
    }

    #[test]
    fn parses_unary_chain() {
        assert!(parses("not not true"));
        assert!(parses("-#x"));
    }

    #[test]
    fn parses_table_constructor_field_forms() {
        assert!(parses("{1, 2, [3] = 4, name = 5}"));
    }

    #[test]
    fn parses_table_constructor_type_annotated_fields() {
        assert!(parses("{[\"a\"]: number, name: string}"));
    }

    #[test]
    fn parses_if_then_else_expression() {
        assert!(parses("if a then 1 else 2"));
        assert!(parses("if a then 1 elseif b then 2 else 3"));
    }

    #[test]
    fn parses_bitwise_and_shift_operators() {
        assert!(parses("1 | 2 & 3"));
        assert!(parses("1 << 2 >> 3"));
        assert!(parses("~x"));
    }

    #[test]
    fn parses_method_call_chain() {
        assert!(parses("a.b:c(1, 2).d[3]"));
    }

    #[test]
    fn parses_call_with_string_and_table_args() {
        assert!(parses("f \"literal\""));
        assert!(parses("f {1, 2}"));
    }

    #[test]
    fn parses_type_cast_suffix() {
        assert!(parses("(x :: number)"));
        assert!(parses("x :: number"));
    }

    #[test]
    fn rejects_bare_binary_operator() {
        assert!(!parses("+ 1"));
    }

    #[test]
    fn rejects_unclosed_table() {
        assert!(!parses("{1, 2"));
    }
}
