use luau_diag::{SyntaxError, SyntaxErrorKind};
use luau_lex::{Lexer, Token, TokenKind};

/// Lexes and validates a complete Luau chunk, returning the first syntax
/// error encountered, if any.
pub fn parse(source: &str) -> Result<(), SyntaxError> {
    let tokens = Lexer::new(source).tokenize()?;
    Parser::new(tokens).parse_chunk()
}

/// Single-token-lookahead recursive-descent validator.
///
/// Holds the full token stream rather than pulling from the lexer lazily:
/// the grammar never needs more than one token of lookahead once a
/// statement has started, but disambiguating `for x = ...` from
/// `for x, y in ...`, and a bare call from an assignment, is easiest done by
/// indexing forward a couple of tokens rather than threading extra state
/// through the lexer.
pub struct Parser<'a> {
    tokens: Vec<Token<'a>>,
    pos: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: Vec<Token<'a>>) -> Self {
        assert!(!tokens.is_empty(), "token stream must end with Eof");
        Parser { tokens, pos: 0 }
    }

    pub fn parse_chunk(&mut self) -> Result<(), SyntaxError> {
        self.block(&[TokenKind::Eof])?;
        self.expect(TokenKind::Eof, "end of file")?;
        Ok(())
    }

    pub(crate) fn peek(&self) -> Token<'a> {
        self.tokens[self.pos]
    }

    pub(crate) fn peek_at(&self, offset: usize) -> Token<'a> {
        let idx = (self.pos + offset).min(self.tokens.len() - 1);
        self.tokens[idx]
    }

    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    pub(crate) fn check_keyword_name(&self, text: &str) -> bool {
        let tok = self.peek();
        tok.kind == TokenKind::Name && tok.lexeme == text
    }

    pub(crate) fn at_end(&self) -> bool {
        self.check(TokenKind::Eof)
    }

    pub(crate) fn advance(&mut self) -> Token<'a> {
        let tok = self.peek();
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        tok
    }

    pub(crate) fn match_token(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn expect(&mut self, kind: TokenKind, what: &str) -> Result<Token<'a>, SyntaxError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.error_expected(what))
        }
    }

    pub(crate) fn expect_name(&mut self, what: &str) -> Result<Token<'a>, SyntaxError> {
        self.expect(TokenKind::Name, what)
    }

    pub(crate) fn error_expected(&self, what: &str) -> SyntaxError {
        let tok = self.peek();
        SyntaxError::new(
            SyntaxErrorKind::ExpectedToken,
            format!("Expected {what}, found '{}'", describe(tok)),
            tok.line,
            tok.column,
        )
    }

    pub(crate) fn error_unexpected(&self, what: &str) -> SyntaxError {
        let tok = self.peek();
        SyntaxError::new(
            SyntaxErrorKind::UnexpectedToken,
            format!("Unexpected {what} near '{}'", describe(tok)),
            tok.line,
            tok.column,
        )
    }

    /// The expression-statement fallback: a prefix-expression sequence that
    /// is neither an assignment nor a single call-ending expression.
    pub(crate) fn error_expected_function_call(&self) -> SyntaxError {
        let tok = self.peek();
        SyntaxError::new(
            SyntaxErrorKind::ExpectedFunctionCall,
            "Expected function call in statement",
            tok.line,
            tok.column,
        )
    }
}

fn describe(tok: Token<'_>) -> String {
    if tok.kind == TokenKind::Eof {
        "<eof>".to_string()
    } else {
        tok.lexeme.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_empty_chunk() {
        assert!(parse("").is_ok());
    }

    #[test]
    fn accepts_whitespace_only_chunk() {
        assert!(parse("   \n\t\n").is_ok());
    }

    #[test]
    fn rejects_stray_closing_paren() {
        assert!(parse(")").is_err());
    }
}
