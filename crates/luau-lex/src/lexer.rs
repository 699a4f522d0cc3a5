use luau_diag::{Position, SyntaxError, SyntaxErrorKind};

use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};

/// Tokenizes Luau source text.
///
/// Produces a finite token stream ending in `Eof`, or fails with the first
/// lexical error encountered (unterminated string/escape/long-bracket, or an
/// unrecognized character) — there is no recovery, matching the reference
/// checker's fail-fast contract.
pub struct Lexer<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Lexer {
            cursor: Cursor::new(source),
        }
    }

    /// Lexes the entire source, returning every token including the
    /// trailing `Eof`.
    pub fn tokenize(mut self) -> Result<Vec<Token<'a>>, SyntaxError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let is_eof = token.kind == TokenKind::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        Ok(tokens)
    }

    fn next_token(&mut self) -> Result<Token<'a>, SyntaxError> {
        loop {
            if self.cursor.is_at_end() {
                let pos = self.cursor.position();
                return Ok(Token::new(TokenKind::Eof, "", pos.line, pos.column));
            }
            let ch = self.cursor.peek().unwrap();
            if ch == ' ' || ch == '\t' || ch == '\r' {
                self.cursor.advance();
                continue;
            }
            if ch == '\n' {
                self.cursor.advance();
                continue;
            }
            if ch == '-' && self.cursor.peek_at(1) == Some('-') {
                self.cursor.advance();
                self.cursor.advance();
                if self.cursor.peek() == Some('[') {
                    if let Some(level) = self.long_bracket_level() {
                        self.skip_long_comment(level)?;
                        continue;
                    }
                    self.skip_until_newline();
                    continue;
                }
                self.skip_until_newline();
                continue;
            }
            if ch == '[' {
                if let Some(level) = self.long_bracket_level() {
                    return self.read_long_string(level);
                }
            }
            break;
        }

        let start = self.cursor.position();
        let ch = self.cursor.peek().unwrap();

        if ch.is_ascii_alphabetic() || ch == '_' {
            return Ok(self.read_identifier(start));
        }
        if ch.is_ascii_digit() || (ch == '.' && matches!(self.cursor.peek_at(1), Some(c) if c.is_ascii_digit())) {
            return Ok(self.read_number(start));
        }
        if ch == '"' || ch == '\'' {
            return self.read_string(start, ch);
        }

        self.cursor.advance();
        let kind = match ch {
            '.' => {
                if self.cursor.eat('.') {
                    if self.cursor.eat('.') {
                        TokenKind::DotDotDot
                    } else {
                        TokenKind::DotDot
                    }
                } else {
                    TokenKind::Dot
                }
            }
            ':' => {
                if self.cursor.eat(':') {
                    TokenKind::ColonColon
                } else {
                    TokenKind::Colon
                }
            }
            ',' => TokenKind::Comma,
            ';' => TokenKind::Semicolon,
            '+' => TokenKind::Plus,
            '-' => {
                if self.cursor.eat('>') {
                    TokenKind::Arrow
                } else {
                    TokenKind::Minus
                }
            }
            '*' => TokenKind::Star,
            '/' => {
                if self.cursor.eat('/') {
                    TokenKind::SlashSlash
                } else {
                    TokenKind::Slash
                }
            }
            '%' => TokenKind::Percent,
            '^' => TokenKind::Caret,
            '#' => TokenKind::Hash,
            '~' => {
                if self.cursor.eat('=') {
                    TokenKind::TildeEq
                } else {
                    TokenKind::Tilde
                }
            }
            '=' => {
                if self.cursor.eat('=') {
                    TokenKind::EqEq
                } else {
                    TokenKind::Eq
                }
            }
            '<' => {
                if self.cursor.eat('=') {
                    TokenKind::LtEq
                } else if self.cursor.eat('<') {
                    TokenKind::LtLt
                } else {
                    TokenKind::Lt
                }
            }
            '>' => {
                if self.cursor.eat('=') {
                    TokenKind::GtEq
                } else if self.cursor.eat('>') {
                    TokenKind::GtGt
                } else {
                    TokenKind::Gt
                }
            }
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '[' => TokenKind::LBracket,
            ']' => TokenKind::RBracket,
            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,
            '|' => TokenKind::Pipe,
            '&' => TokenKind::Amp,
            '?' => TokenKind::Question,
            other => {
                return Err(SyntaxError::new(
                    SyntaxErrorKind::UnexpectedChar,
                    format!("Unexpected character: {other}"),
                    start.line,
                    start.column,
                ))
            }
        };
        let lexeme = self.cursor.slice(start.offset, self.cursor.position().offset);
        Ok(Token::new(kind, lexeme, start.line, start.column))
    }

    fn skip_until_newline(&mut self) {
        while !self.cursor.is_at_end() && self.cursor.peek() != Some('\n') {
            self.cursor.advance();
        }
    }

    /// If the cursor sits on a long-bracket opener `[=*[`, returns its
    /// level (the number of `=` signs) without consuming anything.
    fn long_bracket_level(&self) -> Option<usize> {
        if self.cursor.peek() != Some('[') {
            return None;
        }
        let mut level = 0;
        let mut offset = 1;
        while self.cursor.peek_at(offset) == Some('=') {
            level += 1;
            offset += 1;
        }
        if self.cursor.peek_at(offset) == Some('[') {
            Some(level)
        } else {
            None
        }
    }

    /// True when the cursor sits on the matching `]=*]` closer for `level`.
    fn at_long_bracket_closer(&self, level: usize) -> bool {
        for offset in 1..=level {
            if self.cursor.peek_at(offset) != Some('=') {
                return false;
            }
        }
        self.cursor.peek_at(1 + level) == Some(']')
    }

    fn advance_n(&mut self, n: usize) {
        for _ in 0..n {
            self.cursor.advance();
        }
    }

    fn read_long_string(&mut self, level: usize) -> Result<Token<'a>, SyntaxError> {
        let start = self.cursor.position();
        self.advance_n(1 + level);
        self.cursor.advance();
        let content_start = self.cursor.position().offset;
        loop {
            if self.cursor.is_at_end() {
                return Err(SyntaxError::new(
                    SyntaxErrorKind::UnterminatedLongBracket,
                    "Unterminated long string",
                    start.line,
                    start.column,
                ));
            }
            if self.cursor.peek() == Some(']') && self.at_long_bracket_closer(level) {
                let content_end = self.cursor.position().offset;
                self.advance_n(1 + level);
                self.cursor.advance();
                let lexeme = self.cursor.slice(content_start, content_end);
                return Ok(Token::new(TokenKind::String, lexeme, start.line, start.column));
            }
            self.cursor.advance();
        }
    }

    fn skip_long_comment(&mut self, level: usize) -> Result<(), SyntaxError> {
        let start = self.cursor.position();
        self.advance_n(1 + level);
        self.cursor.advance();
        loop {
            if self.cursor.is_at_end() {
                return Err(SyntaxError::new(
                    SyntaxErrorKind::UnterminatedLongBracket,
                    "Unterminated long comment",
                    start.line,
                    start.column,
                ));
            }
            if self.cursor.peek() == Some(']') && self.at_long_bracket_closer(level) {
                self.advance_n(1 + level);
                self.cursor.advance();
                return Ok(());
            }
            self.cursor.advance();
        }
    }

    fn read_identifier(&mut self, start: Position) -> Token<'a> {
        while matches!(self.cursor.peek(), Some(c) if c.is_ascii_alphanumeric() || c == '_') {
            self.cursor.advance();
        }
        let lexeme = self.cursor.slice(start.offset, self.cursor.position().offset);
        let kind = TokenKind::keyword_from_ident(lexeme).unwrap_or(TokenKind::Name);
        Token::new(kind, lexeme, start.line, start.column)
    }

    fn read_number(&mut self, start: Position) -> Token<'a> {
        if self.cursor.peek() == Some('0') && matches!(self.cursor.peek_at(1), Some('x') | Some('X')) {
            self.advance_n(2);
            while matches!(self.cursor.peek(), Some(c) if c.is_ascii_alphanumeric() || c == '_') {
                self.cursor.advance();
            }
        } else {
            while matches!(self.cursor.peek(), Some(c) if c.is_ascii_digit() || c == '_' || c == '.') {
                self.cursor.advance();
            }
        }
        if matches!(self.cursor.peek(), Some('e') | Some('E') | Some('p') | Some('P')) {
            self.cursor.advance();
            if matches!(self.cursor.peek(), Some('+') | Some('-')) {
                self.cursor.advance();
            }
            while matches!(self.cursor.peek(), Some(c) if c.is_ascii_digit() || c == '_') {
                self.cursor.advance();
            }
        }
        let lexeme = self.cursor.slice(start.offset, self.cursor.position().offset);
        Token::new(TokenKind::Number, lexeme, start.line, start.column)
    }

    fn read_string(&mut self, start: Position, quote: char) -> Result<Token<'a>, SyntaxError> {
        self.cursor.advance(); // opening quote
        let content_start = self.cursor.position().offset;
        loop {
            if self.cursor.is_at_end() {
                return Err(SyntaxError::new(
                    SyntaxErrorKind::UnterminatedString,
                    "Unterminated string",
                    start.line,
                    start.column,
                ));
            }
            let ch = self.cursor.peek().unwrap();
            if ch == '\\' {
                self.cursor.advance();
                if self.cursor.is_at_end() {
                    let pos = self.cursor.position();
                    return Err(SyntaxError::new(
                        SyntaxErrorKind::UnterminatedEscape,
                        "Unterminated escape sequence",
                        pos.line,
                        pos.column,
                    ));
                }
                self.cursor.advance();
                continue;
            }
            if ch == quote {
                let content_end = self.cursor.position().offset;
                self.cursor.advance();
                let lexeme = self.cursor.slice(content_start, content_end);
                return Ok(Token::new(TokenKind::String, lexeme, start.line, start.column));
            }
            self.cursor.advance();
        }
    }
}
