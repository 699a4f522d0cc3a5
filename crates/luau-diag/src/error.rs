use std::fmt;

/// Distinguishes lex-phase from parse-phase failures.
///
/// This is an internal aid for logging and tests; the external
/// [`Diagnostic`](crate::Diagnostic) record never exposes it — it only ever
/// carries the rendered `message`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SyntaxErrorKind {
    /// Character outside the recognized set.
    UnexpectedChar,
    /// A `"` or `'` string ran to EOF without a closing quote.
    UnterminatedString,
    /// A backslash at the very end of a string.
    UnterminatedEscape,
    /// A long bracket (`[=*[ ... ]=*]`) string or comment never closed.
    UnterminatedLongBracket,
    /// The parser saw a token it had no production for.
    UnexpectedToken,
    /// A specific keyword or punctuation was required and missing.
    ExpectedToken,
    /// An expression-statement's outermost suffix was not a call.
    ExpectedFunctionCall,
}

impl SyntaxErrorKind {
    /// Short machine-readable tag, used in test assertions and logs.
    pub const fn tag(self) -> &'static str {
        match self {
            SyntaxErrorKind::UnexpectedChar => "unexpected-char",
            SyntaxErrorKind::UnterminatedString => "unterminated-string",
            SyntaxErrorKind::UnterminatedEscape => "unterminated-escape",
            SyntaxErrorKind::UnterminatedLongBracket => "unterminated-long-bracket",
            SyntaxErrorKind::UnexpectedToken => "unexpected-token",
            SyntaxErrorKind::ExpectedToken => "expected-token",
            SyntaxErrorKind::ExpectedFunctionCall => "expected-function-call",
        }
    }
}

impl fmt::Display for SyntaxErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A single structured syntax error with source position.
///
/// Both the lexer and the parser fail fast with exactly one of these; there
/// is no error recovery, so a script produces at most one `SyntaxError` per
/// validation pass.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message} at line {line}, column {column}")]
pub struct SyntaxError {
    pub kind: SyntaxErrorKind,
    pub message: String,
    pub line: u32,
    pub column: u32,
}

impl SyntaxError {
    pub fn new(kind: SyntaxErrorKind, message: impl Into<String>, line: u32, column: u32) -> Self {
        SyntaxError {
            kind,
            message: message.into(),
            line,
            column,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_position() {
        let err = SyntaxError::new(SyntaxErrorKind::UnexpectedChar, "unexpected character '@'", 3, 5);
        assert_eq!(err.to_string(), "unexpected character '@' at line 3, column 5");
    }

    #[test]
    fn kind_tag_is_stable() {
        assert_eq!(SyntaxErrorKind::ExpectedFunctionCall.tag(), "expected-function-call");
    }
}
