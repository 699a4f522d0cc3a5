/// A cursor position in a source buffer.
///
/// Mirrors the value the lexer's cursor threads through the source: a byte
/// offset plus the 1-based line/column pair derived from it. Positions are
/// never recomputed from an offset after the fact — the cursor carries them
/// forward as it advances so line/column stay correct across multi-byte
/// UTF-8 characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Byte offset into the source buffer.
    pub offset: usize,
    /// 1-based line number.
    pub line: u32,
    /// 1-based column number (counted in characters, not bytes).
    pub column: u32,
}

impl Position {
    /// The position at the start of a buffer.
    pub const START: Position = Position {
        offset: 0,
        line: 1,
        column: 1,
    };

    /// Creates a new position, asserting the `line ≥ 1, column ≥ 1` invariant.
    pub fn new(offset: usize, line: u32, column: u32) -> Self {
        debug_assert!(line >= 1, "line must be 1-based");
        debug_assert!(column >= 1, "column must be 1-based");
        Position {
            offset,
            line,
            column,
        }
    }

    /// Returns the position advanced by one character.
    ///
    /// `ch_len` is the UTF-8 length of the character consumed. Newlines
    /// advance the line counter and reset the column to 1; anything else
    /// advances the column by one.
    #[must_use]
    pub fn advance(self, ch: char, ch_len: usize) -> Position {
        if ch == '\n' {
            Position {
                offset: self.offset + ch_len,
                line: self.line + 1,
                column: 1,
            }
        } else {
            Position {
                offset: self.offset + ch_len,
                line: self.line,
                column: self.column + 1,
            }
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::START
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_is_one_based() {
        assert_eq!(Position::START.line, 1);
        assert_eq!(Position::START.column, 1);
        assert_eq!(Position::START.offset, 0);
    }

    #[test]
    fn advance_on_newline_resets_column() {
        let pos = Position::START.advance('\n', 1);
        assert_eq!(pos.line, 2);
        assert_eq!(pos.column, 1);
        assert_eq!(pos.offset, 1);
    }

    #[test]
    fn advance_on_regular_char_bumps_column() {
        let pos = Position::START.advance('x', 1);
        assert_eq!(pos.line, 1);
        assert_eq!(pos.column, 2);
    }

    #[test]
    fn advance_respects_multibyte_length() {
        let pos = Position::START.advance('é', 2);
        assert_eq!(pos.offset, 2);
        assert_eq!(pos.column, 2);
    }
}
