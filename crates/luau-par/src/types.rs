//! Tolerant skipping of Luau's type-level syntax.
//!
//! This parser never builds a type grammar. Every place a type can appear —
//! parameter annotations, return annotations, variable annotations, type
//! alias bodies — is skipped as a balanced run of tokens instead of parsed
//! structurally. Bracket depth is tracked across `( ) [ ] { }`, plus `< >`
//! once already nested inside one of those; skipping stops the moment a
//! depth-0 token looks like the type has ended (an assignment, a block
//! keyword, a top-level comma, a bare `<`/`>`, a stray closing bracket, or
//! end of file — a bare, depth-zero `<` is never treated as opening a
//! generic). This mirrors the reference checker's `_skip_balanced`: it is
//! deliberately permissive about what counts as a valid type, because
//! validating type syntax in full is out of scope — only structural
//! well-formedness of the surrounding statement and expression grammar is
//! checked.

use luau_diag::{SyntaxError, SyntaxErrorKind};
use luau_lex::TokenKind;

use crate::parser::Parser;

fn is_open_bracket(kind: TokenKind) -> bool {
    matches!(kind, TokenKind::LParen | TokenKind::LBracket | TokenKind::LBrace | TokenKind::Lt)
}

fn is_close_bracket(kind: TokenKind) -> bool {
    matches!(kind, TokenKind::RParen | TokenKind::RBracket | TokenKind::RBrace | TokenKind::Gt)
}

fn matching_close(open: TokenKind) -> TokenKind {
    match open {
        TokenKind::LParen => TokenKind::RParen,
        TokenKind::LBracket => TokenKind::RBracket,
        TokenKind::LBrace => TokenKind::RBrace,
        TokenKind::Lt => TokenKind::Gt,
        _ => unreachable!("matching_close called on a non-opening token"),
    }
}

/// Tokens that end a type expression when seen at bracket depth zero.
///
/// `<` and `>` are included here even though `is_open_bracket`/
/// `is_close_bracket` also treat them as the open/close pair of a generic
/// instantiation (`Array<number>`): the depth-zero stop check in
/// `skip_balanced` runs before the bracket-pair handling, so a bare,
/// top-level `<` always ends the skip rather than opening a generic — a
/// generic only skips correctly once it appears nested inside an already
/// open `( [ {`. This mirrors the reference checker's `_skip_balanced`,
/// whose depth-0 check against `EXPR_BOUNDARY_TOKENS` (which includes `LT`
/// and `GT`) fires before its own LT-push/GT-pop handling is reached. `|`
/// and `&` are deliberately absent even though they double as the bitwise
/// operators in expression position: here they join union
/// (`number | string`) and intersection (`A & B`) type terms, so a stray
/// one must not end the skip.
fn is_stop_token(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Lt
            | TokenKind::Gt
            | TokenKind::Then
            | TokenKind::Do
            | TokenKind::End
            | TokenKind::Else
            | TokenKind::ElseIf
            | TokenKind::Until
            | TokenKind::Eq
            | TokenKind::Comma
            | TokenKind::Semicolon
            | TokenKind::Local
            | TokenKind::Function
            | TokenKind::Return
            | TokenKind::Break
            | TokenKind::Continue
            | TokenKind::Goto
            | TokenKind::ColonColon
            | TokenKind::If
            | TokenKind::While
            | TokenKind::Repeat
            | TokenKind::For
            | TokenKind::In
            | TokenKind::Export
            | TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::Star
            | TokenKind::Slash
            | TokenKind::SlashSlash
            | TokenKind::Percent
            | TokenKind::Caret
            | TokenKind::EqEq
            | TokenKind::TildeEq
            | TokenKind::LtEq
            | TokenKind::GtEq
            | TokenKind::LtLt
            | TokenKind::GtGt
            | TokenKind::DotDot
            | TokenKind::And
            | TokenKind::Or
            | TokenKind::Eof
    )
}

impl<'a> Parser<'a> {
    /// Skips a `: Type` annotation; assumes the colon has already been
    /// consumed by the caller.
    pub(crate) fn skip_type_annotation(&mut self) -> Result<(), SyntaxError> {
        self.skip_balanced()
    }

    /// Skips a bare type expression, e.g. the right-hand side of a type
    /// alias or a `::` cast target.
    pub(crate) fn skip_type_expression(&mut self) -> Result<(), SyntaxError> {
        self.skip_balanced()
    }

    pub(crate) fn skip_balanced(&mut self) -> Result<(), SyntaxError> {
        let mut depth_stack: Vec<TokenKind> = Vec::new();
        loop {
            let tok = self.peek();

            if depth_stack.is_empty() && is_stop_token(tok.kind) {
                return Ok(());
            }

            if is_close_bracket(tok.kind) {
                match depth_stack.last() {
                    Some(open) if matching_close(*open) == tok.kind => {
                        depth_stack.pop();
                        self.advance();
                        continue;
                    }
                    Some(_) => {
                        return Err(self.error_unexpected("closing bracket in type"));
                    }
                    None => return Ok(()),
                }
            }

            if is_open_bracket(tok.kind) {
                depth_stack.push(tok.kind);
                self.advance();
                continue;
            }

            if tok.kind == TokenKind::Eof {
                if depth_stack.is_empty() {
                    return Ok(());
                }
                return Err(SyntaxError::new(
                    SyntaxErrorKind::UnexpectedToken,
                    "Unexpected end of file while skipping a type",
                    tok.line,
                    tok.column,
                ));
            }

            self.advance();
        }
    }
}
