//! Shared position, error, and diagnostic types for the Luau syntax tools.
//!
//! This crate has no dependency on the lexer or parser: it only fixes the
//! vocabulary (`Position`, `SyntaxError`, `Diagnostic`) that every other
//! crate in the workspace reports through.

mod diagnostic;
mod error;
mod position;

pub use diagnostic::{build_snippet, Diagnostic};
pub use error::{SyntaxError, SyntaxErrorKind};
pub use position::Position;
