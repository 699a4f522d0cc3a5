//! Lexical analysis for Luau source text.
//!
//! [`Lexer`] turns a source buffer into a flat [`Token`] stream. It has no
//! notion of grammar: long brackets, string escapes, and number shapes are
//! all it understands. Everything downstream (keyword vs. identifier aside)
//! is the parser's job.

mod cursor;
mod lexer;
mod token;

pub use cursor::Cursor;
pub use lexer::Lexer;
pub use token::{Token, TokenKind};
