//! Lexer module for the diwire format
//!
//! Scanning is done by logos (see [`tokens::RawToken`]); the [`Lexer`] wraps it in the
//! one-token cursor the parser drives. Whitespace and comments never reach the parser.

pub mod error;
pub mod lexer;
pub mod tokens;

pub use error::LexError;
pub use lexer::{tokenize, Lexer};
pub use tokens::{keyword_for, Token, KEYWORDS};
