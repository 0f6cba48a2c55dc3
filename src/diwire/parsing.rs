//! Parsing entry points
//!
//! ```text
//! let container = diwire::diwire::parsing::parse(source)?;
//! ```
//!
//! [`parse_reader`] accepts any byte source. The whole document is read up front since
//! the grammar is small and configuration files are too; a failed read or invalid
//! UTF-8 is reported as a lexical error.

pub mod error;
pub mod parser;

pub use error::{line_col, ParseError, SyntaxError};
pub use parser::Parser;

use crate::diwire::ast::Container;
use crate::diwire::lexing::{LexError, Lexer};
use std::io::Read;

/// Parse a diwire document
pub fn parse(source: &str) -> Result<Container, ParseError> {
    Parser::new(Lexer::new(source)).parse()
}

/// Read a diwire document to the end and parse it
pub fn parse_reader<R: Read>(mut reader: R) -> Result<Container, ParseError> {
    let mut source = String::new();
    reader
        .read_to_string(&mut source)
        .map_err(|e| LexError::Read(e.to_string()))?;
    parse(&source)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_reader() {
        let source: &[u8] = b"import \"my/pkg\"\nroot pkg.Main\n";
        let container = parse_reader(source).unwrap();
        assert_eq!(container.imports[0].alias, "pkg");
    }

    #[test]
    fn test_parse_reader_invalid_utf8() {
        let source: &[u8] = &[b'i', 0xff, 0xfe];
        let err = parse_reader(source).unwrap_err();
        assert!(matches!(err, ParseError::Lexical(LexError::Read(_))));
    }
}
