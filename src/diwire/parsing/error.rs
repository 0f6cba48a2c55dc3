//! Parse errors
//!
//! A parse stops at the first problem. [`ParseError`] says whether the input could not
//! be tokenized ([`LexError`]) or the tokens did not fit the grammar ([`SyntaxError`]).
//! Syntax errors render as `Got token 'X' but expected one of 'A', 'B'`, which tools
//! downstream match on.

use crate::diwire::lexing::{LexError, Token};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error(transparent)]
    Lexical(#[from] LexError),

    #[error(transparent)]
    Syntax(#[from] SyntaxError),
}

impl ParseError {
    /// Byte offset of the failure, if it points into the source
    pub fn offset(&self) -> Option<usize> {
        match self {
            ParseError::Lexical(err) => err.offset(),
            ParseError::Syntax(err) => Some(err.offset),
        }
    }

    /// 1-based line and column of the failure within `source`
    pub fn line_col(&self, source: &str) -> Option<(usize, usize)> {
        self.offset().map(|offset| line_col(source, offset))
    }
}

/// A token that the grammar does not allow at this point
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Got token '{found}' but expected one of '{}'", join_names(.expected))]
pub struct SyntaxError {
    pub found: Token,
    pub expected: Vec<Token>,
    pub offset: usize,
}

impl SyntaxError {
    pub fn new(found: Token, expected: &[Token], offset: usize) -> Self {
        SyntaxError {
            found,
            expected: expected.to_vec(),
            offset,
        }
    }

    pub fn expects(&self, token: Token) -> bool {
        self.expected.contains(&token)
    }
}

fn join_names(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(Token::display_name)
        .collect::<Vec<_>>()
        .join("', '")
}

/// Convert a byte offset into a 1-based line and column (columns count chars)
pub fn line_col(source: &str, offset: usize) -> (usize, usize) {
    let offset = offset.min(source.len());
    let before = source.get(..offset).unwrap_or(source);
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let column = before[line_start..].chars().count() + 1;
    (line, column)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_expected_message() {
        let err = SyntaxError::new(Token::EOF, &[Token::Period], 7);
        assert_eq!(
            err.to_string(),
            "Got token 'EOF' but expected one of 'Period'"
        );
    }

    #[test]
    fn test_many_expected_message() {
        let err = SyntaxError::new(
            Token::Ident,
            &[Token::Reg, Token::Lazy, Token::List, Token::EOF],
            0,
        );
        assert_eq!(
            err.to_string(),
            "Got token 'Ident' but expected one of 'Reg', 'Lazy', 'List', 'EOF'"
        );
        assert!(err.expects(Token::EOF));
        assert!(!err.expects(Token::Root));
    }

    #[test]
    fn test_parse_error_is_transparent() {
        let err: ParseError = SyntaxError::new(Token::Comma, &[Token::Ident], 3).into();
        assert_eq!(
            err.to_string(),
            "Got token 'Comma' but expected one of 'Ident'"
        );
        let err: ParseError = LexError::InvalidCharacter { ch: '$', offset: 1 }.into();
        assert_eq!(err.to_string(), "Invalid token '$'");
    }

    #[test]
    fn test_line_col() {
        let source = "import \"a\"\nroot x\n  reg";
        assert_eq!(line_col(source, 0), (1, 1));
        assert_eq!(line_col(source, 7), (1, 8));
        assert_eq!(line_col(source, 11), (2, 1));
        assert_eq!(line_col(source, 20), (3, 3));
        assert_eq!(line_col(source, 999), (3, 6));
    }

    #[test]
    fn test_read_error_has_no_position() {
        let err: ParseError = LexError::Read("boom".to_string()).into();
        assert_eq!(err.line_col("anything"), None);
    }
}
