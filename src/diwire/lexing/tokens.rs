//! Token definitions for the diwire format
//!
//! Two layers live here. [`RawToken`] is the logos-generated scanner output: words,
//! string literals, punctuation and a couple of error shapes. [`Token`] is the closed
//! set the parser reasons about. Words are turned into keywords or identifiers by
//! [`keyword_for`], the one place that knows the reserved words.

use logos::Logos;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lexical categories seen by the parser
///
/// Tokens carry no payload. The literal text of identifiers and strings is exposed
/// separately through [`Lexer::value`](super::Lexer::value).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Token {
    // Identifiers
    Ident,

    // Literals
    String,

    // Keywords
    Import,
    Reg,
    Lazy,
    List,
    Root,

    // Punctuation
    OpenParen,
    CloseParen,
    Comma,
    Period,

    // Sentinel
    #[allow(clippy::upper_case_acronyms)]
    EOF,
}

impl Token {
    /// Name used in diagnostics, e.g. `OpenParen`
    pub fn display_name(&self) -> &'static str {
        match self {
            Token::Ident => "Ident",
            Token::String => "String",
            Token::Import => "Import",
            Token::Reg => "Reg",
            Token::Lazy => "Lazy",
            Token::List => "List",
            Token::Root => "Root",
            Token::OpenParen => "OpenParen",
            Token::CloseParen => "CloseParen",
            Token::Comma => "Comma",
            Token::Period => "Period",
            Token::EOF => "EOF",
        }
    }

    /// Check if the lexer exposes literal text for this token
    pub fn has_value(&self) -> bool {
        matches!(self, Token::Ident | Token::String)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Reserved words, in the order the grammar introduces them
pub const KEYWORDS: [(&str, Token); 5] = [
    ("import", Token::Import),
    ("reg", Token::Reg),
    ("lazy", Token::Lazy),
    ("list", Token::List),
    ("root", Token::Root),
];

/// Classify a bare word as a keyword or a plain identifier
pub fn keyword_for(word: &str) -> Token {
    KEYWORDS
        .iter()
        .find(|(keyword, _)| *keyword == word)
        .map(|(_, token)| *token)
        .unwrap_or(Token::Ident)
}

/// Error shapes reported by the raw scanner
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RawError {
    /// No pattern matched the input at this position
    #[default]
    Unrecognized,
    /// A string literal contained an escape outside the accepted set
    InvalidEscape,
}

/// Raw scanner output, produced by logos
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(error = RawError)]
#[logos(skip r"[ \t\r\n]+")]
#[logos(skip r"//[^\n]*")]
#[logos(skip r"/\*([^*]|\*+[^*/])*\*+/")]
pub enum RawToken<'src> {
    #[regex(r"[\p{L}_][\p{L}\p{Nd}_]*", |lex| lex.slice())]
    Word(&'src str),

    #[regex(r#""([^"\\\n]|\\.)*""#, string_literal)]
    Str(&'src str),

    // A quote that never closes on its line
    #[regex(r#""([^"\\\n]|\\.)*"#)]
    UnterminatedString,

    // A block comment running into end of input
    #[regex(r"/\*([^*]|\*+[^*/])*\**")]
    UnterminatedComment,

    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,
    #[token(",")]
    Comma,
    #[token(".")]
    Period,
}

fn string_literal<'src>(
    lex: &mut logos::Lexer<'src, RawToken<'src>>,
) -> Result<&'src str, RawError> {
    let slice = lex.slice();
    validate_escapes(&slice[1..slice.len() - 1])?;
    Ok(slice)
}

/// Check the escapes of a string literal body (quotes excluded)
fn validate_escapes(body: &str) -> Result<(), RawError> {
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            continue;
        }
        let ok = match chars.next() {
            Some('a' | 'b' | 'f' | 'n' | 'r' | 't' | 'v' | '\\' | '"') => true,
            Some('0'..='7') => take_digits(&mut chars, 2, 8),
            Some('x') => take_digits(&mut chars, 2, 16),
            Some('u') => take_digits(&mut chars, 4, 16),
            Some('U') => take_digits(&mut chars, 8, 16),
            _ => false,
        };
        if !ok {
            return Err(RawError::InvalidEscape);
        }
    }
    Ok(())
}

fn take_digits(chars: &mut std::str::Chars<'_>, count: usize, radix: u32) -> bool {
    (0..count).all(|_| chars.next().is_some_and(|c| c.is_digit(radix)))
}
