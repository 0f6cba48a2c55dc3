//! Cursor-style lexer driven by the parser
//!
//! The parser never sees a token stream. It asks the lexer to [`advance`](Lexer::advance)
//! and then inspects [`current`](Lexer::current) and [`value`](Lexer::value) until it
//! is ready to move on. There is no pushback.
//!
//! A lexical error latches: from the failing unit on, every `advance` yields
//! [`Token::EOF`], so a parser loop terminates promptly and the caller can collect the
//! error from [`last_error`](Lexer::last_error).

use super::error::LexError;
use super::tokens::{keyword_for, RawError, RawToken, Token};
use logos::Logos;

pub struct Lexer<'src> {
    raw: logos::Lexer<'src, RawToken<'src>>,
    current: Token,
    value: &'src str,
    offset: usize,
    error: Option<LexError>,
}

impl<'src> Lexer<'src> {
    /// Create a lexer positioned before the first token
    ///
    /// Call [`advance`](Lexer::advance) once to prime it.
    pub fn new(source: &'src str) -> Self {
        Lexer {
            raw: RawToken::lexer(source),
            current: Token::EOF,
            value: "",
            offset: 0,
            error: None,
        }
    }

    /// Consume the next lexical unit and make it current
    pub fn advance(&mut self) -> Token {
        self.value = "";
        if self.error.is_some() {
            return self.at_end();
        }

        let Some(result) = self.raw.next() else {
            return self.at_end();
        };
        self.offset = self.raw.span().start;
        let offset = self.offset;

        self.current = match result {
            Ok(RawToken::Word(word)) => {
                let token = keyword_for(word);
                if token == Token::Ident {
                    self.value = word;
                }
                token
            }
            Ok(RawToken::Str(literal)) => {
                self.value = literal;
                Token::String
            }
            Ok(RawToken::OpenParen) => Token::OpenParen,
            Ok(RawToken::CloseParen) => Token::CloseParen,
            Ok(RawToken::Comma) => Token::Comma,
            Ok(RawToken::Period) => Token::Period,
            Ok(RawToken::UnterminatedString) => {
                return self.fail(LexError::UnterminatedString { offset })
            }
            Ok(RawToken::UnterminatedComment) => {
                return self.fail(LexError::UnterminatedComment { offset })
            }
            Err(RawError::InvalidEscape) => return self.fail(LexError::InvalidEscape { offset }),
            Err(RawError::Unrecognized) => {
                let ch = self
                    .raw
                    .slice()
                    .chars()
                    .next()
                    .unwrap_or(char::REPLACEMENT_CHARACTER);
                return self.fail(LexError::InvalidCharacter { ch, offset });
            }
        };
        self.current
    }

    /// The token produced by the last [`advance`](Lexer::advance)
    pub fn current(&self) -> Token {
        self.current
    }

    /// Literal text of the current token
    ///
    /// Identifiers yield their name and strings their literal including the
    /// surrounding quotes. Every other token yields an empty string.
    pub fn value(&self) -> &'src str {
        self.value
    }

    /// Byte offset where the current token starts
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The source being scanned
    pub fn source(&self) -> &'src str {
        self.raw.source()
    }

    /// The lexical error that stopped the lexer, if any
    pub fn last_error(&self) -> Option<&LexError> {
        self.error.as_ref()
    }

    /// An owned copy of the recorded error
    ///
    /// The error stays recorded, so [`last_error`](Lexer::last_error) keeps reporting
    /// it and the lexer stays latched at end of input.
    pub fn take_error(&self) -> Option<LexError> {
        self.error.clone()
    }

    fn at_end(&mut self) -> Token {
        self.current = Token::EOF;
        self.offset = self.raw.source().len();
        self.current
    }

    fn fail(&mut self, error: LexError) -> Token {
        tracing::debug!(%error, offset = self.offset, "lexical error");
        self.error = Some(error);
        self.at_end()
    }
}

/// Drain a lexer into `(token, value)` pairs, stopping before end of input
pub fn tokenize(source: &str) -> Result<Vec<(Token, String)>, LexError> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();

    while lexer.advance() != Token::EOF {
        tokens.push((lexer.current(), lexer.value().to_string()));
    }

    match lexer.take_error() {
        Some(error) => Err(error),
        None => Ok(tokens),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priming() {
        let mut lexer = Lexer::new("import");
        assert_eq!(lexer.current(), Token::EOF);
        assert_eq!(lexer.advance(), Token::Import);
        assert_eq!(lexer.current(), Token::Import);
        assert_eq!(lexer.value(), "");
        assert_eq!(lexer.advance(), Token::EOF);
        assert_eq!(lexer.advance(), Token::EOF);
        assert!(lexer.last_error().is_none());
    }

    #[test]
    fn test_identifier_value() {
        let mut lexer = Lexer::new("pkg.NewThing");
        assert_eq!(lexer.advance(), Token::Ident);
        assert_eq!(lexer.value(), "pkg");
        assert_eq!(lexer.advance(), Token::Period);
        assert_eq!(lexer.value(), "");
        assert_eq!(lexer.advance(), Token::Ident);
        assert_eq!(lexer.value(), "NewThing");
    }

    #[test]
    fn test_string_value_keeps_quotes() {
        let mut lexer = Lexer::new(r#"p "my/pkg""#);
        assert_eq!(lexer.advance(), Token::Ident);
        assert_eq!(lexer.advance(), Token::String);
        assert_eq!(lexer.value(), r#""my/pkg""#);
    }

    #[test]
    fn test_offsets() {
        let mut lexer = Lexer::new("root  a.b");
        lexer.advance();
        assert_eq!(lexer.offset(), 0);
        lexer.advance();
        assert_eq!(lexer.offset(), 6);
        lexer.advance();
        assert_eq!(lexer.offset(), 7);
        lexer.advance();
        lexer.advance();
        assert_eq!(lexer.current(), Token::EOF);
        assert_eq!(lexer.offset(), 9);
    }

    #[test]
    fn test_error_latches() {
        let mut lexer = Lexer::new("reg @ a b c");
        assert_eq!(lexer.advance(), Token::Reg);
        assert_eq!(lexer.advance(), Token::EOF);
        assert_eq!(
            lexer.last_error(),
            Some(&LexError::InvalidCharacter { ch: '@', offset: 4 })
        );
        // Valid input follows, but the lexer never recovers
        assert_eq!(lexer.advance(), Token::EOF);
        assert_eq!(lexer.advance(), Token::EOF);
        assert_eq!(lexer.value(), "");
    }

    #[test]
    fn test_take_error_keeps_error_and_latch() {
        let mut lexer = Lexer::new("\"open a b");
        assert_eq!(lexer.advance(), Token::EOF);
        let expected = LexError::UnterminatedString { offset: 0 };
        assert_eq!(lexer.take_error(), Some(expected.clone()));
        assert_eq!(lexer.advance(), Token::EOF);
        assert_eq!(lexer.last_error(), Some(&expected));
        assert_eq!(lexer.take_error(), Some(expected));
    }

    #[test]
    fn test_form_feed_is_not_whitespace() {
        assert_eq!(
            tokenize("root\x0cp"),
            Err(LexError::InvalidCharacter { ch: '\x0c', offset: 4 })
        );
    }

    #[test]
    fn test_tokenize() {
        let tokens = tokenize("list L1, L2 R").unwrap();
        assert_eq!(
            tokens,
            vec![
                (Token::List, String::new()),
                (Token::Ident, "L1".to_string()),
                (Token::Comma, String::new()),
                (Token::Ident, "L2".to_string()),
                (Token::Ident, "R".to_string()),
            ]
        );
    }

    #[test]
    fn test_tokenize_reports_error() {
        assert_eq!(
            tokenize("a\n  #"),
            Err(LexError::InvalidCharacter { ch: '#', offset: 4 })
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(tokenize("   \n\t// nothing here\n"), Ok(vec![]));
    }
}
