//! Recursive-descent parser for diwire documents
//!
//! Grammar:
//!
//! ```text
//! file            ::= import+ root regOrLazyOrList*
//! import          ::= "import" importValue
//! importValue     ::= "(" importEntry+ ")" | importEntry
//! importEntry     ::= String | Ident String
//! regOrLazyOrList ::= reg | lazy | list
//! reg             ::= "reg" regBody
//! lazy            ::= "lazy" regBody
//! regBody         ::= resolver | tagList resolver
//! list            ::= "list" tagList tagList
//! tagList         ::= Ident ("," Ident)*
//! root            ::= "root" resolver
//! resolver        ::= Ident "." Ident Ident*
//! ```
//!
//! Every production looks at the current token only. The one real decision is in
//! `regBody`: after the first identifier, a `.` makes it the resolver's package, while a
//! `,` or another identifier makes it the first tag of a tag list that is followed by a
//! full resolver.
//!
//! Sub-parsers that are only entered after their caller has dispatched on the current
//! token re-check it with `assert_current`. A mismatch there is a bug in this file, not
//! bad input, and panics instead of producing a [`ParseError`].

use super::error::{ParseError, SyntaxError};
use crate::diwire::ast::{inferred_alias, Container, Import, List, Reg, Resolver};
use crate::diwire::lexing::{Lexer, Token};

type ParseResult<T> = Result<T, SyntaxError>;

pub struct Parser<'src> {
    lexer: Lexer<'src>,
}

impl<'src> Parser<'src> {
    pub fn new(lexer: Lexer<'src>) -> Self {
        Parser { lexer }
    }

    /// Parse a whole document
    ///
    /// A lexical error always wins over the syntax error it provokes, since the latched
    /// lexer turns everything after it into end of input.
    pub fn parse(mut self) -> Result<Container, ParseError> {
        tracing::debug!(bytes = self.lexer.source().len(), "parsing container");

        self.lexer.advance();
        let result = self.parse_file();

        if let Some(error) = self.lexer.take_error() {
            return Err(error.into());
        }
        let container = result?;

        tracing::debug!(
            imports = container.imports.len(),
            regs = container.regs.len(),
            lists = container.lists.len(),
            "parsed container"
        );
        Ok(container)
    }

    fn parse_file(&mut self) -> ParseResult<Container> {
        let imports = self.parse_imports()?;
        let root = self.parse_root()?;
        let (regs, lists) = self.parse_declarations()?;

        // Nothing may follow the declarations
        self.expect(&[Token::Reg, Token::Lazy, Token::List, Token::EOF])?;

        Ok(Container {
            imports,
            root,
            regs,
            lists,
        })
    }

    fn parse_imports(&mut self) -> ParseResult<Vec<Import>> {
        self.expect(&[Token::Import])?;

        let mut imports = Vec::new();
        while self.lexer.current() == Token::Import {
            imports.extend(self.parse_import()?);
        }
        Ok(imports)
    }

    fn parse_import(&mut self) -> ParseResult<Vec<Import>> {
        self.assert_current(&[Token::Import]);
        self.lexer.advance();

        if self.lexer.current() != Token::OpenParen {
            return Ok(vec![self.parse_import_entry()?]);
        }
        self.lexer.advance();

        let mut imports = vec![self.parse_import_entry()?];
        while self.lexer.current() != Token::CloseParen {
            imports.push(self.parse_import_entry()?);
        }
        self.lexer.advance();

        Ok(imports)
    }

    fn parse_import_entry(&mut self) -> ParseResult<Import> {
        match self.lexer.current() {
            Token::Ident => {
                let alias = self.lexer.value().to_string();
                self.lexer.advance();

                self.expect(&[Token::String])?;
                let package = strip_quotes(self.lexer.value()).to_string();
                self.lexer.advance();

                Ok(Import { alias, package })
            }
            Token::String => {
                let package = strip_quotes(self.lexer.value());
                let import = Import::new(inferred_alias(package), package);
                self.lexer.advance();

                Ok(import)
            }
            _ => Err(self.unexpected(&[Token::Ident, Token::String])),
        }
    }

    fn parse_root(&mut self) -> ParseResult<Resolver> {
        self.expect(&[Token::Root])?;
        self.lexer.advance();

        self.parse_resolver()
    }

    fn parse_declarations(&mut self) -> ParseResult<(Vec<Reg>, Vec<List>)> {
        let mut regs = Vec::new();
        let mut lists = Vec::new();

        loop {
            match self.lexer.current() {
                Token::Reg | Token::Lazy => {
                    let reg = self.parse_reg()?;
                    tracing::trace!(keyword = reg.keyword(), tags = ?reg.tags, resolver = %reg.resolver, "parsed registration");
                    regs.push(reg);
                }
                Token::List => {
                    let list = self.parse_list()?;
                    tracing::trace!(tags = ?list.tags, resolve_to = ?list.resolve_to, "parsed list");
                    lists.push(list);
                }
                _ => return Ok((regs, lists)),
            }
        }
    }

    fn parse_reg(&mut self) -> ParseResult<Reg> {
        self.assert_current(&[Token::Reg, Token::Lazy]);
        let lazy = self.lexer.current() == Token::Lazy;
        self.lexer.advance();

        let package_or_first_tag = self.parse_ident()?;

        let (tags, resolver) = match self.lexer.current() {
            Token::Period => (
                Vec::new(),
                self.parse_remaining_resolver(package_or_first_tag)?,
            ),
            Token::Comma | Token::Ident => {
                let tags = self.parse_more_tags(package_or_first_tag)?;
                (tags, self.parse_resolver()?)
            }
            _ => return Err(self.unexpected(&[Token::Period, Token::Comma, Token::Ident])),
        };

        Ok(Reg {
            tags,
            resolver,
            lazy,
        })
    }

    fn parse_resolver(&mut self) -> ParseResult<Resolver> {
        let package = self.parse_ident()?;
        self.expect(&[Token::Period])?;

        self.parse_remaining_resolver(package)
    }

    fn parse_remaining_resolver(&mut self, package: String) -> ParseResult<Resolver> {
        self.assert_current(&[Token::Period]);
        self.lexer.advance();

        let func = self.parse_ident()?;
        let deps = self.parse_deps();

        Ok(Resolver {
            package,
            func,
            deps,
        })
    }

    /// A maximal, possibly empty, run of identifiers
    fn parse_deps(&mut self) -> Vec<String> {
        let mut deps = Vec::new();
        while self.lexer.current() == Token::Ident {
            deps.push(self.lexer.value().to_string());
            self.lexer.advance();
        }
        deps
    }

    fn parse_list(&mut self) -> ParseResult<List> {
        self.assert_current(&[Token::List]);
        self.lexer.advance();

        let tags = self.parse_tags()?;
        let resolve_to = self.parse_tags()?;

        Ok(List { tags, resolve_to })
    }

    fn parse_tags(&mut self) -> ParseResult<Vec<String>> {
        let first = self.parse_ident()?;
        self.parse_more_tags(first)
    }

    fn parse_more_tags(&mut self, first: String) -> ParseResult<Vec<String>> {
        let mut tags = vec![first];
        while self.lexer.current() == Token::Comma {
            self.lexer.advance();
            tags.push(self.parse_ident()?);
        }
        Ok(tags)
    }

    fn parse_ident(&mut self) -> ParseResult<String> {
        self.expect(&[Token::Ident])?;
        let ident = self.lexer.value().to_string();
        self.lexer.advance();
        Ok(ident)
    }

    fn expect(&self, expected: &[Token]) -> ParseResult<()> {
        if expected.contains(&self.lexer.current()) {
            Ok(())
        } else {
            Err(self.unexpected(expected))
        }
    }

    fn unexpected(&self, expected: &[Token]) -> SyntaxError {
        SyntaxError::new(self.lexer.current(), expected, self.lexer.offset())
    }

    fn assert_current(&self, expected: &[Token]) {
        assert!(
            expected.contains(&self.lexer.current()),
            "parser bug: {}",
            self.unexpected(expected)
        );
    }
}

/// Drop the surrounding double quotes of a string literal
fn strip_quotes(literal: &str) -> &str {
    literal
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(literal)
}
