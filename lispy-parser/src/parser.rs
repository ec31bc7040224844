// lispy-parser - Parser for Lispy
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Recursive descent parser for Lispy source code.
//!
//! Converts tokens into `LispyVal` trees. Two entry points:
//!
//! - **File mode** ([`Parser::next_form`]): scans for the next `(` and parses
//!   one S-expression per call; non-parenthesized top-level text is skipped.
//! - **Line mode** ([`Parser::parse_line`]): parses the whole input as the
//!   body of an implicit S-expression; a single child collapses to itself.
//!
//! Parsing never panics on malformed input; every failure is a [`ParseError`].

use std::fmt;

use im::Vector;

use crate::lexer::{Lexer, LexerError, Token};
use crate::symbol::Symbol;
use crate::value::LispyVal;

/// Parser error with position information.
#[derive(Debug, Clone)]
pub struct ParseError {
    pub message: String,
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}:{}", self.message, self.line, self.column)
    }
}

impl std::error::Error for ParseError {}

impl From<LexerError> for ParseError {
    fn from(e: LexerError) -> Self {
        ParseError {
            message: e.message,
            line: e.line,
            column: e.column,
        }
    }
}

/// The parser converts tokens into `LispyVal` trees.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
    line: usize,
    column: usize,
}

impl<'a> Parser<'a> {
    /// Create a new parser for the given source code.
    pub fn new(source: &'a str) -> Result<Self, ParseError> {
        let mut lexer = Lexer::new(source);
        // Capture position before first token
        let line = lexer.line();
        let column = lexer.column();
        let current = lexer.next_token()?;
        Ok(Parser {
            lexer,
            current,
            line,
            column,
        })
    }

    /// File mode: scan forward to the next `(` and parse one S-expression.
    /// Tokens outside a parenthesized form are skipped. Returns `None` at
    /// end of input.
    pub fn next_form(&mut self) -> Result<Option<LispyVal>, ParseError> {
        loop {
            match self.current {
                Token::Eof => return Ok(None),
                Token::LParen => return Ok(Some(self.parse_form()?)),
                _ => {
                    self.advance()?;
                }
            }
        }
    }

    /// Line mode: parse the entire input as the body of an implicit
    /// S-expression. A single child is returned unwrapped.
    pub fn parse_line(source: &str) -> Result<LispyVal, ParseError> {
        let mut parser = Parser::new(source)?;
        let mut children: Vector<LispyVal> = Vector::new();
        loop {
            match &parser.current {
                Token::Eof => break,
                Token::RParen => return Err(parser.error("Unexpected )")),
                Token::RBrace => return Err(parser.error("Unexpected }")),
                _ => children.push_back(parser.parse_form()?),
            }
        }
        if children.len() == 1 {
            Ok(children.remove(0))
        } else {
            Ok(LispyVal::SExpr(children))
        }
    }

    // ========================================================================
    // Internal parsing methods
    // ========================================================================

    fn advance(&mut self) -> Result<Token, ParseError> {
        let prev = std::mem::replace(&mut self.current, Token::Eof);
        // Capture position of the next token before fetching it
        self.line = self.lexer.line();
        self.column = self.lexer.column();
        self.current = self.lexer.next_token()?;
        Ok(prev)
    }

    fn error(&self, message: impl Into<String>) -> ParseError {
        ParseError {
            message: message.into(),
            line: self.line,
            column: self.column,
        }
    }

    fn parse_form(&mut self) -> Result<LispyVal, ParseError> {
        match &self.current {
            Token::Atom(_) => {
                let Token::Atom(text) = self.advance()? else {
                    unreachable!("current was just matched as an atom");
                };
                Ok(atom_to_val(&text))
            }
            Token::Str(_) => {
                let Token::Str(text) = self.advance()? else {
                    unreachable!("current was just matched as a string");
                };
                Ok(LispyVal::string(text))
            }
            Token::LParen => {
                let children = self.parse_delimited(&Token::RParen, "Expected )")?;
                Ok(LispyVal::SExpr(children))
            }
            Token::LBrace => {
                let children = self.parse_delimited(&Token::RBrace, "Expected }")?;
                Ok(LispyVal::QExpr(children))
            }
            Token::RParen => Err(self.error("Unexpected )")),
            Token::RBrace => Err(self.error("Unexpected }")),
            Token::Eof => Err(self.error("Unexpected end of input")),
        }
    }

    /// Parse children up to the matching close token. The open token is the
    /// current token on entry; `missing` is the error for a wrong or absent
    /// closer.
    fn parse_delimited(
        &mut self,
        close: &Token,
        missing: &'static str,
    ) -> Result<Vector<LispyVal>, ParseError> {
        self.advance()?; // past the opening delimiter
        let mut items: Vector<LispyVal> = Vector::new();
        loop {
            if &self.current == close {
                self.advance()?;
                return Ok(items);
            }
            match &self.current {
                Token::Eof | Token::RParen | Token::RBrace => {
                    return Err(self.error(missing));
                }
                _ => items.push_back(self.parse_form()?),
            }
        }
    }
}

/// An atom that parses as a signed decimal integer becomes an integer;
/// anything else is a symbol.
fn atom_to_val(text: &str) -> LispyVal {
    match text.parse::<i64>() {
        Ok(n) => LispyVal::int(n),
        Err(_) => LispyVal::symbol(Symbol::new(text)),
    }
}

// ============================================================================
// Tests
// ============================================================================
