//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and core parsing infrastructure,
//! including the error type, cursor helper methods, and the main parse entry
//! point.
//!
//! # Parser Architecture
//!
//! The Parser uses a recursive descent approach with the following organization:
//! - This module: Parser struct, helper methods, and coordination
//! - `statements`: statement dispatch and `let`/`const` bindings
//! - `declarations`: `fn` declarations
//! - `expressions`: expressions, one method per precedence tier
//!
//! # Implementation
//!
//! Parser methods are split across multiple files using `impl Parser` blocks,
//! allowing each module to extend the Parser with related functionality while
//! maintaining access to the shared parser state.
//!
//! The cursor only moves forward. The first construct that does not fit the
//! grammar aborts the whole parse; no partial program is returned.

use crate::parser::ast::*;
use crate::parser::lexer::{Token, TokenKind};
use std::fmt;

/// Parser error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub message: String,
    pub location: SourceLocation,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Parse error at line {}, column {}: {}",
            self.location.line, self.location.column, self.message
        )
    }
}

impl std::error::Error for ParseError {}

/// Recursive descent parser for Sprout
pub struct Parser {
    pub(crate) tokens: Vec<Token>,
    pub(crate) position: usize,
}

impl Parser {
    /// Take ownership of a token sequence. A missing end-of-input marker is
    /// supplied so the cursor can never run past the last token.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if !tokens.last().is_some_and(|t| t.is(TokenKind::EndOfInput)) {
            let loc = tokens.last().map(|t| t.location).unwrap_or_default();
            tokens.push(Token::end_of_input(loc));
        }

        Self {
            tokens,
            position: 0,
        }
    }

    /// Parse the entire program (top-level statements)
    pub fn parse_program(&mut self) -> Result<Program, ParseError> {
        let mut program = Program::new();

        while !self.is_at_end() {
            let statement = self.parse_statement()?;
            program.body.push(statement);
        }

        // Only the final token may mark end of input
        if self.position != self.tokens.len() - 1 {
            return Err(ParseError {
                message: format!(
                    "Unexpected end of input marker before {} remaining token(s)",
                    self.tokens.len() - 1 - self.position
                ),
                location: self.current_location(),
            });
        }

        Ok(program)
    }

    // ===== Helper methods =====

    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.peek().is(kind)
    }

    pub(crate) fn match_token(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume the current token if it is any of `kinds`
    pub(crate) fn match_any(&mut self, kinds: &[TokenKind]) -> Option<Token> {
        if kinds.iter().any(|kind| self.check(*kind)) {
            Some(self.advance().clone())
        } else {
            None
        }
    }

    pub(crate) fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.position += 1;
        }
        self.previous()
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.peek().is(TokenKind::EndOfInput)
    }

    pub(crate) fn peek(&self) -> &Token {
        // `new` guarantees a trailing end-of-input token and `advance` never
        // steps past it.
        &self.tokens[self.position.min(self.tokens.len() - 1)]
    }

    pub(crate) fn previous(&self) -> &Token {
        &self.tokens[self.position.saturating_sub(1)]
    }

    pub(crate) fn current_location(&self) -> SourceLocation {
        self.peek().location
    }

    pub(crate) fn error_here(&self, message: impl Into<String>) -> ParseError {
        ParseError {
            message: format!("{}, found {}", message.into(), self.peek()),
            location: self.current_location(),
        }
    }

    pub(crate) fn expect_token(
        &mut self,
        kind: TokenKind,
        message: &str,
    ) -> Result<Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance().clone())
        } else {
            Err(self.error_here(message))
        }
    }

    pub(crate) fn expect_semicolon(&mut self, ctx: &str) -> Result<(), ParseError> {
        self.expect_token(TokenKind::Semicolon, &format!("Expected ';' {ctx}"))?;
        Ok(())
    }

    pub(crate) fn expect_identifier(&mut self, ctx: &str) -> Result<String, ParseError> {
        let token = self.expect_token(TokenKind::Symbol, &format!("Expected identifier {ctx}"))?;
        Ok(token.text().to_string())
    }
}

/// Parse a complete token sequence into a [`Program`].
pub fn parse(tokens: Vec<Token>) -> Result<Program, ParseError> {
    Parser::new(tokens).parse_program()
}
