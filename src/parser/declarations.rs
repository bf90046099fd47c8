//! Declaration parsing implementation
//!
//! This module handles function declarations:
//!
//! - Function definitions: `fn name(a, b) { ... }`
//! - Parameter lists: zero or more comma-separated identifiers
//!
//! # Grammar
//!
//! ```text
//! fn_stmt ::= "fn" identifier "(" params? ")" "{" statement* "}"
//! params  ::= identifier ("," identifier)*
//! ```
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::lexer::TokenKind;
use crate::parser::parse::{ParseError, Parser};

impl Parser {
    /// Parse a function declaration; the `fn` keyword is already consumed
    pub(crate) fn parse_function_declaration(&mut self) -> Result<Statement, ParseError> {
        let name = self.expect_identifier("after 'fn'")?;

        self.expect_token(TokenKind::LeftParen, "Expected '(' after function name")?;
        let params = self.parse_parameters()?;
        self.expect_token(TokenKind::RightParen, "Expected ')' after parameters")?;

        self.expect_token(TokenKind::LeftBrace, "Expected '{' before function body")?;
        let body = self.parse_block_statements()?;
        self.expect_token(TokenKind::RightBrace, "Expected '}' after function body")?;

        Ok(Statement::Function { name, params, body })
    }

    /// Parse function parameters (without the surrounding parentheses)
    fn parse_parameters(&mut self) -> Result<Vec<String>, ParseError> {
        let mut params = Vec::new();

        if self.check(TokenKind::RightParen) {
            return Ok(params);
        }

        loop {
            params.push(self.expect_identifier("in parameter list")?);

            if !self.match_token(TokenKind::Comma) {
                break;
            }
        }

        Ok(params)
    }
}
