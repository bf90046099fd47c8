//! Expression parsing implementation
//!
//! This module handles parsing of Sprout expressions with one recursive
//! method per precedence tier.
//!
//! # Supported Expressions
//!
//! - Literals: integers, strings
//! - Identifiers
//! - Binary operators: `==` `===`, `+` `-`, `*` `/`
//! - Unary minus
//! - Parenthesised grouping
//!
//! # Precedence
//!
//! From loosest to tightest: equality, additive, multiplicative, unary,
//! primary. Every binary tier is left-associative, so `a - b - c` is
//! `(a - b) - c`.
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::lexer::TokenKind;
use crate::parser::parse::{ParseError, Parser};

impl Parser {
    /// Parse expression (top-level entry point)
    pub(crate) fn parse_expression(&mut self) -> Result<Expression, ParseError> {
        self.parse_equality()
    }

    /// Parse equality (== ===)
    fn parse_equality(&mut self) -> Result<Expression, ParseError> {
        let mut left = self.parse_additive()?;

        while let Some(operator) =
            self.match_any(&[TokenKind::DoubleEquals, TokenKind::TripleEquals])
        {
            let right = self.parse_additive()?;
            left = Expression::Binary {
                left_operand: Box::new(left),
                operator,
                right_operand: Box::new(right),
            };
        }

        Ok(left)
    }

    /// Parse additive (+ -)
    fn parse_additive(&mut self) -> Result<Expression, ParseError> {
        let mut left = self.parse_term()?;

        while let Some(operator) = self.match_any(&[TokenKind::Plus, TokenKind::Minus]) {
            let right = self.parse_term()?;
            left = Expression::Binary {
                left_operand: Box::new(left),
                operator,
                right_operand: Box::new(right),
            };
        }

        Ok(left)
    }

    /// Parse multiplicative (* /)
    fn parse_term(&mut self) -> Result<Expression, ParseError> {
        let mut left = self.parse_unary()?;

        while let Some(operator) = self.match_any(&[TokenKind::Star, TokenKind::Slash]) {
            let right = self.parse_unary()?;
            left = Expression::Binary {
                left_operand: Box::new(left),
                operator,
                right_operand: Box::new(right),
            };
        }

        Ok(left)
    }

    /// Parse unary minus
    fn parse_unary(&mut self) -> Result<Expression, ParseError> {
        if let Some(operator) = self.match_any(&[TokenKind::Minus]) {
            let operand = self.parse_unary()?;
            return Ok(Expression::Unary {
                operator,
                operand: Box::new(operand),
            });
        }

        self.parse_primary()
    }

    /// Parse primary: literal, identifier or `( expression )`
    fn parse_primary(&mut self) -> Result<Expression, ParseError> {
        let token = self.peek().clone();

        match token.kind {
            TokenKind::Number => {
                self.advance();
                let literal = token.text().parse::<i64>().map_err(|_| ParseError {
                    message: format!("Integer literal out of range: {}", token.text()),
                    location: token.location,
                })?;
                Ok(Expression::Number { literal })
            }
            TokenKind::String => {
                self.advance();
                Ok(Expression::string(token.text()))
            }
            TokenKind::Symbol => {
                self.advance();
                Ok(Expression::identifier(token.text()))
            }
            TokenKind::LeftParen => {
                self.advance();
                let expr = self.parse_expression()?;
                self.expect_token(TokenKind::RightParen, "Expected ')' after expression")?;
                Ok(expr)
            }
            _ => Err(self.error_here("Expected expression")),
        }
    }
}
