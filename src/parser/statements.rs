//! Statement parsing implementation
//!
//! This module handles statement dispatch and variable bindings:
//!
//! - Variable bindings: `let x = 42;`, `const y = "hi";`
//! - Function declarations are dispatched here and parsed in `declarations`
//!
//! # Grammar
//!
//! ```text
//! statement  ::= let_stmt | const_stmt | fn_stmt
//! let_stmt   ::= "let" identifier "=" expression ";"
//! const_stmt ::= "const" identifier "=" expression ";"
//! ```
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::lexer::TokenKind;
use crate::parser::parse::{ParseError, Parser};

impl Parser {
    /// Parse statements up to (not including) the closing brace of a block
    pub(crate) fn parse_block_statements(&mut self) -> Result<Vec<Statement>, ParseError> {
        let mut statements = Vec::new();

        while !self.check(TokenKind::RightBrace) && !self.is_at_end() {
            statements.push(self.parse_statement()?);
        }

        Ok(statements)
    }

    /// Parse a statement, dispatching on its leading token
    pub(crate) fn parse_statement(&mut self) -> Result<Statement, ParseError> {
        if self.match_token(TokenKind::Let) {
            let (name, expression) = self.parse_binding("let")?;
            return Ok(Statement::Let { name, expression });
        }

        if self.match_token(TokenKind::Const) {
            let (name, expression) = self.parse_binding("const")?;
            return Ok(Statement::Const { name, expression });
        }

        if self.match_token(TokenKind::Function) {
            return self.parse_function_declaration();
        }

        Err(self.error_here("Expected 'let', 'const' or 'fn' at start of statement"))
    }

    /// Parse the part of a binding after its keyword: `name = expression ;`
    fn parse_binding(&mut self, keyword: &str) -> Result<(String, Expression), ParseError> {
        let name = self.expect_identifier(&format!("after '{keyword}'"))?;

        self.expect_token(
            TokenKind::Equals,
            &format!("Expected '=' after '{keyword} {name}'"),
        )?;

        let expression = self.parse_expression()?;
        self.expect_semicolon(&format!("after '{keyword} {name}' initializer"))?;

        Ok((name, expression))
    }
}
