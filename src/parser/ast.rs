// AST (Abstract Syntax Tree) definitions for Sprout programs
//
// Nodes hold no source positions, so two programs that differ only in
// layout compare equal. Operator tokens keep their location for
// diagnostics but it does not take part in token equality.

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::parser::lexer::Token;

/// Source location information for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Statement nodes. A [`Program`] body and a function body are both
/// ordered lists of these.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "type"))]
pub enum Statement {
    /// `let name = expression;`
    Let { name: String, expression: Expression },
    /// `const name = expression;`
    Const { name: String, expression: Expression },
    /// `fn name(params) { body }`
    Function {
        name: String,
        params: Vec<String>,
        body: Vec<Statement>,
    },
}

impl Statement {
    /// Binding or function name introduced by this statement
    pub fn name(&self) -> &str {
        match self {
            Statement::Let { name, .. }
            | Statement::Const { name, .. }
            | Statement::Function { name, .. } => name,
        }
    }
}

/// Expression nodes.
///
/// Operands of [`Expression::Binary`] and [`Expression::Unary`] are boxed
/// expressions, so a statement can never appear in operand position.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "type"))]
pub enum Expression {
    Number {
        literal: i64,
    },
    String {
        literal: String,
    },
    Identifier {
        name: String,
    },
    Binary {
        left_operand: Box<Expression>,
        operator: Token,
        right_operand: Box<Expression>,
    },
    Unary {
        operator: Token,
        operand: Box<Expression>,
    },
}

impl Expression {
    pub fn number(literal: i64) -> Self {
        Expression::Number { literal }
    }

    pub fn string(literal: impl Into<String>) -> Self {
        Expression::String {
            literal: literal.into(),
        }
    }

    pub fn identifier(name: impl Into<String>) -> Self {
        Expression::Identifier { name: name.into() }
    }

    /// The operator text of a binary or unary expression, `None` for leaves.
    pub fn operator(&self) -> Option<&str> {
        match self {
            Expression::Binary { operator, .. } | Expression::Unary { operator, .. } => {
                operator.value.as_deref()
            }
            _ => None,
        }
    }
}

/// Top-level program structure
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Program {
    pub body: Vec<Statement>, // Top-level statements in source order
}

impl Program {
    pub fn new() -> Self {
        Program::default()
    }

    /// Serialize the whole tree to a JSON string.
    #[cfg(feature = "serde")]
    pub fn as_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
