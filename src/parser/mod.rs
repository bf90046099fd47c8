//! Sprout source code parser
//!
//! This module transforms Sprout source text into an Abstract Syntax Tree (AST):
//! - [`lexer`]: Tokenization (source text → tokens)
//! - [`strategy`]: Ordered lexeme recognition strategies used by the lexer
//! - [`parse`]: Parsing (tokens → AST)
//! - [`ast`]: AST node definitions
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent parser with one method per precedence
//! tier for binary operators. No external parser generator dependencies.

pub mod ast;
pub mod lexer;
pub mod parse;
pub mod strategy;

mod declarations;
mod expressions;
mod statements;

pub use lexer::tokenize;
pub use parse::parse;
