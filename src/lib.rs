//! # Introduction
//!
//! Sprout is the front end of a small toy language: a tokenizer and a
//! recursive-descent parser that turn source text into an AST.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → Tokens → Parser → Program
//! ```
//!
//! 1. [`tokenize`] — walks the source with an ordered table of recognition
//!    strategies and returns a token sequence ending in an end-of-input
//!    token.
//! 2. [`parse`] — consumes that sequence and builds a [`Program`].
//!
//! Both stages are synchronous and stop at the first error.
//!
//! ## Language
//!
//! ```text
//! let x = 5 * 4 - 3 / 9;
//! const greeting = 'hello';
//! fn main() { let y = (x + 1) * 2; }
//! ```
//!
//! ## Features
//!
//! `serde` (default) derives `Serialize` for tokens and AST nodes and adds
//! [`Program::as_json`].

pub mod error;
pub mod parser;

pub use crate::error::{Error, Result};
pub use crate::parser::ast::{Expression, Program, SourceLocation, Statement};
pub use crate::parser::lexer::{LexError, Token, TokenKind};
pub use crate::parser::parse::ParseError;
pub use crate::parser::{parse, tokenize};

/// Tokenize and parse `source` in one step.
pub fn parse_source(source: &str) -> Result<Program> {
    let tokens = tokenize(source)?;
    Ok(parse(tokens)?)
}
