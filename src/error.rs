//! Crate-level error type
//!
//! [`Error`] wraps the two failure kinds of the pipeline so that callers
//! running both stages can use `?` throughout. Both are fatal to the call
//! that produced them.

use crate::parser::ast::SourceLocation;
use crate::parser::lexer::LexError;
use crate::parser::parse::ParseError;
use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Source text could not be tokenized
    Lex(LexError),
    /// Token sequence did not fit the grammar
    Parse(ParseError),
}

impl Error {
    pub fn location(&self) -> SourceLocation {
        match self {
            Error::Lex(e) => e.location,
            Error::Parse(e) => e.location,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Lex(e) => write!(f, "{}", e),
            Error::Parse(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Lex(e) => Some(e),
            Error::Parse(e) => Some(e),
        }
    }
}

impl From<LexError> for Error {
    fn from(e: LexError) -> Self {
        Self::Lex(e)
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}
