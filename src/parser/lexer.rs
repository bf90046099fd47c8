//! Lexer (tokenizer) for Sprout source code
//!
//! Converts raw source text into a flat [`Token`] sequence consumed by the
//! parser. The sequence always ends with exactly one
//! [`TokenKind::EndOfInput`] token.
//!
//! Each iteration first tries the structural single-character table (an
//! [`FxHashMap`] lookup), then walks the ordered [`Strategy`] table. The
//! first strategy whose predicate holds consumes the lexeme.

use super::ast::SourceLocation;
use super::strategy::Strategy;
use rustc_hash::FxHashMap;
use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Single-character lexemes resolved by direct lookup before the
/// strategy chain runs.
const STRUCTURAL: [(char, TokenKind); 10] = [
    (';', TokenKind::Semicolon),
    ('(', TokenKind::LeftParen),
    (')', TokenKind::RightParen),
    ('{', TokenKind::LeftBrace),
    ('}', TokenKind::RightBrace),
    (',', TokenKind::Comma),
    ('*', TokenKind::Star),
    ('+', TokenKind::Plus),
    ('/', TokenKind::Slash),
    ('_', TokenKind::Underscore),
];

/// Lexical categories produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum TokenKind {
    // Punctuation
    Semicolon,  // ;
    LeftParen,  // (
    RightParen, // )
    LeftBrace,  // {
    RightBrace, // }
    Comma,      // ,

    // Arithmetic
    Star,        // *
    Plus,        // +
    Slash,       // /
    Minus,       // -
    DoubleMinus, // --

    // Equality family
    Equals,       // =
    DoubleEquals, // ==
    TripleEquals, // ===

    Underscore, // _ on its own

    // Literals
    Number,
    String,

    // Keywords
    Let,
    Const,
    Function,

    // Identifiers
    Symbol,

    EndOfInput,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Semicolon => "';'",
            TokenKind::LeftParen => "'('",
            TokenKind::RightParen => "')'",
            TokenKind::LeftBrace => "'{'",
            TokenKind::RightBrace => "'}'",
            TokenKind::Comma => "','",
            TokenKind::Star => "'*'",
            TokenKind::Plus => "'+'",
            TokenKind::Slash => "'/'",
            TokenKind::Minus => "'-'",
            TokenKind::DoubleMinus => "'--'",
            TokenKind::Equals => "'='",
            TokenKind::DoubleEquals => "'=='",
            TokenKind::TripleEquals => "'==='",
            TokenKind::Underscore => "'_'",
            TokenKind::Number => "number",
            TokenKind::String => "string",
            TokenKind::Let => "'let'",
            TokenKind::Const => "'const'",
            TokenKind::Function => "'fn'",
            TokenKind::Symbol => "identifier",
            TokenKind::EndOfInput => "end of input",
        };
        f.write_str(name)
    }
}

/// A classified lexeme.
///
/// `value` holds the matched text (string contents without their quotes)
/// and is `None` only for [`TokenKind::EndOfInput`]. Two tokens are equal
/// when kind and value match; the location is diagnostic metadata.
#[derive(Debug, Clone, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Token {
    pub kind: TokenKind,
    pub value: Option<String>,
    pub location: SourceLocation,
}

impl Token {
    pub fn new(kind: TokenKind, value: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            kind,
            value: Some(value.into()),
            location,
        }
    }

    pub fn end_of_input(location: SourceLocation) -> Self {
        Self {
            kind: TokenKind::EndOfInput,
            value: None,
            location,
        }
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    pub fn text(&self) -> &str {
        self.value.as_deref().unwrap_or("")
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.value == other.value
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.kind, &self.value) {
            (TokenKind::Number, Some(v)) => write!(f, "number {}", v),
            (TokenKind::String, Some(v)) => write!(f, "string \"{}\"", v),
            (TokenKind::Symbol, Some(v)) => write!(f, "identifier '{}'", v),
            (TokenKind::EndOfInput, _) | (_, None) => write!(f, "{}", self.kind),
            (_, Some(v)) => write!(f, "'{}'", v),
        }
    }
}

/// Lexer error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    pub message: String,
    pub location: SourceLocation,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Lex error at line {}, column {}: {}",
            self.location.line, self.location.column, self.message
        )
    }
}

impl std::error::Error for LexError {}

/// Shared read position over the immutable source characters.
///
/// Strategies inspect it through `&Cursor` and advance it through
/// `&mut Cursor`; nothing else owns a copy of the input.
pub struct Cursor {
    input: Vec<char>,
    position: usize,
    line: usize,
    column: usize,
}

impl Cursor {
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Peek at current character without consuming
    pub fn peek(&self) -> Option<char> {
        self.peek_ahead(0)
    }

    /// Peek ahead n characters
    pub fn peek_ahead(&self, n: usize) -> Option<char> {
        self.input.get(self.position + n).copied()
    }

    /// True when the unconsumed input begins with `word`
    pub fn starts_with(&self, word: &str) -> bool {
        word.chars()
            .enumerate()
            .all(|(i, ch)| self.peek_ahead(i) == Some(ch))
    }

    /// Number of consecutive `ch` characters starting at the cursor
    pub fn run_length(&self, ch: char) -> usize {
        self.input[self.position..]
            .iter()
            .take_while(|&&c| c == ch)
            .count()
    }

    /// Advance to next character
    pub fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;

        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(ch)
    }

    /// Consume characters while `pred` holds and return them
    pub fn advance_while(&mut self, pred: impl Fn(char) -> bool) -> String {
        let mut text = String::new();
        while let Some(ch) = self.peek() {
            if !pred(ch) {
                break;
            }
            text.push(ch);
            self.advance();
        }
        text
    }

    /// Check if at end of input
    pub fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    /// Get current source location
    pub fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column)
    }

    /// Up to `max` characters of unconsumed input on the current line
    pub fn snippet(&self, max: usize) -> String {
        self.input[self.position..]
            .iter()
            .take_while(|&&c| c != '\n')
            .take(max)
            .collect()
    }
}

/// Whitespace consumed and discarded between tokens
pub fn is_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\r' | '\n')
}

/// Characters allowed in an identifier run
pub fn is_symbol_char(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

/// Lexer for Sprout source code
pub struct Lexer {
    cursor: Cursor,
    structural: FxHashMap<char, TokenKind>,
}

impl Lexer {
    /// Create a new lexer for the given source string.
    pub fn new(input: &str) -> Self {
        Self {
            cursor: Cursor::new(input),
            structural: STRUCTURAL.into_iter().collect(),
        }
    }

    /// Tokenize the entire input
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        loop {
            if self.cursor.is_at_end() {
                tokens.push(Token::end_of_input(self.cursor.current_location()));
                break;
            }

            if let Some(token) = self.structural_token() {
                tokens.push(token);
                continue;
            }

            if let Some(token) = self.strategy_token()? {
                tokens.push(token);
            }
        }

        Ok(tokens)
    }

    /// Fast path for single-character lexemes.
    ///
    /// A `_` that starts an identifier run is left for the symbol strategy.
    fn structural_token(&mut self) -> Option<Token> {
        let ch = self.cursor.peek()?;
        let kind = *self.structural.get(&ch)?;

        if kind == TokenKind::Underscore
            && matches!(self.cursor.peek_ahead(1), Some(next) if is_symbol_char(next))
        {
            return None;
        }

        let loc = self.cursor.current_location();
        self.cursor.advance();
        Some(Token::new(kind, ch, loc))
    }

    /// Run the first strategy that accepts the current position
    fn strategy_token(&mut self) -> Result<Option<Token>, LexError> {
        match Strategy::ORDER
            .iter()
            .find(|strategy| strategy.satisfies(&self.cursor))
        {
            Some(strategy) => strategy.parse(&mut self.cursor),
            None => Err(self.unexpected_character()),
        }
    }

    fn unexpected_character(&self) -> LexError {
        let ch = self.cursor.peek().unwrap_or('\0');
        LexError {
            message: format!(
                "Unexpected character '{}' near \"{}\"",
                ch,
                self.cursor.snippet(16)
            ),
            location: self.cursor.current_location(),
        }
    }
}

/// Tokenize `source` into a sequence terminated by [`TokenKind::EndOfInput`].
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(source).tokenize()
}
