//! Lexeme recognition strategies
//!
//! Each [`Strategy`] pairs a predicate ([`Strategy::satisfies`]), which
//! inspects the cursor without moving it, with a consumer
//! ([`Strategy::parse`]), which advances past the lexeme and yields a
//! token (or nothing, for whitespace).
//!
//! [`Strategy::ORDER`] is the priority order the lexer walks. The generic
//! symbol strategy must come last so that reserved words are never read
//! as identifiers; a compile-time assertion below rejects any order that
//! breaks this.

use super::lexer::{is_symbol_char, is_whitespace, Cursor, LexError, Token, TokenKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Whitespace,
    QuotedString,
    Equals,
    Minus,
    Number,
    Let,
    Const,
    Function,
    Symbol,
}

const _: () = assert!(symbol_is_last(&Strategy::ORDER));

const fn symbol_is_last(order: &[Strategy]) -> bool {
    let mut i = 0;
    while i < order.len() {
        if matches!(order[i], Strategy::Symbol) {
            return i == order.len() - 1;
        }
        i += 1;
    }
    false
}

impl Strategy {
    /// Priority order tried against the unconsumed input.
    pub const ORDER: [Strategy; 9] = [
        Strategy::Whitespace,
        Strategy::QuotedString,
        Strategy::Equals,
        Strategy::Minus,
        Strategy::Number,
        Strategy::Let,
        Strategy::Const,
        Strategy::Function,
        Strategy::Symbol,
    ];

    pub fn is_keyword(self) -> bool {
        matches!(self, Strategy::Let | Strategy::Const | Strategy::Function)
    }

    /// Does the input at the cursor start a lexeme of this kind?
    pub fn satisfies(self, cursor: &Cursor) -> bool {
        let Some(ch) = cursor.peek() else {
            return false;
        };

        match self {
            Strategy::Whitespace => is_whitespace(ch),
            Strategy::QuotedString => ch == '"' || ch == '\'',
            Strategy::Equals => ch == '=',
            Strategy::Minus => ch == '-',
            Strategy::Number => ch.is_ascii_digit(),
            Strategy::Let => keyword_then_whitespace(cursor, "let"),
            Strategy::Const => keyword_then_whitespace(cursor, "const"),
            Strategy::Function => {
                cursor.starts_with("fn")
                    && !matches!(cursor.peek_ahead(2), Some(next) if is_symbol_char(next))
            }
            Strategy::Symbol => is_symbol_char(ch),
        }
    }

    /// Consume the lexeme at the cursor. Fails without consuming anything
    /// when [`Strategy::satisfies`] does not hold.
    pub fn parse(self, cursor: &mut Cursor) -> Result<Option<Token>, LexError> {
        if !self.satisfies(cursor) {
            return Err(self.mismatch(cursor));
        }

        let loc = cursor.current_location();

        let token = match self {
            Strategy::Whitespace => {
                cursor.advance_while(is_whitespace);
                return Ok(None);
            }
            Strategy::QuotedString => return quoted_string(cursor),
            Strategy::Equals => {
                let count = cursor.run_length('=').min(3);
                let kind = match count {
                    1 => TokenKind::Equals,
                    2 => TokenKind::DoubleEquals,
                    3 => TokenKind::TripleEquals,
                    _ => return Err(self.mismatch(cursor)),
                };
                Token::new(kind, consume(cursor, count), loc)
            }
            Strategy::Minus => {
                let count = cursor.run_length('-');
                let kind = match count {
                    1 => TokenKind::Minus,
                    2 => TokenKind::DoubleMinus,
                    _ => {
                        return Err(LexError {
                            message: format!("Invalid operator '{}'", "-".repeat(count)),
                            location: loc,
                        })
                    }
                };
                Token::new(kind, consume(cursor, count), loc)
            }
            Strategy::Number => Token::new(
                TokenKind::Number,
                cursor.advance_while(|c| c.is_ascii_digit()),
                loc,
            ),
            Strategy::Let => Token::new(TokenKind::Let, consume(cursor, 3), loc),
            Strategy::Const => Token::new(TokenKind::Const, consume(cursor, 5), loc),
            Strategy::Function => Token::new(TokenKind::Function, consume(cursor, 2), loc),
            Strategy::Symbol => {
                Token::new(TokenKind::Symbol, cursor.advance_while(is_symbol_char), loc)
            }
        };

        Ok(Some(token))
    }

    /// Raised when `parse` runs where `satisfies` does not hold. Nothing
    /// has been consumed, so returning no token would stall the lexer.
    fn mismatch(self, cursor: &Cursor) -> LexError {
        LexError {
            message: format!(
                "{:?} strategy does not match input \"{}\"",
                self,
                cursor.snippet(16)
            ),
            location: cursor.current_location(),
        }
    }
}

/// `word` at the cursor, followed by at least one whitespace character.
/// Only looks; the whitespace is left for the whitespace strategy.
fn keyword_then_whitespace(cursor: &Cursor, word: &str) -> bool {
    cursor.starts_with(word)
        && matches!(cursor.peek_ahead(word.chars().count()), Some(next) if is_whitespace(next))
}

fn consume(cursor: &mut Cursor, count: usize) -> String {
    (0..count).filter_map(|_| cursor.advance()).collect()
}

/// Either quote opens; only the same quote closes. No escapes.
fn quoted_string(cursor: &mut Cursor) -> Result<Option<Token>, LexError> {
    let loc = cursor.current_location();
    let Some(quote) = cursor.advance() else {
        return Err(Strategy::QuotedString.mismatch(cursor));
    };

    let mut literal = String::new();
    while let Some(ch) = cursor.advance() {
        if ch == quote {
            return Ok(Some(Token::new(TokenKind::String, literal, loc)));
        }
        literal.push(ch);
    }

    Err(LexError {
        message: format!("Unterminated string literal: {}{}", quote, literal),
        location: loc,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(strategy: Strategy, source: &str) -> (Result<Option<Token>, LexError>, Cursor) {
        let mut cursor = Cursor::new(source);
        let result = strategy.parse(&mut cursor);
        (result, cursor)
    }

    #[test]
    fn test_symbol_strategy_is_last() {
        let last = Strategy::ORDER.len() - 1;
        assert_eq!(Strategy::ORDER[last], Strategy::Symbol);
        assert!(Strategy::ORDER[..last].iter().all(|s| *s != Strategy::Symbol));

        let first_keyword = Strategy::ORDER.iter().position(|s| s.is_keyword()).unwrap();
        assert!(first_keyword < last);
    }

    #[test]
    fn test_satisfies_does_not_advance() {
        let cursor = Cursor::new("let x");
        for strategy in Strategy::ORDER {
            strategy.satisfies(&cursor);
        }
        assert_eq!(cursor.peek(), Some('l'));
    }

    #[test]
    fn test_keyword_needs_trailing_whitespace() {
        assert!(Strategy::Let.satisfies(&Cursor::new("let x")));
        assert!(Strategy::Let.satisfies(&Cursor::new("let\tx")));
        assert!(!Strategy::Let.satisfies(&Cursor::new("lettuce")));
        assert!(!Strategy::Let.satisfies(&Cursor::new("let")));
        assert!(Strategy::Const.satisfies(&Cursor::new("const y")));
        assert!(!Strategy::Const.satisfies(&Cursor::new("constant")));
    }

    #[test]
    fn test_function_word_boundary() {
        assert!(Strategy::Function.satisfies(&Cursor::new("fn f")));
        assert!(Strategy::Function.satisfies(&Cursor::new("fn(")));
        assert!(Strategy::Function.satisfies(&Cursor::new("fn")));
        assert!(!Strategy::Function.satisfies(&Cursor::new("fnord")));
        assert!(!Strategy::Function.satisfies(&Cursor::new("fn_x")));
    }

    #[test]
    fn test_keyword_consumes_only_keyword() {
        let (result, cursor) = run(Strategy::Const, "const  z");
        let token = result.unwrap().unwrap();
        assert_eq!(token.kind, TokenKind::Const);
        assert_eq!(token.text(), "const");
        assert_eq!(cursor.peek(), Some(' '));
    }

    #[test]
    fn test_equals_family() {
        for (source, kind, rest) in [
            ("= 1", TokenKind::Equals, Some(' ')),
            ("==1", TokenKind::DoubleEquals, Some('1')),
            ("===", TokenKind::TripleEquals, None),
            ("====", TokenKind::TripleEquals, Some('=')),
        ] {
            let (result, cursor) = run(Strategy::Equals, source);
            assert_eq!(result.unwrap().unwrap().kind, kind, "{source}");
            assert_eq!(cursor.peek(), rest, "{source}");
        }
    }

    #[test]
    fn test_minus_family() {
        let (result, _) = run(Strategy::Minus, "-1");
        assert_eq!(result.unwrap().unwrap().kind, TokenKind::Minus);

        let (result, _) = run(Strategy::Minus, "--x");
        assert_eq!(result.unwrap().unwrap().kind, TokenKind::DoubleMinus);

        let (result, _) = run(Strategy::Minus, "---");
        let err = result.unwrap_err();
        assert!(err.message.contains("'---'"));
    }

    #[test]
    fn test_quoted_string() {
        let (result, cursor) = run(Strategy::QuotedString, "'it\"s' rest");
        let token = result.unwrap().unwrap();
        assert_eq!(token.kind, TokenKind::String);
        assert_eq!(token.text(), "it\"s");
        assert_eq!(cursor.peek(), Some(' '));

        let (result, _) = run(Strategy::QuotedString, "\"\"");
        assert_eq!(result.unwrap().unwrap().text(), "");
    }

    #[test]
    fn test_unterminated_string_reports_partial_text() {
        let (result, _) = run(Strategy::QuotedString, "\"abc;");
        let err = result.unwrap_err();
        assert!(err.message.contains("\"abc;"));

        let (result, _) = run(Strategy::QuotedString, "'abc\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_without_match_is_an_error() {
        for (strategy, source) in [
            (Strategy::Equals, "x"),
            (Strategy::QuotedString, "x"),
            (Strategy::QuotedString, ""),
            (Strategy::Number, "abc"),
            (Strategy::Symbol, "123"),
            (Strategy::Whitespace, "x"),
            (Strategy::Let, "lettuce"),
            (Strategy::Function, "fnord"),
        ] {
            let (result, cursor) = run(strategy, source);
            let err = result.unwrap_err();
            assert!(err.message.contains("does not match"), "{strategy:?} on {source:?}");
            assert_eq!(cursor.peek(), source.chars().next());
        }
    }

    #[test]
    fn test_whitespace_yields_nothing() {
        let (result, cursor) = run(Strategy::Whitespace, " \t\r\n x");
        assert!(result.unwrap().is_none());
        assert_eq!(cursor.peek(), Some('x'));
    }

    #[test]
    fn test_number_and_symbol_runs() {
        let (result, _) = run(Strategy::Number, "0042abc");
        assert_eq!(result.unwrap().unwrap().text(), "0042");

        let (result, _) = run(Strategy::Symbol, "foo_bar9");
        assert_eq!(result.unwrap().unwrap().text(), "foo_bar");
    }
}
