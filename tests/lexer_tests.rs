// Integration tests for the Sprout tokenizer

use sprout::{tokenize, Token, TokenKind};

fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
    tokens.iter().map(|t| t.kind).collect()
}

#[test]
fn test_digit_runs_are_single_number_tokens() {
    for digits in ["0", "7", "42", "0007", "1234567890", "99999999999999999999999"] {
        let tokens = tokenize(digits).expect("Tokenizing failed");

        assert_eq!(tokens.len(), 2, "{digits}");
        assert_eq!(tokens[0].kind, TokenKind::Number);
        assert_eq!(tokens[0].value.as_deref(), Some(digits));
        assert_eq!(tokens[1].kind, TokenKind::EndOfInput);
    }
}

#[test]
fn test_keywords_are_never_symbols() {
    for (source, kind) in [
        ("let x", TokenKind::Let),
        ("const x", TokenKind::Const),
        ("fn x", TokenKind::Function),
        ("fn()", TokenKind::Function),
        ("let\nx", TokenKind::Let),
    ] {
        let tokens = tokenize(source).expect("Tokenizing failed");
        assert_eq!(tokens[0].kind, kind, "{source}");
    }
}

#[test]
fn test_identifiers_are_single_symbol_tokens() {
    let words = [
        "x", "lettuce", "constant", "fnord", "Let", "CONST", "foo_bar", "_tmp", "__", "le", "f",
    ];
    for word in words {
        let tokens = tokenize(word).expect("Tokenizing failed");

        assert_eq!(kinds(&tokens), vec![TokenKind::Symbol, TokenKind::EndOfInput], "{word}");
        assert_eq!(tokens[0].value.as_deref(), Some(word));
    }
}

#[test]
fn test_full_statement() {
    let tokens = tokenize("let x = 5*4 - 3/9;").unwrap();

    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Let,
            TokenKind::Symbol,
            TokenKind::Equals,
            TokenKind::Number,
            TokenKind::Star,
            TokenKind::Number,
            TokenKind::Minus,
            TokenKind::Number,
            TokenKind::Slash,
            TokenKind::Number,
            TokenKind::Semicolon,
            TokenKind::EndOfInput,
        ]
    );
}

#[test]
fn test_function_declaration_tokens() {
    let tokens = tokenize("fn f(a, b) { }").unwrap();

    assert!(matches!(tokens[0].kind, TokenKind::Function));
    assert!(matches!(&tokens[1].value, Some(s) if s == "f"));
    assert!(matches!(tokens[2].kind, TokenKind::LeftParen));
    assert!(matches!(&tokens[3].value, Some(s) if s == "a"));
    assert!(matches!(tokens[4].kind, TokenKind::Comma));
    assert!(matches!(&tokens[5].value, Some(s) if s == "b"));
    assert!(matches!(tokens[6].kind, TokenKind::RightParen));
    assert!(matches!(tokens[7].kind, TokenKind::LeftBrace));
    assert!(matches!(tokens[8].kind, TokenKind::RightBrace));
    assert!(matches!(tokens[9].kind, TokenKind::EndOfInput));
}

#[test]
fn test_end_of_input_is_unique_and_last() {
    let tokens = tokenize("let a = 'x'; fn g() { const b = 1; }  \n").unwrap();

    let ends = tokens.iter().filter(|t| t.kind == TokenKind::EndOfInput).count();
    assert_eq!(ends, 1);
    assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::EndOfInput));
    assert_eq!(tokens.last().and_then(|t| t.value.clone()), None);
}

#[test]
fn test_equality_family() {
    let tokens = tokenize("a = b == c === d").unwrap();

    assert_eq!(tokens[1].kind, TokenKind::Equals);
    assert_eq!(tokens[3].kind, TokenKind::DoubleEquals);
    assert_eq!(tokens[5].kind, TokenKind::TripleEquals);
    assert_eq!(tokens[5].value.as_deref(), Some("==="));
}

#[test]
fn test_minus_family() {
    let tokens = tokenize("a - b -- c").unwrap();
    assert_eq!(tokens[1].kind, TokenKind::Minus);
    assert_eq!(tokens[3].kind, TokenKind::DoubleMinus);

    assert!(tokenize("a --- b").is_err());
}

#[test]
fn test_both_quote_styles() {
    let tokens = tokenize(r#"'single' "double" "it's""#).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value.as_deref(), Some("single"));
    assert_eq!(tokens[1].value.as_deref(), Some("double"));
    assert_eq!(tokens[2].value.as_deref(), Some("it's"));
}

#[test]
fn test_strings_are_verbatim() {
    let tokens = tokenize(r#""a\nb  let""#).unwrap();
    assert_eq!(tokens[0].value.as_deref(), Some(r"a\nb  let"));
}

#[test]
fn test_unterminated_string_is_an_error() {
    let err = tokenize("let x = 'abc;").unwrap_err();

    assert!(err.message.contains("Unterminated"));
    assert!(err.message.contains("abc;"));
    assert_eq!(err.location.line, 1);
    assert_eq!(err.location.column, 9);
}

#[test]
fn test_mismatched_quote_is_an_error() {
    assert!(tokenize("let x = \"abc';").is_err());
}

#[test]
fn test_unknown_character_is_an_error() {
    let err = tokenize("let x = 1;\nlet y = #;").unwrap_err();

    assert_eq!(err.location.line, 2);
    assert_eq!(err.location.column, 9);
    assert!(err.to_string().starts_with("Lex error at line 2, column 9"));
}

#[test]
fn test_whitespace_produces_no_tokens() {
    let tokens = tokenize(" \t\r\n ").unwrap();
    assert_eq!(kinds(&tokens), vec![TokenKind::EndOfInput]);
}
