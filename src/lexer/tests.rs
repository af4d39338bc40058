//! Unit tests for the lexer module.
//!
//! Covers keywords and identifiers, integer and string literals, operators
//! and punctuation, illegal input and end-of-input behaviour.

use super::{
    lexer::{tokenize, Lexer},
    tokens::TokenKind,
};

fn kinds_and_literals(source: &str) -> Vec<(TokenKind, String)> {
    tokenize(source, Some("test.fs".to_string()))
        .into_iter()
        .map(|token| (token.kind, token.literal))
        .collect()
}

#[test]
fn test_tokenize_let_statement() {
    let tokens = kinds_and_literals("let five = 5;");

    assert_eq!(
        tokens,
        vec![
            (TokenKind::Let, "let".to_string()),
            (TokenKind::Identifier, "five".to_string()),
            (TokenKind::Assignment, "=".to_string()),
            (TokenKind::Integer, "5".to_string()),
            (TokenKind::Semicolon, ";".to_string()),
            (TokenKind::EOF, "".to_string()),
        ]
    );
}

#[test]
fn test_tokenize_program() {
    let source = r#"let five = 5;
let ten = 10;

let add = func(x, y) {
  x + y;
};

let result = add(five, ten);
!-/*5;
5 < 10 > 5;

if (5 < 10) {
    return true;
} else {
    return false;
}

10 == 10;
10 != 9;
"foobar"
"foo bar"
[1, 2];
{"foo": "bar"}
"#;

    let expected = vec![
        (TokenKind::Let, "let"),
        (TokenKind::Identifier, "five"),
        (TokenKind::Assignment, "="),
        (TokenKind::Integer, "5"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Let, "let"),
        (TokenKind::Identifier, "ten"),
        (TokenKind::Assignment, "="),
        (TokenKind::Integer, "10"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Let, "let"),
        (TokenKind::Identifier, "add"),
        (TokenKind::Assignment, "="),
        (TokenKind::Func, "func"),
        (TokenKind::OpenParen, "("),
        (TokenKind::Identifier, "x"),
        (TokenKind::Comma, ","),
        (TokenKind::Identifier, "y"),
        (TokenKind::CloseParen, ")"),
        (TokenKind::OpenCurly, "{"),
        (TokenKind::Identifier, "x"),
        (TokenKind::Plus, "+"),
        (TokenKind::Identifier, "y"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::CloseCurly, "}"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Let, "let"),
        (TokenKind::Identifier, "result"),
        (TokenKind::Assignment, "="),
        (TokenKind::Identifier, "add"),
        (TokenKind::OpenParen, "("),
        (TokenKind::Identifier, "five"),
        (TokenKind::Comma, ","),
        (TokenKind::Identifier, "ten"),
        (TokenKind::CloseParen, ")"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Not, "!"),
        (TokenKind::Dash, "-"),
        (TokenKind::Slash, "/"),
        (TokenKind::Star, "*"),
        (TokenKind::Integer, "5"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Integer, "5"),
        (TokenKind::Less, "<"),
        (TokenKind::Integer, "10"),
        (TokenKind::Greater, ">"),
        (TokenKind::Integer, "5"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::If, "if"),
        (TokenKind::OpenParen, "("),
        (TokenKind::Integer, "5"),
        (TokenKind::Less, "<"),
        (TokenKind::Integer, "10"),
        (TokenKind::CloseParen, ")"),
        (TokenKind::OpenCurly, "{"),
        (TokenKind::Return, "return"),
        (TokenKind::True, "true"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::CloseCurly, "}"),
        (TokenKind::Else, "else"),
        (TokenKind::OpenCurly, "{"),
        (TokenKind::Return, "return"),
        (TokenKind::False, "false"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::CloseCurly, "}"),
        (TokenKind::Integer, "10"),
        (TokenKind::Equals, "=="),
        (TokenKind::Integer, "10"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::Integer, "10"),
        (TokenKind::NotEquals, "!="),
        (TokenKind::Integer, "9"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::String, "foobar"),
        (TokenKind::String, "foo bar"),
        (TokenKind::OpenBracket, "["),
        (TokenKind::Integer, "1"),
        (TokenKind::Comma, ","),
        (TokenKind::Integer, "2"),
        (TokenKind::CloseBracket, "]"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::OpenCurly, "{"),
        (TokenKind::String, "foo"),
        (TokenKind::Colon, ":"),
        (TokenKind::String, "bar"),
        (TokenKind::CloseCurly, "}"),
        (TokenKind::EOF, ""),
    ];

    let tokens = kinds_and_literals(source);
    assert_eq!(tokens.len(), expected.len());

    for (i, ((kind, literal), (expected_kind, expected_literal))) in
        tokens.iter().zip(expected.iter()).enumerate()
    {
        assert_eq!(kind, expected_kind, "token {} has the wrong kind", i);
        assert_eq!(literal, expected_literal, "token {} has the wrong literal", i);
    }
}

#[test]
fn test_tokenize_keywords() {
    let tokens = kinds_and_literals("let return func true false if else");

    let kinds: Vec<TokenKind> = tokens.iter().map(|(kind, _)| *kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Let,
            TokenKind::Return,
            TokenKind::Func,
            TokenKind::True,
            TokenKind::False,
            TokenKind::If,
            TokenKind::Else,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_keywords_match_only_maximal_runs() {
    let tokens = kinds_and_literals("letter iffy _if returns func_ Let");

    for (kind, literal) in &tokens[..6] {
        assert_eq!(*kind, TokenKind::Identifier, "{} should be an identifier", literal);
    }
    assert_eq!(tokens[0].1, "letter");
    assert_eq!(tokens[4].1, "func_");
    assert_eq!(tokens[5].1, "Let");
}

#[test]
fn test_identifiers_stop_at_digits() {
    let tokens = kinds_and_literals("abc123");

    assert_eq!(tokens[0], (TokenKind::Identifier, "abc".to_string()));
    assert_eq!(tokens[1], (TokenKind::Integer, "123".to_string()));
    assert_eq!(tokens[2].0, TokenKind::EOF);
}

#[test]
fn test_tokenize_two_character_operators() {
    let tokens = kinds_and_literals("== != = ! =! !!=");

    assert_eq!(tokens[0], (TokenKind::Equals, "==".to_string()));
    assert_eq!(tokens[1], (TokenKind::NotEquals, "!=".to_string()));
    assert_eq!(tokens[2], (TokenKind::Assignment, "=".to_string()));
    assert_eq!(tokens[3], (TokenKind::Not, "!".to_string()));
    assert_eq!(tokens[4], (TokenKind::Assignment, "=".to_string()));
    assert_eq!(tokens[5], (TokenKind::Not, "!".to_string()));
    assert_eq!(tokens[6], (TokenKind::Not, "!".to_string()));
    assert_eq!(tokens[7], (TokenKind::NotEquals, "!=".to_string()));
    assert_eq!(tokens[8].0, TokenKind::EOF);
}

#[test]
fn test_operator_at_end_of_input() {
    let tokens = kinds_and_literals("x =");

    assert_eq!(tokens[1], (TokenKind::Assignment, "=".to_string()));
    assert_eq!(tokens[2].0, TokenKind::EOF);
}

#[test]
fn test_tokenize_strings_verbatim() {
    let tokens = kinds_and_literals(r#""hello" "" "back\slash""#);

    assert_eq!(tokens[0], (TokenKind::String, "hello".to_string()));
    assert_eq!(tokens[1], (TokenKind::String, "".to_string()));
    assert_eq!(tokens[2], (TokenKind::String, "back\\slash".to_string()));
    assert_eq!(tokens[3].0, TokenKind::EOF);
}

#[test]
fn test_unterminated_string_is_accepted() {
    let tokens = kinds_and_literals("let s = \"never closed");

    assert_eq!(tokens[3], (TokenKind::String, "never closed".to_string()));
    assert_eq!(tokens[4].0, TokenKind::EOF);
    assert_eq!(tokens.len(), 5);
}

#[test]
fn test_tokenize_integers() {
    let tokens = kinds_and_literals("0 42 007 99999999999999999999999");

    assert_eq!(tokens[0], (TokenKind::Integer, "0".to_string()));
    assert_eq!(tokens[1], (TokenKind::Integer, "42".to_string()));
    assert_eq!(tokens[2], (TokenKind::Integer, "007".to_string()));
    assert_eq!(tokens[3], (TokenKind::Integer, "99999999999999999999999".to_string()));
}

#[test]
fn test_illegal_bytes() {
    let tokens = kinds_and_literals("a @ b # 1.5");

    assert_eq!(tokens[1], (TokenKind::Illegal, "@".to_string()));
    assert_eq!(tokens[3], (TokenKind::Illegal, "#".to_string()));
    assert_eq!(tokens[4], (TokenKind::Integer, "1".to_string()));
    assert_eq!(tokens[5], (TokenKind::Illegal, ".".to_string()));
    assert_eq!(tokens[6], (TokenKind::Integer, "5".to_string()));
}

#[test]
fn test_non_ascii_is_illegal_per_byte() {
    let tokens = kinds_and_literals("é");

    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0].0, TokenKind::Illegal);
    assert_eq!(tokens[1].0, TokenKind::Illegal);
    assert_eq!(tokens[2].0, TokenKind::EOF);
}

#[test]
fn test_whitespace_only() {
    let tokens = kinds_and_literals(" \t\r\n  ");

    assert_eq!(tokens, vec![(TokenKind::EOF, "".to_string())]);
}

#[test]
fn test_eof_is_idempotent() {
    let mut lexer = Lexer::new("x", None);

    assert_eq!(lexer.next_token().kind, TokenKind::Identifier);
    for _ in 0..100 {
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::EOF);
        assert_eq!(token.literal, "");
    }
}

#[test]
fn test_empty_source_yields_eof() {
    let mut lexer = Lexer::new("", None);

    assert_eq!(lexer.next_token().kind, TokenKind::EOF);
    assert_eq!(lexer.next_token().kind, TokenKind::EOF);
}

#[test]
fn test_token_spans() {
    let tokens = tokenize("let ab == \"s\";", Some("test.fs".to_string()));

    let spans: Vec<(u32, u32)> = tokens
        .iter()
        .map(|token| (token.span.start.0, token.span.end.0))
        .collect();
    assert_eq!(spans, vec![(0, 3), (4, 6), (7, 9), (10, 13), (13, 14), (14, 14)]);
    assert_eq!(tokens[0].span.start.1.as_str(), "test.fs");
}

#[test]
fn test_default_source_name() {
    let tokens = tokenize("x", None);

    assert_eq!(tokens[0].span.start.1.as_str(), "shell");
}

#[test]
fn test_token_display() {
    let tokens = tokenize("let", None);

    assert_eq!(tokens[0].to_string(), "LET \"let\"");
    assert_eq!(tokens[1].to_string(), "EOF \"\"");
}

#[test]
fn test_token_kind_display_names() {
    let names: Vec<String> = [
        TokenKind::EOF,
        TokenKind::Illegal,
        TokenKind::Identifier,
        TokenKind::Integer,
        TokenKind::Assignment,
        TokenKind::NotEquals,
        TokenKind::Func,
        TokenKind::Let,
    ]
    .iter()
    .map(|kind| kind.to_string())
    .collect();

    assert_eq!(names, vec!["EOF", "ILLEGAL", "IDENT", "INT", "=", "!=", "FUNCTION", "LET"]);
}

#[test]
fn test_tokens_compare_by_kind_literal_and_span() {
    let first = tokenize("x", None);
    let second = tokenize("x", None);
    assert_eq!(first, second);
    assert_ne!(first[0], tokenize(" x", None)[0]);
}
