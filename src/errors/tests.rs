//! Unit tests for error handling.
//!
//! This module contains tests for error messages, names and tips.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::lexer::tokens::TokenKind;
use crate::Position;
use std::rc::Rc;

fn at(offset: u32) -> Position {
    Position(offset, Rc::new("test.fs".to_string()))
}

#[test]
fn test_unexpected_token_message() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: TokenKind::Assignment,
            found: TokenKind::Integer,
        },
        at(6),
    );

    assert_eq!(error.to_string(), "expected next token to be =, got INT instead");
    assert_eq!(error.get_error_name(), "UnexpectedToken");
}

#[test]
fn test_unexpected_token_uses_kind_names() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: TokenKind::Identifier,
            found: TokenKind::EOF,
        },
        at(0),
    );

    assert_eq!(error.to_string(), "expected next token to be IDENT, got EOF instead");
}

#[test]
fn test_no_prefix_parse_fn_message() {
    let error = Error::new(ErrorImpl::NoPrefixParseFn { kind: TokenKind::CloseParen }, at(0));

    assert_eq!(error.to_string(), "no prefix parse function for ) found");
    assert_eq!(error.get_error_name(), "NoPrefixParseFn");
}

#[test]
fn test_integer_parse_error_message() {
    let error = Error::new(
        ErrorImpl::IntegerParseError {
            literal: "99999999999999999999".to_string(),
        },
        at(0),
    );

    assert_eq!(
        error.to_string(),
        "could not parse \"99999999999999999999\" as an integer"
    );
    assert_eq!(error.get_error_name(), "IntegerParseError");
}

#[test]
fn test_error_position() {
    let error = Error::new(ErrorImpl::NoPrefixParseFn { kind: TokenKind::Illegal }, at(42));

    assert_eq!(error.get_position().0, 42);
    assert_eq!(error.get_position().1.as_str(), "test.fs");
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(ErrorImpl::NoPrefixParseFn { kind: TokenKind::Illegal }, at(0));

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert_eq!(tip, "unrecognised character in source"),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}
