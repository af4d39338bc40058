use crate::{
    ast::{
        ast::Expression,
        expressions::{
            ArrayLiteral, Boolean, CallExpression, FunctionLiteral, HashLiteral, Identifier,
            IfExpression, IndexExpression, InfixExpression, IntegerLiteral, PrefixExpression,
            StringLiteral,
        },
    },
    errors::errors::ErrorImpl,
    lexer::tokens::TokenKind,
};

use super::{lookups::Precedence, parser::Parser, stmt::parse_block_stmt};

/// Precedence climbing over the NUD/LED tables.
///
/// Returns `None` when the expression could not be built; the reason has
/// already been recorded on the parser.
pub fn parse_expr(parser: &mut Parser, precedence: Precedence) -> Option<Expression> {
    // First parse NUD
    let Some(nud) = parser.get_nud(parser.current_token_kind()) else {
        parser.no_prefix_parse_fn_error();
        return None;
    };

    let mut left = nud(parser);

    // Fold in operators while they bind tighter than the caller's precedence
    while !parser.peek_token_is(TokenKind::Semicolon) && precedence < parser.peek_precedence() {
        let Some(led) = parser.get_led(parser.peek_token_kind()) else {
            return left;
        };

        parser.advance();
        left = led(parser, left);
    }

    left
}

pub fn parse_identifier(parser: &mut Parser) -> Option<Expression> {
    let token = parser.current_token().clone();

    Some(Expression::Identifier(Identifier {
        value: token.literal.clone(),
        token,
    }))
}

pub fn parse_integer_literal(parser: &mut Parser) -> Option<Expression> {
    let token = parser.current_token().clone();

    match token.literal.parse::<i64>() {
        Ok(value) => Some(Expression::Integer(IntegerLiteral { token, value })),
        Err(_) => {
            let position = token.span.start.clone();
            parser.push_error(ErrorImpl::IntegerParseError { literal: token.literal }, position);
            None
        }
    }
}

pub fn parse_string_literal(parser: &mut Parser) -> Option<Expression> {
    let token = parser.current_token().clone();

    Some(Expression::String(StringLiteral {
        value: token.literal.clone(),
        token,
    }))
}

pub fn parse_boolean(parser: &mut Parser) -> Option<Expression> {
    Some(Expression::Boolean(Boolean {
        value: parser.current_token_is(TokenKind::True),
        token: parser.current_token().clone(),
    }))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Option<Expression> {
    let operator_token = parser.current_token().clone();
    parser.advance();

    let right = parse_expr(parser, Precedence::Prefix);

    Some(Expression::Prefix(PrefixExpression {
        operator: operator_token.literal.clone(),
        token: operator_token,
        right: Box::new(right?),
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Option<Expression> {
    parser.advance();

    let expr = parse_expr(parser, Precedence::Lowest);

    if !parser.expect_peek(TokenKind::CloseParen) {
        return None;
    }

    expr
}

pub fn parse_if_expr(parser: &mut Parser) -> Option<Expression> {
    let token = parser.current_token().clone();

    if !parser.expect_peek(TokenKind::OpenParen) {
        return None;
    }

    parser.advance();
    let condition = parse_expr(parser, Precedence::Lowest);

    if !parser.expect_peek(TokenKind::CloseParen) || !parser.expect_peek(TokenKind::OpenCurly) {
        return None;
    }

    let consequence = parse_block_stmt(parser);

    let alternative = if parser.peek_token_is(TokenKind::Else) {
        parser.advance();

        if !parser.expect_peek(TokenKind::OpenCurly) {
            return None;
        }

        Some(parse_block_stmt(parser))
    } else {
        None
    };

    Some(Expression::If(IfExpression {
        token,
        condition: Box::new(condition?),
        consequence,
        alternative,
    }))
}

pub fn parse_fn_expr(parser: &mut Parser) -> Option<Expression> {
    // func(a, b) { ... }
    let token = parser.current_token().clone();

    if !parser.expect_peek(TokenKind::OpenParen) {
        return None;
    }

    let parameters = parse_list(parser, TokenKind::CloseParen, parse_parameter);

    if !parser.expect_peek(TokenKind::OpenCurly) {
        return None;
    }

    let body = parse_block_stmt(parser);

    Some(Expression::Function(FunctionLiteral {
        token,
        parameters: parameters?,
        body,
    }))
}

fn parse_parameter(parser: &mut Parser) -> Option<Identifier> {
    let token = parser.current_token().clone();

    if token.kind != TokenKind::Identifier {
        let position = token.span.start.clone();
        parser.push_error(
            ErrorImpl::UnexpectedToken {
                expected: TokenKind::Identifier,
                found: token.kind,
            },
            position,
        );
        return None;
    }

    Some(Identifier {
        value: token.literal.clone(),
        token,
    })
}

pub fn parse_array_expr(parser: &mut Parser) -> Option<Expression> {
    let token = parser.current_token().clone();
    let elements = parse_list(parser, TokenKind::CloseBracket, parse_list_item);

    Some(Expression::Array(ArrayLiteral {
        token,
        elements: elements?,
    }))
}

pub fn parse_hash_expr(parser: &mut Parser) -> Option<Expression> {
    // { key: value, key: value }
    let token = parser.current_token().clone();
    let mut pairs = vec![];
    let mut complete = true;

    while !parser.peek_token_is(TokenKind::CloseCurly) {
        parser.advance();
        let key = parse_expr(parser, Precedence::Lowest);

        if !parser.expect_peek(TokenKind::Colon) {
            return None;
        }

        parser.advance();
        let value = parse_expr(parser, Precedence::Lowest);

        match (key, value) {
            (Some(key), Some(value)) => pairs.push((key, value)),
            _ => complete = false,
        }

        if !parser.peek_token_is(TokenKind::CloseCurly) && !parser.expect_peek(TokenKind::Comma) {
            return None;
        }
    }

    if !parser.expect_peek(TokenKind::CloseCurly) || !complete {
        return None;
    }

    Some(Expression::Hash(HashLiteral { token, pairs }))
}

pub fn parse_infix_expr(parser: &mut Parser, left: Option<Expression>) -> Option<Expression> {
    let operator_token = parser.current_token().clone();
    let precedence = parser.current_precedence();
    parser.advance();

    let right = parse_expr(parser, precedence);

    Some(Expression::Infix(InfixExpression {
        operator: operator_token.literal.clone(),
        token: operator_token,
        left: Box::new(left?),
        right: Box::new(right?),
    }))
}

pub fn parse_call_expr(parser: &mut Parser, left: Option<Expression>) -> Option<Expression> {
    let token = parser.current_token().clone();
    let arguments = parse_list(parser, TokenKind::CloseParen, parse_list_item);

    Some(Expression::Call(CallExpression {
        token,
        function: Box::new(left?),
        arguments: arguments?,
    }))
}

pub fn parse_index_expr(parser: &mut Parser, left: Option<Expression>) -> Option<Expression> {
    let token = parser.current_token().clone();
    parser.advance();

    let index = parse_expr(parser, Precedence::Lowest);

    if !parser.expect_peek(TokenKind::CloseBracket) {
        return None;
    }

    Some(Expression::Index(IndexExpression {
        token,
        left: Box::new(left?),
        index: Box::new(index?),
    }))
}

fn parse_list_item(parser: &mut Parser) -> Option<Expression> {
    parse_expr(parser, Precedence::Lowest)
}

/// Parses `item (, item)*` up to `end`, starting with the opening token as
/// current and finishing with `end` as current.
///
/// Every item is attempted even after one fails, so the same tokens are
/// consumed either way; the list is only returned when all items parsed.
fn parse_list<T>(
    parser: &mut Parser,
    end: TokenKind,
    item: fn(&mut Parser) -> Option<T>,
) -> Option<Vec<T>> {
    let mut list = vec![];

    if parser.peek_token_is(end) {
        parser.advance();
        return Some(list);
    }

    parser.advance();
    let mut complete = push_item(&mut list, item(parser));

    while parser.peek_token_is(TokenKind::Comma) {
        parser.advance();
        parser.advance();
        complete &= push_item(&mut list, item(parser));
    }

    if !parser.expect_peek(end) || !complete {
        return None;
    }

    Some(list)
}

fn push_item<T>(list: &mut Vec<T>, item: Option<T>) -> bool {
    match item {
        Some(item) => {
            list.push(item);
            true
        }
        None => false,
    }
}
