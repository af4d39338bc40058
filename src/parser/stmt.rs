use crate::{
    ast::{
        ast::Statement,
        expressions::Identifier,
        statements::{BlockStatement, ExpressionStatement, LetStatement, ReturnStatement},
    },
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::Precedence},
};

use super::parser::Parser;

pub fn parse_stmt(parser: &mut Parser) -> Option<Statement> {
    if let Some(stmt_fn) = parser.get_stmt(parser.current_token_kind()) {
        return stmt_fn(parser);
    }

    parse_expression_stmt(parser)
}

/// Consumes a trailing `;` if there is one.
fn skip_semicolon(parser: &mut Parser) {
    if parser.peek_token_is(TokenKind::Semicolon) {
        parser.advance();
    }
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Option<Statement> {
    let token = parser.current_token().clone();
    let expression = parse_expr(parser, Precedence::Lowest);

    skip_semicolon(parser);

    Some(Statement::Expression(ExpressionStatement {
        token,
        expression: expression?,
    }))
}

pub fn parse_let_stmt(parser: &mut Parser) -> Option<Statement> {
    let token = parser.current_token().clone();

    if !parser.expect_peek(TokenKind::Identifier) {
        return None;
    }

    let name_token = parser.current_token().clone();
    let name = Identifier {
        value: name_token.literal.clone(),
        token: name_token,
    };

    if !parser.expect_peek(TokenKind::Assignment) {
        return None;
    }

    parser.advance();
    let value = parse_expr(parser, Precedence::Lowest);

    skip_semicolon(parser);

    Some(Statement::Let(LetStatement {
        token,
        name,
        value: value?,
    }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Option<Statement> {
    let token = parser.current_token().clone();
    parser.advance();

    let return_value = parse_expr(parser, Precedence::Lowest);

    skip_semicolon(parser);

    Some(Statement::Return(ReturnStatement {
        token,
        return_value: return_value?,
    }))
}

/// Parses statements after a `{` (the current token) until `}` or
/// end-of-input. A missing `}` is not reported.
pub fn parse_block_stmt(parser: &mut Parser) -> BlockStatement {
    let token = parser.current_token().clone();
    let mut statements = Vec::new();

    parser.advance();

    while !parser.current_token_is(TokenKind::CloseCurly) && !parser.current_token_is(TokenKind::EOF) {
        if let Some(stmt) = parse_stmt(parser) {
            statements.push(stmt);
        }

        parser.advance();
    }

    BlockStatement { token, statements }
}
