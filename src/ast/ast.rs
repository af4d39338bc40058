use std::fmt::{self, Debug, Display};

use crate::{lexer::tokens::Token, Span};

use super::{
    expressions::{
        ArrayLiteral, Boolean, CallExpression, FunctionLiteral, HashLiteral, Identifier,
        IfExpression, IndexExpression, InfixExpression, IntegerLiteral, PrefixExpression,
        StringLiteral,
    },
    statements::{BlockStatement, ExpressionStatement, LetStatement, ReturnStatement},
};

/// Behaviour shared by every AST node.
///
/// `Display` is the canonical, fully parenthesised reconstruction of the
/// node; parsing that text again yields a tree of the same shape.
pub trait Node: Display + Debug {
    /// The token that introduced the node.
    fn token(&self) -> &Token;

    fn token_literal(&self) -> &str {
        &self.token().literal
    }

    fn get_span(&self) -> &Span {
        &self.token().span
    }
}

/// Root of every tree the parser builds. Statement order is execution order.
#[derive(Debug, Clone, Default)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    pub fn token_literal(&self) -> &str {
        self.statements
            .first()
            .map(|stmt| stmt.token_literal())
            .unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Statement> {
        self.statements.iter()
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_statements(f, &self.statements)
    }
}

/// Writes statements separated by a space. An expression statement that is
/// followed by another statement gets a `;` so the boundary survives.
pub(crate) fn write_statements(f: &mut fmt::Formatter<'_>, statements: &[Statement]) -> fmt::Result {
    for (i, stmt) in statements.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{}", stmt)?;

        if matches!(stmt, Statement::Expression(_)) && i + 1 < statements.len() {
            write!(f, ";")?;
        }
    }

    Ok(())
}

#[derive(Debug, Clone)]
pub enum Statement {
    Let(LetStatement),
    Return(ReturnStatement),
    Expression(ExpressionStatement),
    Block(BlockStatement),
}

impl Statement {
    fn as_node(&self) -> &dyn Node {
        match self {
            Statement::Let(stmt) => stmt,
            Statement::Return(stmt) => stmt,
            Statement::Expression(stmt) => stmt,
            Statement::Block(stmt) => stmt,
        }
    }
}

impl Node for Statement {
    fn token(&self) -> &Token {
        self.as_node().token()
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(self.as_node(), f)
    }
}

#[derive(Debug, Clone)]
pub enum Expression {
    Identifier(Identifier),
    Integer(IntegerLiteral),
    String(StringLiteral),
    Boolean(Boolean),
    Prefix(PrefixExpression),
    Infix(InfixExpression),
    If(IfExpression),
    Function(FunctionLiteral),
    Call(CallExpression),
    Array(ArrayLiteral),
    Hash(HashLiteral),
    Index(IndexExpression),
}

impl Expression {
    fn as_node(&self) -> &dyn Node {
        match self {
            Expression::Identifier(expr) => expr,
            Expression::Integer(expr) => expr,
            Expression::String(expr) => expr,
            Expression::Boolean(expr) => expr,
            Expression::Prefix(expr) => expr,
            Expression::Infix(expr) => expr,
            Expression::If(expr) => expr,
            Expression::Function(expr) => expr,
            Expression::Call(expr) => expr,
            Expression::Array(expr) => expr,
            Expression::Hash(expr) => expr,
            Expression::Index(expr) => expr,
        }
    }
}

impl Node for Expression {
    fn token(&self) -> &Token {
        self.as_node().token()
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(self.as_node(), f)
    }
}
