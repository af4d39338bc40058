//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms the token stream into a
//! [`Program`](crate::ast::ast::Program). It uses a Pratt parser for
//! expressions with operator precedence and handles:
//!
//! - Statement parsing (`let`, `return`, expression statements, blocks)
//! - Expression parsing (prefix/infix operators, calls, indexing, literals)
//! - Error collection without aborting
//!
//! The parser uses NUD (null denotation) and LED (left denotation) functions
//! for expression parsing with precedences for binding strength.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
