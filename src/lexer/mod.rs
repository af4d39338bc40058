//! Lexical analysis module.
//!
//! This module contains the tokenizer that turns source text into tokens
//! for the parser. It handles:
//!
//! - Single and two-character operators (`==`, `!=`)
//! - Integer and string literals
//! - Identifiers and reserved words
//! - Illegal bytes, surfaced as `ILLEGAL` tokens rather than errors

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
