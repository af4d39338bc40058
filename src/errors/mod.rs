//! Error types and error handling for the front end.
//!
//! This module defines the diagnostics produced while parsing:
//!
//! - Error structures with source position information
//! - One variant per kind of syntactic failure
//! - Error names and suggestions for presentation layers

pub mod errors;

#[cfg(test)]
mod tests;
