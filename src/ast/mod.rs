/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: `Program`, the closed `Statement`/`Expression` sums and the `Node` trait
/// - expressions: Definitions for the expression nodes
/// - statements: Definitions for the statement nodes
///
/// Nodes own their children outright and are never mutated once the parser
/// has built them.
pub mod ast;
pub mod expressions;
pub mod statements;
