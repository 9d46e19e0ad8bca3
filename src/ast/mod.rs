/// AST (Abstract Syntax Tree) module
/// Contains the typed tree handed to the code generator
///
/// Submodules:
/// - ast: Core definitions (types, operator kinds, channel colours)
/// - expressions: Definitions for the expression node kinds
/// - statements: Definitions for statements, blocks and the program root
/// - types: Mapping from language types onto host types
pub mod ast;
pub mod expressions;
pub mod statements;
pub mod types;
