/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The Node enum covering every construct the parser can produce
pub mod ast;
