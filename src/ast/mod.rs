/// Expression tree module
/// Contains the operator table types and the tree the builder produces
///
/// Submodules:
/// - ast: The `Expr` tree and its constructors
/// - operators: Operator descriptors and tables
/// - visitor: Traversal and bracketed rendering
pub mod ast;
pub mod operators;
pub mod visitor;

#[cfg(test)]
mod tests;
