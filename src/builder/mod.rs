//! The table-driven expression builder.
//!
//! Given an operator table ordered from the loosest binding entry to the
//! tightest and a parser for the operands, `build_expr` searches the input
//! for operator tokens and resolves precedence and associativity into an
//! `Expr` tree. There is no grammar per precedence level; the table is the
//! grammar.

pub mod builder;

pub use builder::{build_expr, build_expression_parser};
