//! A small integer calculator assembled from the rest of the crate.
//!
//! Operands are bare symbols (`x`) or positive integers, optionally in
//! parentheses (`(12)`). Operators come from `ARITHMETIC_TABLE`:
//! assignment, addition, multiplication and prefix increment.

pub mod atom;
pub mod evaluator;

pub use atom::{atom, parse_arithmetic, Atom, ARITHMETIC_TABLE};
pub use evaluator::{evaluate, Evaluator, SymbolTable};
