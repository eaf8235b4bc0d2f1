//! The primitive parser library.
//!
//! Everything here is assembled from the combinator core:
//!
//! - Character classes (`alpha`, `digit`, `whitespace`, ...)
//! - Literal text, anchored regular expressions and end of input
//! - Unsigned and signed integers
//! - Whitespace skipping wrappers
//! - Balanced bracket groups (`parens`, `curlies`, `square_braces`)

pub mod brackets;
pub mod chars;
pub mod literals;
pub mod numbers;
pub mod whitespace;

pub use brackets::*;
pub use chars::*;
pub use literals::*;
pub use numbers::*;
pub use whitespace::*;

#[cfg(test)]
mod tests;
