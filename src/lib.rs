//! Parser combinators and a table-driven expression builder.
//!
//! The crate is organised leaves first:
//!
//! - `Span` / `ParseResult` (this file) - the input view and the result shape
//! - `parser` - the `Parser<T>` capability and its combinators
//! - `primitives` - character classes, literals, numbers, brackets
//! - `ast` - operator descriptors and the expression tree
//! - `builder` - turns an operator table plus a leaf parser into a tree
//! - `calc` - a small calculator built on top of the above
//!
//! ```
//! use exprsec::{ast::operators::{Assoc, Operator}, builder::builder::build_expression_parser, primitives::numbers::pos_num};
//!
//! let table = vec![
//!     Operator::infix("+", "Add", Assoc::Left),
//!     Operator::infix("*", "Mul", Assoc::Left),
//! ];
//! let expr = build_expression_parser(&table, pos_num());
//! let tree = expr.parse_complete("1+2*3").unwrap();
//! assert_eq!(tree.to_bracketed(&table), "(1+(2*3))");
//! ```

#![allow(clippy::module_inception)]

use std::fmt::{self, Display};

use crate::errors::errors::Error;

pub mod ast;
pub mod builder;
pub mod calc;
pub mod errors;
pub mod macros;
pub mod parser;
pub mod primitives;

extern crate regex;

/// What a parser hands back: `Ok(None)` when the input does not match,
/// `Ok(Some((value, remaining)))` when it does.
///
/// `Err` is reserved for fatal errors raised by `or_throw`.
pub type ParseResult<'s, T> = Result<Option<(T, Span<'s>)>, Error>;

/// An immutable view over a region of caller-owned text.
///
/// Offsets are byte offsets into the original buffer and always sit on char
/// boundaries.
#[derive(Debug, Clone, Copy)]
pub struct Span<'s> {
    source: &'s str,
    start: usize,
    len: usize,
}

impl<'s> Span<'s> {
    pub fn new(source: &'s str) -> Self {
        Span {
            source,
            start: 0,
            len: source.len(),
        }
    }

    pub fn as_str(&self) -> &'s str {
        &self.source[self.start..self.start + self.len]
    }

    /// Byte offset of this view inside the buffer it was created from.
    pub fn offset(&self) -> usize {
        self.start
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drops the first `n` bytes. `n` is clamped to the length of the view.
    pub fn advance(&self, n: usize) -> Span<'s> {
        let n = n.min(self.len);
        debug_assert!(self.source.is_char_boundary(self.start + n));

        Span {
            source: self.source,
            start: self.start + n,
            len: self.len - n,
        }
    }

    /// Keeps only the first `n` bytes. `n` is clamped to the length of the view.
    pub fn take(&self, n: usize) -> Span<'s> {
        let n = n.min(self.len);
        debug_assert!(self.source.is_char_boundary(self.start + n));

        Span {
            source: self.source,
            start: self.start,
            len: n,
        }
    }

    pub fn first_char(&self) -> Option<char> {
        self.as_str().chars().next()
    }

    pub fn starts_with(&self, prefix: &str) -> bool {
        self.as_str().starts_with(prefix)
    }

    pub fn ends_with(&self, suffix: &str) -> bool {
        self.as_str().ends_with(suffix)
    }

    /// Finds `pattern` at or after byte `from`, returning its offset relative
    /// to the start of this view.
    pub fn find_from(&self, pattern: &str, from: usize) -> Option<usize> {
        if from > self.len {
            return None;
        }

        self.as_str()[from..].find(pattern).map(|found| found + from)
    }
}

impl<'s> From<&'s str> for Span<'s> {
    fn from(source: &'s str) -> Self {
        Span::new(source)
    }
}

// Two views are equal when they cover the same text.
impl PartialEq for Span<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for Span<'_> {}

impl PartialEq<str> for Span<'_> {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Span<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl Display for Span<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
