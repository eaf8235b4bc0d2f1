//! Utility macros for composing parsers.
//!
//! This module defines variadic forms of the sequencing and choice
//! combinators:
//!
//! - `zip_many!` - Runs parsers in sequence, yielding a flat tuple
//! - `zip_and_get!` - Runs parsers in sequence, keeping one value
//! - `one_of!` - Tries parsers in order, keeping the first success
//!
//! Each takes parsers by value; clone a parser to reuse it.

/// Runs up to eight parsers in sequence and yields a flat tuple of their
/// values.
///
/// # Arguments
///
/// * `$parser` - The parsers, in order
///
/// # Example
///
/// ```ignore
/// let parser = zip_many!(alpha(), digit(), alpha());
/// assert_eq!(parser.parse("a1b").unwrap(), Some((('a', '1', 'b'), "")));
/// ```
#[macro_export]
macro_rules! zip_many {
    ($($parser:expr),+ $(,)?) => {
        $crate::parser::combinators::Sequence::sequence(($($parser,)+))
    };
}

/// Runs parsers in sequence and yields only the value at position `$index`.
///
/// # Arguments
///
/// * `$index` - Zero based position of the value to keep
/// * `$parser` - The parsers, in order
///
/// # Example
///
/// ```ignore
/// let parser = zip_and_get!(1; character('('), pos_num(), character(')'));
/// assert_eq!(parser.parse("(7)").unwrap(), Some((7, "")));
/// ```
#[macro_export]
macro_rules! zip_and_get {
    ($index:tt; $($parser:expr),+ $(,)?) => {
        $crate::zip_many!($($parser),+).map_value(|values| values.$index)
    };
}

/// Tries each parser on the same input and keeps the first that matches.
///
/// # Arguments
///
/// * `$first`, `$rest` - The alternatives, in priority order
///
/// # Example
///
/// ```ignore
/// let parser = one_of!(digit(), alpha(), character('.'));
/// assert_eq!(parser.parse(".a").unwrap(), Some(('.', "a")));
/// ```
#[macro_export]
macro_rules! one_of {
    ($first:expr $(, $rest:expr)* $(,)?) => {
        $first$(.or($rest))*
    };
}
