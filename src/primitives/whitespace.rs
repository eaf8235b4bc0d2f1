use lazy_static::lazy_static;

use crate::{parser::Parser, zip_and_get};

use super::chars::whitespace;

lazy_static! {
    static ref WHITESPACE_RUN: Parser<Vec<char>> = whitespace().zero_or_more();
}

/// Skips any whitespace before `parser`.
pub fn skip_pre_whitespace<T: 'static>(parser: Parser<T>) -> Parser<T> {
    zip_and_get!(1; WHITESPACE_RUN.clone(), parser)
}

/// Skips any whitespace after `parser`.
pub fn skip_post_whitespace<T: 'static>(parser: Parser<T>) -> Parser<T> {
    zip_and_get!(0; parser, WHITESPACE_RUN.clone())
}

/// Skips any whitespace on both sides of `parser`.
pub fn skip_surr_whitespace<T: 'static>(parser: Parser<T>) -> Parser<T> {
    zip_and_get!(1; WHITESPACE_RUN.clone(), parser, WHITESPACE_RUN.clone())
}
