//! Single character parsers.
//!
//! All of these are `filter`s over `any_char`, which consumes one `char`.

use crate::parser::Parser;

/// Consumes one character, failing only on empty input.
pub fn any_char() -> Parser<char> {
    Parser::new(|input| {
        Ok(input
            .first_char()
            .map(|c| (c, input.advance(c.len_utf8()))))
    })
}

pub fn character(expected: char) -> Parser<char> {
    any_char().filter(move |c| *c == expected)
}

/// Any character from `set`.
pub fn characters(set: &[char]) -> Parser<char> {
    let set = set.to_vec();
    any_char().filter(move |c| set.contains(c))
}

pub fn char_excluding(excluded: char) -> Parser<char> {
    any_char().filter(move |c| *c != excluded)
}

/// Any character not in `set`.
pub fn char_excluding_many(set: &[char]) -> Parser<char> {
    let set = set.to_vec();
    any_char().filter(move |c| !set.contains(c))
}

pub fn alpha() -> Parser<char> {
    any_char().filter(|c| c.is_alphabetic())
}

pub fn digit() -> Parser<char> {
    any_char().filter(|c| c.is_ascii_digit())
}

pub fn alpha_num() -> Parser<char> {
    any_char().filter(|c| c.is_alphabetic() || c.is_ascii_digit())
}

/// Space, tab or newline.
pub fn whitespace() -> Parser<char> {
    any_char().filter(|c| matches!(c, ' ' | '\t' | '\n'))
}

pub fn space() -> Parser<char> {
    character(' ')
}

pub fn tab() -> Parser<char> {
    character('\t')
}

pub fn newline() -> Parser<char> {
    character('\n')
}

pub fn left_paren() -> Parser<char> {
    character('(')
}

pub fn right_paren() -> Parser<char> {
    character(')')
}

pub fn left_curly() -> Parser<char> {
    character('{')
}

pub fn right_curly() -> Parser<char> {
    character('}')
}
