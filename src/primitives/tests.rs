//! Unit tests for the primitive parser library.

use regex::Regex;

use super::*;

#[test]
fn test_digit_parser() {
    let parser = digit();

    assert_eq!(parser.parse("12").unwrap(), Some(('1', "2")));
    assert_eq!(parser.parse("2").unwrap(), Some(('2', "")));
    assert_eq!(parser.parse("").unwrap(), None);
}

#[test]
fn test_any_char_multibyte() {
    assert_eq!(any_char().parse("éa").unwrap(), Some(('é', "a")));
    assert_eq!(any_char().parse("").unwrap(), None);
}

#[test]
fn test_character_classes() {
    assert_eq!(alpha().parse("a1").unwrap(), Some(('a', "1")));
    assert_eq!(alpha().parse("1a").unwrap(), None);
    assert_eq!(alpha_num().parse("1a").unwrap(), Some(('1', "a")));
    assert_eq!(alpha_num().parse("_").unwrap(), None);
}

#[test]
fn test_bracket_characters() {
    assert_eq!(left_curly().parse("{)").unwrap(), Some(('{', ")")));
    assert_eq!(left_curly().parse(")").unwrap(), None);
    assert_eq!(right_curly().parse("}").unwrap(), Some(('}', "")));
    assert_eq!(left_paren().parse("(").unwrap(), Some(('(', "")));
    assert_eq!(right_paren().parse(")x").unwrap(), Some((')', "x")));
}

#[test]
fn test_whitespace_characters() {
    assert_eq!(whitespace().parse("\tx").unwrap(), Some(('\t', "x")));
    assert_eq!(whitespace().parse("x").unwrap(), None);
    assert_eq!(space().parse(" ").unwrap(), Some((' ', "")));
    assert_eq!(space().parse("\t").unwrap(), None);
    assert_eq!(tab().parse("\t").unwrap(), Some(('\t', "")));
    assert_eq!(newline().parse("\n\n").unwrap(), Some(('\n', "\n")));
}

#[test]
fn test_character_sets() {
    assert_eq!(char_excluding(']').parse("]Hi").unwrap(), None);
    assert_eq!(char_excluding(']').parse("Hi").unwrap(), Some(('H', "i")));

    assert_eq!(char_excluding_many(&['[', ']']).parse("[Hi").unwrap(), None);
    assert_eq!(char_excluding_many(&['[', ']']).parse("Hi").unwrap(), Some(('H', "i")));

    assert_eq!(characters(&['a', 'b', 'c']).parse("ab").unwrap(), Some(('a', "b")));
    assert_eq!(characters(&['a', 'b', 'c']).parse("db").unwrap(), None);
}

#[test]
fn test_string_literal() {
    assert_eq!(string("let").parse("let x").unwrap(), Some(("let".to_string(), " x")));
    assert_eq!(string("let").parse("le").unwrap(), None);
}

#[test]
fn test_pattern_is_anchored() {
    let ident = pattern(Regex::new("[a-zA-Z_][a-zA-Z0-9_]*").unwrap());

    assert_eq!(ident.parse("foo_1 + 2").unwrap(), Some(("foo_1".to_string(), " + 2")));
    assert_eq!(ident.parse("1 foo").unwrap(), None);
}

#[test]
fn test_end() {
    assert_eq!(end().parse("").unwrap(), Some((true, "")));
    assert_eq!(end().parse("a").unwrap(), Some((false, "a")));
}

#[test]
fn test_positive_number() {
    assert_eq!(pos_num().parse("123a").unwrap(), Some((123, "a")));
    assert_eq!(pos_num().parse("a").unwrap(), None);
    assert_eq!(pos_num().parse("-1").unwrap(), None);
}

#[test]
fn test_positive_number_overflow() {
    assert_eq!(pos_num().parse("18446744073709551615").unwrap(), Some((u64::MAX, "")));
    assert_eq!(pos_num().parse("18446744073709551616").unwrap(), None);
}

#[test]
fn test_signed_number() {
    assert_eq!(num().parse("-42x").unwrap(), Some((-42, "x")));
    assert_eq!(num().parse("42").unwrap(), Some((42, "")));
    assert_eq!(num().parse("-x").unwrap(), None);
    assert_eq!(num().parse("-9223372036854775808").unwrap(), Some((i64::MIN, "")));
    assert_eq!(num().parse("9223372036854775808").unwrap(), None);
}

#[test]
fn test_whitespace_skipping() {
    assert_eq!(skip_surr_whitespace(alpha()).parse("    a  ").unwrap(), Some(('a', "")));
    assert_eq!(skip_pre_whitespace(alpha()).parse("    a  ").unwrap(), Some(('a', "  ")));
    assert_eq!(skip_post_whitespace(alpha()).parse("a \n b").unwrap(), Some(('a', "b")));
    assert_eq!(skip_pre_whitespace(alpha()).parse("  1").unwrap(), None);
}

#[test]
fn test_inside_brackets() {
    assert_eq!(parens(pos_num()).parse("(12)").unwrap(), Some((12, "")));
    assert_eq!(curlies(pos_num()).parse("{12}").unwrap(), Some((12, "")));
    assert_eq!(square_braces(pos_num()).parse("[12]+1").unwrap(), Some((12, "+1")));
}

#[test]
fn test_inside_brackets_unbalanced() {
    assert_eq!(parens(pos_num()).parse("(12").unwrap(), None);
    assert_eq!(parens(pos_num()).parse("12)").unwrap(), None);
    assert_eq!(parens(pos_num()).parse("").unwrap(), None);
}

#[test]
fn test_inside_brackets_requires_full_interior() {
    assert_eq!(parens(pos_num()).parse("(1+2)").unwrap(), None);
    assert_eq!(parens(pos_num()).parse("()").unwrap(), None);
}

#[test]
fn test_inside_brackets_nesting() {
    let nested = parens(parens(pos_num()));
    assert_eq!(nested.parse("((7))").unwrap(), Some((7, "")));

    // Only the same bracket kind is counted.
    let interior = char_excluding(')').zero_or_more();
    assert_eq!(parens(interior.clone()).parse("([)]").unwrap(), Some((vec!['['], "]")));
    assert_eq!(
        parens(char_excluding('#').zero_or_more()).parse("(a(b)c)d").unwrap(),
        Some((vec!['a', '(', 'b', ')', 'c'], "d"))
    );
}

#[test]
fn test_same_opening_and_closing() {
    let quoted = inside_matching_pair(alpha().zero_or_more(), '"', '"');

    assert_eq!(quoted.parse("\"ab\" rest").unwrap(), Some((vec!['a', 'b'], " rest")));
}
