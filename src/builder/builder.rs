use std::sync::Arc;

use log::{debug, trace};

use crate::{
    ast::{
        ast::Expr,
        operators::{Assoc, Fixity, Operator},
    },
    parser::Parser,
    ParseResult, Span,
};

/// Builds an expression tree for `input` from an operator table ordered from
/// the loosest binding operator to the tightest.
///
/// Every table entry is tried in order and the first one that produces a tree
/// wins. When none does, `leaf` is run on the whole input. Leftover input is
/// handed back like any other parser; the builder never requires the input
/// to be fully consumed.
pub fn build_expr<'s, T: 'static>(table: &[Operator], leaf: &Parser<T>, input: Span<'s>) -> ParseResult<'s, Expr<T>> {
    trace!("build_expr: {} operator(s) on {:?}", table.len(), input.as_str());

    for (index, operator) in table.iter().enumerate() {
        if operator.token.is_empty() {
            debug!("build_expr: skipping {} with an empty token", operator.tag);
            continue;
        }

        let built = match operator.fixity {
            Fixity::Prefix => build_prefix(table, index, leaf, input)?,
            Fixity::Postfix => build_postfix(table, index, leaf, input)?,
            Fixity::Infix => build_infix(table, index, leaf, input)?,
        };

        if built.is_some() {
            return Ok(built);
        }
    }

    trace!("build_expr: no operator matched, falling back to leaf on {:?}", input.as_str());
    Ok(leaf.attempt(input)?.map(|(value, rest)| (Expr::Leaf(value), rest)))
}

// Operand is built with the current entry and all tighter ones, so the same
// prefix may stack: `++++x`.
fn build_prefix<'s, T: 'static>(
    table: &[Operator],
    index: usize,
    leaf: &Parser<T>,
    input: Span<'s>,
) -> ParseResult<'s, Expr<T>> {
    let operator = &table[index];
    if !input.starts_with(&operator.token) {
        return Ok(None);
    }

    let Some((child, rest)) = build_expr(&table[index..], leaf, input.advance(operator.token.len()))? else {
        return Ok(None);
    };

    Ok(Some((Expr::prefix(operator.tag.clone(), child), rest)))
}

// The operand is everything before the trailing token and must be consumed
// completely, so the remainder of a postfix node is always empty.
fn build_postfix<'s, T: 'static>(
    table: &[Operator],
    index: usize,
    leaf: &Parser<T>,
    input: Span<'s>,
) -> ParseResult<'s, Expr<T>> {
    let operator = &table[index];
    if !input.ends_with(&operator.token) {
        return Ok(None);
    }

    let operand = input.take(input.len() - operator.token.len());
    let Some((child, rest)) = build_expr(&table[index + 1..], leaf, operand)? else {
        return Ok(None);
    };

    if !rest.is_empty() {
        trace!("build_postfix: {} operand left {:?} unconsumed", operator.tag, rest.as_str());
        return Ok(None);
    }

    Ok(Some((Expr::postfix(operator.tag.clone(), child), input.advance(input.len()))))
}

fn build_infix<'s, T: 'static>(
    table: &[Operator],
    index: usize,
    leaf: &Parser<T>,
    input: Span<'s>,
) -> ParseResult<'s, Expr<T>> {
    let operator = &table[index];
    let mut from = 0;

    while let Some(found) = input.find_from(&operator.token, from) {
        // The next search starts one char past this occurrence.
        from = found + input.advance(found).first_char().map_or(1, char::len_utf8);

        trace!("build_infix: trying {} at offset {}", operator.tag, input.offset() + found);

        // Only tighter operators may split the left operand.
        let Some((left, left_rest)) = build_expr(&table[index + 1..], leaf, input.take(found))? else {
            continue;
        };
        if !left_rest.is_empty() {
            continue;
        }

        let Some((right, rest)) = build_expr(&table[index..], leaf, input.advance(found + operator.token.len()))? else {
            continue;
        };

        let tree = if operator.assoc == Assoc::Left && right.is_infix_tagged(&operator.tag) {
            trace!("build_infix: regrouping {} chain to the left", operator.tag);
            graft_leftmost(left, right, &operator.tag)
        } else {
            Expr::infix(operator.tag.clone(), left, right)
        };

        return Ok(Some((tree, rest)));
    }

    Ok(None)
}

/// Attaches `left` below the leftmost node of the `tag` chain at the root of
/// `right`.
///
/// `a` grafted onto `(b+c)+d` gives `((a+b)+c)+d`. Bracketed groups reach the
/// builder as leaves and are never entered.
fn graft_leftmost<T>(left: Expr<T>, right: Expr<T>, tag: &str) -> Expr<T> {
    match right {
        Expr::Infix {
            tag: own,
            left: inner,
            right: outer,
        } if own == tag => Expr::Infix {
            tag: own,
            left: Box::new(graft_leftmost(left, *inner, tag)),
            right: outer,
        },
        operand => Expr::infix(tag, left, operand),
    }
}

/// Wraps `build_expr` as a parser.
///
/// The table is copied into the parser, which can then be cloned and shared
/// like any other.
pub fn build_expression_parser<T: 'static>(table: &[Operator], leaf: Parser<T>) -> Parser<Expr<T>> {
    let table: Arc<[Operator]> = table.into();

    Parser::new(move |input| build_expr(&table, &leaf, input))
}
