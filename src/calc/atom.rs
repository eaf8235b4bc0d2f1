use std::fmt::Display;

use lazy_static::lazy_static;

use crate::{
    ast::{
        ast::Expr,
        operators::{Assoc, Operator, OperatorTable},
    },
    builder::build_expression_parser,
    errors::errors::Error,
    parser::Parser,
    primitives::{alpha, parens, pos_num},
};

lazy_static! {
    pub static ref ARITHMETIC_TABLE: OperatorTable = vec![
        Operator::infix("=", "Assign", Assoc::Right),
        Operator::infix("+", "Add", Assoc::Left),
        Operator::infix("*", "Mul", Assoc::Left),
        Operator::prefix("++", "PreIncr"),
    ];
}

#[derive(PartialEq, Eq, Clone, Debug)]
pub enum Atom {
    Symbol(String),
    Number(i64),
}

impl Display for Atom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Atom::Symbol(name) => write!(f, "{}", name),
            Atom::Number(value) => write!(f, "{}", value),
        }
    }
}

/// Operand parser: a run of letters, or an integer that may be wrapped in
/// parentheses. Integers above `i64::MAX` do not parse.
pub fn atom() -> Parser<Atom> {
    let symbol = alpha()
        .one_or_more()
        .map_value(|letters| Atom::Symbol(letters.into_iter().collect()));
    let number = (pos_num() | parens(pos_num())).map(|value| i64::try_from(value).ok().map(Atom::Number));

    symbol | number
}

/// Parses a whole line of calculator input.
pub fn parse_arithmetic(input: &str) -> Result<Expr<Atom>, Error> {
    build_expression_parser(&ARITHMETIC_TABLE, atom()).parse_complete(input)
}
