use std::collections::HashMap;

use log::trace;

use crate::{
    ast::{ast::Expr, visitor::ExprVisitor},
    errors::errors::{Error, ErrorImpl},
};

use super::atom::Atom;

/// Variable bindings for one calculator session.
#[derive(Debug, Default, Clone)]
pub struct SymbolTable(HashMap<String, i64>);

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable(HashMap::new())
    }

    pub fn get(&self, symbol: &str) -> Option<i64> {
        self.0.get(symbol).copied()
    }

    pub fn set(&mut self, symbol: impl Into<String>, value: i64) {
        self.0.insert(symbol.into(), value);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Evaluates calculator trees against a symbol table. Arithmetic wraps on
/// overflow.
pub struct Evaluator<'t> {
    symbols: &'t mut SymbolTable,
}

impl<'t> Evaluator<'t> {
    pub fn new(symbols: &'t mut SymbolTable) -> Self {
        Evaluator { symbols }
    }

    fn lookup(&self, symbol: &str) -> Result<i64, Error> {
        self.symbols.get(symbol).ok_or_else(|| {
            Error::new(ErrorImpl::UndefinedSymbol {
                symbol: symbol.to_string(),
            })
        })
    }
}

fn unsupported(tag: &str) -> Error {
    Error::new(ErrorImpl::UnsupportedOperator { tag: tag.to_string() })
}

impl ExprVisitor<Atom> for Evaluator<'_> {
    type Output = Result<i64, Error>;

    fn visit_leaf(&mut self, value: &Atom) -> Self::Output {
        match value {
            Atom::Symbol(symbol) => self.lookup(symbol),
            Atom::Number(number) => Ok(*number),
        }
    }

    fn visit_prefix(&mut self, tag: &str, child: &Expr<Atom>) -> Self::Output {
        if tag != "PreIncr" {
            return Err(unsupported(tag));
        }

        let value = child.accept(self)?.wrapping_add(1);
        if let Some(Atom::Symbol(symbol)) = child.as_leaf() {
            trace!("evaluate: {} incremented to {}", symbol, value);
            self.symbols.set(symbol.as_str(), value);
        }

        Ok(value)
    }

    fn visit_infix(&mut self, tag: &str, left: &Expr<Atom>, right: &Expr<Atom>) -> Self::Output {
        match tag {
            "Assign" => {
                let Some(Atom::Symbol(symbol)) = left.as_leaf() else {
                    return Err(Error::new(ErrorImpl::InvalidAssignmentTarget));
                };
                let value = right.accept(self)?;

                trace!("evaluate: {} = {}", symbol, value);
                self.symbols.set(symbol.as_str(), value);
                Ok(value)
            }
            "Add" => Ok(left.accept(self)?.wrapping_add(right.accept(self)?)),
            "Mul" => Ok(left.accept(self)?.wrapping_mul(right.accept(self)?)),
            _ => Err(unsupported(tag)),
        }
    }

    fn visit_postfix(&mut self, tag: &str, _child: &Expr<Atom>) -> Self::Output {
        Err(unsupported(tag))
    }
}

/// Evaluates `tree`, reading and updating `symbols`.
pub fn evaluate(tree: &Expr<Atom>, symbols: &mut SymbolTable) -> Result<i64, Error> {
    tree.accept(&mut Evaluator::new(symbols))
}
