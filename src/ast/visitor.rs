//! Traversal over expression trees.
//!
//! Evaluators and printers implement `ExprVisitor`; each handler is given
//! the node's tag and its child subtree(s) and decides itself whether and
//! when to descend (by calling `accept` on a child).

use std::fmt::Display;

use super::{
    ast::Expr,
    operators::{token_for, Fixity, Operator},
};

pub trait ExprVisitor<T> {
    type Output;

    fn visit_leaf(&mut self, value: &T) -> Self::Output;
    fn visit_prefix(&mut self, tag: &str, child: &Expr<T>) -> Self::Output;
    fn visit_infix(&mut self, tag: &str, left: &Expr<T>, right: &Expr<T>) -> Self::Output;
    fn visit_postfix(&mut self, tag: &str, child: &Expr<T>) -> Self::Output;
}

impl<T> Expr<T> {
    /// Dispatches to the visitor handler for this node's kind.
    pub fn accept<V: ExprVisitor<T>>(&self, visitor: &mut V) -> V::Output {
        match self {
            Expr::Leaf(value) => visitor.visit_leaf(value),
            Expr::Prefix { tag, child } => visitor.visit_prefix(tag, child),
            Expr::Infix { tag, left, right } => visitor.visit_infix(tag, left, right),
            Expr::Postfix { tag, child } => visitor.visit_postfix(tag, child),
        }
    }

    /// Renders the tree as fully parenthesized source text, writing each
    /// operator with its token from `table`.
    ///
    /// Leaves are written bare, every operator node is wrapped in one pair of
    /// parentheses: `((1+2)*3)`.
    pub fn to_bracketed(&self, table: &[Operator]) -> String
    where
        T: Display,
    {
        self.accept(&mut BracketedPrinter { table })
    }
}

/// Renders trees as fully parenthesized source text. A tag missing from the
/// table is written as the tag itself.
pub struct BracketedPrinter<'t> {
    pub table: &'t [Operator],
}

impl BracketedPrinter<'_> {
    fn token<'a>(&'a self, tag: &'a str, fixity: Fixity) -> &'a str {
        token_for(self.table, tag, fixity).unwrap_or(tag)
    }
}

impl<T: Display> ExprVisitor<T> for BracketedPrinter<'_> {
    type Output = String;

    fn visit_leaf(&mut self, value: &T) -> String {
        value.to_string()
    }

    fn visit_prefix(&mut self, tag: &str, child: &Expr<T>) -> String {
        let child = child.accept(self);
        format!("({}{})", self.token(tag, Fixity::Prefix), child)
    }

    fn visit_infix(&mut self, tag: &str, left: &Expr<T>, right: &Expr<T>) -> String {
        let left = left.accept(self);
        let right = right.accept(self);
        format!("({}{}{})", left, self.token(tag, Fixity::Infix), right)
    }

    fn visit_postfix(&mut self, tag: &str, child: &Expr<T>) -> String {
        let child = child.accept(self);
        format!("({}{})", child, self.token(tag, Fixity::Postfix))
    }
}
