//! Unit tests for the expression tree and operator tables.

use super::{
    ast::Expr,
    operators::{token_for, Assoc, Fixity, Operator},
    visitor::ExprVisitor,
};

fn table() -> Vec<Operator> {
    vec![
        Operator::infix("+", "Add", Assoc::Left),
        Operator::prefix("-", "Neg"),
        Operator::postfix("!", "Fact"),
    ]
}

#[test]
fn test_operator_constructors() {
    let add = Operator::infix("+", "Add", Assoc::Left);

    assert_eq!(add.fixity, Fixity::Infix);
    assert_eq!(add.assoc, Assoc::Left);
    assert_eq!(Operator::prefix("-", "Neg").fixity, Fixity::Prefix);
    assert_eq!(Operator::postfix("!", "Fact").fixity, Fixity::Postfix);
}

#[test]
fn test_token_lookup() {
    let table = table();

    assert_eq!(token_for(&table, "Add", Fixity::Infix), Some("+"));
    assert_eq!(token_for(&table, "Add", Fixity::Prefix), None);
    assert_eq!(token_for(&table, "Missing", Fixity::Infix), None);
}

#[test]
fn test_inspection() {
    let tree = Expr::infix("Add", Expr::leaf(1), Expr::prefix("Neg", Expr::leaf(2)));

    assert_eq!(tree.tag(), Some("Add"));
    assert_eq!(tree.fixity(), Some(Fixity::Infix));
    assert_eq!(tree.children().len(), 2);
    assert!(!tree.is_leaf());
    assert!(tree.is_infix_tagged("Add"));
    assert!(!tree.is_infix_tagged("Mul"));
    assert_eq!(tree.depth(), 3);

    let leaf = Expr::leaf(5);
    assert_eq!(leaf.tag(), None);
    assert_eq!(leaf.as_leaf(), Some(&5));
    assert!(leaf.children().is_empty());
}

#[test]
fn test_map_leaves() {
    let tree = Expr::infix("Add", Expr::leaf(1), Expr::postfix("Fact", Expr::leaf(2)));

    assert_eq!(
        tree.map_leaves(&|value| value * 10),
        Expr::infix("Add", Expr::leaf(10), Expr::postfix("Fact", Expr::leaf(20)))
    );
}

#[test]
fn test_flatten() {
    let nested = Expr::infix("Add", Expr::leaf(Expr::infix("Add", Expr::leaf(1), Expr::leaf(2))), Expr::leaf(Expr::leaf(3)));

    assert_eq!(
        nested.flatten(),
        Expr::infix("Add", Expr::infix("Add", Expr::leaf(1), Expr::leaf(2)), Expr::leaf(3))
    );
}

#[test]
fn test_display() {
    let tree = Expr::infix("Add", Expr::leaf(1), Expr::prefix("Neg", Expr::leaf(2)));

    assert_eq!(tree.to_string(), "( Add ( 1 ) ( Neg ( 2 ) ) )");
}

#[test]
fn test_to_bracketed() {
    let table = table();
    let tree = Expr::infix(
        "Add",
        Expr::prefix("Neg", Expr::leaf(1)),
        Expr::postfix("Fact", Expr::leaf(2)),
    );

    assert_eq!(tree.to_bracketed(&table), "((-1)+(2!))");
    assert_eq!(Expr::leaf(7).to_bracketed(&table), "7");
}

#[test]
fn test_to_bracketed_unknown_tag() {
    let tree = Expr::infix("Mul", Expr::leaf(1), Expr::leaf(2));

    assert_eq!(tree.to_bracketed(&table()), "(1Mul2)");
}

struct LeafCounter;

impl ExprVisitor<i32> for LeafCounter {
    type Output = usize;

    fn visit_leaf(&mut self, _value: &i32) -> usize {
        1
    }

    fn visit_prefix(&mut self, _tag: &str, child: &Expr<i32>) -> usize {
        child.accept(self)
    }

    fn visit_infix(&mut self, _tag: &str, left: &Expr<i32>, right: &Expr<i32>) -> usize {
        left.accept(self) + right.accept(self)
    }

    fn visit_postfix(&mut self, _tag: &str, child: &Expr<i32>) -> usize {
        child.accept(self)
    }
}

#[test]
fn test_visitor() {
    let tree = Expr::infix(
        "Add",
        Expr::infix("Add", Expr::leaf(1), Expr::leaf(2)),
        Expr::prefix("Neg", Expr::leaf(3)),
    );

    assert_eq!(tree.accept(&mut LeafCounter), 3);
}
