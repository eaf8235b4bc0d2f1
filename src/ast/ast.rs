use std::fmt::{self, Display};

use super::operators::Fixity;

/// Expression Tree
///
/// A leaf holding an operand of type `T`, or an operator node tagged with the
/// operation it stands for. Every node owns its children outright.
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum Expr<T> {
    Leaf(T),
    Prefix { tag: String, child: Box<Expr<T>> },
    Infix { tag: String, left: Box<Expr<T>>, right: Box<Expr<T>> },
    Postfix { tag: String, child: Box<Expr<T>> },
}

impl<T> Expr<T> {
    pub fn leaf(value: T) -> Self {
        Expr::Leaf(value)
    }

    pub fn prefix(tag: impl Into<String>, child: Expr<T>) -> Self {
        Expr::Prefix {
            tag: tag.into(),
            child: Box::new(child),
        }
    }

    pub fn infix(tag: impl Into<String>, left: Expr<T>, right: Expr<T>) -> Self {
        Expr::Infix {
            tag: tag.into(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn postfix(tag: impl Into<String>, child: Expr<T>) -> Self {
        Expr::Postfix {
            tag: tag.into(),
            child: Box::new(child),
        }
    }

    /// The operator tag, `None` for leaves.
    pub fn tag(&self) -> Option<&str> {
        match self {
            Expr::Leaf(_) => None,
            Expr::Prefix { tag, .. } | Expr::Infix { tag, .. } | Expr::Postfix { tag, .. } => Some(tag.as_str()),
        }
    }

    /// The fixity of the root operator, `None` for leaves.
    pub fn fixity(&self) -> Option<Fixity> {
        match self {
            Expr::Leaf(_) => None,
            Expr::Prefix { .. } => Some(Fixity::Prefix),
            Expr::Infix { .. } => Some(Fixity::Infix),
            Expr::Postfix { .. } => Some(Fixity::Postfix),
        }
    }

    /// Direct children, left to right.
    pub fn children(&self) -> Vec<&Expr<T>> {
        match self {
            Expr::Leaf(_) => vec![],
            Expr::Prefix { child, .. } | Expr::Postfix { child, .. } => vec![child.as_ref()],
            Expr::Infix { left, right, .. } => vec![left.as_ref(), right.as_ref()],
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Expr::Leaf(_))
    }

    pub fn as_leaf(&self) -> Option<&T> {
        match self {
            Expr::Leaf(value) => Some(value),
            _ => None,
        }
    }

    /// True when the root is an infix node tagged `tag`.
    pub fn is_infix_tagged(&self, tag: &str) -> bool {
        matches!(self, Expr::Infix { tag: own, .. } if own == tag)
    }

    /// Height of the tree; a lone leaf has depth 1.
    pub fn depth(&self) -> usize {
        1 + self
            .children()
            .into_iter()
            .map(Expr::depth)
            .max()
            .unwrap_or(0)
    }

    /// Rebuilds the tree with every leaf value transformed by `f`.
    pub fn map_leaves<U, F>(self, f: &F) -> Expr<U>
    where
        F: Fn(T) -> U,
    {
        match self {
            Expr::Leaf(value) => Expr::Leaf(f(value)),
            Expr::Prefix { tag, child } => Expr::prefix(tag, (*child).map_leaves(f)),
            Expr::Infix { tag, left, right } => Expr::infix(tag, (*left).map_leaves(f), (*right).map_leaves(f)),
            Expr::Postfix { tag, child } => Expr::postfix(tag, (*child).map_leaves(f)),
        }
    }
}

impl<T> Expr<Expr<T>> {
    /// Splices trees stored in leaves into the surrounding tree.
    ///
    /// A leaf parser that parses a bracketed sub-expression yields
    /// `Expr<Expr<T>>`; flattening removes that extra layer.
    pub fn flatten(self) -> Expr<T> {
        match self {
            Expr::Leaf(inner) => inner,
            Expr::Prefix { tag, child } => Expr::prefix(tag, (*child).flatten()),
            Expr::Infix { tag, left, right } => Expr::infix(tag, (*left).flatten(), (*right).flatten()),
            Expr::Postfix { tag, child } => Expr::postfix(tag, (*child).flatten()),
        }
    }
}

// ( Add ( 1 ) ( 2 ) )
impl<T: Display> Display for Expr<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "( ")?;
        match self {
            Expr::Leaf(value) => write!(f, "{}", value)?,
            Expr::Prefix { tag, child } | Expr::Postfix { tag, child } => write!(f, "{} {}", tag, child)?,
            Expr::Infix { tag, left, right } => write!(f, "{} {} {}", tag, left, right)?,
        }
        write!(f, " )")
    }
}
