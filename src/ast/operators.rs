use std::fmt::Display;

/// Where an operator sits relative to its operand(s).
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub enum Fixity {
    Prefix,
    Infix,
    Postfix,
}

/// How a chain of the same infix operator groups.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub enum Assoc {
    Left,
    Right,
}

/// Operator Descriptor
///
/// Describes one row of an operator table: the literal `token` to look for in
/// the input, the `tag` the resulting tree node carries, and how it attaches.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Operator {
    pub token: String,
    pub tag: String,
    pub fixity: Fixity,
    pub assoc: Assoc,
}

impl Operator {
    pub fn new(token: impl Into<String>, tag: impl Into<String>, fixity: Fixity, assoc: Assoc) -> Self {
        Operator {
            token: token.into(),
            tag: tag.into(),
            fixity,
            assoc,
        }
    }

    pub fn prefix(token: impl Into<String>, tag: impl Into<String>) -> Self {
        Operator::new(token, tag, Fixity::Prefix, Assoc::Right)
    }

    pub fn infix(token: impl Into<String>, tag: impl Into<String>, assoc: Assoc) -> Self {
        Operator::new(token, tag, Fixity::Infix, assoc)
    }

    pub fn postfix(token: impl Into<String>, tag: impl Into<String>) -> Self {
        Operator::new(token, tag, Fixity::Postfix, Assoc::Left)
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}({:?}, {}, {:?})", self.fixity, self.token, self.tag, self.assoc)
    }
}

/// Operator descriptors ordered from the loosest binding to the tightest.
pub type OperatorTable = Vec<Operator>;

/// Looks up the token written for `tag` with the given fixity.
pub fn token_for<'t>(table: &'t [Operator], tag: &str, fixity: Fixity) -> Option<&'t str> {
    table
        .iter()
        .find(|operator| operator.tag == tag && operator.fixity == fixity)
        .map(|operator| operator.token.as_str())
}
