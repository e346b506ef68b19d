use crate::ast::{fmt::Latex, provenance::Provenance, Expression};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A unary minus applied to an expression, such as `-x` or `-(a + b)`.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Negation {
    /// The negated expression.
    pub body: Box<Expression>,

    /// The parse-tree fragment this negation was built from.
    pub provenance: Option<Provenance>,
}

impl Negation {
    /// Creates a negation with no provenance.
    pub fn new(body: impl Into<Expression>) -> Self {
        Self {
            body: Box::new(body.into()),
            provenance: None,
        }
    }

    /// Returns true if the body must be parenthesized. Without parentheses, the `-` would bind to
    /// the first operand of a sequence only, and `--x` does not parse.
    fn body_needs_parens(&self) -> bool {
        matches!(&*self.body, Expression::Negation(_) | Expression::Sequence(_))
    }
}

impl fmt::Display for Negation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.body_needs_parens() {
            write!(f, "-({})", self.body)
        } else {
            write!(f, "-{}", self.body)
        }
    }
}

impl Latex for Negation {
    fn fmt_latex(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.body_needs_parens() {
            write!(f, "-\\left(")?;
            self.body.fmt_latex(f)?;
            write!(f, "\\right)")
        } else {
            write!(f, "-")?;
            self.body.fmt_latex(f)
        }
    }
}
