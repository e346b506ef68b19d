use crate::ast::{fmt::Latex, provenance::Provenance, Expression};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A function application, such as `DiracDelta[x - 1]`.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Function {
    /// Identifier before the `[`.
    pub name: String,

    /// The argument the function is applied to.
    pub body: Box<Expression>,

    /// The parse-tree fragment this application was built from.
    pub provenance: Option<Provenance>,
}

impl Function {
    /// Creates a function application with no provenance.
    pub fn new(name: impl Into<String>, body: impl Into<Expression>) -> Self {
        Self {
            name: name.into(),
            body: Box::new(body.into()),
            provenance: None,
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}[{}]", self.name, self.body)
    }
}

impl Latex for Function {
    fn fmt_latex(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "\\mathrm{{{}}}\\left(", self.name)?;
        self.body.fmt_latex(f)?;
        write!(f, "\\right)")
    }
}
