use crate::{
    ast::{fmt::Latex, provenance::Provenance, Expression},
    parser::syntax::Rule,
    tokenizer::TokenKind,
};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OperationMethod {
    /// `^`
    Power,

    /// `/`
    Divide,

    /// `*`
    Multiply,

    /// `+`
    Add,

    /// `-`
    Subtract,
}

impl OperationMethod {
    /// Returns the priority of the operator. Operators with higher priority bind more tightly.
    pub fn priority(self) -> u8 {
        match self {
            Self::Power => 5,
            Self::Divide => 4,
            Self::Multiply => 3,
            Self::Add | Self::Subtract => 2,
        }
    }

    /// Returns the symbol of the operator.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Power => "^",
            Self::Divide => "/",
            Self::Multiply => "*",
            Self::Add => "+",
            Self::Subtract => "-",
        }
    }

    /// Returns the operator a token represents, if any.
    pub fn from_token(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Exp => Some(Self::Power),
            TokenKind::Div => Some(Self::Divide),
            TokenKind::Mul => Some(Self::Multiply),
            TokenKind::Add => Some(Self::Add),
            TokenKind::Sub => Some(Self::Subtract),
            _ => None,
        }
    }

    /// Returns the chain rule of the grammar that consumes this operator.
    pub fn rule(self) -> Rule {
        match self {
            Self::Power => Rule::Power,
            Self::Divide => Rule::Divide,
            Self::Multiply => Rule::Multiply,
            Self::Add | Self::Subtract => Rule::Additive,
        }
    }

    /// Writes the operator with the spacing used between operands. `^` binds tightly and is
    /// written without spaces.
    fn fmt_spaced(self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Power => f.write_str("^"),
            _ => write!(f, " {} ", self.symbol()),
        }
    }
}

impl fmt::Display for OperationMethod {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// One link of a [`Sequence`]: an operator and the operand to its right.
///
/// The first operation of a sequence has no operator; it only carries the seed operand.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Operation {
    /// The operator, absent only for the first operation of a sequence.
    pub method: Option<OperationMethod>,

    /// The operand to the right of the operator.
    pub operand: Box<Expression>,

    /// The parse-tree fragment this operation was built from.
    pub provenance: Option<Provenance>,
}

impl Operation {
    /// Creates an operation with no provenance.
    pub fn new(method: Option<OperationMethod>, operand: impl Into<Expression>) -> Self {
        Self {
            method,
            operand: Box::new(operand.into()),
            provenance: None,
        }
    }

    /// Writes the operation as part of a sequence with the given priority.
    fn fmt_within(&self, f: &mut fmt::Formatter, enclosing: Option<u8>) -> fmt::Result {
        if let Some(method) = self.method {
            method.fmt_spaced(f)?;
        }

        if self.operand.needs_parens_within(enclosing) {
            write!(f, "({})", self.operand)
        } else {
            write!(f, "{}", self.operand)
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.fmt_within(f, self.method.map(OperationMethod::priority))
    }
}

impl Latex for Operation {
    fn fmt_latex(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.method {
            Some(OperationMethod::Power) => write!(f, "^{{{}}}", self.operand.as_display()),
            Some(OperationMethod::Multiply) => write!(f, " \\cdot {}", self.operand.as_display()),
            Some(method) => write!(f, " {} {}", method, self.operand.as_display()),
            None => self.operand.fmt_latex(f),
        }
    }
}

/// A left-to-right chain of operations at one precedence level, such as `a + b - c`.
///
/// The first operation never has a method; every following one does.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Sequence {
    /// The operations, in source order.
    pub operations: Vec<Operation>,

    /// The parse-tree fragment this sequence was built from.
    pub provenance: Option<Provenance>,
}

impl Sequence {
    /// Creates a sequence from a seed operand followed by `(operator, operand)` pairs.
    pub fn new<I, E>(first: impl Into<Expression>, rest: I) -> Self
    where
        I: IntoIterator<Item = (OperationMethod, E)>,
        E: Into<Expression>,
    {
        let operations = std::iter::once(Operation::new(None, first))
            .chain(rest.into_iter().map(|(method, operand)| Operation::new(Some(method), operand)))
            .collect();
        Self { operations, provenance: None }
    }

    /// Returns the priority of the sequence, which is that of its loosest operator.
    ///
    /// A sequence with no operator groups nothing itself, so it takes the priority of its lone
    /// operand. Returns [`None`] if that operand is not a sequence either.
    pub fn priority(&self) -> Option<u8> {
        self.operator_priority().or_else(|| {
            match self.operations.first().map(|operation| &*operation.operand) {
                Some(Expression::Sequence(inner)) => inner.priority(),
                _ => None,
            }
        })
    }

    /// Priority of the loosest operator written between this sequence's own operands.
    fn operator_priority(&self) -> Option<u8> {
        self.methods().map(OperationMethod::priority).min()
    }

    /// Returns the operators of the sequence, in order.
    pub fn methods(&self) -> impl Iterator<Item = OperationMethod> + '_ {
        self.operations.iter().filter_map(|operation| operation.method)
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let priority = self.operator_priority();
        for operation in &self.operations {
            operation.fmt_within(f, priority)?;
        }
        Ok(())
    }
}

/// Renders operand groupings with `\left(..\right)`, powers as superscripts and divisions as
/// nested fractions.
impl Latex for Sequence {
    fn fmt_latex(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let priority = self.operator_priority();
        let operand = |expr: &Expression| {
            if expr.needs_parens_within(priority) {
                format!("\\left({}\\right)", expr.as_display())
            } else {
                expr.as_display().to_string()
            }
        };

        let mut operations = self.operations.iter().peekable();
        let Some(first) = operations.next() else {
            return Ok(());
        };

        // the numerator of a fraction is already grouped
        let mut out = match operations.peek().and_then(|next| next.method) {
            Some(OperationMethod::Divide) => first.operand.as_display().to_string(),
            _ => operand(&first.operand),
        };
        let mut prev = None;

        for operation in operations {
            let rhs = &operation.operand;
            out = match operation.method {
                Some(OperationMethod::Power) => {
                    let base = if prev == Some(OperationMethod::Power) {
                        format!("{{{}}}", out)
                    } else {
                        out
                    };
                    format!("{}^{{{}}}", base, rhs.as_display())
                },
                Some(OperationMethod::Divide) => format!("\\frac{{{}}}{{{}}}", out, rhs.as_display()),
                Some(OperationMethod::Multiply) => format!("{} \\cdot {}", out, operand(rhs)),
                Some(method) => format!("{} {} {}", out, method, operand(rhs)),
                None => format!("{}{}", out, operand(rhs)),
            };
            prev = operation.method;
        }

        f.write_str(&out)
    }
}
