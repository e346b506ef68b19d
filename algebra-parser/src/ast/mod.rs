//! The abstract syntax tree built from a provenance parse tree.
//!
//! An [`Expression`] owns its children outright. The seventh node kind, [`Operation`], lives only
//! inside a [`Sequence`]; [`Node`] is a borrowed view that covers all seven kinds uniformly, and
//! is what the traversal framework in [`crate::visit`] hands out.

pub mod build;
pub mod eq;
pub mod fmt;
pub mod function;
pub mod literal;
pub mod negation;
pub mod operation;
pub mod provenance;

pub use function::Function;
pub use literal::{Decimal, Integer, Variable};
pub use negation::Negation;
pub use operation::{Operation, OperationMethod, Sequence};
pub use provenance::Provenance;

use fmt::Latex;
use std::fmt as std_fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Names the seven kinds of AST node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NodeKind {
    Integer,
    Decimal,
    Variable,
    Function,
    Negation,
    Operation,
    Sequence,
}

impl std_fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std_fmt::Formatter) -> std_fmt::Result {
        let name = match self {
            NodeKind::Integer => "integer",
            NodeKind::Decimal => "decimal",
            NodeKind::Variable => "variable",
            NodeKind::Function => "function",
            NodeKind::Negation => "negation",
            NodeKind::Operation => "operation",
            NodeKind::Sequence => "sequence",
        };
        f.write_str(name)
    }
}

/// Any expression.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expression {
    /// An integer literal, such as `16`.
    Integer(Integer),

    /// A decimal literal, such as `2.5`.
    Decimal(Decimal),

    /// A variable, such as `x`.
    Variable(Variable),

    /// A function application, such as `sin[x]`.
    Function(Function),

    /// A negated expression, such as `-x`.
    Negation(Negation),

    /// A chain of operations at one precedence level, such as `a + b - c`.
    Sequence(Sequence),
}

impl Expression {
    /// Returns the kind of this node.
    pub fn kind(&self) -> NodeKind {
        match self {
            Expression::Integer(_) => NodeKind::Integer,
            Expression::Decimal(_) => NodeKind::Decimal,
            Expression::Variable(_) => NodeKind::Variable,
            Expression::Function(_) => NodeKind::Function,
            Expression::Negation(_) => NodeKind::Negation,
            Expression::Sequence(_) => NodeKind::Sequence,
        }
    }

    /// Returns the parse-tree fragment this node was built from, if any.
    pub fn provenance(&self) -> Option<&Provenance> {
        Node::from(self).provenance()
    }

    /// Returns true if this expression must be parenthesized when it appears as an operand of a
    /// sequence with the given priority.
    ///
    /// Only sequences ever need parentheses, when their [`Sequence::priority`] is no higher than
    /// the enclosing sequence's. Otherwise they would be absorbed into it on re-parse.
    pub fn needs_parens_within(&self, enclosing: Option<u8>) -> bool {
        match (self, enclosing) {
            (Expression::Sequence(seq), Some(enclosing)) => seq
                .priority()
                .is_some_and(|priority| priority <= enclosing),
            _ => false,
        }
    }
}

impl std_fmt::Display for Expression {
    fn fmt(&self, f: &mut std_fmt::Formatter) -> std_fmt::Result {
        match self {
            Expression::Integer(integer) => std_fmt::Display::fmt(integer, f),
            Expression::Decimal(decimal) => std_fmt::Display::fmt(decimal, f),
            Expression::Variable(variable) => std_fmt::Display::fmt(variable, f),
            Expression::Function(function) => std_fmt::Display::fmt(function, f),
            Expression::Negation(negation) => std_fmt::Display::fmt(negation, f),
            Expression::Sequence(sequence) => std_fmt::Display::fmt(sequence, f),
        }
    }
}

impl Latex for Expression {
    fn fmt_latex(&self, f: &mut std_fmt::Formatter) -> std_fmt::Result {
        match self {
            Expression::Integer(integer) => integer.fmt_latex(f),
            Expression::Decimal(decimal) => decimal.fmt_latex(f),
            Expression::Variable(variable) => variable.fmt_latex(f),
            Expression::Function(function) => function.fmt_latex(f),
            Expression::Negation(negation) => negation.fmt_latex(f),
            Expression::Sequence(sequence) => sequence.fmt_latex(f),
        }
    }
}

/// Implements `From<$ty> for Expression` for each node struct.
macro_rules! impl_into_expression {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for Expression {
                fn from(node: $variant) -> Self {
                    Expression::$variant(node)
                }
            }

            impl<'a> From<&'a $variant> for Node<'a> {
                fn from(node: &'a $variant) -> Self {
                    Node::$variant(node)
                }
            }
        )*
    };
}

impl_into_expression!(Integer, Decimal, Variable, Function, Negation, Sequence);

/// A borrowed view of any one of the seven node kinds.
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    Integer(&'a Integer),
    Decimal(&'a Decimal),
    Variable(&'a Variable),
    Function(&'a Function),
    Negation(&'a Negation),
    Operation(&'a Operation),
    Sequence(&'a Sequence),
}

impl<'a> Node<'a> {
    /// Returns the kind of the viewed node.
    pub fn kind(self) -> NodeKind {
        match self {
            Node::Integer(_) => NodeKind::Integer,
            Node::Decimal(_) => NodeKind::Decimal,
            Node::Variable(_) => NodeKind::Variable,
            Node::Function(_) => NodeKind::Function,
            Node::Negation(_) => NodeKind::Negation,
            Node::Operation(_) => NodeKind::Operation,
            Node::Sequence(_) => NodeKind::Sequence,
        }
    }

    /// Returns the parse-tree fragment the viewed node was built from, if any.
    pub fn provenance(self) -> Option<&'a Provenance> {
        match self {
            Node::Integer(node) => node.provenance.as_ref(),
            Node::Decimal(node) => node.provenance.as_ref(),
            Node::Variable(node) => node.provenance.as_ref(),
            Node::Function(node) => node.provenance.as_ref(),
            Node::Negation(node) => node.provenance.as_ref(),
            Node::Operation(node) => node.provenance.as_ref(),
            Node::Sequence(node) => node.provenance.as_ref(),
        }
    }

    /// Returns the direct children of the viewed node, in order.
    pub fn children(self) -> Vec<Node<'a>> {
        match self {
            Node::Integer(_) | Node::Decimal(_) | Node::Variable(_) => Vec::new(),
            Node::Function(function) => vec![Node::from(&*function.body)],
            Node::Negation(negation) => vec![Node::from(&*negation.body)],
            Node::Operation(operation) => vec![Node::from(&*operation.operand)],
            Node::Sequence(sequence) => sequence.operations.iter().map(Node::Operation).collect(),
        }
    }

    /// Returns a key identifying the viewed node within the tree it is borrowed from.
    ///
    /// An [`Operation`] and the start of its operand can share an address, so the kind is part
    /// of the key.
    pub(crate) fn key(self) -> (NodeKind, *const ()) {
        let addr = match self {
            Node::Integer(node) => node as *const Integer as *const (),
            Node::Decimal(node) => node as *const Decimal as *const (),
            Node::Variable(node) => node as *const Variable as *const (),
            Node::Function(node) => node as *const Function as *const (),
            Node::Negation(node) => node as *const Negation as *const (),
            Node::Operation(node) => node as *const Operation as *const (),
            Node::Sequence(node) => node as *const Sequence as *const (),
        };
        (self.kind(), addr)
    }
}

impl<'a> From<&'a Expression> for Node<'a> {
    fn from(expr: &'a Expression) -> Self {
        match expr {
            Expression::Integer(node) => Node::Integer(node),
            Expression::Decimal(node) => Node::Decimal(node),
            Expression::Variable(node) => Node::Variable(node),
            Expression::Function(node) => Node::Function(node),
            Expression::Negation(node) => Node::Negation(node),
            Expression::Sequence(node) => Node::Sequence(node),
        }
    }
}

impl<'a> From<&'a Operation> for Node<'a> {
    fn from(operation: &'a Operation) -> Self {
        Node::Operation(operation)
    }
}

impl std_fmt::Display for Node<'_> {
    fn fmt(&self, f: &mut std_fmt::Formatter) -> std_fmt::Result {
        match self {
            Node::Integer(node) => std_fmt::Display::fmt(node, f),
            Node::Decimal(node) => std_fmt::Display::fmt(node, f),
            Node::Variable(node) => std_fmt::Display::fmt(node, f),
            Node::Function(node) => std_fmt::Display::fmt(node, f),
            Node::Negation(node) => std_fmt::Display::fmt(node, f),
            Node::Operation(node) => std_fmt::Display::fmt(node, f),
            Node::Sequence(node) => std_fmt::Display::fmt(node, f),
        }
    }
}
