//! Structural equality. Provenance is ignored, so two independently parsed copies of the same
//! text compare equal, as does a tree built in code.

use crate::ast::{Decimal, Expression, Function, Integer, Negation, Node, Operation, Sequence, Variable};

impl PartialEq for Integer {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl PartialEq for Variable {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.body == other.body
    }
}

impl PartialEq for Negation {
    fn eq(&self, other: &Self) -> bool {
        self.body == other.body
    }
}

impl PartialEq for Operation {
    fn eq(&self, other: &Self) -> bool {
        self.method == other.method && self.operand == other.operand
    }
}

impl PartialEq for Sequence {
    fn eq(&self, other: &Self) -> bool {
        self.operations == other.operations
    }
}

impl PartialEq for Expression {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Expression::Integer(lhs), Expression::Integer(rhs)) => lhs == rhs,
            (Expression::Decimal(lhs), Expression::Decimal(rhs)) => lhs == rhs,
            (Expression::Variable(lhs), Expression::Variable(rhs)) => lhs == rhs,
            (Expression::Function(lhs), Expression::Function(rhs)) => lhs == rhs,
            (Expression::Negation(lhs), Expression::Negation(rhs)) => lhs == rhs,
            (Expression::Sequence(lhs), Expression::Sequence(rhs)) => lhs == rhs,
            _ => false,
        }
    }
}

impl PartialEq for Node<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Node::Integer(lhs), Node::Integer(rhs)) => lhs == rhs,
            (Node::Decimal(lhs), Node::Decimal(rhs)) => lhs == rhs,
            (Node::Variable(lhs), Node::Variable(rhs)) => lhs == rhs,
            (Node::Function(lhs), Node::Function(rhs)) => lhs == rhs,
            (Node::Negation(lhs), Node::Negation(rhs)) => lhs == rhs,
            (Node::Operation(lhs), Node::Operation(rhs)) => lhs == rhs,
            (Node::Sequence(lhs), Node::Sequence(rhs)) => lhs == rhs,
            _ => false,
        }
    }
}
