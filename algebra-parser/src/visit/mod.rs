//! Traversal of the AST.
//!
//! [`Visitor`] walks a tree read-only, in pre-order. [`Transformer`] rebuilds a tree post-order,
//! producing new nodes. The query helpers in [`query`] are built on [`Visitor`].
//!
//! Dispatch is an exhaustive `match` over [`Node`], so a new node kind cannot be added without
//! every traversal handling it.

pub mod query;
pub mod transform;

pub use query::{find_all, find_all_kinds, for_all, try_for_all, FindAll, FromNode, Parents};
pub use transform::Transformer;

use crate::ast::{Decimal, Expression, Function, Integer, Negation, Node, Operation, Sequence, Variable};

/// A read-only walk over an AST.
///
/// Every hook has a default. The hooks for leaves do nothing; the hooks for the other kinds
/// descend into their children through the matching `walk_*` function. An overriding hook that
/// still wants to descend should call that function itself.
pub trait Visitor<'ast> {
    /// Called for every node, before the hook for its kind.
    fn visit_node(&mut self, _node: Node<'ast>) {}

    fn visit_integer(&mut self, _integer: &'ast Integer) {}

    fn visit_decimal(&mut self, _decimal: &'ast Decimal) {}

    fn visit_variable(&mut self, _variable: &'ast Variable) {}

    fn visit_function(&mut self, function: &'ast Function) {
        walk_function(self, function);
    }

    fn visit_negation(&mut self, negation: &'ast Negation) {
        walk_negation(self, negation);
    }

    fn visit_operation(&mut self, operation: &'ast Operation) {
        walk_operation(self, operation);
    }

    fn visit_sequence(&mut self, sequence: &'ast Sequence) {
        walk_sequence(self, sequence);
    }
}

/// Visits a node: calls [`Visitor::visit_node`], then the hook for the node's kind.
pub fn walk_node<'ast, V>(visitor: &mut V, node: Node<'ast>)
where
    V: Visitor<'ast> + ?Sized,
{
    visitor.visit_node(node);
    match node {
        Node::Integer(integer) => visitor.visit_integer(integer),
        Node::Decimal(decimal) => visitor.visit_decimal(decimal),
        Node::Variable(variable) => visitor.visit_variable(variable),
        Node::Function(function) => visitor.visit_function(function),
        Node::Negation(negation) => visitor.visit_negation(negation),
        Node::Operation(operation) => visitor.visit_operation(operation),
        Node::Sequence(sequence) => visitor.visit_sequence(sequence),
    }
}

pub fn walk_function<'ast, V>(visitor: &mut V, function: &'ast Function)
where
    V: Visitor<'ast> + ?Sized,
{
    walk_node(visitor, Node::from(&*function.body));
}

pub fn walk_negation<'ast, V>(visitor: &mut V, negation: &'ast Negation)
where
    V: Visitor<'ast> + ?Sized,
{
    walk_node(visitor, Node::from(&*negation.body));
}

pub fn walk_operation<'ast, V>(visitor: &mut V, operation: &'ast Operation)
where
    V: Visitor<'ast> + ?Sized,
{
    walk_node(visitor, Node::from(&*operation.operand));
}

pub fn walk_sequence<'ast, V>(visitor: &mut V, sequence: &'ast Sequence)
where
    V: Visitor<'ast> + ?Sized,
{
    for operation in &sequence.operations {
        walk_node(visitor, Node::Operation(operation));
    }
}

impl Expression {
    /// Walks this expression with the given visitor.
    pub fn accept<'ast, V: Visitor<'ast>>(&'ast self, visitor: &mut V) {
        walk_node(visitor, Node::from(self));
    }
}
