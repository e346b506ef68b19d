//! Queries over an AST, built on [`Visitor`].

use crate::{
    ast::{Decimal, Function, Integer, Negation, Node, NodeKind, Operation, Sequence, Variable},
    visit::{walk_node, Visitor},
};
use std::{collections::HashMap, ops::ControlFlow};

/// Types that [`find_all`] can collect: a reference to one node struct, which filters by kind, or
/// [`Node`] itself, which matches every kind.
pub trait FromNode<'a>: Sized {
    /// Returns the node as `Self`, if it is of the right kind.
    fn from_node(node: Node<'a>) -> Option<Self>;
}

impl<'a> FromNode<'a> for Node<'a> {
    fn from_node(node: Node<'a>) -> Option<Self> {
        Some(node)
    }
}

/// Implements [`FromNode`] for references to each node struct.
macro_rules! impl_from_node {
    ($($variant:ident),* $(,)?) => {
        $(
            impl<'a> FromNode<'a> for &'a $variant {
                fn from_node(node: Node<'a>) -> Option<Self> {
                    match node {
                        Node::$variant(inner) => Some(inner),
                        _ => None,
                    }
                }
            }
        )*
    };
}

impl_from_node!(Integer, Decimal, Variable, Function, Negation, Operation, Sequence);

/// A [`Visitor`] that collects, in pre-order, every node that converts to `T` and satisfies the
/// predicate.
///
/// Each instance runs one query; [`FindAll::into_found`] consumes it.
pub struct FindAll<T, P> {
    predicate: P,
    found: Vec<T>,
}

impl<T, P> FindAll<T, P> {
    /// Creates a query with the given predicate.
    pub fn new(predicate: P) -> Self {
        Self { predicate, found: Vec::new() }
    }

    /// Returns the nodes found so far, in the order they were visited.
    pub fn into_found(self) -> Vec<T> {
        self.found
    }
}

impl<'a, T, P> Visitor<'a> for FindAll<T, P>
where
    T: FromNode<'a>,
    P: FnMut(&T) -> bool,
{
    fn visit_node(&mut self, node: Node<'a>) {
        if let Some(value) = T::from_node(node) {
            if (self.predicate)(&value) {
                self.found.push(value);
            }
        }
    }
}

/// Returns every node of type `T` under `root` (inclusive) that satisfies the predicate, in
/// pre-order.
///
/// ```
/// use algebra_parser::{ast::Function, parse, visit::find_all};
///
/// let expr = parse("DiracDelta[x] * f[DiracDelta[y]]").unwrap();
/// let deltas = find_all::<&Function>(&expr, |f| f.name == "DiracDelta");
/// assert_eq!(deltas.len(), 2);
/// ```
pub fn find_all<'a, T>(root: impl Into<Node<'a>>, predicate: impl FnMut(&T) -> bool) -> Vec<T>
where
    T: FromNode<'a>,
{
    let mut query = FindAll::new(predicate);
    walk_node(&mut query, root.into());
    query.into_found()
}

/// Returns every node under `root` (inclusive) of the given kind that satisfies the predicate, in
/// pre-order. A kind of [`None`] matches every node.
pub fn find_all_kinds<'a>(
    root: impl Into<Node<'a>>,
    kind: Option<NodeKind>,
    mut predicate: impl FnMut(Node<'a>) -> bool,
) -> Vec<Node<'a>> {
    find_all(root, |node: &Node<'a>| {
        kind.map_or(true, |kind| node.kind() == kind) && predicate(*node)
    })
}

/// Adapts a closure into a [`Visitor`] that calls it on every node.
struct ForAll<F>(F);

impl<'a, F> Visitor<'a> for ForAll<F>
where
    F: FnMut(Node<'a>),
{
    fn visit_node(&mut self, node: Node<'a>) {
        (self.0)(node);
    }
}

/// Calls `action` on every node under `root` (inclusive), in pre-order.
pub fn for_all<'a>(root: impl Into<Node<'a>>, action: impl FnMut(Node<'a>)) {
    walk_node(&mut ForAll(action), root.into());
}

/// Calls `action` on every node under `root` (inclusive), in pre-order, until it returns
/// [`ControlFlow::Break`]. The break value is returned.
pub fn try_for_all<'a, B>(
    root: impl Into<Node<'a>>,
    mut action: impl FnMut(Node<'a>) -> ControlFlow<B>,
) -> ControlFlow<B> {
    let mut result = ControlFlow::Continue(());
    for_all(root, |node| {
        if result.is_continue() {
            result = action(node);
        }
    });
    result
}

/// Maps each node of a tree to its parent.
///
/// Nodes do not point back at their owners. This table borrows the tree and answers the same
/// question; it stays valid for as long as the borrow does.
#[derive(Debug, Clone)]
pub struct Parents<'a> {
    parents: HashMap<(NodeKind, *const ()), Node<'a>>,
}

impl<'a> Parents<'a> {
    /// Builds the parent table for the tree rooted at `root`.
    pub fn new(root: impl Into<Node<'a>>) -> Self {
        let mut parents = HashMap::new();
        for_all(root, |node| {
            for child in node.children() {
                parents.insert(child.key(), node);
            }
        });
        Self { parents }
    }

    /// Returns the parent of the given node, or [`None`] for the root and for nodes outside the
    /// tree.
    pub fn parent(&self, node: impl Into<Node<'a>>) -> Option<Node<'a>> {
        self.parents.get(&node.into().key()).copied()
    }

    /// Returns the ancestors of the given node, from its parent up to the root.
    pub fn ancestors(&self, node: impl Into<Node<'a>>) -> impl Iterator<Item = Node<'a>> + '_ {
        std::iter::successors(self.parent(node), move |node| self.parent(*node))
    }
}
