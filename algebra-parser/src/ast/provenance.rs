use crate::parser::syntax::{Rule, SyntaxNode};
use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Names the parse-tree fragment an AST node was built from.
///
/// Provenance is for diagnostics only. It never takes part in equality or printing, and nodes
/// constructed in code carry none.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Provenance {
    /// The grammar rule that matched.
    pub rule: Rule,

    /// The region of the source code that the fragment covers.
    pub span: Range<usize>,
}

impl Provenance {
    /// Creates a new provenance handle.
    pub fn new(rule: Rule, span: Range<usize>) -> Self {
        Self { rule, span }
    }
}

impl From<&SyntaxNode> for Provenance {
    fn from(node: &SyntaxNode) -> Self {
        Self::new(node.rule, node.span.clone())
    }
}
