//! The provenance parse tree produced by the grammar.
//!
//! Each [`SyntaxNode`] records the grammar [`Rule`] that matched, the region of the source it
//! covers, and every token and sub-node it consumed, in source order. Precedence levels that
//! consumed no operator are collapsed into their operand, so a chain node always holds at least
//! one operator.

use crate::tokenizer::{Token, TokenKind};
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The grammar rules, from the loosest binding rule to the atoms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Rule {
    /// The top-level expression. Never appears as a node, only in errors.
    Expression,

    /// A chain of additions and subtractions.
    Additive,

    /// A chain of multiplications.
    Multiply,

    /// A chain of divisions.
    Divide,

    /// A chain of exponentiations.
    Power,

    /// An atom with an optional leading `-`.
    Single,

    /// A parenthesized expression, such as `(a + b)`.
    Paren,

    /// A function application, such as `sin[x]`.
    Function,

    /// A variable name.
    Variable,

    /// An integer literal.
    Integer,

    /// A decimal literal, such as `2.5`.
    Decimal,
}

impl Rule {
    /// Returns the operator tokens a chain rule consumes between its operands. Returns an empty
    /// slice for rules that are not chains.
    pub fn operators(self) -> &'static [TokenKind] {
        match self {
            Rule::Additive => &[TokenKind::Add, TokenKind::Sub],
            Rule::Multiply => &[TokenKind::Mul],
            Rule::Divide => &[TokenKind::Div],
            Rule::Power => &[TokenKind::Exp],
            Rule::Expression
                | Rule::Single
                | Rule::Paren
                | Rule::Function
                | Rule::Variable
                | Rule::Integer
                | Rule::Decimal => &[],
        }
    }

    /// Returns true if the rule matches an operator chain of one precedence level.
    pub fn is_chain(self) -> bool {
        !self.operators().is_empty()
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Rule::Expression => "expression",
            Rule::Additive => "additive chain",
            Rule::Multiply => "multiplication chain",
            Rule::Divide => "division chain",
            Rule::Power => "power chain",
            Rule::Single => "operand",
            Rule::Paren => "parenthesized expression",
            Rule::Function => "function application",
            Rule::Variable => "variable",
            Rule::Integer => "integer",
            Rule::Decimal => "decimal",
        };
        f.write_str(name)
    }
}

/// A token consumed by the grammar, with its lexeme copied out of the source.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SyntaxToken {
    pub kind: TokenKind,

    /// The raw text of the token.
    pub lexeme: String,

    /// Byte range in the source.
    pub span: Range<usize>,
}

impl From<Token<'_>> for SyntaxToken {
    fn from(token: Token<'_>) -> Self {
        Self {
            kind: token.kind,
            lexeme: token.lexeme.to_owned(),
            span: token.span,
        }
    }
}

/// A child of a [`SyntaxNode`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SyntaxElement {
    /// A nested rule match.
    Node(SyntaxNode),

    /// A token consumed directly by the rule.
    Token(SyntaxToken),
}

impl SyntaxElement {
    /// Returns the span of the element.
    pub fn span(&self) -> Range<usize> {
        match self {
            SyntaxElement::Node(node) => node.span.clone(),
            SyntaxElement::Token(token) => token.span.clone(),
        }
    }

    /// Returns the contained node, if this element is a node.
    pub fn as_node(&self) -> Option<&SyntaxNode> {
        match self {
            SyntaxElement::Node(node) => Some(node),
            SyntaxElement::Token(_) => None,
        }
    }

    /// Returns the contained token, if this element is a token.
    pub fn as_token(&self) -> Option<&SyntaxToken> {
        match self {
            SyntaxElement::Node(_) => None,
            SyntaxElement::Token(token) => Some(token),
        }
    }
}

/// A single rule match in the provenance parse tree.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SyntaxNode {
    /// The rule that matched.
    pub rule: Rule,

    /// The region of the source code that this node was parsed from.
    pub span: Range<usize>,

    /// The tokens and nodes consumed by the rule, in source order.
    pub children: Vec<SyntaxElement>,
}

impl SyntaxNode {
    /// Creates a node whose span covers all of its children.
    pub(crate) fn new(rule: Rule, children: Vec<SyntaxElement>) -> Self {
        let span = match (children.first(), children.last()) {
            (Some(first), Some(last)) => first.span().start..last.span().end,
            _ => 0..0,
        };
        Self { rule, span, children }
    }

    /// Returns an iterator over the child nodes, skipping tokens.
    pub fn nodes(&self) -> impl Iterator<Item = &SyntaxNode> {
        self.children.iter().filter_map(SyntaxElement::as_node)
    }

    /// Returns an iterator over the tokens consumed directly by this node.
    pub fn tokens(&self) -> impl Iterator<Item = &SyntaxToken> {
        self.children.iter().filter_map(SyntaxElement::as_token)
    }
}

/// Writes the matched text back out, separating the operands of a chain with single spaces.
impl fmt::Display for SyntaxNode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let separator = if self.rule.is_chain() { " " } else { "" };
        for (i, child) in self.children.iter().enumerate() {
            if i > 0 {
                f.write_str(separator)?;
            }
            match child {
                SyntaxElement::Node(node) => fmt::Display::fmt(node, f)?,
                SyntaxElement::Token(token) => f.write_str(&token.lexeme)?,
            }
        }
        Ok(())
    }
}
