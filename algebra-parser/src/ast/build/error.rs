use algebra_error::ErrorKind;
use ariadne::Report;
use crate::parser::syntax::{Rule, SyntaxNode};
use std::{fmt, io, ops::Range};

/// An error raised while building an [`Expression`] from a [`SyntaxNode`].
///
/// These errors mean the parse tree does not match the shapes the grammar produces. They are
/// never raised for a tree that came straight out of the parser.
///
/// [`Expression`]: crate::ast::Expression
#[derive(Debug)]
pub struct BuildError {
    /// The rule of the node that could not be built.
    pub rule: Rule,

    /// The region of the source code that the node covers.
    pub span: Range<usize>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl BuildError {
    /// Creates a new error pointing at the given node.
    pub fn new(node: &SyntaxNode, kind: impl ErrorKind + 'static) -> Self {
        Self::at(node.rule, node.span.clone(), kind)
    }

    /// Creates a new error pointing at the given region of a node of the given rule.
    pub fn at(rule: Rule, span: Range<usize>, kind: impl ErrorKind + 'static) -> Self {
        Self { rule, span, kind: Box::new(kind) }
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<'a, (&'a str, Range<usize>)> {
        self.kind.build_report(src_id, std::slice::from_ref(&self.span))
    }

    /// Report this error to stderr.
    pub fn report_to_stderr(&self, src_id: &str, input: &str) -> io::Result<()> {
        self.kind.eprint(src_id, std::slice::from_ref(&self.span), input)
    }

    /// Renders this error into a [`String`].
    pub fn report_to_string(&self, src_id: &str, input: &str) -> io::Result<String> {
        self.kind.render(src_id, std::slice::from_ref(&self.span), input)
    }
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "cannot build an expression from the {} at offset {}", self.rule, self.span.start)
    }
}

impl std::error::Error for BuildError {}

impl From<BuildError> for algebra_error::Error {
    fn from(err: BuildError) -> Self {
        Self { spans: vec![err.span], kind: err.kind }
    }
}
