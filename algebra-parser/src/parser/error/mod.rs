pub mod kind;

use algebra_error::ErrorKind;
use ariadne::Report;
use crate::parser::syntax::Rule;
use std::{fmt, io, ops::Range};

/// Failure to match the grammar, with the rule that was being matched.
#[derive(Debug)]
pub struct Error {
    pub rule: Rule,

    /// Source regions to highlight; the first is the primary location.
    pub spans: Vec<Range<usize>>,

    pub kind: Box<dyn ErrorKind>,

    /// Set once a rule has committed to a match. Alternatives are not tried after a fatal error.
    pub fatal: bool,
}

impl Error {
    pub fn new(rule: Rule, spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { rule, spans, kind: Box::new(kind), fatal: false }
    }

    pub fn new_fatal(rule: Rule, spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { rule, spans, kind: Box::new(kind), fatal: true }
    }

    /// Promotes a recoverable error to a fatal one.
    pub fn into_fatal(mut self) -> Self {
        self.fatal = true;
        self
    }

    /// Byte offset of the primary span.
    pub fn offset(&self) -> usize {
        self.spans.first().map_or(0, |span| span.start)
    }

    /// The `ariadne` report for this error, not yet rendered.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<'a, (&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }

    /// Prints the report to stderr.
    pub fn report_to_stderr(&self, src_id: &str, input: &str) -> io::Result<()> {
        self.kind.eprint(src_id, &self.spans, input)
    }

    /// Renders the report into a [`String`], with colours.
    pub fn report_to_string(&self, src_id: &str, input: &str) -> io::Result<String> {
        self.kind.render(src_id, &self.spans, input)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "failed to parse {} at offset {}", self.rule, self.offset())
    }
}

impl std::error::Error for Error {}

impl From<Error> for algebra_error::Error {
    fn from(err: Error) -> Self {
        Self { spans: err.spans, kind: err.kind }
    }
}
