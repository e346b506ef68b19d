use algebra_attrs::ErrorKind;
use algebra_error::EXPR;
use ariadne::Fmt;
use crate::parser::syntax::Rule;

/// A parse-tree node does not have the shape its rule produces.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("malformed {} node in the parse tree", rule),
    labels = [format!("expected {} here", expected.fg(EXPR))],
    help = "the parse tree was not produced by this crate's grammar, or was modified after parsing",
)]
pub struct UnexpectedShape {
    /// The rule of the malformed node.
    pub rule: Rule,

    /// A description of the expected children.
    pub expected: &'static str,
}

/// An operator token appears in a chain of a different precedence level.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("operator `{}` does not belong in a {}", lexeme, rule),
    labels = ["this operator"],
)]
pub struct UnknownOperator {
    /// The rule of the chain containing the operator.
    pub rule: Rule,

    /// The raw text of the operator token.
    pub lexeme: String,
}

/// A literal token's text cannot be converted to a value.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("invalid literal `{}`", lexeme),
    labels = ["this literal"],
)]
pub struct InvalidLiteral {
    /// The raw text of the literal token.
    pub lexeme: String,
}
