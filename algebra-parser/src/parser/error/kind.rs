use algebra_attrs::ErrorKind;
use algebra_error::EXPR;
use ariadne::Fmt;
use crate::tokenizer::TokenKind;

/// Input ran out while a rule still needed tokens.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected end of input",
    labels = [format!("an {} should follow here", "operand".fg(EXPR))],
)]
pub struct UnexpectedEof;

/// A complete expression was parsed but input remains.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expected end of input",
    labels = [format!("this {} is not part of the expression", "text".fg(EXPR))],
)]
pub struct ExpectedEof;

/// The next token is not one of the kinds the rule accepts here.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected token",
    labels = [format!("expected one of: {}", expected.iter().map(|t| format!("{:?}", t)).collect::<Vec<_>>().join(", "))],
    help = format!("found {:?}", found),
)]
pub struct UnexpectedToken {
    pub expected: &'static [TokenKind],

    pub found: TokenKind,
}

/// A token that cannot start an operand was found where an operand was expected.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expected an expression",
    labels = [format!("no {} starts here", "operand".fg(EXPR))],
    help = format!(
        "found {:?}; an operand is a number, a variable, a function like {}, or a parenthesized expression",
        found,
        "f[x]".fg(EXPR),
    ),
)]
pub struct ExpectedExpr {
    /// The token that was found.
    pub found: TokenKind,
}

/// `(` without a matching `)`.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unclosed parenthesis",
    labels = ["this parenthesis is not closed", "expected `)` here"],
    help = "add a closing parenthesis `)` somewhere after this",
)]
pub struct UnclosedParenthesis;

/// The square bracket of a function application was not closed.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unclosed function bracket",
    labels = ["this bracket is not closed", "expected `]` here"],
    help = format!("function applications are written as {}", "name[expression]".fg(EXPR)),
)]
pub struct UnclosedBracket;

/// A decimal literal is missing the digits on one side of its `.`.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "malformed decimal literal",
    labels = ["this number is not a valid decimal"],
    help = format!("decimals need digits on both sides of the point, as in {}", "2.5".fg(EXPR)),
)]
pub struct MalformedDecimal;
