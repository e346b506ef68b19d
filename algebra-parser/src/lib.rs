//! Parsing, traversal and printing of algebraic expressions.
//!
//! Text is tokenized with [`tokenizer`], matched against the grammar in [`parser`] to produce a
//! provenance parse tree, then built into an [`Expression`]. Expressions can be walked and
//! rewritten with [`visit`], compared with `==` regardless of where they came from, and printed
//! back to text through [`Display`](std::fmt::Display).
//!
//! ```
//! use algebra_parser::parse;
//!
//! let expr = parse("(1 + (2 * x))").unwrap();
//! assert_eq!(expr.to_string(), "1 + 2 * x");
//! assert_eq!(expr, parse("1+2*x").unwrap());
//! ```

pub mod ast;
pub mod error;
pub mod parser;
pub mod tokenizer;
pub mod visit;

pub use ast::{Expression, Node, NodeKind};
pub use error::Error;

use log::debug;
use parser::{error::Error as ParseError, syntax::SyntaxNode, Parser};
use std::{fs, path::Path};

/// Parses text into a provenance parse tree, without building the AST.
pub fn parse_syntax(input: &str) -> Result<SyntaxNode, ParseError> {
    Parser::new(input).try_parse_full()
}

/// Parses a complete expression. Fails if any input other than whitespace remains.
pub fn parse(input: &str) -> Result<Expression, Error> {
    let tree = parse_syntax(input)?;
    let expr = Expression::try_from(&tree)?;
    debug!("parsed {} bytes into a {}", input.len(), expr.kind());
    Ok(expr)
}

/// Reads a UTF-8 file and parses its contents as one expression.
pub fn parse_file(path: impl AsRef<Path>) -> Result<Expression, Error> {
    let path = path.as_ref();
    debug!("reading {}", path.display());
    let input = fs::read_to_string(path)?;
    parse(&input)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    use std::{env, process};

    #[test]
    fn parse_reports_parse_errors() {
        let err = parse("(a").unwrap_err();

        assert!(matches!(err, Error::Parse(_)));
        assert_eq!(err.to_string(), "failed to parse parenthesized expression at offset 0");
    }

    #[test]
    fn parse_file_round_trip() {
        let path = env::temp_dir().join(format!("algebra-parser-{}.txt", process::id()));
        fs::write(&path, "DiracDelta[x - 1] * 2\n").unwrap();

        let result = parse_file(&path);
        fs::remove_file(&path).unwrap();

        assert_eq!(result.unwrap().to_string(), "DiracDelta[x - 1] * 2");
    }

    #[test]
    fn parse_file_missing() {
        let err = parse_file("this/file/does/not/exist.txt").unwrap_err();

        assert!(matches!(err, Error::Io(_)));
    }
}
