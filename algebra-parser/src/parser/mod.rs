pub mod error;
pub mod grammar;
pub mod syntax;

use error::{kind, Error};
use super::tokenizer::{tokenize_complete, Token, TokenKind};
use syntax::{Rule, SyntaxNode, SyntaxToken};
use std::ops::Range;

/// Tries each alternative in turn and returns its result from the enclosing function as soon as
/// one succeeds.
///
/// A fatal error also returns immediately. When every alternative fails softly, control falls
/// through to the code after the macro.
#[macro_export]
macro_rules! try_parse_catch_fatal {
    ($($attempt:expr),+ $(,)?) => {{
        $(
            match $attempt {
                Ok(parsed) => return Ok(parsed),
                Err(err) if err.fatal => return Err(err),
                Err(_) => (),
            }
        )+
    }};
}

/// Recursive-descent parser producing a [`SyntaxNode`] tree.
///
/// The input is lexed eagerly; the parser only moves an index over the token buffer, so
/// backtracking is a matter of restoring that index.
#[derive(Debug, Clone)]
pub struct Parser<'source> {
    tokens: Box<[Token<'source>]>,

    /// Position of the next unread token, whitespace included.
    cursor: usize,
}

impl<'source> Parser<'source> {
    pub fn new(source: &'source str) -> Self {
        Self {
            tokens: tokenize_complete(source),
            cursor: 0,
        }
    }

    /// A recoverable error located at [`Parser::span`].
    pub fn error(&self, rule: Rule, kind: impl algebra_error::ErrorKind + 'static) -> Error {
        Error::new(rule, vec![self.span()], kind)
    }

    /// A fatal error located at [`Parser::span`].
    pub fn error_fatal(&self, rule: Rule, kind: impl algebra_error::ErrorKind + 'static) -> Error {
        Error::new_fatal(rule, vec![self.span()], kind)
    }

    /// Empty span just past the last token.
    pub fn eof_span(&self) -> Range<usize> {
        let end = self.tokens.last().map_or(0, |token| token.span.end);
        end..end
    }

    /// Span of the next significant token, falling back to [`Parser::eof_span`].
    pub fn span(&self) -> Range<usize> {
        match self.peek_token() {
            Some(token) => token.span.clone(),
            None => self.eof_span(),
        }
    }

    /// The token directly under the cursor, even if it is whitespace.
    pub fn current_token(&self) -> Option<&Token<'source>> {
        self.tokens.get(self.cursor)
    }

    /// Number of whitespace tokens between the cursor and the next significant token.
    fn leading_whitespace(&self) -> usize {
        self.tokens
            .iter()
            .skip(self.cursor)
            .take_while(|token| token.is_whitespace())
            .count()
    }

    /// The next significant token, without consuming anything.
    pub fn peek_token(&self) -> Option<&Token<'source>> {
        self.tokens.get(self.cursor + self.leading_whitespace())
    }

    /// Consumes and returns the next significant token.
    ///
    /// At the end of input this is an [`kind::UnexpectedEof`] error attributed to `rule`.
    pub fn next_token(&mut self, rule: Rule) -> Result<Token<'source>, Error> {
        let index = self.cursor + self.leading_whitespace();
        match self.tokens.get(index) {
            Some(token) => {
                self.cursor = index + 1;
                Ok(token.clone())
            },
            None => Err(self.error(rule, kind::UnexpectedEof)),
        }
    }

    /// Consumes the next significant token if its kind is in `expected`. Otherwise the cursor
    /// stays put and a recoverable error is returned.
    pub fn expect(&mut self, rule: Rule, expected: &'static [TokenKind]) -> Result<SyntaxToken, Error> {
        let found = self.peek_token().map(|token| (token.kind, token.span.clone()));
        match found {
            Some((found, _)) if expected.contains(&found) => self.next_token(rule).map(SyntaxToken::from),
            Some((found, span)) => Err(Error::new(rule, vec![span], kind::UnexpectedToken {
                expected,
                found,
            })),
            None => Err(self.error(rule, kind::UnexpectedEof)),
        }
    }

    /// Parses one grammar rule, rewinding the cursor if it fails.
    pub fn try_parse<T: Parse>(&mut self) -> Result<SyntaxNode, Error> {
        self.try_parse_with_fn(T::parse)
    }

    /// Runs `f` and rewinds the cursor to where it was if `f` fails.
    pub fn try_parse_with_fn<T, F>(&mut self, f: F) -> Result<T, Error>
    where
        F: FnOnce(&mut Parser<'source>) -> Result<T, Error>,
    {
        let checkpoint = self.cursor;
        let result = f(self);
        if result.is_err() {
            self.cursor = checkpoint;
        }
        result
    }

    /// Parses the whole input as one expression. Anything but whitespace left over afterwards is
    /// a fatal [`kind::ExpectedEof`].
    pub fn try_parse_full(&mut self) -> Result<SyntaxNode, Error> {
        let root = self.try_parse::<grammar::Expression>()?;
        match self.peek_token() {
            None => Ok(root),
            Some(token) => Err(Error::new_fatal(Rule::Expression, vec![token.span.clone()], kind::ExpectedEof)),
        }
    }
}

/// A grammar rule that produces a [`SyntaxNode`].
pub trait Parse {
    /// Parses the rule at the cursor. On failure the cursor may have moved; use
    /// [`Parser::try_parse`] to rewind it.
    fn parse(input: &mut Parser) -> Result<SyntaxNode, Error>;
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    use super::syntax::SyntaxElement;

    /// Parses the input, expecting success.
    fn parse(input: &str) -> SyntaxNode {
        Parser::new(input).try_parse_full().unwrap()
    }

    /// Parses the input, expecting failure, and returns the plain-text report.
    fn parse_err(input: &str) -> (Error, String) {
        let err = Parser::new(input).try_parse_full().unwrap_err();
        let report = err.report_to_string("input", input).unwrap();
        (err, strip_ansi_escapes::strip_str(report))
    }

    /// Returns the rules of the child nodes, in order.
    fn child_rules(node: &SyntaxNode) -> Vec<Rule> {
        node.nodes().map(|node| node.rule).collect()
    }

    /// Returns the kinds of the tokens consumed directly by the node, in order.
    fn token_kinds(node: &SyntaxNode) -> Vec<TokenKind> {
        node.tokens().map(|token| token.kind).collect()
    }

    #[test]
    fn literal_int() {
        let node = parse("16");

        assert_eq!(node.rule, Rule::Single);
        assert_eq!(node.span, 0..2);
        let int = node.nodes().next().unwrap();
        assert_eq!(int.rule, Rule::Integer);
        assert_eq!(int.children, vec![SyntaxElement::Token(SyntaxToken {
            kind: TokenKind::Int,
            lexeme: "16".to_string(),
            span: 0..2,
        })]);
    }

    #[test]
    fn literal_decimal() {
        let node = parse("  3.14 ");
        let decimal = node.nodes().next().unwrap();

        assert_eq!(decimal.rule, Rule::Decimal);
        assert_eq!(decimal.span, 2..6);
    }

    #[test]
    fn negated_variable() {
        let node = parse("-x");

        assert_eq!(node.rule, Rule::Single);
        assert_eq!(token_kinds(&node), vec![TokenKind::Sub]);
        assert_eq!(child_rules(&node), vec![Rule::Variable]);
        assert_eq!(node.span, 0..2);
    }

    #[test]
    fn chain_collapses_levels() {
        // no `*`, `/` or `^` appear, so those levels collapse into their operands
        let node = parse("a + b - c");

        assert_eq!(node.rule, Rule::Additive);
        assert_eq!(child_rules(&node), vec![Rule::Single, Rule::Single, Rule::Single]);
        assert_eq!(token_kinds(&node), vec![TokenKind::Add, TokenKind::Sub]);
        assert_eq!(node.span, 0..9);
    }

    #[test]
    fn precedence_nesting() {
        let node = parse("1 + 2 * 3 ^ 4 / 5");

        assert_eq!(node.rule, Rule::Additive);
        assert_eq!(child_rules(&node), vec![Rule::Single, Rule::Multiply]);

        let mul = node.nodes().nth(1).unwrap();
        assert_eq!(child_rules(mul), vec![Rule::Single, Rule::Divide]);

        let div = mul.nodes().nth(1).unwrap();
        assert_eq!(child_rules(div), vec![Rule::Power, Rule::Single]);
        assert_eq!(div.span, 8..17);
    }

    #[test]
    fn division_binds_tighter_than_multiplication() {
        let node = parse("a / b * c");

        assert_eq!(node.rule, Rule::Multiply);
        assert_eq!(child_rules(&node), vec![Rule::Divide, Rule::Single]);
    }

    #[test]
    fn function_application() {
        let node = parse("DiracDelta[x - 1]");
        let func = node.nodes().next().unwrap();

        assert_eq!(func.rule, Rule::Function);
        assert_eq!(
            token_kinds(func),
            vec![TokenKind::Name, TokenKind::OpenSquare, TokenKind::CloseSquare],
        );
        assert_eq!(child_rules(func), vec![Rule::Additive]);
    }

    #[test]
    fn parenthesized() {
        let node = parse("(1 + 2) * x");

        assert_eq!(node.rule, Rule::Multiply);
        let paren = node.nodes().next().unwrap().nodes().next().unwrap();
        assert_eq!(paren.rule, Rule::Paren);
        assert_eq!(paren.span, 0..7);
    }

    #[test]
    fn subtract_negative() {
        let node = parse("a--b");

        assert_eq!(node.rule, Rule::Additive);
        let rhs = node.nodes().nth(1).unwrap();
        assert_eq!(token_kinds(rhs), vec![TokenKind::Sub]);
    }

    #[test]
    fn display_normalizes_spacing() {
        let node = parse("2*( x+y )^ 3");

        assert_eq!(node.to_string(), "2 * (x + y) ^ 3");
    }

    #[test]
    fn unclosed_paren() {
        let (err, report) = parse_err("(a");

        assert_eq!(err.rule, Rule::Paren);
        assert_eq!(err.offset(), 0);
        assert!(report.contains("unclosed parenthesis"));
    }

    #[test]
    fn unclosed_bracket() {
        let (err, report) = parse_err("f[x");

        assert_eq!(err.rule, Rule::Function);
        assert_eq!(err.offset(), 1);
        assert!(report.contains("unclosed function bracket"));
    }

    #[test]
    fn malformed_decimal() {
        let (err, report) = parse_err("2..3");

        assert_eq!(err.rule, Rule::Decimal);
        assert_eq!(err.spans, vec![0..2]);
        assert!(report.contains("malformed decimal literal"));
    }

    #[test]
    fn leading_point() {
        let (err, _) = parse_err("1 + .5");

        assert_eq!(err.rule, Rule::Decimal);
        assert_eq!(err.offset(), 4);
    }

    #[test]
    fn integer_beyond_u64() {
        let node = parse("18446744073709551616 + x");
        let int = node.nodes().next().unwrap().nodes().next().unwrap();

        assert_eq!(int.rule, Rule::Integer);
        assert_eq!(int.span, 0..20);
    }

    #[test]
    fn rules_parse_on_their_own() {
        let mut parser = Parser::new("f[x] + 1");
        let func = parser.try_parse::<grammar::Function>().unwrap();
        assert_eq!(func.rule, Rule::Function);

        // `+` cannot start an operand, so the cursor is left on it
        let err = parser.try_parse::<grammar::Single>().unwrap_err();
        assert!(!err.fatal);
        assert_eq!(err.offset(), 5);
        assert_eq!(parser.peek_token().map(|token| token.kind), Some(TokenKind::Add));
    }

    #[test]
    fn trailing_input() {
        let (err, report) = parse_err("x + 1 )");

        assert_eq!(err.rule, Rule::Expression);
        assert_eq!(err.offset(), 6);
        assert!(report.contains("expected end of input"));
    }

    #[test]
    fn missing_operand() {
        let (err, report) = parse_err("x *");

        assert_eq!(err.rule, Rule::Single);
        assert_eq!(err.offset(), 3);
        assert!(report.contains("unexpected end of input"));
    }

    #[test]
    fn double_negation_requires_parens() {
        let (err, report) = parse_err("--x");

        assert_eq!(err.rule, Rule::Single);
        assert_eq!(err.offset(), 1);
        assert!(report.contains("expected an expression"));
    }

    #[test]
    fn empty_input() {
        let (err, _) = parse_err("   ");

        assert_eq!(err.rule, Rule::Single);
        assert_eq!(err.offset(), 3);
    }
}
