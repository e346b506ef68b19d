//! Grammar rules, one [`Parse`] implementation per rule.
//!
//! ```text
//! expression = additive
//! additive   = multiply ( ("+" | "-") multiply )*
//! multiply   = divide ( "*" divide )*
//! divide     = power ( "/" power )*
//! power      = single ( "^" single )*
//! single     = "-"? ( paren | function | variable | number )
//! paren      = "(" expression ")"
//! function   = name "[" expression "]"
//! ```

use log::trace;
use super::{
    error::{kind, Error},
    syntax::{Rule, SyntaxElement, SyntaxNode},
    Parse,
    Parser,
};
use crate::{tokenizer::TokenKind, try_parse_catch_fatal};

/// A full expression.
#[derive(Debug)]
pub struct Expression;

impl Parse for Expression {
    fn parse(input: &mut Parser) -> Result<SyntaxNode, Error> {
        trace!("expression at {:?}", input.span());
        Additive::parse(input)
    }
}

/// Declares chain rules: one or more operands separated by the operators of the rule.
macro_rules! chain_rules {
    ($($(#[$attr:meta])* $name:ident => $operand:ident,)*) => {
        $(
            $(#[$attr])*
            #[derive(Debug)]
            pub struct $name;

            impl Parse for $name {
                fn parse(input: &mut Parser) -> Result<SyntaxNode, Error> {
                    chain::<$operand>(input, Rule::$name)
                }
            }
        )*
    };
}

chain_rules! {
    /// `a + b - c`
    Additive => Multiply,

    /// `a * b`
    Multiply => Divide,

    /// `a / b`
    Divide => Power,

    /// `a ^ b`
    Power => Single,
}

/// Parses one or more `Operand`s separated by the operators of the given chain rule.
///
/// A chain with a single operand collapses into that operand, so the returned node is only tagged
/// with `rule` if at least one operator was consumed. Once an operator has been consumed, a
/// failure to parse the following operand is returned as-is.
fn chain<Operand: Parse>(input: &mut Parser, rule: Rule) -> Result<SyntaxNode, Error> {
    let first = Operand::parse(input)?;

    let mut children = Vec::new();
    while let Ok(op) = input.expect(rule, rule.operators()) {
        trace!("{} operator `{}` at {:?}", rule, op.lexeme, op.span);
        children.push(SyntaxElement::Token(op));
        children.push(SyntaxElement::Node(Operand::parse(input)?));
    }

    if children.is_empty() {
        return Ok(first);
    }

    children.insert(0, SyntaxElement::Node(first));
    Ok(SyntaxNode::new(rule, children))
}

/// An operand with an optional leading `-`.
#[derive(Debug)]
pub struct Single;

impl Parse for Single {
    fn parse(input: &mut Parser) -> Result<SyntaxNode, Error> {
        trace!("single at {:?}", input.span());

        let mut children = Vec::with_capacity(2);
        if let Ok(minus) = input.expect(Rule::Single, &[TokenKind::Sub]) {
            children.push(SyntaxElement::Token(minus));
        }
        children.push(SyntaxElement::Node(atom(input)?));

        Ok(SyntaxNode::new(Rule::Single, children))
    }
}

/// Parses the operand itself, trying each alternative in order.
fn atom(input: &mut Parser) -> Result<SyntaxNode, Error> {
    try_parse_catch_fatal!(
        input.try_parse::<Paren>(),
        input.try_parse::<Function>(),
        input.try_parse::<Variable>(),
        input.try_parse::<Number>(),
    );

    let found = input.peek_token().map(|token| (token.kind, token.span.clone()));
    match found {
        None => Err(input.error(Rule::Single, kind::UnexpectedEof)),
        // a decimal with no digits before the point, as in `.5`
        Some((TokenKind::Dot, _)) => Err(input.error_fatal(Rule::Decimal, kind::MalformedDecimal)),
        Some((found, span)) => {
            Err(Error::new(Rule::Single, vec![span], kind::ExpectedExpr { found }))
        },
    }
}

/// A parenthesized expression.
#[derive(Debug)]
pub struct Paren;

impl Parse for Paren {
    fn parse(input: &mut Parser) -> Result<SyntaxNode, Error> {
        let open = input.expect(Rule::Paren, &[TokenKind::OpenParen])?;
        trace!("paren at {:?}", open.span);

        let inner = input.try_parse::<Expression>().map_err(Error::into_fatal)?;
        let close = input.expect(Rule::Paren, &[TokenKind::CloseParen])
            .map_err(|_| Error::new_fatal(
                Rule::Paren,
                vec![open.span.clone(), input.span()],
                kind::UnclosedParenthesis,
            ))?;

        Ok(SyntaxNode::new(Rule::Paren, vec![
            SyntaxElement::Token(open),
            SyntaxElement::Node(inner),
            SyntaxElement::Token(close),
        ]))
    }
}

/// A function application, such as `sin[x]`.
#[derive(Debug)]
pub struct Function;

impl Parse for Function {
    fn parse(input: &mut Parser) -> Result<SyntaxNode, Error> {
        let name = input.expect(Rule::Function, &[TokenKind::Name])?;
        let open = input.expect(Rule::Function, &[TokenKind::OpenSquare])?;
        trace!("function `{}` at {:?}", name.lexeme, name.span);

        let inner = input.try_parse::<Expression>().map_err(Error::into_fatal)?;
        let close = input.expect(Rule::Function, &[TokenKind::CloseSquare])
            .map_err(|_| Error::new_fatal(
                Rule::Function,
                vec![open.span.clone(), input.span()],
                kind::UnclosedBracket,
            ))?;

        Ok(SyntaxNode::new(Rule::Function, vec![
            SyntaxElement::Token(name),
            SyntaxElement::Token(open),
            SyntaxElement::Node(inner),
            SyntaxElement::Token(close),
        ]))
    }
}

/// A variable name.
#[derive(Debug)]
pub struct Variable;

impl Parse for Variable {
    fn parse(input: &mut Parser) -> Result<SyntaxNode, Error> {
        let name = input.expect(Rule::Variable, &[TokenKind::Name])?;
        trace!("variable `{}` at {:?}", name.lexeme, name.span);
        Ok(SyntaxNode::new(Rule::Variable, vec![SyntaxElement::Token(name)]))
    }
}

/// An integer or decimal literal. Integers of any length are accepted.
#[derive(Debug)]
pub struct Number;

impl Parse for Number {
    fn parse(input: &mut Parser) -> Result<SyntaxNode, Error> {
        let token = input.expect(Rule::Integer, &[TokenKind::Int, TokenKind::Float])?;
        trace!("number `{}` at {:?}", token.lexeme, token.span);

        // a point directly after the digits, as in `2..3` or `1.2.3`
        if let Some(dot) = input.current_token().filter(|next| next.kind == TokenKind::Dot) {
            return Err(Error::new_fatal(
                Rule::Decimal,
                vec![token.span.start..dot.span.end],
                kind::MalformedDecimal,
            ));
        }

        let rule = match token.kind {
            TokenKind::Float => Rule::Decimal,
            _ => Rule::Integer,
        };
        Ok(SyntaxNode::new(rule, vec![SyntaxElement::Token(token)]))
    }
}
