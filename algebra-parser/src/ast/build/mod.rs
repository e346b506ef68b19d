//! Building the AST from a provenance parse tree.
//!
//! Parentheses and the `Single` wrapper disappear here: a parenthesized node builds to whatever
//! it encloses, and a `Single` node only becomes a [`Negation`] if it consumed a `-`. Each chain
//! becomes a [`Sequence`] whose first [`Operation`] carries no method.

pub mod error;
pub mod kind;

pub use error::BuildError;

use log::trace;
use crate::{
    ast::{
        Decimal,
        Expression,
        Function,
        Integer,
        Negation,
        Operation,
        OperationMethod,
        Provenance,
        Sequence,
        Variable,
    },
    parser::syntax::{Rule, SyntaxElement, SyntaxNode, SyntaxToken},
    tokenizer::TokenKind,
};

/// Returns the single literal token of a literal node.
fn literal_token<'a>(node: &'a SyntaxNode, literal: TokenKind) -> Result<&'a SyntaxToken, BuildError> {
    match node.children.as_slice() {
        [SyntaxElement::Token(token)] if token.kind == literal => Ok(token),
        _ => Err(BuildError::new(node, kind::UnexpectedShape {
            rule: node.rule,
            expected: "a single literal token",
        })),
    }
}

/// Builds a chain node into a [`Sequence`].
fn build_sequence(node: &SyntaxNode) -> Result<Sequence, BuildError> {
    let shape = || BuildError::new(node, kind::UnexpectedShape {
        rule: node.rule,
        expected: "operands separated by operators",
    });

    let mut children = node.children.iter();
    let Some(SyntaxElement::Node(first)) = children.next() else {
        return Err(shape());
    };

    let mut operations = vec![Operation {
        method: None,
        operand: Box::new(Expression::try_from(first)?),
        provenance: Some(Provenance::new(node.rule, first.span.clone())),
    }];

    while let Some(element) = children.next() {
        let SyntaxElement::Token(op) = element else {
            return Err(shape());
        };
        let method = OperationMethod::from_token(op.kind)
            .filter(|method| method.rule() == node.rule)
            .ok_or_else(|| BuildError::at(node.rule, op.span.clone(), kind::UnknownOperator {
                rule: node.rule,
                lexeme: op.lexeme.clone(),
            }))?;

        let Some(SyntaxElement::Node(operand)) = children.next() else {
            return Err(shape());
        };

        operations.push(Operation {
            method: Some(method),
            operand: Box::new(Expression::try_from(operand)?),
            provenance: Some(Provenance::new(node.rule, op.span.start..operand.span.end)),
        });
    }

    if operations.len() < 2 {
        return Err(shape());
    }

    Ok(Sequence {
        operations,
        provenance: Some(Provenance::from(node)),
    })
}

impl TryFrom<&SyntaxNode> for Expression {
    type Error = BuildError;

    fn try_from(node: &SyntaxNode) -> Result<Self, Self::Error> {
        trace!("building {} at {:?}", node.rule, node.span);
        let provenance = Some(Provenance::from(node));

        match node.rule {
            Rule::Integer => {
                let token = literal_token(node, TokenKind::Int)?;
                let integer = Integer::from_digits(&token.lexeme)
                    .ok_or_else(|| BuildError::new(node, kind::InvalidLiteral {
                        lexeme: token.lexeme.clone(),
                    }))?;
                Ok(Expression::Integer(Integer { provenance, ..integer }))
            },
            Rule::Decimal => {
                let token = literal_token(node, TokenKind::Float)?;
                let value = token.lexeme.parse()
                    .map_err(|_| BuildError::new(node, kind::InvalidLiteral {
                        lexeme: token.lexeme.clone(),
                    }))?;
                Ok(Expression::Decimal(Decimal { value, provenance }))
            },
            Rule::Variable => {
                let token = literal_token(node, TokenKind::Name)?;
                Ok(Expression::Variable(Variable { name: token.lexeme.clone(), provenance }))
            },
            Rule::Function => match node.children.as_slice() {
                [
                    SyntaxElement::Token(name),
                    SyntaxElement::Token(_),
                    SyntaxElement::Node(body),
                    SyntaxElement::Token(_),
                ] if name.kind == TokenKind::Name => Ok(Expression::Function(Function {
                    name: name.lexeme.clone(),
                    body: Box::new(Expression::try_from(body)?),
                    provenance,
                })),
                _ => Err(BuildError::new(node, kind::UnexpectedShape {
                    rule: node.rule,
                    expected: "`name[expression]`",
                })),
            },
            Rule::Paren => match node.children.as_slice() {
                [SyntaxElement::Token(_), SyntaxElement::Node(inner), SyntaxElement::Token(_)] => {
                    Expression::try_from(inner)
                },
                _ => Err(BuildError::new(node, kind::UnexpectedShape {
                    rule: node.rule,
                    expected: "`(expression)`",
                })),
            },
            Rule::Single => match node.children.as_slice() {
                [SyntaxElement::Token(minus), SyntaxElement::Node(atom)] if minus.kind == TokenKind::Sub => {
                    Ok(Expression::Negation(Negation {
                        body: Box::new(Expression::try_from(atom)?),
                        provenance,
                    }))
                },
                [SyntaxElement::Node(atom)] => Expression::try_from(atom),
                _ => Err(BuildError::new(node, kind::UnexpectedShape {
                    rule: node.rule,
                    expected: "an operand with an optional leading `-`",
                })),
            },
            Rule::Additive | Rule::Multiply | Rule::Divide | Rule::Power => {
                build_sequence(node).map(Expression::Sequence)
            },
            Rule::Expression => Err(BuildError::new(node, kind::UnexpectedShape {
                rule: node.rule,
                expected: "a concrete grammar rule",
            })),
        }
    }
}

/// Builds every node in the slice, stopping at the first failure.
pub fn build_all(nodes: &[SyntaxNode]) -> Result<Vec<Expression>, BuildError> {
    nodes.iter().map(Expression::try_from).collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    use crate::parse_syntax;

    /// Parses and builds the input, expecting success.
    fn build(input: &str) -> Expression {
        Expression::try_from(&parse_syntax(input).unwrap()).unwrap()
    }

    fn token(kind: TokenKind, lexeme: &str, start: usize) -> SyntaxElement {
        SyntaxElement::Token(SyntaxToken {
            kind,
            lexeme: lexeme.to_string(),
            span: start..start + lexeme.len(),
        })
    }

    #[test]
    fn literals() {
        assert_eq!(build("16"), Expression::from(Integer::new(16)));
        assert_eq!(build("2.5"), Expression::from(Decimal::new(2.5)));
        assert_eq!(build("abc"), Expression::from(Variable::new("abc")));
    }

    #[test]
    fn integer_beyond_u64() {
        let Expression::Integer(int) = build("0018446744073709551616") else {
            panic!("expected an integer");
        };
        assert_eq!(int.value, "18446744073709551616");
        assert_eq!(int.provenance.map(|provenance| provenance.span), Some(0..22));
    }

    #[test]
    fn precedence_nesting() {
        let expected = Sequence::new(Integer::new(1), [
            (OperationMethod::Add, Sequence::new(Integer::new(2), [
                (OperationMethod::Multiply, Integer::new(3)),
            ])),
        ]);

        assert_eq!(build("1 + 2 * 3"), Expression::from(expected));
    }

    #[test]
    fn left_to_right_chain() {
        let Expression::Sequence(seq) = build("a - b - c") else {
            panic!("expected a sequence");
        };

        assert_eq!(seq.operations.len(), 3);
        assert_eq!(
            seq.operations.iter().map(|op| op.method).collect::<Vec<_>>(),
            vec![None, Some(OperationMethod::Subtract), Some(OperationMethod::Subtract)],
        );
    }

    #[test]
    fn mixed_additive_chain() {
        let Expression::Sequence(seq) = build("a + b - c + d") else {
            panic!("expected a sequence");
        };

        assert_eq!(
            seq.methods().collect::<Vec<_>>(),
            vec![OperationMethod::Add, OperationMethod::Subtract, OperationMethod::Add],
        );
    }

    #[test]
    fn paren_and_negation() {
        assert_eq!(build("((x))"), Expression::from(Variable::new("x")));
        assert_eq!(build("-x"), Expression::from(Negation::new(Variable::new("x"))));
        assert_eq!(
            build("-(-2)"),
            Expression::from(Negation::new(Negation::new(Integer::new(2)))),
        );
    }

    #[test]
    fn function_body() {
        let expected = Function::new("DiracDelta", Sequence::new(Variable::new("x"), [
            (OperationMethod::Subtract, Integer::new(1)),
        ]));

        assert_eq!(build("DiracDelta[x - 1]"), Expression::from(expected));
    }

    #[test]
    fn provenance_recorded() {
        let expr = build("  f[x] ^ 2");
        let Expression::Sequence(seq) = &expr else {
            panic!("expected a sequence");
        };

        assert_eq!(expr.provenance(), Some(&Provenance::new(Rule::Power, 2..10)));
        assert_eq!(seq.operations[0].provenance, Some(Provenance::new(Rule::Power, 2..6)));
        assert_eq!(seq.operations[1].provenance, Some(Provenance::new(Rule::Power, 7..10)));
        assert_eq!(seq.operations[0].operand.provenance(), Some(&Provenance::new(Rule::Function, 2..6)));
    }

    #[test]
    fn build_all_stops_at_failure() {
        let nodes = vec![
            parse_syntax("x").unwrap(),
            SyntaxNode::new(Rule::Expression, vec![token(TokenKind::Name, "y", 0)]),
        ];
        let err = build_all(&nodes).unwrap_err();

        assert_eq!(err.rule, Rule::Expression);
        assert_eq!(build_all(&nodes[..1]).unwrap(), vec![Expression::from(Variable::new("x"))]);
    }

    #[test]
    fn wrong_operator_for_level() {
        let node = SyntaxNode::new(Rule::Multiply, vec![
            SyntaxElement::Node(parse_syntax("a").unwrap()),
            token(TokenKind::Add, "+", 2),
            SyntaxElement::Node(parse_syntax("    b").unwrap()),
        ]);
        let err = Expression::try_from(&node).unwrap_err();
        let report = strip_ansi_escapes::strip_str(err.report_to_string("input", "a + b").unwrap());

        assert_eq!(err.span, 2..3);
        assert!(report.contains("operator `+` does not belong in a multiplication chain"));
    }

    #[test]
    fn chain_without_operator() {
        let node = SyntaxNode::new(Rule::Additive, vec![
            SyntaxElement::Node(parse_syntax("a").unwrap()),
        ]);
        let err = Expression::try_from(&node).unwrap_err();

        assert_eq!(err.rule, Rule::Additive);
        assert_eq!(err.to_string(), "cannot build an expression from the additive chain at offset 0");
    }

    #[test]
    fn literal_with_wrong_token() {
        let node = SyntaxNode::new(Rule::Integer, vec![token(TokenKind::Name, "x", 0)]);
        let err = Expression::try_from(&node).unwrap_err();

        assert_eq!(err.rule, Rule::Integer);
    }
}
