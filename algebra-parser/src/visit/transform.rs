use crate::ast::{Decimal, Expression, Function, Integer, Negation, Operation, Sequence, Variable};

/// A rewrite of an AST into a new tree.
///
/// The defaults rebuild the tree post-order: children are transformed first, then a new node is
/// built around them, keeping the original provenance. The input is never modified. Override a
/// hook to replace the nodes of one kind; an override that does not transform the children
/// leaves that subtree untouched.
pub trait Transformer {
    /// Transforms any expression by dispatching on its kind.
    fn transform(&mut self, expr: &Expression) -> Expression {
        match expr {
            Expression::Integer(integer) => self.transform_integer(integer),
            Expression::Decimal(decimal) => self.transform_decimal(decimal),
            Expression::Variable(variable) => self.transform_variable(variable),
            Expression::Function(function) => self.transform_function(function),
            Expression::Negation(negation) => self.transform_negation(negation),
            Expression::Sequence(sequence) => self.transform_sequence(sequence),
        }
    }

    fn transform_integer(&mut self, integer: &Integer) -> Expression {
        Expression::Integer(integer.clone())
    }

    fn transform_decimal(&mut self, decimal: &Decimal) -> Expression {
        Expression::Decimal(decimal.clone())
    }

    fn transform_variable(&mut self, variable: &Variable) -> Expression {
        Expression::Variable(variable.clone())
    }

    fn transform_function(&mut self, function: &Function) -> Expression {
        let body = self.transform(&function.body);
        Expression::Function(Function {
            name: function.name.clone(),
            body: Box::new(body),
            provenance: function.provenance.clone(),
        })
    }

    fn transform_negation(&mut self, negation: &Negation) -> Expression {
        let body = self.transform(&negation.body);
        Expression::Negation(Negation {
            body: Box::new(body),
            provenance: negation.provenance.clone(),
        })
    }

    /// Transforms one link of a sequence. This returns an [`Operation`] rather than an
    /// [`Expression`], since operations only exist inside a sequence.
    fn transform_operation(&mut self, operation: &Operation) -> Operation {
        let operand = self.transform(&operation.operand);
        Operation {
            method: operation.method,
            operand: Box::new(operand),
            provenance: operation.provenance.clone(),
        }
    }

    fn transform_sequence(&mut self, sequence: &Sequence) -> Expression {
        let operations = sequence.operations
            .iter()
            .map(|operation| self.transform_operation(operation))
            .collect();
        Expression::Sequence(Sequence {
            operations,
            provenance: sequence.provenance.clone(),
        })
    }
}
