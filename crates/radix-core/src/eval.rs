//! Bottom-up evaluation.

use radix_integers::{BigNumber, Digit, Result};
use tracing::instrument;

use crate::expr::{BinaryOp, ExprNode, UnaryOp};

impl UnaryOp {
    /// Applies the operator to an evaluated operand.
    #[must_use]
    pub fn apply<D: Digit>(self, operand: BigNumber<D>) -> BigNumber<D> {
        match self {
            UnaryOp::Negate => -operand,
        }
    }
}

impl BinaryOp {
    /// Applies the operator to evaluated operands, left then right.
    ///
    /// # Errors
    ///
    /// Returns the error of the underlying number operation: mismatched
    /// bases, or division by zero for [`BinaryOp::Divide`] and
    /// [`BinaryOp::Modulo`].
    pub fn apply<D: Digit>(
        self,
        left: &BigNumber<D>,
        right: &BigNumber<D>,
    ) -> Result<BigNumber<D>> {
        match self {
            BinaryOp::Add => left.checked_add(right),
            BinaryOp::Subtract => left.checked_sub(right),
            BinaryOp::Multiply => left.checked_mul(right),
            BinaryOp::Divide => left.checked_div(right),
            BinaryOp::Modulo => left.checked_rem(right),
        }
    }
}

impl<D: Digit> ExprNode<D> {
    /// Evaluates the expression.
    ///
    /// A leaf yields a copy of its number; operator nodes evaluate their
    /// children, left before right, and combine the results.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by an operator, such as a division by
    /// zero or operands in different bases.
    #[instrument(level = "trace", skip_all)]
    pub fn evaluate(&self) -> Result<BigNumber<D>> {
        match self {
            ExprNode::Number(n) => Ok(n.clone()),
            ExprNode::Unary { op, operand } => Ok(op.apply(operand.evaluate()?)),
            ExprNode::Binary { op, left, right } => {
                let left = left.evaluate()?;
                let right = right.evaluate()?;
                op.apply(&left, &right)
            }
        }
    }

    /// Evaluates the expression, consuming the tree.
    ///
    /// Leaves are moved out instead of copied.
    ///
    /// # Errors
    ///
    /// Same as [`ExprNode::evaluate`].
    pub fn into_value(self) -> Result<BigNumber<D>> {
        match self {
            ExprNode::Number(n) => Ok(n),
            ExprNode::Unary { op, operand } => Ok(op.apply((*operand).into_value()?)),
            ExprNode::Binary { op, left, right } => {
                let left = (*left).into_value()?;
                let right = (*right).into_value()?;
                op.apply(&left, &right)
            }
        }
    }
}
