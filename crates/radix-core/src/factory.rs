//! Expression construction.

use radix_integers::{BigNumber, Digit};

use crate::expr::{BinaryOp, ExprNode, UnaryOp};

/// Builds expression nodes from operands and operator tags.
///
/// The factory checks structure only: an operator applies to exactly the
/// operands its tag calls for, and nothing is evaluated while building.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExprFactory;

impl ExprFactory {
    /// Creates a new factory.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Creates a number leaf.
    #[must_use]
    pub fn leaf<D: Digit>(&self, value: BigNumber<D>) -> ExprNode<D> {
        ExprNode::Number(value)
    }

    /// Creates a unary operation node.
    #[must_use]
    pub fn unary<D: Digit>(&self, operand: ExprNode<D>, op: UnaryOp) -> ExprNode<D> {
        ExprNode::Unary {
            op,
            operand: Box::new(operand),
        }
    }

    /// Creates a binary operation node.
    #[must_use]
    pub fn binary<D: Digit>(
        &self,
        left: ExprNode<D>,
        right: ExprNode<D>,
        op: BinaryOp,
    ) -> ExprNode<D> {
        ExprNode::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    // === Convenience constructors ===

    /// Creates a negation: -operand.
    #[must_use]
    pub fn negate<D: Digit>(&self, operand: ExprNode<D>) -> ExprNode<D> {
        self.unary(operand, UnaryOp::Negate)
    }

    /// Creates an addition: left + right.
    #[must_use]
    pub fn add<D: Digit>(&self, left: ExprNode<D>, right: ExprNode<D>) -> ExprNode<D> {
        self.binary(left, right, BinaryOp::Add)
    }

    /// Creates a subtraction: left - right.
    #[must_use]
    pub fn sub<D: Digit>(&self, left: ExprNode<D>, right: ExprNode<D>) -> ExprNode<D> {
        self.binary(left, right, BinaryOp::Subtract)
    }

    /// Creates a multiplication: left * right.
    #[must_use]
    pub fn mul<D: Digit>(&self, left: ExprNode<D>, right: ExprNode<D>) -> ExprNode<D> {
        self.binary(left, right, BinaryOp::Multiply)
    }

    /// Creates a division: left / right.
    #[must_use]
    pub fn div<D: Digit>(&self, left: ExprNode<D>, right: ExprNode<D>) -> ExprNode<D> {
        self.binary(left, right, BinaryOp::Divide)
    }

    /// Creates a remainder: left % right.
    #[must_use]
    pub fn rem<D: Digit>(&self, left: ExprNode<D>, right: ExprNode<D>) -> ExprNode<D> {
        self.binary(left, right, BinaryOp::Modulo)
    }
}
