//! Expression node types.
//!
//! An expression is a tree owned from the top down: every node owns its
//! children, and a built tree is never mutated.

use std::fmt;

use radix_integers::{BigNumber, Digit};

/// A unary operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    /// Sign flip: -x.
    Negate,
}

impl UnaryOp {
    /// Returns the operator token.
    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            UnaryOp::Negate => '-',
        }
    }
}

/// A binary operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    /// Sum: a + b.
    Add,
    /// Difference: a - b.
    Subtract,
    /// Product: a * b.
    Multiply,
    /// Truncating quotient: a / b.
    Divide,
    /// Remainder with the sign of the dividend: a % b.
    Modulo,
}

impl BinaryOp {
    /// All binary operators.
    pub const ALL: [BinaryOp; 5] = [
        BinaryOp::Add,
        BinaryOp::Subtract,
        BinaryOp::Multiply,
        BinaryOp::Divide,
        BinaryOp::Modulo,
    ];

    /// Returns the operator token.
    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            BinaryOp::Add => '+',
            BinaryOp::Subtract => '-',
            BinaryOp::Multiply => '*',
            BinaryOp::Divide => '/',
            BinaryOp::Modulo => '%',
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A node of an arithmetic expression tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExprNode<D: Digit = u8> {
    /// A number literal.
    Number(BigNumber<D>),

    /// A unary operation.
    Unary {
        /// The operator.
        op: UnaryOp,
        /// The operand.
        operand: Box<ExprNode<D>>,
    },

    /// A binary operation.
    Binary {
        /// The operator.
        op: BinaryOp,
        /// The left operand.
        left: Box<ExprNode<D>>,
        /// The right operand.
        right: Box<ExprNode<D>>,
    },
}

impl<D: Digit> ExprNode<D> {
    /// Returns true if this node is a number literal.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        matches!(self, ExprNode::Number(_))
    }

    /// Returns the number stored in a leaf.
    #[must_use]
    pub fn as_number(&self) -> Option<&BigNumber<D>> {
        match self {
            ExprNode::Number(n) => Some(n),
            _ => None,
        }
    }

    /// Returns the children, left before right.
    #[must_use]
    pub fn children(&self) -> Vec<&ExprNode<D>> {
        match self {
            ExprNode::Number(_) => Vec::new(),
            ExprNode::Unary { operand, .. } => vec![&**operand],
            ExprNode::Binary { left, right, .. } => vec![&**left, &**right],
        }
    }

    /// Returns the number of nodes in the tree.
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + self.children().into_iter().map(ExprNode::node_count).sum::<usize>()
    }

    /// Returns the length of the longest path from this node to a leaf,
    /// counted in nodes.
    #[must_use]
    pub fn depth(&self) -> usize {
        1 + self
            .children()
            .into_iter()
            .map(ExprNode::depth)
            .max()
            .unwrap_or(0)
    }
}

impl<D: Digit> From<BigNumber<D>> for ExprNode<D> {
    fn from(value: BigNumber<D>) -> Self {
        ExprNode::Number(value)
    }
}
