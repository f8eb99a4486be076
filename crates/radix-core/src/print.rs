//! Rendering expressions in infix, prefix and postfix notation.
//!
//! Infix output is fully parenthesized and unspaced, e.g. `(2+-3)`. Prefix
//! and postfix output are token streams separated by single spaces, e.g.
//! `+ 2 - 3` and `2 3 - +`. A unary operator writes its token before its
//! operand in prefix and after it in postfix.

use std::fmt::Write;

use radix_integers::{DigitBase, Digit, Notation, Result, Symbol};

use crate::expr::ExprNode;

impl<D: Digit> ExprNode<D> {
    /// Writes the expression to `out` in the given notation.
    ///
    /// Every child is visited once, left before right.
    ///
    /// # Errors
    ///
    /// Returns the first error from rendering a number (such as a base that
    /// does not match a leaf) or writing to `out`.
    pub fn write_to<W, S>(
        &self,
        out: &mut W,
        digit_base: &DigitBase<D, S>,
        notation: Notation,
    ) -> Result<()>
    where
        W: Write + ?Sized,
        S: Symbol,
    {
        match notation {
            Notation::Infix => self.write_infix(out, digit_base),
            Notation::Prefix => self.write_prefix(out, digit_base),
            Notation::Postfix => self.write_postfix(out, digit_base),
        }
    }

    /// Renders the expression into a new string.
    ///
    /// # Errors
    ///
    /// Same as [`ExprNode::write_to`].
    pub fn render<S: Symbol>(
        &self,
        digit_base: &DigitBase<D, S>,
        notation: Notation,
    ) -> Result<String> {
        let mut out = String::new();
        self.write_to(&mut out, digit_base, notation)?;
        Ok(out)
    }

    fn write_infix<W, S>(&self, out: &mut W, digit_base: &DigitBase<D, S>) -> Result<()>
    where
        W: Write + ?Sized,
        S: Symbol,
    {
        match self {
            ExprNode::Number(n) => n.write_to(out, digit_base, Notation::Infix),
            ExprNode::Unary { op, operand } => {
                out.write_char(op.symbol())?;
                operand.write_infix(out, digit_base)
            }
            ExprNode::Binary { op, left, right } => {
                out.write_char('(')?;
                left.write_infix(out, digit_base)?;
                out.write_char(op.symbol())?;
                right.write_infix(out, digit_base)?;
                out.write_char(')')?;
                Ok(())
            }
        }
    }

    fn write_prefix<W, S>(&self, out: &mut W, digit_base: &DigitBase<D, S>) -> Result<()>
    where
        W: Write + ?Sized,
        S: Symbol,
    {
        match self {
            ExprNode::Number(n) => n.write_to(out, digit_base, Notation::Prefix),
            ExprNode::Unary { op, operand } => {
                write!(out, "{op} ")?;
                operand.write_prefix(out, digit_base)
            }
            ExprNode::Binary { op, left, right } => {
                write!(out, "{op} ")?;
                left.write_prefix(out, digit_base)?;
                out.write_char(' ')?;
                right.write_prefix(out, digit_base)
            }
        }
    }

    fn write_postfix<W, S>(&self, out: &mut W, digit_base: &DigitBase<D, S>) -> Result<()>
    where
        W: Write + ?Sized,
        S: Symbol,
    {
        match self {
            ExprNode::Number(n) => n.write_to(out, digit_base, Notation::Postfix),
            ExprNode::Unary { op, operand } => {
                operand.write_postfix(out, digit_base)?;
                write!(out, " {op}")?;
                Ok(())
            }
            ExprNode::Binary { op, left, right } => {
                left.write_postfix(out, digit_base)?;
                out.write_char(' ')?;
                right.write_postfix(out, digit_base)?;
                write!(out, " {op}")?;
                Ok(())
            }
        }
    }
}
