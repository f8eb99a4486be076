//! # radix-core
//!
//! Arithmetic expression trees over `radix-integers` numbers.
//!
//! This crate provides:
//! - Owned expression trees (`ExprNode`) with unary and binary operators
//! - A factory for building nodes (`ExprFactory`)
//! - Rendering in infix, prefix and postfix notation
//! - Bottom-up evaluation
//!
//! ## Example
//!
//! ```
//! use radix_core::ExprFactory;
//! use radix_integers::{BigNumber, DigitBase, Notation};
//!
//! let digits = DigitBase::<u8>::decimal();
//! let f = ExprFactory::new();
//! let two = f.leaf(BigNumber::parse("2", &digits)?);
//! let three = f.leaf(BigNumber::parse("3", &digits)?);
//! let sum = f.add(two, f.negate(three));
//!
//! assert_eq!(sum.render(&digits, Notation::Infix)?, "(2+-3)");
//! assert_eq!(sum.render(&digits, Notation::Prefix)?, "+ 2 - 3");
//! assert_eq!(sum.render(&digits, Notation::Postfix)?, "2 3 - +");
//! assert_eq!(sum.evaluate()?.render(&digits, Notation::Infix)?, "-1");
//! # Ok::<(), radix_integers::NumberError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod eval;
pub mod expr;
pub mod factory;
pub mod print;

#[cfg(test)]
mod proptests;

pub use expr::{BinaryOp, ExprNode, UnaryOp};
pub use factory::ExprFactory;
