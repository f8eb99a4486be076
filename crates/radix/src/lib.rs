//! # Radix
//!
//! Big integers in any base, and arithmetic expressions over them.
//!
//! ## Features
//!
//! - **Any Alphabet**: digits are user-defined symbols, `0123456789` or `abcdefghij` alike
//! - **Arbitrary Precision**: signed integers of unbounded length in any supported base
//! - **Expression Trees**: owned trees of unary and binary operators over numbers
//! - **Three Notations**: infix, prefix and postfix rendering
//!
//! ## Quick Start
//!
//! ```rust
//! use radix::prelude::*;
//!
//! let decimal = DigitBase::<u8>::decimal();
//!
//! let mut n = BigNumber::<u8>::new(10);
//! n.set_digit(0, 0)?;
//! n.set_digit(1, 0)?;
//! n.set_digit(2, 6)?;
//! assert_eq!(n.render(&decimal, Notation::Infix)?, "600");
//!
//! let twelve = BigNumber::parse("12", &decimal)?;
//! let eleven = BigNumber::parse("11", &decimal)?;
//! let product = &twelve * &eleven;
//! assert_eq!(product.digits(), &[2, 3, 1]);
//!
//! let f = ExprFactory::new();
//! let negated = f.negate(f.leaf(BigNumber::<u8>::from_i64(5, 10)));
//! assert_eq!(negated.evaluate()?, BigNumber::from_i64(-5, 10));
//!
//! let sum = f.add(f.leaf(BigNumber::from_i64(2, 10)), f.leaf(BigNumber::from_i64(3, 10)));
//! assert_eq!(sum.evaluate()?, BigNumber::from_i64(5, 10));
//! assert_eq!(sum.render(&decimal, Notation::Infix)?, "(2+3)");
//! # Ok::<(), radix::integers::NumberError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use radix_core as core;
pub use radix_integers as integers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use radix_core::{BinaryOp, ExprFactory, ExprNode, UnaryOp};
    pub use radix_integers::{BigNumber, Digit, DigitBase, Notation, NumberError, Symbol};
}
