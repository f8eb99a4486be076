//! # radix-integers
//!
//! Arbitrary precision integers written in any base.
//!
//! This crate provides:
//! - Digit bases (`DigitBase`): user-defined alphabets of digit symbols
//! - Arbitrary precision signed integers (`BigNumber`) over any base
//! - Rendering in infix, prefix and postfix notation (`Notation`)
//!
//! ## Example
//!
//! ```
//! use radix_integers::{BigNumber, DigitBase, Notation};
//!
//! let letters = DigitBase::<u8>::from_symbols("abcdefghij")?;
//! let n = BigNumber::parse("cafe", &letters)?;
//! let m = BigNumber::parse("bb", &letters)?;
//!
//! let product = n.checked_mul(&m)?;
//! assert_eq!(product.render(&letters, Notation::Infix)?, "ccfje");
//! # Ok::<(), radix_integers::NumberError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod arithmetic;
pub mod base;
pub mod bignum;
pub mod digit;
pub mod error;
pub mod notation;
mod powers;

#[cfg(test)]
mod proptests;

pub use base::{DigitBase, OPERATOR_SYMBOLS};
pub use bignum::BigNumber;
pub use digit::{Digit, Symbol};
pub use error::{NumberError, Result};
pub use notation::Notation;
