//! Errors reported by bases and numbers.

use std::fmt;
use thiserror::Error;

/// Errors that can occur while building, reading, printing or combining numbers.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum NumberError {
    /// The input text does not start with a number.
    #[error("invalid number text: {0}")]
    Format(String),

    /// The symbol has no digit value in the base.
    #[error("symbol `{0}` has no digit value")]
    UnknownSymbol(char),

    /// The value has no symbol in the base.
    #[error("value {value} has no symbol in a base of size {base}")]
    UnknownValue {
        /// The value looked up.
        value: u64,
        /// Size of the base.
        base: usize,
    },

    /// The symbol is already a digit, or is reserved for an operator.
    #[error("symbol `{0}` is already a digit or is reserved for an operator")]
    DuplicateSymbol(char),

    /// A digit value is not below the base.
    #[error("digit {digit} is out of range for base {base}")]
    DigitOutOfRange {
        /// The rejected digit.
        digit: u64,
        /// The base of the number.
        base: usize,
    },

    /// A digit position past the most significant digit.
    #[error("no digit at position {index}, the number has {count} digits")]
    IndexOutOfRange {
        /// The requested position.
        index: usize,
        /// Number of stored digits.
        count: usize,
    },

    /// The operands are expressed in different bases.
    #[error("operands are in different bases ({left} and {right})")]
    MismatchedBase {
        /// Base of the left operand.
        left: usize,
        /// Base of the right operand.
        right: usize,
    },

    /// Division or modulo by zero.
    #[error("division by zero")]
    DivideByZero,

    /// An argument outside the domain of the operation.
    #[error("domain error: {0}")]
    Domain(&'static str),

    /// The base cannot be used with the digit type.
    #[error("base {0} is not supported by this digit type")]
    UnsupportedBase(u64),

    /// The output sink rejected a write.
    #[error("failed to write to the output")]
    Write(#[from] fmt::Error),
}

/// Result alias for number operations.
pub type Result<T, E = NumberError> = std::result::Result<T, E>;
