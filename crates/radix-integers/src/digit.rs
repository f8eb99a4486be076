//! Digit value and symbol types.
//!
//! A [`Digit`] is the numeric value stored at one position of a
//! [`BigNumber`](crate::BigNumber); a [`Symbol`] is its textual form in a
//! [`DigitBase`](crate::DigitBase).

use num_traits::{PrimInt, Unsigned};
use std::fmt;
use std::hash::Hash;

/// An unsigned digit value type.
///
/// Arithmetic on digits is carried out in `u64`. For every supported base
/// `B <= MAX_BASE <= 2^32`, a digit product plus two carries stays below
/// `B * B`, which always fits.
pub trait Digit: PrimInt + Unsigned + Hash + fmt::Debug + fmt::Display + Send + Sync {
    /// The largest base whose digits all fit in this type.
    const MAX_BASE: u64;

    /// Widens the digit for intermediate arithmetic.
    fn to_wide(self) -> u64;

    /// Narrows an intermediate value back to a digit.
    ///
    /// Callers guarantee `value < MAX_BASE`.
    fn from_wide(value: u64) -> Self;
}

macro_rules! impl_digit {
    ($($t:ty),*) => {
        $(
            impl Digit for $t {
                const MAX_BASE: u64 = <$t>::MAX as u64 + 1;

                #[inline]
                fn to_wide(self) -> u64 {
                    u64::from(self)
                }

                #[inline]
                #[allow(clippy::cast_possible_truncation)]
                fn from_wide(value: u64) -> Self {
                    debug_assert!(value < Self::MAX_BASE);
                    value as $t
                }
            }
        )*
    };
}

impl_digit!(u8, u16, u32);

/// A textual digit symbol.
pub trait Symbol: Copy + Eq + Hash + fmt::Debug {
    /// Converts a character of input text into a symbol, if representable.
    fn from_char(c: char) -> Option<Self>;

    /// Returns the character written for this symbol.
    fn to_char(self) -> char;
}

impl Symbol for char {
    #[inline]
    fn from_char(c: char) -> Option<Self> {
        Some(c)
    }

    #[inline]
    fn to_char(self) -> char {
        self
    }
}

/// Byte symbols, read and written as the characters `U+0000..=U+00FF`.
impl Symbol for u8 {
    #[inline]
    fn from_char(c: char) -> Option<Self> {
        u8::try_from(c).ok()
    }

    #[inline]
    fn to_char(self) -> char {
        char::from(self)
    }
}
