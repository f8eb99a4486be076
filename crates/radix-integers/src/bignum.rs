//! Arbitrary precision signed integers in any base.
//!
//! A [`BigNumber`] stores its magnitude as a sequence of digit values,
//! least significant first, together with the numeric base and a sign.
//! Symbols only come into play when reading or writing text, through a
//! [`DigitBase`].

use std::cmp::Ordering;
use std::fmt;

use num_traits::{One, Zero};
use smallvec::SmallVec;

use crate::arithmetic::{cmp_magnitudes, significant, trim};
use crate::base::DigitBase;
use crate::digit::{Digit, Symbol};
use crate::error::{NumberError, Result};
use crate::notation::Notation;

/// Digit storage, least significant first. Small numbers stay inline.
pub(crate) type Digits<D> = SmallVec<[D; 16]>;

/// An arbitrary precision signed integer over digits of type `D`.
///
/// # Invariants
///
/// - Every digit is below the base.
/// - Zero has no digits, and no other number has a most significant zero.
/// - The sign of zero is irrelevant: zero never prints with a sign and
///   compares equal to zero of either sign.
///
/// The type is not `Copy`; duplicating a number is always an explicit
/// [`Clone::clone`].
#[derive(Clone)]
pub struct BigNumber<D: Digit = u8> {
    pub(crate) digits: Digits<D>,
    pub(crate) base: usize,
    pub(crate) positive: bool,
}

impl<D: Digit> BigNumber<D> {
    /// Creates zero in the given base.
    ///
    /// # Panics
    ///
    /// Panics if `base` is below 2 or has digits that do not fit in `D`.
    #[must_use]
    pub fn new(base: usize) -> Self {
        assert!(
            Self::supports_base(base),
            "base {base} is not supported by this digit type"
        );
        Self::zero_in(base)
    }

    /// Creates zero in the given base.
    ///
    /// # Errors
    ///
    /// Returns [`NumberError::UnsupportedBase`] if `base` is below 2 or has
    /// digits that do not fit in `D`.
    pub fn try_new(base: usize) -> Result<Self> {
        if Self::supports_base(base) {
            Ok(Self::zero_in(base))
        } else {
            Err(NumberError::UnsupportedBase(base as u64))
        }
    }

    /// Returns true if numbers over `D` can use `base`.
    #[must_use]
    pub fn supports_base(base: usize) -> bool {
        base >= 2 && (base as u64) <= D::MAX_BASE
    }

    fn zero_in(base: usize) -> Self {
        Self {
            digits: Digits::new(),
            base,
            positive: true,
        }
    }

    /// Builds a number from raw parts, restoring the canonical form.
    pub(crate) fn from_parts(mut digits: Digits<D>, base: usize, positive: bool) -> Self {
        trim(&mut digits);
        let positive = positive || digits.is_empty();
        Self {
            digits,
            base,
            positive,
        }
    }

    /// Reads a number from the first line of `text`, most significant
    /// symbol first.
    ///
    /// Reading stops before the first symbol that is not a digit of
    /// `digit_base`. Leading zeros are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`NumberError::Format`] if the line is empty or does not start
    /// with a digit, and [`NumberError::UnsupportedBase`] if the base is
    /// smaller than 2.
    pub fn parse<S: Symbol>(text: &str, digit_base: &DigitBase<D, S>) -> Result<Self> {
        let mut number = Self::try_new(digit_base.base_size())?;
        let line = text.lines().next().unwrap_or_default();

        let mut values = Vec::with_capacity(line.len());
        for c in line.chars() {
            let Some(value) = S::from_char(c).and_then(|s| digit_base.value_of(s).ok()) else {
                break;
            };
            values.push(value);
        }

        if values.is_empty() {
            return Err(match line.chars().next() {
                None => NumberError::Format("empty input".to_string()),
                Some(c) => NumberError::Format(format!("`{c}` does not start a number")),
            });
        }

        number.digits = values.into_iter().rev().collect();
        trim(&mut number.digits);
        Ok(number)
    }

    /// Creates a number from an unsigned value.
    ///
    /// # Panics
    ///
    /// Panics if the base is not supported, as [`BigNumber::new`].
    #[must_use]
    pub fn from_u64(mut value: u64, base: usize) -> Self {
        let mut number = Self::new(base);
        let wide_base = base as u64;
        while value > 0 {
            number.digits.push(D::from_wide(value % wide_base));
            value /= wide_base;
        }
        number
    }

    /// Creates a number from a signed value.
    ///
    /// # Panics
    ///
    /// Panics if the base is not supported, as [`BigNumber::new`].
    #[must_use]
    pub fn from_i64(value: i64, base: usize) -> Self {
        let mut number = Self::from_u64(value.unsigned_abs(), base);
        number.positive = value >= 0;
        number
    }

    /// Converts to an `i64`, or `None` if the value does not fit.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        let base = i128::try_from(self.base).ok()?;
        let mut magnitude: i128 = 0;
        for &d in self.digits.iter().rev() {
            magnitude = magnitude
                .checked_mul(base)?
                .checked_add(i128::from(d.to_wide()))?;
        }
        let value = if self.is_negative() {
            -magnitude
        } else {
            magnitude
        };
        i64::try_from(value).ok()
    }

    /// Returns the numeric base.
    #[must_use]
    pub fn base(&self) -> usize {
        self.base
    }

    // === Digits ===

    /// Returns the number of stored digits. Zero has none.
    #[must_use]
    pub fn digit_count(&self) -> usize {
        self.digits.len()
    }

    /// Returns the digit at position `index`, 0 being the least significant.
    ///
    /// # Errors
    ///
    /// Returns [`NumberError::IndexOutOfRange`] if `index >= digit_count()`.
    pub fn digit(&self, index: usize) -> Result<D> {
        self.digits
            .get(index)
            .copied()
            .ok_or(NumberError::IndexOutOfRange {
                index,
                count: self.digits.len(),
            })
    }

    /// Returns the digits, least significant first.
    #[must_use]
    pub fn digits(&self) -> &[D] {
        &self.digits
    }

    /// Sets the digit at position `index`, 0 being the least significant.
    ///
    /// Positions between the current most significant digit and `index` are
    /// filled with zeros. Most significant zeros are then dropped, so
    /// setting a zero past the end leaves the number unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`NumberError::DigitOutOfRange`] if `value` is not below the
    /// base. The number is left untouched.
    pub fn set_digit(&mut self, index: usize, value: D) -> Result<()> {
        if value.to_wide() >= self.base as u64 {
            return Err(NumberError::DigitOutOfRange {
                digit: value.to_wide(),
                base: self.base,
            });
        }

        if index < self.digits.len() {
            self.digits[index] = value;
        } else if !value.is_zero() {
            self.digits.resize(index, D::zero());
            self.digits.push(value);
        }
        trim(&mut self.digits);
        Ok(())
    }

    // === Sign ===

    /// Returns the stored sign flag.
    ///
    /// For zero the flag carries no meaning.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.positive
    }

    /// Sets the sign flag.
    pub fn set_positive(&mut self, positive: bool) {
        self.positive = positive;
    }

    /// Returns true if the number is strictly below zero.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        !self.positive && !self.digits.is_empty()
    }

    /// Returns true if the number is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }

    /// Returns true if the number is one.
    #[must_use]
    pub fn is_one(&self) -> bool {
        self.positive && self.digits.len() == 1 && self.digits[0].is_one()
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        if self.is_zero() {
            0
        } else if self.positive {
            1
        } else {
            -1
        }
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self::from_parts(self.digits.clone(), self.base, true)
    }

    /// Returns the number with its sign flipped.
    #[must_use]
    pub fn negated(&self) -> Self {
        Self::from_parts(self.digits.clone(), self.base, !self.positive)
    }

    // === Comparison ===

    /// Compares absolute values.
    ///
    /// Only meaningful for numbers in the same base.
    #[must_use]
    pub fn cmp_magnitude(&self, other: &Self) -> Ordering {
        cmp_magnitudes(&self.digits, &other.digits)
    }

    pub(crate) fn check_base(&self, other: usize) -> Result<()> {
        if self.base == other {
            Ok(())
        } else {
            Err(NumberError::MismatchedBase {
                left: self.base,
                right: other,
            })
        }
    }

    // === Rendering ===

    /// Writes the number to `out` in the given notation.
    ///
    /// Digits are written most significant first. Zero is written as the
    /// zero symbol of the base, never with a sign.
    ///
    /// # Errors
    ///
    /// Returns [`NumberError::MismatchedBase`] if `digit_base` does not have
    /// exactly `base()` symbols, and [`NumberError::Write`] if the sink
    /// fails.
    pub fn write_to<W, S>(
        &self,
        out: &mut W,
        digit_base: &DigitBase<D, S>,
        notation: Notation,
    ) -> Result<()>
    where
        W: fmt::Write + ?Sized,
        S: Symbol,
    {
        self.check_base(digit_base.base_size())?;

        let negative = self.is_negative();
        if negative {
            match notation {
                Notation::Infix => out.write_char('-')?,
                Notation::Prefix => out.write_str("- 0 ")?,
                Notation::Postfix => out.write_str("0 ")?,
            }
        }

        if self.digits.is_empty() {
            out.write_char(digit_base.symbol_of(D::zero())?.to_char())?;
        }
        for &d in self.digits.iter().rev() {
            out.write_char(digit_base.symbol_of(d)?.to_char())?;
        }

        if negative && notation == Notation::Postfix {
            out.write_str(" -")?;
        }
        Ok(())
    }

    /// Renders the number into a new string.
    ///
    /// # Errors
    ///
    /// Same as [`BigNumber::write_to`].
    pub fn render<S: Symbol>(
        &self,
        digit_base: &DigitBase<D, S>,
        notation: Notation,
    ) -> Result<String> {
        let mut out = String::with_capacity(self.digits.len() + 4);
        self.write_to(&mut out, digit_base, notation)?;
        Ok(out)
    }
}

impl<D: Digit> PartialEq for BigNumber<D> {
    fn eq(&self, other: &Self) -> bool {
        self.base == other.base
            && self.is_negative() == other.is_negative()
            && significant(&self.digits) == significant(&other.digits)
    }
}

impl<D: Digit> Eq for BigNumber<D> {}

/// Numbers in different bases are unordered.
impl<D: Digit> PartialOrd for BigNumber<D> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.base != other.base {
            return None;
        }
        Some(match (self.is_negative(), other.is_negative()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => self.cmp_magnitude(other),
            (true, true) => other.cmp_magnitude(self),
        })
    }
}

impl<D: Digit> From<&BigNumber<D>> for bool {
    /// False for zero, true otherwise.
    fn from(number: &BigNumber<D>) -> bool {
        !number.is_zero()
    }
}

impl<D: Digit> fmt::Debug for BigNumber<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BigNumber(")?;
        if self.is_negative() {
            f.write_str("-")?;
        }
        f.debug_list().entries(self.digits.iter().rev()).finish()?;
        write!(f, " base {})", self.base)
    }
}
