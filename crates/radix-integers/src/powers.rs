//! Exponentiation, integer square roots and integer logarithms.

use std::cmp::Ordering;

use num_traits::{One, Zero};
use smallvec::smallvec;
use tracing::{debug, instrument};

use crate::arithmetic::{
    add_magnitudes, cmp_magnitudes, div_digit, div_rem_magnitudes, mul_magnitudes,
};
use crate::bignum::{BigNumber, Digits};
use crate::digit::Digit;
use crate::error::{NumberError, Result};

impl<D: Digit> BigNumber<D> {
    /// Computes `self^exponent` by binary exponentiation.
    ///
    /// `x^0` is one for every `x`, zero included.
    ///
    /// # Errors
    ///
    /// Returns [`NumberError::MismatchedBase`] if the bases differ and
    /// [`NumberError::Domain`] if the exponent is negative.
    #[instrument(level = "trace", skip_all, fields(base = self.base))]
    pub fn pow(&self, exponent: &Self) -> Result<Self> {
        self.check_base(exponent.base)?;
        if exponent.is_negative() {
            debug!("rejected negative exponent");
            return Err(NumberError::Domain("exponent must not be negative"));
        }

        let base = self.wide_base();
        let odd = div_digit(&exponent.digits, 2, base).1 == 1;

        let mut result: Digits<D> = smallvec![D::one()];
        let mut square = self.digits.clone();
        let mut remaining = exponent.digits.clone();
        while !remaining.is_empty() {
            let (half, bit) = div_digit(&remaining, 2, base);
            if bit == 1 {
                result = mul_magnitudes(&result, &square, base);
            }
            remaining = half;
            if !remaining.is_empty() {
                square = mul_magnitudes(&square, &square, base);
            }
        }

        Ok(Self::from_parts(result, self.base, !(odd && self.is_negative())))
    }

    /// Computes the integer square root, rounded down.
    ///
    /// Uses Newton's iteration starting from a power of the base above the
    /// root.
    ///
    /// # Errors
    ///
    /// Returns [`NumberError::Domain`] if `self` is negative.
    #[instrument(level = "trace", skip_all, fields(base = self.base))]
    pub fn sqrt(&self) -> Result<Self> {
        if self.is_negative() {
            debug!("rejected square root of a negative number");
            return Err(NumberError::Domain("square root of a negative number"));
        }
        if self.is_zero() {
            return Ok(Self::new(self.base));
        }

        let base = self.wide_base();
        let n = &self.digits;

        // base^ceil(len / 2) > sqrt(n)
        let mut x: Digits<D> = smallvec![D::zero(); (n.len() + 1) / 2];
        x.push(D::one());
        loop {
            let (quotient, _) = div_rem_magnitudes(n, &x, base);
            let (y, _) = div_digit(&add_magnitudes(&x, &quotient, base), 2, base);
            if cmp_magnitudes(&y, &x) != Ordering::Less {
                break;
            }
            x = y;
        }

        Ok(Self::from_parts(x, self.base, true))
    }

    /// Computes the integer logarithm of `self` in base `log_base`, rounded
    /// down.
    ///
    /// # Errors
    ///
    /// Returns [`NumberError::MismatchedBase`] if the bases differ and
    /// [`NumberError::Domain`] if `self` is not positive or `log_base` is not
    /// greater than one.
    #[instrument(level = "trace", skip_all, fields(base = self.base))]
    pub fn log(&self, log_base: &Self) -> Result<Self> {
        self.check_base(log_base.base)?;
        if self.is_negative() || self.is_zero() {
            debug!("rejected logarithm of a non-positive number");
            return Err(NumberError::Domain("logarithm of a non-positive number"));
        }
        if log_base.is_negative() || log_base.is_zero() || log_base.is_one() {
            debug!("rejected logarithm base not greater than one");
            return Err(NumberError::Domain("logarithm base must be greater than one"));
        }

        let base = self.wide_base();
        let mut power = log_base.digits.clone();
        let mut exponent = 0;
        while cmp_magnitudes(&power, &self.digits) != Ordering::Greater {
            power = mul_magnitudes(&power, &log_base.digits, base);
            exponent += 1;
        }

        Ok(Self::from_u64(exponent, self.base))
    }

    /// Replaces `self` with `self^exponent`.
    ///
    /// # Errors
    ///
    /// Same as [`BigNumber::pow`]; on error `self` is unchanged.
    pub fn pow_inplace(&mut self, exponent: &Self) -> Result<&mut Self> {
        *self = self.pow(exponent)?;
        Ok(self)
    }

    /// Replaces `self` with its integer square root.
    ///
    /// # Errors
    ///
    /// Same as [`BigNumber::sqrt`]; on error `self` is unchanged.
    pub fn sqrt_inplace(&mut self) -> Result<&mut Self> {
        *self = self.sqrt()?;
        Ok(self)
    }

    /// Replaces `self` with its integer logarithm in base `log_base`.
    ///
    /// # Errors
    ///
    /// Same as [`BigNumber::log`]; on error `self` is unchanged.
    pub fn log_inplace(&mut self, log_base: &Self) -> Result<&mut Self> {
        *self = self.log(log_base)?;
        Ok(self)
    }
}
