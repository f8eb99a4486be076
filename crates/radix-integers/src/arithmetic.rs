//! Digit-wise arithmetic.
//!
//! Magnitudes are digit slices, least significant first, in a base given
//! as a `u64`. The signed operations on [`BigNumber`] combine these with
//! sign rules.

use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign};

use num_traits::Zero;
use smallvec::smallvec;
use tracing::{debug, instrument};

use crate::bignum::{BigNumber, Digits};
use crate::digit::Digit;
use crate::error::{NumberError, Result};

// === Magnitudes ===

/// Drops most significant zeros.
pub(crate) fn trim<D: Digit>(digits: &mut Digits<D>) {
    while digits.last().is_some_and(|d| d.is_zero()) {
        digits.pop();
    }
}

/// Returns the digits without most significant zeros.
pub(crate) fn significant<D: Digit>(digits: &[D]) -> &[D] {
    let len = digits.iter().rposition(|d| !d.is_zero()).map_or(0, |i| i + 1);
    &digits[..len]
}

/// Compares two magnitudes: digit count first, then digits from the most
/// significant.
pub(crate) fn cmp_magnitudes<D: Digit>(a: &[D], b: &[D]) -> Ordering {
    let a = significant(a);
    let b = significant(b);
    a.len()
        .cmp(&b.len())
        .then_with(|| a.iter().rev().cmp(b.iter().rev()))
}

/// Adds two magnitudes with carry propagation.
pub(crate) fn add_magnitudes<D: Digit>(a: &[D], b: &[D], base: u64) -> Digits<D> {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let mut sum = Digits::with_capacity(long.len() + 1);

    let mut carry = 0;
    for (i, &d) in long.iter().enumerate() {
        let s = d.to_wide() + short.get(i).map_or(0, |x| x.to_wide()) + carry;
        if s >= base {
            sum.push(D::from_wide(s - base));
            carry = 1;
        } else {
            sum.push(D::from_wide(s));
            carry = 0;
        }
    }
    if carry != 0 {
        sum.push(D::from_wide(carry));
    }
    sum
}

/// Subtracts `b` from `a` with borrow propagation.
///
/// Requires `|a| >= |b|`.
pub(crate) fn sub_magnitudes<D: Digit>(a: &[D], b: &[D], base: u64) -> Digits<D> {
    debug_assert_ne!(cmp_magnitudes(a, b), Ordering::Less);
    let mut difference = Digits::with_capacity(a.len());

    let mut borrow = 0;
    for (i, &d) in a.iter().enumerate() {
        let d = d.to_wide();
        let s = b.get(i).map_or(0, |x| x.to_wide()) + borrow;
        if d >= s {
            difference.push(D::from_wide(d - s));
            borrow = 0;
        } else {
            difference.push(D::from_wide(d + base - s));
            borrow = 1;
        }
    }
    debug_assert_eq!(borrow, 0);
    trim(&mut difference);
    difference
}

/// Schoolbook multiplication.
///
/// The product has at most `a.len() + b.len()` digits.
pub(crate) fn mul_magnitudes<D: Digit>(a: &[D], b: &[D], base: u64) -> Digits<D> {
    if a.is_empty() || b.is_empty() {
        return Digits::new();
    }

    let mut product: Digits<D> = smallvec![D::zero(); a.len() + b.len()];
    for (i, &x) in a.iter().enumerate() {
        let x = x.to_wide();
        let mut carry = 0;
        for (j, &y) in b.iter().enumerate() {
            let v = product[i + j].to_wide() + x * y.to_wide() + carry;
            product[i + j] = D::from_wide(v % base);
            carry = v / base;
        }
        product[i + b.len()] = D::from_wide(carry);
    }
    trim(&mut product);
    product
}

/// Multiplies a magnitude by a single digit value `m < base`.
pub(crate) fn mul_digit<D: Digit>(a: &[D], m: u64, base: u64) -> Digits<D> {
    if m == 0 || a.is_empty() {
        return Digits::new();
    }

    let mut product = Digits::with_capacity(a.len() + 1);
    let mut carry = 0;
    for &d in a {
        let v = d.to_wide() * m + carry;
        product.push(D::from_wide(v % base));
        carry = v / base;
    }
    if carry != 0 {
        product.push(D::from_wide(carry));
    }
    product
}

/// Divides a magnitude by a small divisor `0 < m <= base`, returning the
/// quotient and remainder.
pub(crate) fn div_digit<D: Digit>(a: &[D], m: u64, base: u64) -> (Digits<D>, u64) {
    let mut quotient: Digits<D> = smallvec![D::zero(); a.len()];
    let mut remainder = 0;
    for i in (0..a.len()).rev() {
        let current = remainder * base + a[i].to_wide();
        quotient[i] = D::from_wide(current / m);
        remainder = current % m;
    }
    trim(&mut quotient);
    (quotient, remainder)
}

/// Schoolbook long division of magnitudes. `b` must be non-zero.
///
/// Each quotient digit is found by binary search over `[0, base)`.
pub(crate) fn div_rem_magnitudes<D: Digit>(a: &[D], b: &[D], base: u64) -> (Digits<D>, Digits<D>) {
    debug_assert!(!significant(b).is_empty());
    if cmp_magnitudes(a, b) == Ordering::Less {
        let mut remainder = Digits::from_slice(a);
        trim(&mut remainder);
        return (Digits::new(), remainder);
    }

    let mut quotient: Digits<D> = smallvec![D::zero(); a.len()];
    let mut remainder: Digits<D> = Digits::with_capacity(b.len() + 1);
    for i in (0..a.len()).rev() {
        // remainder = remainder * base + a[i]
        remainder.insert(0, a[i]);
        trim(&mut remainder);
        if cmp_magnitudes(&remainder, b) == Ordering::Less {
            continue;
        }

        let (mut lo, mut hi) = (1, base - 1);
        while lo < hi {
            let mid = lo + (hi - lo + 1) / 2;
            if cmp_magnitudes(&mul_digit(b, mid, base), &remainder) == Ordering::Greater {
                hi = mid - 1;
            } else {
                lo = mid;
            }
        }
        remainder = sub_magnitudes(&remainder, &mul_digit(b, lo, base), base);
        quotient[i] = D::from_wide(lo);
    }
    trim(&mut quotient);
    (quotient, remainder)
}

// === Signed arithmetic ===

impl<D: Digit> BigNumber<D> {
    pub(crate) fn wide_base(&self) -> u64 {
        self.base as u64
    }

    /// Adds a signed magnitude to `self`.
    fn add_signed(&self, rhs_negative: bool, rhs: &[D]) -> Self {
        let base = self.wide_base();
        let lhs_negative = self.is_negative();

        if lhs_negative == rhs_negative {
            let sum = add_magnitudes(&self.digits, rhs, base);
            return Self::from_parts(sum, self.base, !lhs_negative);
        }

        match cmp_magnitudes(&self.digits, rhs) {
            Ordering::Equal => Self::from_parts(Digits::new(), self.base, true),
            Ordering::Greater => {
                let difference = sub_magnitudes(&self.digits, rhs, base);
                Self::from_parts(difference, self.base, !lhs_negative)
            }
            Ordering::Less => {
                let difference = sub_magnitudes(rhs, &self.digits, base);
                Self::from_parts(difference, self.base, !rhs_negative)
            }
        }
    }

    /// Computes `self + rhs`.
    ///
    /// # Errors
    ///
    /// Returns [`NumberError::MismatchedBase`] if the bases differ.
    pub fn checked_add(&self, rhs: &Self) -> Result<Self> {
        self.check_base(rhs.base)?;
        Ok(self.add_signed(rhs.is_negative(), &rhs.digits))
    }

    /// Computes `self - rhs`.
    ///
    /// # Errors
    ///
    /// Returns [`NumberError::MismatchedBase`] if the bases differ.
    pub fn checked_sub(&self, rhs: &Self) -> Result<Self> {
        self.check_base(rhs.base)?;
        Ok(self.add_signed(!rhs.is_negative(), &rhs.digits))
    }

    /// Computes `self * rhs`.
    ///
    /// # Errors
    ///
    /// Returns [`NumberError::MismatchedBase`] if the bases differ.
    pub fn checked_mul(&self, rhs: &Self) -> Result<Self> {
        self.check_base(rhs.base)?;
        let product = mul_magnitudes(&self.digits, &rhs.digits, self.wide_base());
        Ok(Self::from_parts(
            product,
            self.base,
            self.is_negative() == rhs.is_negative(),
        ))
    }

    /// Computes the truncating quotient and remainder of `self / rhs`.
    ///
    /// The quotient rounds toward zero and the remainder takes the sign of
    /// `self`, so `self == q * rhs + r`.
    ///
    /// # Errors
    ///
    /// Returns [`NumberError::MismatchedBase`] if the bases differ and
    /// [`NumberError::DivideByZero`] if `rhs` is zero.
    #[instrument(level = "trace", skip_all, fields(base = self.base))]
    pub fn div_rem(&self, rhs: &Self) -> Result<(Self, Self)> {
        self.check_base(rhs.base)?;
        if rhs.is_zero() {
            debug!("rejected division by zero");
            return Err(NumberError::DivideByZero);
        }

        let (quotient, remainder) = div_rem_magnitudes(&self.digits, &rhs.digits, self.wide_base());
        Ok((
            Self::from_parts(quotient, self.base, self.is_negative() == rhs.is_negative()),
            Self::from_parts(remainder, self.base, !self.is_negative()),
        ))
    }

    /// Computes the truncating quotient `self / rhs`.
    ///
    /// # Errors
    ///
    /// Same as [`BigNumber::div_rem`].
    pub fn checked_div(&self, rhs: &Self) -> Result<Self> {
        self.div_rem(rhs).map(|(quotient, _)| quotient)
    }

    /// Computes the remainder `self % rhs`, with the sign of `self`.
    ///
    /// # Errors
    ///
    /// Same as [`BigNumber::div_rem`].
    pub fn checked_rem(&self, rhs: &Self) -> Result<Self> {
        self.div_rem(rhs).map(|(_, remainder)| remainder)
    }
}

// === Operator traits ===
//
// These panic where the checked methods return an error, the way primitive
// integer division panics on a zero divisor.

macro_rules! impl_binary_op {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident, $checked:ident) => {
        impl<D: Digit> $Op<&BigNumber<D>> for &BigNumber<D> {
            type Output = BigNumber<D>;

            fn $op(self, rhs: &BigNumber<D>) -> BigNumber<D> {
                self.$checked(rhs).unwrap_or_else(|err| panic!("{err}"))
            }
        }

        impl<D: Digit> $Op<&BigNumber<D>> for BigNumber<D> {
            type Output = BigNumber<D>;

            fn $op(self, rhs: &BigNumber<D>) -> BigNumber<D> {
                <&BigNumber<D> as $Op<&BigNumber<D>>>::$op(&self, rhs)
            }
        }

        impl<D: Digit> $Op for BigNumber<D> {
            type Output = BigNumber<D>;

            fn $op(self, rhs: BigNumber<D>) -> BigNumber<D> {
                <&BigNumber<D> as $Op<&BigNumber<D>>>::$op(&self, &rhs)
            }
        }

        impl<D: Digit> $OpAssign<&BigNumber<D>> for BigNumber<D> {
            fn $op_assign(&mut self, rhs: &BigNumber<D>) {
                *self = <&BigNumber<D> as $Op<&BigNumber<D>>>::$op(self, rhs);
            }
        }

        impl<D: Digit> $OpAssign for BigNumber<D> {
            fn $op_assign(&mut self, rhs: BigNumber<D>) {
                *self = <&BigNumber<D> as $Op<&BigNumber<D>>>::$op(self, &rhs);
            }
        }
    };
}

impl_binary_op!(Add, add, AddAssign, add_assign, checked_add);
impl_binary_op!(Sub, sub, SubAssign, sub_assign, checked_sub);
impl_binary_op!(Mul, mul, MulAssign, mul_assign, checked_mul);
impl_binary_op!(Div, div, DivAssign, div_assign, checked_div);
impl_binary_op!(Rem, rem, RemAssign, rem_assign, checked_rem);

impl<D: Digit> Neg for BigNumber<D> {
    type Output = Self;

    fn neg(mut self) -> Self {
        self.positive = !self.positive || self.digits.is_empty();
        self
    }
}

impl<D: Digit> Neg for &BigNumber<D> {
    type Output = BigNumber<D>;

    fn neg(self) -> BigNumber<D> {
        self.negated()
    }
}
