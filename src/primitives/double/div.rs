//! Division and remainder for `DoubleUint`
//!
//! `checked_div_rem` is the single source of truth: `/`, `%` and the
//! string formatter all project its `(quotient, remainder)` pair. For
//! every non-zero divisor the result satisfies
//! `lhs == quotient * rhs + remainder` and `remainder < rhs`.

use std::ops::{Div, DivAssign, Rem, RemAssign};

use super::DoubleUint;
use crate::error::Error;
use crate::primitives::Limb;

impl<H: Limb> DoubleUint<H> {
    /// Computes quotient and remainder, failing on a zero divisor.
    ///
    /// ```rust
    /// use uint256::{Error, U256};
    ///
    /// let (q, r) = U256::from(17u8).checked_div_rem(U256::from(5u8)).unwrap();
    /// assert_eq!((q, r), (U256::from(3u8), U256::from(2u8)));
    ///
    /// assert_eq!(U256::ONE.checked_div_rem(U256::ZERO), Err(Error::DivisionByZero));
    /// ```
    pub fn checked_div_rem(self, rhs: Self) -> Result<(Self, Self), Error> {
        if rhs.is_zero() {
            return Err(Error::DivisionByZero);
        }

        if rhs == Self::ONE {
            return Ok((self, Self::ZERO));
        }

        if self == rhs {
            return Ok((Self::ONE, Self::ZERO));
        }

        if self.is_zero() || self < rhs {
            return Ok((Self::ZERO, self));
        }

        if self.upper.is_zero() && rhs.upper.is_zero() {
            let (quotient, remainder) = self.lower.div_rem(rhs.lower);
            return Ok((Self::from_lower(quotient), Self::from_lower(remainder)));
        }

        Ok(self.long_division(rhs))
    }

    /// Computes quotient and remainder.
    ///
    /// # Panics
    ///
    /// Panics with "division by zero" if `rhs` is zero, like native
    /// integer division.
    pub fn div_rem(self, rhs: Self) -> (Self, Self) {
        match self.checked_div_rem(rhs) {
            Ok(pair) => pair,
            Err(err) => panic!("{err}"),
        }
    }

    /// Restoring binary long division.
    ///
    /// Walks the dividend from its highest set bit down, so the loop runs
    /// `self.bits()` times. The running remainder is below `rhs` before
    /// each shift; when `rhs` uses the top bit, the shift can push a bit
    /// out, and the true remainder is then `2^BITS` larger and certainly
    /// at least `rhs`.
    #[cfg(not(feature = "speed"))]
    fn long_division(self, rhs: Self) -> (Self, Self) {
        let mut quotient = Self::ZERO;
        let mut remainder = Self::ZERO;

        for index in (0..self.bits()).rev() {
            let carried_out = remainder.bit(Self::BITS - 1);

            remainder = remainder.shl_bits(1);
            if self.bit(index) {
                remainder.lower = remainder.lower | H::ONE;
            }

            if carried_out || remainder >= rhs {
                remainder = remainder.wrapping_sub(rhs);
                quotient.set_bit(index);
            }
        }

        (quotient, remainder)
    }

    /// Shift/subtract division with the divisor aligned to the dividend.
    ///
    /// Requires `self > rhs`, so the alignment shift never overflows.
    #[cfg(feature = "speed")]
    fn long_division(self, rhs: Self) -> (Self, Self) {
        let shift = self.bits() - rhs.bits();

        let mut divisor = rhs.shl_bits(shift);
        let mut adder = Self::ONE.shl_bits(shift);
        let mut quotient = Self::ZERO;
        let mut remainder = self;

        if divisor > remainder {
            divisor = divisor.shr_bits(1);
            adder = adder.shr_bits(1);
        }

        while remainder >= rhs {
            if remainder >= divisor {
                remainder = remainder.wrapping_sub(divisor);
                quotient = quotient | adder;
            }

            divisor = divisor.shr_bits(1);
            adder = adder.shr_bits(1);
        }

        (quotient, remainder)
    }
}

/// Division (`/`).
///
/// # Panics
///
/// Panics with "division by zero" if the divisor is zero.
impl<H: Limb, T: Into<DoubleUint<H>>> Div<T> for DoubleUint<H> {
    type Output = DoubleUint<H>;

    fn div(self, rhs: T) -> Self::Output {
        self.div_rem(rhs.into()).0
    }
}

/// Remainder (`%`).
///
/// # Panics
///
/// Panics with "division by zero" if the divisor is zero.
impl<H: Limb, T: Into<DoubleUint<H>>> Rem<T> for DoubleUint<H> {
    type Output = DoubleUint<H>;

    fn rem(self, rhs: T) -> Self::Output {
        self.div_rem(rhs.into()).1
    }
}

impl<H: Limb, T: Into<DoubleUint<H>>> DivAssign<T> for DoubleUint<H> {
    fn div_assign(&mut self, rhs: T) {
        *self = *self / rhs;
    }
}

impl<H: Limb, T: Into<DoubleUint<H>>> RemAssign<T> for DoubleUint<H> {
    fn rem_assign(&mut self, rhs: T) {
        *self = *self % rhs;
    }
}
