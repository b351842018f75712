//! Arithmetic and bitwise operations for `DoubleUint`
//!
//! Every operator is built from limb operations only:
//! - bitwise operators apply limb by limb
//! - shifts move bits across the limb boundary
//! - addition and subtraction propagate a single carry or borrow
//! - multiplication combines the limb cross-products
//!
//! The right-hand side of each binary operator may be any value
//! convertible into the same type, so native integers and the limb type
//! are accepted and zero-extended (sign-extended for signed natives).
//! All arithmetic wraps; there is no overflow check.

use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Mul,
    MulAssign, Neg, Not, Shl, ShlAssign, Shr, ShrAssign, Sub, SubAssign,
};

use super::DoubleUint;
use crate::primitives::Limb;

/// Adds two limbs, returning the wrapped sum and whether it carried.
fn add_with_carry<H: Limb>(lhs: H, rhs: H) -> (H, bool) {
    let sum = lhs.wrapping_add(rhs);
    (sum, sum < lhs)
}

impl<H: Limb> DoubleUint<H> {
    /// Addition modulo `2^BITS`.
    ///
    /// The low sum wrapped exactly when it is smaller than either addend;
    /// that carry is folded into the upper limb.
    pub fn wrapping_add(self, rhs: Self) -> Self {
        let lower = self.lower.wrapping_add(rhs.lower);
        let carry = if lower < self.lower { H::ONE } else { H::ZERO };

        Self::from_limbs(
            self.upper.wrapping_add(rhs.upper).wrapping_add(carry),
            lower,
        )
    }

    /// Subtraction modulo `2^BITS`.
    pub fn wrapping_sub(self, rhs: Self) -> Self {
        let lower = self.lower.wrapping_sub(rhs.lower);
        let borrow = if lower > self.lower { H::ONE } else { H::ZERO };

        Self::from_limbs(
            self.upper.wrapping_sub(rhs.upper).wrapping_sub(borrow),
            lower,
        )
    }

    /// Multiplication modulo `2^BITS`.
    ///
    /// With `a = a1·2^k + a0` and `b = b1·2^k + b0`, the product is
    /// `(a1·b0 + a0·b1)·2^k + a0·b0`; the cross terms only contribute
    /// their low limb and `a1·b1` vanishes entirely.
    pub fn wrapping_mul(self, rhs: Self) -> Self {
        let (carry, lower) = self.lower.widening_mul(rhs.lower);
        let cross = self
            .upper
            .wrapping_mul(rhs.lower)
            .wrapping_add(self.lower.wrapping_mul(rhs.upper));

        Self::from_limbs(carry.wrapping_add(cross), lower)
    }

    /// Full double-width product, returned as `(high, low)`.
    pub(crate) fn widening_mul(self, rhs: Self) -> (Self, Self) {
        let (h00, l00) = self.lower.widening_mul(rhs.lower);
        let (h01, l01) = self.lower.widening_mul(rhs.upper);
        let (h10, l10) = self.upper.widening_mul(rhs.lower);
        let (h11, l11) = self.upper.widening_mul(rhs.upper);

        let (r1, c1a) = add_with_carry(h00, l01);
        let (r1, c1b) = add_with_carry(r1, l10);

        let (r2, c2a) = add_with_carry(h01, h10);
        let (r2, c2b) = add_with_carry(r2, l11);
        let (r2, c2c) = add_with_carry(r2, H::from_u128(c1a as u128 + c1b as u128));

        // The full product fits in four limbs, so the top cannot carry.
        let r3 = h11.wrapping_add(H::from_u128(c2a as u128 + c2b as u128 + c2c as u128));

        (Self::from_limbs(r3, r2), Self::from_limbs(r1, l00))
    }

    /// Two's-complement negation, `!self + 1`.
    pub fn wrapping_neg(self) -> Self {
        (!self).wrapping_add(Self::ONE)
    }

    /// Interprets a shift operand, returning `None` when every bit would
    /// be shifted out.
    fn shift_amount(shift: Self) -> Option<u32> {
        if !shift.upper.is_zero() || shift.lower >= H::from_u128(Self::BITS as u128) {
            None
        } else {
            Some(shift.lower.low_u128() as u32)
        }
    }

    /// Left shift by `n` bits.
    ///
    /// The `n == 0` and `n == H::BITS` cases never reach the cross-limb
    /// formula, which would otherwise shift a limb by its full width.
    pub(crate) fn shl_bits(self, n: u32) -> Self {
        let half = H::BITS;

        if n == 0 {
            self
        } else if n >= Self::BITS {
            Self::ZERO
        } else if n == half {
            Self::from_limbs(self.lower, H::ZERO)
        } else if n < half {
            Self::from_limbs(
                (self.upper << n) | (self.lower >> (half - n)),
                self.lower << n,
            )
        } else {
            Self::from_limbs(self.lower << (n - half), H::ZERO)
        }
    }

    /// Right shift by `n` bits.
    pub(crate) fn shr_bits(self, n: u32) -> Self {
        let half = H::BITS;

        if n == 0 {
            self
        } else if n >= Self::BITS {
            Self::ZERO
        } else if n == half {
            Self::from_limbs(H::ZERO, self.upper)
        } else if n < half {
            Self::from_limbs(
                self.upper >> n,
                (self.lower >> n) | (self.upper << (half - n)),
            )
        } else {
            Self::from_limbs(H::ZERO, self.upper >> (n - half))
        }
    }
}

macro_rules! impl_bitwise {
    ($trait:ident, $method:ident, $assign:ident, $assign_method:ident, $op:tt) => {
        impl<H: Limb, T: Into<DoubleUint<H>>> $trait<T> for DoubleUint<H> {
            type Output = DoubleUint<H>;

            fn $method(self, rhs: T) -> Self::Output {
                let rhs = rhs.into();
                DoubleUint::from_limbs(self.upper $op rhs.upper, self.lower $op rhs.lower)
            }
        }

        impl<H: Limb, T: Into<DoubleUint<H>>> $assign<T> for DoubleUint<H> {
            fn $assign_method(&mut self, rhs: T) {
                *self = *self $op rhs;
            }
        }
    };
}

impl_bitwise!(BitAnd, bitand, BitAndAssign, bitand_assign, &);
impl_bitwise!(BitOr, bitor, BitOrAssign, bitor_assign, |);
impl_bitwise!(BitXor, bitxor, BitXorAssign, bitxor_assign, ^);

/// Bitwise complement of both limbs.
impl<H: Limb> Not for DoubleUint<H> {
    type Output = DoubleUint<H>;

    fn not(self) -> Self::Output {
        DoubleUint::from_limbs(!self.upper, !self.lower)
    }
}

/// Logical left shift (`<<`).
///
/// The amount is read as an unsigned value of the same width; amounts of
/// `BITS` or more yield zero.
impl<H: Limb, T: Into<DoubleUint<H>>> Shl<T> for DoubleUint<H> {
    type Output = DoubleUint<H>;

    fn shl(self, rhs: T) -> Self::Output {
        match DoubleUint::shift_amount(rhs.into()) {
            Some(n) => self.shl_bits(n),
            None => DoubleUint::ZERO,
        }
    }
}

/// Logical right shift (`>>`).
impl<H: Limb, T: Into<DoubleUint<H>>> Shr<T> for DoubleUint<H> {
    type Output = DoubleUint<H>;

    fn shr(self, rhs: T) -> Self::Output {
        match DoubleUint::shift_amount(rhs.into()) {
            Some(n) => self.shr_bits(n),
            None => DoubleUint::ZERO,
        }
    }
}

impl<H: Limb, T: Into<DoubleUint<H>>> ShlAssign<T> for DoubleUint<H> {
    fn shl_assign(&mut self, rhs: T) {
        *self = *self << rhs;
    }
}

impl<H: Limb, T: Into<DoubleUint<H>>> ShrAssign<T> for DoubleUint<H> {
    fn shr_assign(&mut self, rhs: T) {
        *self = *self >> rhs;
    }
}

impl<H: Limb, T: Into<DoubleUint<H>>> Add<T> for DoubleUint<H> {
    type Output = DoubleUint<H>;

    fn add(self, rhs: T) -> Self::Output {
        self.wrapping_add(rhs.into())
    }
}

impl<H: Limb, T: Into<DoubleUint<H>>> AddAssign<T> for DoubleUint<H> {
    fn add_assign(&mut self, rhs: T) {
        *self = self.wrapping_add(rhs.into());
    }
}

impl<H: Limb, T: Into<DoubleUint<H>>> Sub<T> for DoubleUint<H> {
    type Output = DoubleUint<H>;

    fn sub(self, rhs: T) -> Self::Output {
        self.wrapping_sub(rhs.into())
    }
}

impl<H: Limb, T: Into<DoubleUint<H>>> SubAssign<T> for DoubleUint<H> {
    fn sub_assign(&mut self, rhs: T) {
        *self = self.wrapping_sub(rhs.into());
    }
}

impl<H: Limb, T: Into<DoubleUint<H>>> Mul<T> for DoubleUint<H> {
    type Output = DoubleUint<H>;

    fn mul(self, rhs: T) -> Self::Output {
        self.wrapping_mul(rhs.into())
    }
}

impl<H: Limb, T: Into<DoubleUint<H>>> MulAssign<T> for DoubleUint<H> {
    fn mul_assign(&mut self, rhs: T) {
        *self = self.wrapping_mul(rhs.into());
    }
}

/// Two's-complement negation in the ring of integers modulo `2^BITS`.
impl<H: Limb> Neg for DoubleUint<H> {
    type Output = DoubleUint<H>;

    fn neg(self) -> Self::Output {
        self.wrapping_neg()
    }
}
