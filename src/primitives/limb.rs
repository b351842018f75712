//! Limb contract
//!
//! A limb is one half of a double-width integer. `DoubleUint<H>` is
//! written entirely against this trait, so any unsigned type that can
//! provide wrapping arithmetic, a widening multiply and a division with
//! remainder can serve as its half.
//!
//! Implementations are provided for `u64`, `u128`, and for `DoubleUint`
//! itself, which lets composite limbs nest.

use std::fmt::Debug;
use std::hash::Hash;
use std::ops::{BitAnd, BitOr, BitXor, Not, Shl, Shr};

use super::DoubleUint;

/// Unsigned fixed-width integer usable as one half of a `DoubleUint`.
///
/// Shift operators are only ever invoked with amounts strictly below
/// `BITS`.
pub trait Limb:
    Copy
    + Debug
    + Default
    + Eq
    + Ord
    + Hash
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
    + Shl<u32, Output = Self>
    + Shr<u32, Output = Self>
{
    /// Width of the limb in bits.
    const BITS: u32;
    const ZERO: Self;
    const ONE: Self;
    const MAX: Self;

    /// The type of each half of the limb.
    type Half: Copy;

    /// Builds a limb as `upper * 2^(BITS / 2) + lower`.
    fn from_halves(upper: Self::Half, lower: Self::Half) -> Self;

    fn wrapping_add(self, rhs: Self) -> Self;
    fn wrapping_sub(self, rhs: Self) -> Self;
    fn wrapping_mul(self, rhs: Self) -> Self;

    /// Full product of two limbs as `(high, low)`.
    fn widening_mul(self, rhs: Self) -> (Self, Self);

    /// Quotient and remainder. The divisor is never zero.
    fn div_rem(self, rhs: Self) -> (Self, Self);

    /// Bit length of the value: index of the highest set bit, 1-based,
    /// and 0 for zero.
    fn bits(self) -> u32;

    /// Truncating conversion from `u128`.
    fn from_u128(value: u128) -> Self;

    /// Truncating conversion to `u128`.
    fn low_u128(self) -> u128;

    fn is_zero(self) -> bool {
        self == Self::ZERO
    }
}

impl Limb for u64 {
    const BITS: u32 = u64::BITS;
    const ZERO: Self = 0;
    const ONE: Self = 1;
    const MAX: Self = u64::MAX;

    type Half = u32;

    fn from_halves(upper: u32, lower: u32) -> Self {
        ((upper as u64) << 32) | lower as u64
    }

    fn wrapping_add(self, rhs: Self) -> Self {
        u64::wrapping_add(self, rhs)
    }

    fn wrapping_sub(self, rhs: Self) -> Self {
        u64::wrapping_sub(self, rhs)
    }

    fn wrapping_mul(self, rhs: Self) -> Self {
        u64::wrapping_mul(self, rhs)
    }

    fn widening_mul(self, rhs: Self) -> (Self, Self) {
        let product = self as u128 * rhs as u128;

        ((product >> 64) as u64, product as u64)
    }

    fn div_rem(self, rhs: Self) -> (Self, Self) {
        (self / rhs, self % rhs)
    }

    fn bits(self) -> u32 {
        u64::BITS - self.leading_zeros()
    }

    fn from_u128(value: u128) -> Self {
        value as u64
    }

    fn low_u128(self) -> u128 {
        self as u128
    }
}

impl Limb for u128 {
    const BITS: u32 = u128::BITS;
    const ZERO: Self = 0;
    const ONE: Self = 1;
    const MAX: Self = u128::MAX;

    type Half = u64;

    fn from_halves(upper: u64, lower: u64) -> Self {
        ((upper as u128) << 64) | lower as u128
    }

    fn wrapping_add(self, rhs: Self) -> Self {
        u128::wrapping_add(self, rhs)
    }

    fn wrapping_sub(self, rhs: Self) -> Self {
        u128::wrapping_sub(self, rhs)
    }

    fn wrapping_mul(self, rhs: Self) -> Self {
        u128::wrapping_mul(self, rhs)
    }

    /// Schoolbook product over 64-bit halves.
    fn widening_mul(self, rhs: Self) -> (Self, Self) {
        const MASK: u128 = u64::MAX as u128;

        let (a1, a0) = (self >> 64, self & MASK);
        let (b1, b0) = (rhs >> 64, rhs & MASK);

        let p00 = a0 * b0;
        let p01 = a0 * b1;
        let p10 = a1 * b0;
        let p11 = a1 * b1;

        // At most 3 * (2^64 - 1), cannot overflow.
        let mid = (p00 >> 64) + (p01 & MASK) + (p10 & MASK);

        let low = (p00 & MASK) | (mid << 64);
        let high = p11 + (p01 >> 64) + (p10 >> 64) + (mid >> 64);

        (high, low)
    }

    fn div_rem(self, rhs: Self) -> (Self, Self) {
        (self / rhs, self % rhs)
    }

    fn bits(self) -> u32 {
        u128::BITS - self.leading_zeros()
    }

    fn from_u128(value: u128) -> Self {
        value
    }

    fn low_u128(self) -> u128 {
        self
    }
}

impl<H: Limb> Limb for DoubleUint<H> {
    const BITS: u32 = 2 * H::BITS;
    const ZERO: Self = DoubleUint::from_limbs(H::ZERO, H::ZERO);
    const ONE: Self = DoubleUint::from_limbs(H::ZERO, H::ONE);
    const MAX: Self = DoubleUint::from_limbs(H::MAX, H::MAX);

    type Half = H;

    fn from_halves(upper: H, lower: H) -> Self {
        DoubleUint::from_limbs(upper, lower)
    }

    fn wrapping_add(self, rhs: Self) -> Self {
        DoubleUint::wrapping_add(self, rhs)
    }

    fn wrapping_sub(self, rhs: Self) -> Self {
        DoubleUint::wrapping_sub(self, rhs)
    }

    fn wrapping_mul(self, rhs: Self) -> Self {
        DoubleUint::wrapping_mul(self, rhs)
    }

    fn widening_mul(self, rhs: Self) -> (Self, Self) {
        DoubleUint::widening_mul(self, rhs)
    }

    fn div_rem(self, rhs: Self) -> (Self, Self) {
        DoubleUint::div_rem(self, rhs)
    }

    fn bits(self) -> u32 {
        DoubleUint::bits(&self)
    }

    fn from_u128(value: u128) -> Self {
        DoubleUint::from_u128(value)
    }

    fn low_u128(self) -> u128 {
        DoubleUint::as_u128(&self)
    }
}
