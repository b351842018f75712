//! Double-width unsigned integer
//!
//! This module defines `DoubleUint<H>`, an unsigned integer made of two
//! limbs of type `H`. The value is `upper * 2^BITS(H) + lower`, and the
//! pair is the only representation of a given value: each limb already
//! spans its full width, so no normalization step exists.
//!
//! It is designed as a **simple, explicit value type**. Every operation
//! returns a new value; only the compound assignment operators mutate
//! their receiver.

use crate::primitives::Limb;

/// Unsigned integer of `2 * H::BITS` bits composed from two limbs.
///
/// Arithmetic wraps modulo `2^(2 * H::BITS)`, matching native unsigned
/// integers. Limbs are compared most significant first, so the derived
/// equality and the manual ordering agree with numeric order.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct DoubleUint<H> {
    pub(crate) upper: H,
    pub(crate) lower: H,
}

impl<H: Limb> DoubleUint<H> {
    /// Width of the integer in bits.
    pub const BITS: u32 = 2 * H::BITS;

    /// The value zero.
    pub const ZERO: Self = Self::from_limbs(H::ZERO, H::ZERO);

    /// The value one.
    pub const ONE: Self = Self::from_limbs(H::ZERO, H::ONE);

    /// The maximum representable value, every bit set.
    pub const MAX: Self = Self::from_limbs(H::MAX, H::MAX);

    /// Builds a value directly from its two limbs.
    pub const fn from_limbs(upper: H, lower: H) -> Self {
        Self { upper, lower }
    }

    /// Builds a value from an `(upper, lower)` pair of limb-convertible
    /// integers.
    ///
    /// ```rust
    /// use uint256::U256;
    ///
    /// let v = U256::new(1u8, 0u8);
    /// assert_eq!(v, U256::ONE << 128u32);
    /// ```
    pub fn new(upper: impl Into<H>, lower: impl Into<H>) -> Self {
        Self::from_limbs(upper.into(), lower.into())
    }

    /// Builds a value from four quarter words, most significant first.
    pub fn from_quarters(
        upper_upper: H::Half,
        upper_lower: H::Half,
        lower_upper: H::Half,
        lower_lower: H::Half,
    ) -> Self {
        Self::from_limbs(
            H::from_halves(upper_upper, upper_lower),
            H::from_halves(lower_upper, lower_lower),
        )
    }

    /// Places a single limb in the low half.
    pub(crate) fn from_lower(lower: H) -> Self {
        Self::from_limbs(H::ZERO, lower)
    }

    /// Truncating conversion from `u128`.
    pub(crate) fn from_u128(value: u128) -> Self {
        if H::BITS >= u128::BITS {
            Self::from_lower(H::from_u128(value))
        } else {
            Self::from_limbs(H::from_u128(value >> H::BITS), H::from_u128(value))
        }
    }

    /// Sign-extending conversion from `i128`.
    ///
    /// Negative inputs produce the two's-complement pattern of the full
    /// width, as `as` does between native integers.
    pub(crate) fn from_i128(value: i128) -> Self {
        let extended = Self::from_u128(value as u128);

        if value < 0 {
            extended | !Self::from_u128(u128::MAX)
        } else {
            extended
        }
    }

    /// The most significant limb.
    pub fn upper(&self) -> H {
        self.upper
    }

    /// The least significant limb.
    pub fn lower(&self) -> H {
        self.lower
    }

    /// Returns the bit length of the value.
    ///
    /// This is the 1-based index of the highest set bit, or 0 when the
    /// value is zero. Shifts and division use it to bound their work.
    pub fn bits(&self) -> u32 {
        if self.upper.is_zero() {
            self.lower.bits()
        } else {
            H::BITS + self.upper.bits()
        }
    }

    /// Counts the number of leading zero bits in the integer.
    ///
    /// # Returns
    /// The number of leading zero bits in the range `0..=BITS`.
    pub fn leading_zeros(&self) -> u32 {
        Self::BITS - self.bits()
    }

    /// Returns `true` if both limbs are zero.
    pub fn is_zero(&self) -> bool {
        self.upper.is_zero() && self.lower.is_zero()
    }

    /// Truncates to the low 8 bits.
    pub fn as_u8(&self) -> u8 {
        self.as_u128() as u8
    }

    /// Truncates to the low 16 bits.
    pub fn as_u16(&self) -> u16 {
        self.as_u128() as u16
    }

    /// Truncates to the low 32 bits.
    pub fn as_u32(&self) -> u32 {
        self.as_u128() as u32
    }

    /// Truncates to the low 64 bits.
    pub fn as_u64(&self) -> u64 {
        self.as_u128() as u64
    }

    /// Truncates to the low 128 bits.
    ///
    /// For `U256` this is exactly the lower limb.
    pub fn as_u128(&self) -> u128 {
        if H::BITS >= u128::BITS {
            self.lower.low_u128()
        } else {
            (self.upper.low_u128() << H::BITS) | self.lower.low_u128()
        }
    }

    /// Returns whether bit `index` is set. `index` must be below `BITS`.
    pub(crate) fn bit(&self, index: u32) -> bool {
        let (limb, offset) = if index >= H::BITS {
            (self.upper, index - H::BITS)
        } else {
            (self.lower, index)
        };

        !((limb >> offset) & H::ONE).is_zero()
    }

    /// Sets bit `index`. `index` must be below `BITS`.
    pub(crate) fn set_bit(&mut self, index: u32) {
        if index >= H::BITS {
            self.upper = self.upper | (H::ONE << (index - H::BITS));
        } else {
            self.lower = self.lower | (H::ONE << index);
        }
    }

    /// Adds one in place, wrapping at `MAX`, and returns the receiver.
    pub fn increment(&mut self) -> &mut Self {
        *self = self.wrapping_add(Self::ONE);
        self
    }

    /// Subtracts one in place, wrapping at zero, and returns the receiver.
    pub fn decrement(&mut self) -> &mut Self {
        *self = self.wrapping_sub(Self::ONE);
        self
    }

    /// Adds one in place and returns the value held before the update.
    pub fn post_increment(&mut self) -> Self {
        let prior = *self;
        self.increment();
        prior
    }

    /// Subtracts one in place and returns the value held before the update.
    pub fn post_decrement(&mut self) -> Self {
        let prior = *self;
        self.decrement();
        prior
    }
}
