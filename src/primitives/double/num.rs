//! `num-traits` integration
//!
//! Marks `DoubleUint` as an unsigned integer for generic numeric code.

use num_traits::{
    Bounded, Num, One, Unsigned, WrappingAdd, WrappingMul, WrappingNeg, WrappingSub, Zero,
};

use super::DoubleUint;
use crate::error::Error;
use crate::primitives::Limb;

impl<H: Limb> Zero for DoubleUint<H> {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        DoubleUint::is_zero(self)
    }
}

impl<H: Limb> One for DoubleUint<H> {
    fn one() -> Self {
        Self::ONE
    }
}

impl<H: Limb> Bounded for DoubleUint<H> {
    fn min_value() -> Self {
        Self::ZERO
    }

    fn max_value() -> Self {
        Self::MAX
    }
}

impl<H: Limb> Num for DoubleUint<H> {
    type FromStrRadixErr = Error;

    fn from_str_radix(src: &str, radix: u32) -> Result<Self, Error> {
        DoubleUint::from_str_radix(src, radix)
    }
}

impl<H: Limb> Unsigned for DoubleUint<H> {}

impl<H: Limb> WrappingAdd for DoubleUint<H> {
    fn wrapping_add(&self, v: &Self) -> Self {
        DoubleUint::wrapping_add(*self, *v)
    }
}

impl<H: Limb> WrappingSub for DoubleUint<H> {
    fn wrapping_sub(&self, v: &Self) -> Self {
        DoubleUint::wrapping_sub(*self, *v)
    }
}

impl<H: Limb> WrappingMul for DoubleUint<H> {
    fn wrapping_mul(&self, v: &Self) -> Self {
        DoubleUint::wrapping_mul(*self, *v)
    }
}

impl<H: Limb> WrappingNeg for DoubleUint<H> {
    fn wrapping_neg(&self) -> Self {
        DoubleUint::wrapping_neg(*self)
    }
}
