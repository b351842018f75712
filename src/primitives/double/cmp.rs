//! Ordering for `DoubleUint`
//!
//! Values order lexicographically on `(upper, lower)`: the upper limbs
//! decide unless they are equal. Comparisons against native integers
//! convert the native operand first, in either operand order.

use std::cmp::Ordering;

use super::DoubleUint;
use crate::primitives::Limb;

impl<H: Limb> Ord for DoubleUint<H> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.upper
            .cmp(&other.upper)
            .then_with(|| self.lower.cmp(&other.lower))
    }
}

impl<H: Limb> PartialOrd for DoubleUint<H> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

macro_rules! impl_native_cmp {
    ($($t:ty),* $(,)?) => {
        $(
            impl<H: Limb> PartialEq<$t> for DoubleUint<H> {
                fn eq(&self, other: &$t) -> bool {
                    *self == DoubleUint::<H>::from(*other)
                }
            }

            impl<H: Limb> PartialEq<DoubleUint<H>> for $t {
                fn eq(&self, other: &DoubleUint<H>) -> bool {
                    DoubleUint::<H>::from(*self) == *other
                }
            }

            impl<H: Limb> PartialOrd<$t> for DoubleUint<H> {
                fn partial_cmp(&self, other: &$t) -> Option<Ordering> {
                    Some(self.cmp(&DoubleUint::<H>::from(*other)))
                }
            }

            impl<H: Limb> PartialOrd<DoubleUint<H>> for $t {
                fn partial_cmp(&self, other: &DoubleUint<H>) -> Option<Ordering> {
                    Some(DoubleUint::<H>::from(*self).cmp(other))
                }
            }
        )*
    };
}

impl_native_cmp!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
