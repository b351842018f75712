//! Conversions between `DoubleUint` and native integers.
//!
//! Unsigned natives are zero-extended into the low bits. Signed natives
//! are sign-extended, so a negative input becomes its two's-complement
//! pattern over the full width (`-1` maps to `MAX`), exactly as `as`
//! behaves between native integers.

use crate::error::Error;
use crate::primitives::{DoubleUint, Limb};

macro_rules! impl_from_unsigned {
    ($($t:ty),* $(,)?) => {
        $(
            impl<H: Limb> From<$t> for DoubleUint<H> {
                fn from(value: $t) -> Self {
                    DoubleUint::from_u128(value as u128)
                }
            }

            /// Fails with `Error::Overflow` unless the value fits.
            impl<H: Limb> TryFrom<DoubleUint<H>> for $t {
                type Error = Error;

                fn try_from(value: DoubleUint<H>) -> Result<Self, Self::Error> {
                    if value > DoubleUint::<H>::from(<$t>::MAX) {
                        return Err(Error::Overflow);
                    }

                    Ok(value.as_u128() as $t)
                }
            }
        )*
    };
}

macro_rules! impl_from_signed {
    ($($t:ty),* $(,)?) => {
        $(
            impl<H: Limb> From<$t> for DoubleUint<H> {
                fn from(value: $t) -> Self {
                    DoubleUint::from_i128(value as i128)
                }
            }
        )*
    };
}

impl_from_unsigned!(u8, u16, u32, u64, u128, usize);
impl_from_signed!(i8, i16, i32, i64, i128, isize);

impl<H: Limb> From<bool> for DoubleUint<H> {
    fn from(value: bool) -> Self {
        DoubleUint::from_u128(value as u128)
    }
}

/// Non-zero test: `true` if either limb is non-zero.
impl<H: Limb> From<DoubleUint<H>> for bool {
    fn from(value: DoubleUint<H>) -> Self {
        !value.is_zero()
    }
}
