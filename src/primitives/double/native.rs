//! Operators with a native integer on the left-hand side.
//!
//! `3u64 * x` and friends widen the native operand and produce a
//! `DoubleUint`. The compound forms (`n += x` with `n` native) compute in
//! full width and truncate the result back into the native type, the
//! same way `as` narrows.

use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Mul, MulAssign, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub, SubAssign,
};

use super::DoubleUint;
use crate::primitives::Limb;

macro_rules! impl_native_lhs_op {
    ($t:ty; $($trait:ident $method:ident $assign:ident $assign_method:ident $op:tt),* $(,)?) => {
        $(
            impl<H: Limb> $trait<DoubleUint<H>> for $t {
                type Output = DoubleUint<H>;

                fn $method(self, rhs: DoubleUint<H>) -> Self::Output {
                    DoubleUint::<H>::from(self) $op rhs
                }
            }

            impl<H: Limb> $assign<DoubleUint<H>> for $t {
                fn $assign_method(&mut self, rhs: DoubleUint<H>) {
                    *self = (DoubleUint::<H>::from(*self) $op rhs).as_u128() as $t;
                }
            }
        )*
    };
}

macro_rules! impl_native_lhs {
    ($($t:ty),* $(,)?) => {
        $(
            impl_native_lhs_op!($t;
                Add add AddAssign add_assign +,
                Sub sub SubAssign sub_assign -,
                Mul mul MulAssign mul_assign *,
                Div div DivAssign div_assign /,
                Rem rem RemAssign rem_assign %,
                BitAnd bitand BitAndAssign bitand_assign &,
                BitOr bitor BitOrAssign bitor_assign |,
                BitXor bitxor BitXorAssign bitxor_assign ^,
                Shl shl ShlAssign shl_assign <<,
                Shr shr ShrAssign shr_assign >>,
            );
        )*
    };
}

impl_native_lhs!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
