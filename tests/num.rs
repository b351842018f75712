#![cfg(feature = "num-traits")]

use num_traits::{
    Bounded, Num, One, Unsigned, WrappingAdd, WrappingMul, WrappingNeg, WrappingSub, Zero,
};
use uint256::{Error, U256};

/// Number of digits `v` needs in `radix`, written against the traits only.
fn digit_count<T: Num + Unsigned + Bounded + PartialOrd + Copy>(mut v: T, radix: T) -> u32 {
    let mut digits = 1;

    while v >= radix {
        v = v / radix;
        digits += 1;
    }

    digits
}

fn span<T: Num + Unsigned + Bounded>() -> T {
    T::max_value() - T::min_value()
}

#[test]
fn num_identities() {
    assert_eq!(<U256 as Zero>::zero(), U256::ZERO);
    assert!(<U256 as Zero>::is_zero(&U256::ZERO));
    assert!(!<U256 as Zero>::is_zero(&U256::new(1u8, 0u8)));

    assert_eq!(<U256 as One>::one(), U256::ONE);
    assert!(<U256 as One>::is_one(&U256::ONE));
}

#[test]
fn num_bounds() {
    assert_eq!(<U256 as Bounded>::min_value(), U256::ZERO);
    assert_eq!(<U256 as Bounded>::max_value(), U256::MAX);
}

#[test]
fn num_from_str_radix() {
    assert_eq!(<U256 as Num>::from_str_radix("ff", 16), Ok(U256::from(255u8)));
    assert_eq!(
        <U256 as Num>::from_str_radix("100000000000000000000000000000000", 16),
        Ok(U256::new(1u8, 0u8))
    );
    assert_eq!(<U256 as Num>::from_str_radix("12", 1), Err(Error::InvalidRadix(1)));
    assert_eq!(<U256 as Num>::from_str_radix("12", 37), Err(Error::InvalidRadix(37)));
    assert_eq!(<U256 as Num>::from_str_radix("1z", 10), Err(Error::InvalidDigit('z')));
}

#[test]
fn num_wrapping_ops() {
    assert_eq!(WrappingSub::wrapping_sub(&U256::ZERO, &U256::ONE), U256::MAX);
    assert_eq!(WrappingAdd::wrapping_add(&U256::MAX, &U256::ONE), U256::ZERO);
    assert_eq!(WrappingMul::wrapping_mul(&U256::MAX, &U256::MAX), U256::ONE);
    assert_eq!(WrappingNeg::wrapping_neg(&U256::ONE), U256::MAX);
    assert_eq!(WrappingNeg::wrapping_neg(&U256::ZERO), U256::ZERO);
}

#[test]
fn num_generic_code_accepts_u256() {
    assert_eq!(digit_count(U256::ZERO, U256::from(10u8)), 1);
    assert_eq!(digit_count(U256::from(999u16), U256::from(10u8)), 3);
    assert_eq!(digit_count(U256::MAX, U256::from(10u8)), 78);
    assert_eq!(digit_count(U256::MAX, U256::from(16u8)), 64);

    assert_eq!(span::<U256>(), U256::MAX);
    assert_eq!(digit_count(u64::MAX, 10), 20);
}
