use proptest::prelude::*;
use uint256::{DoubleUint, Limb, U256};

/// 128-bit integer over `u64` limbs, checked against native `u128`.
type U128x2 = DoubleUint<u64>;

/// 256-bit integer over composite 128-bit limbs, checked against `U256`.
type U256x4 = DoubleUint<U128x2>;

fn nested(v: U256) -> U256x4 {
    U256x4::from_limbs(U128x2::from(v.upper()), U128x2::from(v.lower()))
}

fn any_u256() -> impl Strategy<Value = U256> {
    (any::<[u8; 32]>(), 0u32..256).prop_map(|(b, s)| U256::from_be_bytes(b) >> s)
}

#[test]
fn composite_limbs_expose_limb_contract() {
    assert_eq!(<U128x2 as Limb>::BITS, 128);
    assert_eq!(<U256x4 as Limb>::BITS, 256);

    let (high, low) = Limb::widening_mul(U128x2::MAX, U128x2::MAX);
    assert_eq!(high.as_u128(), u128::MAX - 1);
    assert_eq!(low.as_u128(), 1);

    let (high, low) = Limb::widening_mul(u128::MAX, u128::MAX);
    assert_eq!((high, low), (u128::MAX - 1, 1));
}

#[test]
fn native_u128_helpers_round_trip() {
    let v = U128x2::from(0x0123_4567_89AB_CDEF_FEDC_BA98_7654_3210u128);

    assert_eq!(v.upper(), 0x0123_4567_89AB_CDEF);
    assert_eq!(v.lower(), 0xFEDC_BA98_7654_3210);
    assert_eq!(v.as_u128(), 0x0123_4567_89AB_CDEF_FEDC_BA98_7654_3210);
    assert_eq!(U128x2::from(-1i8), U128x2::MAX);
}

#[test]
fn nested_display_matches_u256() {
    let v = U256::MAX - 12345u32;

    assert_eq!(nested(v).to_string(), v.to_string());
    assert_eq!(
        U256x4::from_quarters(1u64, 0, 0, 0),
        nested(U256::ONE << 192u32)
    );
}

proptest! {
    #[test]
    fn u64_limbs_match_native_u128(a in any::<u128>(), b in any::<u128>(), n in 0u32..128) {
        let (x, y) = (U128x2::from(a), U128x2::from(b));

        prop_assert_eq!((x + y).as_u128(), a.wrapping_add(b));
        prop_assert_eq!((x - y).as_u128(), a.wrapping_sub(b));
        prop_assert_eq!((x * y).as_u128(), a.wrapping_mul(b));
        prop_assert_eq!((x << n).as_u128(), a << n);
        prop_assert_eq!((x >> n).as_u128(), a >> n);
        prop_assert_eq!(x.bits(), 128 - a.leading_zeros());
        prop_assert_eq!(x.cmp(&y), a.cmp(&b));
        prop_assert_eq!(x.to_string(), a.to_string());

        if b != 0 {
            let (q, r) = x.div_rem(y);
            prop_assert_eq!(q.as_u128(), a / b);
            prop_assert_eq!(r.as_u128(), a % b);
        }
    }

    #[test]
    fn composite_limbs_match_u256(a in any_u256(), b in any_u256(), n in 0u32..256) {
        let (x, y) = (nested(a), nested(b));

        prop_assert_eq!(x + y, nested(a + b));
        prop_assert_eq!(x - y, nested(a - b));
        prop_assert_eq!(x * y, nested(a * b));
        prop_assert_eq!(x << n, nested(a << n));
        prop_assert_eq!(x >> n, nested(a >> n));

        if !b.is_zero() {
            let (q, r) = x.div_rem(y);
            prop_assert_eq!((q, r), (nested(a / b), nested(a % b)));
        }
    }
}

proptest! {
    #[test]
    fn composite_widening_mul_matches_native_limbs(a in any::<u128>(), b in any::<u128>()) {
        let (high, low) = Limb::widening_mul(U128x2::from(a), U128x2::from(b));
        let product = U256::from(a) * U256::from(b);

        prop_assert_eq!(high.as_u128(), product.upper());
        prop_assert_eq!(low.as_u128(), product.lower());
    }
}
