//! Slice-level `Uint` arithmetic, checked against `num-bigint`.

mod common;

use common::{to_biguint, to_uint};
use monty_bigint::{Limb, Uint};
use num_bigint::BigUint;
use proptest::prelude::*;

const NLIMBS: usize = 8;

fn uint() -> impl Strategy<Value = Uint> {
    any::<[u32; NLIMBS]>().prop_map(|words| Uint::from_words(&words))
}

fn modulus_and_reduced_pair() -> impl Strategy<Value = (Uint, Uint, Uint)> {
    (any::<[u32; NLIMBS]>(), uint(), uint())
        .prop_filter("modulus must be nonzero", |(m, _, _)| {
            m.iter().any(|&word| word != 0)
        })
        .prop_map(|(m, a, b)| {
            let modulus = Uint::from_words(&m);
            let big_m = to_biguint(&modulus);
            let a = to_uint(&(to_biguint(&a) % &big_m), NLIMBS);
            let b = to_uint(&(to_biguint(&b) % &big_m), NLIMBS);
            (modulus, a, b)
        })
}

proptest! {
    #[test]
    fn adc_matches_oracle(a in uint(), b in uint()) {
        let (sum, carry) = a.adc(&b, Limb::ZERO);
        let expected = to_biguint(&a) + to_biguint(&b);
        let actual = to_biguint(&sum) + (BigUint::from(carry.0) << (32 * NLIMBS));
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn sbb_matches_oracle(a in uint(), b in uint()) {
        let (diff, borrow) = a.sbb(&b, Limb::ZERO);
        let (big_a, big_b) = (to_biguint(&a), to_biguint(&b));
        if big_a >= big_b {
            prop_assert_eq!(borrow, Limb::ZERO);
            prop_assert_eq!(to_biguint(&diff), big_a - big_b);
        } else {
            prop_assert_eq!(borrow, Limb::MAX);
            let wrapped = (BigUint::from(1u8) << (32 * NLIMBS)) + big_a - big_b;
            prop_assert_eq!(to_biguint(&diff), wrapped);
        }
    }

    #[test]
    fn abs_diff_matches_oracle(a in uint(), b in uint()) {
        let (diff, sign) = a.abs_diff(&b);
        let (big_a, big_b) = (to_biguint(&a), to_biguint(&b));
        let expected = if big_a >= big_b {
            &big_a - &big_b
        } else {
            &big_b - &big_a
        };
        prop_assert_eq!(to_biguint(&diff), expected);
        prop_assert_eq!(bool::from(sign), big_a < big_b);
    }

    #[test]
    fn add_mod_matches_oracle((modulus, a, b) in modulus_and_reduced_pair()) {
        let sum = a.add_mod(&b, &modulus);
        let expected = (to_biguint(&a) + to_biguint(&b)) % to_biguint(&modulus);
        prop_assert_eq!(to_biguint(&sum), expected);
    }

    #[test]
    fn sub_mod_matches_oracle((modulus, a, b) in modulus_and_reduced_pair()) {
        let diff = a.sub_mod(&b, &modulus);
        let big_m = to_biguint(&modulus);
        let expected = (to_biguint(&a) + &big_m - to_biguint(&b)) % &big_m;
        prop_assert_eq!(to_biguint(&diff), expected);
    }

    #[test]
    fn double_mod_matches_oracle((modulus, a, _) in modulus_and_reduced_pair()) {
        let doubled = a.double_mod(&modulus);
        let expected = (to_biguint(&a) << 1) % to_biguint(&modulus);
        prop_assert_eq!(to_biguint(&doubled), expected);
    }

    #[test]
    fn be_bytes_round_trip(a in uint()) {
        let bytes = a.to_be_bytes();
        prop_assert_eq!(Uint::from_be_slice(&bytes, NLIMBS), a);
    }
}

#[test]
fn abs_diff_of_equal_operands_is_zero_with_clear_sign() {
    let a = Uint::from_words(&[5; NLIMBS]);
    let (diff, sign) = a.abs_diff(&a);
    assert!(bool::from(diff.is_zero()));
    assert!(!bool::from(sign));
}

#[test]
#[should_panic(expected = "length mismatch")]
fn mixed_widths_are_rejected() {
    let _ = Uint::zero(2).adc(&Uint::zero(4), Limb::ZERO);
}
