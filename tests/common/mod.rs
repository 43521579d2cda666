//! Common functionality shared between tests.

// Different tests may use only a subset of the available functionality
#![allow(dead_code)]

use monty_bigint::Uint;
use num_bigint::BigUint;

/// `Uint` to `num_bigint::BigUint`
pub fn to_biguint(uint: &Uint) -> BigUint {
    BigUint::from_bytes_be(&uint.to_be_bytes())
}

/// `num_bigint::BigUint` to a `Uint` of exactly `nlimbs` limbs.
///
/// Panics if the value does not fit.
pub fn to_uint(big: &BigUint, nlimbs: usize) -> Uint {
    Uint::from_be_slice(&big.to_bytes_be(), nlimbs)
}
