//! Montgomery multiplication via the CIOS method.

use crate::{
    Limb, Word,
    uint::{cmp::ct_lt, sub::conditional_borrowing_sub_assign},
};
use alloc::vec;

/// Computes `a * b * R^-1 mod modulus` where `R = 2^(32 * modulus.len())`,
/// using the Coarsely Integrated Operand Scanning method.
///
/// Each outer round interleaves one limb of schoolbook multiplication with
/// one limb of reduction and a one-limb shift down, so the accumulator only
/// ever holds `n + 2` limbs instead of the full double-width product. The
/// result is canonical (below the modulus).
///
/// `mod_neg_inv` must be `-modulus[0]^-1 mod 2^32`; see [`mod_neg_inv`].
/// Panics if the slice lengths disagree or the modulus is even.
pub fn montgomery_mul(
    a: &[Limb],
    b: &[Limb],
    modulus: &[Limb],
    mod_neg_inv: Limb,
    out: &mut [Limb],
) {
    let n = modulus.len();
    assert!(
        a.len() == n && b.len() == n && out.len() == n,
        "montgomery multiplication length mismatch"
    );
    assert!(modulus[0].0 & 1 == 1, "montgomery modulus must be odd");

    let mut t = vec![Limb::ZERO; n + 2];

    for &b_i in b {
        // Multiply phase: t += a * b[i].
        let mut carry = Limb::ZERO;
        for (j, &a_j) in a.iter().enumerate() {
            let (limb, c) = a_j.carrying_mul_add(b_i, t[j], carry);
            t[j] = limb;
            carry = c;
        }
        let (limb, c) = t[n].overflowing_add(carry);
        t[n] = limb;
        t[n + 1] = c;

        // Reduce phase: `m` is chosen so that `t + m * modulus` clears the
        // low limb, which the shift down then drops.
        let m = t[0].wrapping_mul(mod_neg_inv);
        let (zeroed, mut carry) = m.carrying_mul_add(modulus[0], t[0], Limb::ZERO);
        debug_assert_eq!(zeroed, Limb::ZERO);
        for j in 1..n {
            let (limb, c) = m.carrying_mul_add(modulus[j], t[j], carry);
            t[j - 1] = limb;
            carry = c;
        }
        let (limb, c) = t[n].overflowing_add(carry);
        t[n - 1] = limb;
        t[n] = t[n + 1].wrapping_add(c);
    }

    // The accumulator is now below twice the modulus with at most one
    // overflow bit in t[n], so a single conditional subtraction
    // canonicalizes it.
    out.copy_from_slice(&t[..n]);
    let reduce = t[n].lsb_to_choice() | !ct_lt(out, modulus);
    conditional_borrowing_sub_assign(out, modulus, reduce);
}

/// Computes `-n0^-1 mod 2^32` for the lowest limb `n0` of an odd modulus.
///
/// Hensel lifting: starting from the trivially correct inverse modulo 2,
/// each Newton step `inv <- inv * (2 - n0 * inv)` doubles the number of
/// valid low bits, so five steps cover a full word.
pub const fn mod_neg_inv(n0: Limb) -> Limb {
    debug_assert!(n0.0 & 1 == 1, "modulus must be odd");
    let mut inv: Word = 1;
    let mut i = 0;
    while i < 5 {
        inv = inv.wrapping_mul(2u32.wrapping_sub(n0.0.wrapping_mul(inv)));
        i += 1;
    }
    Limb(inv.wrapping_neg())
}
