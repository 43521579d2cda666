//! Karatsuba multiplication over a caller-provided scratch arena.
//!
//! The idea is that we break x and y up into two half-width numbers
//! (multiplying by b is just a limb shift):
//!
//! x = x0 + x1 * b
//! y = y0 + y1 * b
//!
//! so that one width-n multiply becomes three width-n/2 multiplies:
//!
//! x * y = x1 * y1 * b^2
//!       + (x1 * y0 + x0 * y1) * b
//!       + x0 * y0
//!
//! The cross term is recovered without extra half-products from the sum
//! form, which stays non-negative at every step:
//!
//! x1 * y0 + x0 * y1 = (x1 + x0) * (y1 + y0) - x1 * y1 - x0 * y0
//!
//! Each half sum may overflow its n/2 limbs by one bit, so the expanded
//! multiply keeps those carry bits out of the recursive product and folds
//! them back in as shifted corrections afterwards.
//!
//! No allocation happens inside the recursion: every call carves disjoint
//! sub-ranges out of the scratch arena handed to it, and the two sizing
//! functions below say exactly how many limbs a top-level call must reserve.

use super::schoolbook;
use crate::{
    Limb,
    uint::{
        add::{carrying_add, carrying_add_assign, conditional_carrying_add_assign},
        sub::borrowing_sub_assign,
    },
};

/// Widths at or below this fall back to schoolbook multiplication.
pub const KARATSUBA_THRESHOLD: usize = 2;

/// Scratch limbs required by [`karatsuba_mul`] at width `n`.
///
/// A recursive call owns `2n + 5` limbs (an `n+1`-limb cross-term buffer and
/// the expanded multiply's fixed region) plus the expanded multiply's own
/// recursive needs. The recursive sub-products reuse the same tail region
/// sequentially, so they add nothing on top.
pub const fn scratch_needed(n: usize) -> usize {
    if n == 1 {
        0
    } else {
        2 * n + 5 + scratch_needed_exp(n / 2)
    }
}

/// Scratch limbs required by [`expanded_mul`] whose half inputs are `n`
/// limbs wide: two `n+1`-limb sums, one sign-product limb, two zero-sentinel
/// limbs, plus the recursive multiply of the two `n`-limb low sums.
pub const fn scratch_needed_exp(n: usize) -> usize {
    if n == 1 {
        2 * n + 5
    } else {
        2 * n + 5 + scratch_needed(n)
    }
}

/// Computes `x * y` into the double-width `out`, using `scratch` as the
/// working arena.
///
/// The width must be a power of two and `scratch` must hold at least
/// [`scratch_needed`]`(n)` limbs; an undersized arena is rejected before any
/// limb is written, since the recursion would otherwise scribble past its
/// sub-ranges. `out` and `scratch` contents on entry are ignored.
pub fn karatsuba_mul(x: &[Limb], y: &[Limb], out: &mut [Limb], scratch: &mut [Limb]) {
    let n = x.len();
    assert!(n.is_power_of_two(), "karatsuba width must be a power of two");
    assert!(
        y.len() == n && out.len() == 2 * n,
        "karatsuba length mismatch"
    );
    assert!(
        scratch.len() >= scratch_needed(n),
        "karatsuba scratch undersized"
    );

    if n == 1 {
        (out[0], out[1]) = x[0].widening_mul(y[0]);
        return;
    }

    if n <= KARATSUBA_THRESHOLD {
        schoolbook::mul_wide(x, y, out, Limb::ZERO);
        return;
    }

    let half = n / 2;
    let (x0, x1) = x.split_at(half);
    let (y0, y1) = y.split_at(half);

    // Arena layout: `t` holds (x1+x0)(y1+y0) and later the isolated cross
    // term; `tail` is reused sequentially by the expanded multiply, both
    // recursive sub-products, and the product-sum buffer. None of those
    // users overlap in time.
    let (t, tail) = scratch.split_at_mut(n + 1);

    // (x1+x0)(y1+y0) -> t
    expanded_mul(x1, x0, y1, y0, t, &mut tail[..scratch_needed_exp(half)]);

    // x1*y1 -> out[n..2n], x0*y0 -> out[0..n]
    {
        let (lo, hi) = out.split_at_mut(n);
        karatsuba_mul(x1, y1, hi, &mut tail[..scratch_needed(half)]);
        karatsuba_mul(x0, y0, lo, &mut tail[..scratch_needed(half)]);
    }

    // x1*y1 + x0*y0 -> tail[..n+1]; the sub-products' scratch is dead now.
    {
        let (lo, hi) = out.split_at(n);
        let carry = carrying_add(hi, lo, &mut tail[..n], Limb::ZERO);
        tail[n] = carry;
    }

    // t -= x1*y1 + x0*y0, isolating the cross term x1*y0 + x0*y1.
    let borrow = borrowing_sub_assign(t, &tail[..n + 1], Limb::ZERO);
    debug_assert_eq!(borrow, Limb::ZERO, "cross term must be non-negative");

    // out += cross term << (32 * half)
    let carry = carrying_add_assign(&mut out[half..], t, Limb::ZERO);
    debug_assert_eq!(carry, Limb::ZERO, "product must fit 2n limbs");
}

/// Computes `(x1 + x0) * (y1 + y0)` into `out`, where the four inputs are
/// `n` limbs and `out` is `2n + 1` limbs (the top limb never exceeds 4).
///
/// Each sum is kept as `n` low limbs plus a one-bit carry limb. The low
/// parts are multiplied recursively; writing the sums as
/// `tx = sx*2^(32n) + tx_lo` (same for `ty`) expands the product to
///
/// tx * ty = tx_lo * ty_lo + (sx * ty_lo + sy * tx_lo) * 2^(32n)
///         + sx * sy * 2^(64n)
///
/// so the carry bits contribute two shifted conditional additions and one
/// final bit. Each addition is applied under its own carry bit with a
/// masked addend, keeping the access pattern independent of the operands.
fn expanded_mul(
    x1: &[Limb],
    x0: &[Limb],
    y1: &[Limb],
    y0: &[Limb],
    out: &mut [Limb],
    scratch: &mut [Limb],
) {
    let n = x1.len();
    assert!(
        x0.len() == n && y1.len() == n && y0.len() == n,
        "expanded multiply length mismatch"
    );
    assert!(
        out.len() == 2 * n + 1,
        "expanded multiply output length mismatch"
    );
    assert!(
        scratch.len() >= scratch_needed_exp(n),
        "expanded multiply scratch undersized"
    );

    // Arena layout: the two sums with their carry limbs, three bookkeeping
    // limbs reserved to match the sizing oracle, then the recursive
    // multiply's region.
    let (tx, rest) = scratch.split_at_mut(n + 1);
    let (ty, rest) = rest.split_at_mut(n + 1);
    let (_reserved, rest) = rest.split_at_mut(3);

    let carry = carrying_add(x1, x0, &mut tx[..n], Limb::ZERO);
    tx[n] = carry;
    let carry = carrying_add(y1, y0, &mut ty[..n], Limb::ZERO);
    ty[n] = carry;

    // tx_lo * ty_lo -> out[..2n]
    out[2 * n] = Limb::ZERO;
    karatsuba_mul(
        &tx[..n],
        &ty[..n],
        &mut out[..2 * n],
        &mut rest[..scratch_needed(n)],
    );

    let sx = tx[n];
    let sy = ty[n];

    let carry =
        conditional_carrying_add_assign(&mut out[n..], &ty[..n], sx.lsb_to_choice(), Limb::ZERO);
    debug_assert_eq!(carry, Limb::ZERO);
    let carry =
        conditional_carrying_add_assign(&mut out[n..], &tx[..n], sy.lsb_to_choice(), Limb::ZERO);
    debug_assert_eq!(carry, Limb::ZERO);

    out[2 * n] = out[2 * n].wrapping_add(Limb(sx.0 & sy.0));
}
