//! [`Uint`] subtraction kernels: borrow propagation, two's-complement
//! negation, and absolute difference with an explicit sign.

use crate::{Limb, Uint};
use subtle::{Choice, ConditionallySelectable};

/// Computes `lhs - rhs - borrow` into `out`, returning the final borrow.
///
/// The operands are treated as unsigned values of the same width. The
/// returned borrow is a whole-limb mask ([`Limb::ZERO`] or [`Limb::MAX`]);
/// its low bit is the sign of the true mathematical difference.
pub fn borrowing_sub(lhs: &[Limb], rhs: &[Limb], out: &mut [Limb], mut borrow: Limb) -> Limb {
    assert!(
        lhs.len() == rhs.len() && lhs.len() == out.len(),
        "subtraction length mismatch"
    );

    for i in 0..lhs.len() {
        let (limb, b) = lhs[i].borrowing_sub(rhs[i], borrow);
        out[i] = limb;
        borrow = b;
    }

    borrow
}

/// Computes `out - rhs - borrow` in place, returning the final borrow.
pub fn borrowing_sub_assign(out: &mut [Limb], rhs: &[Limb], mut borrow: Limb) -> Limb {
    assert!(rhs.len() == out.len(), "subtraction length mismatch");

    for i in 0..out.len() {
        let (limb, b) = out[i].borrowing_sub(rhs[i], borrow);
        out[i] = limb;
        borrow = b;
    }

    borrow
}

/// Computes `out - rhs` in place when `choice` is set, returning the final
/// borrow; when clear the subtrahend is masked to zero.
pub(crate) fn conditional_borrowing_sub_assign(
    out: &mut [Limb],
    rhs: &[Limb],
    choice: Choice,
) -> Limb {
    assert!(rhs.len() == out.len(), "subtraction length mismatch");
    let mask = Limb::conditional_select(&Limb::ZERO, &Limb::MAX, choice);
    let mut borrow = Limb::ZERO;

    for i in 0..out.len() {
        let (limb, b) = out[i].borrowing_sub(Limb(rhs[i].0 & mask.0), borrow);
        out[i] = limb;
        borrow = b;
    }

    borrow
}

/// Two's-complement negation in place when `choice` is set: complement every
/// limb, then add one with carry propagation.
pub(crate) fn conditional_wrapping_neg_assign(limbs: &mut [Limb], choice: Choice) {
    let mut carry = Limb::ONE;

    for limb in limbs.iter_mut() {
        let (negated, c) = limb.not().overflowing_add(carry);
        limb.conditional_assign(&negated, choice);
        carry = c;
    }
}

/// Computes `|lhs - rhs|` into `out`, returning the sign: truthy when
/// `lhs < rhs`.
///
/// Equal operands deterministically give a zero `out` and a falsy sign, so
/// callers can always treat the pair as `(magnitude, which operand was
/// larger)`.
pub fn abs_diff(lhs: &[Limb], rhs: &[Limb], out: &mut [Limb]) -> Choice {
    let borrow = borrowing_sub(lhs, rhs, out, Limb::ZERO);
    let sign = borrow.lsb_to_choice();
    conditional_wrapping_neg_assign(out, sign);
    sign
}

impl Uint {
    /// Computes `self - rhs - borrow`, returning the result along with the new borrow mask.
    #[must_use]
    pub fn sbb(&self, rhs: &Self, borrow: Limb) -> (Self, Limb) {
        let mut out = Self::zero(self.nlimbs());
        let borrow = borrowing_sub(self.as_limbs(), rhs.as_limbs(), out.as_mut_limbs(), borrow);
        (out, borrow)
    }

    /// Perform wrapping subtraction, discarding underflow.
    #[must_use]
    pub fn wrapping_sub(&self, rhs: &Self) -> Self {
        self.sbb(rhs, Limb::ZERO).0
    }

    /// Computes `|self - rhs|` together with the sign of the true difference
    /// (truthy when `self < rhs`).
    #[must_use]
    pub fn abs_diff(&self, rhs: &Self) -> (Self, Choice) {
        let mut out = Self::zero(self.nlimbs());
        let sign = abs_diff(self.as_limbs(), rhs.as_limbs(), out.as_mut_limbs());
        (out, sign)
    }
}
