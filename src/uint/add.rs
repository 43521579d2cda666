//! [`Uint`] addition kernels.

use crate::{Limb, Uint};
use subtle::{Choice, ConditionallySelectable};

/// Computes `lhs + rhs + carry` into `out`, returning the new carry.
///
/// `rhs` may be shorter than `lhs`: missing high limbs are treated as zero,
/// but the carry keeps propagating through the high limbs of `lhs`. This is
/// what lets chained calls add an `n`-limb value into a wider range.
pub fn carrying_add(lhs: &[Limb], rhs: &[Limb], out: &mut [Limb], mut carry: Limb) -> Limb {
    assert!(
        lhs.len() == out.len() && rhs.len() <= lhs.len(),
        "addition length mismatch"
    );

    for i in 0..lhs.len() {
        let rhs_i = if i < rhs.len() { rhs[i] } else { Limb::ZERO };
        let (limb, c) = lhs[i].carrying_add(rhs_i, carry);
        out[i] = limb;
        carry = c;
    }

    carry
}

/// Computes `out + rhs + carry` in place, returning the new carry.
///
/// As with [`carrying_add`], `rhs` may be shorter than `out`.
pub fn carrying_add_assign(out: &mut [Limb], rhs: &[Limb], mut carry: Limb) -> Limb {
    assert!(rhs.len() <= out.len(), "addition length mismatch");

    for i in 0..out.len() {
        let rhs_i = if i < rhs.len() { rhs[i] } else { Limb::ZERO };
        let (limb, c) = out[i].carrying_add(rhs_i, carry);
        out[i] = limb;
        carry = c;
    }

    carry
}

/// Computes `out + rhs + carry` in place when `choice` is set, returning the
/// new carry; when `choice` is clear the addend is masked to zero so the
/// memory access pattern is identical either way.
pub(crate) fn conditional_carrying_add_assign(
    out: &mut [Limb],
    rhs: &[Limb],
    choice: Choice,
    mut carry: Limb,
) -> Limb {
    assert!(rhs.len() <= out.len(), "addition length mismatch");
    let mask = Limb::conditional_select(&Limb::ZERO, &Limb::MAX, choice);

    for i in 0..out.len() {
        let rhs_i = if i < rhs.len() { rhs[i] } else { Limb::ZERO };
        let (limb, c) = out[i].carrying_add(Limb(rhs_i.0 & mask.0), carry);
        out[i] = limb;
        carry = c;
    }

    carry
}

impl Uint {
    /// Computes `self + rhs + carry`, returning the result along with the new carry.
    ///
    /// Panics if `rhs` is wider than `self`.
    #[must_use]
    pub fn adc(&self, rhs: &Self, carry: Limb) -> (Self, Limb) {
        let mut out = Self::zero(self.nlimbs());
        let carry = carrying_add(self.as_limbs(), rhs.as_limbs(), out.as_mut_limbs(), carry);
        (out, carry)
    }

    /// Perform wrapping addition, discarding overflow.
    #[must_use]
    pub fn wrapping_add(&self, rhs: &Self) -> Self {
        self.adc(rhs, Limb::ZERO).0
    }
}

#[cfg(test)]
mod tests {
    use super::{carrying_add, carrying_add_assign, conditional_carrying_add_assign};
    use crate::{Limb, Uint};
    use subtle::Choice;

    #[test]
    fn carry_propagates_past_shorter_rhs() {
        // [MAX, MAX, 0] + [1] = [0, 0, 1]
        let lhs = [Limb::MAX, Limb::MAX, Limb::ZERO];
        let rhs = [Limb::ONE];
        let mut out = [Limb::ZERO; 3];
        let carry = carrying_add(&lhs, &rhs, &mut out, Limb::ZERO);
        assert_eq!(out, [Limb::ZERO, Limb::ZERO, Limb::ONE]);
        assert_eq!(carry, Limb::ZERO);
    }

    #[test]
    fn carry_out_of_full_width() {
        let mut out = [Limb::MAX, Limb::MAX];
        let carry = carrying_add_assign(&mut out, &[Limb::ONE], Limb::ZERO);
        assert_eq!(out, [Limb::ZERO, Limb::ZERO]);
        assert_eq!(carry, Limb::ONE);
    }

    #[test]
    fn explicit_carry_in_seeds_limb_zero() {
        let mut out = [Limb::ZERO, Limb::ZERO];
        let carry = carrying_add_assign(&mut out, &[], Limb::ONE);
        assert_eq!(out, [Limb::ONE, Limb::ZERO]);
        assert_eq!(carry, Limb::ZERO);
    }

    #[test]
    fn conditional_add_masks_addend() {
        let rhs = [Limb(5), Limb(6)];

        let mut out = [Limb(1), Limb(2)];
        conditional_carrying_add_assign(&mut out, &rhs, Choice::from(0), Limb::ZERO);
        assert_eq!(out, [Limb(1), Limb(2)]);

        conditional_carrying_add_assign(&mut out, &rhs, Choice::from(1), Limb::ZERO);
        assert_eq!(out, [Limb(6), Limb(8)]);
    }

    #[test]
    fn uint_adc() {
        let (sum, carry) = Uint::from_words(&[u32::MAX, 1]).adc(&Uint::one(2), Limb::ZERO);
        assert_eq!(sum, Uint::from_words(&[0, 2]));
        assert_eq!(carry, Limb::ZERO);
    }
}
