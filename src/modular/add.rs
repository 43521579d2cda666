//! Lazy addition in the Montgomery domain.

use super::MontyForm;
use crate::{
    Limb, Uint,
    uint::{add::carrying_add, sub::conditional_borrowing_sub_assign},
};
use core::ops::Add;

/// Computes `a + b` for Montgomery-domain values, subtracting the modulus
/// while the sum reaches the sentinel bit (bit `32n - 2` for an `n`-limb
/// modulus).
///
/// Requires both operands to be below the sentinel `2^(32n - 2)` and a
/// modulus with exactly two leading zero bits, i.e. at least half the
/// sentinel. The sum then never carries out of `n` limbs, a sentinel-bit
/// test replaces a full comparison against the modulus, and since the sum
/// is below twice the sentinel while twice the modulus is at least one
/// sentinel, two conditional subtractions always bring the result back
/// below the sentinel. It is not necessarily below the modulus.
pub fn mont_add(a: &[Limb], b: &[Limb], modulus: &[Limb], out: &mut [Limb]) {
    let n = modulus.len();
    assert!(
        a.len() == n && b.len() == n && out.len() == n,
        "montgomery addition length mismatch"
    );

    let carry = carrying_add(a, b, out, Limb::ZERO);
    debug_assert_eq!(carry, Limb::ZERO);

    let overflow = Limb(out[n - 1].0 >> (Limb::BITS - 2)).is_nonzero();
    conditional_borrowing_sub_assign(out, modulus, overflow);
    let overflow = Limb(out[n - 1].0 >> (Limb::BITS - 2)).is_nonzero();
    conditional_borrowing_sub_assign(out, modulus, overflow);
}

impl MontyForm {
    /// Adds in the Montgomery domain.
    ///
    /// Panics if the operands were created with different parameters, or if
    /// the modulus is too small for lazy sentinel-based reduction.
    pub fn add(&self, rhs: &Self) -> Self {
        assert!(
            self.params == rhs.params,
            "mismatched Montgomery parameters"
        );
        assert!(
            self.params.mod_leading_zeros() == 2,
            "lazy reduction needs a modulus with exactly two leading zero bits"
        );
        let mut montgomery_form = Uint::zero(self.params.nlimbs());
        mont_add(
            self.montgomery_form.as_limbs(),
            rhs.montgomery_form.as_limbs(),
            self.params.modulus().as_ref().as_limbs(),
            montgomery_form.as_mut_limbs(),
        );
        Self {
            montgomery_form,
            params: self.params.clone(),
        }
    }
}

impl Add<&MontyForm> for &MontyForm {
    type Output = MontyForm;

    fn add(self, rhs: &MontyForm) -> MontyForm {
        MontyForm::add(self, rhs)
    }
}

impl Add<MontyForm> for &MontyForm {
    type Output = MontyForm;

    #[allow(clippy::op_ref)]
    fn add(self, rhs: MontyForm) -> MontyForm {
        self + &rhs
    }
}

impl Add<&MontyForm> for MontyForm {
    type Output = MontyForm;

    #[allow(clippy::op_ref)]
    fn add(self, rhs: &MontyForm) -> MontyForm {
        &self + rhs
    }
}

impl Add for MontyForm {
    type Output = MontyForm;

    fn add(self, rhs: MontyForm) -> MontyForm {
        &self + &rhs
    }
}

#[cfg(test)]
mod tests {
    use super::mont_add;
    use crate::Limb;

    #[test]
    fn below_sentinel_is_a_plain_add() {
        let modulus = [Limb(0), Limb(0x2000_0001)];
        let mut out = [Limb::ZERO; 2];
        mont_add(
            &[Limb(5), Limb(0x1000_0000)],
            &[Limb(7), Limb(0x0fff_ffff)],
            &modulus,
            &mut out,
        );
        assert_eq!(out, [Limb(12), Limb(0x1fff_ffff)]);
    }

    #[test]
    fn sentinel_bit_triggers_one_subtraction() {
        // Sum reaches bit 62, the sentinel for a two-limb modulus.
        let modulus = [Limb(3), Limb(0x3000_0000)];
        let mut out = [Limb::ZERO; 2];
        mont_add(
            &[Limb(1), Limb(0x2000_0000)],
            &[Limb(4), Limb(0x2000_0000)],
            &modulus,
            &mut out,
        );
        assert_eq!(out, [Limb(2), Limb(0x1000_0000)]);
    }

    #[test]
    fn sum_far_above_the_sentinel_subtracts_twice() {
        // 0x3fffffffffffffff + 0x3fffffffffffffff = 0x7ffffffffffffffe;
        // one subtraction of 0x3000000000000003 leaves bit 62 still set,
        // so the second one must fire: result 0x1ffffffffffffff8.
        let modulus = [Limb(3), Limb(0x3000_0000)];
        let mut out = [Limb::ZERO; 2];
        mont_add(
            &[Limb(0xffff_ffff), Limb(0x3fff_ffff)],
            &[Limb(0xffff_ffff), Limb(0x3fff_ffff)],
            &modulus,
            &mut out,
        );
        assert_eq!(out, [Limb(0xffff_fff8), Limb(0x1fff_ffff)]);
    }
}
