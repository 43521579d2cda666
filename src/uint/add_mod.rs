//! Canonical modular addition over limb slices.

use crate::{
    Limb, Uint,
    uint::{add::carrying_add, cmp::ct_lt, sub::conditional_borrowing_sub_assign},
};

/// Computes `(lhs + rhs) mod modulus` into `out`.
///
/// Requires `lhs, rhs < modulus`; the sum then exceeds the modulus by at most
/// one subtraction, applied under a constant-time choice.
pub fn add_mod(lhs: &[Limb], rhs: &[Limb], modulus: &[Limb], out: &mut [Limb]) {
    assert!(
        lhs.len() == modulus.len() && rhs.len() == modulus.len() && out.len() == modulus.len(),
        "modular addition length mismatch"
    );

    let carry = carrying_add(lhs, rhs, out, Limb::ZERO);
    let reduce = carry.lsb_to_choice() | !ct_lt(out, modulus);
    conditional_borrowing_sub_assign(out, modulus, reduce);
}

impl Uint {
    /// Computes `(self + rhs) mod modulus`; both operands must already be
    /// reduced.
    #[must_use]
    pub fn add_mod(&self, rhs: &Self, modulus: &Self) -> Self {
        let mut out = Self::zero(modulus.nlimbs());
        add_mod(
            self.as_limbs(),
            rhs.as_limbs(),
            modulus.as_limbs(),
            out.as_mut_limbs(),
        );
        out
    }

    /// Computes `(self + self) mod modulus`.
    #[must_use]
    pub fn double_mod(&self, modulus: &Self) -> Self {
        self.add_mod(self, modulus)
    }
}

#[cfg(test)]
mod tests {
    use crate::Uint;

    #[test]
    fn wraps_at_modulus() {
        let modulus = Uint::from_words(&[9, 0]);
        let a = Uint::from_words(&[7, 0]);
        let b = Uint::from_words(&[5, 0]);

        assert_eq!(a.add_mod(&b, &modulus), Uint::from_words(&[3, 0]));
        assert_eq!(a.double_mod(&modulus), Uint::from_words(&[5, 0]));
    }

    #[test]
    fn wraps_when_sum_overflows_width() {
        // modulus just below 2^64: the raw sum carries out of two limbs.
        let modulus = Uint::from_words(&[0xffff_fff1, 0xffff_ffff]);
        let a = Uint::from_words(&[0xffff_fff0, 0xffff_ffff]);

        // a = m - 1, so 2a mod m = m - 2.
        assert_eq!(
            a.double_mod(&modulus),
            Uint::from_words(&[0xffff_ffef, 0xffff_ffff])
        );
    }
}
