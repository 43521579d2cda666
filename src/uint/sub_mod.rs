//! Canonical modular subtraction over limb slices.

use crate::{
    Limb, Uint,
    uint::{add::conditional_carrying_add_assign, sub::borrowing_sub},
};

/// Computes `(lhs - rhs) mod modulus` into `out`.
///
/// Requires `lhs, rhs < modulus`. When the raw subtraction borrows, one
/// addition of the modulus restores the range; the final carry cancels the
/// borrow exactly.
pub fn sub_mod(lhs: &[Limb], rhs: &[Limb], modulus: &[Limb], out: &mut [Limb]) {
    assert!(
        lhs.len() == modulus.len() && rhs.len() == modulus.len() && out.len() == modulus.len(),
        "modular subtraction length mismatch"
    );

    let borrow = borrowing_sub(lhs, rhs, out, Limb::ZERO);
    conditional_carrying_add_assign(out, modulus, borrow.lsb_to_choice(), Limb::ZERO);
}

impl Uint {
    /// Computes `(self - rhs) mod modulus`; both operands must already be
    /// reduced.
    #[must_use]
    pub fn sub_mod(&self, rhs: &Self, modulus: &Self) -> Self {
        let mut out = Self::zero(modulus.nlimbs());
        sub_mod(
            self.as_limbs(),
            rhs.as_limbs(),
            modulus.as_limbs(),
            out.as_mut_limbs(),
        );
        out
    }
}
