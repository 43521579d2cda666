//! Subtraction in the Montgomery domain.

use super::MontyForm;
use crate::{
    Limb, Uint,
    uint::{add::conditional_carrying_add_assign, sub::borrowing_sub},
};
use core::ops::Sub;

/// Computes `a - b` for Montgomery-domain values, adding the modulus back
/// while the result is negative.
///
/// Either operand may be lazy (at or above the modulus); `b` must stay
/// below twice the modulus, which the sentinel bound `b < 2^(32n - 2)`
/// guarantees for a modulus with two leading zero bits. The difference is
/// then at worst twice the modulus below zero and two corrections restore
/// it. The result stays below `2^(32n - 2)` and is canonical whenever
/// `a - b < modulus`, in particular for canonical operands.
pub fn mont_sub(a: &[Limb], b: &[Limb], modulus: &[Limb], out: &mut [Limb]) {
    let n = modulus.len();
    assert!(
        a.len() == n && b.len() == n && out.len() == n,
        "montgomery subtraction length mismatch"
    );

    let borrow = borrowing_sub(a, b, out, Limb::ZERO);
    let negative = borrow.lsb_to_choice();
    let carry = conditional_carrying_add_assign(out, modulus, negative, Limb::ZERO);

    // A carry out cancels the borrow; without one the value is still
    // negative and needs the modulus a second time.
    let still_negative = negative & carry.is_zero();
    let carry = conditional_carrying_add_assign(out, modulus, still_negative, Limb::ZERO);
    debug_assert!(bool::from(!(still_negative & carry.is_zero())));
}

impl MontyForm {
    /// Subtracts in the Montgomery domain.
    ///
    /// Panics if the operands were created with different parameters, or if
    /// the modulus is too small for lazy sentinel-based reduction.
    pub fn sub(&self, rhs: &Self) -> Self {
        assert!(
            self.params == rhs.params,
            "mismatched Montgomery parameters"
        );
        assert!(
            self.params.mod_leading_zeros() == 2,
            "lazy reduction needs a modulus with exactly two leading zero bits"
        );
        let mut montgomery_form = Uint::zero(self.params.nlimbs());
        mont_sub(
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

    /// Additive negation in the Montgomery domain: `0 - self`.
    pub fn neg(&self) -> Self {
        MontyForm::sub(&Self::zero(self.params.clone()), self)
    }
}

impl Sub<&MontyForm> for &MontyForm {
    type Output = MontyForm;

    fn sub(self, rhs: &MontyForm) -> MontyForm {
        MontyForm::sub(self, rhs)
    }
}

impl Sub<MontyForm> for &MontyForm {
    type Output = MontyForm;

    #[allow(clippy::op_ref)]
    fn sub(self, rhs: MontyForm) -> MontyForm {
        self - &rhs
    }
}

impl Sub<&MontyForm> for MontyForm {
    type Output = MontyForm;

    #[allow(clippy::op_ref)]
    fn sub(self, rhs: &MontyForm) -> MontyForm {
        &self - rhs
    }
}

impl Sub for MontyForm {
    type Output = MontyForm;

    fn sub(self, rhs: MontyForm) -> MontyForm {
        &self - &rhs
    }
}

impl core::ops::Neg for MontyForm {
    type Output = MontyForm;

    fn neg(self) -> MontyForm {
        MontyForm::neg(&self)
    }
}

impl core::ops::Neg for &MontyForm {
    type Output = MontyForm;

    fn neg(self) -> MontyForm {
        MontyForm::neg(self)
    }
}
