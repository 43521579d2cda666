//! Limb multiplication

use crate::{
    Limb,
    primitives::{carrying_mul_add, widening_mul},
};
use core::ops::Mul;
use subtle::CtOption;

impl Limb {
    /// Computes `self * rhs`, returning the low and the high limbs of the result.
    #[inline(always)]
    #[must_use]
    pub const fn widening_mul(self, rhs: Limb) -> (Limb, Limb) {
        let (lo, hi) = widening_mul(self.0, rhs.0);
        (Limb(lo), Limb(hi))
    }

    /// Computes `(self * rhs) + addend + carry`, returning the result along with the new carry.
    #[inline(always)]
    #[must_use]
    pub const fn carrying_mul_add(self, rhs: Limb, addend: Limb, carry: Limb) -> (Limb, Limb) {
        let (res, carry) = carrying_mul_add(self.0, rhs.0, addend.0, carry.0);
        (Limb(res), Limb(carry))
    }

    /// Perform wrapping multiplication, discarding overflow.
    #[inline(always)]
    #[must_use]
    pub const fn wrapping_mul(&self, rhs: Self) -> Self {
        Limb(self.0.wrapping_mul(rhs.0))
    }

    /// Perform checked multiplication, returning a [`CtOption`] which
    /// `is_some` only if the operation did not overflow.
    pub fn checked_mul(&self, rhs: &Self) -> CtOption<Self> {
        let (lo, hi) = self.widening_mul(*rhs);
        CtOption::new(lo, hi.is_zero())
    }
}

impl Mul for Limb {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.checked_mul(&rhs)
            .expect("attempted to multiply with overflow")
    }
}
