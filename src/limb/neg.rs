//! Limb negation

use crate::Limb;

impl Limb {
    /// Perform wrapping (two's complement) negation.
    #[inline(always)]
    #[must_use]
    pub const fn wrapping_neg(self) -> Self {
        Limb(self.0.wrapping_neg())
    }

    /// Bitwise complement of every bit.
    #[inline(always)]
    #[must_use]
    pub const fn not(self) -> Self {
        Limb(!self.0)
    }
}

#[cfg(test)]
mod tests {
    use crate::Limb;

    #[test]
    fn wrapping_neg() {
        assert_eq!(Limb::ZERO.wrapping_neg(), Limb::ZERO);
        assert_eq!(Limb::ONE.wrapping_neg(), Limb::MAX);
        assert_eq!(Limb::MAX.wrapping_neg(), Limb::ONE);
    }

    #[test]
    fn not_then_increment_is_neg() {
        let x = Limb(0xdead_beef);
        assert_eq!(x.not().wrapping_add(Limb::ONE), x.wrapping_neg());
    }
}
