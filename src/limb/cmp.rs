//! Limb comparisons: constant-time by default via the `subtle` crate.

use crate::Limb;
use core::cmp::Ordering;
use subtle::{
    Choice, ConditionallySelectable, ConstantTimeEq, ConstantTimeGreater, ConstantTimeLess,
};

impl ConstantTimeEq for Limb {
    #[inline]
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl ConstantTimeGreater for Limb {
    #[inline]
    fn ct_gt(&self, other: &Self) -> Choice {
        self.0.ct_gt(&other.0)
    }
}

impl ConstantTimeLess for Limb {
    #[inline]
    fn ct_lt(&self, other: &Self) -> Choice {
        self.0.ct_lt(&other.0)
    }
}

impl ConditionallySelectable for Limb {
    #[inline]
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Limb(u32::conditional_select(&a.0, &b.0, choice))
    }
}

impl Eq for Limb {}

impl PartialEq for Limb {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Ord for Limb {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl PartialOrd for Limb {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use crate::Limb;
    use subtle::{ConstantTimeEq, ConstantTimeGreater, ConstantTimeLess};

    #[test]
    fn ct_eq() {
        assert!(bool::from(Limb::ZERO.ct_eq(&Limb::ZERO)));
        assert!(!bool::from(Limb::ZERO.ct_eq(&Limb::MAX)));
    }

    #[test]
    fn ct_gt() {
        assert!(bool::from(Limb::ONE.ct_gt(&Limb::ZERO)));
        assert!(!bool::from(Limb::ONE.ct_gt(&Limb::ONE)));
        assert!(!bool::from(Limb::ONE.ct_gt(&Limb::MAX)));
    }

    #[test]
    fn ct_lt() {
        assert!(bool::from(Limb::ZERO.ct_lt(&Limb::ONE)));
        assert!(!bool::from(Limb::ONE.ct_lt(&Limb::ONE)));
        assert!(!bool::from(Limb::MAX.ct_lt(&Limb::ONE)));
    }
}
