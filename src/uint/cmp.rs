//! [`Uint`] comparisons.

use crate::{Limb, Uint};
use core::cmp::Ordering;
use subtle::Choice;

/// Returns the truthy value if `lhs < rhs`, comparing equal-width limb
/// slices in constant time via a discarded borrow chain.
pub fn ct_lt(lhs: &[Limb], rhs: &[Limb]) -> Choice {
    assert!(lhs.len() == rhs.len(), "comparison length mismatch");

    let mut borrow = Limb::ZERO;
    for i in 0..lhs.len() {
        let (_, b) = lhs[i].borrowing_sub(rhs[i], borrow);
        borrow = b;
    }

    borrow.lsb_to_choice()
}

impl Uint {
    /// Returns the [`Ordering`] between `self` and `rhs` in variable time.
    #[must_use]
    pub fn cmp_vartime(&self, rhs: &Self) -> Ordering {
        assert_eq!(self.nlimbs(), rhs.nlimbs(), "comparison length mismatch");

        for (a, b) in self
            .as_limbs()
            .iter()
            .rev()
            .zip(rhs.as_limbs().iter().rev())
        {
            match a.0.cmp(&b.0) {
                Ordering::Equal => (),
                other => return other,
            }
        }
        Ordering::Equal
    }
}

#[cfg(test)]
mod tests {
    use super::ct_lt;
    use crate::{Limb, Uint};
    use core::cmp::Ordering;

    #[test]
    fn lt_checks_high_limbs_first() {
        let small = [Limb::MAX, Limb::ZERO];
        let big = [Limb::ZERO, Limb::ONE];

        assert!(bool::from(ct_lt(&small, &big)));
        assert!(!bool::from(ct_lt(&big, &small)));
        assert!(!bool::from(ct_lt(&big, &big)));
    }

    #[test]
    fn cmp_vartime() {
        let a = Uint::from_words(&[1, 2]);
        let b = Uint::from_words(&[9, 1]);
        assert_eq!(a.cmp_vartime(&b), Ordering::Greater);
        assert_eq!(b.cmp_vartime(&a), Ordering::Less);
        assert_eq!(a.cmp_vartime(&a), Ordering::Equal);
    }
}
