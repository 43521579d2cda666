//! Runtime fixed-width unsigned big integers.

pub(crate) mod add;
pub(crate) mod add_mod;
pub(crate) mod cmp;
pub(crate) mod encoding;
pub mod mul;
pub(crate) mod sub;
pub(crate) mod sub_mod;

#[cfg(feature = "rand")]
mod rand;

pub use self::{
    add::{carrying_add, carrying_add_assign},
    add_mod::add_mod,
    cmp::ct_lt,
    sub::{abs_diff, borrowing_sub, borrowing_sub_assign},
    sub_mod::sub_mod,
};

use crate::{Limb, Word};
use alloc::{boxed::Box, vec, vec::Vec};
use core::fmt;
use subtle::{Choice, ConstantTimeEq};

/// Fixed-width unsigned big integer.
///
/// Stored as a little-endian sequence of 32-bit [`Limb`]s (index 0 is the
/// least significant). The limb count is chosen at construction and is an
/// invariant: no operation ever grows or shrinks a [`Uint`], and mixing
/// operands of different widths is rejected before any limb is touched.
#[derive(Clone, Hash)]
pub struct Uint {
    /// Little-endian limbs.
    limbs: Box<[Limb]>,
}

impl Uint {
    /// The value `0`, `nlimbs` limbs wide.
    ///
    /// Panics if `nlimbs` is zero.
    #[must_use]
    pub fn zero(nlimbs: usize) -> Self {
        assert!(nlimbs != 0, "Uint must have at least one limb");
        Self {
            limbs: vec![Limb::ZERO; nlimbs].into(),
        }
    }

    /// The value `1`, `nlimbs` limbs wide.
    #[must_use]
    pub fn one(nlimbs: usize) -> Self {
        let mut ret = Self::zero(nlimbs);
        ret.limbs[0] = Limb::ONE;
        ret
    }

    /// Construct from little-endian words.
    #[must_use]
    pub fn from_words(words: &[Word]) -> Self {
        assert!(!words.is_empty(), "Uint must have at least one limb");
        Self {
            limbs: words.iter().copied().map(Limb).collect(),
        }
    }

    /// Copy out the little-endian words.
    #[must_use]
    pub fn to_words(&self) -> Vec<Word> {
        self.limbs.iter().map(|limb| limb.0).collect()
    }

    /// Borrow the limbs of this [`Uint`].
    #[must_use]
    pub fn as_limbs(&self) -> &[Limb] {
        &self.limbs
    }

    /// Mutably borrow the limbs of this [`Uint`].
    pub fn as_mut_limbs(&mut self) -> &mut [Limb] {
        &mut self.limbs
    }

    /// Number of limbs in this [`Uint`].
    #[must_use]
    pub fn nlimbs(&self) -> usize {
        self.limbs.len()
    }

    /// Total size of the represented integer in bits.
    #[must_use]
    pub fn bits_precision(&self) -> u32 {
        self.nlimbs() as u32 * Limb::BITS
    }

    /// Is this [`Uint`] equal to zero?
    #[must_use]
    pub fn is_zero(&self) -> Choice {
        self.limbs
            .iter()
            .fold(Choice::from(1), |acc, limb| acc & limb.is_zero())
    }

    /// Is this [`Uint`] odd?
    #[must_use]
    pub fn is_odd(&self) -> Choice {
        self.limbs[0].lsb_to_choice()
    }

    /// Leading zero bits, in variable time.
    #[must_use]
    pub fn leading_zeros_vartime(&self) -> u32 {
        let mut count = 0;
        for limb in self.limbs.iter().rev() {
            if limb.0 == 0 {
                count += Limb::BITS;
            } else {
                count += limb.0.leading_zeros();
                break;
            }
        }
        count
    }

}

impl ConstantTimeEq for Uint {
    fn ct_eq(&self, other: &Self) -> Choice {
        // Widths are public; only limb values are compared in constant time.
        if self.nlimbs() != other.nlimbs() {
            return Choice::from(0);
        }
        self.limbs.ct_eq(&other.limbs)
    }
}

impl Eq for Uint {}

impl PartialEq for Uint {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl fmt::Debug for Uint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Uint(0x{self:X})")
    }
}

impl fmt::LowerHex for Uint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "0x")?;
        }
        for limb in self.limbs.iter().rev() {
            fmt::LowerHex::fmt(limb, f)?;
        }
        Ok(())
    }
}

impl fmt::UpperHex for Uint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "0x")?;
        }
        for limb in self.limbs.iter().rev() {
            fmt::UpperHex::fmt(limb, f)?;
        }
        Ok(())
    }
}

#[cfg(feature = "zeroize")]
impl zeroize::Zeroize for Uint {
    fn zeroize(&mut self) {
        for limb in self.limbs.iter_mut() {
            *limb = Limb::ZERO;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Uint;
    use alloc::format;

    #[test]
    fn widths_are_fixed() {
        let x = Uint::from_words(&[1, 2, 3]);
        assert_eq!(x.nlimbs(), 3);
        assert_eq!(x.bits_precision(), 96);
        assert_eq!(x.to_words(), &[1, 2, 3]);
    }

    #[test]
    fn is_zero_and_odd() {
        assert!(bool::from(Uint::zero(4).is_zero()));
        assert!(!bool::from(Uint::one(4).is_zero()));
        assert!(bool::from(Uint::one(4).is_odd()));
        assert!(!bool::from(Uint::from_words(&[2, 0]).is_odd()));
    }

    #[test]
    fn leading_zeros() {
        assert_eq!(Uint::zero(2).leading_zeros_vartime(), 64);
        assert_eq!(Uint::one(2).leading_zeros_vartime(), 63);
        assert_eq!(Uint::from_words(&[0, 1]).leading_zeros_vartime(), 31);
    }

    #[test]
    fn debug_hex() {
        let x = Uint::from_words(&[0xdead_beef, 1]);
        assert_eq!(format!("{x:?}"), "Uint(0x00000001DEADBEEF)");
    }

    #[test]
    #[should_panic]
    fn zero_limbs_rejected() {
        let _ = Uint::zero(0);
    }
}
