//! [`Uint`] multiplication, with the operand width picking the algorithm.

pub mod karatsuba;
pub mod schoolbook;

pub use karatsuba::KARATSUBA_THRESHOLD;

use crate::{Limb, Uint};
use alloc::vec;

impl Uint {
    /// Computes `self * rhs`, returning the double-width product.
    ///
    /// Power-of-two widths above [`KARATSUBA_THRESHOLD`] go through
    /// [`karatsuba::karatsuba_mul`]; everything else uses schoolbook.
    #[must_use]
    pub fn widening_mul(&self, rhs: &Self) -> Self {
        assert_eq!(
            self.nlimbs(),
            rhs.nlimbs(),
            "multiplication length mismatch"
        );

        let n = self.nlimbs();
        if n.is_power_of_two() && n > KARATSUBA_THRESHOLD {
            self.karatsuba_mul(rhs)
        } else {
            let mut out = Self::zero(2 * n);
            schoolbook::mul_wide(
                self.as_limbs(),
                rhs.as_limbs(),
                out.as_mut_limbs(),
                Limb::ZERO,
            );
            out
        }
    }

    /// Karatsuba product with a freshly sized scratch arena.
    ///
    /// The width must be a power of two; see [`karatsuba::karatsuba_mul`] for
    /// the scratch contract when supplying your own arena.
    #[must_use]
    pub fn karatsuba_mul(&self, rhs: &Self) -> Self {
        let n = self.nlimbs();
        let mut out = Self::zero(2 * n);
        let mut scratch = vec![Limb::ZERO; karatsuba::scratch_needed(n)];
        karatsuba::karatsuba_mul(
            self.as_limbs(),
            rhs.as_limbs(),
            out.as_mut_limbs(),
            &mut scratch,
        );
        out
    }

    /// Perform wrapping multiplication, keeping only the low `n` limbs.
    #[must_use]
    pub fn wrapping_mul(&self, rhs: &Self) -> Self {
        let mut out = Self::zero(self.nlimbs());
        schoolbook::wrapping_mul(self.as_limbs(), rhs.as_limbs(), out.as_mut_limbs());
        out
    }
}

#[cfg(test)]
mod tests {
    use crate::Uint;

    #[test]
    fn widening_mul_single_limb() {
        let x = Uint::from_words(&[u32::MAX]);
        let product = x.widening_mul(&x);
        assert_eq!(product, Uint::from_words(&[1, u32::MAX - 1]));
    }

    #[test]
    fn wrapping_mul_truncates() {
        let x = Uint::from_words(&[u32::MAX, u32::MAX]);
        let wide = x.widening_mul(&x);
        let narrow = x.wrapping_mul(&x);
        assert_eq!(narrow.as_limbs(), &wide.as_limbs()[..2]);
    }

    #[test]
    fn non_power_of_two_width_uses_schoolbook() {
        let x = Uint::from_words(&[3, 0, 1]);
        let y = Uint::from_words(&[7, 2, 0]);
        // (3 + 2^64) * (7 + 2*2^32) = 21 + 6*2^32 + 7*2^64 + 2*2^96
        assert_eq!(
            x.widening_mul(&y),
            Uint::from_words(&[21, 6, 7, 2, 0, 0])
        );
    }
}
