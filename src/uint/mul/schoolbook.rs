//! Schoolbook multiplication a.k.a. long multiplication, i.e. the
//! traditional method taught in schools.
//!
//! The most efficient method for small numbers, and the multiply phase that
//! the CIOS Montgomery loop unrolls one outer step at a time.

use crate::Limb;

/// Computes `lhs * rhs + carry_in` into the double-width `out`.
///
/// `carry_in` seeds limb 0 before the loop, which is what lets the CIOS
/// reduction use one outer step of this routine as a multiply-accumulate.
/// Every partial product plus two limbs plus a carry fits the 64-bit
/// accumulator, so no step here can overflow.
pub fn mul_wide(lhs: &[Limb], rhs: &[Limb], out: &mut [Limb], carry_in: Limb) {
    assert!(
        lhs.len() == rhs.len() && out.len() == 2 * lhs.len(),
        "schoolbook multiplication length mismatch"
    );

    let n = lhs.len();
    out.fill(Limb::ZERO);

    for i in 0..n {
        let mut carry = if i == 0 { carry_in } else { Limb::ZERO };

        for j in 0..n {
            let (limb, c) = lhs[j].carrying_mul_add(rhs[i], out[i + j], carry);
            out[i + j] = limb;
            carry = c;
        }

        // Fold the residual carry into the remaining high limbs.
        for k in (i + n)..(2 * n) {
            let (limb, c) = out[k].overflowing_add(carry);
            out[k] = limb;
            carry = c;
        }
        debug_assert_eq!(carry, Limb::ZERO, "product must fit 2n limbs");
    }
}

/// Schoolbook multiplication which only calculates the lower limbs of the
/// product.
pub fn wrapping_mul(lhs: &[Limb], rhs: &[Limb], out: &mut [Limb]) {
    assert!(
        lhs.len() == rhs.len() && out.len() == lhs.len(),
        "schoolbook multiplication length mismatch"
    );

    let n = lhs.len();
    out.fill(Limb::ZERO);

    for i in 0..n {
        let mut carry = Limb::ZERO;
        for j in 0..(n - i) {
            let (limb, c) = lhs[j].carrying_mul_add(rhs[i], out[i + j], carry);
            out[i + j] = limb;
            carry = c;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{mul_wide, wrapping_mul};
    use crate::Limb;

    #[test]
    fn saturated_single_limb() {
        let mut out = [Limb::ZERO; 2];
        mul_wide(&[Limb::MAX], &[Limb::MAX], &mut out, Limb::ZERO);
        // (2^32 - 1)^2 = 2^64 - 2^33 + 1
        assert_eq!(out, [Limb::ONE, Limb(u32::MAX - 1)]);
    }

    #[test]
    fn carry_in_seeds_limb_zero() {
        let mut out = [Limb::ZERO; 2];
        mul_wide(&[Limb::MAX], &[Limb::MAX], &mut out, Limb(5));
        assert_eq!(out, [Limb(6), Limb(u32::MAX - 1)]);
    }

    #[test]
    fn two_limb_product() {
        // (2^32 + 2) * (2^32 + 3) = 2^64 + 5*2^32 + 6
        let mut out = [Limb::ZERO; 4];
        mul_wide(&[Limb(2), Limb::ONE], &[Limb(3), Limb::ONE], &mut out, Limb::ZERO);
        assert_eq!(out, [Limb(6), Limb(5), Limb::ONE, Limb::ZERO]);
    }

    #[test]
    fn wrapping_mul_is_low_half() {
        let lhs = [Limb(0x8765_4321), Limb(0x0fed_cba9)];
        let rhs = [Limb(0x1234_5678), Limb(0x9abc_def0)];

        let mut wide = [Limb::ZERO; 4];
        mul_wide(&lhs, &rhs, &mut wide, Limb::ZERO);

        let mut low = [Limb::ZERO; 2];
        wrapping_mul(&lhs, &rhs, &mut low);
        assert_eq!(low, wide[..2]);
    }

    #[test]
    #[should_panic(expected = "length mismatch")]
    fn rejects_narrow_output() {
        let mut out = [Limb::ZERO; 3];
        mul_wide(&[Limb::ONE; 2], &[Limb::ONE; 2], &mut out, Limb::ZERO);
    }
}
