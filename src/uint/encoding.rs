//! Big-endian byte conversions for [`Uint`].

use crate::{Limb, Uint};
use alloc::vec::Vec;

impl Uint {
    /// Construct from a big-endian byte slice, `nlimbs` limbs wide.
    ///
    /// Shorter slices are zero-extended at the top; slices longer than
    /// `nlimbs * 4` bytes are a precondition violation.
    #[must_use]
    pub fn from_be_slice(bytes: &[u8], nlimbs: usize) -> Self {
        assert!(
            bytes.len() <= nlimbs * Limb::BYTES,
            "byte slice does not fit the requested width"
        );

        let mut out = Self::zero(nlimbs);
        for (i, byte) in bytes.iter().rev().enumerate() {
            out.as_mut_limbs()[i / Limb::BYTES].0 |= u32::from(*byte) << (8 * (i % Limb::BYTES));
        }
        out
    }

    /// Serialize as big-endian bytes, `nlimbs * 4` of them.
    #[must_use]
    pub fn to_be_bytes(&self) -> Vec<u8> {
        self.as_limbs()
            .iter()
            .rev()
            .flat_map(|limb| limb.0.to_be_bytes())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::Uint;
    use hex_literal::hex;

    #[test]
    fn round_trip() {
        let bytes = hex!("00000001deadbeef");
        let x = Uint::from_be_slice(&bytes, 2);
        assert_eq!(x, Uint::from_words(&[0xdead_beef, 1]));
        assert_eq!(x.to_be_bytes(), bytes);
    }

    #[test]
    fn short_input_zero_extends() {
        let x = Uint::from_be_slice(&[0xff], 2);
        assert_eq!(x, Uint::from_words(&[0xff, 0]));
    }

    #[test]
    #[should_panic]
    fn oversized_input_rejected() {
        let _ = Uint::from_be_slice(&[0; 9], 2);
    }
}
