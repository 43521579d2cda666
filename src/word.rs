//! `Word` is the integer type at the core of [`Limb`][`crate::Limb`].
//!
//! Unlike pointer-width limb libraries, this crate always uses 32-bit words:
//! the Montgomery-domain overflow sentinel (bit 254 of an 8-limb value) and
//! the CIOS accumulator layout both assume 32-bit limbs widened into 64-bit
//! accumulators, regardless of the target.

/// Inner integer type that the [`Limb`][`crate::Limb`] newtype wraps.
pub type Word = u32;

/// Unsigned wide integer type: double the width of [`Word`].
///
/// A `Word` product plus two `Word` addends always fits:
/// `(2^32-1)^2 + 2*(2^32-1) = 2^64 - 1`.
pub type WideWord = u64;
