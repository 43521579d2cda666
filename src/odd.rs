//! Wrapper type for odd integers, required for Montgomery form.

use crate::Uint;
use core::fmt;
use subtle::CtOption;

/// Wrapper type for odd integers.
///
/// These are frequently used in cryptography, e.g. as a modulus: Montgomery
/// reduction only works when the modulus and the radix are coprime, which an
/// odd modulus guarantees for a power-of-two radix.
#[derive(Clone, Eq, PartialEq)]
pub struct Odd<T>(pub(crate) T);

impl<T> Odd<T> {
    /// Borrow the inner value.
    pub fn as_ref(&self) -> &T {
        &self.0
    }

    /// Extract the inner value.
    pub fn get(self) -> T {
        self.0
    }
}

impl Odd<Uint> {
    /// Create a new [`Odd`], returning the value only if it is actually odd.
    pub fn new(n: Uint) -> CtOption<Self> {
        let is_odd = n.is_odd();
        CtOption::new(Self(n), is_odd)
    }
}

impl<T> AsRef<T> for Odd<T> {
    fn as_ref(&self) -> &T {
        &self.0
    }
}

impl<T: fmt::Debug> fmt::Debug for Odd<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::Odd;
    use crate::Uint;

    #[test]
    fn accepts_odd() {
        let n = Odd::new(Uint::from_words(&[7, 0]));
        assert!(bool::from(n.is_some()));
    }

    #[test]
    fn rejects_even() {
        let n = Odd::new(Uint::from_words(&[8, 1]));
        assert!(bool::from(n.is_none()));
    }
}
