//! Per-modulus Montgomery parameters.

use super::reduction;
use crate::{Limb, Odd, Uint};
use alloc::sync::Arc;
use core::fmt;

/// Parameters to efficiently compute in the Montgomery domain for a given
/// odd modulus, intended to be derived once per session and shared.
///
/// Cloning is cheap: the derived constants live behind an [`Arc`].
#[derive(Clone, Eq, PartialEq)]
pub struct MontyParams(Arc<MontyParamsInner>);

#[derive(Eq, PartialEq)]
struct MontyParamsInner {
    /// The modulus `N`.
    modulus: Odd<Uint>,
    /// `R mod N`, i.e. `1` in Montgomery form.
    one: Uint,
    /// `R^2 mod N`, used to enter the Montgomery domain.
    r2: Uint,
    /// `-N[0]^-1 mod 2^32`.
    mod_neg_inv: Limb,
    /// Leading zero bits of `N`.
    mod_leading_zeros: u32,
}

impl MontyParams {
    /// Derives the parameters for `modulus`, where `R = 2^(32n)` for an
    /// `n`-limb modulus.
    ///
    /// The modulus must leave its top two bits clear, so that the lazy
    /// Montgomery-domain addition can use a high bit as its overflow
    /// sentinel. Derivation runs in time dependent only on the width:
    /// `R mod N` is obtained by doubling `1` once per modulus bit, and one
    /// more round of doublings turns that into `R^2 mod N`, so no division
    /// is ever needed.
    pub fn new(modulus: Odd<Uint>) -> Self {
        let mod_leading_zeros = modulus.as_ref().leading_zeros_vartime();
        assert!(
            mod_leading_zeros >= 2,
            "modulus must leave the top two bits clear"
        );

        let bits = modulus.as_ref().bits_precision();
        let mut one = Uint::one(modulus.as_ref().nlimbs());
        for _ in 0..bits {
            one = one.double_mod(modulus.as_ref());
        }
        let mut r2 = one.clone();
        for _ in 0..bits {
            r2 = r2.double_mod(modulus.as_ref());
        }

        let mod_neg_inv = reduction::mod_neg_inv(modulus.as_ref().as_limbs()[0]);

        Self(Arc::new(MontyParamsInner {
            modulus,
            one,
            r2,
            mod_neg_inv,
            mod_leading_zeros,
        }))
    }

    /// The modulus `N`.
    pub fn modulus(&self) -> &Odd<Uint> {
        &self.0.modulus
    }

    /// `R mod N`: the Montgomery form of `1`.
    pub fn one(&self) -> &Uint {
        &self.0.one
    }

    /// `R^2 mod N`.
    pub fn r2(&self) -> &Uint {
        &self.0.r2
    }

    /// `-N[0]^-1 mod 2^32`.
    pub fn mod_neg_inv(&self) -> Limb {
        self.0.mod_neg_inv
    }

    /// Leading zero bits of the modulus; always at least two.
    pub fn mod_leading_zeros(&self) -> u32 {
        self.0.mod_leading_zeros
    }

    /// Width of the modulus in limbs.
    pub fn nlimbs(&self) -> usize {
        self.0.modulus.as_ref().nlimbs()
    }
}

impl fmt::Debug for MontyParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MontyParams")
            .field("modulus", &self.0.modulus)
            .field("one", &self.0.one)
            .field("r2", &self.0.r2)
            .field("mod_neg_inv", &self.0.mod_neg_inv)
            .field("mod_leading_zeros", &self.0.mod_leading_zeros)
            .finish()
    }
}
