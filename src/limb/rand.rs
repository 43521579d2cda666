//! Random limbs

use crate::Limb;
use rand_core::RngCore;

impl Limb {
    /// Generate a random limb.
    pub fn random(rng: &mut (impl RngCore + ?Sized)) -> Self {
        Self(rng.next_u32())
    }
}
