//! Random [`Uint`]s.

use crate::{Limb, Uint};
use rand_core::RngCore;

impl Uint {
    /// Generate a uniformly random value, `nlimbs` limbs wide.
    pub fn random(rng: &mut (impl RngCore + ?Sized), nlimbs: usize) -> Self {
        let mut ret = Self::zero(nlimbs);
        for limb in ret.as_mut_limbs() {
            *limb = Limb::random(rng);
        }
        ret
    }
}
