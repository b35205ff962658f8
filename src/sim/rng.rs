//! Seedable random source
//!
//! Everything random in the simulation flows through [`GameRng`] so a session
//! is fully reproducible from its seed. Draw order matters: two runs with the
//! same seed and command stream must consume the generator in the same order
//! to produce identical trajectories.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::state::PerkKind;

/// Deterministic random source for a single session
#[derive(Debug, Clone)]
pub struct GameRng {
    inner: Pcg32,
}

impl GameRng {
    pub fn new(seed: u64) -> Self {
        Self {
            inner: Pcg32::seed_from_u64(seed),
        }
    }

    /// Uniform integer in the inclusive range `[minimum, maximum]`.
    ///
    /// An inverted range yields `minimum` rather than panicking, so callers
    /// can treat it as an empty choice.
    pub fn random_integer(&mut self, minimum: i32, maximum: i32) -> i32 {
        if maximum < minimum {
            log::warn!("random_integer called with inverted range [{minimum}, {maximum}]");
            return minimum;
        }
        self.inner.random_range(minimum..=maximum)
    }

    /// Pick a perk kind uniformly
    pub fn random_perk(&mut self) -> PerkKind {
        let index = self.random_integer(0, PerkKind::ALL.len() as i32 - 1);
        PerkKind::ALL[index as usize]
    }

    /// Fair coin flip
    pub fn coin_flip(&mut self) -> bool {
        self.random_integer(0, 1) != 0
    }
}
