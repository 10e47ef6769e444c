//! Six-sided die

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Uniform d6 backed by a PCG generator
#[derive(Debug, Clone)]
pub struct DieRoller {
    rng: Pcg32,
}

impl DieRoller {
    /// Reproducible die
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Die seeded from the thread RNG
    pub fn from_entropy() -> Self {
        Self {
            rng: Pcg32::from_rng(&mut rand::rng()),
        }
    }

    /// Roll once, in [1, 6]
    pub fn roll(&mut self) -> u8 {
        self.rng.random_range(1..=6)
    }
}
