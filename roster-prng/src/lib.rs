pub mod rand_util;

use rand::Rng;

/// Source of randomness for team generation.
///
/// Every random decision during generation draws from one of these, so a team can be replayed
/// from [`PseudoRandomNumberGenerator::initial_seed`].
pub trait PseudoRandomNumberGenerator: Send + Sync {
    /// The seed the sequence started from.
    fn initial_seed(&self) -> u64;

    /// Next value in the sequence, in `[0, 2^32)`.
    fn next(&mut self) -> u64;
}

/// Seeded linear congruential generator.
#[derive(Debug, Clone)]
pub struct RealPseudoRandomNumberGenerator {
    initial_seed: u64,
    state: u64,
}

impl RealPseudoRandomNumberGenerator {
    const MULTIPLIER: u64 = 0x5D588B656C078965;
    const INCREMENT: u64 = 0x269EC3;

    /// Starts a sequence from the seed, or from a fresh seed drawn from the thread RNG.
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(|| rand::rng().random());
        Self {
            initial_seed: seed,
            state: seed,
        }
    }
}

impl PseudoRandomNumberGenerator for RealPseudoRandomNumberGenerator {
    fn initial_seed(&self) -> u64 {
        self.initial_seed
    }

    fn next(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT);
        // Low bits of an LCG cycle with short periods.
        self.state >> 32
    }
}
