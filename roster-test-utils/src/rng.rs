use ahash::HashMap;
use roster_prng::{
    PseudoRandomNumberGenerator,
    RealPseudoRandomNumberGenerator,
};

/// A seeded generator whose values can be overridden at chosen draws.
///
/// Draws are numbered from 1. An overridden draw still advances the seeded sequence, so later
/// draws are the same as without the override.
pub struct ControlledRandomNumberGenerator {
    draws: usize,
    overrides: HashMap<usize, u64>,
    inner: RealPseudoRandomNumberGenerator,
}

impl ControlledRandomNumberGenerator {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            draws: 0,
            overrides: HashMap::default(),
            inner: RealPseudoRandomNumberGenerator::new(seed),
        }
    }

    /// Number of values drawn so far.
    pub fn sequence_count(&self) -> usize {
        self.draws
    }

    /// Returns `value` on the draw numbered `draw`.
    pub fn insert_fake_value(&mut self, draw: usize, value: u64) {
        self.overrides.insert(draw, value);
    }
}

impl PseudoRandomNumberGenerator for ControlledRandomNumberGenerator {
    fn initial_seed(&self) -> u64 {
        self.inner.initial_seed()
    }

    fn next(&mut self) -> u64 {
        let real = self.inner.next();
        self.draws += 1;
        self.overrides.remove(&self.draws).unwrap_or(real)
    }
}
