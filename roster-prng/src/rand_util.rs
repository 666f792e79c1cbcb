use crate::PseudoRandomNumberGenerator;

const RANGE: f64 = (1u64 << 32) as f64;

/// Returns a random float in the range `[0, 1)`.
pub fn unit(prng: &mut dyn PseudoRandomNumberGenerator) -> f64 {
    prng.next() as f64 / RANGE
}

/// Returns whether a random event with the given probability occurs.
///
/// Probabilities at or below 0 never occur. Probabilities at or above 1 always occur.
pub fn probability(prng: &mut dyn PseudoRandomNumberGenerator, probability: f64) -> bool {
    if probability <= 0.0 {
        return false;
    }
    if probability >= 1.0 {
        return true;
    }
    unit(prng) < probability
}

/// Returns a random integer in the range `[min, max)`.
pub fn range(prng: &mut dyn PseudoRandomNumberGenerator, min: u64, max: u64) -> u64 {
    if max <= min {
        return min;
    }
    prng.next().rem_euclid(max - min) + min
}

/// Returns a random integer in the range `[min, max]`.
pub fn range_inclusive(prng: &mut dyn PseudoRandomNumberGenerator, min: u64, max: u64) -> u64 {
    range(prng, min, max.saturating_add(1))
}

/// Returns a random index into the given weights, where each index is drawn with probability
/// proportional to its weight.
///
/// Negative and non-finite weights count as zero. Returns [`None`] if no weight is positive.
pub fn weighted_index(prng: &mut dyn PseudoRandomNumberGenerator, weights: &[f64]) -> Option<usize> {
    let weight = |w: f64| if w.is_finite() && w > 0.0 { w } else { 0.0 };
    let total = weights.iter().map(|w| weight(*w)).sum::<f64>();
    if total <= 0.0 {
        return None;
    }
    let target = unit(prng) * total;
    let mut cumulative = 0.0;
    let mut last = None;
    for (i, w) in weights.iter().enumerate() {
        let w = weight(*w);
        if w <= 0.0 {
            continue;
        }
        cumulative += w;
        last = Some(i);
        if target < cumulative {
            return Some(i);
        }
    }
    // Rounding can leave the target just past the final cumulative weight.
    last
}

#[cfg(test)]
mod rand_util_test {
    use pretty_assertions::assert_eq;

    use crate::{
        PseudoRandomNumberGenerator,
        RealPseudoRandomNumberGenerator,
        rand_util,
    };

    struct FixedRandomNumberGenerator {
        values: Vec<u64>,
        index: usize,
    }

    impl FixedRandomNumberGenerator {
        fn new(values: Vec<u64>) -> Self {
            Self { values, index: 0 }
        }
    }

    impl PseudoRandomNumberGenerator for FixedRandomNumberGenerator {
        fn initial_seed(&self) -> u64 {
            0
        }

        fn next(&mut self) -> u64 {
            let value = self.values[self.index % self.values.len()];
            self.index += 1;
            value
        }
    }

    const HALF: u64 = 1 << 31;

    #[test]
    fn generates_number_in_range() {
        let mut prng = RealPseudoRandomNumberGenerator::new(None);
        let min = 5;
        let max = 12;
        for _ in 0..50 {
            let n = rand_util::range(&mut prng, min, max);
            assert!(n >= min);
            assert!(n < max);
            let n = rand_util::range_inclusive(&mut prng, min, max);
            assert!(n >= min);
            assert!(n <= max);
        }
    }

    #[test]
    fn empty_range_returns_min() {
        let mut prng = RealPseudoRandomNumberGenerator::new(None);
        assert_eq!(rand_util::range(&mut prng, 7, 7), 7);
        assert_eq!(rand_util::range_inclusive(&mut prng, 7, 7), 7);
    }

    #[test]
    fn generates_unit_float() {
        let mut prng = FixedRandomNumberGenerator::new(vec![0, HALF, (1 << 32) - 1]);
        assert_eq!(rand_util::unit(&mut prng), 0.0);
        assert_eq!(rand_util::unit(&mut prng), 0.5);
        assert!(rand_util::unit(&mut prng) < 1.0);
    }

    #[test]
    fn probability_saturates() {
        let mut prng = RealPseudoRandomNumberGenerator::new(None);
        for _ in 0..50 {
            assert!(!rand_util::probability(&mut prng, 0.0));
            assert!(rand_util::probability(&mut prng, 1.0));
        }
    }

    #[test]
    fn weighted_index_follows_cumulative_weights() {
        let weights = [1.0, 0.0, 3.0];
        let mut prng = FixedRandomNumberGenerator::new(vec![0, HALF / 2 - 1, HALF / 2, (1 << 32) - 1]);
        assert_eq!(rand_util::weighted_index(&mut prng, &weights), Some(0));
        assert_eq!(rand_util::weighted_index(&mut prng, &weights), Some(0));
        assert_eq!(rand_util::weighted_index(&mut prng, &weights), Some(2));
        assert_eq!(rand_util::weighted_index(&mut prng, &weights), Some(2));
    }

    #[test]
    fn weighted_index_never_picks_zero_weight() {
        let weights = [0.0, 2.0, -1.0, f64::NAN, 0.5];
        let mut prng = RealPseudoRandomNumberGenerator::new(None);
        for _ in 0..200 {
            let index = rand_util::weighted_index(&mut prng, &weights).unwrap();
            assert!(index == 1 || index == 4);
        }
    }

    #[test]
    fn weighted_index_fails_without_positive_weights() {
        let mut prng = RealPseudoRandomNumberGenerator::new(None);
        assert_eq!(rand_util::weighted_index(&mut prng, &[]), None);
        assert_eq!(rand_util::weighted_index(&mut prng, &[0.0, -2.0]), None);
    }
}
