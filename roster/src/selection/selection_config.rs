use std::collections::BTreeMap;

use roster_data::{
    Id,
    RarityTier,
};
use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    index::Generation,
    teams::{
        Difficulty,
        DifficultyTable,
    },
};

/// Rarity tier weights for levels up to `max_level`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierWeightBand {
    pub max_level: u8,
    pub common: f64,
    pub uncommon: f64,
    pub rare: f64,
    pub legendary: f64,
}

impl TierWeightBand {
    pub fn weight(&self, tier: RarityTier) -> f64 {
        match tier {
            RarityTier::Common => self.common,
            RarityTier::Uncommon => self.uncommon,
            RarityTier::Rare => self.rare,
            RarityTier::Legendary => self.legendary,
        }
    }
}

/// The expected base stat total for a level.
///
/// Candidates are weighted by a Gaussian over their distance from the curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BstCurve {
    /// Expected BST at level 0.
    pub base: f64,
    /// Expected BST gained per level.
    pub per_level: f64,
    /// Highest expected BST.
    pub cap: f64,
    /// Standard deviation of the proximity weight.
    pub spread: f64,
    /// Lowest proximity weight, so no candidate is ever ruled out by BST alone.
    pub floor: f64,
    /// BST added to the curve at each difficulty.
    pub difficulty_offsets: DifficultyTable<f64>,
}

impl BstCurve {
    /// The expected BST at the level and difficulty.
    pub fn expected(&self, level: u8, difficulty: Difficulty) -> f64 {
        (self.base + self.per_level * level as f64 + self.difficulty_offsets.get(difficulty))
            .min(self.cap)
    }

    /// The proximity weight of a BST to an expected BST, in `[floor, 1]`.
    pub fn proximity(&self, bst: u32, expected: f64) -> f64 {
        let distance = bst as f64 - expected;
        let spread = self.spread.max(1.0);
        (-(distance * distance) / (2.0 * spread * spread))
            .exp()
            .max(self.floor)
    }
}

impl Default for BstCurve {
    fn default() -> Self {
        Self {
            base: 250.0,
            per_level: 5.0,
            cap: 600.0,
            spread: 90.0,
            floor: 0.05,
            difficulty_offsets: DifficultyTable {
                easy: -40.0,
                normal: 0.0,
                hard: 30.0,
                expert: 60.0,
            },
        }
    }
}

/// Tuning for weighted candidate selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    /// Probability of drawing a slot from outside the requested habitats.
    pub off_habitat_chance: f64,
    /// Weight multiplier for candidates whose primary type is already on the team.
    pub diversity_penalty: f64,
    /// Weight multiplier for candidates with a type the archetype prefers.
    pub preferred_type_affinity: f64,
    /// Weight multiplier for candidates that threaten a type no team member threatens yet.
    pub coverage_gap_bonus: f64,
    /// Tier weights by level, in ascending `max_level` order. Levels above the last band use the
    /// last band.
    pub tier_bands: Vec<TierWeightBand>,
    pub bst_curve: BstCurve,
    /// Species used when no candidate matches a slot, per generation.
    pub safe_species: BTreeMap<Generation, Vec<Id>>,
}

impl SelectionConfig {
    /// The weight of a rarity tier at a level.
    pub fn tier_weight(&self, level: u8, tier: RarityTier) -> f64 {
        self.tier_bands
            .iter()
            .find(|band| level <= band.max_level)
            .or_else(|| self.tier_bands.last())
            .map(|band| band.weight(tier))
            .unwrap_or(1.0)
    }
}

fn ids(names: &[&str]) -> Vec<Id> {
    names.iter().map(|name| Id::from(*name)).collect()
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            off_habitat_chance: 0.10,
            diversity_penalty: 0.35,
            preferred_type_affinity: 2.0,
            coverage_gap_bonus: 1.25,
            tier_bands: Vec::from([
                TierWeightBand {
                    max_level: 15,
                    common: 1.0,
                    uncommon: 0.5,
                    rare: 0.15,
                    legendary: 0.02,
                },
                TierWeightBand {
                    max_level: 35,
                    common: 0.8,
                    uncommon: 0.8,
                    rare: 0.35,
                    legendary: 0.05,
                },
                TierWeightBand {
                    max_level: 60,
                    common: 0.6,
                    uncommon: 0.9,
                    rare: 0.8,
                    legendary: 0.15,
                },
                TierWeightBand {
                    max_level: 100,
                    common: 0.5,
                    uncommon: 0.8,
                    rare: 1.0,
                    legendary: 0.4,
                },
            ]),
            bst_curve: BstCurve::default(),
            safe_species: BTreeMap::from_iter([
                (
                    Generation::Gen1,
                    ids(&["Pidgey", "Rattata", "Spearow", "Caterpie", "Weedle", "Zubat", "Geodude", "Magikarp"]),
                ),
                (
                    Generation::Gen2,
                    ids(&["Sentret", "Hoothoot", "Ledyba", "Spinarak", "Marill", "Wooper"]),
                ),
                (
                    Generation::Gen3,
                    ids(&["Zigzagoon", "Poochyena", "Wurmple", "Taillow", "Lotad", "Seedot", "Wingull", "Whismur"]),
                ),
            ]),
        }
    }
}
