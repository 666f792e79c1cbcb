use serde::{
    Deserialize,
    Serialize,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// Difficulty tier of a generated team.
///
/// Harder tiers push levels, base stat totals, and team sizes up, and grade coverage more
/// strictly.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum Difficulty {
    #[string = "Easy"]
    Easy,
    #[string = "Normal"]
    #[default]
    Normal,
    #[string = "Hard"]
    Hard,
    #[string = "Expert"]
    Expert,
}

impl Difficulty {
    /// Levels added to every drawn level.
    pub fn level_bias(&self) -> i16 {
        match self {
            Self::Easy => -2,
            Self::Normal => 0,
            Self::Hard => 1,
            Self::Expert => 2,
        }
    }

    /// Members added to the size computed from the archetype's team size range.
    pub fn team_size_bias(&self) -> i16 {
        match self {
            Self::Easy => -1,
            Self::Normal => 0,
            Self::Hard => 1,
            Self::Expert => 2,
        }
    }
}

/// A value for each difficulty tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyTable<T> {
    pub easy: T,
    pub normal: T,
    pub hard: T,
    pub expert: T,
}

impl<T> DifficultyTable<T> {
    pub fn get(&self, difficulty: Difficulty) -> &T {
        match difficulty {
            Difficulty::Easy => &self.easy,
            Difficulty::Normal => &self.normal,
            Difficulty::Hard => &self.hard,
            Difficulty::Expert => &self.expert,
        }
    }
}
