use std::ops::RangeInclusive;

use serde::{
    Deserialize,
    Serialize,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// A game generation, which owns a contiguous range of national dex numbers.
#[derive(
    Debug,
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
pub enum Generation {
    #[string = "Gen1"]
    #[alias = "1"]
    #[alias = "Kanto"]
    Gen1,
    #[string = "Gen2"]
    #[alias = "2"]
    #[alias = "Johto"]
    Gen2,
    #[string = "Gen3"]
    #[alias = "3"]
    #[alias = "Hoenn"]
    Gen3,
}

impl Generation {
    pub const ALL: [Generation; 3] = [Self::Gen1, Self::Gen2, Self::Gen3];

    /// National dex numbers introduced in the generation.
    pub fn dex_range(&self) -> RangeInclusive<u16> {
        match self {
            Self::Gen1 => 1..=151,
            Self::Gen2 => 152..=251,
            Self::Gen3 => 252..=386,
        }
    }

    /// The generation that introduced the given dex number.
    pub fn of_dex(dex_number: u16) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|generation| generation.dex_range().contains(&dex_number))
    }
}

/// An inclusive range of generations that candidates are drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GenerationScope {
    pub oldest: Generation,
    pub newest: Generation,
}

impl GenerationScope {
    /// Every generation up to and including the given one.
    pub fn up_to(generation: Generation) -> Self {
        Self {
            oldest: Generation::Gen1,
            newest: generation,
        }
    }

    /// Only the given generation.
    pub fn only(generation: Generation) -> Self {
        Self {
            oldest: generation,
            newest: generation,
        }
    }

    /// Is the scope non-empty?
    pub fn is_valid(&self) -> bool {
        self.oldest <= self.newest
    }

    /// Generations in the scope, oldest first.
    pub fn generations(&self) -> impl Iterator<Item = Generation> {
        let (oldest, newest) = (self.oldest, self.newest);
        Generation::ALL
            .into_iter()
            .filter(move |generation| oldest <= *generation && *generation <= newest)
    }

    /// National dex numbers in the scope.
    pub fn dex_range(&self) -> RangeInclusive<u16> {
        *self.oldest.dex_range().start()..=*self.newest.dex_range().end()
    }

    /// Is the dex number in the scope?
    pub fn contains_dex(&self, dex_number: u16) -> bool {
        self.dex_range().contains(&dex_number)
    }
}

impl Default for GenerationScope {
    fn default() -> Self {
        Self::up_to(Generation::Gen3)
    }
}
