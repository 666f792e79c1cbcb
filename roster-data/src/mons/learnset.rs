use serde::{
    Deserialize,
    Serialize,
};

use crate::Id;

/// Moves unlocked at a single level threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearnSetEntry {
    /// The level at which the moves are learned.
    pub level: u8,
    /// Moves learned at the level, in the order they are learned.
    pub moves: Vec<Id>,
}

/// A level-up learnset.
///
/// Entries are kept in ascending level order. Learnsets built through
/// [`LearnSet::from_entries`] are normalized with a stable sort, so moves sharing a threshold keep
/// their source order.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LearnSet {
    entries: Vec<LearnSetEntry>,
}

impl LearnSet {
    /// Creates a normalized learnset from unordered entries.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = LearnSetEntry>,
    {
        let mut entries = entries
            .into_iter()
            .filter(|entry| !entry.moves.is_empty())
            .collect::<Vec<_>>();
        entries.sort_by_key(|entry| entry.level);
        Self { entries }
    }

    /// Re-establishes ascending threshold order.
    ///
    /// Learnsets deserialized directly from canonical data are not trusted to be sorted.
    pub fn normalize(self) -> Self {
        Self::from_entries(self.entries)
    }

    /// The entries, in ascending level order.
    pub fn entries(&self) -> &[LearnSetEntry] {
        &self.entries
    }

    /// Is the learnset empty?
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Are level thresholds non-decreasing?
    pub fn is_normalized(&self) -> bool {
        self.entries
            .windows(2)
            .all(|pair| pair[0].level <= pair[1].level)
    }

    /// All moves unlocked at or below the given level, in the order they are learned.
    pub fn unlocked_by(&self, level: u8) -> impl DoubleEndedIterator<Item = &Id> + '_ {
        self.entries
            .iter()
            .filter(move |entry| entry.level <= level)
            .flat_map(|entry| entry.moves.iter())
    }
}
