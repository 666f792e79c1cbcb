use roster_data::Id;
use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    index::GenerationScope,
    teams::Difficulty,
};

/// A request for a generated team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Coarse habitat names or location tags from the habitat mapping.
    pub habitats: Vec<String>,
    pub level_min: u8,
    pub level_max: u8,
    pub archetype: Id,
    #[serde(default)]
    pub difficulty: Difficulty,
    /// Exact team size, overriding the archetype's range.
    #[serde(default)]
    pub team_size: Option<u8>,
    #[serde(default)]
    pub scope: GenerationScope,
}

impl GenerationRequest {
    pub fn new<I, S>(archetype: &str, habitats: I, level_min: u8, level_max: u8) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            habitats: habitats.into_iter().map(Into::into).collect(),
            level_min,
            level_max,
            archetype: Id::from(archetype),
            difficulty: Difficulty::default(),
            team_size: None,
            scope: GenerationScope::default(),
        }
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn with_team_size(mut self, team_size: u8) -> Self {
        self.team_size = Some(team_size);
        self
    }

    pub fn with_scope(mut self, scope: GenerationScope) -> Self {
        self.scope = scope;
        self
    }
}
