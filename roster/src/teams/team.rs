use std::collections::BTreeSet;

use roster_data::{
    Habitat,
    Id,
    Type,
};
use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    coverage::{
        CoverageReport,
        CoverageSuggestion,
    },
    moveset::MoveSource,
    teams::{
        GenerationNotice,
        GenerationRequest,
        Role,
    },
};

/// How a team member came to be.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provenance {
    /// The species as drawn, before evolution resolution.
    pub original_species: Id,
    pub evolved: bool,
    pub demoted: bool,
    pub off_habitat: bool,
    /// Drawn from the safe species lists.
    pub fallback: bool,
    pub duplicate: bool,
    pub move_source: MoveSource,
    pub notices: Vec<GenerationNotice>,
}

/// A single member of a generated team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub species: Id,
    /// Display name of the species.
    pub name: String,
    pub types: Vec<Type>,
    pub level: u8,
    pub moves: Vec<Id>,
    pub ability: String,
    pub role: Role,
    pub provenance: Provenance,
}

/// A complete generated team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedTeam {
    pub archetype: Id,
    pub request: GenerationRequest,
    /// Habitats species were drawn from, after resolving tags and any widening.
    pub habitats: BTreeSet<Habitat>,
    pub members: Vec<TeamMember>,
    pub coverage: CoverageReport,
    pub suggestions: Vec<CoverageSuggestion>,
    /// Initial seed of the random number generator, for replaying the generation.
    pub seed: u64,
    pub notices: Vec<GenerationNotice>,
}
