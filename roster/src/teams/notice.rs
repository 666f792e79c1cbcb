use std::collections::BTreeSet;

use roster_data::{
    Habitat,
    Id,
};
use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    index::GenerationScope,
    moveset::MoveSource,
};

/// A non-fatal condition met while generating a team.
///
/// Notices never stop generation. Slot notices are recorded both on the team and in the
/// provenance of the member they concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum GenerationNotice {
    /// No candidate matched the slot, so a safe species was used.
    EmptyCandidatePool { slot: usize, scope: GenerationScope },
    /// The evolution chain of the drawn species could not be walked.
    EvolutionChainIntegrity {
        slot: usize,
        species: Id,
        message: String,
    },
    /// Some or all moves were generated rather than learned.
    MovesetFallback {
        slot: usize,
        species: Id,
        source: MoveSource,
    },
    /// The requested habitats did not suit the archetype and were widened.
    HabitatWidened {
        requested: BTreeSet<Habitat>,
        widened: BTreeSet<Habitat>,
    },
    /// Every candidate in the pool was already on the team.
    DuplicateSpecies { slot: usize, species: Id },
}

impl GenerationNotice {
    /// The team slot the notice concerns, if any.
    pub fn slot(&self) -> Option<usize> {
        match self {
            Self::EmptyCandidatePool { slot, .. }
            | Self::EvolutionChainIntegrity { slot, .. }
            | Self::MovesetFallback { slot, .. }
            | Self::DuplicateSpecies { slot, .. } => Some(*slot),
            Self::HabitatWidened { .. } => None,
        }
    }
}

#[cfg(test)]
mod notice_test {
    use pretty_assertions::assert_eq;
    use roster_data::Id;

    use crate::{
        moveset::MoveSource,
        teams::GenerationNotice,
    };

    #[test]
    fn serializes_with_kind_tag() {
        let notice = GenerationNotice::MovesetFallback {
            slot: 2,
            species: Id::from("abra"),
            source: MoveSource::Heuristic,
        };
        assert_eq!(
            serde_json::to_string(&notice).unwrap(),
            r#"{"kind":"MovesetFallback","slot":2,"species":"abra","source":"Heuristic"}"#
        );
        assert_eq!(notice.slot(), Some(2));
    }
}
