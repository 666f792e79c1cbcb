use roster_data::Id;
use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

/// A failed walk over evolution edges.
///
/// Never fatal: callers fall back to the species they started from.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvolutionChainIntegrityError {
    #[error("evolution chain of {species} contains a cycle")]
    Cycle { species: Id },
    #[error("evolution chain of {species} exceeds {limit} hops")]
    HopLimitExceeded { species: Id, limit: u8 },
}

/// An ordered view of an evolution line, from the base form to the final form.
///
/// Branching lines follow the first branch in data order past the species the chain was built for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EvolutionChain {
    stages: Vec<Id>,
}

impl EvolutionChain {
    pub(crate) fn new(stages: Vec<Id>) -> Self {
        Self { stages }
    }

    /// All stages, base form first.
    pub fn stages(&self) -> &[Id] {
        &self.stages
    }

    /// The number of stages.
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Is the chain empty?
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// The base form.
    pub fn base(&self) -> Option<&Id> {
        self.stages.first()
    }

    /// The final form.
    pub fn final_form(&self) -> Option<&Id> {
        self.stages.last()
    }

    /// The 1-based stage of the species in the chain.
    pub fn stage_of(&self, species: &Id) -> Option<u8> {
        self.stages
            .iter()
            .position(|stage| stage == species)
            .map(|index| index as u8 + 1)
    }
}

#[cfg(test)]
mod evolution_chain_test {
    use pretty_assertions::assert_eq;
    use roster_data::Id;

    use crate::repository::{
        EvolutionChain,
        EvolutionChainIntegrityError,
    };

    #[test]
    fn finds_stages() {
        let chain = EvolutionChain::new(vec![
            Id::from("mudkip"),
            Id::from("marshtomp"),
            Id::from("swampert"),
        ]);
        assert_eq!(chain.len(), 3);
        assert_eq!(chain.base(), Some(&Id::from("mudkip")));
        assert_eq!(chain.final_form(), Some(&Id::from("swampert")));
        assert_eq!(chain.stage_of(&Id::from("marshtomp")), Some(2));
        assert_eq!(chain.stage_of(&Id::from("torchic")), None);
    }

    #[test]
    fn describes_integrity_errors() {
        assert_eq!(
            EvolutionChainIntegrityError::HopLimitExceeded {
                species: Id::from("a"),
                limit: 10,
            }
            .to_string(),
            "evolution chain of a exceeds 10 hops"
        );
    }
}
