use ahash::HashSet;
use roster_data::{
    ArchetypeData,
    EvolutionData,
    EvolutionMethod,
    Id,
};
use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    evolution::EvolutionConfig,
    repository::{
        EvolutionChainIntegrityError,
        SpeciesRepository,
    },
};

/// The result of resolving a species to the stage appropriate for a level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionResolution {
    /// The species resolution started from.
    pub original: Id,
    /// The resolved species.
    pub species: Id,
    /// Was the species promoted to a later stage?
    pub evolved: bool,
    /// Was the species demoted to an earlier stage?
    pub demoted: bool,
    /// The evolution line from the base form to the resolved species.
    pub stage_path: Vec<Id>,
    /// Set when the evolution graph could not be walked. The species is left unresolved.
    #[serde(skip)]
    pub integrity_warning: Option<EvolutionChainIntegrityError>,
}

impl EvolutionResolution {
    fn unresolved(species: &Id, warning: EvolutionChainIntegrityError) -> Self {
        Self {
            original: species.clone(),
            species: species.clone(),
            evolved: false,
            demoted: false,
            stage_path: Vec::from([species.clone()]),
            integrity_warning: Some(warning),
        }
    }

    /// The 1-based evolution stage of the resolved species.
    pub fn stage(&self) -> u8 {
        self.stage_path.len() as u8
    }
}

/// Resolves species to the evolution stage appropriate for a level and trainer archetype.
///
/// Resolution runs in two bounded passes. The demotion pass walks backward while the edge into
/// the current species requires a higher level than the target, or while the current stage
/// exceeds the archetype maximum. The promotion pass then walks forward over the first eligible
/// edge until no edge applies or the archetype maximum is reached.
pub struct EvolutionResolver<'r> {
    repository: &'r SpeciesRepository,
    config: &'r EvolutionConfig,
}

impl<'r> EvolutionResolver<'r> {
    pub fn new(repository: &'r SpeciesRepository, config: &'r EvolutionConfig) -> Self {
        Self { repository, config }
    }

    /// The minimum level at which an edge may be taken by the archetype.
    pub fn minimum_level(&self, edge: &EvolutionData, archetype: &ArchetypeData) -> u8 {
        if let (EvolutionMethod::Level, Some(level)) = (edge.method, edge.level) {
            return level;
        }
        let threshold = self
            .config
            .species_levels
            .get(&edge.target)
            .copied()
            .unwrap_or_else(|| self.config.method_level(edge.method));
        let threshold = if archetype.allow_exotic_evolutions {
            threshold.saturating_sub(self.config.exotic_discount).max(1)
        } else {
            threshold
        };
        threshold.max(edge.level.unwrap_or_default())
    }

    /// Resolves a species for the given level and archetype.
    ///
    /// Never fails. A malformed evolution graph leaves the species unresolved, with the problem
    /// recorded on the result.
    pub fn resolve(&self, species: &Id, level: u8, archetype: &ArchetypeData) -> EvolutionResolution {
        let hop_limit = self.config.hop_limit;
        let max_stage = archetype.max_evolution_stage.max(1) as usize;

        let mut path = match self.repository.pre_evolutions(species, hop_limit) {
            Ok(ancestors) => ancestors,
            Err(error) => {
                log::warn!("Leaving {species} unresolved: {error}");
                return EvolutionResolution::unresolved(species, error);
            }
        };
        path.reverse();
        path.push(species.clone());
        let original_stage = path.len();

        // Demotion.
        while let Some(current) = path.last() {
            let Some((_, edge)) = self.repository.evolution_into(current) else {
                break;
            };
            if path.len() > max_stage || level < self.minimum_level(edge, archetype) {
                path.pop();
            } else {
                break;
            }
        }

        // Promotion.
        let mut visited = path.iter().cloned().collect::<HashSet<_>>();
        let mut hops = 0;
        while path.len() < max_stage {
            let Some(edge) = path
                .last()
                .and_then(|current| self.repository.get(current))
                .and_then(|data| {
                    data.evolutions
                        .iter()
                        .find(|edge| level >= self.minimum_level(edge, archetype))
                })
            else {
                break;
            };
            hops += 1;
            if hops > hop_limit {
                let error = EvolutionChainIntegrityError::HopLimitExceeded {
                    species: species.clone(),
                    limit: hop_limit,
                };
                log::warn!("Leaving {species} unresolved: {error}");
                return EvolutionResolution::unresolved(species, error);
            }
            if !visited.insert(edge.target.clone()) {
                let error = EvolutionChainIntegrityError::Cycle {
                    species: species.clone(),
                };
                log::warn!("Leaving {species} unresolved: {error}");
                return EvolutionResolution::unresolved(species, error);
            }
            path.push(edge.target.clone());
        }

        let resolved = path.last().cloned().unwrap_or_else(|| species.clone());
        EvolutionResolution {
            original: species.clone(),
            evolved: path.len() > original_stage,
            demoted: path.len() < original_stage,
            species: resolved,
            stage_path: path,
            integrity_warning: None,
        }
    }
}
