use ahash::{
    HashMap,
    HashSet,
};
use anyhow::Result;
use roster_data::{
    ArchetypeData,
    DataStore,
    EvolutionData,
    HabitatMapping,
    Id,
    LearnSet,
    MoveData,
    SpeciesData,
    TypeChart,
};

use crate::{
    error::{
        ConfigurationError,
        WrapError,
        WrapResultError,
    },
    repository::{
        EvolutionChain,
        EvolutionChainIntegrityError,
    },
};

/// The default bound on the number of edges walked over an evolution line.
pub const DEFAULT_HOP_LIMIT: u8 = 10;

/// Normalized, immutable in-memory tables of all reference data.
///
/// Built once from a [`DataStore`]. Placeholder species and malformed evolution edges are dropped
/// during the build, so every species and edge reachable through the repository is usable.
#[derive(Debug)]
pub struct SpeciesRepository {
    species: HashMap<Id, SpeciesData>,
    dex_order: Vec<Id>,
    prevos: HashMap<Id, Id>,
    learnsets: HashMap<Id, LearnSet>,
    legacy_movesets: HashMap<Id, LearnSet>,
    moves: HashMap<Id, MoveData>,
    archetypes: HashMap<Id, ArchetypeData>,
    habitat_mapping: HabitatMapping,
    type_chart: TypeChart,
}

impl SpeciesRepository {
    /// Builds the repository from the given data store.
    pub fn new(data: &dyn DataStore) -> Result<Self> {
        let mut species = HashMap::<Id, SpeciesData>::default();
        let mut excluded = 0;
        for entry in data
            .all_species()
            .wrap_error_with_message("failed to load species")?
        {
            if entry.is_placeholder() {
                log::warn!(
                    "Excluding placeholder species entry {:?} (dex {})",
                    entry.name,
                    entry.dex_number
                );
                excluded += 1;
                continue;
            }
            let id = entry.id();
            if species.contains_key(&id) {
                log::warn!("Excluding duplicate species entry {id}");
                excluded += 1;
                continue;
            }
            species.insert(id, entry);
        }

        if species.is_empty() {
            return Err(ConfigurationError::from_iter(["repository contains no species"]).wrap_error());
        }

        let mut dex_order = species
            .values()
            .map(|species| (species.dex_number, species.id()))
            .collect::<Vec<_>>();
        dex_order.sort();
        let dex_order = dex_order.into_iter().map(|(_, id)| id).collect::<Vec<_>>();

        let prevos = Self::sanitize_evolutions(&mut species, &dex_order);

        let mut learnsets = HashMap::default();
        let mut legacy_movesets = HashMap::default();
        for id in &dex_order {
            if let Some(learnset) = data
                .get_learnset(id)
                .wrap_error_with_format(format_args!("failed to load learnset for {id}"))?
                .map(LearnSet::normalize)
                .filter(|learnset| !learnset.is_empty())
            {
                learnsets.insert(id.clone(), learnset);
            }
            if let Some(moveset) = data
                .get_legacy_moveset(id)
                .wrap_error_with_format(format_args!("failed to load legacy moveset for {id}"))?
                .map(LearnSet::normalize)
                .filter(|moveset| !moveset.is_empty())
            {
                legacy_movesets.insert(id.clone(), moveset);
            }
        }

        let moves = data
            .all_moves()
            .wrap_error_with_message("failed to load moves")?
            .into_iter()
            .map(|move_data| (move_data.id(), move_data))
            .collect();
        let archetypes = data
            .all_archetypes()
            .wrap_error_with_message("failed to load archetypes")?
            .into_iter()
            .map(|archetype| (archetype.id(), archetype))
            .collect();
        let habitat_mapping = data
            .get_habitat_mapping()
            .wrap_error_with_message("failed to load habitat mapping")?;
        let type_chart = data
            .get_type_chart()
            .wrap_error_with_message("failed to load type chart")?;

        log::info!(
            "Built species repository with {} species ({excluded} excluded), {} learnsets, {} legacy movesets",
            species.len(),
            learnsets.len(),
            legacy_movesets.len(),
        );

        Ok(Self {
            species,
            dex_order,
            prevos,
            learnsets,
            legacy_movesets,
            moves,
            archetypes,
            habitat_mapping,
            type_chart,
        })
    }

    /// Drops self-referential, dangling, and conflicting evolution edges, returning the
    /// pre-evolution of every species that has one.
    fn sanitize_evolutions(
        species: &mut HashMap<Id, SpeciesData>,
        dex_order: &[Id],
    ) -> HashMap<Id, Id> {
        let ids = species.keys().cloned().collect::<HashSet<_>>();
        let mut prevos = HashMap::<Id, Id>::default();
        for id in dex_order {
            let Some(entry) = species.get_mut(id) else {
                continue;
            };
            entry.evolutions.retain(|edge| {
                if edge.target == *id {
                    log::warn!("Excluding self-referential evolution edge on {id}");
                    false
                } else if !ids.contains(&edge.target) {
                    log::warn!(
                        "Excluding dangling evolution edge from {id} to unknown species {}",
                        edge.target
                    );
                    false
                } else if let Some(prevo) = prevos.get(&edge.target) {
                    log::warn!(
                        "Excluding evolution edge from {id} to {}, which already evolves from {prevo}",
                        edge.target
                    );
                    false
                } else {
                    prevos.insert(edge.target.clone(), id.clone());
                    true
                }
            });
        }
        prevos
    }

    /// The number of species.
    pub fn len(&self) -> usize {
        self.species.len()
    }

    /// Is the repository empty?
    ///
    /// A successfully built repository never is.
    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }

    /// Looks up a species.
    pub fn get(&self, id: &Id) -> Option<&SpeciesData> {
        self.species.get(id)
    }

    /// Does the species exist?
    pub fn contains(&self, id: &Id) -> bool {
        self.species.contains_key(id)
    }

    /// All species, ordered by national dex number.
    pub fn species(&self) -> impl Iterator<Item = &SpeciesData> {
        self.dex_order.iter().filter_map(|id| self.species.get(id))
    }

    /// The immediate pre-evolution of a species.
    pub fn prevo(&self, id: &Id) -> Option<&Id> {
        self.prevos.get(id)
    }

    /// The edge a species evolves from, along with the species that owns it.
    pub fn evolution_into(&self, id: &Id) -> Option<(&Id, &EvolutionData)> {
        let prevo = self.prevos.get(id)?;
        let edge = self
            .species
            .get(prevo)?
            .evolutions
            .iter()
            .find(|edge| edge.target == *id)?;
        Some((prevo, edge))
    }

    /// All pre-evolutions of a species, nearest first.
    pub fn pre_evolutions(
        &self,
        id: &Id,
        hop_limit: u8,
    ) -> Result<Vec<Id>, EvolutionChainIntegrityError> {
        let mut ancestors = Vec::new();
        let mut visited = HashSet::from_iter([id.clone()]);
        let mut current = id;
        while let Some(prevo) = self.prevos.get(current) {
            if ancestors.len() >= hop_limit as usize {
                return Err(EvolutionChainIntegrityError::HopLimitExceeded {
                    species: id.clone(),
                    limit: hop_limit,
                });
            }
            if !visited.insert(prevo.clone()) {
                return Err(EvolutionChainIntegrityError::Cycle {
                    species: id.clone(),
                });
            }
            ancestors.push(prevo.clone());
            current = prevo;
        }
        Ok(ancestors)
    }

    /// The 1-based evolution stage of a species.
    pub fn evolution_stage(&self, id: &Id) -> Result<u8, EvolutionChainIntegrityError> {
        Ok(self.pre_evolutions(id, DEFAULT_HOP_LIMIT)?.len() as u8 + 1)
    }

    /// The evolution chain through a species.
    pub fn evolution_chain(&self, id: &Id) -> Result<EvolutionChain, EvolutionChainIntegrityError> {
        let mut stages = self.pre_evolutions(id, DEFAULT_HOP_LIMIT)?;
        stages.reverse();
        stages.push(id.clone());
        let mut visited = stages.iter().cloned().collect::<HashSet<_>>();
        let mut current = id.clone();
        while let Some(edge) = self
            .species
            .get(&current)
            .and_then(|species| species.evolutions.first())
        {
            if stages.len() > DEFAULT_HOP_LIMIT as usize {
                return Err(EvolutionChainIntegrityError::HopLimitExceeded {
                    species: id.clone(),
                    limit: DEFAULT_HOP_LIMIT,
                });
            }
            if !visited.insert(edge.target.clone()) {
                return Err(EvolutionChainIntegrityError::Cycle {
                    species: id.clone(),
                });
            }
            stages.push(edge.target.clone());
            current = edge.target.clone();
        }
        Ok(EvolutionChain::new(stages))
    }

    /// The level-up learnset of a species, if it has one.
    pub fn learnset(&self, id: &Id) -> Option<&LearnSet> {
        self.learnsets.get(id)
    }

    /// The legacy moveset of a species, if it has one.
    pub fn legacy_moveset(&self, id: &Id) -> Option<&LearnSet> {
        self.legacy_movesets.get(id)
    }

    /// Looks up a move.
    pub fn move_data(&self, id: &Id) -> Option<&MoveData> {
        self.moves.get(id)
    }

    /// Looks up a trainer archetype.
    pub fn archetype(&self, id: &Id) -> Option<&ArchetypeData> {
        self.archetypes.get(id)
    }

    /// All trainer archetypes.
    pub fn archetypes(&self) -> impl Iterator<Item = &ArchetypeData> {
        self.archetypes.values()
    }

    /// The habitat mapping table.
    pub fn habitat_mapping(&self) -> &HabitatMapping {
        &self.habitat_mapping
    }

    /// The type chart.
    pub fn type_chart(&self) -> &TypeChart {
        &self.type_chart
    }
}
