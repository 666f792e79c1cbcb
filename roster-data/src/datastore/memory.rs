use ahash::HashMap;
use anyhow::Result;

use crate::{
    ArchetypeData,
    DataStore,
    HabitatMapping,
    Id,
    LearnSet,
    MoveData,
    SpeciesData,
    TypeChart,
};

/// An implementation of [`DataStore`] that holds all data in memory.
///
/// Useful for tests and for callers that build their tables programmatically.
#[derive(Debug, Default, Clone)]
pub struct MemoryDataStore {
    pub species: Vec<SpeciesData>,
    pub moves: Vec<MoveData>,
    pub archetypes: Vec<ArchetypeData>,
    pub learnsets: HashMap<Id, LearnSet>,
    pub legacy_movesets: HashMap<Id, LearnSet>,
    pub habitat_mapping: HabitatMapping,
    pub type_chart: TypeChart,
}

impl MemoryDataStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_species(mut self, species: SpeciesData) -> Self {
        self.species.push(species);
        self
    }

    pub fn with_move(mut self, move_data: MoveData) -> Self {
        self.moves.push(move_data);
        self
    }

    pub fn with_archetype(mut self, archetype: ArchetypeData) -> Self {
        self.archetypes.push(archetype);
        self
    }

    pub fn with_learnset(mut self, species: &str, learnset: LearnSet) -> Self {
        self.learnsets.insert(Id::from(species), learnset);
        self
    }

    pub fn with_legacy_moveset(mut self, species: &str, learnset: LearnSet) -> Self {
        self.legacy_movesets.insert(Id::from(species), learnset);
        self
    }

    pub fn with_habitat_mapping(mut self, habitat_mapping: HabitatMapping) -> Self {
        self.habitat_mapping = habitat_mapping;
        self
    }
}

impl DataStore for MemoryDataStore {
    fn all_species(&self) -> Result<Vec<SpeciesData>> {
        Ok(self.species.clone())
    }

    fn all_moves(&self) -> Result<Vec<MoveData>> {
        Ok(self.moves.clone())
    }

    fn all_archetypes(&self) -> Result<Vec<ArchetypeData>> {
        Ok(self.archetypes.clone())
    }

    fn get_learnset(&self, species: &Id) -> Result<Option<LearnSet>> {
        Ok(self.learnsets.get(species).cloned())
    }

    fn get_legacy_moveset(&self, species: &Id) -> Result<Option<LearnSet>> {
        Ok(self.legacy_movesets.get(species).cloned())
    }

    fn get_habitat_mapping(&self) -> Result<HabitatMapping> {
        Ok(self.habitat_mapping.clone())
    }

    fn get_type_chart(&self) -> Result<TypeChart> {
        Ok(self.type_chart.clone())
    }
}
