use anyhow::Result;

use crate::{
    ArchetypeData,
    HabitatMapping,
    Id,
    LearnSet,
    MoveData,
    SpeciesData,
    TypeChart,
};

/// Collection of tables for all reference data consumed by the team generator.
///
/// This trait can be implemented for different data sources, such as an external database or disk.
/// Implementations are expected to return data already normalized into the canonical schema (see
/// [`crate::sources`] for the adapters that do this).
pub trait DataStore: Send + Sync {
    /// Gets every species record.
    fn all_species(&self) -> Result<Vec<SpeciesData>>;
    /// Gets every move.
    fn all_moves(&self) -> Result<Vec<MoveData>>;
    /// Gets every trainer archetype.
    fn all_archetypes(&self) -> Result<Vec<ArchetypeData>>;

    /// Gets the authentic level-up learnset of a species.
    fn get_learnset(&self, species: &Id) -> Result<Option<LearnSet>>;
    /// Gets the legacy moveset of a species, converted to a learnset.
    fn get_legacy_moveset(&self, species: &Id) -> Result<Option<LearnSet>>;

    /// Gets the habitat mapping table.
    fn get_habitat_mapping(&self) -> Result<HabitatMapping>;
    /// Gets the type chart.
    fn get_type_chart(&self) -> Result<TypeChart>;
}
