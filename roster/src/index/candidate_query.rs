use std::collections::BTreeSet;

use roster_data::{
    ArchetypeData,
    BstRange,
    Habitat,
    Id,
    LegendaryPolicy,
    RarityTier,
    Type,
};

use crate::index::GenerationScope;

/// Filters for a [`CandidateIndex`][`crate::index::CandidateIndex`] lookup.
///
/// Every field is a set, so the order filters are listed in never changes the result.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CandidateQuery {
    /// Habitats a candidate must appear in at least one of.
    ///
    /// Empty means any habitat, including none.
    pub habitats: BTreeSet<Habitat>,
    /// Generations candidates are drawn from.
    pub scope: GenerationScope,
    /// Types a candidate must have at least one of.
    pub required_types: BTreeSet<Type>,
    /// Types candidates are narrowed to, unless no candidate has any of them.
    pub preferred_types: BTreeSet<Type>,
    pub excluded_tiers: BTreeSet<RarityTier>,
    pub bst_range: Option<BstRange>,
    pub legendary_policy: LegendaryPolicy,
    /// Species never returned.
    pub excluded_species: BTreeSet<Id>,
}

impl CandidateQuery {
    /// Creates a query over every species in the given scope.
    pub fn new(scope: GenerationScope) -> Self {
        Self {
            scope,
            ..Default::default()
        }
    }

    /// Creates a query applying every species filter of an archetype.
    pub fn for_archetype<I>(archetype: &ArchetypeData, habitats: I, scope: GenerationScope) -> Self
    where
        I: IntoIterator<Item = Habitat>,
    {
        Self {
            habitats: habitats.into_iter().collect(),
            scope,
            required_types: archetype.required_types.iter().copied().collect(),
            preferred_types: archetype.preferred_types.iter().copied().collect(),
            excluded_tiers: archetype.excluded_tiers.clone(),
            bst_range: archetype.bst_range,
            legendary_policy: archetype.legendary_policy,
            excluded_species: BTreeSet::new(),
        }
    }

    pub fn with_habitats<I>(mut self, habitats: I) -> Self
    where
        I: IntoIterator<Item = Habitat>,
    {
        self.habitats = habitats.into_iter().collect();
        self
    }

    pub fn with_required_types<I>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = Type>,
    {
        self.required_types = types.into_iter().collect();
        self
    }

    pub fn with_preferred_types<I>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = Type>,
    {
        self.preferred_types = types.into_iter().collect();
        self
    }

    pub fn with_excluded_species<I>(mut self, species: I) -> Self
    where
        I: IntoIterator<Item = Id>,
    {
        self.excluded_species = species.into_iter().collect();
        self
    }

    /// The same query over every habitat the query does not cover.
    pub fn off_habitat(&self) -> Self {
        Self {
            habitats: Habitat::ALL
                .into_iter()
                .filter(|habitat| !self.habitats.contains(habitat))
                .collect(),
            ..self.clone()
        }
    }
}
