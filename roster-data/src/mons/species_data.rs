use std::collections::BTreeSet;

use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    EvolutionData,
    Habitat,
    Id,
    RarityTier,
    StatTable,
    Type,
};

/// Data about a particular species.
///
/// Species data is common to all members of a given species. It is loaded once, normalized by the
/// source adapters, and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesData {
    /// The name of the species.
    ///
    /// The normalized name is the species ID, so it must be unique.
    pub name: String,
    /// National dex number, used for generation scoping.
    pub dex_number: u16,
    /// The primary type of the species.
    pub primary_type: Type,
    /// The secondary type of the species, if it exists.
    #[serde(default)]
    pub secondary_type: Option<Type>,
    /// Base stats.
    pub base_stats: StatTable,
    /// Abilities. The first ability is the primary ability.
    #[serde(default)]
    pub abilities: Vec<String>,
    /// Habitats the species is typically encountered in.
    #[serde(default)]
    pub habitats: BTreeSet<Habitat>,
    /// Rarity tier.
    #[serde(default)]
    pub tier: RarityTier,
    /// Is the species legendary?
    #[serde(default)]
    pub legendary: bool,
    /// Evolution edges out of this species.
    ///
    /// Most species have at most one. Branching lines list every branch in preference order.
    #[serde(default)]
    pub evolutions: Vec<EvolutionData>,
}

impl SpeciesData {
    /// The species ID.
    pub fn id(&self) -> Id {
        Id::from(self.name.as_str())
    }

    /// The species' types, primary first.
    pub fn types(&self) -> Vec<Type> {
        match self.secondary_type {
            Some(secondary) if secondary != self.primary_type => {
                Vec::from([self.primary_type, secondary])
            }
            _ => Vec::from([self.primary_type]),
        }
    }

    /// Does the species have the given type?
    pub fn has_type(&self, typ: Type) -> bool {
        self.primary_type == typ || self.secondary_type == Some(typ)
    }

    /// The base stat total (BST) of the species.
    pub fn bst(&self) -> u32 {
        self.base_stats.total()
    }

    /// Is the species legendary, by flag or by tier?
    pub fn is_legendary(&self) -> bool {
        self.legendary || self.tier == RarityTier::Legendary
    }

    /// Is the entry a placeholder that should never be offered as a candidate?
    pub fn is_placeholder(&self) -> bool {
        self.id().is_empty() || self.dex_number == 0 || self.base_stats.is_empty()
    }
}
