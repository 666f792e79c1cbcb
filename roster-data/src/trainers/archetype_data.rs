use std::collections::BTreeSet;

use serde::{
    Deserialize,
    Serialize,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

use crate::{
    Habitat,
    Id,
    RarityTier,
    Type,
};

/// The largest team a trainer can have.
pub const MAX_TEAM_SIZE: u8 = 6;

/// The deepest evolution stage in the data set (base forms are stage 1).
pub const MAX_EVOLUTION_STAGE: u8 = 3;

/// The terrain a trainer archetype operates on.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum Terrain {
    /// No preference.
    #[string = "Any"]
    #[default]
    Any,
    /// Land only, such as hikers or bug catchers.
    #[string = "Land"]
    Land,
    /// Water only, such as swimmers or fishermen.
    #[string = "Water"]
    #[alias = "Aquatic"]
    Water,
}

impl Terrain {
    /// Does the terrain make sense for the given set of habitats?
    ///
    /// A land-only trainer in purely aquatic habitats (or vice versa) does not.
    pub fn accepts(&self, habitats: &BTreeSet<Habitat>) -> bool {
        match self {
            Self::Any => true,
            Self::Land => habitats.iter().any(|habitat| !habitat.is_aquatic()),
            Self::Water => habitats.iter().any(|habitat| habitat.is_aquatic()),
        }
    }
}

/// How legendary species are treated for an archetype.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum LegendaryPolicy {
    /// Legendary species are never selected.
    #[string = "Exclude"]
    #[default]
    Exclude,
    /// Legendary species may be selected.
    #[string = "Allow"]
    Allow,
    /// Only legendary species are selected.
    #[string = "Only"]
    Only,
}

/// Inclusive team size range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamSizeRange {
    pub min: u8,
    pub max: u8,
}

impl Default for TeamSizeRange {
    fn default() -> Self {
        Self { min: 1, max: 3 }
    }
}

/// Inclusive base stat total range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BstRange {
    pub min: u32,
    pub max: u32,
}

impl BstRange {
    pub fn contains(&self, bst: u32) -> bool {
        self.min <= bst && bst <= self.max
    }
}

/// Level adjustments applied on top of the requested level range.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelModifiers {
    /// Offset added to every drawn level.
    #[serde(default)]
    pub offset: i8,
    /// Extra levels for the last team member.
    #[serde(default)]
    pub ace_bonus: u8,
}

fn default_max_evolution_stage() -> u8 {
    MAX_EVOLUTION_STAGE
}

/// A trainer archetype, which is a named policy bundle for building a team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchetypeData {
    /// Name of the archetype, such as "Bug Catcher" or "Gym Leader".
    pub name: String,
    /// Types a team member must have at least one of.
    ///
    /// Empty means no requirement.
    #[serde(default)]
    pub required_types: Vec<Type>,
    /// Types that receive a selection bonus.
    #[serde(default)]
    pub preferred_types: Vec<Type>,
    /// Team size range.
    #[serde(default)]
    pub team_size: TeamSizeRange,
    /// Level modifiers.
    #[serde(default)]
    pub level_modifiers: LevelModifiers,
    /// Maximum evolution stage a team member may reach.
    #[serde(default = "default_max_evolution_stage")]
    pub max_evolution_stage: u8,
    /// Base stat total range of selected species.
    #[serde(default)]
    pub bst_range: Option<BstRange>,
    /// Can team members use stone, trade, friendship, and other evolution methods at lower
    /// levels than usual?
    #[serde(default)]
    pub allow_exotic_evolutions: bool,
    /// Habitats the archetype naturally appears in.
    #[serde(default)]
    pub preferred_habitats: Vec<Habitat>,
    /// Terrain the archetype operates on.
    #[serde(default)]
    pub terrain: Terrain,
    /// Rarity tiers never selected.
    #[serde(default)]
    pub excluded_tiers: BTreeSet<RarityTier>,
    /// Legendary policy.
    #[serde(default)]
    pub legendary_policy: LegendaryPolicy,
}

impl ArchetypeData {
    /// The archetype ID.
    pub fn id(&self) -> Id {
        Id::from(self.name.as_str())
    }

    /// Lists every problem that makes the archetype unusable.
    pub fn problems(&self) -> Vec<String> {
        let mut problems = Vec::new();
        if self.id().is_empty() {
            problems.push("archetype name is empty".to_owned());
        }
        if self.team_size.min == 0 {
            problems.push("minimum team size must be at least 1".to_owned());
        }
        if self.team_size.min > self.team_size.max {
            problems.push(format!(
                "minimum team size {} exceeds maximum team size {}",
                self.team_size.min, self.team_size.max
            ));
        }
        if self.team_size.max > MAX_TEAM_SIZE {
            problems.push(format!(
                "maximum team size {} exceeds {MAX_TEAM_SIZE}",
                self.team_size.max
            ));
        }
        if self.max_evolution_stage == 0 || self.max_evolution_stage > MAX_EVOLUTION_STAGE {
            problems.push(format!(
                "maximum evolution stage {} is not between 1 and {MAX_EVOLUTION_STAGE}",
                self.max_evolution_stage
            ));
        }
        if let Some(bst_range) = self.bst_range {
            if bst_range.min > bst_range.max {
                problems.push(format!(
                    "minimum BST {} exceeds maximum BST {}",
                    bst_range.min, bst_range.max
                ));
            }
        }
        problems
    }
}
