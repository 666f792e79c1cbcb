use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// Coarse rarity classification of a species.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum RarityTier {
    #[string = "Common"]
    #[default]
    Common,
    #[string = "Uncommon"]
    Uncommon,
    #[string = "Rare"]
    Rare,
    #[string = "Legendary"]
    Legendary,
}
