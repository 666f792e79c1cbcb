use ahash::HashMap;
use serde::{
    Deserialize,
    Serialize,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// The elemental type of a species or move.
///
/// Only the seventeen types of the third generation exist.
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
pub enum Type {
    #[string = "Normal"]
    #[default]
    Normal,
    #[string = "Fighting"]
    Fighting,
    #[string = "Flying"]
    Flying,
    #[string = "Poison"]
    Poison,
    #[string = "Ground"]
    Ground,
    #[string = "Rock"]
    Rock,
    #[string = "Bug"]
    Bug,
    #[string = "Ghost"]
    Ghost,
    #[string = "Steel"]
    Steel,
    #[string = "Fire"]
    Fire,
    #[string = "Water"]
    Water,
    #[string = "Grass"]
    Grass,
    #[string = "Electric"]
    Electric,
    #[string = "Psychic"]
    Psychic,
    #[string = "Ice"]
    Ice,
    #[string = "Dragon"]
    Dragon,
    #[string = "Dark"]
    Dark,
}

impl Type {
    /// Every canonical type, in dex order.
    pub const CANONICAL: [Type; 17] = [
        Type::Normal,
        Type::Fighting,
        Type::Flying,
        Type::Poison,
        Type::Ground,
        Type::Rock,
        Type::Bug,
        Type::Ghost,
        Type::Steel,
        Type::Fire,
        Type::Water,
        Type::Grass,
        Type::Electric,
        Type::Psychic,
        Type::Ice,
        Type::Dragon,
        Type::Dark,
    ];
}

/// How well an attacking type hits a single defending type.
///
/// Data tables write these as damage multipliers.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(from = "f32", into = "f32")]
pub enum TypeEffectiveness {
    /// Immune.
    None,
    /// Resisted.
    Weak,
    #[default]
    Normal,
    /// Super effective.
    Strong,
}

impl From<f32> for TypeEffectiveness {
    fn from(multiplier: f32) -> Self {
        match multiplier {
            m if m <= 0.0 => Self::None,
            m if m < 1.0 => Self::Weak,
            m if m > 1.0 => Self::Strong,
            _ => Self::Normal,
        }
    }
}

impl From<TypeEffectiveness> for f32 {
    fn from(value: TypeEffectiveness) -> Self {
        match value {
            TypeEffectiveness::None => 0.0,
            TypeEffectiveness::Weak => 0.5,
            TypeEffectiveness::Normal => 1.0,
            TypeEffectiveness::Strong => 2.0,
        }
    }
}

/// A type table, which contains type effectiveness information for types against some other value.
///
/// The key here is the attacking type. Missing entries are [`TypeEffectiveness::Normal`].
pub type TypeTable<T> = HashMap<Type, HashMap<T, TypeEffectiveness>>;

/// A type chart, which contains all type effectiveness information for types against other types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeChart {
    pub types: TypeTable<Type>,
}

impl TypeChart {
    /// The third-generation type chart.
    pub fn gen3() -> Self {
        use Type::*;
        use TypeEffectiveness::{
            None as Immune,
            Strong,
            Weak,
        };
        let rows: [(Type, &[(Type, TypeEffectiveness)]); 17] = [
            (Normal, &[(Rock, Weak), (Steel, Weak), (Ghost, Immune)]),
            (
                Fire,
                &[
                    (Fire, Weak),
                    (Water, Weak),
                    (Rock, Weak),
                    (Dragon, Weak),
                    (Grass, Strong),
                    (Ice, Strong),
                    (Bug, Strong),
                    (Steel, Strong),
                ],
            ),
            (
                Water,
                &[
                    (Water, Weak),
                    (Grass, Weak),
                    (Dragon, Weak),
                    (Fire, Strong),
                    (Ground, Strong),
                    (Rock, Strong),
                ],
            ),
            (
                Electric,
                &[
                    (Electric, Weak),
                    (Grass, Weak),
                    (Dragon, Weak),
                    (Ground, Immune),
                    (Water, Strong),
                    (Flying, Strong),
                ],
            ),
            (
                Grass,
                &[
                    (Fire, Weak),
                    (Grass, Weak),
                    (Poison, Weak),
                    (Flying, Weak),
                    (Bug, Weak),
                    (Dragon, Weak),
                    (Steel, Weak),
                    (Water, Strong),
                    (Ground, Strong),
                    (Rock, Strong),
                ],
            ),
            (
                Ice,
                &[
                    (Fire, Weak),
                    (Water, Weak),
                    (Ice, Weak),
                    (Steel, Weak),
                    (Grass, Strong),
                    (Ground, Strong),
                    (Flying, Strong),
                    (Dragon, Strong),
                ],
            ),
            (
                Fighting,
                &[
                    (Poison, Weak),
                    (Flying, Weak),
                    (Psychic, Weak),
                    (Bug, Weak),
                    (Ghost, Immune),
                    (Normal, Strong),
                    (Ice, Strong),
                    (Rock, Strong),
                    (Dark, Strong),
                    (Steel, Strong),
                ],
            ),
            (
                Poison,
                &[
                    (Poison, Weak),
                    (Ground, Weak),
                    (Rock, Weak),
                    (Ghost, Weak),
                    (Steel, Immune),
                    (Grass, Strong),
                ],
            ),
            (
                Ground,
                &[
                    (Grass, Weak),
                    (Bug, Weak),
                    (Flying, Immune),
                    (Fire, Strong),
                    (Electric, Strong),
                    (Poison, Strong),
                    (Rock, Strong),
                    (Steel, Strong),
                ],
            ),
            (
                Flying,
                &[
                    (Electric, Weak),
                    (Rock, Weak),
                    (Steel, Weak),
                    (Grass, Strong),
                    (Fighting, Strong),
                    (Bug, Strong),
                ],
            ),
            (
                Psychic,
                &[
                    (Psychic, Weak),
                    (Steel, Weak),
                    (Dark, Immune),
                    (Fighting, Strong),
                    (Poison, Strong),
                ],
            ),
            (
                Bug,
                &[
                    (Fire, Weak),
                    (Fighting, Weak),
                    (Poison, Weak),
                    (Flying, Weak),
                    (Ghost, Weak),
                    (Steel, Weak),
                    (Grass, Strong),
                    (Psychic, Strong),
                    (Dark, Strong),
                ],
            ),
            (
                Rock,
                &[
                    (Fighting, Weak),
                    (Ground, Weak),
                    (Steel, Weak),
                    (Fire, Strong),
                    (Ice, Strong),
                    (Flying, Strong),
                    (Bug, Strong),
                ],
            ),
            (
                Ghost,
                &[
                    (Dark, Weak),
                    (Steel, Weak),
                    (Normal, Immune),
                    (Psychic, Strong),
                    (Ghost, Strong),
                ],
            ),
            (Dragon, &[(Steel, Weak), (Dragon, Strong)]),
            (
                Dark,
                &[
                    (Fighting, Weak),
                    (Dark, Weak),
                    (Steel, Weak),
                    (Psychic, Strong),
                    (Ghost, Strong),
                ],
            ),
            (
                Steel,
                &[
                    (Fire, Weak),
                    (Water, Weak),
                    (Electric, Weak),
                    (Steel, Weak),
                    (Ice, Strong),
                    (Rock, Strong),
                ],
            ),
        ];
        let types = rows
            .into_iter()
            .map(|(attacking, row)| (attacking, row.iter().copied().collect()))
            .collect();
        Self { types }
    }

    /// Effectiveness of one attacking type against a single defending type.
    pub fn effectiveness(&self, attacking: Type, defending: Type) -> TypeEffectiveness {
        self.types
            .get(&attacking)
            .and_then(|row| row.get(&defending))
            .copied()
            .unwrap_or_default()
    }

    /// Damage multiplier of one attacking type against a defender with one or two types.
    pub fn multiplier(&self, attacking: Type, defending: &[Type]) -> f32 {
        defending
            .iter()
            .map(|defending| f32::from(self.effectiveness(attacking, *defending)))
            .product()
    }
}

impl Default for TypeChart {
    fn default() -> Self {
        Self::gen3()
    }
}
