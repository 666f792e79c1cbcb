use serde::{
    Deserialize,
    Serialize,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

use crate::Id;

/// Evolution methods.
///
/// Only [`EvolutionMethod::Level`] carries an exact level. Every other method is mapped to a
/// minimum level by the evolution resolver.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum EvolutionMethod {
    /// Evolves on level-up.
    #[string = "Level"]
    #[alias = "L"]
    Level,
    /// Evolves on evolution stone use outside of battle.
    #[string = "Stone"]
    #[alias = "Item"]
    #[alias = "S"]
    Stone,
    /// Evolves after being traded.
    #[string = "Trade"]
    #[alias = "T"]
    Trade,
    /// Evolves on level-up with high friendship.
    #[string = "Friendship"]
    #[alias = "Happiness"]
    #[alias = "F"]
    Friendship,
    /// Evolves in some other custom way.
    #[string = "Other"]
    #[alias = "Custom"]
    #[alias = "O"]
    Other,
}

/// A single evolution edge, from the species that owns it to `target`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionData {
    /// The species this edge evolves into.
    pub target: Id,
    /// The evolution method.
    pub method: EvolutionMethod,
    /// Level requirement.
    ///
    /// Required for [`EvolutionMethod::Level`]. Other methods may carry a level too (for example,
    /// a trade evolution that also needs a minimum level in some rule sets), which the resolver
    /// treats as a lower bound.
    #[serde(default)]
    pub level: Option<u8>,
    /// Item used or held, for stone and held-item trade evolutions.
    #[serde(default)]
    pub item: Option<String>,
    /// Free-form description of any other condition.
    #[serde(default)]
    pub condition: Option<String>,
}

impl EvolutionData {
    /// Creates a level-up evolution edge.
    pub fn level(target: Id, level: u8) -> Self {
        Self {
            target,
            method: EvolutionMethod::Level,
            level: Some(level),
            item: None,
            condition: None,
        }
    }

    /// Creates an evolution edge with no level requirement.
    pub fn by(target: Id, method: EvolutionMethod) -> Self {
        Self {
            target,
            method,
            level: None,
            item: None,
            condition: None,
        }
    }

    /// A human-readable description of the requirement.
    pub fn requirement(&self) -> String {
        match (self.method, self.level, &self.item) {
            (EvolutionMethod::Level, Some(level), _) => format!("level {level}"),
            (EvolutionMethod::Stone, _, Some(item)) => format!("use {item}"),
            (EvolutionMethod::Trade, _, Some(item)) => format!("trade holding {item}"),
            (EvolutionMethod::Trade, _, None) => "trade".to_owned(),
            (EvolutionMethod::Friendship, _, _) => "high friendship".to_owned(),
            _ => self
                .condition
                .clone()
                .unwrap_or_else(|| format!("{}", self.method)),
        }
    }
}

#[cfg(test)]
mod evolution_method_test {
    use crate::{
        EvolutionMethod,
        test_util::{
            test_string_deserialization,
            test_string_serialization,
        },
    };

    #[test]
    fn serializes_to_string() {
        test_string_serialization(EvolutionMethod::Level, "Level");
        test_string_serialization(EvolutionMethod::Stone, "Stone");
        test_string_serialization(EvolutionMethod::Trade, "Trade");
        test_string_serialization(EvolutionMethod::Friendship, "Friendship");
        test_string_serialization(EvolutionMethod::Other, "Other");
    }

    #[test]
    fn deserializes_aliases() {
        test_string_deserialization("L", EvolutionMethod::Level);
        test_string_deserialization("Item", EvolutionMethod::Stone);
        test_string_deserialization("T", EvolutionMethod::Trade);
        test_string_deserialization("happiness", EvolutionMethod::Friendship);
        test_string_deserialization("Custom", EvolutionMethod::Other);
    }
}
