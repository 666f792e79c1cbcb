use std::collections::BTreeMap;

use roster_data::{
    EvolutionMethod,
    Id,
};
use serde::{
    Deserialize,
    Serialize,
};

use crate::repository::DEFAULT_HOP_LIMIT;

/// Tuning for evolution resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvolutionConfig {
    /// Minimum level for stone evolutions.
    pub stone_level: u8,
    /// Minimum level for friendship evolutions.
    pub friendship_level: u8,
    /// Minimum level for trade evolutions.
    pub trade_level: u8,
    /// Minimum level for any other non-level evolution.
    pub other_level: u8,
    /// Per-species minimum levels, keyed by the evolved species.
    ///
    /// Overrides the method threshold for forms that should show up later than their method
    /// suggests.
    pub species_levels: BTreeMap<Id, u8>,
    /// Levels subtracted from non-level thresholds for archetypes that allow exotic evolutions
    /// early.
    pub exotic_discount: u8,
    /// Maximum number of edges walked in one direction.
    pub hop_limit: u8,
}

impl EvolutionConfig {
    /// The minimum level threshold of a non-level evolution method.
    pub fn method_level(&self, method: EvolutionMethod) -> u8 {
        match method {
            EvolutionMethod::Stone => self.stone_level,
            EvolutionMethod::Friendship => self.friendship_level,
            EvolutionMethod::Trade => self.trade_level,
            EvolutionMethod::Level | EvolutionMethod::Other => self.other_level,
        }
    }
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            stone_level: 20,
            friendship_level: 20,
            trade_level: 35,
            other_level: 30,
            species_levels: BTreeMap::from_iter([
                (Id::from("machamp"), 40),
                (Id::from("gengar"), 40),
            ]),
            exotic_discount: 10,
            hop_limit: DEFAULT_HOP_LIMIT,
        }
    }
}

#[cfg(test)]
mod evolution_config_test {
    use pretty_assertions::assert_eq;
    use roster_data::{
        EvolutionMethod,
        Id,
    };

    use crate::evolution::EvolutionConfig;

    #[test]
    fn partial_config_keeps_defaults() {
        let config =
            serde_json::from_str::<EvolutionConfig>(r#"{ "trade_level": 30, "species_levels": { "Golem": 45 } }"#)
                .unwrap();
        assert_eq!(config.trade_level, 30);
        assert_eq!(config.stone_level, 20);
        assert_eq!(config.hop_limit, 10);
        assert_eq!(config.species_levels.get(&Id::from("golem")), Some(&45));
        assert_eq!(config.method_level(EvolutionMethod::Trade), 30);
    }
}
