use std::collections::BTreeSet;

use anyhow::{
    Error,
    Result,
};
use serde::Deserialize;

use crate::{
    EvolutionData,
    EvolutionMethod,
    Habitat,
    Id,
    RarityTier,
    SpeciesData,
    StatTable,
    Type,
};

#[derive(Debug, Deserialize)]
struct NestedIdentity {
    name: String,
    dex: u16,
    #[serde(default)]
    tier: RarityTier,
    #[serde(default)]
    legendary: bool,
}

#[derive(Debug, Deserialize)]
struct NestedTyping {
    primary: Type,
    #[serde(default)]
    secondary: Option<Type>,
}

#[derive(Debug, Deserialize)]
struct NestedStats {
    base: StatTable,
}

#[derive(Debug, Default, Deserialize)]
struct NestedEncounters {
    #[serde(default)]
    habitats: BTreeSet<Habitat>,
}

#[derive(Debug, Default, Deserialize)]
struct NestedAbilities {
    #[serde(default)]
    primary: Option<String>,
    #[serde(default)]
    secondary: Option<String>,
}

#[derive(Debug, Deserialize)]
struct NestedEvolutionEdge {
    species: String,
    method: EvolutionMethod,
    #[serde(default)]
    level: Option<u8>,
    #[serde(default)]
    item: Option<String>,
    #[serde(default)]
    condition: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct NestedEvolution {
    #[serde(default)]
    into: Vec<NestedEvolutionEdge>,
}

/// A species record in the nested shape, grouping fields by concern.
///
/// ```json
/// {
///   "species": { "name": "Treecko", "dex": 252, "tier": "Uncommon" },
///   "typing": { "primary": "Grass" },
///   "stats": { "base": { "hp": 40, "atk": 45, "def": 35, "spa": 65, "spd": 55, "spe": 70 } },
///   "encounters": { "habitats": ["Forest"] },
///   "abilities": { "primary": "Overgrow" },
///   "evolution": { "into": [{ "species": "Grovyle", "method": "Level", "level": 16 }] }
/// }
/// ```
#[derive(Debug, Deserialize)]
pub struct NestedSpeciesRecord {
    species: NestedIdentity,
    typing: NestedTyping,
    stats: NestedStats,
    #[serde(default)]
    encounters: NestedEncounters,
    #[serde(default)]
    abilities: NestedAbilities,
    #[serde(default)]
    evolution: NestedEvolution,
}

impl TryFrom<NestedSpeciesRecord> for SpeciesData {
    type Error = Error;

    fn try_from(record: NestedSpeciesRecord) -> Result<Self> {
        if record.evolution.into.iter().any(|edge| {
            edge.method == EvolutionMethod::Level && edge.level.is_none()
        }) {
            return Err(Error::msg(format!(
                "{} has a level evolution without a level",
                record.species.name
            )));
        }
        let evolutions = record
            .evolution
            .into
            .into_iter()
            .map(|edge| EvolutionData {
                target: Id::from(edge.species),
                method: edge.method,
                level: edge.level,
                item: edge.item,
                condition: edge.condition,
            })
            .collect();
        Ok(SpeciesData {
            name: record.species.name,
            dex_number: record.species.dex,
            primary_type: record.typing.primary,
            secondary_type: record.typing.secondary,
            base_stats: record.stats.base,
            abilities: record
                .abilities
                .primary
                .into_iter()
                .chain(record.abilities.secondary)
                .collect(),
            habitats: record.encounters.habitats,
            tier: record.species.tier,
            legendary: record.species.legendary,
            evolutions,
        })
    }
}

#[cfg(test)]
mod nested_test {
    use pretty_assertions::assert_eq;

    use crate::{
        EvolutionMethod,
        Habitat,
        Id,
        SpeciesData,
        Type,
        sources::nested::NestedSpeciesRecord,
    };

    fn convert(json: &str) -> anyhow::Result<SpeciesData> {
        SpeciesData::try_from(serde_json::from_str::<NestedSpeciesRecord>(json).unwrap())
    }

    #[test]
    fn converts_nested_record() {
        let species = convert(
            r#"{
                "species": { "name": "Lombre", "dex": 271, "tier": "Uncommon" },
                "typing": { "primary": "Water", "secondary": "Grass" },
                "stats": { "base": { "hp": 60, "atk": 50, "def": 50, "spa": 60, "spd": 70, "spe": 50 } },
                "encounters": { "habitats": ["WatersEdge"] },
                "abilities": { "primary": "Swift Swim", "secondary": "Rain Dish" },
                "evolution": { "into": [{ "species": "Ludicolo", "method": "Stone", "item": "Water Stone" }] }
            }"#,
        )
        .unwrap();
        assert_eq!(species.name, "Lombre");
        assert_eq!(species.types(), vec![Type::Water, Type::Grass]);
        assert_eq!(species.abilities, vec!["Swift Swim", "Rain Dish"]);
        assert!(species.habitats.contains(&Habitat::WatersEdge));
        assert_eq!(species.evolutions[0].target, Id::from("ludicolo"));
        assert_eq!(species.evolutions[0].method, EvolutionMethod::Stone);
        assert_eq!(species.bst(), 340);
    }

    #[test]
    fn optional_sections_default() {
        let species = convert(
            r#"{
                "species": { "name": "Rayquaza", "dex": 384, "tier": "Legendary", "legendary": true },
                "typing": { "primary": "Dragon", "secondary": "Flying" },
                "stats": { "base": { "hp": 105, "atk": 150, "def": 90, "spa": 150, "spd": 90, "spe": 95 } }
            }"#,
        )
        .unwrap();
        assert!(species.is_legendary());
        assert!(species.habitats.is_empty());
        assert!(species.abilities.is_empty());
        assert!(species.evolutions.is_empty());
    }

    #[test]
    fn rejects_level_evolution_without_level() {
        let error = convert(
            r#"{
                "species": { "name": "Torchic", "dex": 255 },
                "typing": { "primary": "Fire" },
                "stats": { "base": { "hp": 45, "atk": 60, "def": 40, "spa": 70, "spd": 50, "spe": 45 } },
                "evolution": { "into": [{ "species": "Combusken", "method": "Level" }] }
            }"#,
        )
        .unwrap_err();
        assert_eq!(
            error.to_string(),
            "Torchic has a level evolution without a level"
        );
    }
}
