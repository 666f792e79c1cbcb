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
#[serde(rename_all = "camelCase")]
struct CamelCaseStats {
    hp: u16,
    attack: u16,
    defense: u16,
    sp_attack: u16,
    sp_defense: u16,
    speed: u16,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CamelCaseRequirement {
    Level(u8),
    Text(String),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CamelCaseEvolution {
    target_id: String,
    method: EvolutionMethod,
    #[serde(default)]
    requirement: Option<CamelCaseRequirement>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CamelCaseEvolutions {
    One(CamelCaseEvolution),
    Many(Vec<CamelCaseEvolution>),
}

/// A species record in the flat camelCase shape.
///
/// ```json
/// {
///   "id": 25,
///   "name": "Pikachu",
///   "types": ["Electric"],
///   "baseStats": { "hp": 35, "attack": 55, "defense": 30, "spAttack": 50, "spDefense": 40, "speed": 90 },
///   "abilities": ["Static"],
///   "biomes": ["Forest"],
///   "tier": "uncommon",
///   "isLegendary": false,
///   "evolution": { "targetId": "Raichu", "method": "STONE", "requirement": "Thunder Stone" }
/// }
/// ```
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CamelCaseSpeciesRecord {
    id: u16,
    name: String,
    types: Vec<Type>,
    base_stats: CamelCaseStats,
    #[serde(default)]
    abilities: Vec<String>,
    #[serde(default)]
    biomes: BTreeSet<Habitat>,
    #[serde(default)]
    tier: RarityTier,
    #[serde(default)]
    is_legendary: bool,
    #[serde(default)]
    evolution: Option<CamelCaseEvolutions>,
}

impl CamelCaseEvolution {
    fn into_evolution_data(self) -> EvolutionData {
        let mut evolution = EvolutionData::by(Id::from(self.target_id), self.method);
        match self.requirement {
            Some(CamelCaseRequirement::Level(level)) => evolution.level = Some(level),
            Some(CamelCaseRequirement::Text(text)) => match self.method {
                EvolutionMethod::Stone | EvolutionMethod::Trade => evolution.item = Some(text),
                _ => evolution.condition = Some(text),
            },
            None => (),
        }
        evolution
    }
}

impl TryFrom<CamelCaseSpeciesRecord> for SpeciesData {
    type Error = Error;

    fn try_from(record: CamelCaseSpeciesRecord) -> Result<Self> {
        let mut types = record.types.into_iter();
        let primary_type = types
            .next()
            .ok_or_else(|| Error::msg(format!("{} has no types", record.name)))?;
        let secondary_type = types.next();
        if types.next().is_some() {
            return Err(Error::msg(format!("{} has more than two types", record.name)));
        }
        let evolutions = match record.evolution {
            None => Vec::new(),
            Some(CamelCaseEvolutions::One(evolution)) => {
                Vec::from([evolution.into_evolution_data()])
            }
            Some(CamelCaseEvolutions::Many(evolutions)) => evolutions
                .into_iter()
                .map(|evolution| evolution.into_evolution_data())
                .collect(),
        };
        Ok(SpeciesData {
            name: record.name,
            dex_number: record.id,
            primary_type,
            secondary_type,
            base_stats: StatTable {
                hp: record.base_stats.hp,
                atk: record.base_stats.attack,
                def: record.base_stats.defense,
                spa: record.base_stats.sp_attack,
                spd: record.base_stats.sp_defense,
                spe: record.base_stats.speed,
            },
            abilities: record.abilities,
            habitats: record.biomes,
            tier: record.tier,
            legendary: record.is_legendary,
            evolutions,
        })
    }
}
