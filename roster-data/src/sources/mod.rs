//! Adapters that normalize heterogeneous source tables into the canonical schema.
//!
//! Reference tables come in several shapes: flat camelCase records, nested records grouped by
//! concern, canonical snake_case records, and legacy movesets keyed by level strings. Each
//! adapter converts one shape into [`SpeciesData`] or [`LearnSet`], so nothing downstream ever
//! sees a source-specific shape.

mod camel_case;
mod legacy_moveset;
mod nested;

use ahash::HashMap;
use anyhow::{
    Context,
    Result,
};
pub use camel_case::CamelCaseSpeciesRecord;
pub use legacy_moveset::LegacyMoveset;
pub use nested::NestedSpeciesRecord;
use serde::de::DeserializeOwned;
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

use crate::{
    Id,
    LearnSet,
    SpeciesData,
};

/// The shape of a species table.
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
pub enum SpeciesTableFormat {
    /// A list of [`SpeciesData`].
    #[string = "Canonical"]
    Canonical,
    /// A list of [`CamelCaseSpeciesRecord`].
    #[string = "CamelCase"]
    CamelCase,
    /// A list of [`NestedSpeciesRecord`].
    #[string = "Nested"]
    Nested,
}

fn convert_records<R>(json: &str) -> Result<Vec<SpeciesData>>
where
    R: DeserializeOwned + TryInto<SpeciesData, Error = anyhow::Error>,
{
    serde_json::from_str::<Vec<R>>(json)
        .context("failed to parse species table")?
        .into_iter()
        .map(|record| record.try_into())
        .collect()
}

/// Parses a species table in the given format.
pub fn parse_species_table(format: SpeciesTableFormat, json: &str) -> Result<Vec<SpeciesData>> {
    match format {
        SpeciesTableFormat::Canonical => {
            serde_json::from_str(json).context("failed to parse species table")
        }
        SpeciesTableFormat::CamelCase => convert_records::<CamelCaseSpeciesRecord>(json),
        SpeciesTableFormat::Nested => convert_records::<NestedSpeciesRecord>(json),
    }
}

/// Parses a canonical learnset table, keyed by species name.
pub fn parse_learnsets(json: &str) -> Result<HashMap<Id, LearnSet>> {
    let table: HashMap<String, LearnSet> =
        serde_json::from_str(json).context("failed to parse learnset table")?;
    Ok(table
        .into_iter()
        .map(|(species, learnset)| (Id::from(species), learnset.normalize()))
        .collect())
}

/// Parses a legacy moveset table, keyed by species name, converting every moveset to a
/// [`LearnSet`].
pub fn parse_legacy_movesets(json: &str) -> Result<HashMap<Id, LearnSet>> {
    let table: HashMap<String, LegacyMoveset> =
        serde_json::from_str(json).context("failed to parse legacy moveset table")?;
    table
        .into_iter()
        .map(|(species, moveset)| {
            let learnset = LearnSet::try_from(moveset)
                .with_context(|| format!("invalid legacy moveset for {species}"))?;
            Ok((Id::from(species), learnset))
        })
        .collect()
}

#[cfg(test)]
mod sources_test {
    use pretty_assertions::assert_eq;

    use crate::{
        Id,
        Type,
        sources::{
            SpeciesTableFormat,
            parse_learnsets,
            parse_legacy_movesets,
            parse_species_table,
        },
    };

    #[test]
    fn parses_every_species_table_format() {
        let canonical = parse_species_table(
            SpeciesTableFormat::Canonical,
            r#"[{
                "name": "Zigzagoon",
                "dex_number": 263,
                "primary_type": "Normal",
                "base_stats": { "hp": 38, "atk": 30, "def": 41, "spa": 30, "spd": 41, "spe": 60 }
            }]"#,
        )
        .unwrap();
        let camel_case = parse_species_table(
            SpeciesTableFormat::CamelCase,
            r#"[{
                "id": 263,
                "name": "Zigzagoon",
                "types": ["Normal"],
                "baseStats": { "hp": 38, "attack": 30, "defense": 41, "spAttack": 30, "spDefense": 41, "speed": 60 }
            }]"#,
        )
        .unwrap();
        let nested = parse_species_table(
            SpeciesTableFormat::Nested,
            r#"[{
                "species": { "name": "Zigzagoon", "dex": 263 },
                "typing": { "primary": "Normal" },
                "stats": { "base": { "hp": 38, "atk": 30, "def": 41, "spa": 30, "spd": 41, "spe": 60 } }
            }]"#,
        )
        .unwrap();
        assert_eq!(canonical, camel_case);
        assert_eq!(camel_case, nested);
        assert_eq!(nested[0].primary_type, Type::Normal);
    }

    #[test]
    fn normalizes_learnset_table() {
        let learnsets = parse_learnsets(
            r#"{
                "Mudkip": [
                    { "level": 6, "moves": ["Mud-Slap"] },
                    { "level": 1, "moves": ["Tackle", "Growl"] }
                ]
            }"#,
        )
        .unwrap();
        let learnset = learnsets.get(&Id::from("mudkip")).unwrap();
        assert!(learnset.is_normalized());
        assert_eq!(learnset.entries()[0].level, 1);
    }

    #[test]
    fn reports_species_with_invalid_legacy_moveset() {
        let error = parse_legacy_movesets(r#"{ "Zubat": { "one": ["Leech Life"] } }"#)
            .unwrap_err();
        assert_eq!(error.to_string(), "invalid legacy moveset for Zubat");
    }
}
