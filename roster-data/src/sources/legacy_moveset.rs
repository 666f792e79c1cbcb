use std::collections::BTreeMap;

use anyhow::{
    Context,
    Result,
};
use serde::Deserialize;

use crate::{
    Id,
    LearnSet,
    LearnSetEntry,
};

/// A legacy moveset, keyed by level.
///
/// Keys are level numbers, optionally prefixed with `L` or `Lv`:
///
/// ```json
/// { "1": ["Leech Life"], "L6": ["Supersonic"], "Lv11": ["Astonish"] }
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct LegacyMoveset {
    levels: BTreeMap<String, Vec<String>>,
}

fn parse_level_key(key: &str) -> Result<u8> {
    let trimmed = key.trim();
    let digits = trimmed
        .strip_prefix("Lv")
        .or_else(|| trimmed.strip_prefix("L"))
        .unwrap_or(trimmed)
        .trim();
    digits
        .parse::<u8>()
        .with_context(|| format!("invalid level key: {key}"))
}

impl TryFrom<LegacyMoveset> for LearnSet {
    type Error = anyhow::Error;

    fn try_from(moveset: LegacyMoveset) -> Result<Self> {
        let entries = moveset
            .levels
            .into_iter()
            .map(|(key, moves)| {
                Ok(LearnSetEntry {
                    level: parse_level_key(&key)?,
                    moves: moves.into_iter().map(Id::from).collect(),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(LearnSet::from_entries(entries))
    }
}
