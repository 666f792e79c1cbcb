use std::path::Path;

use anyhow::Result;
use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    coverage::CoverageConfig,
    error::WrapResultError,
    evolution::EvolutionConfig,
    moveset::MovesetConfig,
    selection::SelectionConfig,
};

/// Tuning for every stage of team generation.
///
/// Every field has a default, so a partial JSON document overrides only what it names.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub selection: SelectionConfig,
    pub evolution: EvolutionConfig,
    pub moveset: MovesetConfig,
    pub coverage: CoverageConfig,
}

impl GeneratorConfig {
    /// Parses a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).wrap_error_with_message("invalid generator config")
    }

    /// Reads a configuration from a JSON file.
    pub fn from_file<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .wrap_error_with_format(format_args!("failed to read {}", path.display()))?;
        Self::from_json(&json)
    }
}
