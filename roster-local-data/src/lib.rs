use std::{
    env,
    fs,
    path::{
        Path,
        PathBuf,
    },
};

use ahash::HashMap;
use anyhow::{
    Context,
    Error,
    Result,
};
use roster_data::{
    ArchetypeData,
    DataStore,
    HabitatMapping,
    Id,
    LearnSet,
    MoveData,
    SpeciesData,
    TypeChart,
    sources::{
        SpeciesTableFormat,
        parse_learnsets,
        parse_legacy_movesets,
        parse_species_table,
    },
};

/// An implementation of [`DataStore`] that reads all data locally from disk.
///
/// Species tables may be written in any of the supported source formats. Each is normalized into
/// the canonical schema as it is read.
pub struct LocalDataStore {
    root: PathBuf,
    pub species: Vec<SpeciesData>,
    pub moves: Vec<MoveData>,
    pub archetypes: Vec<ArchetypeData>,
    pub learnsets: HashMap<Id, LearnSet>,
    pub legacy_movesets: HashMap<Id, LearnSet>,
    pub habitat_mapping: HabitatMapping,
    pub type_chart: TypeChart,
}

impl LocalDataStore {
    /// Species table file names, with the format each is written in.
    ///
    /// Only the first table is required.
    pub const SPECIES_FILES: [(&str, SpeciesTableFormat); 3] = [
        ("species.json", SpeciesTableFormat::CamelCase),
        ("species-hoenn.json", SpeciesTableFormat::Nested),
        ("species-canonical.json", SpeciesTableFormat::Canonical),
    ];
    /// Learnsets file name.
    pub const LEARNSETS_FILE: &str = "learnsets.json";
    /// Legacy movesets file name.
    pub const LEGACY_MOVESETS_FILE: &str = "legacy-movesets.json";
    /// Moves file name.
    pub const MOVES_FILE: &str = "moves.json";
    /// Archetypes file name.
    pub const ARCHETYPES_FILE: &str = "archetypes.json";
    /// Habitat mapping file name.
    pub const HABITAT_MAPPING_FILE: &str = "habitat-mapping.json";
    /// Type chart file name. Optional; the Gen 3 chart is used when missing.
    pub const TYPE_CHART_FILE: &str = "type-chart.json";

    /// Creates a new instance of [`LocalDataStore`] that reads from the given root directory.
    ///
    /// Fails if the path does not exist, does not point to a directory, or cannot be used to fill
    /// cached data.
    pub fn new<P>(root: P) -> Result<Self>
    where
        P: Into<PathBuf>,
    {
        let root = root.into();
        if !root.is_dir() {
            return Err(Error::msg(format!(
                "Root directory for LocalDataStore ({}) does not exist",
                root.display()
            )));
        }
        let mut store = Self {
            root,
            species: Vec::new(),
            moves: Vec::new(),
            archetypes: Vec::new(),
            learnsets: HashMap::default(),
            legacy_movesets: HashMap::default(),
            habitat_mapping: HabitatMapping::default(),
            type_chart: TypeChart::default(),
        };
        store.initialize()?;
        Ok(store)
    }

    /// Creates a new instance of [`LocalDataStore`] that reads from the root directory at the given
    /// environment variable.
    pub fn new_from_env(env_var: &str) -> Result<Self> {
        Self::new(env::var(env_var).context(format!("{env_var} not defined"))?)
    }

    /// The directory data is read from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn read(&self, file: &str) -> Result<String> {
        let path = self.root.join(file);
        fs::read_to_string(&path).context(format!("{} could not be read", path.display()))
    }

    fn read_optional(&self, file: &str) -> Result<Option<String>> {
        if self.root.join(file).is_file() {
            self.read(file).map(Some)
        } else {
            Ok(None)
        }
    }

    fn initialize(&mut self) -> Result<()> {
        for (index, (file, format)) in Self::SPECIES_FILES.into_iter().enumerate() {
            let json = if index == 0 {
                self.read(file)?
            } else {
                match self.read_optional(file)? {
                    Some(json) => json,
                    None => continue,
                }
            };
            let species = parse_species_table(format, &json)
                .context(format!("failed to read species from {file}"))?;
            log::debug!("Read {} species from {file}", species.len());
            self.species.extend(species);
        }

        self.moves = serde_json::from_str(&self.read(Self::MOVES_FILE)?)
            .context("failed to parse moves")?;
        self.archetypes = serde_json::from_str(&self.read(Self::ARCHETYPES_FILE)?)
            .context("failed to parse archetypes")?;
        self.habitat_mapping = serde_json::from_str(&self.read(Self::HABITAT_MAPPING_FILE)?)
            .context("failed to parse habitat mapping")?;
        self.learnsets = parse_learnsets(&self.read(Self::LEARNSETS_FILE)?)?;
        if let Some(json) = self.read_optional(Self::LEGACY_MOVESETS_FILE)? {
            self.legacy_movesets = parse_legacy_movesets(&json)?;
        }
        if let Some(json) = self.read_optional(Self::TYPE_CHART_FILE)? {
            self.type_chart = serde_json::from_str(&json).context("failed to parse type chart")?;
        }

        log::info!(
            "Loaded {} species, {} moves, and {} archetypes from {}",
            self.species.len(),
            self.moves.len(),
            self.archetypes.len(),
            self.root.display()
        );
        Ok(())
    }
}

impl DataStore for LocalDataStore {
    fn all_species(&self) -> Result<Vec<SpeciesData>> {
        Ok(self.species.clone())
    }

    fn all_moves(&self) -> Result<Vec<MoveData>> {
        Ok(self.moves.clone())
    }

    fn all_archetypes(&self) -> Result<Vec<ArchetypeData>> {
        Ok(self.archetypes.clone())
    }

    fn get_learnset(&self, species: &Id) -> Result<Option<LearnSet>> {
        Ok(self.learnsets.get(species).cloned())
    }

    fn get_legacy_moveset(&self, species: &Id) -> Result<Option<LearnSet>> {
        Ok(self.legacy_movesets.get(species).cloned())
    }

    fn get_habitat_mapping(&self) -> Result<HabitatMapping> {
        Ok(self.habitat_mapping.clone())
    }

    fn get_type_chart(&self) -> Result<TypeChart> {
        Ok(self.type_chart.clone())
    }
}
