mod evolution;
mod learnset;
mod rarity_tier;
mod species_data;
mod stat;
mod r#type;

pub use evolution::{
    EvolutionData,
    EvolutionMethod,
};
pub use learnset::{
    LearnSet,
    LearnSetEntry,
};
pub use rarity_tier::RarityTier;
pub use species_data::SpeciesData;
pub use stat::{
    Stat,
    StatTable,
};
pub use r#type::{
    Type,
    TypeChart,
    TypeEffectiveness,
    TypeTable,
};
