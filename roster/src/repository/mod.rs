mod evolution_chain;
mod species_repository;

pub use evolution_chain::{
    EvolutionChain,
    EvolutionChainIntegrityError,
};
pub use species_repository::{
    DEFAULT_HOP_LIMIT,
    SpeciesRepository,
};
