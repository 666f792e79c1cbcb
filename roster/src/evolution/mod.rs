mod evolution_config;
mod evolution_resolver;

pub use evolution_config::EvolutionConfig;
pub use evolution_resolver::{
    EvolutionResolution,
    EvolutionResolver,
};
