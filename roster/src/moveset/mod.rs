mod moveset_config;
mod moveset_resolver;

pub use moveset_config::{
    MovesetConfig,
    MoveTier,
};
pub use moveset_resolver::{
    MAX_MOVES,
    MoveSource,
    Moveset,
    MovesetResolver,
};
