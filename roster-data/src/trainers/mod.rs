mod archetype_data;

pub use archetype_data::{
    ArchetypeData,
    BstRange,
    LegendaryPolicy,
    LevelModifiers,
    MAX_EVOLUTION_STAGE,
    MAX_TEAM_SIZE,
    TeamSizeRange,
    Terrain,
};
