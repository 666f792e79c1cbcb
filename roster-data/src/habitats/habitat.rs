use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// A coarse habitat, grouping species by their typical encounter environment.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum Habitat {
    #[string = "Grassland"]
    #[alias = "Grass"]
    Grassland,
    #[string = "Forest"]
    Forest,
    #[string = "WatersEdge"]
    #[alias = "Waters Edge"]
    #[alias = "Water's Edge"]
    #[alias = "Lake"]
    #[alias = "River"]
    WatersEdge,
    #[string = "Sea"]
    #[alias = "Ocean"]
    Sea,
    #[string = "Cave"]
    Cave,
    #[string = "Mountain"]
    Mountain,
    #[string = "RoughTerrain"]
    #[alias = "Rough Terrain"]
    #[alias = "Desert"]
    RoughTerrain,
    #[string = "Urban"]
    #[alias = "City"]
    Urban,
    #[string = "Rare"]
    Rare,
}

impl Habitat {
    /// Every habitat.
    pub const ALL: [Habitat; 9] = [
        Habitat::Grassland,
        Habitat::Forest,
        Habitat::WatersEdge,
        Habitat::Sea,
        Habitat::Cave,
        Habitat::Mountain,
        Habitat::RoughTerrain,
        Habitat::Urban,
        Habitat::Rare,
    ];

    /// Is the habitat primarily water?
    pub fn is_aquatic(&self) -> bool {
        matches!(self, Self::WatersEdge | Self::Sea)
    }
}
