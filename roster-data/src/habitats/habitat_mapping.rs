use std::{
    collections::BTreeSet,
    str::FromStr,
};

use ahash::HashMap;
use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    Habitat,
    Id,
};

/// Mapping from fine-grained encounter-location tags to coarse habitats.
///
/// Serialized as a map from location name to one or more habitats:
///
/// ```json
/// { "Route 119": ["Forest", "WatersEdge"], "Granite Cave": ["Cave"] }
/// ```
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HabitatMapping {
    locations: HashMap<Id, Vec<Habitat>>,
}

impl HabitatMapping {
    /// Adds a location to the mapping.
    pub fn insert(&mut self, location: &str, habitats: Vec<Habitat>) {
        self.locations.insert(Id::from(location), habitats);
    }

    /// The number of mapped locations.
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Is the mapping empty?
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Resolves a tag into coarse habitats.
    ///
    /// A tag naming a coarse habitat resolves to itself. Otherwise, the tag is looked up as a
    /// location. Unknown tags resolve to [`None`].
    pub fn resolve(&self, tag: &str) -> Option<BTreeSet<Habitat>> {
        if let Ok(habitat) = Habitat::from_str(tag) {
            return Some(BTreeSet::from([habitat]));
        }
        self.locations
            .get(&Id::from(tag))
            .filter(|habitats| !habitats.is_empty())
            .map(|habitats| habitats.iter().copied().collect())
    }
}
