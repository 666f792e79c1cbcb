mod habitat;
mod habitat_mapping;

pub use habitat::Habitat;
pub use habitat_mapping::HabitatMapping;
