use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// The category of a move, which determines the stats used for damage.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum MoveCategory {
    #[string = "Physical"]
    #[default]
    Physical,
    #[string = "Special"]
    Special,
    #[string = "Status"]
    Status,
}
