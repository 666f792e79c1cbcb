use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// Move flags, which categorize moves for loadout decisions.
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
pub enum MoveFlag {
    /// A basic move every early-game species knows, such as Tackle or Growl.
    ///
    /// A loadout made up only of basic moves is considered trivial.
    #[string = "Basic"]
    #[alias = "Trivial"]
    Basic,
    /// Restores HP to the user.
    #[string = "Heal"]
    Heal,
    /// Raises the user's stats.
    #[string = "Setup"]
    Setup,
}
