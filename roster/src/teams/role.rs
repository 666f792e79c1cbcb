use roster_data::StatTable;
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// The part a member plays on its team.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum Role {
    /// Sent out first.
    #[string = "Lead"]
    Lead,
    /// Sent out last.
    #[string = "Ace"]
    Ace,
    #[string = "Sweeper"]
    Sweeper,
    #[string = "Tank"]
    Tank,
    #[string = "Balanced"]
    Balanced,
}

impl Role {
    /// Assigns the role of the member in the slot.
    ///
    /// The first slot is the lead and the last slot of a multi-member team is the ace. Other
    /// slots are classified by base stats.
    pub fn for_slot(slot: usize, team_size: usize, stats: &StatTable) -> Self {
        if slot == 0 {
            Self::Lead
        } else if team_size > 1 && slot + 1 == team_size {
            Self::Ace
        } else {
            Self::from_stats(stats)
        }
    }

    /// Classifies a base stat profile.
    pub fn from_stats(stats: &StatTable) -> Self {
        let offense = stats.offense() as f64;
        let bulk = stats.bulk() as f64;
        if offense > bulk * 1.2 {
            Self::Sweeper
        } else if bulk > offense * 1.2 {
            Self::Tank
        } else {
            Self::Balanced
        }
    }
}
