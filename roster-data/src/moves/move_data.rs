use std::collections::BTreeSet;

use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    Id,
    MoveCategory,
    MoveFlag,
    Type,
};

/// Data about a particular move.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveData {
    /// Name of the move.
    pub name: String,
    /// Move type.
    #[serde(rename = "type")]
    pub primary_type: Type,
    /// Move category.
    #[serde(default)]
    pub category: MoveCategory,
    /// Base power. Zero for status moves.
    #[serde(default)]
    pub base_power: u8,
    /// Move flags.
    #[serde(default)]
    pub flags: BTreeSet<MoveFlag>,
}

impl MoveData {
    /// The move ID.
    pub fn id(&self) -> Id {
        Id::from(self.name.as_str())
    }

    /// Does the move deal damage?
    pub fn is_damaging(&self) -> bool {
        self.category != MoveCategory::Status && self.base_power > 0
    }

    /// Is the move a basic move?
    pub fn is_basic(&self) -> bool {
        self.flags.contains(&MoveFlag::Basic)
    }
}

#[cfg(test)]
mod move_data_test {
    use crate::{
        Id,
        MoveCategory,
        MoveData,
        Type,
    };

    #[test]
    fn deserializes_move() {
        let tackle: MoveData = serde_json::from_str(
            r#"{
                "name": "Tackle",
                "type": "Normal",
                "category": "Physical",
                "base_power": 35,
                "flags": ["Basic"]
            }"#,
        )
        .unwrap();
        assert_eq!(tackle.id(), Id::from("tackle"));
        assert_eq!(tackle.primary_type, Type::Normal);
        assert!(tackle.is_damaging());
        assert!(tackle.is_basic());
    }

    #[test]
    fn status_moves_do_not_deal_damage() {
        let growl: MoveData = serde_json::from_str(
            r#"{ "name": "Growl", "type": "Normal", "category": "Status" }"#,
        )
        .unwrap();
        assert_eq!(growl.category, MoveCategory::Status);
        assert!(!growl.is_damaging());
        assert!(!growl.is_basic());
    }
}
