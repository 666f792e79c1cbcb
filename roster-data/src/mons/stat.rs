use serde::{
    Deserialize,
    Serialize,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// One of the six base stats.
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
pub enum Stat {
    #[string = "hp"]
    HP,
    #[string = "atk"]
    #[alias = "Attack"]
    Atk,
    #[string = "def"]
    #[alias = "Defense"]
    Def,
    #[string = "spa"]
    #[alias = "Sp. Atk"]
    SpAtk,
    #[string = "spd"]
    #[alias = "Sp. Def"]
    SpDef,
    #[string = "spe"]
    #[alias = "Speed"]
    Spe,
}

/// Base stats of a species.
///
/// Missing stats read as zero, so a table with every stat missing marks a placeholder entry.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct StatTable {
    pub hp: u16,
    pub atk: u16,
    pub def: u16,
    pub spa: u16,
    pub spd: u16,
    pub spe: u16,
}

impl StatTable {
    pub fn get(&self, stat: Stat) -> u16 {
        match stat {
            Stat::HP => self.hp,
            Stat::Atk => self.atk,
            Stat::Def => self.def,
            Stat::SpAtk => self.spa,
            Stat::SpDef => self.spd,
            Stat::Spe => self.spe,
        }
    }

    fn values(&self) -> [u16; 6] {
        [self.hp, self.atk, self.def, self.spa, self.spd, self.spe]
    }

    /// Base stat total.
    pub fn total(&self) -> u32 {
        self.values().into_iter().map(u32::from).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.values().into_iter().all(|value| value == 0)
    }

    /// The better of the two attacking stats.
    pub fn attacking_stat(&self) -> Stat {
        if self.spa > self.atk {
            Stat::SpAtk
        } else {
            Stat::Atk
        }
    }

    /// Best attacking stat plus speed.
    pub fn offense(&self) -> u32 {
        u32::from(self.get(self.attacking_stat())) + u32::from(self.spe)
    }

    /// HP plus the mean of both defenses.
    pub fn bulk(&self) -> u32 {
        u32::from(self.hp) + (u32::from(self.def) + u32::from(self.spd)) / 2
    }
}

#[cfg(test)]
mod stat_test {
    use crate::{
        Stat,
        test_util::{
            test_string_deserialization,
            test_string_serialization,
        },
    };

    #[test]
    fn serializes_short_names() {
        test_string_serialization(Stat::HP, "hp");
        test_string_serialization(Stat::SpDef, "spd");
    }

    #[test]
    fn deserializes_display_names() {
        test_string_deserialization("Attack", Stat::Atk);
        test_string_deserialization("Sp. Atk", Stat::SpAtk);
        test_string_deserialization("speed", Stat::Spe);
    }
}

#[cfg(test)]
mod stat_table_test {
    use pretty_assertions::assert_eq;

    use crate::{
        Stat,
        StatTable,
    };

    fn bulbasaur() -> StatTable {
        StatTable {
            hp: 45,
            atk: 49,
            def: 49,
            spa: 65,
            spd: 65,
            spe: 45,
        }
    }

    #[test]
    fn totals_all_stats() {
        assert_eq!(bulbasaur().total(), 318);
        assert_eq!(StatTable::default().total(), 0);
    }

    #[test]
    fn picks_better_attacking_stat() {
        assert_eq!(bulbasaur().attacking_stat(), Stat::SpAtk);
        assert_eq!(bulbasaur().offense(), 110);
        assert_eq!(bulbasaur().bulk(), 102);
        let machop = StatTable {
            hp: 70,
            atk: 80,
            def: 50,
            spa: 35,
            spd: 35,
            spe: 35,
        };
        assert_eq!(machop.attacking_stat(), Stat::Atk);
    }

    #[test]
    fn missing_stats_are_empty() {
        assert!(StatTable::default().is_empty());
        assert!(!bulbasaur().is_empty());
        let partial = serde_json::from_str::<StatTable>(r#"{ "hp": 20 }"#).unwrap();
        assert_eq!(partial.get(Stat::HP), 20);
        assert_eq!(partial.get(Stat::Spe), 0);
    }
}
