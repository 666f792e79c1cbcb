use std::collections::{
    BTreeMap,
    BTreeSet,
};

use roster_data::{
    Id,
    Type,
};
use serde::{
    Deserialize,
    Serialize,
};

/// A move that becomes available at a level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveTier {
    pub level: u8,
    #[serde(rename = "move")]
    pub move_id: Id,
}

impl MoveTier {
    fn new(level: u8, name: &str) -> Self {
        Self {
            level,
            move_id: Id::from(name),
        }
    }
}

/// Tuning for generated movesets when a species has no usable learnset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovesetConfig {
    /// Representative moves for each type, by the level they become appropriate.
    pub type_moves: BTreeMap<Type, Vec<MoveTier>>,
    /// Generic moves used to pad a generated moveset.
    pub filler_moves: Vec<MoveTier>,
    /// Moves considered trivial in addition to moves flagged as basic in the move table.
    pub basic_moves: BTreeSet<Id>,
}

impl MovesetConfig {
    /// The strongest representative move of the type unlocked at the level.
    ///
    /// Below the first tier's level, the first tier is used.
    pub fn type_move(&self, typ: Type, level: u8) -> Option<&Id> {
        let tiers = self.type_moves.get(&typ)?;
        tiers
            .iter()
            .filter(|tier| tier.level <= level)
            .max_by_key(|tier| tier.level)
            .or_else(|| tiers.iter().min_by_key(|tier| tier.level))
            .map(|tier| &tier.move_id)
    }

    /// Filler moves unlocked at the level, most recently unlocked first.
    pub fn filler(&self, level: u8) -> impl Iterator<Item = &Id> {
        let mut unlocked = self
            .filler_moves
            .iter()
            .filter(|tier| tier.level <= level)
            .collect::<Vec<_>>();
        unlocked.sort_by_key(|tier| tier.level);
        unlocked.into_iter().rev().map(|tier| &tier.move_id)
    }
}

fn tiers(tiers: &[(u8, &str)]) -> Vec<MoveTier> {
    tiers
        .iter()
        .map(|(level, name)| MoveTier::new(*level, name))
        .collect()
}

impl Default for MovesetConfig {
    fn default() -> Self {
        Self {
            type_moves: BTreeMap::from_iter([
                (Type::Normal, tiers(&[(1, "Tackle"), (20, "Headbutt"), (35, "Body Slam"), (50, "Double-Edge")])),
                (Type::Fire, tiers(&[(1, "Ember"), (25, "Flame Wheel"), (40, "Flamethrower"), (55, "Fire Blast")])),
                (Type::Water, tiers(&[(1, "Water Gun"), (20, "Bubble Beam"), (35, "Surf"), (50, "Hydro Pump")])),
                (Type::Electric, tiers(&[(1, "Thunder Shock"), (25, "Spark"), (40, "Thunderbolt"), (55, "Thunder")])),
                (Type::Grass, tiers(&[(1, "Absorb"), (20, "Razor Leaf"), (35, "Giga Drain"), (50, "Solar Beam")])),
                (Type::Ice, tiers(&[(1, "Powder Snow"), (25, "Aurora Beam"), (40, "Ice Beam"), (55, "Blizzard")])),
                (Type::Fighting, tiers(&[(1, "Karate Chop"), (25, "Brick Break"), (45, "Cross Chop")])),
                (Type::Poison, tiers(&[(1, "Poison Sting"), (20, "Sludge"), (40, "Sludge Bomb")])),
                (Type::Ground, tiers(&[(1, "Mud-Slap"), (20, "Magnitude"), (40, "Earthquake")])),
                (Type::Flying, tiers(&[(1, "Peck"), (20, "Wing Attack"), (35, "Aerial Ace"), (45, "Drill Peck")])),
                (Type::Psychic, tiers(&[(1, "Confusion"), (30, "Psybeam"), (45, "Psychic")])),
                (Type::Bug, tiers(&[(1, "Fury Cutter"), (25, "Signal Beam"), (40, "Silver Wind")])),
                (Type::Rock, tiers(&[(1, "Rock Throw"), (30, "Ancient Power"), (40, "Rock Slide")])),
                (Type::Ghost, tiers(&[(1, "Lick"), (25, "Night Shade"), (40, "Shadow Ball")])),
                (Type::Dragon, tiers(&[(1, "Twister"), (30, "Dragon Breath"), (50, "Dragon Claw")])),
                (Type::Dark, tiers(&[(1, "Bite"), (30, "Faint Attack"), (45, "Crunch")])),
                (Type::Steel, tiers(&[(1, "Metal Claw"), (35, "Iron Tail"), (50, "Meteor Mash")])),
            ]),
            filler_moves: tiers(&[(1, "Tackle"), (1, "Growl"), (10, "Quick Attack"), (25, "Protect"), (35, "Rest")]),
            basic_moves: [
                "Growl",
                "Leer",
                "Tail Whip",
                "Sand-Attack",
                "String Shot",
                "Harden",
                "Defense Curl",
                "Withdraw",
                "Splash",
                "Smokescreen",
                "Sweet Scent",
                "Focus Energy",
            ]
            .into_iter()
            .map(Id::from)
            .collect(),
        }
    }
}
