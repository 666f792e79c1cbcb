use std::collections::BTreeSet;

use roster_data::{
    Id,
    Type,
};
use serde::{
    Deserialize,
    Serialize,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// Letter grade of a team's coverage.
///
/// Ordered from worst to best.
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
pub enum Grade {
    #[string = "F"]
    F,
    #[string = "D"]
    D,
    #[string = "C"]
    C,
    #[string = "B"]
    B,
    #[string = "A"]
    A,
}

/// How a team holds up against attacks of a single type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefensiveProfile {
    #[serde(rename = "type")]
    pub typ: Type,
    /// Members taking super effective damage.
    pub weak: u8,
    /// Members taking not very effective damage.
    pub resist: u8,
    /// Members taking no damage.
    pub immune: u8,
    /// Weak members minus resistant and immune members.
    pub net: i16,
}

/// Why a replacement is suggested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "type")]
pub enum SuggestionReason {
    /// A strict majority of the team is weak to the type.
    CriticalWeakness(Type),
    /// No member threatens the type.
    Uncovered(Type),
}

/// Replacement candidates that would close a coverage gap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageSuggestion {
    pub reason: SuggestionReason,
    /// Index of the team member the replacement should take the place of.
    pub replace_slot: usize,
    pub candidates: Vec<Id>,
}

/// Offensive and defensive type coverage of a team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageReport {
    /// Types some member threatens with a super effective same-type attack.
    pub offensive_types: BTreeSet<Type>,
    /// Share of canonical types in `offensive_types`, from 0 to 100.
    pub coverage_percent: f64,
    /// One profile per canonical type.
    pub defensive_profile: Vec<DefensiveProfile>,
    pub critical_weaknesses: Vec<Type>,
    /// Coverage percentage less critical weakness penalties.
    pub score: f64,
    pub grade: Grade,
}

impl CoverageReport {
    /// Canonical types no member threatens.
    pub fn uncovered_types(&self) -> impl Iterator<Item = Type> + '_ {
        Type::CANONICAL
            .into_iter()
            .filter(|typ| !self.offensive_types.contains(typ))
    }
}
