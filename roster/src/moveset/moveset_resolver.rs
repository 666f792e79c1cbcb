use std::collections::BTreeSet;

use itertools::Itertools;
use roster_data::{
    Id,
    LearnSet,
    SpeciesData,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

use crate::{
    moveset::MovesetConfig,
    repository::{
        DEFAULT_HOP_LIMIT,
        SpeciesRepository,
    },
};

/// Maximum number of moves a team member knows.
pub const MAX_MOVES: usize = 4;

/// Where a moveset came from.
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
pub enum MoveSource {
    /// The species' own level-up learnset.
    #[string = "Learnset"]
    Learnset,
    /// The level-up learnset of the nearest pre-evolution with one.
    #[string = "InheritedLearnset"]
    InheritedLearnset,
    /// The legacy moveset table.
    #[string = "LegacyMoveset"]
    LegacyMoveset,
    /// Generated from the species' types.
    #[string = "Heuristic"]
    Heuristic,
    /// An authentic moveset of only basic moves, strengthened with generated moves.
    #[string = "Escalated"]
    Escalated,
}

impl MoveSource {
    /// Were any moves generated rather than learned?
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Heuristic | Self::Escalated)
    }
}

/// The moves a team member knows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Moveset {
    /// Between 1 and [`MAX_MOVES`] unique moves.
    pub moves: Vec<Id>,
    pub source: MoveSource,
}

/// Collects unique moves up to [`MAX_MOVES`], preserving first-seen order.
#[derive(Default)]
struct MoveList {
    moves: Vec<Id>,
    seen: BTreeSet<Id>,
}

impl MoveList {
    fn is_full(&self) -> bool {
        self.moves.len() >= MAX_MOVES
    }

    fn push(&mut self, move_id: &Id) {
        if !self.is_full() && !move_id.is_empty() && self.seen.insert(move_id.clone()) {
            self.moves.push(move_id.clone());
        }
    }

    fn extend<'a, I>(&mut self, moves: I)
    where
        I: IntoIterator<Item = &'a Id>,
    {
        for move_id in moves {
            self.push(move_id);
        }
    }
}

/// Resolves the moves a species knows at a level.
///
/// Authentic learnsets take priority over the legacy moveset table, which takes priority over
/// moves generated from the species' types.
pub struct MovesetResolver<'r> {
    repository: &'r SpeciesRepository,
    config: &'r MovesetConfig,
}

impl<'r> MovesetResolver<'r> {
    pub fn new(repository: &'r SpeciesRepository, config: &'r MovesetConfig) -> Self {
        Self { repository, config }
    }

    /// Is the move trivial?
    pub fn is_basic(&self, move_id: &Id) -> bool {
        self.config.basic_moves.contains(move_id)
            || self
                .repository
                .move_data(move_id)
                .is_some_and(|move_data| move_data.is_basic())
    }

    fn authentic(&self, species: &SpeciesData) -> Option<(&'r LearnSet, MoveSource)> {
        let id = species.id();
        if let Some(learnset) = self.repository.learnset(&id) {
            return Some((learnset, MoveSource::Learnset));
        }
        if let Some(learnset) = self.repository.legacy_moveset(&id) {
            return Some((learnset, MoveSource::LegacyMoveset));
        }
        // A broken chain only loses the inherited learnset.
        self.repository
            .pre_evolutions(&id, DEFAULT_HOP_LIMIT)
            .unwrap_or_default()
            .into_iter()
            .find_map(|prevo| self.repository.learnset(&prevo))
            .map(|learnset| (learnset, MoveSource::InheritedLearnset))
    }

    /// The most recently unlocked unique moves, in the order they are learned.
    fn recent_moves(learnset: &LearnSet, level: u8) -> Vec<Id> {
        let mut recent = learnset
            .unlocked_by(level)
            .rev()
            .unique()
            .take(MAX_MOVES)
            .cloned()
            .collect::<Vec<_>>();
        recent.reverse();
        recent
    }

    fn type_moves(&self, species: &SpeciesData, level: u8) -> Vec<&'r Id> {
        species
            .types()
            .into_iter()
            .filter_map(|typ| self.config.type_move(typ, level))
            .collect()
    }

    /// Resolves the moveset of a species at a level.
    ///
    /// The result always holds between 1 and [`MAX_MOVES`] unique moves.
    pub fn resolve(&self, species: &SpeciesData, level: u8) -> Moveset {
        let authentic = self
            .authentic(species)
            .map(|(learnset, source)| (Self::recent_moves(learnset, level), source))
            .filter(|(moves, _)| !moves.is_empty());

        let mut moves = MoveList::default();
        let source = match authentic {
            Some((authentic, source)) if !authentic.iter().all(|id| self.is_basic(id)) => {
                moves.extend(&authentic);
                source
            }
            Some((authentic, _)) => {
                log::debug!(
                    "{} knows only basic moves at level {level}, adding generated moves",
                    species.name
                );
                moves.extend(self.type_moves(species, level));
                moves.extend(authentic.iter().rev());
                moves.extend(self.config.filler(level));
                MoveSource::Escalated
            }
            None => {
                log::debug!(
                    "{} has no learnset, generating moves for level {level}",
                    species.name
                );
                moves.extend(self.type_moves(species, level));
                moves.extend(self.config.filler(level));
                MoveSource::Heuristic
            }
        };

        if moves.moves.is_empty() {
            moves.push(&Id::from("tackle"));
        }
        Moveset {
            moves: moves.moves,
            source,
        }
    }
}

#[cfg(test)]
mod moveset_resolver_test {
    use std::collections::BTreeSet;

    use pretty_assertions::assert_eq;
    use roster_data::{
        Id,
        LearnSet,
        LearnSetEntry,
        Type,
    };

    use crate::{
        moveset::{
            MAX_MOVES,
            MoveSource,
            Moveset,
            MovesetConfig,
            MovesetResolver,
        },
        repository::SpeciesRepository,
        test_util::{
            basic_move,
            fixture_repository,
            fixture_store,
        },
    };

    fn ids(names: &[&str]) -> Vec<Id> {
        names.iter().map(|name| Id::from(*name)).collect()
    }

    fn resolve(repository: &SpeciesRepository, species: &str, level: u8) -> Moveset {
        let config = MovesetConfig::default();
        let resolver = MovesetResolver::new(repository, &config);
        resolver.resolve(repository.get(&Id::from(species)).unwrap(), level)
    }

    #[test]
    fn takes_moves_unlocked_by_level() {
        let repository = fixture_repository();
        assert_eq!(
            resolve(&repository, "pidgey", 10),
            Moveset {
                moves: ids(&["tackle", "sandattack", "gust"]),
                source: MoveSource::Learnset,
            }
        );
        assert_eq!(resolve(&repository, "geodude", 1).moves, ids(&["tackle"]));
    }

    #[test]
    fn keeps_most_recent_four_moves_in_learn_order() {
        let repository = fixture_repository();
        assert_eq!(
            resolve(&repository, "geodude", 30).moves,
            ids(&["tackle", "defensecurl", "rockthrow", "magnitude"])
        );
        assert_eq!(
            resolve(&repository, "pidgeotto", 40).moves,
            ids(&["tackle", "sandattack", "gust", "wingattack"])
        );
    }

    #[test]
    fn drops_oldest_moves_past_four() {
        let store = fixture_store().with_learnset(
            "Sentret",
            LearnSet::from_entries([
                LearnSetEntry {
                    level: 1,
                    moves: ids(&["Scratch", "Foresight"]),
                },
                LearnSetEntry {
                    level: 5,
                    moves: ids(&["Defense Curl", "Quick Attack"]),
                },
                LearnSetEntry {
                    level: 11,
                    moves: ids(&["Fury Swipes", "Scratch"]),
                },
            ]),
        );
        let repository = SpeciesRepository::new(&store).unwrap();
        assert_eq!(
            resolve(&repository, "sentret", 20).moves,
            ids(&["defensecurl", "quickattack", "furyswipes", "scratch"])
        );
    }

    #[test]
    fn inherits_nearest_pre_evolution_learnset() {
        let repository = fixture_repository();
        assert_eq!(
            resolve(&repository, "pidgeot", 40),
            Moveset {
                moves: ids(&["tackle", "sandattack", "gust", "wingattack"]),
                source: MoveSource::InheritedLearnset,
            }
        );
    }

    #[test]
    fn uses_legacy_moveset_without_learnset() {
        let repository = fixture_repository();
        assert_eq!(
            resolve(&repository, "lotad", 5),
            Moveset {
                moves: ids(&["astonish", "growl", "absorb"]),
                source: MoveSource::LegacyMoveset,
            }
        );
    }

    #[test]
    fn prefers_own_legacy_moveset_over_inherited_learnset() {
        let store = fixture_store().with_legacy_moveset(
            "Pidgeot",
            LearnSet::from_entries([
                LearnSetEntry {
                    level: 1,
                    moves: ids(&["Gust"]),
                },
                LearnSetEntry {
                    level: 36,
                    moves: ids(&["Aerial Ace"]),
                },
            ]),
        );
        let repository = SpeciesRepository::new(&store).unwrap();
        assert_eq!(
            resolve(&repository, "pidgeot", 40),
            Moveset {
                moves: ids(&["gust", "aerialace"]),
                source: MoveSource::LegacyMoveset,
            }
        );
    }

    #[test]
    fn generates_moves_from_types() {
        let repository = fixture_repository();
        assert_eq!(
            resolve(&repository, "abra", 30),
            Moveset {
                moves: ids(&["psybeam", "protect", "quickattack", "growl"]),
                source: MoveSource::Heuristic,
            }
        );
        assert_eq!(
            resolve(&repository, "gyarados", 50).moves,
            ids(&["hydropump", "drillpeck", "rest", "protect"])
        );
    }

    #[test]
    fn escalates_basic_only_learnsets() {
        let store = fixture_store()
            .with_move(basic_move("Splash", Type::Water))
            .with_learnset(
                "Magikarp",
                LearnSet::from_entries([LearnSetEntry {
                    level: 1,
                    moves: ids(&["Splash"]),
                }]),
            );
        let repository = SpeciesRepository::new(&store).unwrap();
        let moveset = resolve(&repository, "magikarp", 10);
        assert_eq!(moveset.source, MoveSource::Escalated);
        assert_eq!(moveset.moves, ids(&["watergun", "splash", "quickattack", "growl"]));
        assert!(moveset.source.is_fallback());
    }

    #[test]
    fn basic_moves_include_flagged_and_configured_moves() {
        let repository = fixture_repository();
        let config = MovesetConfig::default();
        let resolver = MovesetResolver::new(&repository, &config);
        assert!(resolver.is_basic(&Id::from("stringshot")));
        assert!(resolver.is_basic(&Id::from("tailwhip")));
        assert!(!resolver.is_basic(&Id::from("tackle")));
        assert!(!resolver.is_basic(&Id::from("quickattack")));
    }

    #[test]
    fn always_returns_one_to_four_unique_moves() {
        let repository = fixture_repository();
        let config = MovesetConfig::default();
        let resolver = MovesetResolver::new(&repository, &config);
        for species in repository.species() {
            for level in 1..=100 {
                let moveset = resolver.resolve(species, level);
                assert!(
                    (1..=MAX_MOVES).contains(&moveset.moves.len()),
                    "{} at {level}: {moveset:?}",
                    species.name
                );
                let unique = moveset.moves.iter().collect::<BTreeSet<_>>();
                assert_eq!(unique.len(), moveset.moves.len(), "{moveset:?}");
            }
        }
    }

    #[test]
    fn never_returns_empty_moveset_without_any_move_tables() {
        let repository = fixture_repository();
        let config = MovesetConfig {
            type_moves: Default::default(),
            filler_moves: Vec::new(),
            basic_moves: Default::default(),
        };
        let resolver = MovesetResolver::new(&repository, &config);
        let moveset = resolver.resolve(repository.get(&Id::from("abra")).unwrap(), 50);
        assert_eq!(moveset.moves, ids(&["tackle"]));
        assert_eq!(moveset.source, MoveSource::Heuristic);
    }
}
