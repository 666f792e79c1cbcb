use std::collections::BTreeSet;

use anyhow::Result;
use roster_data::{
    ArchetypeData,
    Habitat,
    MAX_TEAM_SIZE,
    SpeciesData,
};
use roster_prng::{
    PseudoRandomNumberGenerator,
    rand_util,
};

use crate::{
    config::GeneratorConfig,
    coverage::{
        CoverageAnalyzer,
        SuggestionScope,
    },
    error::{
        ConfigurationError,
        WrapOptionError,
    },
    evolution::EvolutionResolver,
    index::{
        CandidateIndex,
        CandidateQuery,
    },
    moveset::MovesetResolver,
    repository::SpeciesRepository,
    selection::{
        SelectionEngine,
        SlotContext,
        TeamState,
    },
    teams::{
        GeneratedTeam,
        GenerationNotice,
        GenerationRequest,
        Provenance,
        Role,
        TeamMember,
    },
};

/// Lowest level a team member can have.
pub const MIN_LEVEL: u8 = 1;
/// Highest level a team member can have.
pub const MAX_LEVEL: u8 = 100;

/// Generates teams for trainer archetypes.
///
/// A generator only reads the repository and index, so one generator can serve any number of
/// requests, and generators over the same repository can run on separate threads.
pub struct TeamGenerator<'r> {
    repository: &'r SpeciesRepository,
    index: &'r CandidateIndex,
    config: GeneratorConfig,
}

impl<'r> TeamGenerator<'r> {
    pub fn new(
        repository: &'r SpeciesRepository,
        index: &'r CandidateIndex,
        config: GeneratorConfig,
    ) -> Self {
        Self {
            repository,
            index,
            config,
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    fn validate(
        &self,
        request: &GenerationRequest,
    ) -> Result<(&'r ArchetypeData, BTreeSet<Habitat>), ConfigurationError> {
        let mut error = ConfigurationError::default();
        if request.level_min < MIN_LEVEL {
            error.add_problem(format!("minimum level must be at least {MIN_LEVEL}"));
        }
        if request.level_max > MAX_LEVEL {
            error.add_problem(format!(
                "maximum level {} exceeds {MAX_LEVEL}",
                request.level_max
            ));
        }
        if request.level_min > request.level_max {
            error.add_problem(format!(
                "minimum level {} exceeds maximum level {}",
                request.level_min, request.level_max
            ));
        }
        if let Some(team_size) = request.team_size {
            if team_size == 0 || team_size > MAX_TEAM_SIZE {
                error.add_problem(format!(
                    "team size {team_size} is not between 1 and {MAX_TEAM_SIZE}"
                ));
            }
        }
        if !request.scope.is_valid() {
            error.add_problem(format!(
                "generation scope starts at {:?} but ends at {:?}",
                request.scope.oldest, request.scope.newest
            ));
        } else if self
            .index
            .query(&CandidateQuery::new(request.scope))
            .is_empty()
        {
            error.add_problem(format!(
                "no species in generation scope {:?} to {:?}",
                request.scope.oldest, request.scope.newest
            ));
        }

        let archetype = self.repository.archetype(&request.archetype);
        match archetype {
            None => error.add_problem(format!("unknown archetype: {}", request.archetype)),
            Some(archetype) => {
                for problem in archetype.problems() {
                    error.add_problem(format!("archetype {}: {problem}", archetype.name));
                }
            }
        }

        let mut habitats = BTreeSet::new();
        if request.habitats.is_empty() {
            error.add_problem("no habitats requested");
        }
        for tag in &request.habitats {
            match self.repository.habitat_mapping().resolve(tag) {
                Some(resolved) => habitats.extend(resolved),
                None => error.add_problem(format!("unknown habitat: {tag}")),
            }
        }

        error.into_result()?;
        match archetype {
            Some(archetype) => Ok((archetype, habitats)),
            None => Err(ConfigurationError::from_iter([format!(
                "unknown archetype: {}",
                request.archetype
            )])),
        }
    }

    /// Widens habitats that make no sense for the archetype to include its preferred habitats.
    fn reconcile_habitats(
        &self,
        archetype: &ArchetypeData,
        habitats: BTreeSet<Habitat>,
        request: &GenerationRequest,
    ) -> (BTreeSet<Habitat>, Option<GenerationNotice>) {
        let incompatible = !archetype.terrain.accepts(&habitats)
            || (!archetype.required_types.is_empty()
                && self
                    .index
                    .query(&CandidateQuery::for_archetype(
                        archetype,
                        habitats.iter().copied(),
                        request.scope,
                    ))
                    .is_empty());
        if !incompatible
            || archetype
                .preferred_habitats
                .iter()
                .all(|habitat| habitats.contains(habitat))
        {
            return (habitats, None);
        }

        let widened = habitats
            .iter()
            .chain(archetype.preferred_habitats.iter())
            .copied()
            .collect::<BTreeSet<_>>();
        log::info!(
            "widened habitats {habitats:?} to {widened:?} for {}",
            archetype.name
        );
        let notice = GenerationNotice::HabitatWidened {
            requested: habitats,
            widened: widened.clone(),
        };
        (widened, Some(notice))
    }

    /// The number of members on a team for the request.
    ///
    /// Without an override, the size grows across the archetype's range with the maximum level,
    /// shifted by difficulty and clamped to the range.
    pub fn team_size(archetype: &ArchetypeData, request: &GenerationRequest) -> usize {
        if let Some(team_size) = request.team_size {
            return team_size.clamp(1, MAX_TEAM_SIZE) as usize;
        }
        let min = archetype.team_size.min.max(1);
        let max = archetype.team_size.max.clamp(min, MAX_TEAM_SIZE);
        let span = (max - min) as f64;
        let growth = (span * request.level_max as f64 / MAX_LEVEL as f64).round() as i16;
        let size = min as i16 + growth + request.difficulty.team_size_bias();
        size.clamp(min as i16, max as i16) as usize
    }

    fn level(
        archetype: &ArchetypeData,
        request: &GenerationRequest,
        ace: bool,
        prng: &mut dyn PseudoRandomNumberGenerator,
    ) -> u8 {
        let drawn = rand_util::range_inclusive(
            prng,
            request.level_min as u64,
            request.level_max as u64,
        ) as i16;
        let mut level = drawn
            + archetype.level_modifiers.offset as i16
            + request.difficulty.level_bias();
        if ace {
            level += archetype.level_modifiers.ace_bonus as i16;
        }
        level.clamp(request.level_min as i16, request.level_max as i16) as u8
    }

    /// Generates a team.
    ///
    /// Fails only if the request or the archetype it names is invalid. Every other problem is
    /// recorded as a notice on the team.
    pub fn generate(
        &self,
        request: &GenerationRequest,
        prng: &mut dyn PseudoRandomNumberGenerator,
    ) -> Result<GeneratedTeam> {
        let (archetype, habitats) = self.validate(request)?;
        let (habitats, widened) = self.reconcile_habitats(archetype, habitats, request);
        let mut notices = Vec::from_iter(widened);

        let team_size = Self::team_size(archetype, request);
        let resolver = EvolutionResolver::new(self.repository, &self.config.evolution);
        let engine = SelectionEngine::new(
            self.repository,
            self.index,
            &resolver,
            &self.config.selection,
        );
        let movesets = MovesetResolver::new(self.repository, &self.config.moveset);
        let chart = self.repository.type_chart();

        let mut state = TeamState::new();
        let mut members = Vec::with_capacity(team_size);
        let mut species = Vec::<&SpeciesData>::with_capacity(team_size);
        for slot in 0..team_size {
            let ace = team_size > 1 && slot + 1 == team_size;
            let level = Self::level(archetype, request, ace, prng);
            let context = SlotContext {
                archetype,
                habitats: &habitats,
                scope: request.scope,
                level,
                difficulty: request.difficulty,
            };
            let pick = engine
                .select(&context, &state, prng)
                .wrap_expectation("no species available for slot")?;
            let resolved = self
                .repository
                .get(&pick.resolution.species)
                .wrap_not_found_error(&pick.resolution.species)?;

            let mut slot_notices = Vec::new();
            if pick.fallback {
                slot_notices.push(GenerationNotice::EmptyCandidatePool {
                    slot,
                    scope: request.scope,
                });
            }
            if let Some(warning) = &pick.resolution.integrity_warning {
                log::warn!("left {} unresolved: {warning}", pick.candidate);
                slot_notices.push(GenerationNotice::EvolutionChainIntegrity {
                    slot,
                    species: pick.candidate.clone(),
                    message: warning.to_string(),
                });
            }
            if pick.duplicate {
                slot_notices.push(GenerationNotice::DuplicateSpecies {
                    slot,
                    species: resolved.id(),
                });
            }
            let moveset = movesets.resolve(resolved, level);
            if moveset.source.is_fallback() {
                slot_notices.push(GenerationNotice::MovesetFallback {
                    slot,
                    species: resolved.id(),
                    source: moveset.source,
                });
            }

            log::debug!(
                "slot {slot}: {} at level {level} with {:?}",
                resolved.name,
                moveset.moves
            );
            state.add(&pick.candidate, resolved, chart);
            notices.extend(slot_notices.iter().cloned());
            members.push(TeamMember {
                species: resolved.id(),
                name: resolved.name.clone(),
                types: resolved.types(),
                level,
                moves: moveset.moves,
                ability: resolved.abilities.first().cloned().unwrap_or_default(),
                role: Role::for_slot(slot, team_size, &resolved.base_stats),
                provenance: Provenance {
                    original_species: pick.candidate,
                    evolved: pick.resolution.evolved,
                    demoted: pick.resolution.demoted,
                    off_habitat: pick.off_habitat,
                    fallback: pick.fallback,
                    duplicate: pick.duplicate,
                    move_source: moveset.source,
                    notices: slot_notices,
                },
            });
            species.push(resolved);
        }

        let analyzer = CoverageAnalyzer::new(self.repository, self.index, &self.config.coverage);
        let coverage = analyzer.analyze(&species, request.difficulty);
        let suggestions = analyzer.suggest(
            &species,
            &coverage,
            &SuggestionScope {
                archetype,
                habitats: &habitats,
                scope: request.scope,
            },
        );
        log::info!(
            "generated {} member team for {} with coverage grade {:?}",
            members.len(),
            archetype.name,
            coverage.grade
        );

        Ok(GeneratedTeam {
            archetype: archetype.id(),
            request: request.clone(),
            habitats,
            members,
            coverage,
            suggestions,
            seed: prng.initial_seed(),
            notices,
        })
    }
}

#[cfg(test)]
mod team_generator_test {
    use std::collections::BTreeSet;

    use assert_matches::assert_matches;
    use pretty_assertions::assert_eq;
    use roster_data::{
        Habitat,
        Id,
        Type,
    };
    use roster_prng::RealPseudoRandomNumberGenerator;

    use crate::{
        config::GeneratorConfig,
        error::ConfigurationError,
        generator::TeamGenerator,
        index::{
            CandidateIndex,
            Generation,
            GenerationScope,
        },
        repository::SpeciesRepository,
        teams::{
            Difficulty,
            GeneratedTeam,
            GenerationNotice,
            GenerationRequest,
            Role,
        },
        test_util::fixture_repository,
    };

    struct Fixture {
        repository: SpeciesRepository,
        index: CandidateIndex,
    }

    impl Fixture {
        fn new() -> Self {
            let repository = fixture_repository();
            let index = CandidateIndex::new(&repository);
            Self { repository, index }
        }

        fn generate(&self, request: &GenerationRequest, seed: u64) -> anyhow::Result<GeneratedTeam> {
            let generator =
                TeamGenerator::new(&self.repository, &self.index, GeneratorConfig::default());
            generator.generate(request, &mut RealPseudoRandomNumberGenerator::new(Some(seed)))
        }
    }

    fn problems(result: anyhow::Result<GeneratedTeam>) -> Vec<String> {
        let error = result.unwrap_err();
        let error = error.downcast_ref::<ConfigurationError>().unwrap();
        error.problems().map(|problem| problem.to_owned()).collect()
    }

    #[test]
    fn rejects_invalid_requests_with_every_problem() {
        let fixture = Fixture::new();
        let request = GenerationRequest::new("Youngster", ["Forest", "Moon", "Sky Pillar"], 30, 20)
            .with_team_size(7);
        assert_eq!(
            problems(fixture.generate(&request, 0)),
            [
                "minimum level 30 exceeds maximum level 20",
                "team size 7 is not between 1 and 6",
                "unknown habitat: Moon",
                "unknown habitat: Sky Pillar",
            ]
        );

        let request = GenerationRequest::new("Youngster", [] as [&str; 0], 0, 101);
        assert_eq!(
            problems(fixture.generate(&request, 0)),
            [
                "minimum level must be at least 1",
                "maximum level 101 exceeds 100",
                "no habitats requested",
            ]
        );
    }

    #[test]
    fn rejects_unknown_and_malformed_archetypes() {
        let fixture = Fixture::new();
        let request = GenerationRequest::new("Gym Leader", ["Forest"], 10, 12);
        assert_eq!(problems(fixture.generate(&request, 0)), ["unknown archetype: gymleader"]);

        let request = GenerationRequest::new("Broken", ["Forest"], 10, 12);
        assert_eq!(
            problems(fixture.generate(&request, 0)),
            [
                "archetype Broken: minimum team size 5 exceeds maximum team size 2",
                "archetype Broken: maximum evolution stage 0 is not between 1 and 3",
            ]
        );
    }

    #[test]
    fn rejects_reversed_or_empty_scope() {
        let fixture = Fixture::new();
        let request = GenerationRequest::new("Youngster", ["Forest"], 10, 12).with_scope(
            GenerationScope {
                oldest: Generation::Gen3,
                newest: Generation::Gen1,
            },
        );
        assert_eq!(
            problems(fixture.generate(&request, 0)),
            ["generation scope starts at Gen3 but ends at Gen1"]
        );
    }

    #[test]
    fn computes_team_size_from_range_level_and_difficulty() {
        let fixture = Fixture::new();
        let hiker = fixture.repository.archetype(&Id::from("hiker")).unwrap();
        let request = GenerationRequest::new("Hiker", ["Cave"], 40, 50);
        assert_eq!(TeamGenerator::team_size(hiker, &request), 3);
        let request = request.with_difficulty(Difficulty::Easy);
        assert_eq!(TeamGenerator::team_size(hiker, &request), 2);
        let request = request.with_difficulty(Difficulty::Expert);
        assert_eq!(TeamGenerator::team_size(hiker, &request), 4);
        let request = request.with_team_size(6);
        assert_eq!(TeamGenerator::team_size(hiker, &request), 6);
    }

    #[test]
    fn generated_teams_respect_size_level_and_moveset_bounds() {
        let fixture = Fixture::new();
        let requests = [
            GenerationRequest::new("Hiker", ["Granite Cave"], 12, 30),
            GenerationRequest::new("Ace Trainer", ["Route 104", "Sea"], 35, 50)
                .with_difficulty(Difficulty::Expert),
            GenerationRequest::new("Youngster", ["Grassland"], 2, 5).with_difficulty(Difficulty::Easy),
            GenerationRequest::new("Swimmer", ["Sea"], 20, 25).with_team_size(6),
        ];
        for request in &requests {
            for seed in 0..25 {
                let team = fixture.generate(request, seed).unwrap();
                let archetype = fixture.repository.archetype(&request.archetype).unwrap();
                let (min, max) = match request.team_size {
                    Some(size) => (size as usize, size as usize),
                    None => (
                        archetype.team_size.min as usize,
                        archetype.team_size.max as usize,
                    ),
                };
                assert!(
                    (min..=max).contains(&team.members.len()),
                    "{request:?} gave {} members",
                    team.members.len()
                );
                assert!(team.members.len() <= 6);
                for member in &team.members {
                    assert!((request.level_min..=request.level_max).contains(&member.level));
                    assert!((1..=4).contains(&member.moves.len()), "{member:?}");
                    let unique = member.moves.iter().collect::<BTreeSet<_>>();
                    assert_eq!(unique.len(), member.moves.len(), "{member:?}");
                }
                assert_eq!(team.seed, seed);
            }
        }
    }

    #[test]
    fn same_seed_generates_same_team() {
        let fixture = Fixture::new();
        let request = GenerationRequest::new("Ace Trainer", ["Grassland", "Forest"], 30, 40);
        assert_eq!(
            fixture.generate(&request, 99).unwrap(),
            fixture.generate(&request, 99).unwrap()
        );
    }

    #[test]
    fn bug_catcher_draws_bug_types_from_location_tag() {
        let fixture = Fixture::new();
        let request = GenerationRequest::new("Bug Catcher", ["Petalburg Woods"], 10, 12);
        for seed in 0..20 {
            let team = fixture.generate(&request, seed).unwrap();
            assert_eq!(team.habitats, BTreeSet::from([Habitat::Forest]));
            for member in &team.members {
                if !member.provenance.fallback {
                    assert!(member.types.contains(&Type::Bug), "{member:?}");
                }
            }
        }
    }

    #[test]
    fn widens_habitats_that_do_not_suit_archetype() {
        let fixture = Fixture::new();
        let request = GenerationRequest::new("Swimmer", ["Forest"], 20, 25);
        let team = fixture.generate(&request, 3).unwrap();
        assert_eq!(team.habitats, BTreeSet::from([Habitat::Forest, Habitat::Sea]));
        assert_matches!(
            team.notices.first(),
            Some(GenerationNotice::HabitatWidened { requested, widened }) => {
                assert_eq!(requested, &BTreeSet::from([Habitat::Forest]));
                assert_eq!(widened, &team.habitats);
            }
        );

        let request = GenerationRequest::new("Hiker", ["Route 104"], 20, 25);
        let team = fixture.generate(&request, 3).unwrap();
        assert!(
            !team
                .notices
                .iter()
                .any(|notice| matches!(notice, GenerationNotice::HabitatWidened { .. }))
        );
    }

    #[test]
    fn assigns_lead_and_ace_roles() {
        let fixture = Fixture::new();
        let request = GenerationRequest::new("Ace Trainer", ["Grassland"], 30, 30).with_team_size(3);
        let team = fixture.generate(&request, 5).unwrap();
        assert_eq!(team.members.len(), 3);
        assert_eq!(team.members[0].role, Role::Lead);
        assert_eq!(team.members[2].role, Role::Ace);
        assert!(team.members.iter().all(|member| member.level == 30));
    }

    #[test]
    fn records_fallback_notices_in_provenance_and_team() {
        let fixture = Fixture::new();
        let request = GenerationRequest::new("Dragon Tamer", ["Forest"], 20, 22)
            .with_team_size(4)
            .with_scope(GenerationScope::only(Generation::Gen3));
        let mut generator_config = GeneratorConfig::default();
        generator_config.selection.off_habitat_chance = 0.0;
        let generator = TeamGenerator::new(&fixture.repository, &fixture.index, generator_config);
        let team = generator
            .generate(&request, &mut RealPseudoRandomNumberGenerator::new(Some(1)))
            .unwrap();
        assert_eq!(team.members.len(), 4);
        for (slot, member) in team.members.iter().enumerate() {
            assert!(member.provenance.fallback);
            assert!(
                member
                    .provenance
                    .notices
                    .contains(&GenerationNotice::EmptyCandidatePool {
                        slot,
                        scope: request.scope,
                    })
            );
        }
        let slot_notices = team
            .members
            .iter()
            .map(|member| member.provenance.notices.len())
            .sum::<usize>();
        assert_eq!(team.notices.len(), slot_notices);
    }
}
