use std::{
    cmp::Ordering,
    collections::BTreeSet,
};

use roster_data::{
    ArchetypeData,
    Habitat,
    Id,
    SpeciesData,
    Type,
    TypeChart,
    TypeEffectiveness,
};

use crate::{
    coverage::{
        CoverageConfig,
        CoverageReport,
        CoverageSuggestion,
        DefensiveProfile,
        SuggestionReason,
    },
    index::{
        CandidateIndex,
        CandidateQuery,
        GenerationScope,
    },
    repository::SpeciesRepository,
    selection::threatened_by,
    teams::Difficulty,
};

/// Where replacement candidates may be drawn from.
#[derive(Debug, Clone, Copy)]
pub struct SuggestionScope<'a> {
    pub archetype: &'a ArchetypeData,
    pub habitats: &'a BTreeSet<Habitat>,
    pub scope: GenerationScope,
}

/// Grades the type coverage of a team and proposes fixes for its gaps.
pub struct CoverageAnalyzer<'r> {
    repository: &'r SpeciesRepository,
    index: &'r CandidateIndex,
    config: &'r CoverageConfig,
}

impl<'r> CoverageAnalyzer<'r> {
    pub fn new(
        repository: &'r SpeciesRepository,
        index: &'r CandidateIndex,
        config: &'r CoverageConfig,
    ) -> Self {
        Self {
            repository,
            index,
            config,
        }
    }

    fn chart(&self) -> &'r TypeChart {
        self.repository.type_chart()
    }

    /// Types threatened by same-type attacks of the members' primary types.
    ///
    /// Secondary types are left out, so adding a distinct primary type never loses a threat.
    fn offensive_types(members: &[&SpeciesData], chart: &TypeChart) -> BTreeSet<Type> {
        members
            .iter()
            .map(|member| member.primary_type)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .flat_map(|primary| threatened_by(primary, chart))
            .collect()
    }

    /// Analyzes the coverage of a team.
    pub fn analyze(&self, members: &[&SpeciesData], difficulty: Difficulty) -> CoverageReport {
        let chart = self.chart();
        let offensive_types = Self::offensive_types(members, chart);
        let coverage_percent =
            offensive_types.len() as f64 / Type::CANONICAL.len() as f64 * 100.0;

        let defensive_profile = Type::CANONICAL
            .into_iter()
            .map(|attacking| {
                let mut profile = DefensiveProfile {
                    typ: attacking,
                    weak: 0,
                    resist: 0,
                    immune: 0,
                    net: 0,
                };
                for member in members {
                    let multiplier = chart.multiplier(attacking, &member.types());
                    if multiplier == 0.0 {
                        profile.immune += 1;
                    } else if multiplier > 1.0 {
                        profile.weak += 1;
                    } else if multiplier < 1.0 {
                        profile.resist += 1;
                    }
                }
                profile.net =
                    profile.weak as i16 - profile.resist as i16 - profile.immune as i16;
                profile
            })
            .collect::<Vec<_>>();

        let critical_weaknesses = defensive_profile
            .iter()
            .filter(|profile| profile.weak as usize * 2 > members.len())
            .map(|profile| profile.typ)
            .collect::<Vec<_>>();

        let score = (coverage_percent
            - self.config.critical_weakness_penalty * critical_weaknesses.len() as f64)
            .max(0.0);
        let grade = self.config.grade_thresholds.get(difficulty).grade(score);

        CoverageReport {
            offensive_types,
            coverage_percent,
            defensive_profile,
            critical_weaknesses,
            score,
            grade,
        }
    }

    /// Proposes replacements for every critical weakness and uncovered type in the report.
    ///
    /// Gaps with no available replacement produce no suggestion.
    pub fn suggest(
        &self,
        members: &[&SpeciesData],
        report: &CoverageReport,
        scope: &SuggestionScope,
    ) -> Vec<CoverageSuggestion> {
        if members.is_empty() {
            return Vec::new();
        }
        let chart = self.chart();
        let team = members.iter().map(|member| member.id()).collect::<Vec<_>>();
        let mut suggestions = Vec::new();

        for weakness in &report.critical_weaknesses {
            let resisting = Type::CANONICAL.into_iter().filter(|defending| {
                matches!(
                    chart.effectiveness(*weakness, *defending),
                    TypeEffectiveness::Weak | TypeEffectiveness::None
                )
            });
            let candidates = self.candidates(resisting, &team, scope, |species| {
                chart.multiplier(*weakness, &species.types()) <= 1.0
            });
            if candidates.is_empty() {
                continue;
            }
            let replace_slot = Self::slot_to_replace(members, |member| {
                chart.multiplier(*weakness, &member.types())
            });
            suggestions.push(CoverageSuggestion {
                reason: SuggestionReason::CriticalWeakness(*weakness),
                replace_slot,
                candidates,
            });
        }

        for uncovered in report.uncovered_types() {
            let attacking = Type::CANONICAL.into_iter().filter(|attacking| {
                chart.effectiveness(*attacking, uncovered) == TypeEffectiveness::Strong
            });
            let candidates = self.candidates(attacking, &team, scope, |_| true);
            if candidates.is_empty() {
                continue;
            }
            // Replace the member whose removal gives up the least offensive coverage.
            let replace_slot = Self::slot_to_replace(members, |member| {
                -(Self::unique_threats(members, member, chart) as f32)
            });
            suggestions.push(CoverageSuggestion {
                reason: SuggestionReason::Uncovered(uncovered),
                replace_slot,
                candidates,
            });
        }
        suggestions
    }

    fn candidates<I, F>(
        &self,
        types: I,
        team: &[Id],
        scope: &SuggestionScope,
        accept: F,
    ) -> Vec<Id>
    where
        I: IntoIterator<Item = Type>,
        F: Fn(&SpeciesData) -> bool,
    {
        let types = types.into_iter().collect::<BTreeSet<_>>();
        if types.is_empty() {
            return Vec::new();
        }
        let query = CandidateQuery::for_archetype(
            scope.archetype,
            scope.habitats.iter().copied(),
            scope.scope,
        )
        .with_preferred_types([])
        .with_excluded_species(team.iter().cloned());
        let archetype_types = query.required_types.clone();
        self.index
            .query(&query.with_required_types(types))
            .into_iter()
            .filter_map(|id| self.repository.get(&id))
            .filter(|species| {
                archetype_types.is_empty()
                    || archetype_types.iter().any(|typ| species.has_type(*typ))
            })
            .filter(|species| accept(*species))
            .map(|species| species.id())
            .take(self.config.max_suggestion_candidates)
            .collect()
    }

    /// Offensive types lost if this member left the team.
    fn unique_threats(members: &[&SpeciesData], member: &SpeciesData, chart: &TypeChart) -> usize {
        let others = members
            .iter()
            .filter(|other| other.id() != member.id())
            .copied()
            .collect::<Vec<_>>();
        let remaining = Self::offensive_types(&others, chart);
        threatened_by(member.primary_type, chart)
            .filter(|typ| !remaining.contains(typ))
            .count()
    }

    /// The slot with the highest badness, breaking ties toward the lowest base stat total.
    fn slot_to_replace<F>(members: &[&SpeciesData], badness: F) -> usize
    where
        F: Fn(&SpeciesData) -> f32,
    {
        members
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| {
                badness(**a)
                    .partial_cmp(&badness(**b))
                    .unwrap_or(Ordering::Equal)
                    .then_with(|| b.bst().cmp(&a.bst()))
            })
            .map(|(slot, _)| slot)
            .unwrap_or_default()
    }
}
