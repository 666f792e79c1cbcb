use std::collections::BTreeSet;

use roster_data::{
    ArchetypeData,
    Habitat,
    Id,
    SpeciesData,
};
use roster_prng::{
    PseudoRandomNumberGenerator,
    rand_util,
};

use crate::{
    evolution::{
        EvolutionResolution,
        EvolutionResolver,
    },
    index::{
        CandidateIndex,
        CandidateQuery,
        GenerationScope,
    },
    repository::SpeciesRepository,
    selection::{
        SelectionConfig,
        TeamState,
    },
    teams::Difficulty,
};

/// Everything selection needs to know about the slot being filled.
#[derive(Debug, Clone, Copy)]
pub struct SlotContext<'a> {
    pub archetype: &'a ArchetypeData,
    pub habitats: &'a BTreeSet<Habitat>,
    pub scope: GenerationScope,
    pub level: u8,
    pub difficulty: Difficulty,
}

/// A species drawn for a slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pick {
    /// The species as drawn, before evolution resolution.
    pub candidate: Id,
    pub resolution: EvolutionResolution,
    /// Drawn from outside the requested habitats.
    pub off_habitat: bool,
    /// Drawn from the safe species lists because the filtered pool was empty.
    pub fallback: bool,
    /// Already on the team, because every candidate in the pool was.
    pub duplicate: bool,
}

struct Weighted {
    resolution: EvolutionResolution,
    weight: f64,
}

/// Draws species for team slots.
pub struct SelectionEngine<'r> {
    repository: &'r SpeciesRepository,
    index: &'r CandidateIndex,
    resolver: &'r EvolutionResolver<'r>,
    config: &'r SelectionConfig,
}

impl<'r> SelectionEngine<'r> {
    pub fn new(
        repository: &'r SpeciesRepository,
        index: &'r CandidateIndex,
        resolver: &'r EvolutionResolver<'r>,
        config: &'r SelectionConfig,
    ) -> Self {
        Self {
            repository,
            index,
            resolver,
            config,
        }
    }

    /// The selection weight of a candidate, given the form it resolves to for the slot.
    ///
    /// Always finite and non-negative.
    pub fn weight(
        &self,
        slot: &SlotContext,
        team: &TeamState,
        candidate: &SpeciesData,
        resolved: &SpeciesData,
    ) -> f64 {
        let tier = self.config.tier_weight(slot.level, candidate.tier);
        let curve = &self.config.bst_curve;
        let proximity = curve.proximity(resolved.bst(), curve.expected(slot.level, slot.difficulty));
        let affinity = if slot
            .archetype
            .preferred_types
            .iter()
            .any(|typ| resolved.has_type(*typ))
        {
            self.config.preferred_type_affinity
        } else {
            1.0
        };
        let coverage = if team.fills_coverage_gap(resolved, self.repository.type_chart()) {
            self.config.coverage_gap_bonus
        } else {
            1.0
        };
        let diversity = if team.has_primary_type(resolved.primary_type) {
            self.config.diversity_penalty
        } else {
            1.0
        };
        let weight = tier * proximity * affinity * coverage * diversity;
        if weight.is_finite() && weight > 0.0 {
            weight
        } else {
            0.0
        }
    }

    fn weigh(&self, slot: &SlotContext, team: &TeamState, candidates: &[Id]) -> Vec<Weighted> {
        candidates
            .iter()
            .filter_map(|id| {
                let candidate = self.repository.get(id)?;
                let resolution = self.resolver.resolve(id, slot.level, slot.archetype);
                let resolved = self.repository.get(&resolution.species)?;
                let weight = self.weight(slot, team, candidate, resolved);
                Some(Weighted { resolution, weight })
            })
            .collect()
    }

    fn draw(
        prng: &mut dyn PseudoRandomNumberGenerator,
        mut weighted: Vec<Weighted>,
    ) -> Option<EvolutionResolution> {
        let weights = weighted.iter().map(|w| w.weight).collect::<Vec<_>>();
        let index = match rand_util::weighted_index(prng, &weights) {
            Some(index) => index,
            None => rand_util::range(prng, 0, weighted.len() as u64) as usize,
        };
        if index < weighted.len() {
            Some(weighted.swap_remove(index).resolution)
        } else {
            None
        }
    }

    /// Splits candidates into those not yet on the team and those that are.
    fn partition_unused(team: &TeamState, weighted: Vec<Weighted>) -> (Vec<Weighted>, Vec<Weighted>) {
        weighted.into_iter().partition(|w| {
            !team.contains(&w.resolution.original) && !team.contains(&w.resolution.species)
        })
    }

    /// Safe species for the scope, newest generation first, restricted to species the
    /// repository knows.
    fn safe_species(&self, scope: &GenerationScope) -> Vec<Vec<Id>> {
        let mut generations = scope.generations().collect::<Vec<_>>();
        generations.reverse();
        generations
            .into_iter()
            .filter_map(|generation| self.config.safe_species.get(&generation))
            .map(|species| {
                species
                    .iter()
                    .filter(|id| {
                        self.repository
                            .get(id)
                            .is_some_and(|species| scope.contains_dex(species.dex_number))
                    })
                    .cloned()
                    .collect::<Vec<_>>()
            })
            .filter(|species| !species.is_empty())
            .collect()
    }

    /// Draws a species for the slot.
    ///
    /// Only returns [`None`] if the generation scope holds no species at all.
    pub fn select(
        &self,
        slot: &SlotContext,
        team: &TeamState,
        prng: &mut dyn PseudoRandomNumberGenerator,
    ) -> Option<Pick> {
        let query =
            CandidateQuery::for_archetype(slot.archetype, slot.habitats.iter().copied(), slot.scope);
        let mut pool = self.index.query(&query);
        let mut off_habitat = false;
        if rand_util::probability(prng, self.config.off_habitat_chance) {
            let on_habitat = pool.iter().collect::<BTreeSet<_>>();
            let off_pool = self
                .index
                .query(&query.off_habitat())
                .into_iter()
                .filter(|id| !on_habitat.contains(id))
                .collect::<Vec<_>>();
            if off_pool.iter().any(|id| !team.contains(id)) {
                pool = off_pool;
                off_habitat = true;
            }
        }

        let (fresh, used) = Self::partition_unused(team, self.weigh(slot, team, &pool));
        if !fresh.is_empty() {
            return Self::draw(prng, fresh).map(|resolution| {
                log::debug!(
                    "picked {} as {} for level {}",
                    resolution.original,
                    resolution.species,
                    slot.level
                );
                Pick {
                    candidate: resolution.original.clone(),
                    resolution,
                    off_habitat,
                    fallback: false,
                    duplicate: false,
                }
            });
        }

        if !used.is_empty() {
            // Fewer candidates than slots.
            log::debug!(
                "every candidate for {} in {:?} is on the team, repeating one",
                slot.archetype.name,
                slot.habitats
            );
            return Self::draw(prng, used).map(|resolution| Pick {
                candidate: resolution.original.clone(),
                resolution,
                off_habitat,
                fallback: false,
                duplicate: true,
            });
        }

        log::warn!(
            "no candidates for {} in {:?} at level {}, falling back to safe species",
            slot.archetype.name,
            slot.habitats,
            slot.level
        );
        let safe = self.safe_species(&slot.scope);
        for species in &safe {
            let (fresh, _) = Self::partition_unused(team, self.weigh(slot, team, species));
            if !fresh.is_empty() {
                return Self::draw(prng, fresh).map(|resolution| Pick {
                    candidate: resolution.original.clone(),
                    resolution,
                    off_habitat: false,
                    fallback: true,
                    duplicate: false,
                });
            }
        }

        let everything = self.index.query(&CandidateQuery::new(slot.scope));
        let (fresh, used) = Self::partition_unused(team, self.weigh(slot, team, &everything));
        if !fresh.is_empty() {
            return Self::draw(prng, fresh).map(|resolution| Pick {
                candidate: resolution.original.clone(),
                resolution,
                off_habitat: false,
                fallback: true,
                duplicate: false,
            });
        }

        // Every species in scope is already on the team.
        let weighted = match safe.first() {
            Some(species) => self.weigh(slot, team, species),
            None => used,
        };
        Self::draw(prng, weighted).map(|resolution| Pick {
            candidate: resolution.original.clone(),
            resolution,
            off_habitat: false,
            fallback: true,
            duplicate: true,
        })
    }
}
