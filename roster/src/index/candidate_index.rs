use std::{
    collections::BTreeSet,
    ops::Range,
};

use ahash::HashMap;
use roster_data::{
    Habitat,
    Id,
    LegendaryPolicy,
    RarityTier,
    Type,
};

use crate::{
    index::{
        CandidateQuery,
        GenerationScope,
    },
    repository::SpeciesRepository,
};

#[derive(Debug)]
struct IndexEntry {
    id: Id,
    dex_number: u16,
    bst: u32,
    tier: RarityTier,
    legendary: bool,
}

impl IndexEntry {
    fn passes(&self, query: &CandidateQuery) -> bool {
        if query.excluded_tiers.contains(&self.tier) {
            return false;
        }
        if query
            .bst_range
            .is_some_and(|range| !range.contains(self.bst))
        {
            return false;
        }
        let legendary_allowed = match query.legendary_policy {
            LegendaryPolicy::Exclude => !self.legendary,
            LegendaryPolicy::Allow => true,
            LegendaryPolicy::Only => self.legendary,
        };
        legendary_allowed && !query.excluded_species.contains(&self.id)
    }
}

/// Precomputed lookup structures for filtering candidate species.
///
/// Entries are stored in national dex order, and every per-habitat and per-type set holds entry
/// positions. Intersecting position sets therefore yields results already in dex order, and a
/// generation scope is a contiguous position range found by binary search.
#[derive(Debug)]
pub struct CandidateIndex {
    entries: Vec<IndexEntry>,
    by_habitat: HashMap<Habitat, BTreeSet<usize>>,
    by_type: HashMap<Type, BTreeSet<usize>>,
}

impl CandidateIndex {
    /// Builds the index over every species in the repository.
    pub fn new(repository: &SpeciesRepository) -> Self {
        let mut entries = Vec::with_capacity(repository.len());
        let mut by_habitat = HashMap::<Habitat, BTreeSet<usize>>::default();
        let mut by_type = HashMap::<Type, BTreeSet<usize>>::default();
        for (position, species) in repository.species().enumerate() {
            for habitat in &species.habitats {
                by_habitat.entry(*habitat).or_default().insert(position);
            }
            for typ in species.types() {
                by_type.entry(typ).or_default().insert(position);
            }
            entries.push(IndexEntry {
                id: species.id(),
                dex_number: species.dex_number,
                bst: species.bst(),
                tier: species.tier,
                legendary: species.is_legendary(),
            });
        }
        Self {
            entries,
            by_habitat,
            by_type,
        }
    }

    /// The number of indexed species.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Is the index empty?
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn scope_positions(&self, scope: &GenerationScope) -> Range<usize> {
        let dex_range = scope.dex_range();
        let start = self
            .entries
            .partition_point(|entry| entry.dex_number < *dex_range.start());
        let end = self
            .entries
            .partition_point(|entry| entry.dex_number <= *dex_range.end());
        start..end.max(start)
    }

    fn union_within<'a, K, I>(
        sets: &'a HashMap<K, BTreeSet<usize>>,
        keys: I,
        range: &Range<usize>,
    ) -> BTreeSet<usize>
    where
        K: Eq + std::hash::Hash + 'a,
        I: IntoIterator<Item = &'a K>,
    {
        keys.into_iter()
            .filter_map(|key| sets.get(key))
            .flat_map(|positions| positions.range(range.clone()).copied())
            .collect()
    }

    /// Looks up all species matching the query, ordered by national dex number.
    ///
    /// An empty result is legal.
    pub fn query(&self, query: &CandidateQuery) -> Vec<Id> {
        let range = self.scope_positions(&query.scope);
        let mut positions = if query.habitats.is_empty() {
            range.clone().collect::<BTreeSet<_>>()
        } else {
            Self::union_within(&self.by_habitat, &query.habitats, &range)
        };
        if !query.required_types.is_empty() {
            let typed = Self::union_within(&self.by_type, &query.required_types, &range);
            positions = positions.intersection(&typed).copied().collect();
        }
        positions.retain(|position| self.entries[*position].passes(query));

        if !query.preferred_types.is_empty() {
            let preferred = Self::union_within(&self.by_type, &query.preferred_types, &range);
            let narrowed = positions
                .intersection(&preferred)
                .copied()
                .collect::<BTreeSet<_>>();
            if !narrowed.is_empty() {
                positions = narrowed;
            }
        }

        positions
            .into_iter()
            .map(|position| self.entries[position].id.clone())
            .collect()
    }
}

#[cfg(test)]
mod candidate_index_test {
    use std::collections::BTreeSet;

    use pretty_assertions::assert_eq;
    use roster_data::{
        BstRange,
        Habitat,
        Id,
        LegendaryPolicy,
        RarityTier,
        Type,
    };

    use crate::{
        index::{
            CandidateIndex,
            CandidateQuery,
            Generation,
            GenerationScope,
        },
        test_util::fixture_repository,
    };

    fn ids(names: &[&str]) -> Vec<Id> {
        names.iter().map(|name| Id::from(*name)).collect()
    }

    fn index() -> CandidateIndex {
        CandidateIndex::new(&fixture_repository())
    }

    #[test]
    fn queries_habitat_in_dex_order() {
        let index = index();
        let query = CandidateQuery::new(GenerationScope::default()).with_habitats([Habitat::Forest]);
        assert_eq!(
            index.query(&query),
            ids(&[
                "pidgey",
                "pidgeotto",
                "pidgeot",
                "pikachu",
                "raichu",
                "wurmple",
                "silcoon",
                "cascoon",
            ])
        );
    }

    #[test]
    fn scopes_by_generation() {
        let index = index();
        let query = CandidateQuery::new(GenerationScope::only(Generation::Gen3))
            .with_habitats([Habitat::Grassland]);
        assert_eq!(
            index.query(&query),
            ids(&["poochyena", "mightyena", "zigzagoon", "linoone", "taillow", "swellow"])
        );

        let query = CandidateQuery::new(GenerationScope::only(Generation::Gen2))
            .with_habitats([Habitat::Grassland]);
        assert_eq!(index.query(&query), ids(&["sentret", "furret"]));
    }

    #[test]
    fn requires_any_required_type() {
        let index = index();
        let query = CandidateQuery::new(GenerationScope::default())
            .with_habitats([Habitat::Forest, Habitat::Grassland])
            .with_required_types([Type::Bug, Type::Dark]);
        assert_eq!(
            index.query(&query),
            ids(&["poochyena", "mightyena", "wurmple", "silcoon", "cascoon"])
        );
    }

    #[test]
    fn preferred_types_are_soft() {
        let index = index();
        let query = CandidateQuery::new(GenerationScope::default())
            .with_habitats([Habitat::Cave])
            .with_preferred_types([Type::Rock]);
        assert_eq!(index.query(&query), ids(&["geodude", "graveler"]));

        let query = query.with_preferred_types([Type::Fire]);
        assert_eq!(index.query(&query), ids(&["geodude", "graveler"]));

        let query = CandidateQuery::new(GenerationScope::default())
            .with_habitats([Habitat::Sea, Habitat::Mountain])
            .with_preferred_types([Type::Flying]);
        assert_eq!(
            index.query(&query),
            ids(&["gyarados", "wingull", "pelipper", "salamence"])
        );
    }

    #[test]
    fn applies_tier_bst_and_legendary_filters() {
        let index = index();
        let mut query = CandidateQuery::new(GenerationScope::default())
            .with_habitats([Habitat::Mountain, Habitat::Rare]);
        assert_eq!(
            index.query(&query),
            ids(&["geodude", "graveler", "golem", "bagon", "shelgon", "salamence"])
        );

        query.legendary_policy = LegendaryPolicy::Only;
        assert_eq!(index.query(&query), ids(&["rayquaza"]));

        query.legendary_policy = LegendaryPolicy::Allow;
        query.excluded_tiers = BTreeSet::from([RarityTier::Rare]);
        query.bst_range = Some(BstRange { min: 350, max: 700 });
        assert_eq!(index.query(&query), ids(&["graveler", "golem", "rayquaza"]));
    }

    #[test]
    fn excludes_species() {
        let index = index();
        let query = CandidateQuery::new(GenerationScope::default())
            .with_habitats([Habitat::Urban])
            .with_excluded_species(ids(&["kadabra"]));
        assert_eq!(index.query(&query), ids(&["abra", "alakazam"]));
    }

    #[test]
    fn empty_habitat_filter_matches_everything_in_scope() {
        let index = index();
        let query = CandidateQuery::new(GenerationScope::only(Generation::Gen2));
        assert_eq!(index.query(&query), ids(&["sentret", "furret"]));
    }

    #[test]
    fn empty_result_is_legal() {
        let index = index();
        let query = CandidateQuery::new(GenerationScope::default())
            .with_habitats([Habitat::RoughTerrain]);
        assert!(index.query(&query).is_empty());
    }

    #[test]
    fn filter_order_does_not_change_results() {
        let index = index();
        let mut forward = CandidateQuery::new(GenerationScope::default());
        forward.habitats.insert(Habitat::Forest);
        forward.habitats.insert(Habitat::Grassland);
        forward.required_types.insert(Type::Normal);
        forward.required_types.insert(Type::Bug);
        forward.preferred_types.insert(Type::Flying);
        let mut backward = CandidateQuery::new(GenerationScope::default());
        backward.preferred_types.insert(Type::Flying);
        backward.required_types.insert(Type::Bug);
        backward.required_types.insert(Type::Normal);
        backward.habitats.insert(Habitat::Grassland);
        backward.habitats.insert(Habitat::Forest);
        assert_eq!(index.query(&forward), index.query(&backward));
        assert_eq!(
            index.query(&forward),
            ids(&["pidgey", "pidgeotto", "pidgeot", "taillow", "swellow"])
        );
    }
}
