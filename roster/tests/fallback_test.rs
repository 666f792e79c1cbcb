use pretty_assertions::assert_eq;
use roster::{
    config::GeneratorConfig,
    generator::TeamGenerator,
    index::{
        CandidateIndex,
        Generation,
        GenerationScope,
    },
    repository::SpeciesRepository,
    teams::{
        GenerationNotice,
        GenerationRequest,
    },
};
use roster_data::{
    Id,
    Type,
};
use roster_prng::RealPseudoRandomNumberGenerator;
use roster_test_utils::static_local_data_store;

#[test]
fn empty_dragon_pool_falls_back_to_safe_species() {
    let repository = SpeciesRepository::new(static_local_data_store()).unwrap();
    let index = CandidateIndex::new(&repository);
    let mut config = GeneratorConfig::default();
    config.selection.off_habitat_chance = 0.0;
    let safe_species = config.selection.safe_species[&Generation::Gen3].clone();
    let generator = TeamGenerator::new(&repository, &index, config);

    let request = GenerationRequest::new("Dragon Tamer", ["Forest"], 20, 22)
        .with_team_size(4)
        .with_scope(GenerationScope::only(Generation::Gen3));

    for seed in 0..10 {
        let team = generator
            .generate(&request, &mut RealPseudoRandomNumberGenerator::new(Some(seed)))
            .unwrap();
        assert_eq!(team.members.len(), 4);
        for (slot, member) in team.members.iter().enumerate() {
            assert!(
                safe_species.contains(&member.provenance.original_species),
                "seed {seed}: {}",
                member.provenance.original_species
            );
            assert!(member.provenance.fallback);
            assert!(!member.types.contains(&Type::Dragon));
            assert!(
                team.notices.contains(&GenerationNotice::EmptyCandidatePool {
                    slot,
                    scope: request.scope,
                }),
                "seed {seed}: {:?}",
                team.notices
            );
        }
        let originals = team
            .members
            .iter()
            .map(|member| member.provenance.original_species.clone())
            .collect::<std::collections::BTreeSet<_>>();
        assert_eq!(originals.len(), 4, "seed {seed}: {originals:?}");
    }
}

#[test]
fn fallback_respects_generation_scope() {
    let repository = SpeciesRepository::new(static_local_data_store()).unwrap();
    let index = CandidateIndex::new(&repository);
    let mut config = GeneratorConfig::default();
    config.selection.off_habitat_chance = 0.0;
    let generator = TeamGenerator::new(&repository, &index, config);

    let request = GenerationRequest::new("Dragon Tamer", ["Forest"], 20, 22)
        .with_team_size(3)
        .with_scope(GenerationScope::only(Generation::Gen2));
    let team = generator
        .generate(&request, &mut RealPseudoRandomNumberGenerator::new(Some(3)))
        .unwrap();
    for member in &team.members {
        let original = repository.get(&member.provenance.original_species).unwrap();
        assert_eq!(Generation::of_dex(original.dex_number), Some(Generation::Gen2));
        assert!(member.provenance.fallback);
    }
}

#[test]
fn exhausted_pool_repeats_species_without_fallback() {
    let repository = SpeciesRepository::new(static_local_data_store()).unwrap();
    let index = CandidateIndex::new(&repository);
    let mut config = GeneratorConfig::default();
    config.selection.off_habitat_chance = 0.0;
    let generator = TeamGenerator::new(&repository, &index, config);

    // Duskull is the only Gen3 Ghost or Poison species found in caves.
    let request = GenerationRequest::new("Hex Maniac", ["Cave"], 30, 30)
        .with_team_size(3)
        .with_scope(GenerationScope::only(Generation::Gen3));
    for seed in 0..5 {
        let team = generator
            .generate(&request, &mut RealPseudoRandomNumberGenerator::new(Some(seed)))
            .unwrap();
        assert_eq!(team.members.len(), 3);
        for (slot, member) in team.members.iter().enumerate() {
            assert_eq!(member.provenance.original_species, Id::from("duskull"));
            assert!(member.types.contains(&Type::Ghost), "{:?}", member.types);
            assert!(!member.provenance.fallback);
            assert_eq!(member.provenance.duplicate, slot > 0);
        }
        assert!(
            !team
                .notices
                .iter()
                .any(|notice| matches!(notice, GenerationNotice::EmptyCandidatePool { .. })),
            "seed {seed}: {:?}",
            team.notices
        );
        assert!(team.notices.contains(&GenerationNotice::DuplicateSpecies {
            slot: 2,
            species: Id::from("duskull"),
        }));
    }
}
