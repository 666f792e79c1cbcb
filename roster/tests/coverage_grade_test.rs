use std::collections::BTreeSet;

use pretty_assertions::assert_eq;
use roster::{
    config::GeneratorConfig,
    coverage::{
        CoverageAnalyzer,
        CoverageConfig,
        Grade,
        SuggestionReason,
        SuggestionScope,
    },
    generator::TeamGenerator,
    index::{
        CandidateIndex,
        GenerationScope,
    },
    repository::SpeciesRepository,
    teams::{
        Difficulty,
        GenerationRequest,
    },
};
use roster_data::{
    Habitat,
    Id,
    Type,
};
use roster_prng::RealPseudoRandomNumberGenerator;
use roster_test_utils::static_local_data_store;

#[test]
fn all_water_team_is_graded_strictly_at_expert() {
    let repository = SpeciesRepository::new(static_local_data_store()).unwrap();
    let index = CandidateIndex::new(&repository);
    let mut config = GeneratorConfig::default();
    config.selection.off_habitat_chance = 0.0;
    let generator = TeamGenerator::new(&repository, &index, config);

    let request = GenerationRequest::new("Swimmer", ["Sea"], 20, 25)
        .with_difficulty(Difficulty::Expert)
        .with_team_size(6);

    for seed in 0..10 {
        let team = generator
            .generate(&request, &mut RealPseudoRandomNumberGenerator::new(Some(seed)))
            .unwrap();
        assert_eq!(team.members.len(), 6);
        assert!(
            team.members
                .iter()
                .all(|member| member.types.contains(&Type::Water)),
            "seed {seed}: {:?}",
            team.members
        );
        assert!(
            team.coverage.critical_weaknesses.contains(&Type::Electric),
            "seed {seed}: {:?}",
            team.coverage.critical_weaknesses
        );
        assert!(team.coverage.grade <= Grade::C, "seed {seed}: {:?}", team.coverage);
    }
}

#[test]
fn same_team_grades_higher_at_easier_difficulties() {
    let repository = SpeciesRepository::new(static_local_data_store()).unwrap();
    let index = CandidateIndex::new(&repository);
    let generator = TeamGenerator::new(&repository, &index, GeneratorConfig::default());

    let team = generator
        .generate(
            &GenerationRequest::new("Swimmer", ["Sea"], 20, 25)
                .with_difficulty(Difficulty::Expert)
                .with_team_size(6),
            &mut RealPseudoRandomNumberGenerator::new(Some(7)),
        )
        .unwrap();
    let thresholds = &generator.config().coverage.grade_thresholds;
    let score = team.coverage.score;
    assert!(
        thresholds.get(Difficulty::Easy).grade(score) >= thresholds.get(Difficulty::Expert).grade(score)
    );
}

#[test]
fn suggests_electric_resistant_water_species() {
    let repository = SpeciesRepository::new(static_local_data_store()).unwrap();
    let index = CandidateIndex::new(&repository);
    let config = CoverageConfig::default();
    let analyzer = CoverageAnalyzer::new(&repository, &index, &config);
    let fisherman = repository.archetype(&Id::from("Fisherman")).unwrap();

    let members = ["psyduck", "goldeen", "magikarp"]
        .into_iter()
        .map(|name| repository.get(&Id::from(name)).unwrap())
        .collect::<Vec<_>>();
    let report = analyzer.analyze(&members, Difficulty::Normal);
    assert!(report.critical_weaknesses.contains(&Type::Electric));
    assert!(report.critical_weaknesses.contains(&Type::Grass));

    let habitats = BTreeSet::from([Habitat::WatersEdge]);
    let suggestions = analyzer.suggest(
        &members,
        &report,
        &SuggestionScope {
            archetype: fisherman,
            habitats: &habitats,
            scope: GenerationScope::default(),
        },
    );
    let electric = suggestions
        .iter()
        .find(|suggestion| suggestion.reason == SuggestionReason::CriticalWeakness(Type::Electric))
        .unwrap();
    assert_eq!(
        electric.candidates,
        ["wooper", "quagsire", "lotad", "lombre", "barboach"]
            .into_iter()
            .map(Id::from)
            .collect::<Vec<_>>()
    );
    // Every member is equally weak, so the weakest member goes.
    assert_eq!(electric.replace_slot, 2);
}
