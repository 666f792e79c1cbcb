#![cfg(test)]

use roster_data::{
    ArchetypeData,
    BstRange,
    EvolutionData,
    EvolutionMethod,
    Habitat,
    HabitatMapping,
    Id,
    LearnSet,
    LearnSetEntry,
    LegendaryPolicy,
    MemoryDataStore,
    MoveCategory,
    MoveData,
    MoveFlag,
    RarityTier,
    SpeciesData,
    StatTable,
    TeamSizeRange,
    Terrain,
    Type,
};

use crate::repository::SpeciesRepository;

/// A species with evenly distributed base stats summing to `bst`.
pub fn species(
    name: &str,
    dex_number: u16,
    types: &[Type],
    bst: u16,
    habitats: &[Habitat],
) -> SpeciesData {
    let share = bst / 6;
    SpeciesData {
        name: name.to_owned(),
        dex_number,
        primary_type: types.first().copied().unwrap_or_default(),
        secondary_type: types.get(1).copied(),
        base_stats: StatTable {
            hp: share + bst % 6,
            atk: share,
            def: share,
            spa: share,
            spd: share,
            spe: share,
        },
        abilities: Vec::from([format!("{name} Ability")]),
        habitats: habitats.iter().copied().collect(),
        tier: RarityTier::Common,
        legendary: false,
        evolutions: Vec::new(),
    }
}

fn evolves(mut species: SpeciesData, target: &str, level: u8) -> SpeciesData {
    species
        .evolutions
        .push(EvolutionData::level(Id::from(target), level));
    species
}

fn evolves_by(mut species: SpeciesData, target: &str, method: EvolutionMethod) -> SpeciesData {
    species
        .evolutions
        .push(EvolutionData::by(Id::from(target), method));
    species
}

fn tier(mut species: SpeciesData, tier: RarityTier) -> SpeciesData {
    species.tier = tier;
    species
}

/// A damaging move.
pub fn damaging_move(name: &str, typ: Type, base_power: u8) -> MoveData {
    MoveData {
        name: name.to_owned(),
        primary_type: typ,
        category: MoveCategory::Physical,
        base_power,
        flags: Default::default(),
    }
}

/// A trivial move.
pub fn basic_move(name: &str, typ: Type) -> MoveData {
    MoveData {
        name: name.to_owned(),
        primary_type: typ,
        category: MoveCategory::Status,
        base_power: 0,
        flags: [MoveFlag::Basic].into(),
    }
}

fn learnset(entries: &[(u8, &[&str])]) -> LearnSet {
    LearnSet::from_entries(entries.iter().map(|(level, moves)| LearnSetEntry {
        level: *level,
        moves: moves.iter().map(|name| Id::from(*name)).collect(),
    }))
}

/// An archetype with no constraints beyond a team size range.
pub fn archetype(name: &str, min: u8, max: u8) -> ArchetypeData {
    ArchetypeData {
        name: name.to_owned(),
        required_types: Vec::new(),
        preferred_types: Vec::new(),
        team_size: TeamSizeRange { min, max },
        level_modifiers: Default::default(),
        max_evolution_stage: 3,
        bst_range: None,
        allow_exotic_evolutions: false,
        preferred_habitats: Vec::new(),
        terrain: Terrain::Any,
        excluded_tiers: Default::default(),
        legendary_policy: LegendaryPolicy::Exclude,
    }
}

/// A small data store covering a handful of evolution lines from every generation.
pub fn fixture_store() -> MemoryDataStore {
    use Habitat::*;
    use Type::*;

    let mut mapping = HabitatMapping::default();
    mapping.insert("Petalburg Woods", vec![Forest]);
    mapping.insert("Route 104", vec![Grassland, WatersEdge]);
    mapping.insert("Granite Cave", vec![Cave]);
    mapping.insert("Sky Pillar", vec![]);

    let mut bug_catcher = archetype("Bug Catcher", 1, 3);
    bug_catcher.required_types = vec![Bug];
    bug_catcher.terrain = Terrain::Land;
    bug_catcher.max_evolution_stage = 2;
    bug_catcher.preferred_habitats = vec![Forest];

    let mut hiker = archetype("Hiker", 2, 4);
    hiker.preferred_types = vec![Rock, Ground];
    hiker.terrain = Terrain::Land;
    hiker.preferred_habitats = vec![Mountain, Cave];

    let mut swimmer = archetype("Swimmer", 1, 3);
    swimmer.preferred_types = vec![Water];
    swimmer.terrain = Terrain::Water;
    swimmer.preferred_habitats = vec![Sea];

    let mut ace_trainer = archetype("Ace Trainer", 3, 6);
    ace_trainer.allow_exotic_evolutions = true;
    ace_trainer.level_modifiers.ace_bonus = 2;

    let mut dragon_tamer = archetype("Dragon Tamer", 1, 4);
    dragon_tamer.required_types = vec![Dragon];

    let mut fledgling = archetype("Fledgling", 1, 2);
    fledgling.max_evolution_stage = 1;
    fledgling.bst_range = Some(BstRange { min: 0, max: 320 });

    let mut broken = archetype("Broken", 5, 2);
    broken.max_evolution_stage = 0;

    MemoryDataStore::new()
        .with_species(evolves(species("Pidgey", 16, &[Normal, Flying], 251, &[Forest, Grassland]), "Pidgeotto", 18))
        .with_species(evolves(species("Pidgeotto", 17, &[Normal, Flying], 349, &[Forest]), "Pidgeot", 36))
        .with_species(species("Pidgeot", 18, &[Normal, Flying], 479, &[Forest]))
        .with_species(evolves_by(tier(species("Pikachu", 25, &[Electric], 300, &[Forest]), RarityTier::Uncommon), "Raichu", EvolutionMethod::Stone))
        .with_species(tier(species("Raichu", 26, &[Electric], 475, &[Forest]), RarityTier::Rare))
        .with_species(evolves(species("Abra", 63, &[Psychic], 310, &[Urban]), "Kadabra", 16))
        .with_species(evolves_by(species("Kadabra", 64, &[Psychic], 400, &[Urban]), "Alakazam", EvolutionMethod::Trade))
        .with_species(species("Alakazam", 65, &[Psychic], 500, &[Urban]))
        .with_species(evolves(species("Geodude", 74, &[Rock, Ground], 300, &[Cave, Mountain]), "Graveler", 25))
        .with_species(evolves_by(species("Graveler", 75, &[Rock, Ground], 390, &[Cave, Mountain]), "Golem", EvolutionMethod::Trade))
        .with_species(species("Golem", 76, &[Rock, Ground], 495, &[Mountain]))
        .with_species(evolves(species("Magikarp", 129, &[Water], 200, &[Sea, WatersEdge]), "Gyarados", 20))
        .with_species(tier(species("Gyarados", 130, &[Water, Flying], 540, &[Sea]), RarityTier::Rare))
        .with_species(evolves(species("Sentret", 161, &[Normal], 215, &[Grassland]), "Furret", 15))
        .with_species(species("Furret", 162, &[Normal], 415, &[Grassland]))
        .with_species(evolves(species("Poochyena", 261, &[Dark], 220, &[Grassland]), "Mightyena", 18))
        .with_species(species("Mightyena", 262, &[Dark], 420, &[Grassland]))
        .with_species(evolves(species("Zigzagoon", 263, &[Normal], 240, &[Grassland]), "Linoone", 20))
        .with_species(species("Linoone", 264, &[Normal], 420, &[Grassland]))
        .with_species(evolves(evolves(species("Wurmple", 265, &[Bug], 195, &[Forest]), "Silcoon", 7), "Cascoon", 7))
        .with_species(species("Silcoon", 266, &[Bug], 205, &[Forest]))
        .with_species(species("Cascoon", 268, &[Bug], 205, &[Forest]))
        .with_species(evolves(species("Lotad", 270, &[Water, Grass], 220, &[WatersEdge]), "Lombre", 14))
        .with_species(evolves_by(species("Lombre", 271, &[Water, Grass], 340, &[WatersEdge]), "Ludicolo", EvolutionMethod::Stone))
        .with_species(species("Ludicolo", 272, &[Water, Grass], 480, &[WatersEdge]))
        .with_species(evolves(species("Taillow", 276, &[Normal, Flying], 270, &[Grassland]), "Swellow", 22))
        .with_species(species("Swellow", 277, &[Normal, Flying], 430, &[Grassland]))
        .with_species(evolves(species("Wingull", 278, &[Water, Flying], 270, &[Sea]), "Pelipper", 25))
        .with_species(species("Pelipper", 279, &[Water, Flying], 430, &[Sea]))
        .with_species(evolves(tier(species("Bagon", 371, &[Dragon], 300, &[Mountain]), RarityTier::Rare), "Shelgon", 30))
        .with_species(evolves(tier(species("Shelgon", 372, &[Dragon], 420, &[Mountain]), RarityTier::Rare), "Salamence", 50))
        .with_species(tier(species("Salamence", 373, &[Dragon, Flying], 600, &[Mountain]), RarityTier::Rare))
        .with_species({
            let mut rayquaza = tier(species("Rayquaza", 384, &[Dragon, Flying], 680, &[Rare]), RarityTier::Legendary);
            rayquaza.legendary = true;
            rayquaza
        })
        .with_species(species("???", 0, &[Normal], 0, &[Forest]))
        .with_move(damaging_move("Tackle", Normal, 35))
        .with_move(basic_move("Growl", Normal))
        .with_move(basic_move("Sand-Attack", Ground))
        .with_move(basic_move("String Shot", Bug))
        .with_move(damaging_move("Headbutt", Normal, 70))
        .with_move(damaging_move("Gust", Flying, 40))
        .with_move(damaging_move("Wing Attack", Flying, 60))
        .with_move(damaging_move("Bite", Dark, 60))
        .with_move(damaging_move("Rock Throw", Rock, 50))
        .with_move(damaging_move("Magnitude", Ground, 70))
        .with_move(damaging_move("Absorb", Grass, 20))
        .with_move(damaging_move("Water Gun", Water, 40))
        .with_learnset("Pidgey", learnset(&[(1, &["Tackle"]), (5, &["Sand-Attack"]), (9, &["Gust"]), (13, &["Quick Attack"])]))
        .with_learnset("Pidgeotto", learnset(&[(1, &["Tackle", "Sand-Attack", "Gust"]), (31, &["Wing Attack"])]))
        .with_learnset("Zigzagoon", learnset(&[(1, &["Tackle", "Growl"]), (17, &["Headbutt"])]))
        .with_learnset("Wurmple", learnset(&[(1, &["Tackle", "String Shot"])]))
        .with_learnset("Geodude", learnset(&[(1, &["Tackle"]), (6, &["Defense Curl"]), (11, &["Rock Throw"]), (16, &["Magnitude"])]))
        .with_legacy_moveset("Lotad", learnset(&[(1, &["Astonish", "Growl"]), (3, &["Absorb"]), (7, &["Water Gun"])]))
        .with_archetype(bug_catcher)
        .with_archetype(hiker)
        .with_archetype(swimmer)
        .with_archetype(ace_trainer)
        .with_archetype(dragon_tamer)
        .with_archetype(fledgling)
        .with_archetype(archetype("Youngster", 1, 3))
        .with_archetype(broken)
        .with_habitat_mapping(mapping)
}

/// A repository built over [`fixture_store`].
pub fn fixture_repository() -> SpeciesRepository {
    SpeciesRepository::new(&fixture_store()).unwrap()
}
