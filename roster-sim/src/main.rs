use std::{
    path::PathBuf,
    str::FromStr,
};

use anyhow::{
    Error,
    Result,
};
use clap::Parser;
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
        Difficulty,
        GenerationRequest,
    },
};
use roster_local_data::LocalDataStore;
use roster_prng::RealPseudoRandomNumberGenerator;
use tracing_subscriber::EnvFilter;

/// Generates a trainer team and prints it as JSON.
///
/// Examples:
///   roster-sim --archetype "Bug Catcher" --habitat "Petalburg Woods" --level-min 5 --level-max 9
///   roster-sim --archetype Swimmer --habitat Sea --level-min 30 --level-max 35 --difficulty Hard
#[derive(Parser, Debug)]
#[command(name = "roster-sim")]
#[command(version)]
#[command(about, long_about = None)]
struct Cli {
    /// Directory holding the data set.
    #[arg(long, value_name = "DIR", default_value = "roster-local-data/data")]
    data_dir: PathBuf,

    /// Generator configuration file. Missing fields keep their defaults.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Trainer archetype name.
    #[arg(short, long)]
    archetype: Option<String>,

    /// Habitat or location tag. May be repeated.
    #[arg(long = "habitat", value_name = "TAG")]
    habitats: Vec<String>,

    #[arg(long, default_value = "10")]
    level_min: u8,

    #[arg(long, default_value = "15")]
    level_max: u8,

    /// Easy, Normal, Hard, or Expert.
    #[arg(short, long, default_value = "Normal")]
    difficulty: String,

    /// Exact team size, overriding the archetype's range.
    #[arg(long)]
    team_size: Option<u8>,

    /// Oldest generation to draw from.
    #[arg(long, default_value = "Gen1")]
    oldest: String,

    /// Newest generation to draw from.
    #[arg(long, default_value = "Gen3")]
    newest: String,

    /// Seed for a replayable team.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print every archetype name and exit.
    #[arg(long)]
    list_archetypes: bool,

    /// Print compact JSON.
    #[arg(long)]
    compact: bool,
}

fn parse_generation(value: &str) -> Result<Generation> {
    Generation::from_str(value).map_err(|_| Error::msg(format!("invalid generation: {value}")))
}

fn request(cli: &Cli, archetype: &str) -> Result<GenerationRequest> {
    let difficulty = Difficulty::from_str(&cli.difficulty)
        .map_err(|_| Error::msg(format!("invalid difficulty: {}", cli.difficulty)))?;
    let scope = GenerationScope {
        oldest: parse_generation(&cli.oldest)?,
        newest: parse_generation(&cli.newest)?,
    };
    let mut request = GenerationRequest::new(
        archetype,
        cli.habitats.iter().cloned(),
        cli.level_min,
        cli.level_max,
    )
    .with_difficulty(difficulty)
    .with_scope(scope);
    if let Some(team_size) = cli.team_size {
        request = request.with_team_size(team_size);
    }
    Ok(request)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("roster=info".parse()?)
                .add_directive("roster_local_data=info".parse()?)
                .add_directive("roster_sim=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let data = LocalDataStore::new(cli.data_dir.clone())?;
    let repository = SpeciesRepository::new(&data)?;

    if cli.list_archetypes {
        let mut names = repository
            .archetypes()
            .map(|archetype| archetype.name.as_str())
            .collect::<Vec<_>>();
        names.sort();
        for name in names {
            println!("{name}");
        }
        return Ok(());
    }

    let archetype = cli
        .archetype
        .as_deref()
        .ok_or_else(|| Error::msg("--archetype is required"))?;
    let config = match &cli.config {
        Some(path) => GeneratorConfig::from_file(path)?,
        None => GeneratorConfig::default(),
    };
    let index = CandidateIndex::new(&repository);
    let generator = TeamGenerator::new(&repository, &index, config);

    let request = request(&cli, archetype)?;
    let mut prng = RealPseudoRandomNumberGenerator::new(cli.seed);
    let team = generator.generate(&request, &mut prng)?;
    log::info!("Generated {} members with seed {}", team.members.len(), team.seed);

    let output = if cli.compact {
        serde_json::to_string(&team)?
    } else {
        serde_json::to_string_pretty(&team)?
    };
    println!("{output}");
    Ok(())
}
