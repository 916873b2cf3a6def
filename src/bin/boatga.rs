//! Command line front end: `boatga stash` writes a generated stash to JSON,
//! `boatga run` loads one and evolves a boat from it.

use std::path::PathBuf;

use boatga::{
    evolution::{EvolutionLauncherBuilder, EvolutionOptions, FileSink, Tee, TracingSink},
    item::Category,
    pool::ItemPool,
    rng::RandomNumberGenerator,
    stash::{generate_stash, load_stash, save_stash, StashConfig},
};
use clap::{Args, Parser, Subcommand};
use tracing::info;

#[derive(Parser)]
#[command(name = "boatga")]
#[command(about = "Evolves a light boat out of a finite stash of materials")]
struct Cli {
    /// Logging level
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a stash and write it as JSON
    Stash(StashArgs),
    /// Evolve a boat from a stash file
    Run(RunArgs),
}

#[derive(Args)]
struct StashArgs {
    /// Output file
    #[arg(short, long, default_value = "stash.json")]
    output: PathBuf,

    #[arg(long, default_value = "1000")]
    wood: usize,

    #[arg(long, default_value = "10000")]
    rope: usize,

    #[arg(long, default_value = "100000")]
    leaf: usize,

    #[arg(long, default_value = "0")]
    metal: usize,

    /// Seed for a reproducible stash
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Args)]
struct RunArgs {
    /// Stash file to draw from
    #[arg(short, long, default_value = "stash.json")]
    stash: PathBuf,

    /// Log file the progress lines are appended to
    #[arg(short, long, default_value = "output.txt")]
    output: PathBuf,

    #[arg(long, default_value = "100000")]
    min_area: f64,

    #[arg(long, default_value = "1.0")]
    max_density: f64,

    /// Must be even
    #[arg(long, default_value = "40")]
    population: usize,

    #[arg(long, default_value = "100")]
    required_improvements: usize,

    /// Stop after this many generations even if the target is not met (default 10000)
    #[arg(long)]
    max_generations: Option<usize>,

    /// Exponent k of the `area / density^k` fitness
    #[arg(long, default_value = "2", conflicts_with = "inverse_density")]
    exponent: i32,

    /// Score boats as `1 / density` instead
    #[arg(long)]
    inverse_density: bool,

    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,
}

fn rng_from(seed: Option<u64>) -> RandomNumberGenerator {
    seed.map_or_else(RandomNumberGenerator::new, RandomNumberGenerator::from_seed)
}

fn stash(args: StashArgs) -> boatga::Result<()> {
    let config = StashConfig::new(
        [
            (Category::Wood, args.wood),
            (Category::Rope, args.rope),
            (Category::Leaf, args.leaf),
            (Category::Metal, args.metal),
        ]
        .into_iter()
        .filter(|(_, count)| *count > 0)
        .collect(),
    );
    let items = generate_stash(&config, &mut rng_from(args.seed));
    save_stash(&args.output, &items)?;
    info!(items = items.len(), path = %args.output.display(), "Stash written");
    Ok(())
}

fn run(args: RunArgs) -> boatga::Result<()> {
    let mut pool = ItemPool::new(load_stash(&args.stash)?)?;
    info!(items = pool.len(), path = %args.stash.display(), "Stash loaded");

    let mut options = EvolutionOptions::builder()
        .min_area(args.min_area)
        .max_density(args.max_density)
        .population_size(args.population)
        .required_improvements(args.required_improvements)
        .build();
    if let Some(cap) = args.max_generations {
        options.set_max_generations(Some(cap));
    }

    let mut builder = EvolutionLauncherBuilder::standard();
    builder = if args.inverse_density {
        builder.with_inverse_density()
    } else {
        builder.with_fitness_exponent(args.exponent)
    };
    let launcher = builder.build()?;

    let mut sink = Tee::new(TracingSink, FileSink::append(&args.output)?);
    let result = launcher.run(&options, &mut pool, &mut sink, &mut rng_from(args.seed))?;

    info!(
        best = result.best.id(),
        improvements = result.improvements,
        generations = result.generations,
        termination = ?result.termination,
        "Done"
    );
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let log_level = match cli.log_level.as_str() {
        "trace" => tracing::Level::TRACE,
        "debug" => tracing::Level::DEBUG,
        "warn" => tracing::Level::WARN,
        "error" => tracing::Level::ERROR,
        _ => tracing::Level::INFO,
    };
    tracing_subscriber::fmt().with_max_level(log_level).init();

    match cli.command {
        Command::Stash(args) => stash(args)?,
        Command::Run(args) => run(args)?,
    }
    Ok(())
}
