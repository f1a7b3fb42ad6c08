use anyhow::{bail, Result};
use clap::Parser;
use tessella_core::{init_logging, SimConfig, StartPattern};
use tessella_io::HistoryLogger;
use tessella_lib::runner::Simulation;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Custom config file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Grid side length override
    #[arg(long)]
    size: Option<usize>,

    /// Start pattern (random, glider, pairs, blocks)
    #[arg(short, long)]
    pattern: Option<String>,

    /// RNG seed for reproducible random fills
    #[arg(long)]
    seed: Option<u64>,

    /// Generation count override
    #[arg(short, long)]
    generations: Option<u64>,

    /// Disable toroidal wraparound at the grid edges
    #[arg(long)]
    no_wraparound: bool,

    /// Directory for run history logs
    #[arg(long, default_value = "logs")]
    log_dir: String,

    /// Compress the run log when the run finishes
    #[arg(long)]
    archive: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging();

    let mut config = match std::fs::read_to_string(&args.config) {
        Ok(content) => SimConfig::from_toml(&content)?,
        Err(_) => {
            tracing::warn!(path = %args.config, "Config file not found, using defaults");
            SimConfig::default()
        }
    };

    if let Some(size) = args.size {
        config.grid_size = size;
    }
    if let Some(pattern) = &args.pattern {
        config.pattern = match pattern.to_lowercase().as_str() {
            "random" => StartPattern::Random,
            "glider" => StartPattern::Glider,
            "pairs" | "diagonal-pairs" => StartPattern::DiagonalPairs,
            "blocks" | "twin-blocks" => StartPattern::TwinBlocks,
            other => bail!("Unknown start pattern: {other}"),
        };
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if let Some(generations) = args.generations {
        config.max_generations = generations;
    }
    if args.no_wraparound {
        config.wraparound = false;
    }

    let logger = HistoryLogger::new_at(&args.log_dir)?;
    let mut sim = Simulation::new(config, logger)?;
    tracing::info!(
        size = sim.config().grid_size,
        pattern = ?sim.config().pattern,
        seed = sim.seed(),
        wraparound = sim.config().wraparound,
        "Starting run"
    );

    let summary = sim.run()?;

    println!("Generations:        {}", summary.generations);
    println!("Average stability:  {:.4}", summary.mean_stability);
    println!("Stability std dev:  {:.4}", summary.stddev_stability);
    println!("Final alive ratio:  {:.4}", summary.final_alive_fraction);

    if args.archive {
        let path = HistoryLogger::new_at(&args.log_dir)?.archive()?;
        println!("Run log archived to {path}");
    }

    Ok(())
}
