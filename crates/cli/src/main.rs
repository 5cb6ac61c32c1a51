use std::path::PathBuf;

use actman_core::{
    GameState, Outcome, PlaythroughConfig, breadth_first, load_dungeon, random_playthrough,
    write_playthrough_trace, write_search_trace,
};
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Exhaustive breadth-first search for a winning line.
    Search,
    /// Single seeded random playthrough.
    Random,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the dungeon file
    input: PathBuf,
    /// Path the trace is written to
    output: PathBuf,
    #[arg(long, value_enum, default_value_t = Mode::Search)]
    mode: Mode,
    /// Seed for the random mode
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Chance per step of attempting a bullet in the random mode
    #[arg(long, default_value_t = 0.3)]
    fire_probability: f64,
    /// Step budget for the random mode
    #[arg(long, default_value_t = 10_000)]
    max_steps: u32,
    /// Print the run summary as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct RunSummary {
    mode: &'static str,
    outcome: Option<Outcome>,
    score: i32,
    actions: usize,
    /// States expanded in search mode, steps simulated in random mode.
    work: u64,
    snapshot_hash: u64,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let initial = load_dungeon(&args.input)
        .with_context(|| format!("Failed to load dungeon file: {}", args.input.display()))?;

    let summary = match args.mode {
        Mode::Search => run_search(&args, &initial)?,
        Mode::Random => run_random(&args, &initial)?,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("Mode: {}", summary.mode);
        match summary.outcome {
            Some(outcome) => println!("Outcome: {outcome:?}"),
            None => println!("Outcome: undecided"),
        }
        println!("Score: {}", summary.score);
        println!("Actions: {}", summary.actions);
        println!("Work: {}", summary.work);
        println!("Snapshot Hash: {}", summary.snapshot_hash);
    }

    Ok(())
}

fn run_search(args: &Args, initial: &GameState) -> Result<RunSummary> {
    let result = breadth_first(initial);
    write_search_trace(&args.output, &result.state)
        .with_context(|| format!("Failed to write trace to: {}", args.output.display()))?;
    Ok(RunSummary {
        mode: "search",
        outcome: result.outcome,
        score: result.state.score,
        actions: result.state.actions.len(),
        work: result.expanded,
        snapshot_hash: result.state.snapshot_hash(),
    })
}

fn run_random(args: &Args, initial: &GameState) -> Result<RunSummary> {
    let config = PlaythroughConfig {
        fire_probability: args.fire_probability,
        max_steps: args.max_steps,
    };
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let result = random_playthrough(initial, &config, &mut rng);
    write_playthrough_trace(&args.output, &result.state)
        .with_context(|| format!("Failed to write trace to: {}", args.output.display()))?;
    Ok(RunSummary {
        mode: "random",
        outcome: result.outcome,
        score: result.state.score,
        actions: result.state.actions.len(),
        work: u64::from(result.steps),
        snapshot_hash: result.state.snapshot_hash(),
    })
}
