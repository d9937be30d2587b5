//! slide - sliding-tile puzzle search from the command line
//!
//! - `solve`: run the single-agent strategies on a board file
//! - `duel`: score a two-agent position with alpha-beta minimax
//! - `scramble`: print a solvable board from a seeded random walk

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{info, warn};

use slide_search::duel::{DuelState, Minimax, Side};
use slide_search::io::{read_board, write_duel_report, write_file, write_search_outcomes};
use slide_search::puzzle::{scramble_batch, PuzzleState, Variant};
use slide_search::search::{Solver, Strategy};
use slide_search::Config;

#[derive(Parser)]
#[command(name = "slide")]
#[command(version, about = "Search engines for 3x3 sliding-tile puzzles", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a puzzle with each configured strategy
    Solve(SolveArgs),

    /// Score a two-agent duel position
    Duel(DuelArgs),

    /// Print a solvable scrambled board
    Scramble(ScrambleArgs),
}

#[derive(clap::Args)]
struct SolveArgs {
    /// Board file (three rows of three digits)
    input: PathBuf,

    /// Result file, truncated before writing
    output: PathBuf,

    #[arg(long, short = 'v', default_value = "classic")]
    variant: Variant,

    /// Strategy to run; repeat for several (default: all five in order)
    #[arg(long = "strategy", short = 's')]
    strategies: Vec<Strategy>,

    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(clap::Args)]
struct DuelArgs {
    /// Side that moves first (1 or 2)
    first: Side,

    /// Board file
    input: PathBuf,

    /// Result file
    output: PathBuf,

    /// Search depth in plies
    #[arg(long, short = 'd')]
    depth: Option<u32>,

    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(clap::Args)]
struct ScrambleArgs {
    #[arg(long, short = 'v', default_value = "classic")]
    variant: Variant,

    /// Random moves away from the goal
    #[arg(long, short = 'm', default_value_t = 30)]
    moves: usize,

    /// Boards to print, separated by blank lines
    #[arg(long, short = 'n', default_value_t = 1)]
    count: usize,

    #[arg(long, default_value_t = 42)]
    seed: u64,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Solve(args) => solve(args),
        Commands::Duel(args) => duel(args),
        Commands::Scramble(args) => scramble(args),
    }
}

fn solve(args: SolveArgs) -> Result<()> {
    let mut config = Config::load_or_default(args.config.as_deref())?;
    if !args.strategies.is_empty() {
        config.search.strategies = args.strategies;
    }

    let board = read_board(&args.input)?;
    let initial = PuzzleState::new(board, args.variant)
        .with_context(|| format!("{} is not a {} board", args.input.display(), args.variant))?;
    if args.variant == Variant::Classic && !initial.is_solvable() {
        warn!("board has odd inversion parity; no strategy can solve it");
    }

    let outcomes = Solver::new(config.search).run_all(&initial);
    write_file(&args.output, |w| write_search_outcomes(w, args.variant, &outcomes))
        .with_context(|| format!("writing {}", args.output.display()))?;

    let solved = outcomes.iter().filter(|o| o.is_solved()).count();
    info!(
        "{solved}/{} strategies solved, results in {}",
        outcomes.len(),
        args.output.display()
    );
    Ok(())
}

fn duel(args: DuelArgs) -> Result<()> {
    let mut config = Config::load_or_default(args.config.as_deref())?.duel;
    if let Some(depth) = args.depth {
        config.depth = depth;
    }

    let board = read_board(&args.input)?;
    let root = DuelState::new(board, args.first, &config.layout)
        .with_context(|| format!("{} is not a duel board", args.input.display()))?;

    let report = Minimax::new(config).search(&root);
    write_file(&args.output, |w| write_duel_report(w, &report))
        .with_context(|| format!("writing {}", args.output.display()))?;
    Ok(())
}

fn scramble(args: ScrambleArgs) -> Result<()> {
    let boards = scramble_batch(args.variant, args.moves, args.count, args.seed);
    let text: Vec<String> = boards.iter().map(ToString::to_string).collect();
    print!("{}", text.join("\n"));
    Ok(())
}
