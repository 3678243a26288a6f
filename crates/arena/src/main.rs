//! Arena CLI
//!
//! Play bot-vs-bot matches and ask a single bot for a move.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use arena::{MatchConfig, MatchRunner};
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;
use varchess_bot::{Bot, Difficulty};
use varchess_core::{create_initial_board, Board, Color};

#[derive(Parser)]
#[command(name = "arena", version, about = "Bot-vs-bot matches on 5x5 to 10x10 boards")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Play a match between two difficulty levels
    Match(MatchArgs),
    /// Print the move a bot would play in a position
    Select(SelectArgs),
}

#[derive(Args)]
struct MatchArgs {
    /// Difficulty playing white in the first game
    first: Difficulty,
    /// Difficulty playing black in the first game
    second: Difficulty,
    /// Number of games
    #[arg(long, short = 'g')]
    games: Option<u32>,
    /// Board size
    #[arg(long, short = 's')]
    size: Option<usize>,
    /// Plies per game before it is scored as a draw
    #[arg(long)]
    max_plies: Option<u32>,
    #[arg(long)]
    seed: Option<u64>,
    /// TOML match configuration; flags override its values
    #[arg(long)]
    config: Option<PathBuf>,
    /// Write the JSON report here
    #[arg(long)]
    report: Option<PathBuf>,
    /// Only log the final result
    #[arg(long, short = 'q')]
    quiet: bool,
}

#[derive(Args)]
struct SelectArgs {
    /// Board size for the kings-only starting board
    #[arg(long, short = 's')]
    size: Option<usize>,
    /// Position in layout notation, e.g. "2k2/5/5/QR3/2K2"
    #[arg(long, short = 'l')]
    layout: Option<String>,
    #[arg(long, default_value = "white")]
    side: Color,
    #[arg(long, short = 'd', default_value = "medium")]
    difficulty: Difficulty,
    #[arg(long)]
    seed: Option<u64>,
}

fn run_match(args: MatchArgs) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => MatchConfig::load(path)
            .with_context(|| format!("loading match config {}", path.display()))?,
        None => MatchConfig::default(),
    };
    if let Some(games) = args.games {
        config.num_games = games;
    }
    if let Some(size) = args.size {
        config.board_size = size;
    }
    if let Some(max_plies) = args.max_plies {
        config.max_plies = max_plies;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if args.quiet {
        config.verbose = false;
    }

    let runner = MatchRunner::new(config)?;
    let report = runner.run_match(args.first, args.second)?;
    println!("{}", report.generate_report());

    if let Some(path) = args.report {
        report
            .save(&path)
            .with_context(|| format!("saving report to {}", path.display()))?;
        info!(path = %path.display(), "report saved");
    }
    Ok(())
}

fn run_select(args: SelectArgs) -> Result<()> {
    let board = match (&args.layout, args.size) {
        (Some(layout), size) => {
            let board = Board::from_layout(layout)?;
            if let Some(size) = size.filter(|&s| s != board.size() as usize) {
                bail!("layout is {0}x{0} but --size is {size}", board.size());
            }
            board
        }
        (None, size) => create_initial_board(size.unwrap_or(8))?,
    };

    let mut bot = Bot::new(args.difficulty, args.seed);
    match bot.select_move(&board, args.side) {
        Some(mv) => println!("{mv}"),
        None => println!("{} has no legal move", args.side),
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Match(args) => run_match(args),
        Command::Select(args) => run_select(args),
    }
}
