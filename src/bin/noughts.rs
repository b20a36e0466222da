//! noughts CLI - best moves, hints and self-play for N×N tic-tac-toe

use anyhow::Result;
use clap::{Parser, Subcommand};
use noughts::cli::{
    commands::{best_move, classify, hint, selfplay},
    config::GlobalArgs,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "noughts")]
#[command(version, about = "Adversarial search engine for N×N tic-tac-toe", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the computer's move on a board
    BestMove(best_move::BestMoveArgs),

    /// Suggest a move for a player
    Hint(hint::HintArgs),

    /// Classify a board as win, loss or tie
    Classify(classify::ClassifyArgs),

    /// Play a series of games between two agents
    #[command(name = "selfplay")]
    SelfPlay(selfplay::SelfPlayArgs),
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.global.verbose);

    match cli.command {
        Commands::BestMove(args) => best_move::execute(args, &cli.global),
        Commands::Hint(args) => hint::execute(args, &cli.global),
        Commands::Classify(args) => classify::execute(args, &cli.global),
        Commands::SelfPlay(args) => selfplay::execute(args, &cli.global),
    }
}
