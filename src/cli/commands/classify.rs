//! Classify command - outcome of a board for one player

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use crate::{
    cli::{
        config::{GlobalArgs, parse_board, parse_player_token},
        output::{print_board, print_json, print_kv, print_section},
    },
    tictactoe::{Outcome, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Classify a board as win, loss or tie")]
pub struct ClassifyArgs {
    /// Board, rows separated by '/' (e.g. "XOX/XOO/OXX")
    #[arg(long, short = 'b')]
    pub board: String,

    /// Reference player (`x` or `o`)
    #[arg(long, short = 'p', default_value = "x")]
    pub player: String,
}

#[derive(Debug, Serialize)]
struct ClassifyReport {
    board: String,
    player: Player,
    terminal: bool,
    outcome: Option<Outcome>,
    winner: Option<Player>,
}

/// Open boards are reported as non-terminal rather than failing
pub fn execute(args: ClassifyArgs, global: &GlobalArgs) -> Result<()> {
    let board = parse_board(&args.board)?;
    let player = parse_player_token(&args.player, "--player")?;

    let report = ClassifyReport {
        board: board.encode(),
        player,
        terminal: board.is_terminal(),
        outcome: Outcome::terminal(&board, player),
        winner: board.winner(),
    };

    if global.json {
        return print_json(&report);
    }

    print_section(&format!("Board from {player}'s side"));
    print_board(&board);
    println!();
    print_kv("Terminal", if report.terminal { "yes" } else { "no" });
    match report.outcome {
        Some(outcome) => print_kv("Outcome", &format!("{outcome:?}")),
        None => print_kv("Outcome", "game still open"),
    }
    if let Some(winner) = report.winner {
        print_kv("Winner", &winner.to_string());
    }

    Ok(())
}
