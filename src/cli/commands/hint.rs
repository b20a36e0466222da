//! Hint command - suggest a move for a human player
//!
//! Boards above the exhaustive threshold get a random empty cell.

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use crate::{
    cli::{
        config::{GlobalArgs, parse_board, parse_player_token},
        output::{format_move, print_board, print_json, print_kv, print_section},
    },
    tictactoe::{Coord, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Suggest a move for a player")]
pub struct HintArgs {
    /// Board, rows separated by '/' (e.g. "XX./OO./...")
    #[arg(long, short = 'b')]
    pub board: String,

    /// Player asking for the hint (`x` or `o`)
    #[arg(long, short = 'p', default_value = "x")]
    pub player: String,
}

#[derive(Debug, Serialize)]
struct HintReport {
    board: String,
    player: Player,
    hint: Option<Coord>,
}

pub fn execute(args: HintArgs, global: &GlobalArgs) -> Result<()> {
    let mut board = parse_board(&args.board)?;
    let player = parse_player_token(&args.player, "--player")?;
    let engine = global.engine()?;

    let mut rng = engine.config().rng();
    let hint = engine.suggest_move(&mut board, player, &mut rng)?;
    let report = HintReport {
        board: board.encode(),
        player,
        hint,
    };

    if global.json {
        return print_json(&report);
    }

    print_section(&format!("Hint for {player}"));
    print_board(&board);
    println!();
    print_kv("Suggested move", &format_move(hint));

    Ok(())
}
