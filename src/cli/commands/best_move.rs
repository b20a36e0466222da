//! Best-move command - the computer's move at the configured difficulty

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use crate::{
    cli::{
        config::{GlobalArgs, parse_board, parse_player_token},
        output::{format_move, format_number, print_board, print_json, print_kv, print_section},
    },
    config::Difficulty,
    search::SearchStrategy,
    tictactoe::{Coord, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Compute the computer's move on a board")]
pub struct BestMoveArgs {
    /// Board, rows separated by '/' (e.g. "XX./OO./...")
    #[arg(long, short = 'b')]
    pub board: String,

    /// Side to move (`x` or `o`)
    #[arg(long, short = 'm', default_value = "x")]
    pub mover: String,
}

#[derive(Debug, Serialize)]
struct BestMoveReport {
    board: String,
    mover: Player,
    best_move: Option<Coord>,
    /// `None` when the move was picked at random
    score: Option<i32>,
    nodes: Option<u64>,
    strategy: Option<SearchStrategy>,
}

pub fn execute(args: BestMoveArgs, global: &GlobalArgs) -> Result<()> {
    let mut board = parse_board(&args.board)?;
    let mover = parse_player_token(&args.mover, "--mover")?;
    let engine = global.engine()?;

    let searched = engine.config().difficulty == Difficulty::Hard
        && engine.supports_exhaustive(board.size())
        && !board.is_terminal();

    let report = if searched {
        let result = engine.search(&mut board, mover)?;
        BestMoveReport {
            board: board.encode(),
            mover,
            best_move: result.best_move,
            score: Some(result.score),
            nodes: Some(result.nodes),
            strategy: Some(engine.strategy()),
        }
    } else {
        let mut rng = engine.config().rng();
        let best_move = engine.choose_move(&mut board, mover, &mut rng)?;
        BestMoveReport {
            board: board.encode(),
            mover,
            best_move,
            score: None,
            nodes: None,
            strategy: None,
        }
    };

    if global.json {
        return print_json(&report);
    }

    print_section(&format!("Best move for {mover}"));
    print_board(&board);
    println!();
    print_kv("Move", &format_move(report.best_move));
    match (report.score, report.nodes, report.strategy) {
        (Some(score), Some(nodes), Some(strategy)) => {
            print_kv("Score", &score.to_string());
            print_kv("Nodes", &format_number(nodes));
            print_kv("Strategy", strategy.name());
        }
        _ => print_kv("Selection", "random"),
    }

    Ok(())
}
