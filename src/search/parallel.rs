//! Root-split search on the rayon pool

use rayon::prelude::*;

use super::{Minimax, SearchResult};
use crate::tictactoe::{Board, Outcome, Player};

/// Search each first move of `maximizer` on its own copy of `board`.
///
/// Branch results are merged in row-major order with the same strict
/// comparison as [`Minimax`], so the chosen move does not depend on which
/// worker finishes first.
pub fn search(board: &Board, maximizer: Player) -> SearchResult {
    if let Some(outcome) = Outcome::terminal(board, maximizer) {
        return SearchResult {
            score: outcome.score(),
            best_move: None,
            nodes: 1,
            max_depth: 0,
        };
    }

    let candidates: Vec<usize> = board
        .cells()
        .iter()
        .enumerate()
        .filter(|&(_, &cell)| cell == crate::tictactoe::Cell::Empty)
        .map(|(index, _)| index)
        .collect();

    // Indexed collect keeps candidate order regardless of scheduling
    let branches: Vec<(usize, i32, u64, usize)> = candidates
        .par_iter()
        .map(|&index| {
            let mut local = board.clone();
            let mut engine = Minimax::new(maximizer);
            let value = {
                let mut placed = local.occupy(index, maximizer);
                engine.value(&mut placed, maximizer.opponent(), 1).0
            };
            (index, value, engine.nodes(), engine.max_depth())
        })
        .collect();

    let mut result = SearchResult {
        score: i32::MIN,
        best_move: None,
        nodes: 1,
        max_depth: 0,
    };
    for (index, value, nodes, depth) in branches {
        result.nodes += nodes;
        result.max_depth = result.max_depth.max(depth);
        if value > result.score {
            result.score = value;
            result.best_move = Some(board.coord_of(index));
        }
    }

    result
}
