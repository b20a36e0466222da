//! Minimax with alpha-beta cut-offs

use super::SearchResult;
use crate::tictactoe::{Board, Cell, Outcome, Player};

/// Pruned minimax.
///
/// Returns the same value and root move as [`super::Minimax`]: at the root
/// each candidate is searched with the best value so far as its lower bound,
/// so a pruned candidate can only come back `<=` that value and never
/// replaces an earlier cell.
#[derive(Debug, Clone)]
pub struct AlphaBeta {
    maximizer: Player,
    nodes: u64,
    max_depth: usize,
}

impl AlphaBeta {
    pub fn new(maximizer: Player) -> Self {
        Self {
            maximizer,
            nodes: 0,
            max_depth: 0,
        }
    }

    /// Search `board` with the maximiser to move
    pub fn search(mut self, board: &mut Board) -> SearchResult {
        self.nodes += 1;

        if let Some(outcome) = Outcome::terminal(board, self.maximizer) {
            return SearchResult {
                score: outcome.score(),
                best_move: None,
                nodes: self.nodes,
                max_depth: 0,
            };
        }

        let best_possible = Outcome::Win.score();
        let mut best_value = i32::MIN;
        let mut best_index = None;

        for index in 0..board.cells().len() {
            if board.cells()[index] != Cell::Empty {
                continue;
            }

            let value = {
                let mut placed = board.occupy(index, self.maximizer);
                self.value(
                    &mut placed,
                    self.maximizer.opponent(),
                    1,
                    best_value,
                    i32::MAX,
                )
            };

            if value > best_value {
                best_value = value;
                best_index = Some(index);
            }
            if best_value == best_possible {
                break;
            }
        }

        SearchResult {
            score: best_value,
            best_move: best_index.map(|index| board.coord_of(index)),
            nodes: self.nodes,
            max_depth: self.max_depth,
        }
    }

    fn value(
        &mut self,
        board: &mut Board,
        mover: Player,
        depth: usize,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.nodes += 1;
        self.max_depth = self.max_depth.max(depth);

        if let Some(outcome) = Outcome::terminal(board, self.maximizer) {
            return outcome.score();
        }

        let maximizing = mover == self.maximizer;
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for index in 0..board.cells().len() {
            if board.cells()[index] != Cell::Empty {
                continue;
            }

            let value = {
                let mut placed = board.occupy(index, mover);
                self.value(&mut placed, mover.opponent(), depth + 1, alpha, beta)
            };

            if maximizing {
                best = best.max(value);
                alpha = alpha.max(value);
            } else {
                best = best.min(value);
                beta = beta.min(value);
            }
            if alpha >= beta {
                break;
            }
        }

        best
    }
}
