//! Exhaustive minimax with in-place place/undo

use super::SearchResult;
use crate::tictactoe::{Board, Cell, Outcome, Player};

/// Plain minimax over every continuation of a position.
///
/// The board is walked in place: each branch marks a cell through a scoped
/// placement that clears it again when the branch returns, so the caller's
/// board comes back unchanged.
#[derive(Debug, Clone)]
pub struct Minimax {
    maximizer: Player,
    nodes: u64,
    max_depth: usize,
}

impl Minimax {
    pub fn new(maximizer: Player) -> Self {
        Self {
            maximizer,
            nodes: 0,
            max_depth: 0,
        }
    }

    /// Search `board` with the maximiser to move
    pub fn search(mut self, board: &mut Board) -> SearchResult {
        let (score, best) = self.value(board, self.maximizer, 0);
        SearchResult {
            score,
            best_move: best.map(|index| board.coord_of(index)),
            nodes: self.nodes,
            max_depth: self.max_depth,
        }
    }

    /// Score `board` with `mover` to play.
    ///
    /// Returns the value and the row-major index of the first cell reaching
    /// it, or `None` for the index when the board is terminal.
    pub(crate) fn value(
        &mut self,
        board: &mut Board,
        mover: Player,
        depth: usize,
    ) -> (i32, Option<usize>) {
        self.nodes += 1;
        self.max_depth = self.max_depth.max(depth);

        if let Some(outcome) = Outcome::terminal(board, self.maximizer) {
            return (outcome.score(), None);
        }

        let maximizing = mover == self.maximizer;
        let mut best_value = if maximizing { i32::MIN } else { i32::MAX };
        let mut best_index = None;

        for index in 0..board.cells().len() {
            if board.cells()[index] != Cell::Empty {
                continue;
            }

            let value = {
                let mut placed = board.occupy(index, mover);
                self.value(&mut placed, mover.opponent(), depth + 1).0
            };

            // Strict comparison: earlier cells keep ties
            let improves = if maximizing {
                value > best_value
            } else {
                value < best_value
            };
            if improves {
                best_value = value;
                best_index = Some(index);
            }
        }

        (best_value, best_index)
    }

    pub(crate) fn nodes(&self) -> u64 {
        self.nodes
    }

    pub(crate) fn max_depth(&self) -> usize {
        self.max_depth
    }
}
