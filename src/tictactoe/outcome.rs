//! Terminal-board classification

use serde::{Deserialize, Serialize};

use super::{Board, Player};
use crate::{Error, Result};

/// Result of a finished game, seen from a reference player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Loss,
    Tie,
}

impl Outcome {
    /// Classify a terminal board for `reference`.
    ///
    /// The reference player's line is checked first, so a board where both
    /// sides hold a line (unreachable in play) is a `Win`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotTerminal`] if the game on `board` is still open.
    pub fn classify(board: &Board, reference: Player) -> Result<Outcome> {
        Self::terminal(board, reference).ok_or(Error::NotTerminal)
    }

    /// Classify `board` if it is terminal, in one pass over the lines.
    ///
    /// Returns `None` exactly when [`Board::is_terminal`] is false.
    pub fn terminal(board: &Board, reference: Player) -> Option<Outcome> {
        if board.has_line(reference) {
            Some(Outcome::Win)
        } else if board.has_line(reference.opponent()) {
            Some(Outcome::Loss)
        } else if !board.has_empty() {
            Some(Outcome::Tie)
        } else {
            None
        }
    }

    /// Search value: Win → +1, Tie → 0, Loss → −1
    pub fn score(self) -> i32 {
        match self {
            Outcome::Win => 1,
            Outcome::Tie => 0,
            Outcome::Loss => -1,
        }
    }

    /// The same result seen from the other player
    pub fn flip(self) -> Self {
        match self {
            Outcome::Win => Outcome::Loss,
            Outcome::Loss => Outcome::Win,
            Outcome::Tie => Outcome::Tie,
        }
    }
}

impl Board {
    /// Classify this board for `reference`; see [`Outcome::classify`].
    pub fn classify(&self, reference: Player) -> Result<Outcome> {
        Outcome::classify(self, reference)
    }
}
