//! High-level game management

use serde::{Deserialize, Serialize};

use super::board::{Board, Coord, Player};
use crate::{Error, Result};

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub coord: Coord,
    pub player: Player,
}

/// Outcome of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

/// A game in progress or finished, with its history
#[derive(Debug, Clone, Serialize)]
pub struct Game {
    board: Board,
    first_player: Player,
    to_move: Player,
    moves: Vec<Move>,
    outcome: Option<GameOutcome>,
}

impl Game {
    /// Start a game on an empty `size`×`size` board.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BoardTooSmall`] when `size < 3`.
    pub fn new(size: usize, first_player: Player) -> Result<Self> {
        Ok(Game {
            board: Board::new(size)?,
            first_player,
            to_move: first_player,
            moves: Vec::new(),
            outcome: None,
        })
    }

    /// Play a move for the side to move
    pub fn play(&mut self, coord: Coord) -> Result<()> {
        if self.outcome.is_some() {
            return Err(Error::GameOver);
        }

        let player = self.to_move;
        self.board.place(coord, player)?;
        self.moves.push(Move { coord, player });
        self.to_move = player.opponent();

        if self.board.is_terminal() {
            self.outcome = Some(match self.board.winner() {
                Some(winner) => GameOutcome::Win(winner),
                None => GameOutcome::Draw,
            });
        }

        Ok(())
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn first_player(&self) -> Player {
        self.first_player
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// `None` while the game is still open
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }
}
