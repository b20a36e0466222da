//! N×N Tic-Tac-Toe board, line analysis and terminal classification

pub mod board;
pub mod game;
pub mod lines;
pub mod outcome;

pub use board::{Board, Cell, Coord, MIN_BOARD_SIZE, Player};
pub use game::{Game, GameOutcome, Move};
pub use lines::{Line, LineAnalyzer};
pub use outcome::Outcome;
