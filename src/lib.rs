//! Adversarial game-tree search for N×N Tic-Tac-Toe
//!
//! This crate provides:
//! - A validated board model and a terminal-state evaluator
//! - Exhaustive minimax, alpha-beta and parallel root-split search with a
//!   deterministic row-major tie-break
//! - An engine façade for best moves, hints and the difficulty switch to a
//!   random fallback
//! - Agents, an arena for engine-vs-engine play and a command-line tool
//!
//! ```
//! use noughts::{Board, Coord, Player, compute_best_move};
//!
//! let mut board = Board::new(3)?;
//! assert_eq!(compute_best_move(&mut board, Player::X)?, Some(Coord::new(0, 0)));
//! # Ok::<(), noughts::Error>(())
//! ```

pub mod agent;
pub mod arena;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod search;
pub mod tictactoe;

pub use agent::{Agent, EngineAgent, RandomAgent};
pub use arena::{Arena, MatchSummary};
pub use config::{Difficulty, EngineConfig};
pub use engine::{Engine, compute_best_move, compute_hint};
pub use error::{Error, Result};
pub use search::{SearchResult, SearchStrategy, random_empty_cell};
pub use tictactoe::{Board, Cell, Coord, Game, GameOutcome, Outcome, Player};
