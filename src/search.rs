//! Adversarial game-tree search
//!
//! Every strategy here scores positions for a fixed *maximiser*: +1 when the
//! maximiser completes a line, −1 when the opponent does, 0 for a full board
//! without a line. Wins are not discounted by depth, so a win in one ply and
//! a win in five plies are equal and the earlier cell in row-major order is
//! chosen.

pub mod alpha_beta;
pub mod minimax;
pub mod parallel;
pub mod random;

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

pub use alpha_beta::AlphaBeta;
pub use minimax::Minimax;
pub use random::random_empty_cell;

use crate::{
    Error, Result,
    tictactoe::{Board, Coord, Player},
};

/// Value of a root search and the move that achieves it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    /// Game-theoretic value for the root maximiser
    pub score: i32,
    /// First cell (row-major) achieving `score`; `None` on a terminal board
    pub best_move: Option<Coord>,
    /// Positions visited, the root included
    pub nodes: u64,
    /// Deepest ply reached below the root
    pub max_depth: usize,
}

/// How the game tree is explored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchStrategy {
    /// Plain minimax over every continuation
    #[default]
    Exhaustive,
    /// Minimax with alpha-beta cut-offs; same value and move as `Exhaustive`
    AlphaBeta,
    /// First moves searched on the rayon pool, merged in row-major order
    Parallel,
}

impl SearchStrategy {
    pub const ALL: [SearchStrategy; 3] = [
        SearchStrategy::Exhaustive,
        SearchStrategy::AlphaBeta,
        SearchStrategy::Parallel,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SearchStrategy::Exhaustive => "exhaustive",
            SearchStrategy::AlphaBeta => "alpha-beta",
            SearchStrategy::Parallel => "parallel",
        }
    }

    /// Search `board` with `maximizer` to move.
    ///
    /// The board is mutated during the search and restored before returning.
    pub fn run(self, board: &mut Board, maximizer: Player) -> SearchResult {
        match self {
            SearchStrategy::Exhaustive => Minimax::new(maximizer).search(board),
            SearchStrategy::AlphaBeta => AlphaBeta::new(maximizer).search(board),
            SearchStrategy::Parallel => parallel::search(board, maximizer),
        }
    }
}

impl fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SearchStrategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = match s.trim().to_lowercase().as_str() {
            "alphabeta" | "alpha_beta" => "alpha-beta".to_string(),
            other => other.to_string(),
        };
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.name() == wanted)
            .ok_or_else(|| Error::ParseOption {
                kind: "search strategy".to_string(),
                input: s.to_string(),
                expected: Self::ALL.map(SearchStrategy::name).join(", "),
            })
    }
}
