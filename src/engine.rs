//! Move selection façade
//!
//! [`Engine`] turns a board snapshot into a recommendation. It enforces the
//! exhaustive-search threshold, dispatches to the configured
//! [`SearchStrategy`], and implements the difficulty switch between full
//! search and the random fallback.

use rand::Rng;
use tracing::{debug, instrument};

use crate::{
    Error, Result,
    config::{Difficulty, EngineConfig},
    search::{SearchResult, SearchStrategy, random_empty_cell},
    tictactoe::{Board, Coord, Outcome, Player},
};

/// Game-tree search engine with a fixed configuration
#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    /// Create an engine from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if `config` fails
    /// [`EngineConfig::validate`].
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn strategy(&self) -> SearchStrategy {
        self.config.strategy
    }

    /// Whether a board with edge `size` may be searched exhaustively
    pub fn supports_exhaustive(&self, size: usize) -> bool {
        size <= self.config.exhaustive_threshold
    }

    /// Full search result for `maximizer` to move on `board`.
    ///
    /// The board is used as scratch space and holds its original content
    /// again when this returns.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SearchTooLarge`] if the board is still open and its
    /// edge exceeds the configured exhaustive threshold. Terminal boards of
    /// any size yield a result without a move.
    #[instrument(skip(self, board), fields(size = board.size(), strategy = %self.config.strategy))]
    pub fn search(&self, board: &mut Board, maximizer: Player) -> Result<SearchResult> {
        if let Some(outcome) = Outcome::terminal(board, maximizer) {
            return Ok(SearchResult {
                score: outcome.score(),
                best_move: None,
                nodes: 1,
                max_depth: 0,
            });
        }

        let size = board.size();
        if !self.supports_exhaustive(size) {
            return Err(Error::SearchTooLarge {
                size,
                threshold: self.config.exhaustive_threshold,
            });
        }

        let result = self.config.strategy.run(board, maximizer);
        debug!(
            score = result.score,
            best_move = ?result.best_move,
            nodes = result.nodes,
            max_depth = result.max_depth,
            "search finished"
        );
        Ok(result)
    }

    /// Best move for `mover`, who maximises.
    ///
    /// Returns `Ok(None)` on a terminal board.
    ///
    /// # Examples
    ///
    /// ```
    /// use noughts::{Board, Coord, Engine, Player};
    ///
    /// let mut board = Board::from_string("XX./OO./...")?;
    /// let engine = Engine::default();
    /// assert_eq!(engine.compute_best_move(&mut board, Player::O)?, Some(Coord::new(0, 2)));
    /// # Ok::<(), noughts::Error>(())
    /// ```
    pub fn compute_best_move(&self, board: &mut Board, mover: Player) -> Result<Option<Coord>> {
        Ok(self.search(board, mover)?.best_move)
    }

    /// Suggested move for `for_player`.
    ///
    /// The search is rooted at `for_player`, who maximises; nothing about
    /// the board changes. Boards above the exhaustive threshold are an
    /// error here; see [`Engine::suggest_move`] for the fallback.
    pub fn compute_hint(&self, board: &mut Board, for_player: Player) -> Result<Option<Coord>> {
        let hint = self.search(board, for_player)?.best_move;
        debug!(player = %for_player, hint = ?hint, "hint computed");
        Ok(hint)
    }

    /// Hint for `for_player` that works on any board size.
    ///
    /// Searches within the exhaustive threshold, otherwise suggests a
    /// uniformly random empty cell from `rng`. Difficulty does not apply.
    /// Returns `Ok(None)` on a terminal board.
    pub fn suggest_move<R: Rng + ?Sized>(
        &self,
        board: &mut Board,
        for_player: Player,
        rng: &mut R,
    ) -> Result<Option<Coord>> {
        if board.is_terminal() {
            return Ok(None);
        }

        if self.supports_exhaustive(board.size()) {
            return self.compute_hint(board, for_player);
        }

        let coord = random_empty_cell(board, rng);
        debug!(player = %for_player, size = board.size(), hint = ?coord, "random hint");
        Ok(coord)
    }

    /// The move a computer opponent plays at the configured difficulty.
    ///
    /// `Hard` searches when the board is within the exhaustive threshold;
    /// `Easy` and larger boards take a uniformly random empty cell from
    /// `rng`. Returns `Ok(None)` on a terminal board.
    pub fn choose_move<R: Rng + ?Sized>(
        &self,
        board: &mut Board,
        mover: Player,
        rng: &mut R,
    ) -> Result<Option<Coord>> {
        if board.is_terminal() {
            return Ok(None);
        }

        if self.config.difficulty == Difficulty::Hard && self.supports_exhaustive(board.size()) {
            return self.compute_best_move(board, mover);
        }

        let coord = random_empty_cell(board, rng);
        debug!(
            difficulty = %self.config.difficulty,
            size = board.size(),
            choice = ?coord,
            "random move"
        );
        Ok(coord)
    }
}

/// Best move for `mover` with the default configuration
pub fn compute_best_move(board: &mut Board, mover: Player) -> Result<Option<Coord>> {
    Engine::default().compute_best_move(board, mover)
}

/// Hint for `for_player` with the default configuration
pub fn compute_hint(board: &mut Board, for_player: Player) -> Result<Option<Coord>> {
    Engine::default().compute_hint(board, for_player)
}
