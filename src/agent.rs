//! Players that pick moves on their own
//!
//! An [`Agent`] is anything the arena can ask for a move: the search engine
//! at some difficulty, or a uniform random baseline.

use rand::{SeedableRng, random, rngs::StdRng};

use crate::{
    Error, Result,
    engine::Engine,
    search::random_empty_cell,
    tictactoe::{Board, Coord, Player},
};

/// A move-selecting player
pub trait Agent: Send {
    /// Select a move for `mover` on `board`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoValidMoves`] if the board is terminal, or any
    /// error from the underlying engine.
    fn select_move(&mut self, board: &Board, mover: Player) -> Result<Coord>;

    /// Display name
    fn name(&self) -> &str;

    /// Reseed any internal randomness
    fn set_rng_seed(&mut self, _seed: u64) -> Result<()> {
        Ok(())
    }
}

/// Agent backed by an [`Engine`]
pub struct EngineAgent {
    name: String,
    engine: Engine,
    rng: StdRng,
}

impl EngineAgent {
    /// Wrap `engine`; the fallback generator uses the engine's seed if set
    pub fn new(name: impl Into<String>, engine: Engine) -> Self {
        let rng = engine.config().rng();
        Self {
            name: name.into(),
            engine,
            rng,
        }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }
}

impl Agent for EngineAgent {
    fn select_move(&mut self, board: &Board, mover: Player) -> Result<Coord> {
        let mut scratch = board.clone();
        self.engine
            .choose_move(&mut scratch, mover, &mut self.rng)?
            .ok_or(Error::NoValidMoves)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_rng_seed(&mut self, seed: u64) -> Result<()> {
        self.rng = StdRng::seed_from_u64(seed);
        Ok(())
    }
}

/// Uniform random baseline
pub struct RandomAgent {
    name: String,
    rng: StdRng,
}

impl RandomAgent {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_seed(name, random())
    }

    pub fn with_seed(name: impl Into<String>, seed: u64) -> Self {
        Self {
            name: name.into(),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn select_move(&mut self, board: &Board, _mover: Player) -> Result<Coord> {
        if board.is_terminal() {
            return Err(Error::NoValidMoves);
        }
        random_empty_cell(board, &mut self.rng).ok_or(Error::NoValidMoves)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_rng_seed(&mut self, seed: u64) -> Result<()> {
        self.rng = StdRng::seed_from_u64(seed);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Difficulty, EngineConfig};

    #[test]
    fn engine_agent_takes_forced_win() {
        let mut agent = EngineAgent::new("minimax", Engine::default());
        let board = Board::from_string("OX./XO./XO.").unwrap();
        assert_eq!(
            agent.select_move(&board, Player::O).unwrap(),
            Coord::new(2, 2)
        );
        assert_eq!(agent.name(), "minimax");
    }

    #[test]
    fn agents_refuse_finished_board() {
        let board = Board::from_string("XXX/OO./...").unwrap();
        let mut engine = EngineAgent::new("minimax", Engine::default());
        let mut random = RandomAgent::with_seed("random", 1);
        assert!(matches!(
            engine.select_move(&board, Player::O),
            Err(Error::NoValidMoves)
        ));
        assert!(matches!(
            random.select_move(&board, Player::O),
            Err(Error::NoValidMoves)
        ));
    }

    #[test]
    fn reseeding_repeats_choices() {
        let board = Board::new(4).unwrap();
        let config = EngineConfig::default().with_difficulty(Difficulty::Easy);
        let mut agent = EngineAgent::new("easy", Engine::new(config).unwrap());

        agent.set_rng_seed(77).unwrap();
        let first: Vec<_> = (0..5)
            .map(|_| agent.select_move(&board, Player::X).unwrap())
            .collect();
        agent.set_rng_seed(77).unwrap();
        let second: Vec<_> = (0..5)
            .map(|_| agent.select_move(&board, Player::X).unwrap())
            .collect();
        assert_eq!(first, second);
    }
}
