//! Options shared by every subcommand

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::Args;

use crate::{
    config::{Difficulty, EngineConfig},
    engine::Engine,
    search::SearchStrategy,
    tictactoe::{Board, Player},
};

#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Engine configuration file (JSON)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Search strategy (exhaustive, alpha-beta, parallel)
    #[arg(long, global = true)]
    pub strategy: Option<String>,

    /// Computer difficulty (easy, hard)
    #[arg(long, global = true)]
    pub difficulty: Option<String>,

    /// Random seed for reproducibility
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

impl GlobalArgs {
    /// Configuration file (if any) with command-line overrides applied
    pub fn engine_config(&self) -> Result<EngineConfig> {
        let mut config = match &self.config {
            Some(path) => EngineConfig::load(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => EngineConfig::default(),
        };

        if let Some(strategy) = &self.strategy {
            config.strategy = strategy.parse::<SearchStrategy>()?;
        }
        if let Some(difficulty) = &self.difficulty {
            config.difficulty = difficulty.parse::<Difficulty>()?;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }

        Ok(config)
    }

    pub fn engine(&self) -> Result<Engine> {
        Ok(Engine::new(self.engine_config()?)?)
    }
}

/// Parse `x`/`o` (or `first`/`second`) for `flag`
pub(crate) fn parse_player_token(value: &str, flag: &str) -> Result<Player> {
    match value.trim().to_ascii_lowercase().as_str() {
        "x" | "first" => Ok(Player::X),
        "o" | "second" => Ok(Player::O),
        other => Err(anyhow!(
            "Invalid value '{other}' for {flag} (expected 'x' or 'o')"
        )),
    }
}

pub(crate) fn parse_board(value: &str) -> Result<Board> {
    Board::from_string(value).with_context(|| format!("parsing board '{value}'"))
}
