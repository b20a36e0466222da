//! Engine configuration
//!
//! Captures the switches that decide how a computer move is produced: the
//! difficulty, the largest board searched exhaustively, the search strategy
//! and an optional seed for the random fallback. Configurations are plain
//! JSON on disk.

use std::{fmt, fs::File, path::Path, str::FromStr};

use rand::{SeedableRng, random, rngs::StdRng};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{Error, Result, search::SearchStrategy, tictactoe::MIN_BOARD_SIZE};

/// Largest board edge searched exhaustively by default
pub const DEFAULT_EXHAUSTIVE_THRESHOLD: usize = 3;

/// How hard the computer opponent plays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Uniformly random empty cell
    Easy,
    /// Full game-tree search where the board size allows it
    #[default]
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 2] = [Difficulty::Easy, Difficulty::Hard];

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|difficulty| difficulty.name() == wanted)
            .ok_or_else(|| Error::ParseOption {
                kind: "difficulty".to_string(),
                input: s.to_string(),
                expected: Self::ALL.map(Difficulty::name).join(", "),
            })
    }
}

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Difficulty of `choose_move`
    pub difficulty: Difficulty,

    /// How the tree is explored when searching
    pub strategy: SearchStrategy,

    /// Largest board edge that may be searched
    pub exhaustive_threshold: usize,

    /// Seed for the random fallback; fresh entropy when absent
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Hard,
            strategy: SearchStrategy::Exhaustive,
            exhaustive_threshold: DEFAULT_EXHAUSTIVE_THRESHOLD,
            seed: None,
        }
    }
}

impl EngineConfig {
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn with_strategy(mut self, strategy: SearchStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_exhaustive_threshold(mut self, threshold: usize) -> Self {
        self.exhaustive_threshold = threshold;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check that the configuration can drive an engine.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if the threshold is below the
    /// smallest legal board.
    pub fn validate(&self) -> Result<()> {
        if self.exhaustive_threshold < MIN_BOARD_SIZE {
            return Err(Error::InvalidConfiguration {
                message: format!(
                    "exhaustive_threshold must be at least {MIN_BOARD_SIZE}, got {}",
                    self.exhaustive_threshold
                ),
            });
        }
        Ok(())
    }

    /// Random generator for the fallback, seeded from `seed` when set
    pub fn rng(&self) -> StdRng {
        StdRng::seed_from_u64(self.seed.unwrap_or_else(random))
    }

    /// Load and validate a configuration from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| Error::Io {
            operation: format!("open config {}", path.display()),
            source,
        })?;
        let config: Self = serde_json::from_reader(file)?;
        config.validate()?;
        Ok(config)
    }

    /// Write the configuration as pretty-printed JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| Error::Io {
            operation: format!("create config {}", path.display()),
            source,
        })?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Load `path` if it exists, otherwise fall back to the defaults.
    ///
    /// A file that exists but cannot be parsed is still an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::Rng;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.difficulty, Difficulty::Hard);
        assert_eq!(config.strategy, SearchStrategy::Exhaustive);
        assert_eq!(config.exhaustive_threshold, 3);
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_small_threshold() {
        let config = EngineConfig::default().with_exhaustive_threshold(2);
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_difficulty_parsing() {
        assert_eq!("EASY".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert_eq!(" hard ".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        let err = "medium".parse::<Difficulty>().unwrap_err();
        assert!(err.to_string().contains("easy, hard"));
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: EngineConfig =
            serde_json::from_str(r#"{"difficulty": "easy", "strategy": "alpha-beta"}"#).unwrap();
        assert_eq!(config.difficulty, Difficulty::Easy);
        assert_eq!(config.strategy, SearchStrategy::AlphaBeta);
        assert_eq!(config.exhaustive_threshold, 3);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("engine.json");
        let config = EngineConfig::default()
            .with_strategy(SearchStrategy::Parallel)
            .with_exhaustive_threshold(4)
            .with_seed(9);
        config.save(&path).unwrap();
        assert_eq!(EngineConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("engine.json");
        std::fs::write(&path, r#"{"exhaustive_threshold": 1}"#).unwrap();
        assert!(matches!(
            EngineConfig::load(&path),
            Err(Error::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = EngineConfig::load_or_default(dir.path().join("missing.json")).unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let config = EngineConfig::default().with_seed(42);
        let a: u64 = config.rng().random();
        let b: u64 = config.rng().random();
        assert_eq!(a, b);
    }
}
