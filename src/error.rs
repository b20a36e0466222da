//! Error types for the noughts crate

use thiserror::Error;

use crate::tictactoe::Coord;

/// Main error type for the noughts crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("board size {size} is too small (must be at least 3)")]
    BoardTooSmall { size: usize },

    #[error("malformed board: {reason} in '{context}'")]
    InvalidBoardShape { reason: String, context: String },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("cell {coord} is outside a {size}x{size} board")]
    OutOfBounds { coord: Coord, size: usize },

    #[error("invalid move: cell {coord} is already occupied")]
    CellOccupied { coord: Coord },

    #[error("board is not terminal; outcome is undefined")]
    NotTerminal,

    #[error("game already over")]
    GameOver,

    #[error("no valid moves available")]
    NoValidMoves,

    #[error(
        "exhaustive search refused for a {size}x{size} board (threshold is {threshold}x{threshold})"
    )]
    SearchTooLarge { size: usize, threshold: usize },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("invalid player '{input}' (expected 'X' or 'O')")]
    ParsePlayer { input: String },

    #[error("invalid {kind} '{input}'. Expected one of: {expected}")]
    ParseOption {
        kind: String,
        input: String,
        expected: String,
    },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
