//! Subcommands of the `noughts` binary

pub mod best_move;
pub mod classify;
pub mod hint;
pub mod selfplay;
