//! Command-line interface for the noughts engine
//!
//! Boards are given as text (`XX./OO./...`), moves are printed as
//! zero-based `(row, col)` pairs.

pub mod commands;
pub mod config;
pub mod output;
