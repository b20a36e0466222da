//! Winning line analysis for N×N boards

use super::{Board, Player};

/// One of the 2·N + 2 lines that can win the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Line {
    Row(usize),
    Column(usize),
    /// Top-left to bottom-right
    MainDiagonal,
    /// Top-right to bottom-left
    AntiDiagonal,
}

impl Line {
    /// Every candidate line of a `size`×`size` board: rows, then columns,
    /// then the two full diagonals. Broken diagonals and sub-grid lines do
    /// not count.
    pub fn all(size: usize) -> impl Iterator<Item = Line> {
        (0..size)
            .map(Line::Row)
            .chain((0..size).map(Line::Column))
            .chain([Line::MainDiagonal, Line::AntiDiagonal])
    }

    /// Row-major index of the `step`-th cell along this line
    fn index(self, step: usize, size: usize) -> usize {
        match self {
            Line::Row(row) => row * size + step,
            Line::Column(col) => step * size + col,
            Line::MainDiagonal => step * size + step,
            Line::AntiDiagonal => step * size + (size - 1 - step),
        }
    }

    /// Row-major indices of the cells on this line
    pub fn indices(self, size: usize) -> impl Iterator<Item = usize> {
        (0..size).map(move |step| self.index(step, size))
    }
}

/// Utility for analyzing winning lines
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Number of candidate lines on a `size`×`size` board
    pub fn line_count(size: usize) -> usize {
        2 * size + 2
    }

    /// Check if `player` fills an entire line
    pub fn has_line(board: &Board, player: Player) -> bool {
        Self::completed_line(board, player).is_some()
    }

    /// The first line `player` fills, in [`Line::all`] order
    pub fn completed_line(board: &Board, player: Player) -> Option<Line> {
        let size = board.size();
        let cells = board.cells();
        let target = player.to_cell();
        Line::all(size).find(|line| line.indices(size).all(|idx| cells[idx] == target))
    }
}
