//! Uniform random move selection

use rand::{Rng, prelude::IndexedRandom};

use crate::tictactoe::{Board, Coord};

/// Pick an empty cell uniformly at random.
///
/// Returns `None` when the board has no empty cell. Winning lines are not
/// checked, so a won board with free cells still yields a cell.
pub fn random_empty_cell<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Coord> {
    board.empty_cells().choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::tictactoe::Player;

    #[test]
    fn only_returns_empty_cells() {
        let board = Board::from_string("XO./.X./O..").unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = HashSet::new();
        for _ in 0..200 {
            let coord = random_empty_cell(&board, &mut rng).unwrap();
            assert!(board.is_empty_at(coord));
            seen.insert(coord);
        }
        assert_eq!(seen.len(), board.empty_cells().len());
    }

    #[test]
    fn full_board_has_no_cell() {
        let board = Board::from_string("XOX/XOO/OXX").unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(random_empty_cell(&board, &mut rng), None);
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut board = Board::new(4).unwrap();
        board.place(Coord::new(0, 0), Player::X).unwrap();
        let mut first = StdRng::seed_from_u64(12345);
        let mut second = StdRng::seed_from_u64(12345);
        for _ in 0..20 {
            assert_eq!(
                random_empty_cell(&board, &mut first),
                random_empty_cell(&board, &mut second)
            );
        }
    }
}
