//! Shared helpers for the integration tests.

#![allow(dead_code)]

use noughts::{
    Board, Cell, Engine, EngineAgent, Game, Player,
    arena::Arena,
};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Parse a board literal, panicking on malformed input.
pub fn board(literal: &str) -> Board {
    Board::from_string(literal).unwrap_or_else(|err| panic!("bad board {literal:?}: {err}"))
}

pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Boards with every cell drawn independently from {Empty, X, O}.
///
/// Most are unreachable in play, which is the point: evaluator properties
/// must hold for any cell assignment.
pub fn arbitrary_boards(size: usize, count: usize, seed: u64) -> Vec<Board> {
    let mut rng = seeded_rng(seed);
    (0..count)
        .map(|_| {
            let rows: Vec<Vec<Cell>> = (0..size)
                .map(|_| {
                    (0..size)
                        .map(|_| match rng.random_range(0..3) {
                            0 => Cell::Empty,
                            1 => Cell::X,
                            _ => Cell::O,
                        })
                        .collect::<Vec<_>>()
                })
                .collect();
            Board::from_rows(rows).unwrap()
        })
        .collect()
}

/// Positions reached by `plies` alternating random moves from the empty board,
/// stopping early at a terminal position.
pub fn random_playouts(size: usize, plies: usize, count: usize, seed: u64) -> Vec<(Board, Player)> {
    let mut rng = seeded_rng(seed);
    (0..count)
        .map(|_| {
            let mut board = Board::new(size).unwrap();
            let mut mover = Player::X;
            for _ in 0..plies {
                if board.is_terminal() {
                    break;
                }
                let empty = board.empty_cells();
                let coord = empty[rng.random_range(0..empty.len())];
                board.place(coord, mover).unwrap();
                mover = mover.opponent();
            }
            (board, mover)
        })
        .collect()
}

/// One game between two engines on a 3×3 board.
pub fn engine_game(x: Engine, o: Engine, first: Player) -> Game {
    let arena = Arena::new(3).with_first_player(first);
    let mut x = EngineAgent::new("x", x);
    let mut o = EngineAgent::new("o", o);
    arena.play_game(&mut x, &mut o).unwrap()
}
