//! Terminal-state evaluation on arbitrary and hand-built boards

use noughts::{
    Board, Error, Outcome, Player,
    tictactoe::{Line, LineAnalyzer},
};

mod common;

#[test]
fn test_every_single_line_is_a_win() {
    for size in 3..=6 {
        for line in Line::all(size) {
            let mut rows = vec![vec![noughts::Cell::Empty; size]; size];
            for index in line.indices(size) {
                rows[index / size][index % size] = noughts::Cell::O;
            }
            let board = Board::from_rows(rows).unwrap();

            assert!(board.is_terminal(), "{line:?} on {size}x{size}");
            assert_eq!(board.classify(Player::O).unwrap(), Outcome::Win);
            assert_eq!(board.classify(Player::X).unwrap(), Outcome::Loss);
            assert_eq!(board.winner(), Some(Player::O));
        }
    }
}

#[test]
fn test_line_count_is_two_n_plus_two() {
    for size in 3..=8 {
        assert_eq!(Line::all(size).count(), 2 * size + 2);
        assert_eq!(LineAnalyzer::line_count(size), 2 * size + 2);
    }
}

#[test]
fn test_line_free_full_boards_tie() {
    for literal in ["XOX/XOO/OXX", "XXO/OOX/XOX", "OXO/OXX/XOX"] {
        let board = common::board(literal);
        assert!(!board.has_line(Player::X));
        assert!(!board.has_line(Player::O));
        for player in [Player::X, Player::O] {
            assert_eq!(board.classify(player).unwrap(), Outcome::Tie, "{literal}");
        }
    }
}

#[test]
fn test_open_boards_are_rejected() {
    for (board, _) in common::random_playouts(3, 3, 20, 5) {
        assert!(!board.is_terminal());
        assert!(matches!(board.classify(Player::X), Err(Error::NotTerminal)));
    }
}

#[test]
fn test_terminal_is_symmetric_under_relabelling() {
    for size in [3, 4, 5] {
        for board in common::arbitrary_boards(size, 500, size as u64) {
            let swapped = board.swap_players();
            assert_eq!(board.is_terminal(), swapped.is_terminal(), "{}", board.encode());
            assert_eq!(
                Outcome::terminal(&board, Player::X),
                Outcome::terminal(&swapped, Player::O),
                "{}",
                board.encode()
            );
        }
    }
}

#[test]
fn test_classification_agrees_with_terminal_check() {
    for board in common::arbitrary_boards(3, 1000, 17) {
        for player in [Player::X, Player::O] {
            match board.classify(player) {
                Ok(outcome) => {
                    assert!(board.is_terminal());
                    let opponent = board.classify(player.opponent()).unwrap();
                    if board.has_line(Player::X) && board.has_line(Player::O) {
                        assert_eq!(outcome, Outcome::Win);
                    } else {
                        assert_eq!(opponent, outcome.flip());
                    }
                }
                Err(Error::NotTerminal) => assert!(!board.is_terminal()),
                Err(err) => panic!("unexpected error {err}"),
            }
        }
    }
}

#[test]
fn test_malformed_boards_never_reach_evaluation() {
    assert!(matches!(
        Board::from_string("XX/OO"),
        Err(Error::BoardTooSmall { size: 2 })
    ));
    assert!(matches!(
        Board::from_string("XX./OO/..."),
        Err(Error::InvalidBoardShape { .. })
    ));
    assert!(matches!(
        Board::from_string("XZ./.../..."),
        Err(Error::InvalidCellCharacter { character: 'Z', .. })
    ));
}
