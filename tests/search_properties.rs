//! Search invariants over many positions

use noughts::{
    Board, Cell, Engine, EngineConfig, Error, Player, SearchStrategy, random_empty_cell,
};

mod common;

mod board_restoration {
    use super::*;

    #[test]
    fn test_every_strategy_leaves_board_untouched() {
        for (board, mover) in common::random_playouts(3, 5, 30, 1) {
            for strategy in SearchStrategy::ALL {
                let mut scratch = board.clone();
                strategy.run(&mut scratch, mover);
                assert_eq!(scratch, board, "{strategy} on {}", board.encode());
            }
        }
    }

    #[test]
    fn test_refused_search_leaves_board_untouched() {
        let mut board = common::board("X.../..../..O./....");
        let before = board.clone();
        assert!(Engine::default().search(&mut board, Player::X).is_err());
        assert_eq!(board, before);
    }
}

mod agreement {
    use super::*;

    #[test]
    fn test_strategies_match_exhaustive_on_random_positions() {
        for (board, mover) in common::random_playouts(3, 3, 40, 2024) {
            let expected = SearchStrategy::Exhaustive.run(&mut board.clone(), mover);
            for strategy in [SearchStrategy::AlphaBeta, SearchStrategy::Parallel] {
                let result = strategy.run(&mut board.clone(), mover);
                assert_eq!(result.score, expected.score, "{strategy} on {}", board.encode());
                assert_eq!(
                    result.best_move,
                    expected.best_move,
                    "{strategy} on {}",
                    board.encode()
                );
            }
        }
    }

    #[test]
    fn test_strategies_match_on_four_by_four_endgames() {
        for (board, mover) in common::random_playouts(4, 10, 10, 31) {
            let expected = SearchStrategy::Exhaustive.run(&mut board.clone(), mover);
            for strategy in [SearchStrategy::AlphaBeta, SearchStrategy::Parallel] {
                let result = strategy.run(&mut board.clone(), mover);
                assert_eq!(result.score, expected.score, "{strategy} on {}", board.encode());
                assert_eq!(result.best_move, expected.best_move);
            }
        }
    }

    #[test]
    fn test_parallel_reports_same_tree_size() {
        for (board, mover) in common::random_playouts(3, 2, 5, 8) {
            let sequential = SearchStrategy::Exhaustive.run(&mut board.clone(), mover);
            let parallel = SearchStrategy::Parallel.run(&mut board.clone(), mover);
            assert_eq!(parallel, sequential);
        }
    }

    #[test]
    fn test_alpha_beta_visits_fewer_nodes() {
        let mut board = Board::new(3).unwrap();
        let exhaustive = SearchStrategy::Exhaustive.run(&mut board, Player::X);
        let pruned = SearchStrategy::AlphaBeta.run(&mut board, Player::X);
        assert!(pruned.nodes < exhaustive.nodes);
    }
}

mod determinism {
    use super::*;

    #[test]
    fn test_repeated_searches_agree() {
        let engine = Engine::new(EngineConfig::default().with_strategy(SearchStrategy::Parallel))
            .unwrap();
        for (board, mover) in common::random_playouts(3, 3, 10, 77) {
            let mut scratch = board.clone();
            let first = engine.search(&mut scratch, mover).unwrap();
            for _ in 0..3 {
                assert_eq!(engine.search(&mut scratch, mover).unwrap(), first);
            }
        }
    }

    #[test]
    fn test_chosen_move_is_empty_and_legal() {
        for (board, mover) in common::random_playouts(3, 6, 40, 12) {
            let mut scratch = board.clone();
            match noughts::compute_best_move(&mut scratch, mover).unwrap() {
                Some(coord) => {
                    assert!(!board.is_terminal());
                    assert_eq!(board.get(coord), Some(Cell::Empty));
                }
                None => assert!(board.is_terminal()),
            }
        }
    }
}

mod threshold {
    use super::*;

    #[test]
    fn test_boards_above_threshold_are_refused() {
        for size in 4..=6 {
            let mut board = Board::new(size).unwrap();
            let err = noughts::compute_best_move(&mut board, Player::X).unwrap_err();
            assert!(matches!(err, Error::SearchTooLarge { threshold: 3, .. }));
            assert!(matches!(
                noughts::compute_hint(&mut board, Player::O),
                Err(Error::SearchTooLarge { .. })
            ));
        }
    }

    #[test]
    fn test_choose_move_falls_back_to_random_cell() {
        let engine = Engine::default();
        let mut rng = common::seeded_rng(404);
        for (board, mover) in common::random_playouts(5, 8, 20, 9) {
            let mut scratch = board.clone();
            match engine.choose_move(&mut scratch, mover, &mut rng).unwrap() {
                Some(coord) => assert!(board.is_empty_at(coord)),
                None => assert!(board.is_terminal()),
            }
            assert_eq!(scratch, board);
        }
    }

    #[test]
    fn test_terminal_boards_above_threshold_have_no_move() {
        let engine = Engine::default();
        let mut rng = common::seeded_rng(6);
        for literal in ["XOXO/XOXO/OXOX/OXOX", "OOOO/XXX./..X./...."] {
            let mut board = common::board(literal);
            assert_eq!(engine.compute_best_move(&mut board, Player::X).unwrap(), None);
            assert_eq!(engine.compute_hint(&mut board, Player::X).unwrap(), None);
            assert_eq!(
                engine.suggest_move(&mut board, Player::O, &mut rng).unwrap(),
                None
            );
        }
    }

    #[test]
    fn test_hint_falls_back_to_random_cell() {
        let engine = Engine::default();
        let mut rng = common::seeded_rng(505);
        for (board, player) in common::random_playouts(4, 5, 20, 10) {
            let mut scratch = board.clone();
            match engine.suggest_move(&mut scratch, player, &mut rng).unwrap() {
                Some(coord) => assert!(board.is_empty_at(coord)),
                None => assert!(board.is_terminal()),
            }
            assert_eq!(scratch, board);
        }
    }

    #[test]
    fn test_random_fallback_is_reproducible() {
        let board = Board::new(7).unwrap();
        let picks = |seed| {
            let mut rng = common::seeded_rng(seed);
            (0..10)
                .map(|_| random_empty_cell(&board, &mut rng))
                .collect::<Vec<_>>()
        };
        assert_eq!(picks(1), picks(1));
    }
}
