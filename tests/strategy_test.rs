//! Strategy behavior across whole matches.

use sanmoku::{
    Board, Difficulty, GameOutcome, MoveSelector, Player, apply_move, outcome,
};

/// Plays a full match between two selectors, X moving first.
fn play_match(x: &mut MoveSelector, o: &mut MoveSelector) -> GameOutcome {
    let mut board = Board::new();
    let mut to_move = Player::X;
    while outcome(&board) == GameOutcome::InProgress {
        let selector = match to_move {
            Player::X => &mut *x,
            Player::O => &mut *o,
        };
        let cell = selector.select_move(&board, to_move).unwrap();
        apply_move(&mut board, cell, to_move).unwrap();
        to_move = to_move.opponent();
    }
    outcome(&board)
}

#[test]
fn test_heuristic_prefers_winning_over_blocking() {
    // O O _ / X X _ / _ _ _ with O to move: must complete at 2, not block 5.
    let mut board = Board::new();
    for (cell, player) in [
        (0, Player::O),
        (1, Player::O),
        (3, Player::X),
        (4, Player::X),
    ] {
        apply_move(&mut board, cell, player).unwrap();
    }
    for seed in 0..8 {
        let mut selector = MoveSelector::seeded(Difficulty::Medium, seed);
        assert_eq!(selector.select_move(&board, Player::O), Ok(2));
    }
}

#[test]
fn test_random_is_reproducible_for_a_fixed_seed() {
    let mut board = Board::new();
    apply_move(&mut board, 4, Player::X).unwrap();

    let mut a = MoveSelector::seeded(Difficulty::Low, 123);
    let mut b = MoveSelector::seeded(Difficulty::Low, 123);
    for _ in 0..8 {
        assert_eq!(
            a.select_move(&board, Player::O),
            b.select_move(&board, Player::O)
        );
    }
}

#[test]
fn test_minimax_never_loses_to_random_moving_second() {
    for seed in 0..20 {
        let mut random_x = MoveSelector::seeded(Difficulty::Low, seed);
        let mut minimax_o = MoveSelector::seeded(Difficulty::High, 0);
        let result = play_match(&mut random_x, &mut minimax_o);
        assert_ne!(result, GameOutcome::Win(Player::X), "seed {seed}");
    }
}

#[test]
fn test_minimax_never_loses_to_random_moving_first() {
    for seed in 0..20 {
        let mut minimax_x = MoveSelector::seeded(Difficulty::High, 0);
        let mut random_o = MoveSelector::seeded(Difficulty::Low, seed);
        let result = play_match(&mut minimax_x, &mut random_o);
        assert_ne!(result, GameOutcome::Win(Player::O), "seed {seed}");
    }
}

#[test]
fn test_minimax_never_loses_to_heuristic() {
    for seed in 0..10 {
        let mut heuristic_x = MoveSelector::seeded(Difficulty::Medium, seed);
        let mut minimax_o = MoveSelector::seeded(Difficulty::High, 0);
        let result = play_match(&mut heuristic_x, &mut minimax_o);
        assert_ne!(result, GameOutcome::Win(Player::X), "seed {seed}");
    }
}

#[test]
fn test_minimax_self_play_draws() {
    let mut x = MoveSelector::seeded(Difficulty::High, 0);
    let mut o = MoveSelector::seeded(Difficulty::High, 0);
    assert_eq!(play_match(&mut x, &mut o), GameOutcome::Draw);
}

#[test]
fn test_minimax_punishes_a_blunder() {
    // X opens corner, O answers with an edge instead of the center; optimal
    // X play forces a win from there, and minimax finds it.
    let mut board = Board::new();
    apply_move(&mut board, 0, Player::X).unwrap();
    apply_move(&mut board, 1, Player::O).unwrap();

    let mut minimax_x = MoveSelector::seeded(Difficulty::High, 0);
    let mut to_move = Player::X;
    // O plays its own minimax defence; X should still win.
    let mut minimax_o = MoveSelector::seeded(Difficulty::High, 0);
    while outcome(&board) == GameOutcome::InProgress {
        let selector = match to_move {
            Player::X => &mut minimax_x,
            Player::O => &mut minimax_o,
        };
        let cell = selector.select_move(&board, to_move).unwrap();
        apply_move(&mut board, cell, to_move).unwrap();
        to_move = to_move.opponent();
    }
    assert_eq!(outcome(&board), GameOutcome::Win(Player::X));
}
