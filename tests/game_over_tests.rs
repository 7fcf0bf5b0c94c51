//! Game-over tests - terminal conditions and the score high-water mark

use tui_2048::core::rules::{at_least_one_move_exists, empty_space_exists, is_game_over, max_tile_exists};
use tui_2048::core::{Board, GameState, Tile};
use tui_2048::types::{Side, WINNING_TILE};

fn deadlocked_rows() -> [&'static [u32]; 4] {
    [
        &[2, 4, 2, 4],
        &[4, 2, 4, 2],
        &[2, 4, 2, 4],
        &[4, 2, 4, 2],
    ]
}

#[test]
fn test_full_board_without_moves_is_over() {
    let board = Board::from_rows(&deadlocked_rows());
    assert!(!empty_space_exists(&board));
    assert!(!max_tile_exists(&board, WINNING_TILE));
    assert!(!at_least_one_move_exists(&board));
    assert!(is_game_over(&board, WINNING_TILE));
}

#[test]
fn test_one_adjacent_pair_keeps_the_game_alive() {
    // Same checkerboard but with a horizontal 4-4 pair in the bottom row.
    let board = Board::from_rows(&[
        &[2, 4, 2, 4],
        &[4, 2, 4, 2],
        &[2, 4, 2, 8],
        &[4, 2, 4, 4],
    ]);
    assert!(!empty_space_exists(&board));
    assert!(at_least_one_move_exists(&board));
    assert!(!is_game_over(&board, WINNING_TILE));
}

#[test]
fn test_winning_tile_ends_the_game_despite_space() {
    let board = Board::from_rows(&[
        &[0, 0, 0, 0],
        &[0, 0, 0, 0],
        &[0, 0, 2048, 0],
        &[0, 0, 0, 0],
    ]);
    assert!(empty_space_exists(&board));
    assert!(is_game_over(&board, WINNING_TILE));
}

#[test]
fn test_empty_board_is_not_over() {
    assert!(!is_game_over(&Board::new(4), WINNING_TILE));
}

#[test]
fn test_add_tile_refreshes_the_flag_eagerly() {
    // One empty corner; the added tile deadlocks the board. The flag must be
    // fresh immediately, with no recompute hidden in the accessor.
    let mut state = GameState::from_rows(
        &[
            &[0, 4, 2, 4],
            &[4, 2, 4, 2],
            &[2, 4, 2, 4],
            &[4, 2, 4, 2],
        ],
        0,
        0,
    );
    assert!(!state.game_over());
    state.add_tile(Tile::new(0, 3, 16)).unwrap();
    assert!(state.game_over());
}

#[test]
fn test_merging_to_the_winning_tile_ends_the_game() {
    let mut state = GameState::from_rows(
        &[
            &[0, 0, 0, 0],
            &[0, 0, 0, 0],
            &[1024, 0, 0, 0],
            &[1024, 0, 0, 0],
        ],
        0,
        0,
    );
    assert!(!state.game_over());

    assert!(state.tilt(Side::North));
    assert!(state.game_over());
    assert_eq!(state.score(), 2048);
    assert_eq!(state.max_score(), 2048);
}

#[test]
fn test_max_score_updates_on_the_transition_to_over() {
    let state = GameState::from_rows(&deadlocked_rows(), 300, 120);
    assert!(state.game_over());
    assert_eq!(state.max_score(), 300);
}

#[test]
fn test_max_score_survives_clear() {
    let mut state = GameState::from_rows(&deadlocked_rows(), 300, 0);
    assert_eq!(state.max_score(), 300);

    state.clear();
    assert!(!state.game_over());
    assert_eq!(state.score(), 0);
    assert_eq!(state.max_score(), 300);
}

#[test]
fn test_winning_value_is_parameterizable() {
    let board = Board::from_rows(&[
        &[0, 0, 0, 0],
        &[0, 32, 0, 0],
        &[0, 0, 0, 0],
        &[0, 0, 0, 0],
    ]);
    assert!(is_game_over(&board, 32));
    assert!(!is_game_over(&board, WINNING_TILE));
}
