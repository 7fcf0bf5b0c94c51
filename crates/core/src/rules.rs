//! Game-over rules - pure predicates over the board
//!
//! The game ends when the winning tile appears or no legal move remains.
//! Every predicate is a full O(N^2) scan with no side effects.

use crate::board::Board;

/// True iff at least one cell on the board is empty.
pub fn empty_space_exists(board: &Board) -> bool {
    let size = board.size();
    for col in 0..size {
        for row in 0..size {
            if board.tile(col, row).is_none() {
                return true;
            }
        }
    }
    false
}

/// True iff any tile has reached `winning_tile`.
pub fn max_tile_exists(board: &Board, winning_tile: u32) -> bool {
    board.tiles().any(|tile| tile.value() == winning_tile)
}

/// True iff a tilt in some direction could change the board.
///
/// Two ways a move can exist: an empty cell somewhere, or two orthogonally
/// adjacent tiles with the same value.
pub fn at_least_one_move_exists(board: &Board) -> bool {
    if empty_space_exists(board) {
        return true;
    }
    let size = board.size();
    for col in 0..size {
        for row in 0..size {
            let Some(tile) = board.tile(col, row) else {
                continue;
            };
            let value = tile.value();
            let equal_at =
                |c: usize, r: usize| board.tile(c, r).map(|t| t.value()) == Some(value);
            if row > 0 && equal_at(col, row - 1) {
                return true;
            }
            if row + 1 < size && equal_at(col, row + 1) {
                return true;
            }
            if col > 0 && equal_at(col - 1, row) {
                return true;
            }
            if col + 1 < size && equal_at(col + 1, row) {
                return true;
            }
        }
    }
    false
}

/// True iff the game is over: the winning tile exists or no move remains.
pub fn is_game_over(board: &Board, winning_tile: u32) -> bool {
    max_tile_exists(board, winning_tile) || !at_least_one_move_exists(board)
}
