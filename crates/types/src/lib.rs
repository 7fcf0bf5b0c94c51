//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making
//! them usable in any context (core logic, input mapping, UI rendering).
//!
//! # Board Dimensions
//!
//! The classic game is played on a 4x4 grid, but the board size is chosen at
//! construction time. `MAX_BOARD_SIZE` bounds it so snapshots and scratch
//! buffers can stay fixed-size and allocation-free.
//!
//! # Coordinates
//!
//! Cells are addressed by `(col, row)` with `(0, 0)` at the lower-left corner
//! of the board, like `(x, y)` coordinates. Row indices grow upward.

/// Default side length of the board.
pub const DEFAULT_BOARD_SIZE: usize = 4;

/// Largest supported side length.
pub const MAX_BOARD_SIZE: usize = 8;

/// Cell count of the largest supported board.
pub const MAX_BOARD_CELLS: usize = MAX_BOARD_SIZE * MAX_BOARD_SIZE;

/// Tile value that ends (and wins) the game when it appears.
pub const WINNING_TILE: u32 = 2048;

/// One in this many spawned tiles is a 4; the rest are 2s.
pub const FOUR_TILE_ODDS: u32 = 10;

/// Cell on the board (`None` = empty, `Some(v)` = tile of value `v`).
pub type Cell = Option<u32>;

/// A tilt direction. `North` is "up" on the rendered board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    North,
    South,
    East,
    West,
}

impl Side {
    /// All four sides, in a stable order.
    pub const ALL: [Side; 4] = [Side::North, Side::South, Side::East, Side::West];

    /// Map canonical coordinates to board coordinates.
    ///
    /// The tilt algorithm only knows how to slide tiles "up" (toward
    /// increasing row). Canonical coordinates are board coordinates rotated so
    /// that this side is "up": moving up one canonical row moves one cell
    /// toward this side on the real board. The mapping is a pure bijection on
    /// the `size` x `size` grid; no board state is involved.
    pub fn to_board(self, size: usize, col: usize, row: usize) -> (usize, usize) {
        debug_assert!(col < size && row < size);
        match self {
            Side::North => (col, row),
            Side::South => (size - 1 - col, size - 1 - row),
            Side::East => (row, size - 1 - col),
            Side::West => (size - 1 - row, col),
        }
    }

    /// Convert to string (for status lines and test diagnostics).
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::North => "north",
            Side::South => "south",
            Side::East => "east",
            Side::West => "west",
        }
    }
}

/// Game actions produced by the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Tilt the whole board toward a side.
    Tilt(Side),
    /// Clear the board and start a fresh game.
    Restart,
}
