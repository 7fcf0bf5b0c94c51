//! Board module - owns the grid of tile values
//!
//! The board is an N x N grid where each cell is empty or holds a tile value.
//! Storage is a flat vector of value slots for cache locality; tiles have no
//! identity beyond their value and position, so nothing links cells together.
//! Coordinates: (col, row) with (0, 0) at the lower-left corner, rows growing
//! upward.

use thiserror::Error;

use tui_2048_types::{Cell, MAX_BOARD_SIZE};

use crate::tile::Tile;

/// Contract violations raised by board mutations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    #[error("cell ({col}, {row}) is outside the {size}x{size} board")]
    OutOfBounds { col: usize, row: usize, size: usize },
    #[error("cell ({col}, {row}) is already occupied")]
    CellOccupied { col: usize, row: usize },
}

/// The game board - N x N cells using flat storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    /// Flat array of cells, row-major order (row * size + col).
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board with the given side length.
    ///
    /// `size` must be in `2..=MAX_BOARD_SIZE`.
    pub fn new(size: usize) -> Self {
        assert!(
            (2..=MAX_BOARD_SIZE).contains(&size),
            "board size {} out of range 2..={}",
            size,
            MAX_BOARD_SIZE
        );
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Calculate flat index from (col, row) coordinates.
    #[inline(always)]
    fn index(&self, col: usize, row: usize) -> Option<usize> {
        if col >= self.size || row >= self.size {
            return None;
        }
        Some(row * self.size + col)
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// The tile at (col, row), or `None` if the cell is empty or the
    /// coordinates are out of range.
    pub fn tile(&self, col: usize, row: usize) -> Option<Tile> {
        self.index(col, row)
            .and_then(|idx| self.cells[idx])
            .map(|value| Tile::new(col, row, value))
    }

    /// Iterate over every tile on the board.
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        self.cells.iter().enumerate().filter_map(|(idx, cell)| {
            cell.map(|value| Tile::new(idx % self.size, idx / self.size, value))
        })
    }

    /// Number of occupied cells.
    pub fn tile_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Place `tile` on the board.
    ///
    /// The target cell must be in range and empty; violating either is a
    /// contract error and leaves the board untouched.
    pub fn add_tile(&mut self, tile: Tile) -> Result<(), BoardError> {
        let idx = self
            .index(tile.col(), tile.row())
            .ok_or(BoardError::OutOfBounds {
                col: tile.col(),
                row: tile.row(),
                size: self.size,
            })?;
        if self.cells[idx].is_some() {
            return Err(BoardError::CellOccupied {
                col: tile.col(),
                row: tile.row(),
            });
        }
        self.cells[idx] = Some(tile.value());
        Ok(())
    }

    /// Move `tile` to (col, dest_row), merging if that cell holds an equal
    /// value. Returns true iff a merge occurred.
    ///
    /// Caller contract (the tilt engine computes destinations that satisfy
    /// it): `tile` describes an occupied source cell, the destination is in
    /// range, and the destination is empty or holds `tile`'s value.
    pub fn move_tile(&mut self, col: usize, dest_row: usize, tile: Tile) -> bool {
        let (Some(src), Some(dst)) = (self.index(tile.col(), tile.row()), self.index(col, dest_row))
        else {
            debug_assert!(false, "move_tile out of range");
            return false;
        };
        debug_assert_eq!(self.cells[src], Some(tile.value()), "stale source tile");
        if src == dst {
            return false;
        }

        self.cells[src] = None;
        match self.cells[dst] {
            None => {
                self.cells[dst] = Some(tile.value());
                false
            }
            Some(existing) => {
                debug_assert_eq!(existing, tile.value(), "merge with unequal value");
                self.cells[dst] = Some(tile.value() * 2);
                true
            }
        }
    }

    /// Clear the entire board.
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Build a board from rows listed top to bottom, 0 meaning empty.
    ///
    /// Rows are given in visual order (first slice is the top row), which
    /// keeps literals in tests readable. All rows must have the same length
    /// as the row count.
    pub fn from_rows(rows: &[&[u32]]) -> Self {
        let size = rows.len();
        assert!(
            rows.iter().all(|row| row.len() == size),
            "board rows must form a square"
        );
        let mut board = Self::new(size);
        for (i, row_values) in rows.iter().enumerate() {
            let row = size - 1 - i;
            for (col, &value) in row_values.iter().enumerate() {
                if value != 0 {
                    board.cells[row * size + col] = Some(value);
                }
            }
        }
        board
    }

    /// Dump the board as rows listed top to bottom, 0 meaning empty.
    pub fn to_rows(&self) -> Vec<Vec<u32>> {
        (0..self.size)
            .rev()
            .map(|row| {
                (0..self.size)
                    .map(|col| self.cells[row * self.size + col].unwrap_or(0))
                    .collect()
            })
            .collect()
    }
}
