//! Tilt engine - slides and merges tiles toward one side
//!
//! The engine knows a single movement: compact a column upward, merging equal
//! neighbors. All four directions reuse it by viewing the board through a
//! rotated coordinate mapping (see [`Side::to_board`]) under which the
//! requested direction becomes "up". The mapping is applied at the access
//! layer; the board itself never changes orientation.
//!
//! Merge rules:
//!
//! 1. Two tiles adjacent in the direction of motion with the same value merge
//!    into one tile of twice that value, and the new value is scored.
//! 2. A tile produced by a merge never merges again within the same tilt.
//! 3. Three equal tiles in a row merge the leading pair; the trailing tile
//!    slides up behind the result without joining it.

use tui_2048_types::Side;

use crate::board::Board;
use crate::tile::Tile;

/// What a single tilt did to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TiltOutcome {
    /// True iff at least one tile moved or merged.
    pub changed: bool,
    /// Sum of all merge-result values created by this tilt.
    pub score_delta: u32,
}

/// Borrowed view of a board with `side` rotated to "up".
///
/// Reads and writes go through [`Side::to_board`], so the engine below can be
/// written purely in canonical (column, row) terms.
struct SideView<'a> {
    board: &'a mut Board,
    side: Side,
}

impl SideView<'_> {
    fn size(&self) -> usize {
        self.board.size()
    }

    fn tile(&self, col: usize, row: usize) -> Option<Tile> {
        let (bc, br) = self.side.to_board(self.board.size(), col, row);
        self.board.tile(bc, br)
    }

    fn move_tile(&mut self, col: usize, dest_row: usize, tile: Tile) -> bool {
        let (bc, br) = self.side.to_board(self.board.size(), col, dest_row);
        self.board.move_tile(bc, br, tile)
    }
}

/// The tilt engine.
///
/// Owns the per-tilt merge trace so repeated tilts reuse one buffer. The
/// trace marks cells (in canonical coordinates) that already received a merge
/// during the current tilt; those cells are closed to further merges until
/// the next tilt resets the trace.
#[derive(Debug, Clone, Default)]
pub struct TiltEngine {
    merged: Vec<bool>,
}

impl TiltEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tilt `board` toward `side`, mutating it in place.
    pub fn tilt(&mut self, board: &mut Board, side: Side) -> TiltOutcome {
        let size = board.size();
        self.merged.clear();
        self.merged.resize(size * size, false);

        let mut view = SideView { board, side };
        let mut outcome = TiltOutcome::default();

        for col in 0..size {
            // Top-down within the column: the leading tiles settle or merge
            // first, and lower tiles then resolve against the updated stack.
            // This ordering is what makes a three-in-a-row merge only its
            // leading pair.
            for row in (0..size).rev() {
                let Some(tile) = view.tile(col, row) else {
                    continue;
                };
                let dest = self.destination_row(&view, col, row, tile.value());
                if dest == row {
                    continue;
                }
                outcome.changed = true;
                if view.move_tile(col, dest, tile) {
                    outcome.score_delta += tile.value() * 2;
                    self.merged[col * size + dest] = true;
                }
            }
        }

        outcome
    }

    /// Find where the tile at canonical (col, row) comes to rest.
    ///
    /// Scans upward from the cell above the tile. The first occupied cell
    /// decides: equal value and not yet merged this tilt means the tile lands
    /// there (a merge); anything else stops it one row below. An unobstructed
    /// scan runs to the top row.
    fn destination_row(&self, view: &SideView, col: usize, row: usize, value: u32) -> usize {
        let size = view.size();
        let mut dest = row;
        for probe in row + 1..size {
            dest = probe;
            let Some(above) = view.tile(col, probe) else {
                continue;
            };
            if above.value() != value || self.merged[col * size + probe] {
                dest -= 1;
            }
            break;
        }
        dest
    }
}
