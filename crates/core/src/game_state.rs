//! Game state module - score, game-over tracking, and observers
//!
//! `GameState` owns the board and orchestrates one game: it delegates tilts
//! to the [`TiltEngine`], folds merge points into the score, re-evaluates the
//! game-over condition eagerly after every mutation, and notifies registered
//! observers after each committed change.

use std::fmt;

use tui_2048_types::{Side, DEFAULT_BOARD_SIZE, WINNING_TILE};

use crate::board::{Board, BoardError};
use crate::rng::TileSpawner;
use crate::rules;
use crate::snapshot::GameSnapshot;
use crate::tile::Tile;
use crate::tilt::TiltEngine;

/// Listener for committed game mutations.
///
/// Called synchronously after a tilt that changed the board, after a tile is
/// added, and after a clear. The game does not depend on what observers do.
pub trait GameObserver {
    fn game_changed(&mut self, snapshot: &GameSnapshot);
}

/// The state of one 2048 game.
pub struct GameState {
    board: Board,
    engine: TiltEngine,
    spawner: TileSpawner,
    score: u32,
    /// Highest score reached in any finished game; survives `clear`.
    max_score: u32,
    game_over: bool,
    winning_tile: u32,
    observers: Vec<Box<dyn GameObserver>>,
}

impl GameState {
    /// A new game on an empty `size` x `size` board with score 0.
    pub fn new(size: usize, seed: u32) -> Self {
        Self {
            board: Board::new(size),
            engine: TiltEngine::new(),
            spawner: TileSpawner::new(seed),
            score: 0,
            max_score: 0,
            game_over: false,
            winning_tile: WINNING_TILE,
            observers: Vec::new(),
        }
    }

    /// Override the tile value that ends (and wins) the game.
    pub fn with_winning_tile(mut self, value: u32) -> Self {
        self.winning_tile = value;
        self.refresh_game_over();
        self
    }

    /// Build a game from rows listed top to bottom (0 = empty), with the
    /// given scores. The game-over flag is recomputed from the grid.
    ///
    /// Intended for tests and tools.
    pub fn from_rows(rows: &[&[u32]], score: u32, max_score: u32) -> Self {
        let mut state = Self {
            board: Board::from_rows(rows),
            engine: TiltEngine::new(),
            spawner: TileSpawner::default(),
            score,
            max_score,
            game_over: false,
            winning_tile: WINNING_TILE,
            observers: Vec::new(),
        };
        state.refresh_game_over();
        state
    }

    pub fn size(&self) -> usize {
        self.board.size()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Highest score of any finished game so far.
    pub fn max_score(&self) -> u32 {
        self.max_score
    }

    /// True iff the game is over. Kept current by every mutation; reading it
    /// has no side effects.
    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The tile at (col, row), if any.
    pub fn tile(&self, col: usize, row: usize) -> Option<Tile> {
        self.board.tile(col, row)
    }

    /// Register an observer for committed mutations.
    pub fn add_observer(&mut self, observer: Box<dyn GameObserver>) {
        self.observers.push(observer);
    }

    /// Tilt the board toward `side`. Returns true iff the board changed.
    ///
    /// Merge points are added to the score, the game-over flag is refreshed,
    /// and observers fire only when something actually moved.
    pub fn tilt(&mut self, side: Side) -> bool {
        let outcome = self.engine.tilt(&mut self.board, side);
        self.score += outcome.score_delta;
        self.refresh_game_over();
        if outcome.changed {
            self.notify_observers();
        }
        outcome.changed
    }

    /// Add `tile` to the board. The target cell must be empty and in range;
    /// violations are contract errors and mutate nothing.
    pub fn add_tile(&mut self, tile: Tile) -> Result<(), BoardError> {
        self.board.add_tile(tile)?;
        self.refresh_game_over();
        self.notify_observers();
        Ok(())
    }

    /// Spawn a random tile on an empty cell, or return `None` if the board
    /// is full.
    pub fn spawn_random_tile(&mut self) -> Option<Tile> {
        let tile = self.spawner.next_tile(&self.board)?;
        // The spawner only proposes empty cells, so placement cannot fail.
        self.add_tile(tile).ok().map(|()| tile)
    }

    /// Reset to an empty board and score 0. `max_score` is preserved.
    pub fn clear(&mut self) {
        self.score = 0;
        self.board.clear();
        self.refresh_game_over();
        self.notify_observers();
    }

    /// Write the current state into an existing snapshot (allocation-free).
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.fill_board(&self.board);
        out.score = self.score;
        out.max_score = self.max_score;
        out.game_over = self.game_over;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    /// Recompute the game-over flag from the board. On the transition to
    /// over, fold the current score into the high-water mark.
    fn refresh_game_over(&mut self) {
        self.game_over = rules::is_game_over(&self.board, self.winning_tile);
        if self.game_over {
            self.max_score = self.max_score.max(self.score);
        }
    }

    fn notify_observers(&mut self) {
        if self.observers.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        for observer in &mut self.observers {
            observer.game_changed(&snapshot);
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_SIZE, 1)
    }
}

/// Structural equality: grid contents, score, and game-over flag.
impl PartialEq for GameState {
    fn eq(&self, other: &Self) -> bool {
        self.board == other.board && self.score == other.score && self.game_over == other.game_over
    }
}

impl fmt::Debug for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameState")
            .field("board", &self.board)
            .field("score", &self.score)
            .field("max_score", &self.max_score)
            .field("game_over", &self.game_over)
            .field("observers", &self.observers.len())
            .finish()
    }
}
