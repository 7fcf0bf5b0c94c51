//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules and state management for a
//! 2048-style sliding-tile puzzle. It has **zero dependencies** on UI or I/O,
//! making it:
//!
//! - **Deterministic**: Same seed produces identical tile sequences
//! - **Testable**: Unit tests for every rule, black-box suites on top
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Fast**: The tilt hot path reuses one trace buffer and never allocates
//!
//! # Module Structure
//!
//! - [`board`]: N x N grid of optional tile values with checked mutations
//! - [`tile`]: immutable value + position record
//! - [`tilt`]: the canonical upward slide/merge algorithm behind all four
//!   directions
//! - [`rules`]: game-over predicates (winning tile, remaining moves)
//! - [`game_state`]: score, high-water mark, observers, orchestration
//! - [`rng`]: seeded LCG and the random tile spawner
//! - [`snapshot`]: `Copy` projection consumed by views and observers
//!
//! # Game Rules
//!
//! A tilt slides every tile as far as it goes toward the chosen side. Two
//! tiles that collide with equal values merge into one of twice the value,
//! which is added to the score. A tile created by a merge is inert for the
//! rest of that tilt, so three equal tiles in a row merge only the leading
//! pair. The game ends when a tile reaches the winning value (2048 by
//! default) or when the board is full with no equal neighbors left.
//!
//! # Example
//!
//! ```
//! use tui_2048_core::GameState;
//! use tui_2048_types::Side;
//!
//! let mut game = GameState::new(4, 12345);
//! game.spawn_random_tile();
//! game.spawn_random_tile();
//!
//! let changed = game.tilt(Side::West);
//! if changed {
//!     game.spawn_random_tile();
//! }
//! assert!(!game.game_over());
//! ```

pub mod board;
pub mod game_state;
pub mod rng;
pub mod rules;
pub mod snapshot;
pub mod tile;
pub mod tilt;

pub use tui_2048_types as types;

pub use board::{Board, BoardError};
pub use game_state::{GameObserver, GameState};
pub use rng::{SimpleRng, TileSpawner};
pub use snapshot::GameSnapshot;
pub use tile::Tile;
pub use tilt::{TiltEngine, TiltOutcome};
