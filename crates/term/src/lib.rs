//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: the pure [`game_view`] draws a
//! snapshot into a framebuffer, and [`renderer`] flushes framebuffers to the
//! real terminal. Keeping the view pure means the board presentation is
//! unit-testable without a TTY.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
