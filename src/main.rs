//! Terminal 2048 runner (default binary).
//!
//! Uses crossterm for input and a framebuffer-based renderer. The loop is
//! event-driven: the game is turn-based, so we block on key events and only
//! repaint after a committed mutation (tracked through a game observer).

use std::cell::Cell;
use std::rc::Rc;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_2048::core::{GameObserver, GameSnapshot, GameState};
use tui_2048::input::{handle_key_event, should_quit};
use tui_2048::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_2048::types::{GameAction, DEFAULT_BOARD_SIZE};

/// Observer that raises a redraw flag whenever the game commits a change.
struct RedrawFlag(Rc<Cell<bool>>);

impl GameObserver for RedrawFlag {
    fn game_changed(&mut self, _snapshot: &GameSnapshot) {
        self.0.set(true);
    }
}

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn wall_clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let dirty = Rc::new(Cell::new(true));

    let mut game = GameState::new(DEFAULT_BOARD_SIZE, wall_clock_seed());
    game.add_observer(Box::new(RedrawFlag(Rc::clone(&dirty))));
    game.spawn_random_tile();
    game.spawn_random_tile();

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut viewport = crossterm::terminal::size().unwrap_or((80, 24));

    loop {
        if dirty.replace(false) {
            view.render_into(
                &game.snapshot(),
                Viewport::new(viewport.0, viewport.1),
                &mut fb,
            );
            term.draw(&fb)?;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                match handle_key_event(key) {
                    Some(GameAction::Tilt(side)) => {
                        // A tilt that moved nothing spawns nothing.
                        if !game.game_over() && game.tilt(side) {
                            game.spawn_random_tile();
                        }
                    }
                    Some(GameAction::Restart) => {
                        game.clear();
                        game.spawn_random_tile();
                        game.spawn_random_tile();
                    }
                    None => {}
                }
            }
            Event::Resize(w, h) => {
                viewport = (w, h);
                dirty.set(true);
            }
            _ => {}
        }
    }
}
