//! Terminal 2048 runner (default binary).
//!
//! Wires the keyboard to the engine and the engine to the framebuffer
//! renderer. The settle delay lives here, not in the core: a move puts the
//! engine into its busy phase and this loop schedules the spawn/terminal
//! commit for `SETTLE_DELAY_MS` later, dropping input in between exactly as
//! the engine's reentrancy guard dictates.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_2048::core::GameEngine;
use tui_2048::input::{handle_key_event, should_quit};
use tui_2048::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_2048::types::{GameAction, SETTLE_DELAY_MS};

/// Poll granularity while nothing is scheduled.
const IDLE_POLL_MS: u64 = 50;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut engine = GameEngine::new(time_seed());
    engine.new_game();

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut settle_deadline: Option<Instant> = None;

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&engine.snapshot(), Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input with timeout until the pending commit (if any).
        let timeout = match settle_deadline {
            Some(deadline) => deadline.saturating_duration_since(Instant::now()),
            None => Duration::from_millis(IDLE_POLL_MS),
        };

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }

                    match handle_key_event(key) {
                        Some(GameAction::NewGame) => {
                            engine.new_game();
                            settle_deadline = None;
                        }
                        Some(GameAction::Move(direction)) => {
                            // A busy engine drops this on its own.
                            let result = engine.apply_move(direction);
                            if result.moved {
                                settle_deadline = Some(
                                    Instant::now() + Duration::from_millis(SETTLE_DELAY_MS),
                                );
                            }
                        }
                        None => {}
                    }
                }
            }
        }

        // Scheduled continuation: spawn + terminal check.
        if let Some(deadline) = settle_deadline {
            if Instant::now() >= deadline {
                engine.commit_spawn_and_check();
                settle_deadline = None;
            }
        }
    }
}

fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
