//! Terminal Snake runner (default binary).
//!
//! Fixed-tick loop: render the current snapshot, poll input until the next
//! tick deadline, then advance the engine. The loop owns the only tick
//! cadence; a restart re-arms the deadline so no stale tick from the
//! previous run fires into the new one.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind, MouseButton, MouseEventKind};

use tui_snake::core::{GameSession, GameSnapshot};
use tui_snake::input::{handle_key_event, should_quit, SwipeTracker};
use tui_snake::term::{GameView, TerminalRenderer, Viewport};
use tui_snake::types::{GameCommand, TICK_MS};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(1);
    let mut session = GameSession::new(seed);
    session.start();

    let view = GameView::default();
    // Mouse drags stand in for touch swipes. Terminal cells are coarse, so
    // a couple of cells is already a deliberate gesture.
    let mut swipe = SwipeTracker::with_min_distance(2);
    let mut snap = GameSnapshot::default();

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        session.snapshot_into(&mut snap);
        let fb = view.render(&snap, Viewport::new(w, h));
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(command) = handle_key_event(key, session.game_over()) {
                        session.apply_command(command);
                        if command == GameCommand::Restart {
                            // Re-arm the cadence for the fresh run.
                            last_tick = Instant::now();
                        }
                    }
                }
                Event::Mouse(mouse) => match mouse.kind {
                    MouseEventKind::Down(MouseButton::Left) => {
                        swipe.press(mouse.column as i32, mouse.row as i32);
                    }
                    MouseEventKind::Up(MouseButton::Left) => {
                        if let Some(heading) =
                            swipe.release(mouse.column as i32, mouse.row as i32)
                        {
                            session.request_heading(heading);
                        }
                    }
                    _ => {}
                },
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            session.tick();
        }
    }
}
