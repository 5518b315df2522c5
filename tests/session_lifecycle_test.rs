//! Integration tests for the engine's public surface.

use tui_snake::core::{GameSession, GameSnapshot};
use tui_snake::types::{GameCommand, Heading, Phase, GRID_CELLS, GRID_HEIGHT, GRID_WIDTH};

#[test]
fn test_session_lifecycle() {
    let mut session = GameSession::new(12345);
    assert_eq!(session.phase(), Phase::Idle);

    session.start();
    assert_eq!(session.phase(), Phase::Running);
    assert_eq!(session.snake().len(), 1);
    assert_eq!(session.snake()[0].x, GRID_WIDTH / 2);
    assert_eq!(session.snake()[0].y, GRID_HEIGHT / 2);
    assert_eq!(session.score(), 0);
    assert!(session.apple().is_some());
}

#[test]
fn test_tick_moves_the_head_rightward_by_default() {
    let mut session = GameSession::new(12345);
    session.start();
    let head_before = session.snake()[0];

    assert!(session.tick());

    let head_after = session.snake()[0];
    assert_eq!(head_after.y, head_before.y);
    assert_eq!(head_after.x, (head_before.x + 1) % GRID_WIDTH);
}

#[test]
fn test_same_seed_replays_identically() {
    let mut a = GameSession::new(99);
    let mut b = GameSession::new(99);
    a.start();
    b.start();

    for step in 0..200 {
        if step % 7 == 0 {
            a.apply_command(GameCommand::Turn(Heading::Down));
            b.apply_command(GameCommand::Turn(Heading::Down));
        }
        if step % 13 == 0 {
            a.apply_command(GameCommand::Turn(Heading::Right));
            b.apply_command(GameCommand::Turn(Heading::Right));
        }
        a.tick();
        b.tick();
        assert_eq!(a.snapshot(), b.snapshot(), "diverged at step {step}");
    }
}

#[test]
fn test_restart_command_resets_mid_run() {
    let mut session = GameSession::new(7);
    session.start();

    for _ in 0..5 {
        session.tick();
    }
    session.apply_command(GameCommand::Restart);

    assert_eq!(session.phase(), Phase::Running);
    assert_eq!(session.snake().len(), 1);
    assert_eq!(session.score(), 0);
}

#[test]
fn test_long_run_never_corrupts_state() {
    let mut session = GameSession::new(4242);
    session.start();
    let mut snap = GameSnapshot::default();

    let turns = [Heading::Down, Heading::Left, Heading::Up, Heading::Right];
    for step in 0..5000 {
        if session.phase() != Phase::Running {
            session.apply_command(GameCommand::Restart);
        }
        if step % 4 == 0 {
            session.request_heading(turns[(step / 4) % turns.len()]);
        }
        session.tick();
        session.snapshot_into(&mut snap);

        assert!(snap.snake.len() <= GRID_CELLS);
        if snap.phase == Phase::Running {
            // No duplicate cells, apple off the snake, all cells in bounds.
            for (i, a) in snap.snake.iter().enumerate() {
                assert!(a.x >= 0 && a.x < GRID_WIDTH && a.y >= 0 && a.y < GRID_HEIGHT);
                assert!(!snap.snake[i + 1..].contains(a), "duplicate cell at step {step}");
            }
            let apple = snap.apple.expect("running game always has an apple");
            assert!(!snap.snake.contains(&apple), "apple on snake at step {step}");
        }
    }
}

#[test]
fn test_turn_commands_only_take_effect_on_ticks() {
    let mut session = GameSession::new(3);
    session.start();

    // Queue a turn; the committed heading is unchanged until the tick.
    session.apply_command(GameCommand::Turn(Heading::Up));
    assert_eq!(session.heading(), Heading::Right);

    session.tick();
    assert_eq!(session.heading(), Heading::Up);
}
