//! Game session - the tick/collision/scoring engine
//!
//! Owns all mutable game state and exposes exactly three mutation points:
//! `request_heading`, `tick`, and `reset`. Input sources and renderers go
//! through this surface only, which keeps the rules testable without a
//! terminal.

use arrayvec::ArrayVec;

use crate::core::apple::place_apple;
use crate::core::grid::OccupancyGrid;
use crate::core::rng::GameRng;
use crate::core::snapshot::GameSnapshot;
use crate::types::{Cell, GameCommand, Heading, Phase, GRID_CELLS, GRID_HEIGHT, GRID_WIDTH};

/// Heading the snake starts with on every (re)start.
const START_HEADING: Heading = Heading::Right;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameSession {
    /// Body cells head-first; `snake[0]` is the head.
    snake: ArrayVec<Cell, GRID_CELLS>,
    /// Occupancy mirror of `snake` for O(1) collision checks.
    grid: OccupancyGrid,
    /// Heading committed at the last tick.
    heading: Heading,
    /// Heading requested since the last tick; committed by the next one.
    pending: Option<Heading>,
    apple: Option<Cell>,
    score: u32,
    phase: Phase,
    won: bool,
    rng: GameRng,
}

impl GameSession {
    /// Create an idle session with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self {
            snake: ArrayVec::new(),
            grid: OccupancyGrid::new(),
            heading: START_HEADING,
            pending: None,
            apple: None,
            score: 0,
            phase: Phase::Idle,
            won: false,
            rng: GameRng::new(seed),
        }
    }

    /// Start (or restart) a run.
    ///
    /// Snake becomes a single cell at grid center heading right, score
    /// resets, and a fresh apple lands on a free cell. Callable from any
    /// phase; a mid-run call abandons the current run. The RNG stream
    /// continues, so consecutive runs see different apples.
    pub fn reset(&mut self) {
        self.snake.clear();
        self.grid.clear();

        let center = Cell::new(GRID_WIDTH / 2, GRID_HEIGHT / 2);
        self.snake.push(center);
        self.grid.occupy(center);

        self.heading = START_HEADING;
        self.pending = None;
        self.score = 0;
        self.won = false;
        self.apple = place_apple(&self.grid, &mut self.rng);
        self.phase = Phase::Running;
    }

    /// Alias for [`reset`](Self::reset); reads better at call sites that
    /// start the very first run.
    pub fn start(&mut self) {
        self.reset();
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::Over
    }

    pub fn won(&self) -> bool {
        self.won
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    pub fn apple(&self) -> Option<Cell> {
        self.apple
    }

    pub fn snake(&self) -> &[Cell] {
        &self.snake
    }

    /// Request a heading change for the next tick.
    ///
    /// Silently dropped when not Running, or when `new` points directly
    /// opposite the committed heading (the anti-180° guard: the head would
    /// otherwise collide with its own neck instantly).
    pub fn request_heading(&mut self, new: Heading) {
        if self.phase != Phase::Running {
            return;
        }
        if new.is_reverse_of(self.heading) {
            return;
        }
        self.pending = Some(new);
    }

    /// Advance the world by one tick.
    ///
    /// Returns true when the world changed (a move, a meal, or the end of
    /// the run); false when the session is not Running.
    pub fn tick(&mut self) -> bool {
        if self.phase != Phase::Running {
            return false;
        }

        if let Some(next) = self.pending.take() {
            self.heading = next;
        }

        // The head always exists while Running.
        let Some(&head) = self.snake.first() else {
            return false;
        };
        let candidate = head.step(self.heading);

        // Self-collision ends the run before any mutation; the tail counts,
        // since it only vacates on a non-eating move applied below.
        if self.grid.is_occupied(candidate) {
            self.phase = Phase::Over;
            return true;
        }

        self.snake.insert(0, candidate);
        self.grid.occupy(candidate);

        if Some(candidate) == self.apple {
            self.score += 1;
            self.apple = place_apple(&self.grid, &mut self.rng);
            if self.apple.is_none() {
                // Snake fills the grid: nowhere left to put an apple.
                self.won = true;
                self.phase = Phase::Over;
            }
        } else if let Some(tail) = self.snake.pop() {
            self.grid.vacate(tail);
        }

        true
    }

    /// Dispatch a discrete input command.
    pub fn apply_command(&mut self, command: GameCommand) {
        match command {
            GameCommand::Turn(heading) => self.request_heading(heading),
            GameCommand::Restart => self.reset(),
        }
    }

    /// Copy render state into a caller-owned snapshot buffer.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.snake.clear();
        out.snake
            .try_extend_from_slice(&self.snake)
            .unwrap_or_else(|_| unreachable!("snake and snapshot share capacity"));
        out.apple = self.apple;
        out.score = self.score;
        out.phase = self.phase;
        out.won = self.won;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    /// Build a Running session with an explicit layout (tests only).
    #[cfg(test)]
    pub fn with_layout(cells: &[Cell], heading: Heading, apple: Cell, seed: u32) -> Self {
        let mut session = Self::new(seed);
        for &cell in cells {
            assert!(
                !session.grid.is_occupied(cell),
                "layout has duplicate cell {cell:?}"
            );
            session.snake.push(cell);
            session.grid.occupy(cell);
        }
        assert!(
            !session.grid.is_occupied(apple),
            "apple {apple:?} overlaps the snake"
        );
        session.heading = heading;
        session.apple = Some(apple);
        session.phase = Phase::Running;
        session
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_invariants(session: &GameSession) {
        // No duplicate snake cells.
        let snake = session.snake();
        for (i, a) in snake.iter().enumerate() {
            for b in &snake[i + 1..] {
                assert_ne!(a, b, "duplicate snake cell while running");
            }
        }
        // Apple never on the snake.
        if let Some(apple) = session.apple() {
            assert!(!snake.contains(&apple), "apple on snake");
        }
        // Occupancy mirror agrees with the body list.
        for &cell in snake {
            assert!(session.grid.is_occupied(cell));
        }
        assert_eq!(session.grid.free_cells(), GRID_CELLS - snake.len());
    }

    #[test]
    fn test_new_session_is_idle() {
        let session = GameSession::new(12345);
        assert_eq!(session.phase(), Phase::Idle);
        assert!(session.snake().is_empty());
        assert_eq!(session.score(), 0);
        assert_eq!(session.apple(), None);
    }

    #[test]
    fn test_start_spawns_at_center() {
        let mut session = GameSession::new(12345);
        session.start();

        assert_eq!(session.phase(), Phase::Running);
        assert_eq!(
            session.snake(),
            &[Cell::new(GRID_WIDTH / 2, GRID_HEIGHT / 2)]
        );
        assert_eq!(session.heading(), Heading::Right);
        assert_eq!(session.score(), 0);
        assert!(session.apple().is_some());
        assert_invariants(&session);
    }

    #[test]
    fn test_tick_is_noop_when_idle_or_over() {
        let mut session = GameSession::new(1);
        assert!(!session.tick());
        assert_eq!(session.phase(), Phase::Idle);

        session.start();
        // Drive into a wall of its own body to end the run.
        let mut over = GameSession::with_layout(
            &[
                Cell::new(5, 5),
                Cell::new(6, 5),
                Cell::new(6, 6),
                Cell::new(5, 6),
            ],
            Heading::Right,
            Cell::new(9, 9),
            1,
        );
        assert!(over.tick());
        assert_eq!(over.phase(), Phase::Over);
        assert!(!over.tick());
    }

    #[test]
    fn test_eating_grows_scores_and_replaces_apple() {
        let mut session =
            GameSession::with_layout(&[Cell::new(5, 5)], Heading::Right, Cell::new(6, 5), 42);

        assert!(session.tick());

        assert_eq!(session.snake(), &[Cell::new(6, 5), Cell::new(5, 5)]);
        assert_eq!(session.score(), 1);
        let apple = session.apple().unwrap();
        assert!(!session.snake().contains(&apple));
        assert_invariants(&session);
    }

    #[test]
    fn test_non_eating_move_conserves_length_and_score() {
        let mut session = GameSession::with_layout(
            &[Cell::new(5, 5), Cell::new(4, 5)],
            Heading::Right,
            Cell::new(9, 9),
            42,
        );

        assert!(session.tick());

        assert_eq!(session.snake(), &[Cell::new(6, 5), Cell::new(5, 5)]);
        assert_eq!(session.score(), 0);
        assert_eq!(session.apple(), Some(Cell::new(9, 9)));
        assert_invariants(&session);
    }

    #[test]
    fn test_self_collision_ends_run_without_mutation() {
        let body = [
            Cell::new(5, 5),
            Cell::new(6, 5),
            Cell::new(6, 6),
            Cell::new(5, 6),
        ];
        let mut session =
            GameSession::with_layout(&body, Heading::Right, Cell::new(9, 9), 42);

        assert!(session.tick());

        assert_eq!(session.phase(), Phase::Over);
        assert!(!session.won());
        assert_eq!(session.snake(), &body);
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_head_wraps_across_the_right_edge() {
        let mut session = GameSession::with_layout(
            &[Cell::new(GRID_WIDTH - 1, 5)],
            Heading::Right,
            Cell::new(9, 9),
            42,
        );

        session.tick();
        assert_eq!(session.snake(), &[Cell::new(0, 5)]);
    }

    #[test]
    fn test_reverse_heading_request_is_dropped() {
        let mut session = GameSession::with_layout(
            &[Cell::new(5, 5), Cell::new(4, 5)],
            Heading::Right,
            Cell::new(9, 9),
            42,
        );

        session.request_heading(Heading::Left);
        session.tick();

        // Still moving right.
        assert_eq!(session.heading(), Heading::Right);
        assert_eq!(session.snake()[0], Cell::new(6, 5));
    }

    #[test]
    fn test_perpendicular_heading_commits_on_next_tick() {
        let mut session =
            GameSession::with_layout(&[Cell::new(5, 5)], Heading::Right, Cell::new(9, 9), 42);

        session.request_heading(Heading::Up);
        session.tick();

        assert_eq!(session.heading(), Heading::Up);
        assert_eq!(session.snake(), &[Cell::new(5, 4)]);
    }

    #[test]
    fn test_later_request_overwrites_pending() {
        let mut session =
            GameSession::with_layout(&[Cell::new(5, 5)], Heading::Right, Cell::new(9, 9), 42);

        // Both are legal against the committed Right heading; the last one
        // wins the tick.
        session.request_heading(Heading::Up);
        session.request_heading(Heading::Down);
        session.tick();

        assert_eq!(session.heading(), Heading::Down);
    }

    #[test]
    fn test_heading_request_is_noop_outside_running() {
        let mut session = GameSession::new(1);
        session.request_heading(Heading::Up);
        session.start();
        // The idle-phase request must not have been queued.
        session.tick();
        assert_eq!(session.heading(), Heading::Right);
    }

    #[test]
    fn test_reset_from_over_restores_fresh_run() {
        let mut session = GameSession::with_layout(
            &[
                Cell::new(5, 5),
                Cell::new(6, 5),
                Cell::new(6, 6),
                Cell::new(5, 6),
            ],
            Heading::Right,
            Cell::new(9, 9),
            42,
        );
        session.tick();
        assert_eq!(session.phase(), Phase::Over);

        session.reset();

        assert_eq!(session.phase(), Phase::Running);
        assert_eq!(
            session.snake(),
            &[Cell::new(GRID_WIDTH / 2, GRID_HEIGHT / 2)]
        );
        assert_eq!(session.score(), 0);
        assert!(!session.won());
        assert_invariants(&session);
    }

    #[test]
    fn test_filling_the_grid_is_a_win() {
        // Cover every cell except (1, 0); the head sits at (0, 0) about to
        // eat the apple in the hole.
        let hole = Cell::new(1, 0);
        let mut cells = vec![Cell::new(0, 0)];
        for y in 0..GRID_HEIGHT {
            for x in 0..GRID_WIDTH {
                let cell = Cell::new(x, y);
                if cell != hole && cell != Cell::new(0, 0) {
                    cells.push(cell);
                }
            }
        }
        let mut session = GameSession::with_layout(&cells, Heading::Right, hole, 42);

        assert!(session.tick());

        assert_eq!(session.phase(), Phase::Over);
        assert!(session.won());
        assert_eq!(session.score(), 1);
        assert_eq!(session.snake().len(), GRID_CELLS);
        assert_eq!(session.apple(), None);
    }

    #[test]
    fn test_reset_continues_the_rng_stream() {
        let mut a = GameSession::new(42);
        a.start();
        let first = a.apple();
        a.reset();
        let second = a.apple();

        // A same-seed session replays the same apple sequence across
        // resets: placement consumes one shared stream.
        let mut b = GameSession::new(42);
        b.start();
        assert_eq!(b.apple(), first);
        b.reset();
        assert_eq!(b.apple(), second);
    }

    #[test]
    fn test_apply_command_dispatch() {
        let mut session = GameSession::new(1);
        session.start();

        session.apply_command(GameCommand::Turn(Heading::Down));
        session.tick();
        assert_eq!(session.heading(), Heading::Down);

        session.apply_command(GameCommand::Restart);
        assert_eq!(session.score(), 0);
        assert_eq!(session.heading(), Heading::Right);
        assert_eq!(session.snake().len(), 1);
    }

    #[test]
    fn test_invariants_hold_over_a_long_run() {
        let mut session = GameSession::new(777);
        session.start();

        // Steer in a rotating pattern; restart whenever a run ends.
        let turns = [Heading::Down, Heading::Left, Heading::Up, Heading::Right];
        for step in 0..2000 {
            if !session.running() {
                session.reset();
            }
            if step % 3 == 0 {
                session.request_heading(turns[(step / 3) % turns.len()]);
            }
            session.tick();
            if session.running() {
                assert_invariants(&session);
            }
        }
    }

    #[test]
    fn test_snapshot_mirrors_session() {
        let mut session =
            GameSession::with_layout(&[Cell::new(5, 5)], Heading::Right, Cell::new(6, 5), 42);
        session.tick();

        let snap = session.snapshot();
        assert_eq!(snap.snake.as_slice(), session.snake());
        assert_eq!(snap.apple, session.apple());
        assert_eq!(snap.score, 1);
        assert_eq!(snap.phase, Phase::Running);

        // Buffer reuse path agrees with the convenience path.
        let mut reused = GameSnapshot::default();
        session.snapshot_into(&mut reused);
        assert_eq!(reused, snap);
    }
}
