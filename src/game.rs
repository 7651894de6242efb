use std::collections::HashSet;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::board::Board;
use crate::config::GameConfig;
use crate::direction::Direction;
use crate::error::ConfigError;
use crate::power_up::{Effects, PowerUp, PowerUpKind};
use crate::score::{score_for, HighScoreStore};
use crate::snake::{Position, Snake};
use crate::snapshot::{PowerUpView, Snapshot};
use crate::timer::{Countdown, Interval, TimerId, TimerSlot};

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub enum GameStatus {
    /// Waiting for the first turn input.
    Ready,
    Running,
    /// Terminal until `reset`.
    GameOver,
}

/// Cause of a game over.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub enum Collision {
    Wall,
    SelfCollision,
}

/// What happened during one tick.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct TickOutcome {
    pub ate_apple: bool,
    pub collected: Option<PowerUpKind>,
    pub collision: Option<Collision>,
}

#[derive(Debug, Clone, Copy)]
struct ActiveEffect {
    kind: PowerUpKind,
    countdown: Countdown,
}

/// Simulation core: snake, apple, power-ups, timers and scoring for one session.
///
/// All mutation goes through [`Game::turn`], [`Game::update`], [`Game::advance`]
/// and [`Game::reset`]. The tick source and the effect expiry live in
/// [`TimerSlot`]s, so every reschedule cancels the previous timer first.
#[derive(Debug)]
pub struct Game<S> {
    config: GameConfig,
    board: Board,
    snake: Snake,
    apple: Option<Position>,
    power_up: Option<PowerUp>,
    effects: Effects,
    tick_interval: Duration,
    tick_timer: TimerSlot<Interval>,
    effect_timer: TimerSlot<ActiveEffect>,
    status: GameStatus,
    collision: Option<Collision>,
    score: u32,
    high_score: u32,
    /// High score as it stood when this game began.
    score_to_beat: u32,
    power_ups_collected: u32,
    last_tick: TickOutcome,
    tick_count: u64,
    store: S,
    rng: StdRng,
}

impl<S: HighScoreStore> Game<S> {
    /// Creates a game seeded from OS entropy.
    pub fn new(config: GameConfig, store: S) -> Result<Self, ConfigError> {
        Self::with_rng(config, store, StdRng::from_entropy())
    }

    /// Creates a deterministic game for tests and reproducible runs.
    pub fn with_seed(config: GameConfig, store: S, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, store, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, store: S, rng: StdRng) -> Result<Self, ConfigError> {
        config.validate()?;

        let high_score = match store.load() {
            Ok(score) => score,
            Err(error) => {
                warn!(%error, "could not load high score, starting from 0");
                0
            }
        };

        let board = Board::new(config.grid_size);
        let mut game = Self {
            snake: starting_snake(&config, board),
            tick_interval: config.tick_interval(),
            config,
            board,
            apple: None,
            power_up: None,
            effects: Effects::default(),
            tick_timer: TimerSlot::default(),
            effect_timer: TimerSlot::default(),
            status: GameStatus::Ready,
            collision: None,
            score: 0,
            high_score,
            score_to_beat: high_score,
            power_ups_collected: 0,
            last_tick: TickOutcome::default(),
            tick_count: 0,
            store,
            rng,
        };
        game.apple = game.random_free_cell();
        Ok(game)
    }

    /// Applies one pressed direction.
    ///
    /// The first press while `Ready` starts the tick loop. Presses are mapped
    /// through REVERSE_CONTROL before reaching the snake. Returns whether the
    /// snake accepted the turn.
    pub fn turn(&mut self, pressed: Direction) -> bool {
        match self.status {
            GameStatus::GameOver => return false,
            GameStatus::Ready => {
                self.status = GameStatus::Running;
                self.tick_timer.schedule(Interval::new(self.tick_interval));
                info!(interval = ?self.tick_interval, "game started");
            }
            GameStatus::Running => {}
        }

        let direction = self.effects.map_input(pressed);
        self.snake.turn(direction)
    }

    /// Runs one simulation tick. Does nothing unless the game is running.
    pub fn update(&mut self) -> TickOutcome {
        if self.status != GameStatus::Running {
            return TickOutcome::default();
        }

        self.tick_count += 1;
        let mut outcome = TickOutcome::default();

        let mut next_head = self.snake.next_head();
        if self.effects.wall_pass {
            next_head = self.board.wrap(next_head);
        }
        outcome.ate_apple = self.apple == Some(next_head);

        self.snake.advance(outcome.ate_apple);

        if !self.board.is_in_bounds(self.snake.head()) {
            if self.effects.wall_pass {
                self.snake.wrap_head(self.board.size());
            } else {
                outcome.collision = Some(Collision::Wall);
            }
        }
        if outcome.collision.is_none() && self.snake.head_overlaps_body() {
            outcome.collision = Some(Collision::SelfCollision);
        }

        if let Some(collision) = outcome.collision {
            self.last_tick = outcome;
            self.end_game(collision);
            return outcome;
        }

        if outcome.ate_apple {
            self.relocate_apple();
            self.maybe_spawn_power_up();
        }

        let head = self.snake.head();
        if let Some(power_up) = self.power_up.filter(|power_up| power_up.position == head) {
            self.power_up = None;
            self.power_ups_collected += 1;
            self.apply_power_up(power_up.kind);
            outcome.collected = Some(power_up.kind);
        }

        self.refresh_score();
        self.last_tick = outcome;
        outcome
    }

    /// Feeds `elapsed` wall-clock time through the timers, firing whatever
    /// falls due in time order. Returns the number of ticks run.
    pub fn advance(&mut self, elapsed: Duration) -> usize {
        let mut remaining = elapsed;
        let mut ticks = 0;

        while self.status == GameStatus::Running {
            let Some(step) = self.next_timer_due() else {
                break;
            };
            if step > remaining {
                self.elapse_timers(remaining);
                break;
            }

            self.elapse_timers(step);
            remaining -= step;

            if self
                .effect_timer
                .get()
                .is_some_and(|active| active.countdown.is_expired())
            {
                self.expire_effects();
            }

            if self
                .power_up
                .is_some_and(|power_up| power_up.lifetime.is_expired())
            {
                debug!("uncollected power-up despawned");
                self.power_up = None;
            }

            let tick_due = match self.tick_timer.get_mut() {
                Some(interval) if interval.is_due() => {
                    interval.rearm();
                    true
                }
                _ => false,
            };
            if tick_due {
                self.update();
                ticks += 1;
            }
        }

        ticks
    }

    /// Starts over from `Ready`. The high score survives.
    pub fn reset(&mut self) {
        self.tick_timer.cancel();
        self.effect_timer.cancel();

        self.snake = starting_snake(&self.config, self.board);
        self.power_up = None;
        self.effects = Effects::default();
        self.tick_interval = self.config.tick_interval();
        self.status = GameStatus::Ready;
        self.collision = None;
        self.score = 0;
        self.power_ups_collected = 0;
        self.score_to_beat = self.high_score;
        self.last_tick = TickOutcome::default();
        self.tick_count = 0;
        self.apple = None;
        self.apple = self.random_free_cell();

        info!(high_score = self.high_score, "game reset");
    }

    /// Immutable view for renderers.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            grid_size: self.board.size(),
            snake: self.snake.segments().copied().collect(),
            direction: self.snake.direction(),
            apple: self.apple,
            power_up: self.power_up.map(|power_up| PowerUpView {
                position: power_up.position,
                kind: power_up.kind,
                remaining_fraction: power_up.lifetime.fraction_remaining(),
            }),
            score: self.score,
            high_score: self.high_score,
            new_high_score: self.score > self.score_to_beat,
            status: self.status,
            game_over: self.status == GameStatus::GameOver,
            collision: self.collision,
            effects: self.effects,
            active_effect: self
                .effect_timer
                .get()
                .map(|active| (active.kind, active.countdown.fraction_remaining())),
            tick_interval_ms: u64::try_from(self.tick_interval.as_millis()).unwrap_or(u64::MAX),
        }
    }

    /// Replaces the snake, for scripted scenarios.
    pub fn set_snake(&mut self, snake: Snake) {
        self.snake = snake;
    }

    /// Moves the apple, for scripted scenarios.
    pub fn set_apple(&mut self, position: Position) {
        self.apple = Some(position);
    }

    /// Places a fresh power-up pickup, for scripted scenarios.
    pub fn set_power_up(&mut self, position: Position, kind: PowerUpKind) {
        self.power_up = Some(PowerUp::new(
            position,
            kind,
            self.config.power_up_duration(),
        ));
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn collision(&self) -> Option<Collision> {
        self.collision
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    #[must_use]
    pub fn power_ups_collected(&self) -> u32 {
        self.power_ups_collected
    }

    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    #[must_use]
    pub fn effects(&self) -> Effects {
        self.effects
    }

    #[must_use]
    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    #[must_use]
    pub fn apple(&self) -> Option<Position> {
        self.apple
    }

    #[must_use]
    pub fn power_up(&self) -> Option<&PowerUp> {
        self.power_up.as_ref()
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Outcome of the most recent tick.
    #[must_use]
    pub fn last_tick(&self) -> TickOutcome {
        self.last_tick
    }

    /// Id of the live tick source, `None` unless running.
    #[must_use]
    pub fn tick_timer_id(&self) -> Option<TimerId> {
        self.tick_timer.id()
    }

    /// Id of the pending effect expiry, if an effect is in flight.
    #[must_use]
    pub fn effect_timer_id(&self) -> Option<TimerId> {
        self.effect_timer.id()
    }

    /// Time left on the effect in flight.
    #[must_use]
    pub fn effect_remaining(&self) -> Option<Duration> {
        self.effect_timer
            .get()
            .map(|active| active.countdown.remaining())
    }

    fn next_timer_due(&self) -> Option<Duration> {
        [
            self.tick_timer.get().map(Interval::until_due),
            self.effect_timer
                .get()
                .map(|active| active.countdown.remaining()),
            self.power_up.map(|power_up| power_up.lifetime.remaining()),
        ]
        .into_iter()
        .flatten()
        .min()
    }

    fn elapse_timers(&mut self, elapsed: Duration) {
        if let Some(interval) = self.tick_timer.get_mut() {
            interval.elapse(elapsed);
        }
        if let Some(active) = self.effect_timer.get_mut() {
            active.countdown.elapse(elapsed);
        }
        if let Some(power_up) = self.power_up.as_mut() {
            power_up.lifetime.elapse(elapsed);
        }
    }

    fn occupied_cells(&self) -> HashSet<Position> {
        let mut occupied: HashSet<Position> = self.snake.segments().copied().collect();
        occupied.extend(self.apple);
        occupied.extend(self.power_up.map(|power_up| power_up.position));
        occupied
    }

    fn random_free_cell(&mut self) -> Option<Position> {
        let occupied = self.occupied_cells();
        self.board.random_free_cell(&mut self.rng, &occupied)
    }

    fn relocate_apple(&mut self) {
        self.apple = None;
        self.apple = self.random_free_cell();
        match self.apple {
            Some(apple) => debug!(x = apple.x, y = apple.y, "apple relocated"),
            None => warn!("board is full, no cell left for the apple"),
        }
    }

    fn maybe_spawn_power_up(&mut self) {
        if self.power_up.is_some() || !self.rng.gen_bool(self.config.power_up_spawn_chance) {
            return;
        }

        let Some(position) = self.random_free_cell() else {
            warn!("board is full, skipping power-up spawn");
            return;
        };
        let kind = PowerUpKind::random(&mut self.rng);
        self.power_up = Some(PowerUp::new(
            position,
            kind,
            self.config.power_up_duration(),
        ));
        debug!(?kind, x = position.x, y = position.y, "power-up spawned");
    }

    /// Starts `kind`'s effect, replacing whatever effect was in flight.
    fn apply_power_up(&mut self, kind: PowerUpKind) {
        let replaced = self.effect_timer.get().map(|active| active.kind);
        self.effect_timer.schedule(ActiveEffect {
            kind,
            countdown: Countdown::new(self.config.power_up_duration()),
        });

        self.effects = kind.effects();
        self.set_tick_interval(kind.tick_interval(&self.config));
        debug!(?kind, ?replaced, "power-up applied");
    }

    /// Reverts every effect, whichever one was in flight.
    fn expire_effects(&mut self) {
        let expired = self.effect_timer.cancel();
        self.effects = Effects::default();
        self.set_tick_interval(self.config.tick_interval());
        debug!(?expired, "power-up effect expired");
    }

    /// Restarts the tick source when the interval actually changes.
    fn set_tick_interval(&mut self, interval: Duration) {
        if interval == self.tick_interval {
            return;
        }

        self.tick_interval = interval;
        if self.tick_timer.is_active() {
            self.tick_timer.schedule(Interval::new(interval));
            debug!(?interval, "tick source rescheduled");
        }
    }

    fn refresh_score(&mut self) {
        self.score = score_for(
            self.snake.len(),
            self.config.initial_length,
            self.power_ups_collected,
            self.config.points_per_segment,
            self.config.points_per_power_up,
        );
        self.high_score = self.high_score.max(self.score);
    }

    fn end_game(&mut self, collision: Collision) {
        self.tick_timer.cancel();
        self.effect_timer.cancel();
        self.refresh_score();
        self.status = GameStatus::GameOver;
        self.collision = Some(collision);

        if let Err(error) = self.store.save(self.high_score) {
            warn!(%error, "could not save high score");
        }
        info!(
            ?collision,
            score = self.score,
            high_score = self.high_score,
            "game over"
        );
    }
}

fn starting_snake(config: &GameConfig, board: Board) -> Snake {
    Snake::starting(board.centre(), config.initial_length, Direction::Up)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{Collision, Game, GameStatus, TickOutcome};
    use crate::config::GameConfig;
    use crate::direction::Direction;
    use crate::power_up::PowerUpKind;
    use crate::score::MemoryStore;
    use crate::snake::{Position, Snake};

    fn quiet_config() -> GameConfig {
        GameConfig {
            power_up_spawn_chance: 0.0,
            ..GameConfig::default()
        }
    }

    fn running_game(config: GameConfig) -> Game<MemoryStore> {
        let mut game =
            Game::with_seed(config, MemoryStore::default(), 7).expect("config should be valid");
        game.set_apple(Position::new(0, 0));
        game.turn(Direction::Up);
        game
    }

    #[test]
    fn new_game_waits_for_first_input() {
        let mut game = Game::with_seed(quiet_config(), MemoryStore::default(), 1).unwrap();
        let head_before = game.snake().head();

        assert_eq!(game.status(), GameStatus::Ready);
        assert_eq!(game.update(), TickOutcome::default());
        assert_eq!(game.advance(Duration::from_secs(2)), 0);
        assert_eq!(game.snake().head(), head_before);
        assert_eq!(game.tick_timer_id(), None);
    }

    #[test]
    fn first_turn_starts_tick_source() {
        let mut game = Game::with_seed(quiet_config(), MemoryStore::default(), 1).unwrap();

        assert!(!game.turn(Direction::Down));

        assert_eq!(game.status(), GameStatus::Running);
        assert!(game.tick_timer_id().is_some());
        assert_eq!(game.snake().pending_direction(), Direction::Up);
    }

    #[test]
    fn apple_never_spawns_on_snake() {
        for seed in 0..50 {
            let game = Game::with_seed(quiet_config(), MemoryStore::default(), seed).unwrap();
            let apple = game.apple().expect("fresh board has room for an apple");
            assert!(!game.snake().occupies(apple));
        }
    }

    #[test]
    fn wall_collision_ends_game_and_saves_once() {
        let mut game = running_game(quiet_config());
        game.set_snake(Snake::starting(Position::new(0, 5), 3, Direction::Up));

        let outcome = game.update();

        assert_eq!(outcome.collision, Some(Collision::Wall));
        assert_eq!(game.status(), GameStatus::GameOver);
        assert_eq!(game.tick_timer_id(), None);
        assert_eq!(game.store().saved(), &[0]);

        assert!(!game.turn(Direction::Left));
        game.update();
        assert_eq!(game.store().saved().len(), 1);
    }

    #[test]
    fn moving_into_vacated_tail_is_safe() {
        let mut game = running_game(quiet_config());
        game.set_snake(Snake::from_segments(
            vec![
                Position::new(5, 5),
                Position::new(5, 6),
                Position::new(6, 6),
                Position::new(6, 5),
            ],
            Direction::Down,
        ));

        game.update();

        assert_eq!(game.status(), GameStatus::Running);
        assert_eq!(game.snake().head(), Position::new(6, 5));
    }

    #[test]
    fn collecting_power_up_scores_fifty() {
        let mut game = running_game(quiet_config());
        game.set_power_up(Position::new(9, 10), PowerUpKind::SpeedUp);

        let outcome = game.update();

        assert_eq!(outcome.collected, Some(PowerUpKind::SpeedUp));
        assert_eq!(game.score(), 50);
        assert_eq!(game.power_ups_collected(), 1);
        assert!(game.power_up().is_none());
        assert_eq!(game.tick_interval(), Duration::from_millis(100));
    }

    #[test]
    fn speed_change_reschedules_tick_source() {
        let mut game = running_game(quiet_config());
        let original = game.tick_timer_id();
        game.set_power_up(Position::new(9, 10), PowerUpKind::SpeedDown);

        game.update();

        assert_ne!(game.tick_timer_id(), original);
        assert!(game.tick_timer_id().is_some());
        // Three ticks at 300ms, none left over.
        assert_eq!(game.advance(Duration::from_millis(900)), 3);
    }

    #[test]
    fn advance_runs_ticks_at_the_current_interval() {
        let mut game = running_game(quiet_config());

        assert_eq!(game.advance(Duration::from_millis(450)), 2);
        assert_eq!(game.advance(Duration::from_millis(150)), 1);
        assert_eq!(game.tick_count(), 3);
        assert_eq!(game.snake().head(), Position::new(7, 10));
    }

    #[test]
    fn apple_pickup_may_spawn_power_up_on_free_cell() {
        let config = GameConfig {
            power_up_spawn_chance: 1.0,
            ..GameConfig::default()
        };
        let mut game = running_game(config);
        game.set_apple(Position::new(9, 10));

        game.update();

        let power_up = game.power_up().expect("spawn chance is certain");
        assert!(!game.snake().occupies(power_up.position));
        assert_ne!(Some(power_up.position), game.apple());
    }

    #[test]
    fn live_power_up_blocks_another_spawn() {
        let config = GameConfig {
            power_up_spawn_chance: 1.0,
            ..GameConfig::default()
        };
        let mut game = running_game(config);
        game.set_power_up(Position::new(0, 20), PowerUpKind::WallPass);
        game.set_apple(Position::new(9, 10));

        game.update();

        let power_up = game.power_up().expect("existing pickup stays");
        assert_eq!(power_up.position, Position::new(0, 20));
        assert_eq!(power_up.kind, PowerUpKind::WallPass);
    }

    #[test]
    fn uncollected_power_up_despawns_without_effect() {
        let config = GameConfig {
            power_up_duration_ms: 1000,
            ..quiet_config()
        };
        let mut game = running_game(config);
        game.set_apple(Position::new(0, 20));
        game.set_power_up(Position::new(0, 0), PowerUpKind::SpeedUp);

        game.advance(Duration::from_millis(999));
        assert!(game.power_up().is_some());

        game.advance(Duration::from_millis(1));
        assert!(game.power_up().is_none());
        assert_eq!(game.power_ups_collected(), 0);
        assert_eq!(game.tick_interval(), Duration::from_millis(200));
    }

    #[test]
    fn full_board_leaves_no_apple() {
        let config = GameConfig {
            grid_size: 4,
            initial_length: 2,
            ..quiet_config()
        };
        let mut game = running_game(config);
        game.set_snake(Snake::from_segments(
            vec![
                Position::new(0, 1),
                Position::new(0, 2),
                Position::new(0, 3),
                Position::new(1, 3),
                Position::new(1, 2),
                Position::new(1, 1),
                Position::new(1, 0),
                Position::new(2, 0),
                Position::new(2, 1),
                Position::new(2, 2),
                Position::new(2, 3),
                Position::new(3, 3),
                Position::new(3, 2),
                Position::new(3, 1),
                Position::new(3, 0),
            ],
            Direction::Left,
        ));
        game.set_apple(Position::new(0, 0));

        let outcome = game.update();

        assert!(outcome.ate_apple);
        assert_eq!(game.status(), GameStatus::Running);
        assert_eq!(game.snake().len(), 16);
        assert_eq!(game.apple(), None);
        assert_eq!(game.score(), 140);
    }

    #[test]
    fn high_score_is_loaded_from_store() {
        let mut game =
            Game::with_seed(quiet_config(), MemoryStore::with_high_score(500), 3).unwrap();
        game.set_apple(Position::new(9, 10));
        game.turn(Direction::Up);

        game.update();

        assert_eq!(game.score(), 10);
        assert_eq!(game.high_score(), 500);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = GameConfig {
            grid_size: 3,
            ..GameConfig::default()
        };
        assert!(Game::with_seed(config, MemoryStore::default(), 0).is_err());
    }

    #[test]
    fn game_over_cancels_effect_in_flight() {
        let mut game = running_game(quiet_config());
        game.set_power_up(Position::new(9, 10), PowerUpKind::ReverseControl);
        game.update();
        assert!(game.effect_timer_id().is_some());
        assert!(game.effects().reverse_control);

        game.set_snake(Snake::starting(Position::new(0, 3), 3, Direction::Up));
        game.update();

        assert_eq!(game.status(), GameStatus::GameOver);
        assert_eq!(game.tick_timer_id(), None);
        assert_eq!(game.effect_timer_id(), None);
        assert_eq!(game.snapshot().active_effect, None);
    }

    #[test]
    fn last_tick_reports_what_happened() {
        let mut game = running_game(quiet_config());
        assert_eq!(game.last_tick(), TickOutcome::default());

        game.set_apple(Position::new(9, 10));
        game.update();
        assert!(game.last_tick().ate_apple);
        assert_eq!(game.last_tick().collected, None);

        game.set_apple(Position::new(0, 0));
        game.set_power_up(Position::new(8, 10), PowerUpKind::WallPass);
        game.update();
        assert!(!game.last_tick().ate_apple);
        assert_eq!(game.last_tick().collected, Some(PowerUpKind::WallPass));
        assert_eq!(game.collision(), None);

        game.set_snake(Snake::from_segments(
            vec![
                Position::new(5, 5),
                Position::new(5, 6),
                Position::new(6, 6),
                Position::new(6, 5),
                Position::new(7, 5),
            ],
            Direction::Down,
        ));
        game.update();
        assert_eq!(
            game.last_tick().collision,
            Some(Collision::SelfCollision)
        );
        assert_eq!(game.collision(), Some(Collision::SelfCollision));
    }

    #[test]
    fn reset_may_place_apple_where_it_was() {
        let config = GameConfig {
            grid_size: 4,
            initial_length: 2,
            power_up_spawn_chance: 0.0,
            ..GameConfig::default()
        };
        let mut hits = 0;

        for seed in 0..200 {
            let mut game = Game::with_seed(config.clone(), MemoryStore::default(), seed).unwrap();
            let old = game.apple();
            game.reset();

            let apple = game.apple().expect("reset board has room for an apple");
            assert!(!game.snake().occupies(apple));
            if Some(apple) == old {
                hits += 1;
            }
        }

        assert!(hits > 0);
    }

    #[test]
    fn new_high_score_needs_to_beat_the_starting_record() {
        let mut game =
            Game::with_seed(quiet_config(), MemoryStore::with_high_score(10), 7).unwrap();
        game.set_apple(Position::new(9, 10));
        game.turn(Direction::Up);

        game.update();
        assert_eq!(game.score(), 10);
        assert!(!game.snapshot().new_high_score);

        game.set_apple(Position::new(8, 10));
        game.update();
        assert_eq!(game.score(), 20);
        assert!(game.snapshot().new_high_score);

        game.reset();
        assert!(!game.snapshot().new_high_score);
    }
}
