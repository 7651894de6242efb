use serde::Serialize;

use crate::direction::Direction;
use crate::game::{Collision, GameStatus};
use crate::power_up::{Effects, PowerUpKind};
use crate::snake::Position;

/// Power-up as seen by a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PowerUpView {
    pub position: Position,
    pub kind: PowerUpKind,
    /// Share of the pickup lifetime left, `1.0` when freshly spawned.
    pub remaining_fraction: f32,
}

/// Immutable copy of everything a renderer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub grid_size: u16,
    /// Head first.
    pub snake: Vec<Position>,
    pub direction: Direction,
    pub apple: Option<Position>,
    pub power_up: Option<PowerUpView>,
    pub score: u32,
    pub high_score: u32,
    /// Score has passed the high score this game started with.
    pub new_high_score: bool,
    pub status: GameStatus,
    pub game_over: bool,
    pub collision: Option<Collision>,
    pub effects: Effects,
    /// Effect currently in flight and the share of its duration left.
    pub active_effect: Option<(PowerUpKind, f32)>,
    pub tick_interval_ms: u64,
}

impl Snapshot {
    #[must_use]
    pub fn head(&self) -> Option<Position> {
        self.snake.first().copied()
    }

    #[must_use]
    pub fn length(&self) -> usize {
        self.snake.len()
    }
}
