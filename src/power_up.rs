use std::time::Duration;

use rand::Rng;
use serde::Serialize;

use crate::config::GameConfig;
use crate::direction::Direction;
use crate::snake::Position;
use crate::timer::Countdown;

/// Power-up variants and the effect each one applies.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize)]
pub enum PowerUpKind {
    SpeedUp,
    SpeedDown,
    WallPass,
    ReverseControl,
}

impl PowerUpKind {
    pub const ALL: [Self; 4] = [
        Self::SpeedUp,
        Self::SpeedDown,
        Self::WallPass,
        Self::ReverseControl,
    ];

    /// Picks a kind uniformly at random.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::SpeedUp => "Speed up",
            Self::SpeedDown => "Slow down",
            Self::WallPass => "Wall pass",
            Self::ReverseControl => "Reversed",
        }
    }

    /// Tick interval in force while this effect is active.
    #[must_use]
    pub fn tick_interval(self, config: &GameConfig) -> Duration {
        let millis = match self {
            Self::SpeedUp => config.speed_up_interval_ms,
            Self::SpeedDown => config.speed_down_interval_ms,
            Self::WallPass | Self::ReverseControl => config.tick_interval_ms,
        };
        Duration::from_millis(millis)
    }

    /// Effect flags in force while this effect is active.
    #[must_use]
    pub fn effects(self) -> Effects {
        match self {
            Self::SpeedUp | Self::SpeedDown => Effects::default(),
            Self::WallPass => Effects {
                wall_pass: true,
                reverse_control: false,
            },
            Self::ReverseControl => Effects {
                wall_pass: false,
                reverse_control: true,
            },
        }
    }
}

/// Collision and steering modifiers. Only one power-up is ever in flight, so
/// these are replaced wholesale rather than tracked per kind.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize)]
pub struct Effects {
    pub wall_pass: bool,
    pub reverse_control: bool,
}

impl Effects {
    /// Translates a pressed direction into the direction the snake should turn.
    #[must_use]
    pub fn map_input(self, pressed: Direction) -> Direction {
        if self.reverse_control {
            pressed.opposite()
        } else {
            pressed
        }
    }
}

/// Uncollected power-up lying on the board.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerUp {
    pub position: Position,
    pub kind: PowerUpKind,
    pub lifetime: Countdown,
}

impl PowerUp {
    #[must_use]
    pub fn new(position: Position, kind: PowerUpKind, lifetime: Duration) -> Self {
        Self {
            position,
            kind,
            lifetime: Countdown::new(lifetime),
        }
    }
}
