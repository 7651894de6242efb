use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::ConfigError;

/// Default cells per side.
pub const DEFAULT_GRID_SIZE: u16 = 21;

/// Largest board the terminal renderer can lay out.
pub const MAX_GRID_SIZE: u16 = 255;

/// Default starting snake length.
pub const DEFAULT_INITIAL_LENGTH: usize = 3;

/// Base tick interval in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 200;

/// Tick interval while SPEED_UP is active.
pub const SPEED_UP_INTERVAL_MS: u64 = 100;

/// Tick interval while SPEED_DOWN is active.
pub const SPEED_DOWN_INTERVAL_MS: u64 = 300;

/// Lifetime of a power-up, both on the board and once applied.
pub const POWER_UP_DURATION_MS: u64 = 5000;

/// Chance of a power-up appearing when an apple is eaten.
pub const POWER_UP_SPAWN_CHANCE: f64 = 0.3;

pub const POINTS_PER_SEGMENT: u32 = 10;
pub const POINTS_PER_POWER_UP: u32 = 50;

/// Tunables for one game. Every field falls back to its default when absent
/// from a config file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub grid_size: u16,
    pub initial_length: usize,
    pub tick_interval_ms: u64,
    pub speed_up_interval_ms: u64,
    pub speed_down_interval_ms: u64,
    pub power_up_duration_ms: u64,
    pub power_up_spawn_chance: f64,
    pub points_per_segment: u32,
    pub points_per_power_up: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            initial_length: DEFAULT_INITIAL_LENGTH,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            speed_up_interval_ms: SPEED_UP_INTERVAL_MS,
            speed_down_interval_ms: SPEED_DOWN_INTERVAL_MS,
            power_up_duration_ms: POWER_UP_DURATION_MS,
            power_up_spawn_chance: POWER_UP_SPAWN_CHANCE,
            points_per_segment: POINTS_PER_SEGMENT,
            points_per_power_up: POINTS_PER_POWER_UP,
        }
    }
}

impl GameConfig {
    /// Reads and validates a JSON config file.
    pub fn from_json_path(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    /// Parses and validates a JSON config document.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the values describe a playable game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(2..=3).contains(&self.initial_length) {
            return Err(ConfigError::InitialLength(self.initial_length));
        }

        // The starting body runs from the centre to the far edge, so it needs
        // room below the centre row and at least one more cell for the apple.
        let minimum = 2 * self.initial_length as u16;
        if self.grid_size < minimum {
            return Err(ConfigError::GridTooSmall {
                actual: self.grid_size,
                minimum,
            });
        }
        if self.grid_size > MAX_GRID_SIZE {
            return Err(ConfigError::GridTooLarge {
                actual: self.grid_size,
                maximum: MAX_GRID_SIZE,
            });
        }

        for (name, value) in [
            ("tick_interval_ms", self.tick_interval_ms),
            ("speed_up_interval_ms", self.speed_up_interval_ms),
            ("speed_down_interval_ms", self.speed_down_interval_ms),
            ("power_up_duration_ms", self.power_up_duration_ms),
        ] {
            if value == 0 {
                return Err(ConfigError::ZeroInterval { name });
            }
        }

        if !(0.0..=1.0).contains(&self.power_up_spawn_chance) {
            return Err(ConfigError::SpawnChance(self.power_up_spawn_chance));
        }

        Ok(())
    }

    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    #[must_use]
    pub fn power_up_duration(&self) -> Duration {
        Duration::from_millis(self.power_up_duration_ms)
    }
}
