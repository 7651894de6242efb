//! Grid Snake simulation core with timed power-ups, plus a terminal front end.
//!
//! The core (`snake`, `board`, `power_up`, `timer`, `game`) never touches the terminal or
//! the filesystem. Renderers pull a [`snapshot::Snapshot`] after each tick, input handlers
//! call [`game::Game::turn`], and high scores go through a [`score::HighScoreStore`].

pub mod board;
pub mod config;
pub mod direction;
pub mod error;
pub mod game;
pub mod input;
pub mod power_up;
pub mod renderer;
pub mod score;
pub mod snake;
pub mod snapshot;
pub mod terminal_runtime;
pub mod timer;
pub mod ui;
