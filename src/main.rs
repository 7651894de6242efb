use std::fs::File;
use std::panic;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use clap::Parser;
use powerup_snake::config::GameConfig;
use powerup_snake::error::AppError;
use powerup_snake::game::{Game, GameStatus};
use powerup_snake::input::{poll_command, Command};
use powerup_snake::score::{HighScoreStore, JsonFileStore, MemoryStore};
use powerup_snake::terminal_runtime::{restore_terminal, TerminalSession};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Input poll timeout, roughly one frame at 60 Hz.
const FRAME_POLL: Duration = Duration::from_millis(16);

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// JSON file overriding the default game settings.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Cells per side of the square board.
    #[arg(long)]
    grid_size: Option<u16>,

    /// Seed for apple and power-up placement.
    #[arg(long)]
    seed: Option<u64>,

    /// Write tracing output to this file (filter with RUST_LOG).
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Keep the high score in memory only.
    #[arg(long)]
    no_persist: bool,
}

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_tracing(path)?;
    }

    let mut config = match &cli.config {
        Some(path) => GameConfig::from_json_path(path)?,
        None => GameConfig::default(),
    };
    if let Some(grid_size) = cli.grid_size {
        config.grid_size = grid_size;
    }

    install_panic_hook();

    if cli.no_persist {
        run(config, MemoryStore::default(), cli.seed)
    } else {
        run(config, JsonFileStore::at_default_location(), cli.seed)
    }
}

fn run<S: HighScoreStore>(config: GameConfig, store: S, seed: Option<u64>) -> Result<(), AppError> {
    let mut game = match seed {
        Some(seed) => Game::with_seed(config, store, seed)?,
        None => Game::new(config, store)?,
    };
    let mut session = TerminalSession::enter()?;
    let mut last_frame = Instant::now();

    info!("terminal session started");
    loop {
        session.draw(&game.snapshot())?;

        if let Some(command) = poll_command(FRAME_POLL)? {
            match command {
                Command::Quit => break,
                Command::Turn(direction) => {
                    game.turn(direction);
                }
                Command::Restart if game.status() == GameStatus::GameOver => game.reset(),
                Command::Restart => {}
            }
        }

        let now = Instant::now();
        game.advance(now.duration_since(last_frame));
        last_frame = now;
    }

    info!(high_score = game.high_score(), "terminal session ended");
    Ok(())
}

fn init_tracing(path: &Path) -> Result<(), AppError> {
    let file = File::create(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        default_hook(panic_info);
    }));
}
