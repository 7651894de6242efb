use std::fs;
use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::ScoreError;

const APP_DIR_NAME: &str = "powerup-snake";
const SCORE_FILE_NAME: &str = "scores.json";

/// Score for a snake of `length` segments that has collected `power_ups` pickups.
#[must_use]
pub fn score_for(
    length: usize,
    initial_length: usize,
    power_ups: u32,
    points_per_segment: u32,
    points_per_power_up: u32,
) -> u32 {
    let grown = u32::try_from(length.saturating_sub(initial_length)).unwrap_or(u32::MAX);
    grown
        .saturating_mul(points_per_segment)
        .saturating_add(power_ups.saturating_mul(points_per_power_up))
}

/// Storage for the single persisted high-score value.
///
/// The game loads once on construction and saves once per game over.
pub trait HighScoreStore {
    fn load(&self) -> Result<u32, ScoreError>;
    fn save(&mut self, score: u32) -> Result<(), ScoreError>;
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct ScoreFile {
    high_score: u32,
}

/// High score kept in a small JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store at the platform data directory.
    #[must_use]
    pub fn at_default_location() -> Self {
        Self::new(scores_path())
    }
}

impl HighScoreStore for JsonFileStore {
    /// Returns `Ok(0)` when the score file does not yet exist (first run).
    fn load(&self) -> Result<u32, ScoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(e.into()),
        };

        let file: ScoreFile = serde_json::from_str(&raw)?;
        Ok(file.high_score)
    }

    /// Writes the score, creating parent directories when needed.
    fn save(&mut self, score: u32) -> Result<(), ScoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(&ScoreFile { high_score: score })?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

/// In-memory store that remembers every save.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    initial: u32,
    saved: Vec<u32>,
}

impl MemoryStore {
    #[must_use]
    pub fn with_high_score(initial: u32) -> Self {
        Self {
            initial,
            saved: Vec::new(),
        }
    }

    /// Values passed to `save`, oldest first.
    #[must_use]
    pub fn saved(&self) -> &[u32] {
        &self.saved
    }
}

impl HighScoreStore for MemoryStore {
    fn load(&self) -> Result<u32, ScoreError> {
        Ok(self.saved.last().copied().unwrap_or(self.initial))
    }

    fn save(&mut self, score: u32) -> Result<(), ScoreError> {
        self.saved.push(score);
        Ok(())
    }
}

/// Returns the platform-correct score file path.
#[must_use]
pub fn scores_path() -> PathBuf {
    let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(SCORE_FILE_NAME);
    base
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::{score_for, HighScoreStore, JsonFileStore, MemoryStore};
    use crate::error::ScoreError;

    #[test]
    fn score_counts_growth_and_power_ups() {
        assert_eq!(score_for(3, 3, 0, 10, 50), 0);
        assert_eq!(score_for(4, 3, 0, 10, 50), 10);
        assert_eq!(score_for(7, 3, 2, 10, 50), 140);
        assert_eq!(score_for(2, 3, 0, 10, 50), 0);
    }

    #[test]
    fn saved_score_is_loaded_back() {
        let path = unique_test_path("saved");
        let mut store = JsonFileStore::new(path.clone());

        store.save(42).expect("score save should succeed");
        assert_eq!(store.load().expect("load should succeed"), 42);

        cleanup_test_path(&path);
    }

    #[test]
    fn missing_score_file_returns_zero() {
        let store = JsonFileStore::new(unique_test_path("missing"));
        assert_eq!(store.load().expect("missing file should return Ok(0)"), 0);
    }

    #[test]
    fn malformed_score_file_returns_error() {
        let path = unique_test_path("malformed");
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("test parent directory should be creatable");
        }
        fs::write(&path, "not-json").expect("test file write should succeed");

        let store = JsonFileStore::new(path.clone());
        assert!(matches!(store.load(), Err(ScoreError::Format(_))));

        cleanup_test_path(&path);
    }

    #[test]
    fn memory_store_records_saves() {
        let mut store = MemoryStore::with_high_score(30);
        assert_eq!(store.load().unwrap(), 30);

        store.save(70).unwrap();
        assert_eq!(store.saved(), &[70]);
        assert_eq!(store.load().unwrap(), 70);
    }

    fn unique_test_path(label: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be after epoch")
            .as_nanos();

        std::env::temp_dir()
            .join("powerup-snake-score-tests")
            .join(format!("{label}-{nanos}.json"))
    }

    fn cleanup_test_path(path: &PathBuf) {
        let _ = fs::remove_file(path);
        if let Some(parent) = path.parent() {
            let _ = fs::remove_dir(parent);
        }
    }
}
