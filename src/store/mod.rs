//! Session-meta persistence: a load-at-start, save-on-change collaborator.
//!
//! The games persist two integers each (high score, level). The store is
//! injected into the session lifecycle rather than reached as ambient
//! global state, so tests swap in an in-memory implementation.

mod error;

pub use error::StoreError;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Identity of a game whose session meta is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameKey {
    /// The tile-merge puzzle.
    TileMerge,
    /// The color-sort puzzle.
    ColorSort,
}

impl GameKey {
    /// Stable storage key for this game.
    pub fn as_str(self) -> &'static str {
        match self {
            GameKey::TileMerge => "tile_merge",
            GameKey::ColorSort => "color_sort",
        }
    }
}

/// Persistence collaborator for per-game session meta.
pub trait ScoreStore {
    /// Reads the stored high score for a game, if any.
    fn load_high_score(&self, key: GameKey) -> Result<Option<u32>, StoreError>;

    /// Overwrites the stored high score for a game.
    fn save_high_score(&mut self, key: GameKey, score: u32) -> Result<(), StoreError>;

    /// Reads the stored level for a game, if any.
    fn load_level(&self, key: GameKey) -> Result<Option<u32>, StoreError>;

    /// Overwrites the stored level for a game.
    fn save_level(&mut self, key: GameKey, level: u32) -> Result<(), StoreError>;
}

/// In-memory store for tests and simulations.
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreStore {
    high_scores: HashMap<GameKey, u32>,
    levels: HashMap<GameKey, u32>,
}

impl MemoryScoreStore {
    /// Creates an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoreStore for MemoryScoreStore {
    fn load_high_score(&self, key: GameKey) -> Result<Option<u32>, StoreError> {
        Ok(self.high_scores.get(&key).copied())
    }

    fn save_high_score(&mut self, key: GameKey, score: u32) -> Result<(), StoreError> {
        self.high_scores.insert(key, score);
        Ok(())
    }

    fn load_level(&self, key: GameKey) -> Result<Option<u32>, StoreError> {
        Ok(self.levels.get(&key).copied())
    }

    fn save_level(&mut self, key: GameKey, level: u32) -> Result<(), StoreError> {
        self.levels.insert(key, level);
        Ok(())
    }
}

/// On-disk serialized form of the store file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct StoreData {
    #[serde(default)]
    high_scores: HashMap<String, u32>,
    #[serde(default)]
    levels: HashMap<String, u32>,
}

/// JSON-file-backed store.
///
/// The whole file is read once at open and rewritten on every save; the
/// payload is a handful of integers, so durability beats cleverness.
#[derive(Debug)]
pub struct JsonScoreStore {
    path: PathBuf,
    data: StoreData,
}

impl JsonScoreStore {
    /// Opens a store file, creating an empty store if the file does not
    /// exist yet.
    #[instrument]
    pub fn open(path: impl AsRef<Path> + std::fmt::Debug) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let data = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw)?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "No store file yet, starting empty");
                StoreData::default()
            }
            Err(err) => return Err(err.into()),
        };

        info!(path = %path.display(), "Opened score store");
        Ok(Self { path, data })
    }

    fn persist(&self) -> Result<(), StoreError> {
        let raw = serde_json::to_string_pretty(&self.data)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

impl ScoreStore for JsonScoreStore {
    fn load_high_score(&self, key: GameKey) -> Result<Option<u32>, StoreError> {
        Ok(self.data.high_scores.get(key.as_str()).copied())
    }

    fn save_high_score(&mut self, key: GameKey, score: u32) -> Result<(), StoreError> {
        self.data.high_scores.insert(key.as_str().to_string(), score);
        self.persist()
    }

    fn load_level(&self, key: GameKey) -> Result<Option<u32>, StoreError> {
        Ok(self.data.levels.get(key.as_str()).copied())
    }

    fn save_level(&mut self, key: GameKey, level: u32) -> Result<(), StoreError> {
        self.data.levels.insert(key.as_str().to_string(), level);
        self.persist()
    }
}
