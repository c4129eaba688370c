//! Persistence for the one number that survives across sessions.

use std::{fs, path::PathBuf};

use log::{debug, error, warn};
use serde::{Deserialize, Serialize};

/// Save file kept in the working directory.
pub const SAVE_FILE: &str = "high_score.json";

#[derive(Debug, Default, Serialize, Deserialize)]
struct SaveData {
    high_score: u32,
}

/// Cached copy of the persisted high score, written through whenever a new
/// record is set.
#[derive(Clone, Debug)]
pub struct HighScoreStore {
    path: PathBuf,
    high_score: u32,
}

impl HighScoreStore {
    /// Reads the save file once, treating a missing or unreadable one as a
    /// high score of zero.
    #[must_use]
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let high_score = match fs::read_to_string(&path) {
            Ok(text) => match serde_json::from_str::<SaveData>(&text) {
                Ok(data) => data.high_score,
                Err(e) => {
                    warn!("Could not parse {}: {e}. Starting from zero", path.display());
                    0
                }
            },
            Err(e) => {
                debug!("No save file at {}: {e}", path.display());
                0
            }
        };
        Self { path, high_score }
    }

    #[must_use]
    pub fn load_default() -> Self {
        Self::load(SAVE_FILE)
    }

    #[must_use]
    pub fn get(&self) -> u32 {
        self.high_score
    }

    /// Remembers `score` when it beats the stored record. Returns whether a
    /// new record was set.
    pub fn record(&mut self, score: u32) -> bool {
        if score <= self.high_score {
            return false;
        }
        self.high_score = score;
        self.write();
        true
    }

    fn write(&self) {
        let data = SaveData {
            high_score: self.high_score,
        };
        match serde_json::to_string_pretty(&data) {
            Ok(text) => {
                if let Err(e) = fs::write(&self.path, text) {
                    error!("Could not write {}: {e}", self.path.display());
                }
            }
            Err(e) => error!("Could not serialize the save data: {e}"),
        }
    }
}
