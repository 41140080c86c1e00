//! Target catalog: which secret word a game plays.
//!
//! Games are identified by an integer id. Without one, the daily word is used, counted in
//! whole days since 2024-01-01.

pub mod error;

pub use error::{TargetError, TargetResult};

use std::path::Path;

use chrono::NaiveDate;

use crate::words::normalize;

/// Day zero of the daily rotation.
pub const EPOCH_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2024, 1, 1) {
    Some(date) => date,
    None => panic!("invalid epoch date"),
};

/// Whole days between [`EPOCH_DATE`] and `date` (negative before the epoch).
pub fn daily_game_id(date: NaiveDate) -> i64 {
    date.signed_duration_since(EPOCH_DATE).num_days()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetCatalog {
    targets: Vec<String>,
}

impl TargetCatalog {
    /// Builds a catalog from raw words, normalizing and dropping blanks.
    pub fn new(targets: Vec<String>) -> TargetResult<Self> {
        let targets: Vec<String> = targets
            .iter()
            .map(|t| normalize(t))
            .filter(|t| !t.is_empty())
            .collect();

        if targets.is_empty() {
            return Err(TargetError::Empty);
        }
        Ok(Self { targets })
    }

    /// Loads a JSON array of words.
    pub fn from_json_file(path: &Path) -> TargetResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| TargetError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let targets: Vec<String> =
            serde_json::from_str(&raw).map_err(|source| TargetError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        Self::new(targets)
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Target for an explicit game id (`|id| mod len`).
    pub fn for_game(&self, game_id: i64) -> &str {
        let index = (game_id.unsigned_abs() % self.targets.len() as u64) as usize;
        &self.targets[index]
    }

    /// Target of the day for `date`.
    pub fn daily(&self, date: NaiveDate) -> &str {
        let days = daily_game_id(date);
        let index = days.rem_euclid(self.targets.len() as i64) as usize;
        &self.targets[index]
    }

    /// Picks the target: a non-blank override wins, then the game id, then the daily word.
    pub fn resolve(
        &self,
        secret_override: Option<&str>,
        game_id: Option<i64>,
        today: NaiveDate,
    ) -> String {
        if let Some(secret) = secret_override.map(normalize).filter(|s| !s.is_empty()) {
            return secret;
        }
        match game_id {
            Some(id) => self.for_game(id).to_string(),
            None => self.daily(today).to_string(),
        }
    }
}
