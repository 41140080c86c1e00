use std::str::FromStr;

use serde::Serialize;

use super::error::HintError;

/// How generous hints are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// List index offered before the player has any guess.
    #[inline]
    pub fn opening_index(&self) -> usize {
        match self {
            Difficulty::Easy => 499,
            Difficulty::Medium => 999,
            Difficulty::Hard => 1999,
        }
    }

    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl FromStr for Difficulty {
    type Err = HintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(HintError::UnknownDifficulty {
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Player progress relative to the ranked list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintState {
    NoGuessYet,
    GuessInList { index: usize },
    GuessOutOfList,
}

/// Selector output: a list index, or a signal that no list word improves on the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintPick {
    Index(usize),
    NoListHint,
}

impl HintPick {
    pub fn index(&self) -> Option<usize> {
        match self {
            HintPick::Index(i) => Some(*i),
            HintPick::NoListHint => None,
        }
    }
}

/// Where a served hint came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HintSource {
    List { index: usize },
    Generated,
    Default,
}

/// A hint ready to show the player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hint {
    pub hint: String,
    #[serde(skip)]
    pub source: HintSource,
}
