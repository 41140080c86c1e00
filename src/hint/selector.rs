//! List-index selection for hints.

use rand::Rng;

use super::types::{Difficulty, HintPick, HintState};
use crate::storage::RankedWordList;
use crate::words::normalize;

/// Picks a list index that moves the player closer to the target.
///
/// A picked index is always strictly better than the player's current list index, except
/// when the player has no guess yet or is outside the list, where every list word already
/// improves on them.
#[derive(Debug, Clone, Copy, Default)]
pub struct HintSelector;

impl HintSelector {
    /// Classifies `best_guess` against `list`.
    pub fn classify(list: &RankedWordList, best_guess: Option<&str>) -> HintState {
        let best = best_guess.map(normalize).filter(|g| !g.is_empty());
        match best {
            None => HintState::NoGuessYet,
            Some(best) => match list.position(&best) {
                Some(index) => HintState::GuessInList { index },
                None => HintState::GuessOutOfList,
            },
        }
    }

    /// Chooses a list index for the player's state.
    ///
    /// `rng` only matters for [`Difficulty::Hard`].
    pub fn select_index<R: Rng + ?Sized>(
        list: &RankedWordList,
        best_guess: Option<&str>,
        difficulty: Difficulty,
        rng: &mut R,
    ) -> HintPick {
        let Some(last) = list.last_index() else {
            return HintPick::NoListHint;
        };

        if best_guess.is_some_and(|g| normalize(g) == list.target()) {
            return HintPick::NoListHint;
        }

        match Self::classify(list, best_guess) {
            HintState::NoGuessYet => HintPick::Index(difficulty.opening_index().min(last)),
            HintState::GuessOutOfList => HintPick::Index(last),
            HintState::GuessInList { index: 0 } => HintPick::NoListHint,
            HintState::GuessInList { index } => {
                let pick = match difficulty {
                    Difficulty::Easy => index / 2,
                    Difficulty::Medium => index - 1,
                    Difficulty::Hard => rng.gen_range(0..index),
                };
                HintPick::Index(pick)
            }
        }
    }

    /// Chooses a hint word, or `None` when the list cannot help (`noListHint`).
    pub fn select_word<'a, R: Rng + ?Sized>(
        list: &'a RankedWordList,
        best_guess: Option<&str>,
        difficulty: Difficulty,
        rng: &mut R,
    ) -> Option<(usize, &'a str)> {
        let index = Self::select_index(list, best_guess, difficulty, rng).index()?;
        list.get(index).map(|word| (index, word))
    }
}
