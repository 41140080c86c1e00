//! Hint selection.
//!
//! [`HintSelector`] is the pure index policy; [`HintService`] wires it to the word-list
//! cache and the generative fallback.

pub mod error;
pub mod selector;
pub mod service;
pub mod types;


pub use error::{HintError, HintResult};
pub use selector::HintSelector;
pub use service::HintService;
pub use types::{Difficulty, Hint, HintPick, HintSource, HintState};
