use thiserror::Error;

#[derive(Debug, Error)]
pub enum HintError {
    #[error("target is empty")]
    EmptyTarget,

    #[error("unknown difficulty '{value}': expected easy, medium or hard")]
    UnknownDifficulty { value: String },
}

pub type HintResult<T> = Result<T, HintError>;
