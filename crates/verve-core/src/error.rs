use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("age {0} is out of range (1-119)")]
    AgeOutOfRange(u8),

    #[error("at least one goal must be selected")]
    NoGoals,

    #[error("at most three goals may be selected (got {0})")]
    TooManyGoals(usize),

    #[error("goal selected more than once: {0}")]
    DuplicateGoal(String),
}
