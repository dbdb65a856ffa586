use thiserror::Error;

use crate::session_engine::models::SessionStatus;

/// Everything an inbound engine call can reject with.
///
/// None of these is fatal: the worst outcome is a refused event or a session
/// forced to `Ended`.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("`{event}` is not valid while the session is {status}")]
    InvalidTransition {
        event: &'static str,
        status: SessionStatus,
    },

    #[error("configuration rejected: {0}")]
    Configuration(#[from] ConfigError),

    #[error("submission rejected: {0}")]
    Validation(#[from] ValidationError),

    #[error("the next problem has not been shown yet")]
    AwaitingNextProblem,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("question limit must be at least 1")]
    QuestionLimitZero,

    #[error("time limit must be at least 1 second")]
    TimeLimitZero,

    #[error("reward threshold must be at least 1")]
    RewardThresholdZero,

    #[error("max operand must be at least 1")]
    MaxOperandZero,

    #[error("difficulty tier has no operator with a positive weight")]
    EmptyOperatorSet,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Enter a number!")]
    Blank,

    #[error("'{input}' is not a number")]
    NotANumber { input: String },

    #[error("'{option}' is not one of the offered choices")]
    UnknownOption { option: String },
}

pub type SessionResult<T> = Result<T, SessionError>;
