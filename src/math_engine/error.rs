use thiserror::Error;

/// Rejected user actions. None of these mutate session state.
#[derive(Debug, Error, PartialEq)]
pub enum SessionError {
    #[error("'{0}' is not a valid number")]
    InvalidNumber(String),
    #[error("no answer selected")]
    NoAnswerSelected,
    #[error("session is not accepting answers")]
    NotActive,
}

/// Failure to load [`SessionOptions`](crate::math_engine::models::SessionOptions).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid session options: {0}")]
    Parse(#[from] serde_json::Error),
}
