use thiserror::Error;

/// The main error type for Simply operations
#[derive(Debug, Error)]
pub enum SimplyError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Task error: {0}")]
    Task(String),
}

/// Result type alias for Simply operations
pub type SimplyResult<T> = Result<T, SimplyError>;
