use thiserror::Error;

/// Error type that captures failures crossing the engine's port boundaries.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Payment source error: {0}")]
    Source(String),
    #[error("Transaction sink error: {0}")]
    Materialize(String),
    #[error("Notification sink error: {0}")]
    Notification(String),
}

pub type EngineResult<T> = Result<T, EngineError>;
