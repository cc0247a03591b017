//! Error types for the classcal ecosystem.

use thiserror::Error;

/// Errors that can occur in classcal operations.
#[derive(Error, Debug)]
pub enum ClasscalError {
    #[error("Class schedule file not found: {0}")]
    ScheduleNotFound(String),

    #[error("Invalid JSON in class schedule file: {0}")]
    ScheduleParse(String),

    #[error("Invalid time '{0}'. Expected HH:MM or H:MM")]
    InvalidTime(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for classcal operations.
pub type ClasscalResult<T> = Result<T, ClasscalError>;
