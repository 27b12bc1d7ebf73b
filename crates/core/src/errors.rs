use thiserror::Error;

#[derive(Error, Debug)]
pub enum CarnetError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(#[from] eyre::Report),
}

pub type CarnetResult<T> = Result<T, CarnetError>;
