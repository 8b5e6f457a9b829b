use thiserror::Error;

#[derive(Error, Debug)]
pub enum DriveTimeError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] eyre::Report),
}

pub type DriveTimeResult<T> = Result<T, DriveTimeError>;
