use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GridError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("File already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Validation(String),
}

impl GridError {
    /// Shorthand for the validation variant, which the CLI recovers from by
    /// re-prompting rather than failing.
    pub fn validation(msg: impl Into<String>) -> Self {
        GridError::Validation(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, GridError>;
