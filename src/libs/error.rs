//! Error types for the storage layer.
//!
//! Constraint violations (duplicate project names, unknown project IDs on a
//! task) are not translated into domain variants: they surface as the
//! underlying [`rusqlite::Error`] inside [`DbError::Sqlite`].

use rusqlite::ErrorCode;
use std::io;

pub type Result<T> = std::result::Result<T, DbError>;

#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("The {0} environment variable is not set")]
    MissingEnv(&'static str),

    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Task #{0} not found")]
    TaskNotFound(i32),

    #[error("Project #{0} not found")]
    ProjectNotFound(i32),

    #[error("Project '{0}' not found")]
    ProjectNameNotFound(String),
}

impl DbError {
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            DbError::TaskNotFound(_) | DbError::ProjectNotFound(_) | DbError::ProjectNameNotFound(_)
        )
    }

    /// True for UNIQUE, FOREIGN KEY and NOT NULL violations reported by SQLite.
    pub fn is_constraint_violation(&self) -> bool {
        match self {
            DbError::Sqlite(err) => err.sqlite_error_code() == Some(ErrorCode::ConstraintViolation),
            _ => false,
        }
    }
}
