use thiserror::Error;

/// Errors that can occur while persisting teams
#[derive(Debug, Error)]
pub enum TeamDaoError {
    #[error("Invalid team name: {0}")]
    InvalidName(String),

    #[error("Duplicate team name: {0}")]
    DuplicateName(String),

    /// Store failures, passed through untouched
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

pub type TeamDaoResult<T> = Result<T, TeamDaoError>;
