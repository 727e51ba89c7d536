use diesel::r2d2::PoolError;
use diesel::result::DatabaseErrorKind;
use thiserror::Error;

/// Errors surfaced by repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The connection pool could not hand out a connection.
    #[error("database pool error: {0}")]
    Pool(#[from] PoolError),
    /// No row matched where at least one was required.
    #[error("entity not found")]
    NotFound,
    /// A lookup expected exactly one row but matched several.
    #[error("query matched more than one row")]
    NonUnique,
    /// A uniqueness constraint was violated at persistence time.
    #[error("unique constraint violated: {0}")]
    Conflict(String),
    /// A stored value failed domain validation on the way out.
    #[error("validation error: {0}")]
    Validation(String),
    /// Any other database failure.
    #[error("database error: {0}")]
    Database(diesel::result::Error),
}

impl From<diesel::result::Error> for RepositoryError {
    fn from(err: diesel::result::Error) -> Self {
        match err {
            diesel::result::Error::NotFound => Self::NotFound,
            diesel::result::Error::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
                Self::Conflict(info.message().to_string())
            }
            other => Self::Database(other),
        }
    }
}

/// Convenient alias for results returned from repository functions.
pub type RepositoryResult<T> = Result<T, RepositoryError>;
