//! Error types for lightbnb-db
//!
//! Driver failures pass through untouched in [`DbError::Sqlx`] so callers can
//! inspect the underlying `sqlx::Error`. A lookup that matches no row is not
//! an error; it comes back as `Ok(None)`.

use thiserror::Error;

/// Result type alias for lightbnb-db operations
pub type Result<T> = std::result::Result<T, DbError>;

/// Database layer error type
#[derive(Debug, Error)]
pub enum DbError {
    /// Query execution failed (bad SQL, connection loss, constraint violation)
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// Connection settings could not be read or parsed
    #[error("configuration error: {reason}")]
    Config { reason: String },

    /// Mock store fixture could not be read or parsed
    #[error("fixture error at {context}: {reason}")]
    Fixture { context: String, reason: String },
}

impl DbError {
    /// Create a config error
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }

    /// Create a fixture error with context
    pub fn fixture(context: impl Into<String>, reason: impl ToString) -> Self {
        Self::Fixture {
            context: context.into(),
            reason: reason.to_string(),
        }
    }

    /// True when the database rejected a write on a unique constraint,
    /// e.g. registering an email that already exists.
    pub fn is_unique_violation(&self) -> bool {
        match self {
            Self::Sqlx(sqlx::Error::Database(err)) => err.is_unique_violation(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = DbError::config("PGPORT must be a number");
        assert_eq!(
            err.to_string(),
            "configuration error: PGPORT must be a number"
        );

        let err = DbError::fixture("properties.json", "expected value at line 1");
        assert_eq!(
            err.to_string(),
            "fixture error at properties.json: expected value at line 1"
        );
    }

    #[test]
    fn sqlx_error_conversion() {
        let err: DbError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, DbError::Sqlx(sqlx::Error::RowNotFound)));
        assert!(err.to_string().starts_with("database error:"));
    }

    #[test]
    fn non_database_errors_are_not_unique_violations() {
        assert!(!DbError::from(sqlx::Error::PoolTimedOut).is_unique_violation());
        assert!(!DbError::config("x").is_unique_violation());
    }
}
