//! Domain error taxonomy for the Rolodex application.
//!
//! Every fallible operation in the data-access and web layers resolves to one
//! of these variants. The web layer decides how each variant is presented
//! (form message, 404 page, or 500).

use thiserror::Error;

/// Application-level errors.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required field is missing or malformed.
    #[error("{0}")]
    Validation(String),

    /// A store-enforced uniqueness or integrity rule failed.
    #[error("{0}")]
    Constraint(String),

    /// The requested record does not exist.
    #[error("not found")]
    NotFound,

    /// The underlying store could not be opened or reached.
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),

    /// Operation failed for a reason outside the taxonomy above.
    #[error("operation failed: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<rusqlite::Error> for AppError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            // Uniqueness violations are recoverable and rendered as form
            // messages; everything else from the store is fatal for the
            // triggering request.
            rusqlite::Error::SqliteFailure(e, _)
                if e.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                AppError::Constraint(err.to_string())
            }
            _ => AppError::StorageUnavailable(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constraint_violations_map_to_constraint() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        conn.execute_batch("CREATE TABLE t (name TEXT UNIQUE)").unwrap();
        conn.execute("INSERT INTO t (name) VALUES ('a')", []).unwrap();

        let err = conn
            .execute("INSERT INTO t (name) VALUES ('a')", [])
            .unwrap_err();
        assert!(matches!(AppError::from(err), AppError::Constraint(_)));
    }

    #[test]
    fn other_store_errors_map_to_storage_unavailable() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        let err = conn.execute("INSERT INTO missing VALUES (1)", []).unwrap_err();
        assert!(matches!(
            AppError::from(err),
            AppError::StorageUnavailable(_)
        ));
    }
}
