//! sqlx error classification.

use crate::domain::foundation::{DomainError, ErrorCode};

/// Maps a driver error onto the domain taxonomy, keeping the driver's
/// message.
pub(crate) fn classify(error: sqlx::Error, action: &str) -> DomainError {
    let code = match &error {
        sqlx::Error::RowNotFound => ErrorCode::NotFound,
        sqlx::Error::Database(db) if db.is_unique_violation() => ErrorCode::Conflict,
        sqlx::Error::PoolTimedOut => ErrorCode::Timeout,
        _ => ErrorCode::DatabaseError,
    };
    DomainError::new(code, format!("Failed to {}: {}", action, error))
}
