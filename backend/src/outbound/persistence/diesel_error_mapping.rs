//! Diesel and pool error mapping for the question repository.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::warn;

use crate::domain::ports::QuestionRepositoryError;

use super::pool::PoolError;

/// Map pool failures onto the connection variant.
pub(crate) fn map_pool_error(error: PoolError) -> QuestionRepositoryError {
    let message = match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    };
    warn!(%message, "connection pool checkout failed");
    QuestionRepositoryError::connection(message)
}

/// Map Diesel failures for operations on `question_id`.
///
/// A unique violation can only come from the primary key, so it becomes a
/// conflict on that question.
pub(crate) fn map_diesel_error(error: DieselError, question_id: &str) -> QuestionRepositoryError {
    match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
            warn!(question_id, message = info.message(), "question id already stored");
            QuestionRepositoryError::conflict(question_id)
        }
        DieselError::NotFound => {
            warn!(question_id, "question not found");
            QuestionRepositoryError::not_found(question_id)
        }
        other => map_query_error(other),
    }
}

/// Map Diesel failures that do not concern a single question.
pub(crate) fn map_query_error(error: DieselError) -> QuestionRepositoryError {
    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, info) => {
            warn!(message = info.message(), "database connection closed");
            QuestionRepositoryError::connection(info.message())
        }
        DieselError::DatabaseError(kind, info) => {
            warn!(?kind, message = info.message(), "database query failed");
            QuestionRepositoryError::query(info.message())
        }
        other => {
            warn!(error = %other, "diesel operation failed");
            QuestionRepositoryError::query(other.to_string())
        }
    }
}
