//! Centralized error handling.
//!
//! Provides a unified error type for the entire application,
//! with automatic HTTP response conversion.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{sqlx, DbErr, RuntimeErr, SqlErr};
use thiserror::Error;

use crate::config::GENERIC_SERVER_ERROR;
use crate::types::MessageResponse;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Resource errors
    #[error("{0}")]
    NotFound(String),

    /// Duplicate or still-referenced rows. Reported as 400 like every other
    /// client-side rejection.
    #[error("{0}")]
    Conflict(String),

    // Validation
    #[error("{0}")]
    Validation(String),

    #[error("Invalid input: {0}")]
    BadRequest(String),

    // Storage
    #[error("Database error")]
    Database(#[from] DbErr),

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

impl AppError {
    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) | AppError::Validation(_) | AppError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                GENERIC_SERVER_ERROR.to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                GENERIC_SERVER_ERROR.to_string()
            }
            _ => self.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = MessageResponse::new(self.user_message());

        (status, Json(body)).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self, msg: impl Into<String>) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self, msg: impl Into<String>) -> AppResult<T> {
        self.ok_or_else(|| AppError::NotFound(msg.into()))
    }
}

/// Convenience constructors
impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        AppError::NotFound(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        AppError::Conflict(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

/// SQLite extended codes for foreign key failures. Deletes report the
/// trigger variant, which `DbErr::sql_err` does not classify.
const SQLITE_FOREIGN_KEY_CODES: [&str; 2] = ["787", "1811"];

/// Postgres SQLSTATE for a serializable transaction that lost a conflict.
const PG_SERIALIZATION_FAILURE: &str = "40001";

/// Driver error code of a failed statement, if the driver reported one.
fn database_code(err: &DbErr) -> Option<String> {
    match err {
        DbErr::Conn(RuntimeErr::SqlxError(sqlx::Error::Database(e)))
        | DbErr::Exec(RuntimeErr::SqlxError(sqlx::Error::Database(e)))
        | DbErr::Query(RuntimeErr::SqlxError(sqlx::Error::Database(e))) => {
            e.code().map(|code| code.into_owned())
        }
        _ => None,
    }
}

/// Translates constraint violations reported by the store.
///
/// Unique violations become `on_unique`, foreign key violations become
/// `on_foreign_key`; anything else stays a database error.
pub fn constraint_error(
    err: DbErr,
    on_unique: impl FnOnce() -> AppError,
    on_foreign_key: impl FnOnce() -> AppError,
) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => {
            tracing::debug!("Unique constraint violated: {}", detail);
            on_unique()
        }
        Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
            tracing::debug!("Foreign key constraint violated: {}", detail);
            on_foreign_key()
        }
        _ => match database_code(&err) {
            Some(code) if SQLITE_FOREIGN_KEY_CODES.contains(&code.as_str()) => {
                tracing::debug!("Foreign key constraint violated: {}", err);
                on_foreign_key()
            }
            _ => AppError::Database(err),
        },
    }
}

/// Whether the error is a serialization failure of a concurrent transaction.
pub fn is_serialization_failure(err: &AppError) -> bool {
    match err {
        AppError::Database(e) => database_code(e).as_deref() == Some(PG_SERIALIZATION_FAILURE),
        _ => false,
    }
}

/// Driver errors carrying a chosen error code.
#[cfg(test)]
pub(crate) mod test_support {
    use std::borrow::Cow;

    use sea_orm::{sqlx, DbErr, RuntimeErr};

    #[derive(Debug, thiserror::Error)]
    #[error("driver error {code}")]
    struct CodedError {
        code: &'static str,
    }

    impl sqlx::error::DatabaseError for CodedError {
        fn message(&self) -> &str {
            "driver error"
        }

        fn code(&self) -> Option<Cow<'_, str>> {
            Some(Cow::Borrowed(self.code))
        }

        fn as_error(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn std::error::Error + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn std::error::Error + Send + Sync + 'static> {
            self
        }

        fn kind(&self) -> sqlx::error::ErrorKind {
            sqlx::error::ErrorKind::Other
        }
    }

    pub(crate) fn coded_db_error(code: &'static str) -> DbErr {
        DbErr::Exec(RuntimeErr::SqlxError(sqlx::Error::Database(Box::new(
            CodedError { code },
        ))))
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::coded_db_error;
    use super::*;

    #[test]
    fn test_client_errors_map_to_bad_request() {
        assert_eq!(AppError::validation("x").status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::conflict("x").status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::not_found("x").status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_internal_details_are_hidden() {
        let err = AppError::Database(DbErr::Custom("relation \"user\" does not exist".into()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.user_message(), GENERIC_SERVER_ERROR);

        let err = AppError::internal("hash failed");
        assert_eq!(err.user_message(), GENERIC_SERVER_ERROR);
    }

    #[test]
    fn test_client_messages_pass_through() {
        assert_eq!(
            AppError::not_found("Person not found").user_message(),
            "Person not found"
        );
        assert_eq!(
            AppError::conflict("Planet already a favorite").user_message(),
            "Planet already a favorite"
        );
    }

    #[test]
    fn test_unclassified_db_error_stays_database() {
        let err = constraint_error(
            DbErr::Custom("boom".into()),
            || AppError::conflict("dup"),
            || AppError::not_found("missing"),
        );
        assert!(matches!(err, AppError::Database(_)));
    }

    #[test]
    fn test_sqlite_delete_foreign_key_code_is_classified() {
        let err = constraint_error(
            coded_db_error("1811"),
            || AppError::internal("dup"),
            || AppError::conflict("Planet is still referenced by favorites or comments"),
        );
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[test]
    fn test_other_driver_codes_stay_database() {
        let err = constraint_error(
            coded_db_error("22001"),
            || AppError::conflict("dup"),
            || AppError::not_found("missing"),
        );
        assert!(matches!(err, AppError::Database(_)));
    }

    #[test]
    fn test_serialization_failure_detection() {
        assert!(is_serialization_failure(&AppError::Database(coded_db_error("40001"))));
        assert!(!is_serialization_failure(&AppError::Database(coded_db_error("23505"))));
        assert!(!is_serialization_failure(&AppError::conflict("dup")));
        assert!(!is_serialization_failure(&AppError::Database(DbErr::Custom(
            "could not serialize access".into()
        ))));
    }
}
