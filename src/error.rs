use serde_json::{Value, json};
use thiserror::Error;

/// Error type shared by repositories, services and the export pipeline.
///
/// Lookups that find nothing are not errors; they surface as `None` or an
/// empty list.
#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed operator input. The operation was not attempted.
    #[error("{message}")]
    Validation { message: String, details: Value },
    /// Connectivity or constraint failure reported by the store.
    #[error("{message}")]
    Persistence { message: String, details: Value },
    /// The report could not be written to its destination.
    #[error("{message}")]
    Sink { message: String, details: Value },
}

impl AppError {
    pub fn validation(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn persistence(message: impl Into<String>, details: Value) -> Self {
        Self::Persistence {
            message: message.into(),
            details,
        }
    }
    pub fn sink(message: impl Into<String>, details: Value) -> Self {
        Self::Sink {
            message: message.into(),
            details,
        }
    }

    /// Stable machine-readable code, used as a structured logging field.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation { .. } => "validation_error",
            AppError::Persistence { .. } => "persistence_error",
            AppError::Sink { .. } => "sink_error",
        }
    }

    pub fn details(&self) -> &Value {
        match self {
            AppError::Validation { details, .. }
            | AppError::Persistence { details, .. }
            | AppError::Sink { details, .. } => details,
        }
    }
}

pub fn map_sqlx_error(e: sqlx::Error) -> AppError {
    if let Some(db) = e.as_database_error() {
        if db.is_unique_violation() {
            return AppError::persistence(
                format!("Unique constraint violation: {}", db.message()),
                json!({ "constraint": db.constraint() }),
            );
        }
        if db.is_check_violation() {
            return AppError::persistence(
                format!("Check constraint violation: {}", db.message()),
                json!({ "constraint": db.constraint() }),
            );
        }
    }

    AppError::persistence(format!("Database error: {e}"), json!({}))
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        map_sqlx_error(e)
    }
}

impl From<sqlx::migrate::MigrateError> for AppError {
    fn from(e: sqlx::migrate::MigrateError) -> Self {
        AppError::persistence(format!("Migration failed: {e}"), json!({}))
    }
}
