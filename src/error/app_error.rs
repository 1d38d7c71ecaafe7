use chrono::NaiveDate;
use thiserror::Error;

use crate::error::DatabaseErrorConverter;

/// Application-wide error type that represents all possible errors in the system.
///
/// This enum provides structured error handling for the booking core and the
/// HTTP surface around it, with automatic conversion from diesel and anyhow
/// errors and enough context to produce useful API responses.
#[derive(Error, Debug)]
pub enum AppError {
    /// Resource not found error with entity, field, and value information
    #[error("Resource not found: {entity} with {field}={value}")]
    NotFound {
        entity: String,
        field: String,
        value: String,
    },

    /// Duplicate entry error for unique constraint violations
    #[error("Duplicate entry: {entity}.{field} = '{value}' already exists")]
    Duplicate {
        entity: String,
        field: String,
        value: String,
    },

    /// Validation error with field-specific details
    #[error("Validation failed for {field}: {reason}")]
    Validation { field: String, reason: String },

    /// Bad request error with descriptive message
    #[error("Bad request: {message}")]
    BadRequest { message: String },

    /// Business-rule conflict raised by the booking engine. Carries the
    /// offending calendar dates when the conflict is a blocked-dates one.
    #[error("Booking conflict: {message}")]
    BookingConflict {
        message: String,
        blocked_dates: Vec<NaiveDate>,
    },

    /// Unauthorized access error with authentication message
    #[error("Unauthorized: {message}")]
    Unauthorized { message: String },

    /// Forbidden access error with authorization message
    #[error("Forbidden: {message}")]
    Forbidden { message: String },

    /// Database operation error with operation context
    #[error("Database operation failed: {operation}")]
    Database {
        operation: String,
        #[source]
        source: anyhow::Error,
    },

    /// Configuration error with key information
    #[error("Configuration error: {key}")]
    Configuration {
        key: String,
        #[source]
        source: anyhow::Error,
    },

    /// Connection pool error
    #[error("Connection pool error")]
    ConnectionPool {
        #[source]
        source: anyhow::Error,
    },

    /// Internal error for unexpected failures
    #[error("Internal error")]
    Internal {
        #[source]
        source: anyhow::Error,
    },
}

impl AppError {
    /// Shorthand for a conflict without offending dates.
    pub fn conflict(message: impl Into<String>) -> Self {
        AppError::BookingConflict {
            message: message.into(),
            blocked_dates: Vec::new(),
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        AppError::Internal { source: error }
    }
}

impl From<diesel::result::Error> for AppError {
    fn from(error: diesel::result::Error) -> Self {
        DatabaseErrorConverter::convert_diesel_error(error, "database operation")
    }
}

impl From<bb8::RunError<diesel_async::pooled_connection::PoolError>> for AppError {
    fn from(error: bb8::RunError<diesel_async::pooled_connection::PoolError>) -> Self {
        AppError::ConnectionPool {
            source: anyhow::Error::new(error),
        }
    }
}

impl From<argon2::password_hash::Error> for AppError {
    fn from(error: argon2::password_hash::Error) -> Self {
        AppError::Internal {
            source: anyhow::anyhow!("password hashing failed: {error}"),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        // Report the first offending field; the full set is rarely useful
        // to API clients and never to logs.
        let (field, reason) = errors
            .field_errors()
            .into_iter()
            .next()
            .map(|(field, errs)| {
                let reason = errs
                    .first()
                    .and_then(|e| e.message.as_ref())
                    .map_or_else(|| "invalid value".to_string(), |m| m.to_string());
                (field.to_string(), reason)
            })
            .unwrap_or_else(|| ("body".to_string(), "invalid request body".to_string()));
        AppError::Validation { field, reason }
    }
}

/// Type alias for Result with AppError to simplify function signatures
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conflict_shorthand_has_no_dates() {
        let err = AppError::conflict("spot already booked");
        match err {
            AppError::BookingConflict {
                message,
                blocked_dates,
            } => {
                assert_eq!(message, "spot already booked");
                assert!(blocked_dates.is_empty());
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn diesel_not_found_maps_to_not_found() {
        let err = AppError::from(diesel::result::Error::NotFound);
        assert!(matches!(err, AppError::NotFound { .. }));
    }
}
