//! Error handler for converting AppError to HTTP responses.
//!
//! Implements IntoResponse for AppError so handlers can return
//! `AppResult<T>` directly and get a consistent JSON error body.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::api::dto::ErrorResponse;
use crate::error::AppError;

impl IntoResponse for AppError {
    /// Converts an AppError into an HTTP response.
    ///
    /// # Status Code Mapping
    /// - NotFound → 404 NOT_FOUND
    /// - Duplicate → 409 CONFLICT
    /// - Validation → 400 BAD_REQUEST
    /// - BadRequest → 400 BAD_REQUEST
    /// - BookingConflict → 400 BAD_REQUEST
    /// - Unauthorized → 401 UNAUTHORIZED
    /// - Forbidden → 403 FORBIDDEN
    /// - Database → 500 INTERNAL_SERVER_ERROR
    /// - Configuration → 500 INTERNAL_SERVER_ERROR
    /// - ConnectionPool → 503 SERVICE_UNAVAILABLE
    /// - Internal → 500 INTERNAL_SERVER_ERROR
    fn into_response(self) -> Response {
        let (status, error_response) = error_to_response_parts(&self);

        if status.is_server_error() {
            tracing::error!(status = %status.as_u16(), error = %self, "Request failed");
        }

        (status, Json(error_response)).into_response()
    }
}

fn error_to_response_parts(error: &AppError) -> (StatusCode, ErrorResponse) {
    match error {
        AppError::NotFound {
            entity,
            field,
            value,
        } => (
            StatusCode::NOT_FOUND,
            ErrorResponse::new("NOT_FOUND", &format!("{entity} not found")).with_details(json!({
                "entity": entity,
                "field": field,
                "value": value,
            })),
        ),
        AppError::Duplicate {
            entity,
            field,
            value,
        } => (
            StatusCode::CONFLICT,
            ErrorResponse::new(
                "DUPLICATE_ENTRY",
                &format!("{entity} with this {field} already exists"),
            )
            .with_details(json!({
                "entity": entity,
                "field": field,
                "value": value,
            })),
        ),
        AppError::Validation { field, reason } => (
            StatusCode::BAD_REQUEST,
            ErrorResponse::new("VALIDATION_ERROR", reason).with_details(json!({
                "field": field,
            })),
        ),
        AppError::BadRequest { message } => (
            StatusCode::BAD_REQUEST,
            ErrorResponse::new("BAD_REQUEST", message),
        ),
        AppError::BookingConflict {
            message,
            blocked_dates,
        } => {
            let mut body = ErrorResponse::new("BOOKING_CONFLICT", message);
            if !blocked_dates.is_empty() {
                body = body.with_blocked_dates(blocked_dates.clone());
            }
            (StatusCode::BAD_REQUEST, body)
        }
        AppError::Unauthorized { message } => (
            StatusCode::UNAUTHORIZED,
            ErrorResponse::new("UNAUTHORIZED", message),
        ),
        AppError::Forbidden { message } => (
            StatusCode::FORBIDDEN,
            ErrorResponse::new("FORBIDDEN", message),
        ),
        AppError::Database { operation, .. } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorResponse::new(
                "DATABASE_ERROR",
                &format!("Database operation failed: {operation}"),
            ),
        ),
        AppError::Configuration { key, .. } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorResponse::new("CONFIGURATION_ERROR", &format!("Configuration error: {key}")),
        ),
        AppError::ConnectionPool { .. } => (
            StatusCode::SERVICE_UNAVAILABLE,
            ErrorResponse::new("SERVICE_UNAVAILABLE", "Database connection unavailable"),
        ),
        AppError::Internal { .. } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorResponse::new("INTERNAL_ERROR", "An internal error occurred"),
        ),
    }
}

/// Maps an AppError variant to its corresponding HTTP status code.
pub fn error_to_status_code(error: &AppError) -> StatusCode {
    error_to_response_parts(error).0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let error = AppError::NotFound {
            entity: "user".to_string(),
            field: "id".to_string(),
            value: "123".to_string(),
        };
        assert_eq!(error_to_status_code(&error), StatusCode::NOT_FOUND);
    }

    #[test]
    fn duplicate_maps_to_409() {
        let error = AppError::Duplicate {
            entity: "user".to_string(),
            field: "email".to_string(),
            value: "test@example.com".to_string(),
        };
        assert_eq!(error_to_status_code(&error), StatusCode::CONFLICT);
    }

    #[test]
    fn booking_conflict_maps_to_400() {
        let error = AppError::conflict("This spot is already booked during the selected dates");
        assert_eq!(error_to_status_code(&error), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn booking_conflict_body_carries_blocked_dates() {
        let error = AppError::BookingConflict {
            message: "Some dates are unavailable for booking".to_string(),
            blocked_dates: vec!["2025-07-10".parse().unwrap()],
        };
        let (status, body) = error_to_response_parts(&error);
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.blocked_dates.as_deref().map(|d| d.len()), Some(1));
    }

    #[test]
    fn conflict_without_dates_omits_them() {
        let error = AppError::conflict("You have already booked this camping spot");
        let (_, body) = error_to_response_parts(&error);
        assert!(body.blocked_dates.is_none());
    }

    #[test]
    fn unauthorized_maps_to_401() {
        let error = AppError::Unauthorized {
            message: "Authentication required".to_string(),
        };
        assert_eq!(error_to_status_code(&error), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn forbidden_maps_to_403() {
        let error = AppError::Forbidden {
            message: "Only owners can create camping spots".to_string(),
        };
        assert_eq!(error_to_status_code(&error), StatusCode::FORBIDDEN);
    }

    #[test]
    fn pool_exhaustion_maps_to_503() {
        let error = AppError::ConnectionPool {
            source: anyhow::anyhow!("pool exhausted"),
        };
        assert_eq!(error_to_status_code(&error), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn internal_maps_to_500() {
        let error = AppError::Internal {
            source: anyhow::anyhow!("unexpected"),
        };
        assert_eq!(
            error_to_status_code(&error),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
