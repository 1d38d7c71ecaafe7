//! Error response DTOs.

use chrono::NaiveDate;
use serde::Serialize;

/// Standard error response format.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
    /// Calendar dates that caused a blocked-dates booking rejection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blocked_dates: Option<Vec<NaiveDate>>,
}

impl ErrorResponse {
    /// Creates a new error response with code and message.
    pub fn new(code: &str, message: &str) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
            details: None,
            blocked_dates: None,
        }
    }

    /// Adds structured details to the error response.
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Adds the offending dates of a blocked-dates conflict.
    pub fn with_blocked_dates(mut self, dates: Vec<NaiveDate>) -> Self {
        self.blocked_dates = Some(dates);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_optionals_are_omitted_from_json() {
        let body = serde_json::to_value(ErrorResponse::new("NOT_FOUND", "missing")).unwrap();
        assert_eq!(body["code"], "NOT_FOUND");
        assert!(body.get("details").is_none());
        assert!(body.get("blocked_dates").is_none());
    }

    #[test]
    fn blocked_dates_serialize_as_iso_strings() {
        let body = serde_json::to_value(
            ErrorResponse::new("BOOKING_CONFLICT", "Some dates are unavailable for booking")
                .with_blocked_dates(vec!["2025-07-10".parse().unwrap()]),
        )
        .unwrap();
        assert_eq!(body["blocked_dates"][0], "2025-07-10");
    }
}
