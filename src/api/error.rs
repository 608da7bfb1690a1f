use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::fmt;

use crate::db::DatabaseError;
use crate::domain::validate::ValidationError;

#[derive(Debug)]
pub enum ApiError {
    Validation(ValidationError),
    Conflict(String),
    Database(String),
    Internal(String),
    RateLimited,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Validation(err) => write!(f, "Validation error: {}", err),
            ApiError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            ApiError::Database(msg) => write!(f, "Database error: {}", msg),
            ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
            ApiError::RateLimited => write!(f, "Rate limit exceeded"),
        }
    }
}

impl std::error::Error for ApiError {}

#[derive(Serialize)]
struct ErrorResponse {
    error: &'static str,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    allowed: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    missing: Option<Vec<String>>,
}

impl ErrorResponse {
    fn new(error: &'static str, message: String) -> Self {
        Self {
            error,
            message,
            field: None,
            allowed: None,
            missing: None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Validation(err) => (StatusCode::BAD_REQUEST, validation_body(err)),
            ApiError::Conflict(msg) => (
                StatusCode::CONFLICT,
                ErrorResponse::new("duplicate_entry", msg),
            ),
            ApiError::Database(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new("database_error", msg),
            ),
            ApiError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new("internal_error", msg),
            ),
            ApiError::RateLimited => (
                StatusCode::TOO_MANY_REQUESTS,
                ErrorResponse::new("rate_limited", "Too many requests".to_string()),
            ),
        };

        (status, Json(body)).into_response()
    }
}

/// Validation failures carry the violated rule and, where it exists, the
/// full legal value set. Never a generic message when a specific one is
/// available.
fn validation_body(err: ValidationError) -> ErrorResponse {
    let message = err.to_string();
    match err {
        ValidationError::InvalidRequestFormat => {
            ErrorResponse::new("invalid_request_format", message)
        }
        ValidationError::InvalidEnumValue { field, allowed, .. } => ErrorResponse {
            field: Some(field.to_string()),
            allowed: Some(allowed),
            ..ErrorResponse::new("invalid_enum_value", message)
        },
        ValidationError::InvalidDateFormat { field, .. } => ErrorResponse {
            field: Some(field.to_string()),
            ..ErrorResponse::new("invalid_date_format", message)
        },
        ValidationError::InvalidType { field, .. } => ErrorResponse {
            field: Some(field.to_string()),
            ..ErrorResponse::new("invalid_type", message)
        },
        ValidationError::InvalidPagination { .. } => {
            ErrorResponse::new("invalid_pagination", message)
        }
        ValidationError::InvalidSortField { allowed, .. } => ErrorResponse {
            allowed: Some(allowed),
            ..ErrorResponse::new("invalid_sort_field", message)
        },
        ValidationError::InvalidSortOrder { .. } => {
            ErrorResponse::new("invalid_sort_order", message)
        }
        ValidationError::MissingRequiredFields { fields } => ErrorResponse {
            missing: Some(fields),
            ..ErrorResponse::new("missing_required_fields", message)
        },
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::Validation(err)
    }
}

impl From<DatabaseError> for ApiError {
    fn from(err: DatabaseError) -> Self {
        match err {
            DatabaseError::UniqueViolation(msg) => ApiError::Conflict(msg),
            other => ApiError::Database(other.to_string()),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    fn status_of(err: ApiError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            status_of(ApiError::Validation(ValidationError::InvalidRequestFormat)),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(ApiError::Conflict("dup".to_string())),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_of(ApiError::Database("down".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(status_of(ApiError::RateLimited), StatusCode::TOO_MANY_REQUESTS);
    }

    #[test]
    fn test_unique_violation_becomes_conflict() {
        let err: ApiError = DatabaseError::UniqueViolation("duplicate key".to_string()).into();
        assert!(matches!(err, ApiError::Conflict(_)));

        let err: ApiError =
            DatabaseError::ConnectionError("pool exhausted".to_string()).into();
        assert!(matches!(err, ApiError::Database(_)));
    }

    #[test]
    fn test_enum_violation_body_lists_legal_values() {
        let body = validation_body(ValidationError::InvalidEnumValue {
            field: "tempo",
            value: "Allegro".to_string(),
            allowed: vec!["Slow".to_string(), "Medium".to_string(), "Fast".to_string()],
        });

        assert_eq!(body.error, "invalid_enum_value");
        assert_eq!(body.field.as_deref(), Some("tempo"));
        assert_eq!(body.allowed.as_ref().map(|a| a.len()), Some(3));
    }

    #[test]
    fn test_missing_fields_body_lists_every_field() {
        let body = validation_body(ValidationError::MissingRequiredFields {
            fields: vec!["singer".to_string(), "offering_on".to_string()],
        });

        assert_eq!(body.error, "missing_required_fields");
        assert_eq!(
            body.missing,
            Some(vec!["singer".to_string(), "offering_on".to_string()])
        );
    }
}
