//! # API Errors
//!
//! Error types for the HTTP layer. Validation and arithmetic-domain
//! failures surface as 400 with their human-readable message; storage
//! faults surface as 500 with an endpoint-generic message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::arithmetic::ArithmeticError;
use crate::validation::ValidationError;

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// API errors
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (400)
    // ==================
    /// Missing or non-numeric operand
    #[error("{0}")]
    InvalidOperand(String),

    /// Zero divisor on divide
    #[error("It's not possible to divide by 0")]
    DivisionByZero,

    /// Negative operand on square-root
    #[error("Cannot compute the square root of a negative number")]
    NegativeOperand,

    /// Operation name outside the enumerated set
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    /// CRUD miss. The documented contract reports 400 here, not 404 -
    /// kept as-is; clients depend on it.
    #[error("Calculation not found")]
    NotFound,

    // ==================
    // Server Errors (500)
    // ==================
    /// Storage fault, carrying the endpoint's generic message
    #[error("{0}")]
    Storage(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidOperand(_) => StatusCode::BAD_REQUEST,
            ApiError::DivisionByZero => StatusCode::BAD_REQUEST,
            ApiError::NegativeOperand => StatusCode::BAD_REQUEST,
            ApiError::UnknownOperation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::BAD_REQUEST,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::InvalidOperand(err.to_string())
    }
}

impl From<ArithmeticError> for ApiError {
    fn from(err: ArithmeticError) -> Self {
        match err {
            ArithmeticError::DivisionByZero => ApiError::DivisionByZero,
            ArithmeticError::NegativeOperand => ApiError::NegativeOperand,
            ArithmeticError::UnknownOperation(name) => ApiError::UnknownOperation(name),
            ArithmeticError::MissingOperand(_) => ApiError::InvalidOperand(err.to_string()),
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorBody {
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::InvalidOperand("bad".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::DivisionByZero.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::Storage("down".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_not_found_is_400() {
        // Deliberate: the history endpoints report a miss as 400
        assert_eq!(ApiError::NotFound.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_validation_error_conversion() {
        let err = ApiError::from(ValidationError::InvalidBinaryOperands);
        assert_eq!(err.to_string(), "number1 and number2 must be numbers");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_arithmetic_error_conversion() {
        assert!(matches!(
            ApiError::from(ArithmeticError::DivisionByZero),
            ApiError::DivisionByZero
        ));
        assert!(matches!(
            ApiError::from(ArithmeticError::UnknownOperation("cube".to_string())),
            ApiError::UnknownOperation(_)
        ));
    }
}
