//! # Operand Validation
//!
//! Type/range checks applied to request operands before any arithmetic
//! runs. Pure functions, no side effects.
//!
//! Operands arrive as `Option<f64>` because request bodies may omit them
//! or carry a non-numeric JSON value (decoded to `None` at the HTTP
//! layer). Binary operations validate both operands; square-root
//! validates only the first.

use thiserror::Error;

/// Result type for validation
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Operand validation errors.
///
/// Both variants are the `InvalidOperand` category; the messages are
/// tailored to the request shape that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A binary operation received a missing or non-numeric operand
    #[error("number1 and number2 must be numbers")]
    InvalidBinaryOperands,

    /// A unary operation received a missing or non-numeric operand
    #[error("Invalid number provided")]
    InvalidUnaryOperand,
}

/// Validate both operands of a binary operation.
///
/// Fails when either operand is missing or not a finite number.
pub fn validate_binary(
    number1: Option<f64>,
    number2: Option<f64>,
) -> ValidationResult<(f64, f64)> {
    match (number1, number2) {
        (Some(n1), Some(n2)) if n1.is_finite() && n2.is_finite() => Ok((n1, n2)),
        _ => Err(ValidationError::InvalidBinaryOperands),
    }
}

/// Validate the single operand of a unary operation (square-root).
pub fn validate_unary(number1: Option<f64>) -> ValidationResult<f64> {
    match number1 {
        Some(n1) if n1.is_finite() => Ok(n1),
        _ => Err(ValidationError::InvalidUnaryOperand),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_accepts_finite_numbers() {
        assert_eq!(validate_binary(Some(1.5), Some(-2.0)), Ok((1.5, -2.0)));
        assert_eq!(validate_binary(Some(0.0), Some(0.0)), Ok((0.0, 0.0)));
    }

    #[test]
    fn test_binary_rejects_missing_operands() {
        assert_eq!(
            validate_binary(None, Some(1.0)),
            Err(ValidationError::InvalidBinaryOperands)
        );
        assert_eq!(
            validate_binary(Some(1.0), None),
            Err(ValidationError::InvalidBinaryOperands)
        );
        assert_eq!(
            validate_binary(None, None),
            Err(ValidationError::InvalidBinaryOperands)
        );
    }

    #[test]
    fn test_binary_rejects_non_finite() {
        assert_eq!(
            validate_binary(Some(f64::NAN), Some(1.0)),
            Err(ValidationError::InvalidBinaryOperands)
        );
        assert_eq!(
            validate_binary(Some(1.0), Some(f64::INFINITY)),
            Err(ValidationError::InvalidBinaryOperands)
        );
    }

    #[test]
    fn test_unary_accepts_finite_number() {
        assert_eq!(validate_unary(Some(16.0)), Ok(16.0));
        // Negative numbers pass the type check; the sign check is the
        // dispatcher's job.
        assert_eq!(validate_unary(Some(-4.0)), Ok(-4.0));
    }

    #[test]
    fn test_unary_rejects_missing_or_non_finite() {
        assert_eq!(validate_unary(None), Err(ValidationError::InvalidUnaryOperand));
        assert_eq!(
            validate_unary(Some(f64::NEG_INFINITY)),
            Err(ValidationError::InvalidUnaryOperand)
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ValidationError::InvalidBinaryOperands.to_string(),
            "number1 and number2 must be numbers"
        );
        assert_eq!(
            ValidationError::InvalidUnaryOperand.to_string(),
            "Invalid number provided"
        );
    }
}
