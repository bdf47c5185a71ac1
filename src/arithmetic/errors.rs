//! # Arithmetic Errors
//!
//! Domain errors raised while naming or evaluating an operation.

use thiserror::Error;

/// Result type for arithmetic evaluation
pub type ArithmeticResult<T> = Result<T, ArithmeticError>;

/// Arithmetic domain errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    /// Division with a zero divisor (exact equality, checked before dividing)
    #[error("It's not possible to divide by 0")]
    DivisionByZero,

    /// Square root of a negative operand
    #[error("Cannot compute the square root of a negative number")]
    NegativeOperand,

    /// Operation name outside the enumerated set
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    /// A binary operation was evaluated without its second operand
    #[error("{0} requires number2")]
    MissingOperand(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ArithmeticError::DivisionByZero.to_string(),
            "It's not possible to divide by 0"
        );
        assert_eq!(
            ArithmeticError::NegativeOperand.to_string(),
            "Cannot compute the square root of a negative number"
        );
        assert_eq!(
            ArithmeticError::UnknownOperation("cube".to_string()).to_string(),
            "Unknown operation: cube"
        );
    }
}
