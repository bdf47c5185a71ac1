//! # Arithmetic Dispatcher
//!
//! The fixed set of supported operations and the pure evaluator mapping an
//! operation to its numeric function. Deterministic, no side effects.

pub mod errors;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use errors::{ArithmeticError, ArithmeticResult};

/// The enumerated calculation operations.
///
/// Wire names are kebab-case (`"square-root"`); no name outside this set
/// is ever accepted or stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    Exponentiation,
    SquareRoot,
}

impl Operation {
    /// Wire name of the operation
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
            Operation::Modulo => "modulo",
            Operation::Exponentiation => "exponentiation",
            Operation::SquareRoot => "square-root",
        }
    }

    /// Square-root takes a single operand; everything else takes two.
    pub fn is_unary(&self) -> bool {
        matches!(self, Operation::SquareRoot)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Operation {
    type Err = ArithmeticError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(Operation::Add),
            "subtract" => Ok(Operation::Subtract),
            "multiply" => Ok(Operation::Multiply),
            "divide" => Ok(Operation::Divide),
            "modulo" => Ok(Operation::Modulo),
            "exponentiation" => Ok(Operation::Exponentiation),
            "square-root" => Ok(Operation::SquareRoot),
            other => Err(ArithmeticError::UnknownOperation(other.to_string())),
        }
    }
}

/// Evaluate `operation(number1, number2)`.
///
/// `number2` is `None` exactly for square-root. Division checks the zero
/// divisor with exact equality before dividing; modulo uses the remainder
/// operator (sign follows the dividend); exponentiation may yield NaN for
/// domain reasons and the result is returned as-is.
pub fn evaluate(
    operation: Operation,
    number1: f64,
    number2: Option<f64>,
) -> ArithmeticResult<f64> {
    match operation {
        Operation::Add => Ok(number1 + second(operation, number2)?),
        Operation::Subtract => Ok(number1 - second(operation, number2)?),
        Operation::Multiply => Ok(number1 * second(operation, number2)?),
        Operation::Divide => {
            let divisor = second(operation, number2)?;
            if divisor == 0.0 {
                return Err(ArithmeticError::DivisionByZero);
            }
            Ok(number1 / divisor)
        }
        Operation::Modulo => Ok(number1 % second(operation, number2)?),
        Operation::Exponentiation => Ok(number1.powf(second(operation, number2)?)),
        Operation::SquareRoot => {
            if number1 < 0.0 {
                return Err(ArithmeticError::NegativeOperand);
            }
            Ok(number1.sqrt())
        }
    }
}

/// Require the second operand of a binary operation.
///
/// The API layer validates operands before dispatch, so this only fires on
/// an internal caller mistake.
fn second(operation: Operation, number2: Option<f64>) -> ArithmeticResult<f64> {
    number2.ok_or(ArithmeticError::MissingOperand(operation.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_round_trips_through_str() {
        for op in [
            Operation::Add,
            Operation::Subtract,
            Operation::Multiply,
            Operation::Divide,
            Operation::Modulo,
            Operation::Exponentiation,
            Operation::SquareRoot,
        ] {
            assert_eq!(op.as_str().parse::<Operation>().unwrap(), op);
        }
    }

    #[test]
    fn test_unknown_operation_rejected() {
        let err = "cube".parse::<Operation>().unwrap_err();
        assert_eq!(err, ArithmeticError::UnknownOperation("cube".to_string()));
    }

    #[test]
    fn test_serde_uses_kebab_case() {
        let json = serde_json::to_string(&Operation::SquareRoot).unwrap();
        assert_eq!(json, "\"square-root\"");
        let parsed: Operation = serde_json::from_str("\"modulo\"").unwrap();
        assert_eq!(parsed, Operation::Modulo);
    }

    #[test]
    fn test_basic_binary_operations() {
        assert_eq!(evaluate(Operation::Add, 2.0, Some(3.0)), Ok(5.0));
        assert_eq!(evaluate(Operation::Subtract, 2.0, Some(3.0)), Ok(-1.0));
        assert_eq!(evaluate(Operation::Multiply, 2.0, Some(3.0)), Ok(6.0));
        assert_eq!(evaluate(Operation::Divide, 6.0, Some(3.0)), Ok(2.0));
    }

    #[test]
    fn test_divide_by_zero_is_checked_before_dividing() {
        assert_eq!(
            evaluate(Operation::Divide, 1.0, Some(0.0)),
            Err(ArithmeticError::DivisionByZero)
        );
        // Negative zero compares equal to zero
        assert_eq!(
            evaluate(Operation::Divide, 1.0, Some(-0.0)),
            Err(ArithmeticError::DivisionByZero)
        );
        // A tiny divisor is not zero; no epsilon check
        assert!(evaluate(Operation::Divide, 1.0, Some(1e-300)).is_ok());
    }

    #[test]
    fn test_modulo_sign_follows_dividend() {
        assert_eq!(evaluate(Operation::Modulo, 7.0, Some(3.0)), Ok(1.0));
        assert_eq!(evaluate(Operation::Modulo, -7.0, Some(3.0)), Ok(-1.0));
        assert_eq!(evaluate(Operation::Modulo, 7.0, Some(-3.0)), Ok(1.0));
    }

    #[test]
    fn test_exponentiation_supports_negative_and_fractional() {
        assert_eq!(evaluate(Operation::Exponentiation, 2.0, Some(10.0)), Ok(1024.0));
        assert_eq!(evaluate(Operation::Exponentiation, 4.0, Some(0.5)), Ok(2.0));
        assert_eq!(evaluate(Operation::Exponentiation, 2.0, Some(-1.0)), Ok(0.5));
        // Domain miss yields NaN; the dispatcher does not re-validate
        let nan = evaluate(Operation::Exponentiation, -8.0, Some(0.5)).unwrap();
        assert!(nan.is_nan());
    }

    #[test]
    fn test_square_root() {
        assert_eq!(evaluate(Operation::SquareRoot, 16.0, None), Ok(4.0));
        assert_eq!(evaluate(Operation::SquareRoot, 0.0, None), Ok(0.0));
        assert_eq!(
            evaluate(Operation::SquareRoot, -4.0, None),
            Err(ArithmeticError::NegativeOperand)
        );
    }

    #[test]
    fn test_missing_second_operand_is_an_error() {
        assert_eq!(
            evaluate(Operation::Add, 1.0, None),
            Err(ArithmeticError::MissingOperand("add"))
        );
    }
}
