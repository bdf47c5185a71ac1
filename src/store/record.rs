//! # Calculation Records
//!
//! The sole persisted entity and the field sets used to create and
//! replace one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::arithmetic::Operation;

/// A persisted description of one completed calculation.
///
/// `id` and `timestamp` are assigned by the store at insert and never
/// change afterwards. `number2` is `None` exactly for square-root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationRecord {
    /// Store-assigned unique identifier, immutable after creation
    pub id: String,
    /// One of the enumerated operation names
    pub operation: Operation,
    /// First operand
    pub number1: f64,
    /// Second operand; absent for square-root
    pub number2: Option<f64>,
    /// Computed outcome at creation time; replaced verbatim on update
    pub result: f64,
    /// Creation time, defaulted by the store at insert
    pub timestamp: DateTime<Utc>,
}

/// The caller-supplied fields of a record.
///
/// Used both to create a record (the store assigns id and timestamp) and
/// to replace the mutable fields of an existing one (full replace, no
/// recomputation of `result`).
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationDraft {
    pub operation: Operation,
    pub number1: f64,
    pub number2: Option<f64>,
    pub result: f64,
}

impl CalculationDraft {
    pub fn new(operation: Operation, number1: f64, number2: Option<f64>, result: f64) -> Self {
        Self {
            operation,
            number1,
            number2,
            result,
        }
    }
}
