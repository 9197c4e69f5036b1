//! Calculator API trait and errors

use serde_json::Value;

use crate::models::{Number, Operation};

/// Calculator API trait
///
/// Evaluates one binary arithmetic operation. Operands arrive as raw JSON
/// values; implementations check that both are numbers before doing any
/// arithmetic.
pub trait CalculatorApi: Send + Sync {
    /// Apply `op` to `a` and `b`.
    ///
    /// # Errors
    /// - [`CalculatorError::InvalidOperand`] if either operand is not a number
    /// - [`CalculatorError::DivisionByZero`] if `op` is division and `b` is zero
    /// - [`CalculatorError::Unexpected`] for any other failure
    fn evaluate(&self, op: Operation, a: &Value, b: &Value) -> Result<Number, CalculatorError>;
}

/// Error type for calculator operations.
///
/// The `Display` text of each variant is the message shown to API clients.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CalculatorError {
    /// At least one operand is not a number.
    #[error("Both operands must be numbers.")]
    InvalidOperand {
        /// Rendered first operand
        a: String,
        /// Rendered second operand
        b: String,
    },

    /// The divisor is exactly zero.
    #[error("Cannot divide by zero.")]
    DivisionByZero,

    /// Anything else; the message is passed to clients verbatim.
    #[error("{0}")]
    Unexpected(String),
}

impl CalculatorError {
    /// Build an `InvalidOperand` error from the offending values.
    #[must_use]
    pub fn invalid_operand(a: &Value, b: &Value) -> Self {
        Self::InvalidOperand {
            a: a.to_string(),
            b: b.to_string(),
        }
    }

    /// Build an `Unexpected` error with the given message.
    #[must_use]
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected(message.into())
    }

    /// Stable machine-readable kind, used as a log field.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::InvalidOperand { .. } => "invalid_operand",
            Self::DivisionByZero => "division_by_zero",
            Self::Unexpected(_) => "unexpected",
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn messages_are_client_facing() {
        let invalid = CalculatorError::invalid_operand(&json!("abc"), &json!(5));
        assert_eq!(invalid.to_string(), "Both operands must be numbers.");
        assert_eq!(
            CalculatorError::DivisionByZero.to_string(),
            "Cannot divide by zero."
        );
        assert_eq!(
            CalculatorError::unexpected("Mocked addition failure").to_string(),
            "Mocked addition failure"
        );
    }

    #[test]
    fn invalid_operand_keeps_offending_values() {
        let err = CalculatorError::invalid_operand(&json!([1, 2]), &json!(null));
        assert_eq!(
            err,
            CalculatorError::InvalidOperand {
                a: "[1,2]".to_owned(),
                b: "null".to_owned(),
            }
        );
        assert_eq!(err.kind(), "invalid_operand");
    }
}
