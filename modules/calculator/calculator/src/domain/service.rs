//! Domain service for calculator
//!
//! Contains the core business logic for arithmetic operations.

use calculator_sdk::{CalculatorApi, CalculatorError, Number, Operation};
use serde_json::Value;
use tracing::{error, info};

use super::operands::OperandPair;

/// Domain service that performs arithmetic operations.
///
/// Stateless: every call validates its operands, computes, and emits one
/// diagnostic event describing the outcome. It is exposed to the REST layer
/// through [`CalculatorApi`].
#[derive(Debug, Clone, Default)]
pub struct Service;

impl Service {
    /// Create a new service.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Return the sum of two numbers.
    ///
    /// # Errors
    /// [`CalculatorError::InvalidOperand`] if either operand is not a number.
    pub fn add(&self, a: &Value, b: &Value) -> Result<Number, CalculatorError> {
        self.evaluate(Operation::Add, a, b)
    }

    /// Return `a - b`.
    ///
    /// # Errors
    /// [`CalculatorError::InvalidOperand`] if either operand is not a number.
    pub fn subtract(&self, a: &Value, b: &Value) -> Result<Number, CalculatorError> {
        self.evaluate(Operation::Subtract, a, b)
    }

    /// Return the product of two numbers.
    ///
    /// # Errors
    /// [`CalculatorError::InvalidOperand`] if either operand is not a number.
    pub fn multiply(&self, a: &Value, b: &Value) -> Result<Number, CalculatorError> {
        self.evaluate(Operation::Multiply, a, b)
    }

    /// Return `a / b` as a float.
    ///
    /// # Errors
    /// [`CalculatorError::InvalidOperand`] if either operand is not a number,
    /// [`CalculatorError::DivisionByZero`] if `b` is zero.
    pub fn divide(&self, a: &Value, b: &Value) -> Result<Number, CalculatorError> {
        self.evaluate(Operation::Divide, a, b)
    }
}

impl CalculatorApi for Service {
    fn evaluate(&self, op: Operation, a: &Value, b: &Value) -> Result<Number, CalculatorError> {
        let outcome = OperandPair::from_values(a, b).and_then(|pair| pair.apply(op));

        match &outcome {
            Ok(result) => info!(
                operation = %op,
                %a,
                %b,
                %result,
                "{op} performed: {a} {} {b} = {result}",
                op.symbol()
            ),
            Err(e) => error!(
                operation = %op,
                %a,
                %b,
                kind = e.kind(),
                "{op} failed: {e}"
            ),
        }

        outcome
    }
}
