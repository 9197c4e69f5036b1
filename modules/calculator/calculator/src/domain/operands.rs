//! Operand validation and arithmetic.
//!
//! The numeric-type check happens once, when an [`OperandPair`] is built;
//! everything after that works on [`Number`] only.

use calculator_sdk::{CalculatorError, Number, Operation};
use serde_json::Value;

/// Message for a result JSON cannot represent (overflow to infinity).
pub const NON_FINITE_RESULT: &str = "Result is not a finite number.";

/// Two validated operands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperandPair {
    pub a: Number,
    pub b: Number,
}

impl OperandPair {
    /// Check that both values are numbers.
    ///
    /// # Errors
    /// Returns [`CalculatorError::InvalidOperand`] carrying both values when
    /// either one is not a JSON number.
    pub fn from_values(a: &Value, b: &Value) -> Result<Self, CalculatorError> {
        match (Number::from_json(a), Number::from_json(b)) {
            (Some(a), Some(b)) => Ok(Self { a, b }),
            _ => Err(CalculatorError::invalid_operand(a, b)),
        }
    }

    /// Apply `op` to the pair.
    ///
    /// Integer pairs stay integers for add, subtract and multiply unless the
    /// result overflows `i64`, in which case the operation is redone in `f64`.
    /// Division always yields a float.
    ///
    /// # Errors
    /// - [`CalculatorError::DivisionByZero`] when dividing by exactly zero
    /// - [`CalculatorError::Unexpected`] when the result is not finite
    pub fn apply(self, op: Operation) -> Result<Number, CalculatorError> {
        let result = match op {
            Operation::Add => self.int_or_float(i64::checked_add, |a, b| a + b),
            Operation::Subtract => self.int_or_float(i64::checked_sub, |a, b| a - b),
            Operation::Multiply => self.int_or_float(i64::checked_mul, |a, b| a * b),
            Operation::Divide => {
                if self.b.is_zero() {
                    return Err(CalculatorError::DivisionByZero);
                }
                Number::Float(self.a.as_f64() / self.b.as_f64())
            }
        };

        if result.is_finite() {
            Ok(result)
        } else {
            Err(CalculatorError::unexpected(NON_FINITE_RESULT))
        }
    }

    fn int_or_float(
        self,
        int_op: fn(i64, i64) -> Option<i64>,
        float_op: fn(f64, f64) -> f64,
    ) -> Number {
        if let (Number::Int(a), Number::Int(b)) = (self.a, self.b)
            && let Some(result) = int_op(a, b)
        {
            return Number::Int(result);
        }
        Number::Float(float_op(self.a.as_f64(), self.b.as_f64()))
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use serde_json::json;

    fn pair(a: Value, b: Value) -> OperandPair {
        OperandPair::from_values(&a, &b).unwrap()
    }

    #[test]
    fn integer_overflow_widens_to_float() {
        let result = pair(json!(i64::MAX), json!(1)).apply(Operation::Add).unwrap();
        assert!(matches!(result, Number::Float(_)));

        let result = pair(json!(i64::MIN), json!(-1))
            .apply(Operation::Multiply)
            .unwrap();
        assert!(matches!(result, Number::Float(_)));
    }

    #[test]
    fn mixed_operands_use_float() {
        let result = pair(json!(2), json!(0.5)).apply(Operation::Multiply).unwrap();
        assert_eq!(result, Number::Float(1.0));
    }

    #[test]
    fn negative_zero_divisor_is_zero() {
        let err = pair(json!(1), json!(-0.0)).apply(Operation::Divide).unwrap_err();
        assert_eq!(err, CalculatorError::DivisionByZero);
    }

    #[test]
    fn float_overflow_is_unexpected() {
        let err = pair(json!(f64::MAX), json!(f64::MAX))
            .apply(Operation::Multiply)
            .unwrap_err();
        assert_eq!(err, CalculatorError::unexpected(NON_FINITE_RESULT));

        let err = pair(json!(f64::MAX), json!(1e-300))
            .apply(Operation::Divide)
            .unwrap_err();
        assert_eq!(err.to_string(), NON_FINITE_RESULT);
    }

    #[test]
    fn type_check_rejects_either_side() {
        assert!(OperandPair::from_values(&json!("abc"), &json!(5)).is_err());
        assert!(OperandPair::from_values(&json!(3), &json!(null)).is_err());
        assert!(OperandPair::from_values(&json!([1, 2]), &json!(4)).is_err());
    }
}
