//! Public models for the calculator module.
//!
//! These are transport-agnostic data structures shared by the module and its
//! consumers.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A numeric operand or result.
///
/// Integers and floating-point values are kept apart so that integer
/// arithmetic stays exact and serializes without a fractional part.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    /// Exact integer, serialized without a fractional part.
    Int(i64),
    /// Floating-point value; always finite in a successful result.
    Float(f64),
}

impl Number {
    /// Interpret a JSON value as a number.
    ///
    /// Returns `None` for anything that is not a JSON number; booleans and
    /// numeric strings are not numbers.
    #[must_use]
    pub fn from_json(value: &Value) -> Option<Self> {
        let Value::Number(n) = value else {
            return None;
        };
        n.as_i64()
            .map(Self::Int)
            .or_else(|| n.as_f64().map(Self::Float))
    }

    /// Widen to `f64`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // widening is the documented float semantics
    pub const fn as_f64(self) -> f64 {
        match self {
            Self::Int(i) => i as f64,
            Self::Float(f) => f,
        }
    }

    /// Exact comparison against zero; `-0.0` counts as zero.
    #[must_use]
    pub fn is_zero(self) -> bool {
        match self {
            Self::Int(i) => i == 0,
            Self::Float(f) => f == 0.0,
        }
    }

    #[must_use]
    pub const fn is_finite(self) -> bool {
        match self {
            Self::Int(_) => true,
            Self::Float(f) => f.is_finite(),
        }
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x:?}"),
        }
    }
}

/// The four supported arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// Every operation, in route registration order.
    pub const ALL: [Self; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// Lowercase name, also the REST path segment.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
        }
    }

    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_json_keeps_integer_kind() {
        assert_eq!(Number::from_json(&json!(5)), Some(Number::Int(5)));
        assert_eq!(Number::from_json(&json!(-3)), Some(Number::Int(-3)));
        assert_eq!(Number::from_json(&json!(2.5)), Some(Number::Float(2.5)));
    }

    #[test]
    fn from_json_widens_unsigned_overflow() {
        let big = json!(u64::MAX);
        assert!(matches!(Number::from_json(&big), Some(Number::Float(_))));
    }

    #[test]
    fn from_json_rejects_non_numbers() {
        for value in [json!("5"), json!(null), json!(true), json!([1, 2]), json!({"a": 1})] {
            assert_eq!(Number::from_json(&value), None, "{value} is not a number");
        }
    }

    #[test]
    fn zero_detection_is_exact() {
        assert!(Number::Int(0).is_zero());
        assert!(Number::Float(0.0).is_zero());
        assert!(Number::Float(-0.0).is_zero());
        assert!(!Number::Float(1e-300).is_zero());
    }

    #[test]
    fn serializes_untagged() {
        assert_eq!(serde_json::to_string(&Number::Int(12)).unwrap(), "12");
        assert_eq!(serde_json::to_string(&Number::Float(4.0)).unwrap(), "4.0");
    }

    #[test]
    fn operation_names_match_paths() {
        let names: Vec<_> = Operation::ALL.iter().map(|op| op.name()).collect();
        assert_eq!(names, ["add", "subtract", "multiply", "divide"]);
        assert_eq!(Operation::Divide.symbol(), '/');
    }
}
