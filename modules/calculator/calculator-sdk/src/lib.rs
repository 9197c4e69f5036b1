//! Calculator SDK
//!
//! This crate provides the contract of the calculator module:
//! - API trait (`CalculatorApi`)
//! - Numeric model (`Number`, `Operation`)
//! - Error type (`CalculatorError`)
//!
//! ## Usage
//!
//! ```ignore
//! use calculator_sdk::{CalculatorApi, Operation};
//!
//! let result = api.evaluate(Operation::Add, &json!(5), &json!(7))?;
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

// === API TRAIT AND ERRORS ===
mod api;
pub use api::{CalculatorApi, CalculatorError};

// === MODELS ===
pub mod models;
pub use models::{Number, Operation};
