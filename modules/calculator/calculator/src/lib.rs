//! Calculator Module
//!
//! A stateless REST service for the four basic arithmetic operations.
//!
//! ## Architecture
//!
//! - `domain/` - operand validation and the arithmetic `Service`
//! - `api/rest/` - DTOs, handlers, routes, and the `{"error": ...}` envelope
//! - `web.rs` - static landing page
//! - `module.rs` - `CalculatorModule`, which registers the routes
//!
//! The public contract (`CalculatorApi`, `Number`, `Operation`,
//! `CalculatorError`) lives in `calculator-sdk` and is re-exported here.

pub use calculator_sdk::{CalculatorApi, CalculatorError, Number, Operation};

// === MODULE DEFINITION ===
mod module;
pub use module::CalculatorModule;

// === PUBLIC EXPORTS ===
pub mod domain;
pub use domain::Service;

// === INTERNAL MODULES ===
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod web;
