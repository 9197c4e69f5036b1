//! Domain layer for calculator module
//!
//! Contains operand validation and the arithmetic service.

pub mod operands;
pub mod service;

pub use operands::OperandPair;
pub use service::Service;
