//! REST DTOs for calculator module
//!
//! These types are transport-specific (serde + utoipa for REST/OpenAPI).

use calculator_sdk::Number;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Two operands for one arithmetic operation.
///
/// Both fields must be JSON numbers; anything else is rejected while the
/// body is parsed.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OperationRequest {
    /// First operand
    #[schema(value_type = f64)]
    pub a: serde_json::Number,
    /// Second operand
    #[schema(value_type = f64)]
    pub b: serde_json::Number,
}

/// Successful operation result.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OperationResponse {
    #[schema(value_type = f64)]
    pub result: Number,
}

/// Error envelope returned with every 400 response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Liveness probe payload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}
