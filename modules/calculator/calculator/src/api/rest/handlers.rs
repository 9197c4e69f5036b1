//! REST handlers for calculator module

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::{Extension, Json};
use calculator_sdk::{CalculatorApi, Operation};
use serde_json::Value;
use utoipa::OpenApi as _;

use super::dto::{ErrorResponse, HealthResponse, OperationRequest, OperationResponse};
use super::error::{ApiError, ApiResult};
use super::openapi::ApiDoc;

/// Message returned by the liveness probe.
pub const HEALTH_MESSAGE: &str = "Calculator service is running successfully.";

type Payload = Result<Json<OperationRequest>, JsonRejection>;

/// Parse the payload, run `op`, and wrap the outcome.
///
/// A payload rejection short-circuits before the calculator is called.
fn evaluate(
    api: &dyn CalculatorApi,
    op: Operation,
    payload: Payload,
) -> ApiResult<Json<OperationResponse>> {
    let Json(req) = payload?;
    let result = api.evaluate(op, &Value::Number(req.a), &Value::Number(req.b))?;
    Ok(Json(OperationResponse { result }))
}

/// Handler for POST /add
#[utoipa::path(
    post,
    path = "/add",
    tag = "calculator",
    request_body = OperationRequest,
    responses(
        (status = 200, description = "Sum of the two numbers", body = OperationResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse),
    )
)]
pub async fn add(
    Extension(api): Extension<Arc<dyn CalculatorApi>>,
    payload: Payload,
) -> ApiResult<Json<OperationResponse>> {
    evaluate(api.as_ref(), Operation::Add, payload)
}

/// Handler for POST /subtract
#[utoipa::path(
    post,
    path = "/subtract",
    tag = "calculator",
    request_body = OperationRequest,
    responses(
        (status = 200, description = "Difference a - b", body = OperationResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse),
    )
)]
pub async fn subtract(
    Extension(api): Extension<Arc<dyn CalculatorApi>>,
    payload: Payload,
) -> ApiResult<Json<OperationResponse>> {
    evaluate(api.as_ref(), Operation::Subtract, payload)
}

/// Handler for POST /multiply
#[utoipa::path(
    post,
    path = "/multiply",
    tag = "calculator",
    request_body = OperationRequest,
    responses(
        (status = 200, description = "Product of the two numbers", body = OperationResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse),
    )
)]
pub async fn multiply(
    Extension(api): Extension<Arc<dyn CalculatorApi>>,
    payload: Payload,
) -> ApiResult<Json<OperationResponse>> {
    evaluate(api.as_ref(), Operation::Multiply, payload)
}

/// Handler for POST /divide
///
/// The result is always a float.
#[utoipa::path(
    post,
    path = "/divide",
    tag = "calculator",
    request_body = OperationRequest,
    responses(
        (status = 200, description = "Quotient a / b", body = OperationResponse),
        (status = 400, description = "Invalid input or division by zero", body = ErrorResponse),
    )
)]
pub async fn divide(
    Extension(api): Extension<Arc<dyn CalculatorApi>>,
    payload: Payload,
) -> ApiResult<Json<OperationResponse>> {
    evaluate(api.as_ref(), Operation::Divide, payload)
}

/// Handler for GET /health
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "Service is alive", body = HealthResponse))
)]
pub async fn health() -> Json<HealthResponse> {
    tracing::info!("Health check ping received.");
    Json(HealthResponse {
        status: "ok".to_owned(),
        message: HEALTH_MESSAGE.to_owned(),
    })
}

/// Fallback for paths with no route.
pub async fn not_found() -> ApiError {
    ApiError::not_found()
}

/// Fallback for known paths called with the wrong method.
pub async fn method_not_allowed() -> ApiError {
    ApiError::method_not_allowed()
}

/// Handler for GET /openapi.json
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
