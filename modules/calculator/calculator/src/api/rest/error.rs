//! Error envelope for the REST API.
//!
//! Every failure becomes `400 {"error": "<message>"}`, whether it is a body
//! that could not be parsed, a classified [`CalculatorError`], or a panic
//! caught by the router. No failure is reported as a 5xx response.
//! Requests that match no route keep their 404/405 status but still get the
//! same JSON envelope.

use std::any::Any;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use calculator_sdk::CalculatorError;

use super::dto::ErrorResponse;

/// Status code used for every error response except unknown routes.
pub const ERROR_STATUS: StatusCode = StatusCode::BAD_REQUEST;

/// Message for bodies that fail transport-level parsing.
pub const MALFORMED_REQUEST: &str = "Invalid or missing numeric input.";

pub const NOT_FOUND: &str = "Not Found";
pub const METHOD_NOT_ALLOWED: &str = "Method Not Allowed";

/// Client-facing error carrying the message placed in the envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self::with_status(ERROR_STATUS, message)
    }

    /// Envelope with a status other than [`ERROR_STATUS`]; only routing
    /// failures use this.
    pub fn with_status(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn malformed_request() -> Self {
        Self::new(MALFORMED_REQUEST)
    }

    pub fn not_found() -> Self {
        Self::with_status(StatusCode::NOT_FOUND, NOT_FOUND)
    }

    pub fn method_not_allowed() -> Self {
        Self::with_status(StatusCode::METHOD_NOT_ALLOWED, METHOD_NOT_ALLOWED)
    }

    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<CalculatorError> for ApiError {
    fn from(e: CalculatorError) -> Self {
        Self::new(e.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::warn!(
            status = %rejection.status(),
            error = %rejection.body_text(),
            "Validation error"
        );
        Self::malformed_request()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorResponse {
                error: self.message,
            }),
        )
            .into_response()
    }
}

/// Catch-all translator for panics raised while handling a request.
///
/// The panic payload text is reported verbatim, like any other unexpected
/// failure.
#[allow(clippy::needless_pass_by_value)] // signature required by `CatchPanicLayer::custom`
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_owned()
    } else {
        "Unexpected error".to_owned()
    };

    tracing::error!(error = %message, "Unexpected error");
    ApiError::new(message).into_response()
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use serde_json::Value;

    async fn body_json(response: Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn calculator_errors_render_as_400_envelope() {
        let response = ApiError::from(CalculatorError::DivisionByZero).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"error": "Cannot divide by zero."})
        );
    }

    #[tokio::test]
    async fn unexpected_message_is_verbatim() {
        let err = ApiError::from(CalculatorError::unexpected("Unexpected math error"));
        assert_eq!(err.message(), "Unexpected math error");
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], "Unexpected math error");
    }

    #[tokio::test]
    async fn routing_errors_keep_their_status() {
        let response = ApiError::not_found().into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["error"], NOT_FOUND);

        let err = ApiError::method_not_allowed();
        assert_eq!(err.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body_json(err.into_response()).await["error"], METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn panic_payloads_are_translated() {
        let response = panic_response(Box::new("Simulated crash"));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], "Simulated crash");

        let response = panic_response(Box::new(String::from("formatted crash 42")));
        assert_eq!(body_json(response).await["error"], "formatted crash 42");

        let response = panic_response(Box::new(7_u8));
        assert_eq!(body_json(response).await["error"], "Unexpected error");
    }
}
