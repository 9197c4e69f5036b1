//! Route registration for calculator module

use std::sync::Arc;

use axum::routing::{get, post};
use axum::{Extension, Router};
use calculator_sdk::CalculatorApi;
use tower_http::catch_panic::CatchPanicLayer;

use crate::web;

use super::error::panic_response;
use super::handlers;

/// Register all REST routes for calculator module.
///
/// # Arguments
/// * `router` - Axum router to add routes to
/// * `api` - Calculator used by the arithmetic handlers
pub fn register_routes(router: Router, api: Arc<dyn CalculatorApi>) -> Router {
    router
        // POST /add, /subtract, /multiply, /divide - arithmetic on {a, b}
        .route("/add", post(handlers::add))
        .route("/subtract", post(handlers::subtract))
        .route("/multiply", post(handlers::multiply))
        .route("/divide", post(handlers::divide))
        // Health check endpoints:
        // - /health: JSON status and message
        // - /healthz: plain "ok" liveness probe (Kubernetes-style)
        .route("/health", get(handlers::health))
        .route("/healthz", get(|| async { "ok" }))
        .route("/openapi.json", get(handlers::openapi_json))
        .route("/", get(web::home))
        // JSON envelope for unmatched paths and methods; must follow the routes
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .fallback(handlers::not_found)
        .layer(Extension(api))
        .layer(CatchPanicLayer::custom(panic_response))
}
