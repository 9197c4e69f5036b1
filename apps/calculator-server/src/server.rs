//! HTTP server: router assembly, middleware stack, and serving.

use std::time::Duration;

use anyhow::{Context, Result};
use axum::Router;
use axum::body::Body;
use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderName, Request, Response};
use calculator::CalculatorModule;
use tokio_util::sync::CancellationToken;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use tracing::field::Empty;

use crate::config::ServerConfig;
use crate::shutdown;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Build the complete application router.
#[must_use]
pub fn build_router(config: &ServerConfig) -> Router {
    let router = CalculatorModule::default().register_rest(Router::new());
    apply_middleware_stack(router, config)
}

/// Apply all middleware layers to a router.
///
/// Layers are added innermost first; at runtime a request flows through
/// `SetRequestId` -> `PropagateRequestId` -> Trace -> `BodyLimit` -> Router.
fn apply_middleware_stack(router: Router, config: &ServerConfig) -> Router {
    let x_request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    // Oversized bodies surface as JSON rejections, i.e. malformed requests
    let router = router.layer(DefaultBodyLimit::max(config.body_limit_bytes));

    let router = apply_trace_layer(router);
    let router = router.layer(PropagateRequestIdLayer::new(x_request_id.clone()));
    router.layer(SetRequestIdLayer::new(x_request_id, MakeRequestUuid))
}

/// One `http_request` span per request with status and latency recorded.
fn apply_trace_layer(router: Router) -> Router {
    router.layer(
        TraceLayer::new_for_http()
            .make_span_with(|req: &Request<Body>| {
                let rid = req
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("n/a");

                tracing::info_span!(
                    "http_request",
                    method = %req.method(),
                    uri = %req.uri().path(),
                    version = ?req.version(),
                    request_id = %rid,
                    status = Empty,
                    latency_ms = Empty,
                )
            })
            .on_response(|res: &Response<Body>, latency: Duration, span: &tracing::Span| {
                span.record("status", res.status().as_u16());
                span.record("latency_ms", latency.as_millis());
            }),
    )
}

/// Bind, serve until a shutdown signal arrives, then drain gracefully.
///
/// # Errors
/// Returns an error if the bind address is invalid, the socket cannot be
/// bound, or the server fails while running.
pub async fn run(config: &ServerConfig) -> Result<()> {
    let addr = config.socket_addr()?;
    let router = build_router(config);

    let cancel = CancellationToken::new();
    shutdown::cancel_on_signal(cancel.clone());

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind HTTP server on {addr}"))?;
    tracing::info!("HTTP server bound on {}", listener.local_addr()?);

    let shutdown = async move {
        cancel.cancelled().await;
        tracing::info!("HTTP server shutting down gracefully (cancellation)");
    };

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| anyhow::anyhow!(e))
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use axum::http::{StatusCode, header};
    use serde_json::Value;
    use tower::ServiceExt as _;

    fn router_with_limit(body_limit_bytes: usize) -> Router {
        build_router(&ServerConfig {
            body_limit_bytes,
            ..ServerConfig::default()
        })
    }

    fn post_add(body: String) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/add")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn request_id_is_generated_and_propagated() {
        let response = router_with_limit(1024)
            .oneshot(post_add(r#"{"a": 1, "b": 2}"#.to_owned()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key(REQUEST_ID_HEADER));
    }

    #[tokio::test]
    async fn incoming_request_id_is_kept() {
        let mut request = post_add(r#"{"a": 1, "b": 2}"#.to_owned());
        request
            .headers_mut()
            .insert(REQUEST_ID_HEADER, "req-123".parse().unwrap());
        let response = router_with_limit(1024).oneshot(request).await.unwrap();
        assert_eq!(response.headers()[REQUEST_ID_HEADER], "req-123");
    }

    #[tokio::test]
    async fn oversized_body_is_a_malformed_request() {
        let padding = " ".repeat(2048);
        let body = format!(r#"{{"a": 1,{padding}"b": 2}}"#);
        let response = router_with_limit(256).oneshot(post_add(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["error"], "Invalid or missing numeric input.");
    }
}
