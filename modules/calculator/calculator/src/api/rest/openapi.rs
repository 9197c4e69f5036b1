//! OpenAPI document for the calculator REST API

use utoipa::OpenApi;

use super::dto::{ErrorResponse, HealthResponse, OperationRequest, OperationResponse};
use super::handlers;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Calculator API",
        description = "Add, subtract, multiply and divide two numbers"
    ),
    paths(
        handlers::add,
        handlers::subtract,
        handlers::multiply,
        handlers::divide,
        handlers::health,
    ),
    components(schemas(OperationRequest, OperationResponse, ErrorResponse, HealthResponse)),
    tags(
        (name = "calculator", description = "Arithmetic operations"),
        (name = "health", description = "Liveness probes"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_operation() {
        let doc = ApiDoc::openapi();
        for path in ["/add", "/subtract", "/multiply", "/divide", "/health"] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }

        let schemas = doc.components.expect("components").schemas;
        assert!(schemas.contains_key("OperationRequest"));
        assert!(schemas.contains_key("ErrorResponse"));
    }
}
