pub mod dto;
pub mod error;
pub mod handlers;
pub mod openapi;
pub mod routes;

pub use dto::{ErrorResponse, HealthResponse, OperationRequest, OperationResponse};
pub use error::{ApiError, ApiResult};
pub use routes::register_routes;
