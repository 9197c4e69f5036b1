//! Calculator module definition

use std::sync::Arc;

use axum::Router;
use calculator_sdk::CalculatorApi;

use crate::api::rest::routes;
use crate::domain::Service;

/// Calculator module.
///
/// Owns the calculator implementation and registers the REST routes that
/// expose it. The default instance uses the domain [`Service`].
#[derive(Clone)]
pub struct CalculatorModule {
    api: Arc<dyn CalculatorApi>,
}

impl Default for CalculatorModule {
    fn default() -> Self {
        Self::new(Arc::new(Service::new()))
    }
}

impl CalculatorModule {
    /// Create the module around a specific calculator implementation.
    #[must_use]
    pub fn new(api: Arc<dyn CalculatorApi>) -> Self {
        Self { api }
    }

    #[must_use]
    pub fn api(&self) -> Arc<dyn CalculatorApi> {
        Arc::clone(&self.api)
    }

    /// Add the calculator routes to `router`.
    #[must_use]
    pub fn register_rest(&self, router: Router) -> Router {
        tracing::info!("Registering calculator REST routes");
        routes::register_routes(router, self.api())
    }
}
