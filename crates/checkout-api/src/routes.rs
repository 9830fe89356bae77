//! # Routes
//!
//! Axum router configuration for the top-up checkout API.

use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Create the main application router
///
/// Routes:
/// - GET  /health - Health check
/// - GET  /createCheckout - Create a top-up checkout session
/// - POST /createCheckout - Same handler; the original endpoint accepted both
pub fn create_router(state: AppState) -> Router {
    // CORS: the endpoint is called cross-origin from the web and mobile
    // front-ends, so all origins are allowed.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health))
        .route("/", get(handlers::health))
        .route(
            "/createCheckout",
            get(handlers::create_checkout).post(handlers::create_checkout),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    // Router behavior is covered by the axum-test integration tests in
    // tests/http_api.rs.
}
