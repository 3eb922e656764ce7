//! Route definitions

use axum::{Router, routing::get};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Liveness
        .route("/", get(handlers::health::liveness))
        // Forecast API
        .route("/api/areainfo/{id}", get(handlers::forecast::area_forecast))
        // Attach state
        .with_state(state)
}

/// Cross-origin policy: every origin, method and header is allowed
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Create the router with tracing and CORS applied
pub fn create_app(state: AppState) -> Router {
    create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
}
