//! twin-api - REST API layer for the car twin state service
//!
//! This crate provides the HTTP layer over [`twin_core`]'s state store and
//! metrics aggregator.
//!
//! # Usage
//!
//! ```ignore
//! use twin_api::{create_router, AppState};
//!
//! let state = AppState::new();
//! let router = create_router(state);
//! ```

pub mod error;
pub mod handlers;
pub mod state;

pub use error::ApiError;
pub use state::AppState;

use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Create the car twin REST API router with the given application state.
///
/// Every response, including errors and CORS preflights, carries permissive
/// cross-origin headers so browser-based simulation frontends can call the
/// API from any origin.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(|| async { "OK" }))
        // Service metadata (with and without trailing slash)
        .route("/api", get(handlers::info::describe_api))
        .route("/api/", get(handlers::info::describe_api))
        // Car state routes
        .route(
            "/api/car-state",
            get(handlers::car_state::list_states).post(handlers::car_state::create_state),
        )
        .route(
            "/api/car-state/{state_id}",
            get(handlers::car_state::get_state),
        )
        // Metrics route
        .route("/api/metrics", get(handlers::metrics::get_metrics))
        // Unknown routes get the standard JSON error shape
        .fallback(handlers::unknown_route)
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
