//! HTTP request handlers for the car twin API

pub mod car_state;
pub mod info;
pub mod metrics;

use axum::http::Uri;

use crate::error::ApiError;

/// Fallback for requests that match no route
pub async fn unknown_route(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("Route {} not found", uri.path()))
}
