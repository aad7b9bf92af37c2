//! Service metadata handler

use std::collections::BTreeMap;

use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct ApiInfoResponse {
    pub message: String,
    pub version: String,
    /// Available endpoints: "METHOD /path" -> description
    pub endpoints: BTreeMap<String, String>,
}

/// GET /api
/// Describe the service and its endpoints
pub async fn describe_api() -> Json<ApiInfoResponse> {
    let endpoints = [
        ("GET /api/", "API information"),
        ("POST /api/car-state", "Save car simulation state"),
        ("GET /api/car-state", "Get saved car states"),
        ("GET /api/car-state/:id", "Get specific car state"),
        ("GET /api/metrics", "Get simulation metrics"),
    ]
    .into_iter()
    .map(|(route, description)| (route.to_string(), description.to_string()))
    .collect();

    Json(ApiInfoResponse {
        message: "Digital Twin Car API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints,
    })
}
