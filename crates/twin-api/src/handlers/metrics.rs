//! Metrics handler

use axum::extract::State;
use axum::Json;
use twin_core::MetricsSnapshot;

use crate::state::AppState;

/// GET /api/metrics
/// Compute summary statistics over all recorded states
pub async fn get_metrics(State(state): State<AppState>) -> Json<MetricsSnapshot> {
    let records = state.store().list(None);
    Json(state.metrics().compute(&records))
}
